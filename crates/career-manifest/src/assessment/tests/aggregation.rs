use super::common::{answers_choosing, questions};
use crate::assessment::aggregator::FeatureAggregator;
use crate::assessment::domain::{
    Answer, Feature, Question, QuestionCategory, QuestionId, UserProfile,
};
use crate::assessment::features::{FeatureMap, FeatureWeight};

fn approx(left: f64, right: f64) -> bool {
    (left - right).abs() < 1e-9
}

#[test]
fn single_answer_sets_each_touched_feature() {
    let aggregator = FeatureAggregator::default();

    let profile = aggregator.aggregate(&[Answer::new(1, 4)], &questions());

    assert!(approx(profile.get(Feature::AcademicStrength), 1.0));
    assert!(approx(profile.get(Feature::AbroadInterest), 0.25));
    assert_eq!(profile.get(Feature::TechAffinity), 0.0);
}

#[test]
fn repeated_features_average_across_answers() {
    let aggregator = FeatureAggregator::default();

    let profile = aggregator.aggregate(&[Answer::new(1, 4), Answer::new(4, 0)], &questions());

    assert!(approx(profile.get(Feature::AcademicStrength), 0.575));
}

#[test]
fn zero_weight_entries_still_count_toward_the_mean() {
    let aggregator = FeatureAggregator::default();

    // Q6 option 0 maps Tech Affinity to 0.0; Q29 option 0 maps it to 0.95.
    let profile = aggregator.aggregate(&[Answer::new(6, 0), Answer::new(29, 0)], &questions());

    assert!(approx(profile.get(Feature::TechAffinity), 0.475));
}

#[test]
fn unknown_questions_and_unmapped_options_are_ignored() {
    let aggregator = FeatureAggregator::default();
    let questions = questions();
    let base = vec![Answer::new(1, 4), Answer::new(29, 0)];

    let mut noisy = base.clone();
    noisy.push(Answer::new(999, 0));
    noisy.push(Answer::new(7, 9));

    assert_eq!(
        aggregator.aggregate(&base, &questions),
        aggregator.aggregate(&noisy, &questions)
    );
}

#[test]
fn empty_submission_yields_zero_profile() {
    let aggregator = FeatureAggregator::default();

    let profile = aggregator.aggregate(&[], &questions());

    assert_eq!(profile, UserProfile::default());
}

#[test]
fn every_answer_pattern_stays_within_unit_bounds() {
    let aggregator = FeatureAggregator::default();
    let questions = questions();

    for pick in 0..6 {
        let profile = aggregator.aggregate(&answers_choosing(pick), &questions);
        for (feature, value) in profile.features().iter() {
            assert!(
                (0.0..=1.0).contains(&value),
                "{feature:?} escaped bounds with option {pick}: {value}"
            );
        }
    }
}

#[test]
fn lookup_uses_display_order_rather_than_question_id() {
    let map = FeatureMap::new("test").with_question(
        1,
        vec![vec![FeatureWeight {
            feature: Feature::LeadershipScore,
            weight: 0.6,
        }]],
    );
    let aggregator = FeatureAggregator::new(map);
    let questions = vec![Question {
        id: QuestionId(500),
        display_order: 1,
        category: QuestionCategory::Personality,
        prompt: "Do you enjoy leading teams?".to_string(),
        options: vec!["Yes".to_string()],
    }];

    let profile = aggregator.aggregate(&[Answer::new(500, 0)], &questions);

    assert!(approx(profile.get(Feature::LeadershipScore), 0.6));
}

#[test]
fn out_of_range_map_weights_are_clamped() {
    let map = FeatureMap::new("test").with_question(
        1,
        vec![vec![
            FeatureWeight {
                feature: Feature::RiskTolerance,
                weight: 1.5,
            },
            FeatureWeight {
                feature: Feature::GovtInterest,
                weight: -0.4,
            },
        ]],
    );
    let aggregator = FeatureAggregator::new(map);

    let profile = aggregator.aggregate(&[Answer::new(1, 0)], &questions());

    assert_eq!(profile.get(Feature::RiskTolerance), 1.0);
    assert_eq!(profile.get(Feature::GovtInterest), 0.0);
}

#[test]
fn repeated_question_ids_resolve_to_the_first_catalog_entry() {
    let aggregator = FeatureAggregator::default();
    let standard = questions();
    let mut catalog = vec![standard[0].clone()];
    catalog.push(Question {
        id: standard[0].id,
        ..standard[28].clone()
    });

    let profile = aggregator.aggregate(&[Answer::new(1, 0)], &catalog);

    assert!(approx(profile.get(Feature::AcademicStrength), 0.10));
    assert_eq!(profile.get(Feature::TechAffinity), 0.0);
}
