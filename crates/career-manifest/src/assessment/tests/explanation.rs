use std::collections::BTreeMap;

use super::common::{profile, tech_profile};
use crate::assessment::catalog::WeightCatalog;
use crate::assessment::domain::{Career, Feature, FeatureVector, UserProfile};
use crate::assessment::scoring::{
    explain, explain_top, normalize_and_rank, RawCareerScore, RiskPenalty,
};

fn it_weights() -> FeatureVector {
    WeightCatalog::standard().weights_for(Career::It)
}

#[test]
fn summary_lists_the_dominant_factor() {
    let profile = profile(0.0, &[(Feature::TechAffinity, 1.0)]);

    let explanation = explain(Career::It, &profile, &it_weights(), &[]);

    assert_eq!(
        explanation.summary,
        "IT / Software Jobs recommended because:\n• Tech Affinity (+100%)"
    );
    assert_eq!(explanation.top_factors[0].feature, Feature::TechAffinity);
    assert_eq!(explanation.top_factors[0].percentage, 100.0);
    assert_eq!(explanation.top_factors.len(), 9);
}

#[test]
fn drags_and_penalties_are_appended_in_order() {
    let profile = profile(
        0.0,
        &[(Feature::TechAffinity, 1.0), (Feature::GovtInterest, 0.5)],
    );
    let penalties = vec![RiskPenalty {
        penalty: 0.2,
        reason: "Urgent income need".to_string(),
    }];

    let explanation = explain(Career::It, &profile, &it_weights(), &penalties);

    assert_eq!(
        explanation.summary,
        "IT / Software Jobs recommended because:\n\
         • Tech Affinity (+100%)\n\
         • Govt Interest (caution: 12% drag)\n\
         \n\
         Risk adjustments:\n\
         • -20%: Urgent income need"
    );
    assert_eq!(explanation.penalties, penalties);
}

#[test]
fn small_drags_are_not_mentioned() {
    // Govt Interest 0.2 * -0.20 = -0.04, under the drag threshold.
    let profile = profile(
        0.0,
        &[(Feature::TechAffinity, 1.0), (Feature::GovtInterest, 0.2)],
    );

    let explanation = explain(Career::It, &profile, &it_weights(), &[]);

    assert!(!explanation.summary.contains("caution"));
}

#[test]
fn positive_percentages_sum_to_one_hundred() {
    let explanation = explain(Career::It, &tech_profile(), &it_weights(), &[]);

    let total: f64 = explanation
        .top_factors
        .iter()
        .filter(|factor| factor.contribution > 0.0)
        .map(|factor| factor.percentage)
        .sum();
    assert!((total - 100.0).abs() < 0.5, "percentages summed to {total}");

    for factor in explanation
        .top_factors
        .iter()
        .filter(|factor| factor.contribution <= 0.0)
    {
        assert_eq!(factor.percentage, 0.0);
    }
}

#[test]
fn factors_are_ordered_by_absolute_contribution() {
    let explanation = explain(Career::It, &tech_profile(), &it_weights(), &[]);

    assert_eq!(explanation.top_factors[0].feature, Feature::TechAffinity);
    assert!((explanation.top_factors[0].contribution - 0.8075).abs() < 1e-3);
    assert_eq!(explanation.top_factors[1].feature, Feature::AcademicStrength);
    assert!(explanation
        .top_factors
        .windows(2)
        .all(|pair| pair[0].contribution.abs() >= pair[1].contribution.abs()));
}

#[test]
fn zero_profile_has_header_only_summary() {
    let explanation = explain(Career::It, &UserProfile::default(), &it_weights(), &[]);

    assert_eq!(explanation.summary, "IT / Software Jobs recommended because:");
    assert!(explanation
        .top_factors
        .iter()
        .all(|factor| factor.percentage == 0.0));
}

#[test]
fn explanations_are_byte_identical_across_runs() {
    let profile = tech_profile();
    let penalties = vec![RiskPenalty {
        penalty: 0.15,
        reason: "High financial pressure makes MBA fees challenging".to_string(),
    }];

    let weights = WeightCatalog::standard().weights_for(Career::Mba);

    let first = explain(Career::Mba, &profile, &weights, &penalties);
    let second = explain(Career::Mba, &profile, &weights, &penalties);

    assert_eq!(first, second);
    assert_eq!(
        serde_json::to_string(&first).expect("serialize"),
        serde_json::to_string(&second).expect("serialize")
    );
}

#[test]
fn top_three_careers_are_explained_with_their_penalties() {
    let profile = tech_profile();
    let catalog = WeightCatalog::standard();
    let raw: Vec<RawCareerScore> = catalog
        .rows()
        .iter()
        .map(|row| RawCareerScore {
            career: row.career,
            score: profile.features().dot(&row.weights),
        })
        .collect();
    let ranked = normalize_and_rank(&raw);
    let mut penalties = BTreeMap::new();
    penalties.insert(
        ranked.rankings[1].career,
        vec![RiskPenalty {
            penalty: 0.1,
            reason: "test rule".to_string(),
        }],
    );

    let explanations = explain_top(&ranked.rankings, &profile, &catalog, &penalties);

    assert_eq!(explanations.len(), 3);
    for (explanation, ranked) in explanations.iter().zip(&ranked.rankings) {
        assert_eq!(explanation.career, ranked.career);
    }
    assert!(explanations[0].penalties.is_empty());
    assert_eq!(explanations[1].penalties.len(), 1);
    assert!(explanations[1].summary.ends_with("• -10%: test rule"));
}

#[test]
fn fewer_than_three_careers_explains_all_of_them() {
    let ranked = normalize_and_rank(&[RawCareerScore {
        career: Career::Creative,
        score: 0.3,
    }]);

    let explanations = explain_top(
        &ranked.rankings,
        &tech_profile(),
        &WeightCatalog::standard(),
        &BTreeMap::new(),
    );

    assert_eq!(explanations.len(), 1);
}

#[test]
fn empty_penalties_are_omitted_from_json() {
    let explanation = explain(Career::It, &tech_profile(), &it_weights(), &[]);

    let encoded = serde_json::to_value(&explanation).expect("serialize");

    assert!(encoded.get("penalties").is_none());
    assert_eq!(encoded["career"], "IT / Software Jobs");
    assert_eq!(encoded["top_factors"][0]["feature"], "Tech Affinity");
}
