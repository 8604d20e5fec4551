use std::collections::HashMap;

use tracing::debug;

use super::domain::{Answer, Feature, FeatureVector, Question, QuestionId, UserProfile, FEATURE_COUNT};
use super::features::FeatureMap;

/// Turns a submission into a [`UserProfile`] by mean-aggregating mapped option weights.
#[derive(Debug, Clone)]
pub struct FeatureAggregator {
    map: FeatureMap,
}

impl FeatureAggregator {
    pub fn new(map: FeatureMap) -> Self {
        Self { map }
    }

    pub fn feature_map(&self) -> &FeatureMap {
        &self.map
    }

    /// Each feature ends up as the mean of every weight that touched it, clamped to `[0, 1]`.
    /// Answers for unknown questions or unmapped options are skipped.
    pub fn aggregate(&self, answers: &[Answer], questions: &[Question]) -> UserProfile {
        let mut orders: HashMap<QuestionId, u32> = HashMap::with_capacity(questions.len());
        for question in questions {
            orders.entry(question.id).or_insert(question.display_order);
        }

        let mut sums = FeatureVector::zero();
        let mut counts = [0u32; FEATURE_COUNT];
        let mut skipped = 0usize;

        for answer in answers {
            let Some(weights) = orders
                .get(&answer.question_id)
                .and_then(|order| self.map.lookup(*order, answer.selected))
            else {
                skipped += 1;
                continue;
            };

            for entry in weights {
                sums[entry.feature] += entry.weight;
                counts[entry.feature.index()] += 1;
            }
        }

        let mut means = FeatureVector::zero();
        for feature in Feature::ALL {
            let count = counts[feature.index()];
            if count > 0 {
                means[feature] = sums[feature] / f64::from(count);
            }
        }

        debug!(
            answers = answers.len(),
            skipped,
            "aggregated assessment answers into profile"
        );

        UserProfile::from_features(means)
    }
}

impl Default for FeatureAggregator {
    fn default() -> Self {
        Self::new(FeatureMap::standard())
    }
}
