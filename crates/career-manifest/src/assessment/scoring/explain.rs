use std::collections::BTreeMap;
use std::fmt::Write as _;

use serde::{Deserialize, Serialize};

use super::super::catalog::WeightCatalog;
use super::super::domain::{Career, Feature, FeatureVector, UserProfile};
use super::ranking::RankedCareer;
use super::risk::RiskPenalty;
use super::round_to;

const SUMMARY_POSITIVE_FACTORS: usize = 4;
const DRAG_THRESHOLD: f64 = 0.05;
const EXPLAINED_CAREERS: usize = 3;

/// Signed contribution of one feature to a career's raw score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FeatureContribution {
    pub feature: Feature,
    pub user_value: f64,
    pub career_weight: f64,
    pub contribution: f64,
    /// Share of the total positive contribution. Zero for drags.
    pub percentage: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Explanation {
    pub career: Career,
    pub top_factors: Vec<FeatureContribution>,
    pub summary: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub penalties: Vec<RiskPenalty>,
}

pub fn explain(
    career: Career,
    profile: &UserProfile,
    weights: &FeatureVector,
    penalties: &[RiskPenalty],
) -> Explanation {
    let mut total_positive = 0.0;
    let mut factors: Vec<FeatureContribution> = Feature::ALL
        .into_iter()
        .map(|feature| {
            let value = profile.get(feature);
            let contribution = value * weights[feature];
            if contribution > 0.0 {
                total_positive += contribution;
            }
            FeatureContribution {
                feature,
                user_value: round_to(value, 3),
                career_weight: weights[feature],
                contribution: round_to(contribution, 3),
                percentage: 0.0,
            }
        })
        .collect();

    if total_positive > 0.0 {
        for factor in factors.iter_mut().filter(|factor| factor.contribution > 0.0) {
            factor.percentage = round_to(factor.contribution / total_positive * 100.0, 2);
        }
    }

    factors.sort_by(|left, right| {
        right
            .contribution
            .abs()
            .total_cmp(&left.contribution.abs())
    });

    let summary = summarize(career, &factors, total_positive, penalties);

    Explanation {
        career,
        top_factors: factors,
        summary,
        penalties: penalties.to_vec(),
    }
}

/// Explanations for the first three ranked careers.
pub fn explain_top(
    rankings: &[RankedCareer],
    profile: &UserProfile,
    catalog: &WeightCatalog,
    penalties: &BTreeMap<Career, Vec<RiskPenalty>>,
) -> Vec<Explanation> {
    rankings
        .iter()
        .take(EXPLAINED_CAREERS)
        .map(|ranked| {
            let applied = penalties
                .get(&ranked.career)
                .map(Vec::as_slice)
                .unwrap_or_default();
            explain(
                ranked.career,
                profile,
                &catalog.weights_for(ranked.career),
                applied,
            )
        })
        .collect()
}

fn summarize(
    career: Career,
    factors: &[FeatureContribution],
    total_positive: f64,
    penalties: &[RiskPenalty],
) -> String {
    let mut summary = format!("{} recommended because:", career.label());

    for factor in factors
        .iter()
        .filter(|factor| factor.contribution > 0.0)
        .take(SUMMARY_POSITIVE_FACTORS)
    {
        let _ = write!(
            summary,
            "\n• {} (+{:.0}%)",
            factor.feature.label(),
            factor.percentage
        );
    }

    for factor in factors
        .iter()
        .filter(|factor| factor.contribution < 0.0 && factor.contribution.abs() > DRAG_THRESHOLD)
    {
        let drag = if total_positive > 0.0 {
            (factor.contribution / total_positive).abs() * 100.0
        } else {
            0.0
        };
        let _ = write!(
            summary,
            "\n• {} (caution: {:.0}% drag)",
            factor.feature.label(),
            drag
        );
    }

    if !penalties.is_empty() {
        summary.push_str("\n\nRisk adjustments:");
        for penalty in penalties {
            let _ = write!(summary, "\n• -{:.0}%: {}", penalty.penalty * 100.0, penalty.reason);
        }
    }

    summary
}
