use std::collections::BTreeMap;

use super::domain::Feature;
use super::version::FEATURE_MAP_VERSION;

/// One `(feature, weight)` contribution emitted by a selected option.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeatureWeight {
    pub feature: Feature,
    pub weight: f64,
}

/// Static table translating `(display order, option index)` into feature contributions.
///
/// A single option may touch several features at once. Lookups that miss the table
/// contribute nothing.
#[derive(Debug, Clone)]
pub struct FeatureMap {
    version: String,
    questions: BTreeMap<u32, Vec<Vec<FeatureWeight>>>,
}

impl FeatureMap {
    pub fn new(version: impl Into<String>) -> Self {
        Self {
            version: version.into(),
            questions: BTreeMap::new(),
        }
    }

    /// Register the option table for one display order. Index `i` holds option `i`.
    pub fn with_question(mut self, display_order: u32, options: Vec<Vec<FeatureWeight>>) -> Self {
        self.questions.insert(display_order, options);
        self
    }

    pub fn lookup(&self, display_order: u32, option: usize) -> Option<&[FeatureWeight]> {
        self.questions
            .get(&display_order)
            .and_then(|options| options.get(option))
            .map(Vec::as_slice)
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn question_count(&self) -> usize {
        self.questions.len()
    }

    /// The production mapping for the 30-question assessment.
    pub fn standard() -> Self {
        standard_option_tables()
            .into_iter()
            .fold(Self::new(FEATURE_MAP_VERSION), |map, (order, options)| {
                map.with_question(order, options)
            })
    }
}

fn opt(pairs: &[(Feature, f64)]) -> Vec<FeatureWeight> {
    pairs
        .iter()
        .map(|(feature, weight)| FeatureWeight {
            feature: *feature,
            weight: *weight,
        })
        .collect()
}

fn standard_option_tables() -> Vec<(u32, Vec<Vec<FeatureWeight>>)> {
    use Feature::{
        AbroadInterest as Abroad, AcademicStrength as Academic, CareerInstability as Instability,
        FinancialPressure as Finance, GovtInterest as Govt, IncomeUrgency as Urgency,
        LeadershipScore as Leadership, RiskTolerance as Risk, TechAffinity as Tech,
    };

    vec![
        // Academic background.
        (
            1,
            vec![
                opt(&[(Academic, 0.10)]),
                opt(&[(Academic, 0.30)]),
                opt(&[(Academic, 0.55)]),
                opt(&[(Academic, 0.80), (Abroad, 0.15)]),
                opt(&[(Academic, 1.00), (Abroad, 0.25)]),
            ],
        ),
        (
            2,
            vec![
                opt(&[(Tech, 0.90), (Academic, 0.70), (Abroad, 0.30)]),
                opt(&[(Tech, 0.30), (Academic, 0.60), (Abroad, 0.20)]),
                opt(&[(Tech, 0.20), (Academic, 0.50), (Leadership, 0.40)]),
                opt(&[(Tech, 0.10), (Academic, 0.35), (Leadership, 0.30)]),
                opt(&[(Tech, 0.05), (Academic, 0.30), (Govt, 0.40)]),
            ],
        ),
        (
            3,
            vec![
                opt(&[(Tech, 1.00), (Academic, 0.70), (Abroad, 0.35)]),
                opt(&[(Tech, 0.50), (Academic, 0.65), (Abroad, 0.25)]),
                opt(&[(Tech, 0.10), (Leadership, 0.50), (Academic, 0.45)]),
                opt(&[(Tech, 0.20), (Academic, 0.55), (Abroad, 0.15)]),
                opt(&[(Tech, 0.05), (Academic, 0.30), (Govt, 0.35)]),
            ],
        ),
        (
            4,
            vec![
                opt(&[(Academic, 0.15)]),
                opt(&[(Academic, 0.35)]),
                opt(&[(Academic, 0.55)]),
                opt(&[(Academic, 0.80), (Abroad, 0.15)]),
                opt(&[(Academic, 1.00), (Abroad, 0.25)]),
            ],
        ),
        (
            5,
            vec![
                opt(&[(Academic, 0.20)]),
                opt(&[(Academic, 0.65), (Tech, 0.50)]),
                opt(&[(Academic, 0.60), (Leadership, 0.60)]),
                opt(&[(Academic, 0.75), (Tech, 0.40), (Abroad, 0.20)]),
                opt(&[(Academic, 0.55), (Govt, 0.90)]),
            ],
        ),
        (
            6,
            vec![
                opt(&[(Tech, 0.00)]),
                opt(&[(Tech, 0.25)]),
                opt(&[(Tech, 0.55), (Instability, 0.10)]),
                opt(&[(Tech, 0.80), (Instability, 0.15)]),
                opt(&[(Tech, 1.00), (Instability, 0.20), (Abroad, 0.15)]),
            ],
        ),
        (
            7,
            vec![
                opt(&[(Academic, 0.20), (Abroad, 0.05)]),
                opt(&[(Academic, 0.40), (Abroad, 0.20)]),
                opt(&[(Academic, 0.70), (Abroad, 0.60)]),
                opt(&[(Academic, 0.85), (Abroad, 0.85)]),
            ],
        ),
        (
            8,
            vec![
                opt(&[(Academic, 0.20), (Leadership, 0.10)]),
                opt(&[(Academic, 0.50), (Leadership, 0.30), (Tech, 0.20)]),
                opt(&[(Academic, 0.55), (Leadership, 0.60), (Tech, 0.30)]),
                opt(&[(Academic, 0.50), (Leadership, 0.85), (Tech, 0.35)]),
            ],
        ),
        // Financial situation.
        (
            9,
            vec![
                opt(&[(Finance, 0.10), (Urgency, 0.10)]),
                opt(&[(Finance, 0.35), (Urgency, 0.30)]),
                opt(&[(Finance, 0.65), (Urgency, 0.60), (Govt, 0.15)]),
                opt(&[(Finance, 0.90), (Urgency, 0.85), (Govt, 0.25)]),
            ],
        ),
        (
            10,
            vec![
                opt(&[(Finance, 0.05), (Urgency, 0.05)]),
                opt(&[(Finance, 0.30), (Urgency, 0.25)]),
                opt(&[(Finance, 0.65), (Urgency, 0.60), (Govt, 0.20)]),
                opt(&[(Finance, 0.95), (Urgency, 0.90), (Govt, 0.30)]),
            ],
        ),
        (
            11,
            vec![
                opt(&[(Urgency, 0.05), (Abroad, 0.20)]),
                opt(&[(Urgency, 0.30)]),
                opt(&[(Urgency, 0.70), (Govt, 0.15)]),
                opt(&[(Urgency, 1.00), (Govt, 0.20)]),
            ],
        ),
        (
            12,
            vec![
                opt(&[(Finance, 0.05)]),
                opt(&[(Finance, 0.30)]),
                opt(&[(Finance, 0.55)]),
                opt(&[(Finance, 0.85)]),
            ],
        ),
        (
            13,
            vec![
                opt(&[(Finance, 0.90), (Urgency, 0.80), (Govt, 0.25)]),
                opt(&[(Finance, 0.60), (Urgency, 0.55), (Govt, 0.15)]),
                opt(&[(Finance, 0.30), (Urgency, 0.25)]),
                opt(&[(Finance, 0.10), (Urgency, 0.10), (Abroad, 0.15)]),
                opt(&[(Finance, 0.02), (Urgency, 0.02), (Abroad, 0.25)]),
            ],
        ),
        (
            14,
            vec![
                opt(&[(Finance, 0.40), (Abroad, 0.05), (Govt, 0.20)]),
                opt(&[(Finance, 0.25), (Abroad, 0.15), (Govt, 0.10)]),
                opt(&[(Finance, 0.10), (Abroad, 0.35), (Tech, 0.20)]),
                opt(&[(Finance, 0.05), (Abroad, 0.55), (Leadership, 0.30), (Tech, 0.30)]),
            ],
        ),
        // Personality and risk.
        (
            15,
            vec![
                opt(&[(Risk, 0.05), (Govt, 0.55)]),
                opt(&[(Risk, 0.20), (Govt, 0.35)]),
                opt(&[(Risk, 0.50)]),
                opt(&[(Risk, 0.75), (Instability, 0.20)]),
                opt(&[(Risk, 1.00), (Instability, 0.35)]),
            ],
        ),
        (
            16,
            vec![
                opt(&[(Leadership, 0.10)]),
                opt(&[(Leadership, 0.35)]),
                opt(&[(Leadership, 0.70), (Instability, 0.15)]),
                opt(&[(Leadership, 1.00), (Instability, 0.25)]),
            ],
        ),
        (
            17,
            vec![
                opt(&[(Risk, 0.05), (Instability, 0.05), (Govt, 0.60)]),
                opt(&[(Risk, 0.25), (Instability, 0.25), (Govt, 0.25)]),
                opt(&[(Risk, 0.55), (Instability, 0.50), (Abroad, 0.15)]),
                opt(&[(Risk, 0.85), (Instability, 0.80), (Abroad, 0.20)]),
            ],
        ),
        (
            18,
            vec![
                opt(&[(Risk, 0.10), (Leadership, 0.05)]),
                opt(&[(Risk, 0.25), (Leadership, 0.20)]),
                opt(&[(Risk, 0.55), (Leadership, 0.50)]),
                opt(&[(Risk, 0.80), (Leadership, 0.70), (Instability, 0.20)]),
            ],
        ),
        (
            19,
            vec![
                opt(&[(Govt, 0.50), (Risk, 0.05)]),
                opt(&[(Risk, 0.25), (Govt, 0.20)]),
                opt(&[(Risk, 0.55), (Leadership, 0.35)]),
                opt(&[(Risk, 0.80), (Leadership, 0.50), (Instability, 0.30)]),
            ],
        ),
        (
            20,
            vec![
                opt(&[(Govt, 0.40), (Tech, 0.05)]),
                opt(&[(Tech, 0.30)]),
                opt(&[(Tech, 0.65), (Academic, 0.30), (Abroad, 0.15)]),
                opt(&[(Tech, 0.85), (Academic, 0.40), (Abroad, 0.25)]),
            ],
        ),
        (
            21,
            vec![
                opt(&[(Govt, 0.30)]),
                opt(&[(Academic, 0.20)]),
                opt(&[(Academic, 0.45), (Tech, 0.30)]),
                opt(&[(Academic, 0.65), (Tech, 0.50), (Abroad, 0.20)]),
            ],
        ),
        (
            22,
            vec![
                opt(&[(Leadership, 0.10)]),
                opt(&[(Leadership, 0.30)]),
                opt(&[(Leadership, 0.65), (Govt, 0.10)]),
                opt(&[(Leadership, 0.90), (Govt, 0.15)]),
            ],
        ),
        // Career interest.
        (
            23,
            vec![
                opt(&[(Govt, 0.00), (Risk, 0.20)]),
                opt(&[(Govt, 0.20)]),
                opt(&[(Govt, 0.55), (Instability, 0.15)]),
                opt(&[(Govt, 0.80), (Instability, 0.10)]),
                opt(&[(Govt, 1.00)]),
            ],
        ),
        (
            24,
            vec![
                opt(&[(Risk, 0.05), (Govt, 0.15)]),
                opt(&[(Risk, 0.20), (Leadership, 0.15)]),
                opt(&[(Risk, 0.50), (Leadership, 0.40), (Instability, 0.40), (Tech, 0.15)]),
                opt(&[(Risk, 0.75), (Leadership, 0.65), (Instability, 0.60), (Tech, 0.25)]),
                opt(&[(Risk, 0.90), (Leadership, 0.80), (Instability, 0.75), (Tech, 0.30)]),
            ],
        ),
        (
            25,
            vec![
                opt(&[(Tech, 0.05)]),
                opt(&[(Tech, 0.25)]),
                opt(&[(Tech, 0.55), (Leadership, 0.20), (Abroad, 0.20)]),
                opt(&[(Tech, 0.75), (Leadership, 0.35), (Abroad, 0.30)]),
            ],
        ),
        (
            26,
            vec![
                opt(&[(Academic, 0.10)]),
                opt(&[(Academic, 0.30)]),
                opt(&[(Academic, 0.65), (Govt, 0.10)]),
                opt(&[(Academic, 0.90), (Govt, 0.15)]),
            ],
        ),
        (
            27,
            vec![
                opt(&[(Abroad, 0.00), (Govt, 0.30)]),
                opt(&[(Abroad, 0.30)]),
                opt(&[(Abroad, 0.75), (Tech, 0.15)]),
                opt(&[(Abroad, 1.00), (Tech, 0.20)]),
            ],
        ),
        (
            28,
            vec![
                opt(&[(Urgency, 0.60), (Finance, 0.30), (Govt, 0.20)]),
                opt(&[(Urgency, 0.35), (Govt, 0.15)]),
                opt(&[(Tech, 0.30), (Leadership, 0.20)]),
                opt(&[(Leadership, 0.45), (Abroad, 0.30), (Tech, 0.20)]),
                opt(&[(Abroad, 0.55), (Leadership, 0.40), (Tech, 0.35)]),
            ],
        ),
        (
            29,
            vec![
                opt(&[(Tech, 0.95)]),
                opt(&[(Leadership, 0.65), (Tech, 0.15)]),
                opt(&[(Govt, 0.90)]),
                opt(&[(Academic, 0.40), (Abroad, 0.30)]),
                opt(&[(Academic, 0.70), (Govt, 0.15)]),
            ],
        ),
        (
            30,
            vec![
                opt(&[(Tech, 0.90), (Academic, 0.30)]),
                opt(&[(Leadership, 0.85), (Tech, 0.15)]),
                opt(&[(Govt, 1.00)]),
                opt(&[(Risk, 0.85), (Leadership, 0.75), (Instability, 0.55)]),
                opt(&[(Academic, 0.85), (Govt, 0.15)]),
                opt(&[(Abroad, 0.95), (Tech, 0.30)]),
            ],
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_map_covers_every_display_order() {
        let map = FeatureMap::standard();
        assert_eq!(map.question_count(), 30);
        for order in 1..=30 {
            assert!(map.lookup(order, 0).is_some(), "question {order} missing");
        }
        assert_eq!(map.version(), FEATURE_MAP_VERSION);
    }

    #[test]
    fn options_can_touch_several_features() {
        let map = FeatureMap::standard();
        let weights = map.lookup(24, 4).expect("option present");
        let features: Vec<Feature> = weights.iter().map(|weight| weight.feature).collect();
        assert_eq!(
            features,
            vec![
                Feature::RiskTolerance,
                Feature::LeadershipScore,
                Feature::CareerInstability,
                Feature::TechAffinity,
            ]
        );
    }

    #[test]
    fn unmapped_positions_return_none() {
        let map = FeatureMap::standard();
        assert!(map.lookup(31, 0).is_none());
        assert!(map.lookup(7, 4).is_none());
        assert!(map.lookup(30, 6).is_none());
    }
}
