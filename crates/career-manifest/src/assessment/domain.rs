use std::fmt;
use std::ops::{Index, IndexMut};

use serde::{Deserialize, Serialize};

/// Number of dimensions in a [`UserProfile`].
pub const FEATURE_COUNT: usize = 9;

/// Identifier wrapper for catalog questions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QuestionId(pub u64);

/// Cosmetic grouping shown alongside a question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionCategory {
    Academic,
    Financial,
    Personality,
    CareerInterest,
}

/// Catalog question as supplied by the content system.
///
/// `display_order` (1..=30) keys the static feature map; the option labels are only used for
/// rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub id: QuestionId,
    pub display_order: u32,
    pub category: QuestionCategory,
    pub prompt: String,
    pub options: Vec<String>,
}

/// One selected option for one question in a submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Answer {
    pub question_id: QuestionId,
    pub selected: usize,
}

impl Answer {
    pub const fn new(question_id: u64, selected: usize) -> Self {
        Self {
            question_id: QuestionId(question_id),
            selected,
        }
    }
}

/// Closed set of profile dimensions. Discriminants double as vector indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Feature {
    #[serde(rename = "Academic Strength")]
    AcademicStrength,
    #[serde(rename = "Financial Pressure")]
    FinancialPressure,
    #[serde(rename = "Risk Tolerance")]
    RiskTolerance,
    #[serde(rename = "Leadership")]
    LeadershipScore,
    #[serde(rename = "Tech Affinity")]
    TechAffinity,
    #[serde(rename = "Govt Interest")]
    GovtInterest,
    #[serde(rename = "Abroad Interest")]
    AbroadInterest,
    #[serde(rename = "Income Urgency")]
    IncomeUrgency,
    #[serde(rename = "Career Instability")]
    CareerInstability,
}

impl Feature {
    pub const ALL: [Feature; FEATURE_COUNT] = [
        Feature::AcademicStrength,
        Feature::FinancialPressure,
        Feature::RiskTolerance,
        Feature::LeadershipScore,
        Feature::TechAffinity,
        Feature::GovtInterest,
        Feature::AbroadInterest,
        Feature::IncomeUrgency,
        Feature::CareerInstability,
    ];

    pub const fn index(self) -> usize {
        self as usize
    }

    pub const fn label(self) -> &'static str {
        match self {
            Feature::AcademicStrength => "Academic Strength",
            Feature::FinancialPressure => "Financial Pressure",
            Feature::RiskTolerance => "Risk Tolerance",
            Feature::LeadershipScore => "Leadership",
            Feature::TechAffinity => "Tech Affinity",
            Feature::GovtInterest => "Govt Interest",
            Feature::AbroadInterest => "Abroad Interest",
            Feature::IncomeUrgency => "Income Urgency",
            Feature::CareerInstability => "Career Instability",
        }
    }
}

impl fmt::Display for Feature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Fixed-size vector over [`Feature`], used for both profiles and career weights.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FeatureVector([f64; FEATURE_COUNT]);

impl FeatureVector {
    pub const fn new(values: [f64; FEATURE_COUNT]) -> Self {
        Self(values)
    }

    pub const fn zero() -> Self {
        Self([0.0; FEATURE_COUNT])
    }

    /// Standard dot product, summed in feature order.
    pub fn dot(&self, other: &FeatureVector) -> f64 {
        self.0
            .iter()
            .zip(other.0.iter())
            .map(|(left, right)| left * right)
            .sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Feature, f64)> + '_ {
        Feature::ALL
            .iter()
            .zip(self.0.iter())
            .map(|(feature, value)| (*feature, *value))
    }

    pub const fn as_array(&self) -> &[f64; FEATURE_COUNT] {
        &self.0
    }
}

impl Index<Feature> for FeatureVector {
    type Output = f64;

    fn index(&self, feature: Feature) -> &Self::Output {
        &self.0[feature.index()]
    }
}

impl IndexMut<Feature> for FeatureVector {
    fn index_mut(&mut self, feature: Feature) -> &mut Self::Output {
        &mut self.0[feature.index()]
    }
}

/// Aggregated student profile. Every feature is kept within `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct UserProfile {
    features: FeatureVector,
}

impl UserProfile {
    /// Build a profile, clamping each value into `[0, 1]`.
    pub fn from_features(features: FeatureVector) -> Self {
        let mut clamped = features;
        for feature in Feature::ALL {
            clamped[feature] = clamp_unit(clamped[feature]);
        }
        Self { features: clamped }
    }

    /// Builder used by fixtures and the CLI to pin individual features.
    pub fn with(mut self, feature: Feature, value: f64) -> Self {
        self.features[feature] = clamp_unit(value);
        self
    }

    pub fn get(&self, feature: Feature) -> f64 {
        self.features[feature]
    }

    pub const fn features(&self) -> &FeatureVector {
        &self.features
    }
}

fn clamp_unit(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 1.0)
    }
}

/// Career archetypes in their canonical order. Ranking ties fall back to this order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Career {
    #[serde(rename = "IT / Software Jobs")]
    It,
    #[serde(rename = "MBA (India)")]
    Mba,
    #[serde(rename = "Government Exams")]
    Government,
    #[serde(rename = "Startup / Entrepreneurship")]
    Startup,
    #[serde(rename = "Higher Studies (India)")]
    HigherStudies,
    #[serde(rename = "MS Abroad")]
    MsAbroad,
    #[serde(rename = "Data Science / AI")]
    DataScience,
    #[serde(rename = "Creative / Design")]
    Creative,
    #[serde(rename = "Healthcare / Medicine")]
    Healthcare,
}

impl Career {
    pub const ALL: [Career; 9] = [
        Career::It,
        Career::Mba,
        Career::Government,
        Career::Startup,
        Career::HigherStudies,
        Career::MsAbroad,
        Career::DataScience,
        Career::Creative,
        Career::Healthcare,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            Career::It => "IT / Software Jobs",
            Career::Mba => "MBA (India)",
            Career::Government => "Government Exams",
            Career::Startup => "Startup / Entrepreneurship",
            Career::HigherStudies => "Higher Studies (India)",
            Career::MsAbroad => "MS Abroad",
            Career::DataScience => "Data Science / AI",
            Career::Creative => "Creative / Design",
            Career::Healthcare => "Healthcare / Medicine",
        }
    }

    /// Resolve a stored label (including the legacy string categories) back to a career.
    pub fn from_label(label: &str) -> Option<Self> {
        let trimmed = label.trim();
        Self::ALL
            .into_iter()
            .find(|career| career.label().eq_ignore_ascii_case(trimmed))
    }
}

impl fmt::Display for Career {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn profile_construction_clamps_out_of_range_values() {
        let mut raw = FeatureVector::zero();
        raw[Feature::TechAffinity] = 1.7;
        raw[Feature::IncomeUrgency] = -0.4;
        raw[Feature::GovtInterest] = f64::NAN;

        let profile = UserProfile::from_features(raw);

        assert_eq!(profile.get(Feature::TechAffinity), 1.0);
        assert_eq!(profile.get(Feature::IncomeUrgency), 0.0);
        assert_eq!(profile.get(Feature::GovtInterest), 0.0);
    }

    #[test]
    fn dot_product_sums_pairwise_products() {
        let left = FeatureVector::new([1.0, 2.0, 0.0, 0.0, 0.5, 0.0, 0.0, 0.0, 1.0]);
        let right = FeatureVector::new([0.5, -0.25, 9.0, 9.0, 2.0, 9.0, 9.0, 9.0, 0.1]);

        assert!((left.dot(&right) - 1.1).abs() < 1e-12);
    }

    #[test]
    fn career_labels_round_trip() {
        for career in Career::ALL {
            assert_eq!(Career::from_label(career.label()), Some(career));
        }
        assert_eq!(Career::from_label("ms abroad"), Some(Career::MsAbroad));
        assert_eq!(Career::from_label("Astronaut"), None);
    }

    #[test]
    fn feature_serializes_with_display_label() {
        let json = serde_json::to_string(&Feature::LeadershipScore).expect("serializes");
        assert_eq!(json, "\"Leadership\"");
    }
}
