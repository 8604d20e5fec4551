use serde::{Deserialize, Serialize};

use super::domain::{Career, Feature, UserProfile};
use super::enrichment::Enrichment;
use super::scoring::{round_to, Explanation, RiskResult};
use super::version::VersionInfo;

/// One ranked career as exposed to callers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CareerScore {
    pub category: Career,
    pub score: f64,
    /// Largest penalty-adjusted raw score in the run, shared by every row.
    pub max_score: f64,
    pub percentage: f64,
}

/// The nine profile features under stable snake_case keys, rounded to 3dp.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProfileSnapshot {
    pub academic_strength: f64,
    pub financial_pressure: f64,
    pub risk_tolerance: f64,
    pub leadership_score: f64,
    pub tech_affinity: f64,
    pub govt_interest: f64,
    pub abroad_interest: f64,
    pub income_urgency: f64,
    pub career_instability: f64,
}

impl From<&UserProfile> for ProfileSnapshot {
    fn from(profile: &UserProfile) -> Self {
        let value = |feature| round_to(profile.get(feature), 3);
        Self {
            academic_strength: value(Feature::AcademicStrength),
            financial_pressure: value(Feature::FinancialPressure),
            risk_tolerance: value(Feature::RiskTolerance),
            leadership_score: value(Feature::LeadershipScore),
            tech_affinity: value(Feature::TechAffinity),
            govt_interest: value(Feature::GovtInterest),
            abroad_interest: value(Feature::AbroadInterest),
            income_urgency: value(Feature::IncomeUrgency),
            career_instability: value(Feature::CareerInstability),
        }
    }
}

/// Complete, self-consistent outcome of one scoring run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssessmentResult {
    pub scores: Vec<CareerScore>,
    pub best_career_path: Career,
    pub confidence: f64,
    pub is_multi_fit: bool,
    pub risk: RiskResult,
    pub profile: ProfileSnapshot,
    pub explanations: Vec<Explanation>,
    #[serde(flatten)]
    pub enrichment: Enrichment,
    pub version: VersionInfo,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ai_explanation: Option<String>,
}

impl AssessmentResult {
    pub fn best_score(&self) -> Option<&CareerScore> {
        self.scores.first()
    }
}
