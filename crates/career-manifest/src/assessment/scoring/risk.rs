use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::super::domain::{Career, Feature, UserProfile};
use super::round_to;
use super::scorer::RawCareerScore;

const URGENCY_WEIGHT: f64 = 0.35;
const PRESSURE_WEIGHT: f64 = 0.25;
const TOLERANCE_WEIGHT: f64 = 0.20;
const INSTABILITY_WEIGHT: f64 = 0.20;

/// Coarse bucket for the 0-10 risk score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    /// Medium spans `[3.0, 6.0]`: exactly 3.0 and exactly 6.0 both classify as medium.
    pub fn classify(score: f64) -> Self {
        if score > 6.0 {
            RiskLevel::High
        } else if score >= 3.0 {
            RiskLevel::Medium
        } else {
            RiskLevel::Low
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            RiskLevel::Low => "Low",
            RiskLevel::Medium => "Medium",
            RiskLevel::High => "High",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Independent risk reading derived from four profile features.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskResult {
    pub score: f64,
    pub level: RiskLevel,
    pub factors: BTreeMap<String, f64>,
}

pub fn compute_risk(profile: &UserProfile) -> RiskResult {
    let urgency = profile.get(Feature::IncomeUrgency) * 10.0;
    let pressure = profile.get(Feature::FinancialPressure) * 10.0;
    let tolerance = profile.get(Feature::RiskTolerance) * 10.0;
    let instability = profile.get(Feature::CareerInstability) * 10.0;

    let score = round_to(
        urgency * URGENCY_WEIGHT
            + pressure * PRESSURE_WEIGHT
            + tolerance * TOLERANCE_WEIGHT
            + instability * INSTABILITY_WEIGHT,
        2,
    );

    let factors = [
        ("income_urgency", urgency),
        ("financial_pressure", pressure),
        ("risk_tolerance", tolerance),
        ("career_instability", instability),
    ]
    .into_iter()
    .map(|(name, value)| (name.to_string(), round_to(value, 2)))
    .collect();

    RiskResult {
        score,
        level: RiskLevel::classify(score),
        factors,
    }
}

/// Predicate over a profile that gates a penalty rule.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PenaltyCondition {
    Above { feature: Feature, threshold: f64 },
    Below { feature: Feature, threshold: f64 },
}

impl PenaltyCondition {
    pub fn holds(&self, profile: &UserProfile) -> bool {
        match *self {
            PenaltyCondition::Above { feature, threshold } => profile.get(feature) > threshold,
            PenaltyCondition::Below { feature, threshold } => profile.get(feature) < threshold,
        }
    }
}

/// Data record shrinking one career's score by `penalty` when `condition` holds.
#[derive(Debug, Clone, PartialEq)]
pub struct PenaltyRule {
    pub career: Career,
    pub condition: PenaltyCondition,
    pub penalty: f64,
    pub reason: String,
}

impl PenaltyRule {
    pub fn above(
        career: Career,
        feature: Feature,
        threshold: f64,
        penalty: f64,
        reason: impl Into<String>,
    ) -> Self {
        Self {
            career,
            condition: PenaltyCondition::Above { feature, threshold },
            penalty,
            reason: reason.into(),
        }
    }

    /// Production rule list, evaluated in order.
    pub fn standard() -> Vec<PenaltyRule> {
        use Feature::{FinancialPressure, IncomeUrgency, RiskTolerance};

        vec![
            Self::above(
                Career::Startup,
                FinancialPressure,
                0.6,
                0.20,
                "High financial pressure makes startup risky",
            ),
            Self::above(
                Career::Startup,
                IncomeUrgency,
                0.7,
                0.15,
                "Urgent income need conflicts with startup timeline",
            ),
            Self::above(
                Career::MsAbroad,
                FinancialPressure,
                0.65,
                0.15,
                "High financial pressure makes MS Abroad difficult",
            ),
            Self::above(
                Career::MsAbroad,
                IncomeUrgency,
                0.6,
                0.10,
                "Income urgency conflicts with 2-year study abroad",
            ),
            Self::above(
                Career::HigherStudies,
                IncomeUrgency,
                0.65,
                0.25,
                "Urgent income need conflicts with extended studies",
            ),
            Self::above(
                Career::Mba,
                FinancialPressure,
                0.7,
                0.15,
                "High financial pressure makes MBA fees challenging",
            ),
            Self::above(
                Career::Government,
                RiskTolerance,
                0.8,
                0.10,
                "High risk appetite may lead to dissatisfaction with govt job security",
            ),
            Self::above(
                Career::Creative,
                FinancialPressure,
                0.7,
                0.15,
                "High financial pressure makes freelance/creative career risky",
            ),
            Self::above(
                Career::Creative,
                IncomeUrgency,
                0.7,
                0.10,
                "Urgent income need conflicts with creative career ramp-up",
            ),
            Self::above(
                Career::Healthcare,
                IncomeUrgency,
                0.7,
                0.20,
                "Urgent income need conflicts with long medical training (5.5+ years)",
            ),
            Self::above(
                Career::Healthcare,
                RiskTolerance,
                0.8,
                0.08,
                "High risk appetite may lead to dissatisfaction with structured medical career",
            ),
        ]
    }
}

/// A rule that fired for a career.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskPenalty {
    pub penalty: f64,
    pub reason: String,
}

/// Applies every firing rule multiplicatively. Rules for careers that were not scored are
/// ignored.
pub fn apply_penalties(
    scores: &[RawCareerScore],
    profile: &UserProfile,
    rules: &[PenaltyRule],
) -> (Vec<RawCareerScore>, BTreeMap<Career, Vec<RiskPenalty>>) {
    let mut adjusted = scores.to_vec();
    let mut applied: BTreeMap<Career, Vec<RiskPenalty>> = BTreeMap::new();

    for rule in rules.iter().filter(|rule| rule.condition.holds(profile)) {
        let Some(entry) = adjusted.iter_mut().find(|entry| entry.career == rule.career) else {
            continue;
        };
        entry.score *= 1.0 - rule.penalty;
        applied.entry(rule.career).or_default().push(RiskPenalty {
            penalty: rule.penalty,
            reason: rule.reason.clone(),
        });
    }

    (adjusted, applied)
}
