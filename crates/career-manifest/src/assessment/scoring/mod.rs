mod explain;
mod ranking;
mod risk;
mod scorer;

pub use explain::{explain, explain_top, Explanation, FeatureContribution};
pub use ranking::{normalize_and_rank, RankedCareer, RankedResult};
pub use risk::{
    apply_penalties, compute_risk, PenaltyCondition, PenaltyRule, RiskLevel, RiskPenalty,
    RiskResult,
};
pub use scorer::RawCareerScore;

use tracing::{debug, info};

use super::aggregator::FeatureAggregator;
use super::catalog::WeightCatalog;
use super::domain::{Answer, Question, UserProfile};
use super::enrichment::Enrichment;
use super::features::FeatureMap;
use super::result::{AssessmentResult, CareerScore, ProfileSnapshot};
use super::version::VersionInfo;

/// Round half away from zero to `digits` decimal places.
pub fn round_to(value: f64, digits: i32) -> f64 {
    let factor = 10f64.powi(digits);
    (value * factor).round() / factor
}

/// Fatal failures of a scoring run.
#[derive(Debug, thiserror::Error)]
pub enum ScoringError {
    #[error("weight catalog is empty; no careers can be scored")]
    EmptyWeightCatalog,
}

/// Stateless pipeline: aggregate, score, penalise, rank, explain.
///
/// The tables are injected at construction so alternative model versions can be swapped in
/// per test or per deployment.
#[derive(Debug, Clone)]
pub struct ScoringEngine {
    aggregator: FeatureAggregator,
    catalog: WeightCatalog,
    rules: Vec<PenaltyRule>,
}

impl ScoringEngine {
    pub fn new(map: FeatureMap, catalog: WeightCatalog) -> Self {
        Self {
            aggregator: FeatureAggregator::new(map),
            catalog,
            rules: PenaltyRule::standard(),
        }
    }

    pub fn standard() -> Self {
        Self::new(FeatureMap::standard(), WeightCatalog::standard())
    }

    pub fn with_rules(mut self, rules: Vec<PenaltyRule>) -> Self {
        self.rules = rules;
        self
    }

    pub fn catalog(&self) -> &WeightCatalog {
        &self.catalog
    }

    pub fn rules(&self) -> &[PenaltyRule] {
        &self.rules
    }

    pub fn aggregate(&self, answers: &[Answer], questions: &[Question]) -> UserProfile {
        self.aggregator.aggregate(answers, questions)
    }

    pub fn compute(
        &self,
        answers: &[Answer],
        questions: &[Question],
    ) -> Result<AssessmentResult, ScoringError> {
        let profile = self.aggregate(answers, questions);
        self.score_profile(&profile)
    }

    /// Runs everything after aggregation for an already-built profile.
    pub fn score_profile(&self, profile: &UserProfile) -> Result<AssessmentResult, ScoringError> {
        if self.catalog.is_empty() {
            return Err(ScoringError::EmptyWeightCatalog);
        }

        let raw = scorer::raw_scores(profile, &self.catalog);
        let risk = compute_risk(profile);
        let (adjusted, penalties) = apply_penalties(&raw, profile, &self.rules);
        if !penalties.is_empty() {
            debug!(
                careers = penalties.len(),
                rules = penalties.values().map(Vec::len).sum::<usize>(),
                "risk penalties applied"
            );
        }

        let ranked = normalize_and_rank(&adjusted);
        let Some(best) = ranked.top().map(|top| top.career) else {
            return Err(ScoringError::EmptyWeightCatalog);
        };

        let max_score = round_to(
            adjusted
                .iter()
                .map(|entry| entry.score)
                .fold(f64::NEG_INFINITY, f64::max),
            3,
        );
        let scores = ranked
            .rankings
            .iter()
            .map(|entry| CareerScore {
                category: entry.career,
                score: entry.raw_score,
                max_score,
                percentage: entry.percentage,
            })
            .collect();

        let explanations = explain_top(&ranked.rankings, profile, &self.catalog, &penalties);

        info!(
            best_career = %best,
            confidence = ranked.confidence,
            multi_fit = ranked.is_multi_fit,
            risk_level = %risk.level,
            "assessment scored"
        );

        Ok(AssessmentResult {
            scores,
            best_career_path: best,
            confidence: ranked.confidence,
            is_multi_fit: ranked.is_multi_fit,
            risk,
            profile: ProfileSnapshot::from(profile),
            explanations,
            enrichment: Enrichment::for_career(best),
            version: VersionInfo::for_tables(
                self.catalog.version(),
                self.aggregator.feature_map().version(),
            ),
            ai_explanation: None,
        })
    }
}

impl Default for ScoringEngine {
    fn default() -> Self {
        Self::standard()
    }
}
