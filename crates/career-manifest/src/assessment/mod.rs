//! Career assessment scoring: answers in, ranked and explained recommendation out.
//!
//! The pipeline is aggregate → score → penalise → rank → explain, with static enrichment and
//! optional narration layered on top. Everything up to narration is pure and synchronous.

pub mod aggregator;
pub mod catalog;
pub mod domain;
pub mod enrichment;
pub mod features;
pub mod import;
pub mod narration;
pub mod question_bank;
pub mod repository;
pub mod result;
pub mod router;
pub mod scoring;
pub mod service;
pub mod version;

#[cfg(test)]
mod tests;

pub use aggregator::FeatureAggregator;
pub use catalog::{CareerWeights, WeightCatalog};
pub use domain::{
    Answer, Career, Feature, FeatureVector, Question, QuestionCategory, QuestionId, UserProfile,
    FEATURE_COUNT,
};
pub use enrichment::{Enrichment, RoadmapStep, SalaryProjection};
pub use features::{FeatureMap, FeatureWeight};
pub use import::{parse_answers, read_answers, AnswerFormat, AnswerImportError};
pub use narration::{
    build_narrator, narrate_with_fallback, GenerativeBackend, GenerativeNarrator,
    NarrationError, Narrator, TemplateNarrator,
};
pub use question_bank::QuestionBank;
pub use repository::{
    AssessmentId, AssessmentListItem, AssessmentRecord, AssessmentRepository, AssessmentView,
    QuestionCatalog, QuestionCatalogError, RepositoryError, UserId,
};
pub use result::{AssessmentResult, CareerScore, ProfileSnapshot};
pub use router::{assessment_router, SubmitAssessmentRequest};
pub use scoring::{
    Explanation, FeatureContribution, PenaltyCondition, PenaltyRule, RankedCareer, RankedResult,
    RawCareerScore, RiskLevel, RiskPenalty, RiskResult, ScoringEngine, ScoringError,
};
pub use service::{AssessmentService, AssessmentServiceError};
pub use version::VersionInfo;
