use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::domain::{Answer, Career, Question};
use super::result::AssessmentResult;
use super::scoring::RiskLevel;

/// Identifier wrapper for stored assessments.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AssessmentId(pub String);

impl fmt::Display for AssessmentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Caller identity supplied by the (external) authentication layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(pub u64);

/// Stored submission together with its computed result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssessmentRecord {
    pub id: AssessmentId,
    pub user_id: UserId,
    pub answers: Vec<Answer>,
    pub result: AssessmentResult,
    pub created_at: DateTime<Utc>,
}

impl AssessmentRecord {
    pub fn list_item(&self) -> AssessmentListItem {
        AssessmentListItem {
            id: self.id.clone(),
            best_career_path: self.result.best_career_path,
            risk_level: self.result.risk.level,
            created_at: self.created_at,
        }
    }

    pub fn view(&self) -> AssessmentView<'_> {
        AssessmentView {
            id: &self.id,
            user_id: self.user_id,
            result: &self.result,
            created_at: self.created_at,
        }
    }
}

/// API representation of a stored assessment. Raw answers are not echoed back.
#[derive(Debug, Clone, Serialize)]
pub struct AssessmentView<'a> {
    pub id: &'a AssessmentId,
    pub user_id: UserId,
    pub result: &'a AssessmentResult,
    pub created_at: DateTime<Utc>,
}

/// Dashboard row for a user's assessment history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssessmentListItem {
    pub id: AssessmentId,
    pub best_career_path: Career,
    pub risk_level: RiskLevel,
    pub created_at: DateTime<Utc>,
}

/// Storage abstraction so the service module can be exercised in isolation.
pub trait AssessmentRepository: Send + Sync {
    fn insert(&self, record: AssessmentRecord) -> Result<AssessmentRecord, RepositoryError>;
    fn fetch(&self, id: &AssessmentId) -> Result<Option<AssessmentRecord>, RepositoryError>;
    /// Newest first.
    fn list_for_user(&self, user_id: UserId) -> Result<Vec<AssessmentRecord>, RepositoryError>;
}

/// Source of the currently active questions.
pub trait QuestionCatalog: Send + Sync {
    fn active_questions(&self) -> Result<Vec<Question>, QuestionCatalogError>;
}

/// Error enumeration for repository failures.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("record already exists")]
    Conflict,
    #[error("record not found")]
    NotFound,
    #[error("repository unavailable: {0}")]
    Unavailable(String),
}

#[derive(Debug, thiserror::Error)]
pub enum QuestionCatalogError {
    #[error("question catalog unavailable: {0}")]
    Unavailable(String),
}
