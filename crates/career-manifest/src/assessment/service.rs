use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use tracing::info;

use super::domain::{Answer, Question};
use super::narration::{narrate_with_fallback, Narrator};
use super::repository::{
    AssessmentId, AssessmentListItem, AssessmentRecord, AssessmentRepository, QuestionCatalog,
    QuestionCatalogError, RepositoryError, UserId,
};
use super::scoring::{ScoringEngine, ScoringError};

const DEFAULT_NARRATION_TIMEOUT: Duration = Duration::from_secs(30);

/// Service composing the question catalog, scoring engine, narrator, and repository.
pub struct AssessmentService<C, R> {
    catalog: Arc<C>,
    repository: Arc<R>,
    engine: Arc<ScoringEngine>,
    narrator: Option<Arc<dyn Narrator>>,
    narration_timeout: Duration,
}

static ASSESSMENT_SEQUENCE: AtomicU64 = AtomicU64::new(1);

fn next_assessment_id() -> AssessmentId {
    let id = ASSESSMENT_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    AssessmentId(format!("asm-{id:06}"))
}

impl<C, R> AssessmentService<C, R>
where
    C: QuestionCatalog + 'static,
    R: AssessmentRepository + 'static,
{
    pub fn new(catalog: Arc<C>, repository: Arc<R>, engine: ScoringEngine) -> Self {
        Self {
            catalog,
            repository,
            engine: Arc::new(engine),
            narrator: None,
            narration_timeout: DEFAULT_NARRATION_TIMEOUT,
        }
    }

    /// Attach an optional narrator. `None` leaves `ai_explanation` empty.
    pub fn with_narrator(mut self, narrator: Option<Arc<dyn Narrator>>, timeout: Duration) -> Self {
        self.narrator = narrator;
        self.narration_timeout = timeout;
        self
    }

    pub fn engine(&self) -> &ScoringEngine {
        &self.engine
    }

    /// Score a submission against the active catalog and persist the outcome.
    pub async fn submit(
        &self,
        user_id: UserId,
        answers: Vec<Answer>,
    ) -> Result<AssessmentRecord, AssessmentServiceError> {
        if answers.is_empty() {
            return Err(AssessmentServiceError::EmptySubmission);
        }

        let questions = self.catalog.active_questions()?;
        let mut result = self.engine.compute(&answers, &questions)?;

        if let Some(narrator) = &self.narrator {
            let text =
                narrate_with_fallback(narrator.as_ref(), &result, self.narration_timeout).await;
            result.ai_explanation = Some(text);
        }

        let record = AssessmentRecord {
            id: next_assessment_id(),
            user_id,
            answers,
            result,
            created_at: Utc::now(),
        };

        let stored = self.repository.insert(record)?;
        info!(
            assessment_id = %stored.id,
            user_id = stored.user_id.0,
            best_career = %stored.result.best_career_path,
            "assessment stored"
        );
        Ok(stored)
    }

    /// Fetch an assessment owned by `user_id`.
    pub fn get(
        &self,
        id: &AssessmentId,
        user_id: UserId,
    ) -> Result<AssessmentRecord, AssessmentServiceError> {
        let record = self
            .repository
            .fetch(id)?
            .ok_or(RepositoryError::NotFound)?;
        if record.user_id != user_id {
            return Err(AssessmentServiceError::Forbidden);
        }
        Ok(record)
    }

    pub fn history(
        &self,
        user_id: UserId,
    ) -> Result<Vec<AssessmentListItem>, AssessmentServiceError> {
        let records = self.repository.list_for_user(user_id)?;
        Ok(records.iter().map(AssessmentRecord::list_item).collect())
    }

    pub fn questions(&self) -> Result<Vec<Question>, AssessmentServiceError> {
        Ok(self.catalog.active_questions()?)
    }
}

/// Error raised by the assessment service.
#[derive(Debug, thiserror::Error)]
pub enum AssessmentServiceError {
    #[error("submission contains no answers")]
    EmptySubmission,
    #[error("assessment belongs to another user")]
    Forbidden,
    #[error(transparent)]
    Catalog(#[from] QuestionCatalogError),
    #[error(transparent)]
    Scoring(#[from] ScoringError),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}
