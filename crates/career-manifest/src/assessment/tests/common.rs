use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::body::to_bytes;
use axum::response::Response;
use serde_json::Value;

use crate::assessment::catalog::WeightCatalog;
use crate::assessment::domain::{Answer, Career, Feature, FeatureVector, Question, UserProfile};
use crate::assessment::question_bank::QuestionBank;
use crate::assessment::repository::{
    AssessmentId, AssessmentRecord, AssessmentRepository, QuestionCatalog, QuestionCatalogError,
    RepositoryError, UserId,
};
use crate::assessment::scoring::ScoringEngine;
use crate::assessment::service::AssessmentService;

pub(super) fn questions() -> Vec<Question> {
    QuestionBank::standard().into_questions()
}

/// Profile with every feature at `base` except the listed overrides.
pub(super) fn profile(base: f64, overrides: &[(Feature, f64)]) -> UserProfile {
    overrides
        .iter()
        .fold(
            UserProfile::from_features(FeatureVector::new([base; 9])),
            |profile, (feature, value)| profile.with(*feature, *value),
        )
}

pub(super) fn tech_profile() -> UserProfile {
    profile(
        0.1,
        &[
            (Feature::AcademicStrength, 0.9),
            (Feature::TechAffinity, 0.95),
        ],
    )
}

pub(super) fn founder_under_pressure() -> UserProfile {
    profile(
        0.1,
        &[
            (Feature::RiskTolerance, 0.9),
            (Feature::LeadershipScore, 0.9),
            (Feature::CareerInstability, 0.9),
            (Feature::TechAffinity, 0.6),
            (Feature::FinancialPressure, 0.8),
        ],
    )
}

/// The original six-career catalog (no Data Science, Creative, or Healthcare rows).
pub(super) fn core_catalog() -> WeightCatalog {
    let standard = WeightCatalog::standard();
    WeightCatalog::new(
        "core",
        standard
            .rows()
            .iter()
            .copied()
            .filter(|row| row.career <= Career::MsAbroad),
    )
}

/// One answer per standard question, choosing the option at `pick` (clamped to the last).
pub(super) fn answers_choosing(pick: usize) -> Vec<Answer> {
    questions()
        .iter()
        .map(|question| Answer {
            question_id: question.id,
            selected: pick.min(question.options.len() - 1),
        })
        .collect()
}

pub(super) fn tech_answers() -> Vec<Answer> {
    vec![
        Answer::new(1, 4),
        Answer::new(2, 0),
        Answer::new(3, 0),
        Answer::new(6, 4),
        Answer::new(20, 3),
        Answer::new(29, 0),
        Answer::new(30, 0),
    ]
}

pub(super) fn build_service() -> (
    AssessmentService<MemoryCatalog, MemoryRepository>,
    Arc<MemoryRepository>,
) {
    let repository = Arc::new(MemoryRepository::default());
    let service = AssessmentService::new(
        Arc::new(MemoryCatalog::standard()),
        repository.clone(),
        ScoringEngine::standard(),
    );
    (service, repository)
}

pub(super) async fn body_json(response: Response) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body readable");
    serde_json::from_slice(&bytes).expect("body is json")
}

#[derive(Clone)]
pub(super) struct MemoryCatalog {
    questions: Vec<Question>,
}

impl MemoryCatalog {
    pub(super) fn standard() -> Self {
        Self {
            questions: questions(),
        }
    }
}

impl QuestionCatalog for MemoryCatalog {
    fn active_questions(&self) -> Result<Vec<Question>, QuestionCatalogError> {
        Ok(self.questions.clone())
    }
}

pub(super) struct OfflineCatalog;

impl QuestionCatalog for OfflineCatalog {
    fn active_questions(&self) -> Result<Vec<Question>, QuestionCatalogError> {
        Err(QuestionCatalogError::Unavailable("content service down".to_string()))
    }
}

#[derive(Default, Clone)]
pub(super) struct MemoryRepository {
    pub(super) records: Arc<Mutex<HashMap<AssessmentId, AssessmentRecord>>>,
}

impl AssessmentRepository for MemoryRepository {
    fn insert(&self, record: AssessmentRecord) -> Result<AssessmentRecord, RepositoryError> {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        if guard.contains_key(&record.id) {
            return Err(RepositoryError::Conflict);
        }
        guard.insert(record.id.clone(), record.clone());
        Ok(record)
    }

    fn fetch(&self, id: &AssessmentId) -> Result<Option<AssessmentRecord>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        Ok(guard.get(id).cloned())
    }

    fn list_for_user(&self, user_id: UserId) -> Result<Vec<AssessmentRecord>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        let mut records: Vec<AssessmentRecord> = guard
            .values()
            .filter(|record| record.user_id == user_id)
            .cloned()
            .collect();
        records.sort_by(|left, right| {
            right
                .created_at
                .cmp(&left.created_at)
                .then_with(|| right.id.cmp(&left.id))
        });
        Ok(records)
    }
}

pub(super) struct UnavailableRepository;

impl AssessmentRepository for UnavailableRepository {
    fn insert(&self, _record: AssessmentRecord) -> Result<AssessmentRecord, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn fetch(&self, _id: &AssessmentId) -> Result<Option<AssessmentRecord>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }

    fn list_for_user(&self, _user_id: UserId) -> Result<Vec<AssessmentRecord>, RepositoryError> {
        Err(RepositoryError::Unavailable("database offline".to_string()))
    }
}
