//! Deterministic career recommendation engine for 30-answer student assessments.
//!
//! The [`assessment`] module hosts the scoring pipeline (feature aggregation, career scoring,
//! risk penalties, ranking, and explanations) together with the service and HTTP router that
//! expose it. The remaining modules carry the ambient configuration, error, and telemetry
//! plumbing shared with the API binary.

pub mod assessment;
pub mod config;
pub mod error;
pub mod telemetry;
