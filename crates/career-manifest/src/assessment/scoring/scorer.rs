use serde::{Deserialize, Serialize};

use super::super::catalog::WeightCatalog;
use super::super::domain::{Career, UserProfile};

/// Unnormalised dot product of a profile against one career's weights.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RawCareerScore {
    pub career: Career,
    pub score: f64,
}

/// One raw score per catalog row, in catalog (career) order.
pub(crate) fn raw_scores(profile: &UserProfile, catalog: &WeightCatalog) -> Vec<RawCareerScore> {
    catalog
        .rows()
        .iter()
        .map(|row| RawCareerScore {
            career: row.career,
            score: profile.features().dot(&row.weights),
        })
        .collect()
}
