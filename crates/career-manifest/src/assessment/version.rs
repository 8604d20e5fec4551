use serde::{Deserialize, Serialize};

pub const ASSESSMENT_VERSION: &str = "2.0.0";
pub const WEIGHT_MATRIX_VERSION: &str = "2.0.0";
pub const FEATURE_MAP_VERSION: &str = "2.0.0";

pub const MODEL_TYPE: &str = "linear_weight_matrix";
pub const MODEL_ACCURACY: f64 = 0.8845;
pub const MODEL_F1_SCORE: f64 = 0.8844;

/// Reproducibility stamp embedded in every result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VersionInfo {
    pub assessment: String,
    pub weight_matrix: String,
    pub feature_map: String,
    pub model_type: String,
    pub model_accuracy: f64,
    pub model_f1_score: f64,
}

impl VersionInfo {
    /// Stamp for a run using the given weight catalog and feature map versions.
    pub fn for_tables(weight_matrix: &str, feature_map: &str) -> Self {
        Self {
            assessment: ASSESSMENT_VERSION.to_string(),
            weight_matrix: weight_matrix.to_string(),
            feature_map: feature_map.to_string(),
            model_type: MODEL_TYPE.to_string(),
            model_accuracy: MODEL_ACCURACY,
            model_f1_score: MODEL_F1_SCORE,
        }
    }
}

impl Default for VersionInfo {
    fn default() -> Self {
        Self::for_tables(WEIGHT_MATRIX_VERSION, FEATURE_MAP_VERSION)
    }
}
