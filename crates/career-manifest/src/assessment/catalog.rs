use super::domain::{Career, FeatureVector};
use super::version::WEIGHT_MATRIX_VERSION;

/// Static weight row for one career.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CareerWeights {
    pub career: Career,
    pub weights: FeatureVector,
}

/// Immutable career × feature weight matrix, versioned for reproducibility.
///
/// Rows are held in career order. A career absent from the catalog is scored against the
/// zero vector.
#[derive(Debug, Clone)]
pub struct WeightCatalog {
    version: String,
    rows: Vec<CareerWeights>,
}

impl WeightCatalog {
    pub fn new(version: impl Into<String>, rows: impl IntoIterator<Item = CareerWeights>) -> Self {
        let mut rows: Vec<CareerWeights> = rows.into_iter().collect();
        rows.sort_by_key(|row| row.career);
        rows.dedup_by_key(|row| row.career);
        Self {
            version: version.into(),
            rows,
        }
    }

    /// A catalog with no careers. Scoring against it fails.
    pub fn empty() -> Self {
        Self::new(WEIGHT_MATRIX_VERSION, Vec::new())
    }

    pub fn weights_for(&self, career: Career) -> FeatureVector {
        self.rows
            .iter()
            .find(|row| row.career == career)
            .map(|row| row.weights)
            .unwrap_or_else(FeatureVector::zero)
    }

    pub fn careers(&self) -> impl Iterator<Item = Career> + '_ {
        self.rows.iter().map(|row| row.career)
    }

    pub fn rows(&self) -> &[CareerWeights] {
        &self.rows
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    /// The production matrix. Columns follow [`super::domain::Feature::ALL`].
    pub fn standard() -> Self {
        let row = |career, weights| CareerWeights {
            career,
            weights: FeatureVector::new(weights),
        };

        Self::new(
            WEIGHT_MATRIX_VERSION,
            [
                row(
                    Career::It,
                    [0.40, -0.20, 0.25, -0.10, 0.85, -0.20, 0.30, -0.10, 0.08],
                ),
                row(
                    Career::Mba,
                    [0.35, -0.25, 0.35, 0.82, -0.15, -0.18, 0.20, -0.30, 0.10],
                ),
                row(
                    Career::Government,
                    [0.30, 0.20, -0.45, 0.15, -0.35, 0.95, -0.42, 0.10, -0.40],
                ),
                row(
                    Career::Startup,
                    [0.20, -0.35, 0.80, 0.72, 0.45, -0.35, -0.10, -0.40, 0.55],
                ),
                row(
                    Career::HigherStudies,
                    [0.88, -0.15, -0.10, -0.15, 0.35, 0.08, -0.10, -0.40, -0.12],
                ),
                row(
                    Career::MsAbroad,
                    [0.65, -0.30, 0.30, -0.05, 0.40, -0.30, 0.90, -0.35, 0.05],
                ),
                row(
                    Career::DataScience,
                    [0.75, -0.15, 0.30, 0.20, 0.88, -0.25, 0.50, -0.10, 0.15],
                ),
                row(
                    Career::Creative,
                    [0.15, -0.10, 0.50, 0.30, 0.40, -0.45, 0.30, -0.15, 0.40],
                ),
                row(
                    Career::Healthcare,
                    [0.85, 0.10, -0.20, 0.35, -0.10, 0.35, 0.20, -0.25, -0.20],
                ),
            ],
        )
    }
}

impl Default for WeightCatalog {
    fn default() -> Self {
        Self::standard()
    }
}
