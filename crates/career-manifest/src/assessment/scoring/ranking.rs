use serde::{Deserialize, Serialize};

use super::super::domain::Career;
use super::round_to;
use super::scorer::RawCareerScore;

const MULTI_FIT_THRESHOLD: f64 = 0.1;

/// A career after min-max normalisation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RankedCareer {
    pub career: Career,
    pub raw_score: f64,
    pub normalized: f64,
    pub percentage: f64,
}

/// Best-first ranking with the gap between the top two careers.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RankedResult {
    pub rankings: Vec<RankedCareer>,
    pub confidence: f64,
    pub is_multi_fit: bool,
}

impl RankedResult {
    pub fn top(&self) -> Option<&RankedCareer> {
        self.rankings.first()
    }
}

pub fn normalize_and_rank(scores: &[RawCareerScore]) -> RankedResult {
    if scores.is_empty() {
        return RankedResult::default();
    }

    let (min, max) = scores.iter().fold(
        (f64::INFINITY, f64::NEG_INFINITY),
        |(min, max), entry| (min.min(entry.score), max.max(entry.score)),
    );
    let range = if max - min == 0.0 { 1.0 } else { max - min };

    let mut rankings: Vec<RankedCareer> = scores
        .iter()
        .map(|entry| {
            let normalized = (entry.score - min) / range;
            RankedCareer {
                career: entry.career,
                raw_score: round_to(entry.score, 3),
                normalized: round_to(normalized, 3),
                percentage: (normalized * 10_000.0).round() / 100.0,
            }
        })
        .collect();

    rankings.sort_by(|left, right| {
        right
            .normalized
            .total_cmp(&left.normalized)
            .then_with(|| left.career.cmp(&right.career))
    });

    let confidence = match rankings.as_slice() {
        [top, second, ..] if top.normalized > 0.0 => {
            round_to((top.normalized - second.normalized) / top.normalized, 3)
        }
        _ => 0.0,
    };

    RankedResult {
        rankings,
        confidence,
        is_multi_fit: confidence < MULTI_FIT_THRESHOLD,
    }
}
