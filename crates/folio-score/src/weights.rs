//! Score weights and per-section breakdowns

use serde::{Deserialize, Serialize};

/// Scale used to turn fractional scores into integer points
pub const POINTS_PER_UNIT: f64 = 1_000_000.0;

/// Relative weight of each scoring axis.
///
/// Loaded from the `[weights]` table of `folio.toml`; missing fields keep
/// their defaults.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoreWeights {
    pub content_fit: f64,
    pub tone_match: f64,
    pub accessibility: f64,
    pub performance: f64,
    /// Subtracted once per violated soft constraint
    pub soft_penalty: f64,
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            content_fit: 0.4,
            tone_match: 0.3,
            accessibility: 0.2,
            performance: 0.1,
            soft_penalty: 0.15,
        }
    }
}

/// Score of one section at one position
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreBreakdown {
    pub key: String,
    pub content_fit: f64,
    pub tone_match: f64,
    pub accessibility: f64,
    pub performance: f64,
    pub soft_violations: usize,
    pub total: f64,
    /// `total` in integer micro-points; sequence scores are sums of these
    pub points: i64,
}

impl ScoreBreakdown {
    /// Combine the four axes under `weights`
    pub fn combine(
        key: String,
        content_fit: f64,
        tone_match: f64,
        accessibility: f64,
        performance: f64,
        soft_violations: usize,
        weights: &ScoreWeights,
    ) -> Self {
        let total = weights.content_fit * content_fit
            + weights.tone_match * tone_match
            + weights.accessibility * accessibility
            + weights.performance * performance
            - weights.soft_penalty * soft_violations as f64;

        Self {
            key,
            content_fit,
            tone_match,
            accessibility,
            performance,
            soft_violations,
            total,
            points: to_points(total),
        }
    }
}

/// Quantize a score so that equal sequences tie exactly
pub fn to_points(score: f64) -> i64 {
    (score * POINTS_PER_UNIT).round() as i64
}

/// Inverse of [`to_points`], for display
pub fn from_points(points: i64) -> f64 {
    points as f64 / POINTS_PER_UNIT
}
