//! Folio Score - Scoring functions, constraint evaluation and page audit
//!
//! Every section placement is scored along four axes, each in `[0, 1]`:
//! content fit, tone match, accessibility and performance. Scores are
//! combined with [`ScoreWeights`] and quantized to integer points so that
//! sequence totals compare exactly.

mod axes;
mod evaluator;
mod report;
mod tone;
mod weights;

pub use axes::{accessibility, check_passes, content_fit, performance};
pub use evaluator::{resolve_props, Evaluator, PlacementContext};
pub use report::{audit_page, AuditReport, Severity, Violation};
pub use tone::{affinity, profile_closeness, tone_match};
pub use weights::{from_points, to_points, ScoreBreakdown, ScoreWeights, POINTS_PER_UNIT};
