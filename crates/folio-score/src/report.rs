//! Page audit reports

use crate::axes::check_passes;
use crate::evaluator::{Evaluator, PlacementContext};
use crate::weights::{from_points, ScoreBreakdown};
use folio_library::SectionNode;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Severity level for audit findings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
    Info,
}

/// A single finding against one section
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Violation {
    pub section_id: String,
    pub position: usize,
    pub severity: Severity,
    pub message: String,
}

/// Re-scored page with every constraint and accessibility finding
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditReport {
    pub sections: Vec<ScoreBreakdown>,
    pub violations: Vec<Violation>,
    /// Sum of section points
    pub points: i64,
}

impl AuditReport {
    /// Create an empty report
    pub fn new() -> Self {
        Self::default()
    }

    /// Page score as a fraction, for display
    pub fn score(&self) -> f64 {
        from_points(self.points)
    }

    /// Check if the page is valid (no errors)
    pub fn is_valid(&self) -> bool {
        self.error_count() == 0
    }

    /// Count violations by severity
    pub fn error_count(&self) -> usize {
        self.count(Severity::Error)
    }

    pub fn warning_count(&self) -> usize {
        self.count(Severity::Warning)
    }

    pub fn info_count(&self) -> usize {
        self.count(Severity::Info)
    }

    fn count(&self, severity: Severity) -> usize {
        self.violations
            .iter()
            .filter(|v| v.severity == severity)
            .count()
    }

    /// Get a human-readable summary
    pub fn summary(&self) -> String {
        let total = self.violations.len();
        if total == 0 {
            return format!("No violations found (score {:.3}).", self.score());
        }

        format!(
            "{} violation(s): {} error(s), {} warning(s), {} info (score {:.3})",
            total,
            self.error_count(),
            self.warning_count(),
            self.info_count(),
            self.score(),
        )
    }
}

/// Re-score an existing page in place.
///
/// Each section is judged at its actual position against the kinds on the
/// page. Failed hard constraints are errors, failed soft constraints are
/// warnings and failed accessibility checks are info.
pub fn audit_page(sections: &[SectionNode], evaluator: &Evaluator) -> AuditReport {
    let requested: Vec<String> = sections.iter().map(|n| n.kind().to_string()).collect();
    let kinds: Vec<&str> = sections.iter().map(|n| n.kind()).collect();
    let mut report = AuditReport::new();

    for (position, node) in sections.iter().enumerate() {
        let ctx = PlacementContext::new(&kinds[..position], &requested);
        let meta = &node.meta;

        for constraint in evaluator.failed_hard(meta, &ctx) {
            report.violations.push(Violation {
                section_id: node.id.to_string(),
                position,
                severity: Severity::Error,
                message: format!("{} {}", meta.key(), constraint),
            });
        }
        for constraint in evaluator.failed_soft(meta, &ctx) {
            report.violations.push(Violation {
                section_id: node.id.to_string(),
                position,
                severity: Severity::Warning,
                message: format!("{} {}", meta.key(), constraint),
            });
        }
        for check in &meta.a11y_checklist {
            if !check_passes(check, meta, &node.props, evaluator.brand()) {
                report.violations.push(Violation {
                    section_id: node.id.to_string(),
                    position,
                    severity: Severity::Info,
                    message: format!("{} is missing {}", meta.key(), check),
                });
            }
        }

        let breakdown = evaluator.score_with_props(meta, &ctx, &node.props);
        report.points += breakdown.points;
        report.sections.push(breakdown);
    }

    debug!(
        sections = sections.len(),
        violations = report.violations.len(),
        "audited page"
    );
    report
}
