//! Assembly results

use folio_core::ContentHash;
use folio_library::{page_keys, SectionNode};
use folio_score::{from_points, ScoreBreakdown};
use serde::{Deserialize, Serialize};

/// Candidate pool statistics for one search depth
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DepthTrace {
    pub depth: usize,
    /// Candidates generated at this depth
    pub pool_size: usize,
    /// Candidates carried into the next depth
    pub kept: usize,
}

/// How the search arrived at its answer
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreTrace {
    pub depths: Vec<DepthTrace>,
    /// Per-section scores of the primary assembly
    pub primary: Vec<ScoreBreakdown>,
    /// Total points of the primary followed by each alternate
    pub totals: Vec<i64>,
}

impl ScoreTrace {
    /// Primary score as a fraction
    pub fn primary_score(&self) -> f64 {
        self.totals.first().copied().map(from_points).unwrap_or(0.0)
    }
}

/// Ranked output of the assembler
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Assembly {
    pub primary: Vec<SectionNode>,
    pub alternates: Vec<Vec<SectionNode>>,
    pub trace: ScoreTrace,
}

impl Assembly {
    /// `"{kind}-{variant}"` sequence of the primary
    pub fn primary_keys(&self) -> Vec<String> {
        page_keys(&self.primary)
    }

    /// Key sequences of the alternates, best first
    pub fn alternate_keys(&self) -> Vec<Vec<String>> {
        self.alternates.iter().map(|a| page_keys(a)).collect()
    }

    /// Hash of every returned key sequence, in order. Two calls with the
    /// same inputs must agree on this.
    pub fn fingerprint(&self) -> ContentHash {
        let mut text = self.primary_keys().join(",");
        for keys in self.alternate_keys() {
            text.push('\n');
            text.push_str(&keys.join(","));
        }
        ContentHash::from_text(&text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_library::{Props, SectionMeta};

    fn node(kind: &str, variant: &str, position: usize) -> SectionNode {
        SectionNode::new(SectionMeta::new(kind, variant), Props::new(), position)
    }

    #[test]
    fn test_fingerprint_tracks_alternate_order() {
        let a = vec![node("hero", "split", 0)];
        let b = vec![node("hero", "centered", 0)];
        let c = vec![node("hero", "minimal", 0)];

        let first = Assembly {
            primary: a.clone(),
            alternates: vec![b.clone(), c.clone()],
            trace: ScoreTrace::default(),
        };
        let swapped = Assembly {
            primary: a,
            alternates: vec![c, b],
            trace: ScoreTrace::default(),
        };
        assert_ne!(first.fingerprint(), swapped.fingerprint());
        assert_eq!(first.fingerprint(), first.clone().fingerprint());
    }

    #[test]
    fn test_primary_score_of_empty_trace() {
        assert_eq!(ScoreTrace::default().primary_score(), 0.0);
    }
}
