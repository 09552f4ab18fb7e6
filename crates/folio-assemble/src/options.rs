//! Search options

use folio_core::{FolioError, Result};
use serde::{Deserialize, Serialize};

/// Bounds on the beam search.
///
/// Search cost grows with `beam_width × max_depth × library size`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssembleOptions {
    /// Partial assemblies kept per depth
    pub beam_width: usize,
    /// Maximum sections placed; must cover every required kind
    pub max_depth: usize,
    /// Complete assemblies returned besides the primary
    pub alternates: usize,
}

impl Default for AssembleOptions {
    fn default() -> Self {
        Self {
            beam_width: 4,
            max_depth: 8,
            alternates: 2,
        }
    }
}

impl AssembleOptions {
    pub fn new(beam_width: usize, max_depth: usize) -> Self {
        Self {
            beam_width,
            max_depth,
            ..Self::default()
        }
    }

    pub fn with_alternates(mut self, alternates: usize) -> Self {
        self.alternates = alternates;
        self
    }

    /// Check the options can cover `kind_count` required kinds
    pub fn validate(&self, kind_count: usize) -> Result<()> {
        if self.beam_width == 0 {
            return Err(FolioError::InvalidOptions(
                "beam width must be at least 1".to_string(),
            ));
        }
        if self.max_depth < kind_count {
            return Err(FolioError::InvalidOptions(format!(
                "max depth {} cannot place {} required kinds",
                self.max_depth, kind_count
            )));
        }
        Ok(())
    }
}
