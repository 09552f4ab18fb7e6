//! Stable section identifiers

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a placed section, unique within one page.
///
/// Derived from the section's kind, variant and ordinal position, so the
/// same page always yields the same ids. There is no global counter.
#[derive(Clone, Hash, Eq, PartialEq, Ord, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SectionId(String);

impl SectionId {
    /// Build the id for a section placed at `ordinal`
    pub fn new(kind: &str, variant: &str, ordinal: usize) -> Self {
        Self(format!("{}-{}-{}", kind, variant, ordinal))
    }

    /// Wrap an existing id string (for deserialization/testing)
    pub fn from_raw(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SectionId({})", self.0)
    }
}

impl fmt::Display for SectionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
