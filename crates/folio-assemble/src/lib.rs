//! Folio Assemble - Deterministic beam-search page assembler
//!
//! Given a section library, a content graph, brand tokens and a tone, the
//! assembler picks one variant per required section kind and orders them so
//! every hard constraint holds, keeping the `beam_width` best partial pages
//! at each depth.
//!
//! Identical inputs always produce identical output. Ties between equal
//! scores are broken by the `"{kind}-{variant}"` key sequence, then by
//! registry insertion order.

mod assembly;
mod beam;
mod options;

pub use assembly::{Assembly, DepthTrace, ScoreTrace};
pub use beam::Assembler;
pub use options::AssembleOptions;

use folio_core::{BrandTokens, Result, Tone};
use folio_library::{ContentGraph, SectionLibrary};

/// Assemble a page with default score weights
pub fn assemble(
    library: &SectionLibrary,
    content: &ContentGraph,
    brand: &BrandTokens,
    tone: Tone,
    required_kinds: &[String],
    options: &AssembleOptions,
) -> Result<Assembly> {
    Assembler::new(library, content, brand, tone).search(required_kinds, options)
}
