//! Folio Library - Section registry and constraint model
//!
//! Every `(kind, variant)` pair Folio can place on a page is described by a
//! [`SectionMeta`]: which content slots it renders, which constraints gate or
//! bias its placement, and which accessibility checks its props must pass.

mod constraint;
mod content;
mod meta;
mod node;
mod registry;

pub use constraint::{A11yCheck, Constraint};
pub use content::{is_populated, ContentBlock, ContentGraph};
pub use meta::{SectionDefinition, SectionFile, SectionMeta, VariantStyle};
pub use node::{page_keys, renumber, Props, SectionNode};
pub use registry::SectionLibrary;
