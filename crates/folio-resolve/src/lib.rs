//! Folio Resolve - Design spec resolution
//!
//! Turns a high-level [`DesignSpec`] into concrete section variants, content
//! and brand tokens in one greedy pass per section. Unlike the assembler it
//! does not search: each kind gets the variant whose style best matches the
//! spec, with ties going to registry order.

mod brand;
mod preset;
mod resolver;
mod spec;
mod strategy;

pub use brand::{derive_brand, font_pair, spacing_multiplier, spacing_scale};
pub use resolver::{resolve_spec, variant_score, ResolvedPage, ResolvedSection, Resolver};
pub use spec::{
    ColorScheme, ContentStrategy, CtaStrategy, Density, DesignSpec, FirstImpression, Flow,
    LayoutPreferences, SectionSpec, StyleSpec, VisualHints, Voice,
};
pub use strategy::{apply_strategy, MINIMAL_LIST_LEN};
