//! Folio Core - Foundational types for the Folio page composer
//!
//! This crate provides the core types that all other Folio crates depend on:
//! - `SectionId` - Deterministic section identifiers
//! - `ContentHash` - SHA-256 based fingerprints
//! - `Tone` and the other closed style vocabularies
//! - `Color`, `BrandTokens` - Brand design tokens
//! - Error types and Result alias

mod brand;
mod color;
mod error;
mod hash;
mod id;
mod types;

pub use brand::{
    BrandTokens, ColorScale, ColorTokens, FontPair, RadiusScale, ShadowScale, BASE_SPACING,
    SCALE_STEPS,
};
pub use color::Color;
pub use error::{FolioError, Result};
pub use hash::ContentHash;
pub use id::SectionId;
pub use types::{Emphasis, Layout, Motion, Priority, Spacing, Tone, ToneProfile, Typography};
