pub mod assemble;
pub mod audit;
pub mod edit;
pub mod library;
pub mod resolve;

use anyhow::{Context, Result};
use folio_core::BrandTokens;
use folio_library::{ContentGraph, SectionNode};
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Read and deserialize a JSON file
pub fn read_json<T: DeserializeOwned>(path: &str) -> Result<T> {
    let text =
        std::fs::read_to_string(path).with_context(|| format!("Failed to read {}", path))?;
    serde_json::from_str(&text).with_context(|| format!("Invalid JSON in {}", path))
}

pub fn read_content(path: &str) -> Result<ContentGraph> {
    read_json(path).context("Failed to load content graph")
}

pub fn read_brand(path: Option<&str>) -> Result<BrandTokens> {
    match path {
        Some(path) => read_json(path).context("Failed to load brand tokens"),
        None => Ok(BrandTokens::default()),
    }
}

/// A page is either a bare array of section nodes or an assembly, whose
/// primary page is used
pub fn read_page(path: &str) -> Result<Vec<SectionNode>> {
    let value: Value = read_json(path)?;
    let nodes = match value {
        Value::Object(mut object) if object.contains_key("primary") => object
            .remove("primary")
            .unwrap_or(Value::Null),
        other => other,
    };
    serde_json::from_value(nodes).with_context(|| format!("{} is not a page", path))
}

pub fn to_pretty_json<T: serde::Serialize>(value: &T) -> Result<String> {
    serde_json::to_string_pretty(value).context("Failed to serialize output")
}
