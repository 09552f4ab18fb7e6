//! Content graph supplied by the caller

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// Content payload for one section kind (headline, features, plans, ...)
pub type ContentBlock = Map<String, Value>;

/// Mapping from section kind to its content payload. Read-only to the engine.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContentGraph(BTreeMap<String, ContentBlock>);

impl ContentGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert
    pub fn with_block(mut self, kind: impl Into<String>, block: ContentBlock) -> Self {
        self.insert(kind, block);
        self
    }

    pub fn insert(&mut self, kind: impl Into<String>, block: ContentBlock) {
        self.0.insert(kind.into(), block);
    }

    pub fn block(&self, kind: &str) -> Option<&ContentBlock> {
        self.0.get(kind)
    }

    /// The slot's value, if it is populated
    pub fn slot(&self, kind: &str, slot: &str) -> Option<&Value> {
        self.block(kind)
            .and_then(|b| b.get(slot))
            .filter(|v| is_populated(v))
    }

    pub fn has_slot(&self, kind: &str, slot: &str) -> bool {
        self.slot(kind, slot).is_some()
    }

    /// Number of items in a slot: list length, 1 for a populated scalar, 0 if missing
    pub fn item_count(&self, kind: &str, slot: &str) -> usize {
        match self.slot(kind, slot) {
            Some(Value::Array(items)) => items.len(),
            Some(_) => 1,
            None => 0,
        }
    }

    /// Kinds with content, in sorted order
    pub fn kinds(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(|k| k.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// A value counts as content unless it is null or an empty string/list/object
pub fn is_populated(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::String(s) => !s.trim().is_empty(),
        Value::Array(a) => !a.is_empty(),
        Value::Object(o) => !o.is_empty(),
        Value::Bool(_) | Value::Number(_) => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn block(value: Value) -> ContentBlock {
        value.as_object().cloned().unwrap()
    }

    fn sample() -> ContentGraph {
        ContentGraph::new()
            .with_block("hero", block(json!({ "headline": "Ship faster", "subheadline": "  " })))
            .with_block(
                "features",
                block(json!({ "features": ["Fast", "Safe", "Cheap"], "images": [] })),
            )
    }

    #[test]
    fn test_populated_slots() {
        let content = sample();
        assert!(content.has_slot("hero", "headline"));
        assert!(!content.has_slot("hero", "subheadline"));
        assert!(!content.has_slot("hero", "image"));
        assert!(!content.has_slot("pricing", "plans"));
        assert!(!content.has_slot("features", "images"));
    }

    #[test]
    fn test_item_count() {
        let content = sample();
        assert_eq!(content.item_count("features", "features"), 3);
        assert_eq!(content.item_count("hero", "headline"), 1);
        assert_eq!(content.item_count("features", "images"), 0);
    }

    #[test]
    fn test_deserializes_from_plain_object() {
        let content: ContentGraph =
            serde_json::from_value(json!({ "cta": { "headline": "Join us" } })).unwrap();
        assert!(content.has_slot("cta", "headline"));
        assert_eq!(content.kinds().collect::<Vec<_>>(), vec!["cta"]);
    }
}
