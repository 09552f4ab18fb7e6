//! Placed sections

use crate::meta::SectionMeta;
use folio_core::SectionId;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Resolved props handed to renderers
pub type Props = Map<String, Value>;

/// A section placed on a page.
///
/// Pages are plain `Vec<SectionNode>`; edits build new vectors rather than
/// mutating nodes that another snapshot may share.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionNode {
    pub id: SectionId,
    pub meta: SectionMeta,
    pub props: Props,
    pub position: usize,
}

impl SectionNode {
    pub fn new(meta: SectionMeta, props: Props, position: usize) -> Self {
        Self {
            id: SectionId::new(&meta.kind, &meta.variant, position),
            meta,
            props,
            position,
        }
    }

    pub fn kind(&self) -> &str {
        &self.meta.kind
    }

    pub fn variant(&self) -> &str {
        &self.meta.variant
    }

    pub fn key(&self) -> String {
        self.meta.key()
    }

    pub fn prop_str(&self, key: &str) -> Option<&str> {
        self.props.get(key).and_then(|v| v.as_str())
    }

    /// Copy with one prop replaced
    pub fn with_prop(&self, key: impl Into<String>, value: Value) -> Self {
        let mut next = self.clone();
        next.props.insert(key.into(), value);
        next
    }

    /// Copy rendered with another variant. Props carry over; the meta's
    /// defaults fill slots the props leave empty.
    pub fn with_meta(&self, meta: SectionMeta) -> Self {
        let mut props = self.props.clone();
        for (slot, value) in &meta.defaults {
            props.entry(slot.clone()).or_insert_with(|| value.clone());
        }
        Self::new(meta, props, self.position)
    }
}

/// Reassign positions and ids after sections were added, removed or reordered
pub fn renumber(nodes: Vec<SectionNode>) -> Vec<SectionNode> {
    nodes
        .into_iter()
        .enumerate()
        .map(|(position, node)| SectionNode::new(node.meta, node.props, position))
        .collect()
}

/// `"{kind}-{variant}"` keys of a page, in order
pub fn page_keys(nodes: &[SectionNode]) -> Vec<String> {
    nodes.iter().map(|n| n.key()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn node(kind: &str, variant: &str, position: usize) -> SectionNode {
        SectionNode::new(SectionMeta::new(kind, variant), Props::new(), position)
    }

    #[test]
    fn test_id_follows_position() {
        let n = node("hero", "split", 0);
        assert_eq!(n.id.as_str(), "hero-split-0");
        assert_eq!(n.key(), "hero-split");
    }

    #[test]
    fn test_with_prop_leaves_original() {
        let original = node("hero", "split", 0);
        let edited = original.with_prop("headline", json!("Hello"));
        assert_eq!(edited.prop_str("headline"), Some("Hello"));
        assert!(original.props.is_empty());
    }

    #[test]
    fn test_with_meta_fills_defaults_only_when_missing() {
        let original = node("cta", "minimal", 2).with_prop("buttonLabel", json!("Buy"));
        let banner = SectionMeta::new("cta", "banner")
            .with_default("buttonLabel", json!("Get started"))
            .with_default("subheadline", json!("No card needed"));
        let swapped = original.with_meta(banner);
        assert_eq!(swapped.id.as_str(), "cta-banner-2");
        assert_eq!(swapped.prop_str("buttonLabel"), Some("Buy"));
        assert_eq!(swapped.prop_str("subheadline"), Some("No card needed"));
    }

    #[test]
    fn test_renumber() {
        let page = vec![node("cta", "banner", 2), node("hero", "split", 0)];
        let page = renumber(page);
        assert_eq!(page[0].position, 0);
        assert_eq!(page[0].id.as_str(), "cta-banner-0");
        assert_eq!(page[1].id.as_str(), "hero-split-1");
        assert_eq!(page_keys(&page), vec!["cta-banner", "hero-split"]);
    }
}
