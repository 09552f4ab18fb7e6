//! Pure page transforms

use folio_core::Tone;
use folio_library::{renumber, Props, SectionMeta, SectionNode};
use serde_json::Value;
use std::fmt;
use std::sync::Arc;

type PageFn = dyn Fn(&[SectionNode]) -> Vec<SectionNode> + Send + Sync;

/// A labelled, pure page edit. Applying it never touches the input slice.
#[derive(Clone)]
pub struct Transform {
    label: String,
    apply: Arc<PageFn>,
}

impl Transform {
    pub fn new<F>(label: impl Into<String>, apply: F) -> Self
    where
        F: Fn(&[SectionNode]) -> Vec<SectionNode> + Send + Sync + 'static,
    {
        Self {
            label: label.into(),
            apply: Arc::new(apply),
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn apply(&self, page: &[SectionNode]) -> Vec<SectionNode> {
        (self.apply)(page)
    }

    /// Run several transforms in order as one edit
    pub fn chain(label: impl Into<String>, transforms: Vec<Transform>) -> Self {
        Self::new(label, move |page| {
            transforms
                .iter()
                .fold(page.to_vec(), |acc, t| t.apply(&acc))
        })
    }

    pub fn update_content(kind: &str, field: &str, text: &str) -> Self {
        let (kind, field, text) = (kind.to_string(), field.to_string(), text.to_string());
        Self::new(format!("updateContent:{}.{}", kind, field), move |page| {
            let target = page.iter().position(|n| n.kind() == kind);
            page.iter()
                .enumerate()
                .map(|(i, node)| {
                    if Some(i) == target {
                        node.with_prop(field.as_str(), Value::String(text.clone()))
                    } else {
                        node.clone()
                    }
                })
                .collect()
        })
    }

    /// Re-render every section of `meta.kind` with `meta`
    pub fn swap_variant(label: impl Into<String>, meta: SectionMeta) -> Self {
        Self::new(label, move |page| {
            page.iter()
                .map(|node| {
                    if node.kind() == meta.kind {
                        node.with_meta(meta.clone())
                    } else {
                        node.clone()
                    }
                })
                .collect()
        })
    }

    pub fn apply_theme(tone: Tone) -> Self {
        Self::new(format!("applyTheme:{}", tone), move |page| {
            page.iter()
                .map(|node| node.with_prop("tone", Value::String(tone.to_string())))
                .collect()
        })
    }

    pub fn add_urgency() -> Self {
        Self::new("addUrgency", |page| {
            page.iter()
                .map(|node| {
                    if node.kind() == "cta" {
                        node.with_prop("urgent", Value::Bool(true))
                            .with_prop("badge", Value::String(URGENCY_BADGE.to_string()))
                    } else {
                        node.clone()
                    }
                })
                .collect()
        })
    }

    pub fn tighten_above_fold() -> Self {
        Self::new("tightenAboveFold", |page| {
            let mut next = page.to_vec();
            if let Some(first) = next.first_mut() {
                first.props.insert("density".to_string(), Value::String("compact".to_string()));
                first.props.remove("subheadline");
            }
            next
        })
    }

    pub fn move_section(kind: &str, direction: Direction) -> Self {
        let kind = kind.to_string();
        Self::new(format!("moveSection:{}.{}", kind, direction), move |page| {
            let mut next = page.to_vec();
            let Some(from) = next.iter().position(|n| n.kind() == kind) else {
                return next;
            };
            let last = next.len() - 1;
            let to = match direction {
                Direction::Up => from.saturating_sub(1),
                Direction::Down => (from + 1).min(last),
                Direction::Top => 0,
                Direction::Bottom => last,
            };
            let node = next.remove(from);
            next.insert(to, node);
            renumber(next)
        })
    }

    pub fn remove_section(kind: &str) -> Self {
        let kind = kind.to_string();
        Self::new(format!("removeSection:{}", kind), move |page| {
            renumber(page.iter().filter(|n| n.kind() != kind).cloned().collect())
        })
    }

    /// Insert a new section before any trailing footers. The new section
    /// inherits the page tone from its first section.
    pub fn add_section(meta: SectionMeta) -> Self {
        Self::new(format!("addSection:{}", meta.kind), move |page| {
            let mut props: Props = meta.defaults.clone();
            if let Some(tone) = page.first().and_then(|n| n.props.get("tone")) {
                props.insert("tone".to_string(), tone.clone());
            }

            let mut next = page.to_vec();
            let at = next
                .iter()
                .rposition(|n| n.kind() != "footer")
                .map_or(0, |i| i + 1);
            next.insert(at, SectionNode::new(meta.clone(), props, at));
            renumber(next)
        })
    }
}

impl fmt::Debug for Transform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Transform").field("label", &self.label).finish()
    }
}

const URGENCY_BADGE: &str = "Limited time";

/// Where `move <kind> ...` sends a section
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Top,
    Bottom,
}

impl Direction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Top => "top",
            Direction::Bottom => "bottom",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
