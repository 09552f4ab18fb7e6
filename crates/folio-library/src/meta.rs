//! Section variant metadata

use crate::constraint::{A11yCheck, Constraint};
use folio_core::{Emphasis, Layout, Motion, Spacing, Tone, Typography};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Visual attributes of a variant, matched against tones and design specs
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VariantStyle {
    #[serde(default)]
    pub emphasis: Emphasis,
    #[serde(default)]
    pub layout: Layout,
    #[serde(default)]
    pub spacing: Spacing,
    #[serde(default)]
    pub motion: Motion,
    #[serde(default)]
    pub typography: Typography,
    /// Tones this variant was designed for
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tones: Vec<Tone>,
}

/// Registry entry for one `(kind, variant)` pair. Never mutated once registered.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionMeta {
    pub kind: String,
    pub variant: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub content_slots: Vec<String>,
    #[serde(default)]
    pub hard_constraints: Vec<Constraint>,
    #[serde(default)]
    pub soft_constraints: Vec<Constraint>,
    #[serde(default)]
    pub a11y_checklist: Vec<A11yCheck>,
    #[serde(default)]
    pub style: VariantStyle,
    /// Static performance cost, 0 (text only) to 10 (media heavy)
    #[serde(default)]
    pub cost: u8,
    /// Prop values used when the content graph leaves a slot empty
    #[serde(default, skip_serializing_if = "Map::is_empty")]
    pub defaults: Map<String, Value>,
}

impl SectionMeta {
    pub fn new(kind: impl Into<String>, variant: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            variant: variant.into(),
            description: None,
            content_slots: Vec::new(),
            hard_constraints: Vec::new(),
            soft_constraints: Vec::new(),
            a11y_checklist: Vec::new(),
            style: VariantStyle::default(),
            cost: 0,
            defaults: Map::new(),
        }
    }

    /// Registry key, `"{kind}-{variant}"`
    pub fn key(&self) -> String {
        format!("{}-{}", self.kind, self.variant)
    }

    pub fn has_slot(&self, slot: &str) -> bool {
        self.content_slots.iter().any(|s| s == slot)
    }

    pub fn with_slots<I, S>(mut self, slots: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.content_slots = slots.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_hard(mut self, constraint: Constraint) -> Self {
        self.hard_constraints.push(constraint);
        self
    }

    pub fn with_soft(mut self, constraint: Constraint) -> Self {
        self.soft_constraints.push(constraint);
        self
    }

    pub fn with_check(mut self, check: A11yCheck) -> Self {
        self.a11y_checklist.push(check);
        self
    }

    pub fn with_style(mut self, style: VariantStyle) -> Self {
        self.style = style;
        self
    }

    pub fn with_cost(mut self, cost: u8) -> Self {
        self.cost = cost;
        self
    }

    pub fn with_default(mut self, slot: impl Into<String>, value: Value) -> Self {
        self.defaults.insert(slot.into(), value);
        self
    }
}

/// TOML file format for section definitions
#[derive(Debug, Deserialize)]
pub struct SectionFile {
    #[serde(default)]
    pub section: Vec<SectionDefinition>,
}

/// Section definition as it appears in TOML files
#[derive(Debug, Deserialize)]
pub struct SectionDefinition {
    pub kind: String,
    pub variant: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub slots: Vec<String>,
    #[serde(default)]
    pub hard: Vec<Constraint>,
    #[serde(default)]
    pub soft: Vec<Constraint>,
    #[serde(default)]
    pub a11y: Vec<A11yCheck>,
    #[serde(default)]
    pub style: VariantStyle,
    #[serde(default)]
    pub cost: u8,
    #[serde(default)]
    pub defaults: Map<String, Value>,
}

impl SectionDefinition {
    pub fn into_meta(self) -> SectionMeta {
        SectionMeta {
            kind: self.kind,
            variant: self.variant,
            description: self.description,
            content_slots: self.slots,
            hard_constraints: self.hard,
            soft_constraints: self.soft,
            a11y_checklist: self.a11y,
            style: self.style,
            cost: self.cost.min(10),
            defaults: self.defaults,
        }
    }
}
