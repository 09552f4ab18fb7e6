//! Design specification model

use folio_core::{Emphasis, Layout, Motion, Priority, Spacing, Tone, Typography};
use folio_library::ContentBlock;
use serde::{Deserialize, Serialize};

/// High-level description of a page, usually produced upstream.
///
/// `style` and `content_strategy` are optional only so that a missing field
/// can be reported as `InvalidSpec` instead of a parse error.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DesignSpec {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub style: Option<StyleSpec>,
    #[serde(default)]
    pub sections: Vec<SectionSpec>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_strategy: Option<ContentStrategy>,
    #[serde(default)]
    pub layout: LayoutPreferences,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StyleSpec {
    #[serde(default)]
    pub tone: Tone,
    #[serde(default)]
    pub color_scheme: ColorScheme,
    /// Seed for the primary palette; the tone's seed when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub primary_color: Option<String>,
    #[serde(default)]
    pub spacing: Spacing,
    #[serde(default)]
    pub typography: Typography,
    #[serde(default)]
    pub animation: Motion,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorScheme {
    #[default]
    Light,
    Dark,
}

/// One requested section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SectionSpec {
    pub kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variant: Option<String>,
    #[serde(default)]
    pub priority: Priority,
    /// Literal content copied into the section's props
    #[serde(default, skip_serializing_if = "ContentBlock::is_empty")]
    pub content: ContentBlock,
    #[serde(default)]
    pub visual: VisualHints,
}

impl SectionSpec {
    pub fn new(kind: impl Into<String>, priority: Priority) -> Self {
        Self {
            kind: kind.into(),
            variant: None,
            priority,
            content: ContentBlock::new(),
            visual: VisualHints::default(),
        }
    }

    pub fn with_variant(mut self, variant: impl Into<String>) -> Self {
        self.variant = Some(variant.into());
        self
    }

    pub fn with_content(mut self, content: ContentBlock) -> Self {
        self.content = content;
        self
    }

    pub fn with_visual(mut self, layout: Option<Layout>, emphasis: Option<Emphasis>) -> Self {
        self.visual = VisualHints { layout, emphasis };
        self
    }
}

/// Requested look for a single section
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VisualHints {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub layout: Option<Layout>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub emphasis: Option<Emphasis>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentStrategy {
    #[serde(default)]
    pub voice: Voice,
    #[serde(default)]
    pub density: Density,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Voice {
    #[default]
    Professional,
    Friendly,
    Bold,
    Playful,
    Calm,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Density {
    Minimal,
    #[default]
    Balanced,
    Detailed,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutPreferences {
    #[serde(default)]
    pub first_impression: FirstImpression,
    #[serde(default)]
    pub flow: Flow,
    #[serde(default)]
    pub cta_strategy: CtaStrategy,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FirstImpression {
    Bold,
    #[default]
    Calm,
    Informative,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Flow {
    #[default]
    Linear,
    Storytelling,
    Scannable,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CtaStrategy {
    Soft,
    #[default]
    Direct,
    Urgent,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_camel_case_spec() {
        let spec: DesignSpec = serde_json::from_value(json!({
            "style": { "tone": "bold", "colorScheme": "dark", "animation": "rich" },
            "sections": [
                { "kind": "hero", "priority": "critical", "visual": { "emphasis": "dramatic" } },
                { "kind": "pricing", "variant": "tiers", "priority": "nice-to-have" }
            ],
            "contentStrategy": { "voice": "bold", "density": "minimal" },
            "layout": { "firstImpression": "bold", "ctaStrategy": "urgent" }
        }))
        .unwrap();

        let style = spec.style.unwrap();
        assert_eq!(style.tone, Tone::Bold);
        assert_eq!(style.color_scheme, ColorScheme::Dark);
        assert_eq!(style.animation, Motion::Rich);
        assert_eq!(spec.sections[0].visual.emphasis, Some(Emphasis::Dramatic));
        assert_eq!(spec.sections[1].priority, Priority::NiceToHave);
        assert_eq!(spec.content_strategy.unwrap().density, Density::Minimal);
        assert_eq!(spec.layout.cta_strategy, CtaStrategy::Urgent);
        assert_eq!(spec.layout.flow, Flow::Linear);
    }

    #[test]
    fn test_missing_fields_parse_as_none() {
        let spec: DesignSpec = serde_json::from_value(json!({ "sections": [] })).unwrap();
        assert!(spec.style.is_none());
        assert!(spec.content_strategy.is_none());
    }
}
