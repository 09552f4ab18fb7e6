//! Greedy per-kind variant selection

use crate::brand::derive_brand;
use crate::spec::{
    CtaStrategy, DesignSpec, FirstImpression, Flow, LayoutPreferences, SectionSpec, StyleSpec,
};
use crate::strategy::apply_strategy;
use folio_core::{BrandTokens, Emphasis, FolioError, Layout, Priority, Result, Tone};
use folio_library::{ContentBlock, ContentGraph, SectionLibrary, SectionMeta, SectionNode};
use folio_score::resolve_props;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// One section picked by the resolver
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolvedSection {
    pub kind: String,
    pub variant: String,
    pub content: ContentBlock,
}

/// Output of [`Resolver::resolve`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedPage {
    pub tone: Tone,
    pub sections: Vec<ResolvedSection>,
    pub brand: BrandTokens,
    /// Kinds marked critical, in spec order
    pub required_sections: Vec<String>,
}

impl ResolvedPage {
    /// Materialize the page for editing
    pub fn to_nodes(&self, library: &SectionLibrary) -> Result<Vec<SectionNode>> {
        self.sections
            .iter()
            .enumerate()
            .map(|(position, section)| {
                let meta = library
                    .get_variant(&section.kind, &section.variant)
                    .ok_or_else(|| {
                        FolioError::SectionNotFound(format!("{}-{}", section.kind, section.variant))
                    })?;
                let content = ContentGraph::new().with_block(&section.kind, section.content.clone());
                let props = resolve_props(meta, &content, self.tone);
                Ok(SectionNode::new(meta.clone(), props, position))
            })
            .collect()
    }

    /// The resolved content as a graph, e.g. to hand to the assembler.
    /// A later section of the same kind wins.
    pub fn content_graph(&self) -> ContentGraph {
        let mut graph = ContentGraph::new();
        for section in &self.sections {
            graph.insert(&section.kind, section.content.clone());
        }
        graph
    }
}

/// Maps a design spec onto concrete variants of a library
pub struct Resolver<'a> {
    library: &'a SectionLibrary,
}

impl<'a> Resolver<'a> {
    pub fn new(library: &'a SectionLibrary) -> Self {
        Self { library }
    }

    /// Resolve every requested section in a single greedy pass
    pub fn resolve(&self, spec: &DesignSpec) -> Result<ResolvedPage> {
        let style = spec
            .style
            .as_ref()
            .ok_or_else(|| FolioError::InvalidSpec("missing 'style'".to_string()))?;
        let strategy = spec
            .content_strategy
            .as_ref()
            .ok_or_else(|| FolioError::InvalidSpec("missing 'contentStrategy'".to_string()))?;
        if spec.sections.is_empty() {
            return Err(FolioError::InvalidSpec("no sections requested".to_string()));
        }

        let mut sections = Vec::with_capacity(spec.sections.len());
        let mut required_sections: Vec<String> = Vec::new();

        for section in &spec.sections {
            let meta = self.pick_variant(section, style, &spec.layout)?;
            debug!(kind = %section.kind, variant = %meta.variant, "resolved section");

            sections.push(ResolvedSection {
                kind: meta.kind.clone(),
                variant: meta.variant.clone(),
                content: apply_strategy(&section.content, strategy),
            });
            if section.priority == Priority::Critical && !required_sections.contains(&section.kind) {
                required_sections.push(section.kind.clone());
            }
        }

        Ok(ResolvedPage {
            tone: style.tone,
            sections,
            brand: derive_brand(style)?,
            required_sections,
        })
    }

    fn pick_variant(
        &self,
        section: &SectionSpec,
        style: &StyleSpec,
        layout: &LayoutPreferences,
    ) -> Result<&'a SectionMeta> {
        let variants = self.library.variants_of(&section.kind);
        if variants.is_empty() {
            return Err(FolioError::InvalidSpec(format!(
                "unknown section kind '{}'",
                section.kind
            )));
        }

        if let Some(name) = &section.variant {
            match variants.iter().find(|m| &m.variant == name) {
                Some(&meta) => return Ok(meta),
                None => warn!(
                    kind = %section.kind,
                    variant = %name,
                    "requested variant not registered; choosing by style"
                ),
            }
        }

        // Strictly greater keeps the earliest registered variant on ties
        let mut best = variants[0];
        let mut best_score = variant_score(best, section, style, layout);
        for &meta in &variants[1..] {
            let score = variant_score(meta, section, style, layout);
            if score > best_score {
                best = meta;
                best_score = score;
            }
        }
        Ok(best)
    }
}

/// Resolve with a one-off resolver
pub fn resolve_spec(library: &SectionLibrary, spec: &DesignSpec) -> Result<ResolvedPage> {
    Resolver::new(library).resolve(spec)
}

/// Additive style-match heuristic for one candidate variant
pub fn variant_score(
    meta: &SectionMeta,
    section: &SectionSpec,
    style: &StyleSpec,
    layout: &LayoutPreferences,
) -> u32 {
    let s = &meta.style;
    let mut score = 0;

    if section.visual.layout == Some(s.layout) {
        score += 3;
    }
    if section.visual.emphasis == Some(s.emphasis) {
        score += 3;
    }
    if style.spacing == s.spacing {
        score += 2;
    }
    if style.animation == s.motion {
        score += 2;
    }
    if style.typography == s.typography {
        score += 1;
    }
    if s.tones.contains(&style.tone) {
        score += 1;
    }

    if meta.kind == "hero"
        && layout.first_impression == FirstImpression::Bold
        && s.emphasis == Emphasis::Dramatic
    {
        score += 2;
    }
    if meta.kind == "cta" {
        let wanted = match layout.cta_strategy {
            CtaStrategy::Soft => Some(Emphasis::Subtle),
            CtaStrategy::Direct => None,
            CtaStrategy::Urgent => Some(Emphasis::Dramatic),
        };
        if wanted == Some(s.emphasis) {
            score += 2;
        }
    }
    let flow_fits = match layout.flow {
        Flow::Linear => false,
        Flow::Storytelling => matches!(s.layout, Layout::Split | Layout::Stacked | Layout::FullBleed),
        Flow::Scannable => matches!(s.layout, Layout::Grid | Layout::List | Layout::Columns | Layout::Bento),
    };
    if flow_fits {
        score += 1;
    }

    score
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spec::{ContentStrategy, Density, Voice};
    use folio_core::{Motion, Spacing, Typography};
    use folio_library::VariantStyle;
    use serde_json::{json, Value};

    fn block(value: Value) -> ContentBlock {
        value.as_object().cloned().unwrap()
    }

    fn spec(sections: Vec<SectionSpec>) -> DesignSpec {
        DesignSpec {
            style: Some(StyleSpec {
                tone: Tone::Bold,
                ..Default::default()
            }),
            sections,
            content_strategy: Some(ContentStrategy::default()),
            layout: LayoutPreferences::default(),
        }
    }

    #[test]
    fn test_missing_top_level_fields() {
        let library = SectionLibrary::builtin().unwrap();
        let resolver = Resolver::new(&library);

        let mut s = spec(vec![SectionSpec::new("hero", Priority::Critical)]);
        s.style = None;
        assert!(matches!(resolver.resolve(&s), Err(FolioError::InvalidSpec(m)) if m.contains("style")));

        let mut s = spec(vec![SectionSpec::new("hero", Priority::Critical)]);
        s.content_strategy = None;
        assert!(matches!(
            resolver.resolve(&s),
            Err(FolioError::InvalidSpec(m)) if m.contains("contentStrategy")
        ));

        assert!(matches!(resolver.resolve(&spec(vec![])), Err(FolioError::InvalidSpec(_))));
    }

    #[test]
    fn test_unknown_kind_is_invalid_spec() {
        let library = SectionLibrary::builtin().unwrap();
        let err = resolve_spec(&library, &spec(vec![SectionSpec::new("newsletter", Priority::Critical)]))
            .unwrap_err();
        assert!(matches!(err, FolioError::InvalidSpec(m) if m.contains("newsletter")));
    }

    #[test]
    fn test_explicit_variant_is_used_verbatim() {
        let library = SectionLibrary::builtin().unwrap();
        let page = resolve_spec(
            &library,
            &spec(vec![SectionSpec::new("hero", Priority::Critical).with_variant("minimal")]),
        )
        .unwrap();
        assert_eq!(page.sections[0].variant, "minimal");
    }

    #[test]
    fn test_unregistered_variant_falls_back_to_heuristic() {
        let library = SectionLibrary::builtin().unwrap();
        let page = resolve_spec(
            &library,
            &spec(vec![SectionSpec::new("hero", Priority::Critical).with_variant("hologram")]),
        )
        .unwrap();
        assert!(library.get_variant("hero", &page.sections[0].variant).is_some());
    }

    #[test]
    fn test_visual_hints_steer_selection() {
        let library = SectionLibrary::builtin().unwrap();
        let page = resolve_spec(
            &library,
            &spec(vec![SectionSpec::new("features", Priority::Critical)
                .with_visual(Some(Layout::Bento), Some(Emphasis::Dramatic))]),
        )
        .unwrap();
        assert_eq!(page.sections[0].variant, "bento");
    }

    #[test]
    fn test_ties_go_to_registry_order() {
        let mut library = SectionLibrary::new();
        library.register(SectionMeta::new("hero", "first"));
        library.register(SectionMeta::new("hero", "second"));
        let page = resolve_spec(&library, &spec(vec![SectionSpec::new("hero", Priority::Critical)]))
            .unwrap();
        assert_eq!(page.sections[0].variant, "first");
    }

    #[test]
    fn test_bold_first_impression_prefers_dramatic_hero() {
        let hero = SectionMeta::new("hero", "x").with_style(VariantStyle {
            emphasis: Emphasis::Dramatic,
            ..Default::default()
        });
        let section = SectionSpec::new("hero", Priority::Critical);
        let style = StyleSpec::default();
        let calm = LayoutPreferences::default();
        let bold = LayoutPreferences {
            first_impression: FirstImpression::Bold,
            ..Default::default()
        };
        assert_eq!(
            variant_score(&hero, &section, &style, &bold),
            variant_score(&hero, &section, &style, &calm) + 2
        );
    }

    #[test]
    fn test_additive_increments() {
        let meta = SectionMeta::new("features", "grid").with_style(VariantStyle {
            emphasis: Emphasis::Balanced,
            layout: Layout::Grid,
            spacing: Spacing::Compact,
            motion: Motion::Rich,
            typography: Typography::Mono,
            tones: vec![Tone::Techno],
        });
        let section = SectionSpec::new("features", Priority::Important)
            .with_visual(Some(Layout::Grid), Some(Emphasis::Balanced));
        let style = StyleSpec {
            tone: Tone::Techno,
            spacing: Spacing::Compact,
            animation: Motion::Rich,
            typography: Typography::Mono,
            ..Default::default()
        };
        assert_eq!(variant_score(&meta, &section, &style, &LayoutPreferences::default()), 12);
    }

    #[test]
    fn test_content_strategy_and_required_sections() {
        let library = SectionLibrary::builtin().unwrap();
        let mut s = spec(vec![
            SectionSpec::new("hero", Priority::Critical)
                .with_content(block(json!({ "headline": "Ship faster" }))),
            SectionSpec::new("features", Priority::Important)
                .with_content(block(json!({ "features": ["a", "b", "c", "d"] }))),
            SectionSpec::new("cta", Priority::Critical),
        ]);
        s.content_strategy = Some(ContentStrategy {
            voice: Voice::Bold,
            density: Density::Minimal,
        });
        let page = resolve_spec(&library, &s).unwrap();

        assert_eq!(page.tone, Tone::Bold);
        assert_eq!(page.required_sections, vec!["hero", "cta"]);
        assert_eq!(page.sections[0].content["headline"], "SHIP FASTER");
        assert_eq!(page.sections[1].content["features"].as_array().unwrap().len(), 3);
        assert_eq!(page.brand.colors.primary.base().to_hex(), "#dc2626");
    }

    #[test]
    fn test_to_nodes_merges_defaults_and_tone() {
        let library = SectionLibrary::builtin().unwrap();
        let page = resolve_spec(
            &library,
            &spec(vec![
                SectionSpec::new("hero", Priority::Critical)
                    .with_variant("centered")
                    .with_content(block(json!({ "headline": "Hello" }))),
                SectionSpec::new("cta", Priority::Critical).with_variant("minimal"),
            ]),
        )
        .unwrap();
        let nodes = page.to_nodes(&library).unwrap();
        assert_eq!(nodes.len(), 2);
        assert_eq!(nodes[0].id.as_str(), "hero-centered-0");
        assert_eq!(nodes[0].prop_str("headline"), Some("Hello"));
        assert_eq!(nodes[0].prop_str("buttonLabel"), Some("Get started"));
        assert_eq!(nodes[1].prop_str("tone"), Some("bold"));
        assert!(page.content_graph().has_slot("hero", "headline"));
    }

    #[test]
    fn test_resolution_is_deterministic() {
        let library = SectionLibrary::builtin().unwrap();
        let s = spec(vec![
            SectionSpec::new("hero", Priority::Critical),
            SectionSpec::new("testimonials", Priority::NiceToHave),
            SectionSpec::new("footer", Priority::Important),
        ]);
        assert_eq!(resolve_spec(&library, &s).unwrap(), resolve_spec(&library, &s).unwrap());
    }
}
