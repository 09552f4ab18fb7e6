//! Constraint evaluation and section scoring

use crate::axes::{accessibility, content_fit, performance};
use crate::tone::tone_match;
use crate::weights::{ScoreBreakdown, ScoreWeights};
use folio_core::{BrandTokens, Tone};
use folio_library::{Constraint, ContentGraph, Props, SectionMeta};
use serde_json::Value;

/// The page around a candidate placement
#[derive(Debug, Clone, Copy)]
pub struct PlacementContext<'a> {
    /// Kinds already placed, in order
    pub placed: &'a [&'a str],
    /// Every kind the page is meant to contain
    pub requested: &'a [String],
}

impl<'a> PlacementContext<'a> {
    pub fn new(placed: &'a [&'a str], requested: &'a [String]) -> Self {
        Self { placed, requested }
    }

    fn has_placed(&self, kind: &str) -> bool {
        self.placed.contains(&kind)
    }

    fn is_requested(&self, kind: &str) -> bool {
        self.requested.iter().any(|k| k == kind)
    }
}

/// Evaluates constraints and scores sections for one request
pub struct Evaluator<'a> {
    content: &'a ContentGraph,
    brand: &'a BrandTokens,
    tone: Tone,
    weights: ScoreWeights,
}

impl<'a> Evaluator<'a> {
    /// Create a new evaluator with default weights
    pub fn new(content: &'a ContentGraph, brand: &'a BrandTokens, tone: Tone) -> Self {
        Self {
            content,
            brand,
            tone,
            weights: ScoreWeights::default(),
        }
    }

    pub fn with_weights(mut self, weights: ScoreWeights) -> Self {
        self.weights = weights;
        self
    }

    pub fn tone(&self) -> Tone {
        self.tone
    }

    pub fn brand(&self) -> &BrandTokens {
        self.brand
    }

    pub fn weights(&self) -> &ScoreWeights {
        &self.weights
    }

    /// Check a single constraint for `meta` placed next in `ctx`
    pub fn holds(&self, constraint: &Constraint, meta: &SectionMeta, ctx: &PlacementContext) -> bool {
        match constraint {
            Constraint::First => ctx.placed.is_empty(),
            Constraint::Last { except } => ctx
                .requested
                .iter()
                .filter(|k| **k != meta.kind && !except.contains(*k))
                .all(|k| ctx.has_placed(k)),
            Constraint::After { kind } => !ctx.is_requested(kind) || ctx.has_placed(kind),
            Constraint::Before { kind } => !ctx.has_placed(kind),
            Constraint::Slot { slot } => self.content.has_slot(&meta.kind, slot),
            Constraint::ItemCount { slot, min, max } => {
                let count = self.content.item_count(&meta.kind, slot);
                min.map_or(true, |lo| count >= lo) && max.map_or(true, |hi| count <= hi)
            }
            Constraint::Tones { tones } => tones.contains(&self.tone),
        }
    }

    /// Whether every hard constraint holds
    pub fn is_admissible(&self, meta: &SectionMeta, ctx: &PlacementContext) -> bool {
        meta.hard_constraints
            .iter()
            .all(|c| self.holds(c, meta, ctx))
    }

    /// Hard constraints that fail at this placement
    pub fn failed_hard<'m>(&self, meta: &'m SectionMeta, ctx: &PlacementContext) -> Vec<&'m Constraint> {
        meta.hard_constraints
            .iter()
            .filter(|c| !self.holds(c, meta, ctx))
            .collect()
    }

    /// Soft constraints that fail at this placement
    pub fn failed_soft<'m>(&self, meta: &'m SectionMeta, ctx: &PlacementContext) -> Vec<&'m Constraint> {
        meta.soft_constraints
            .iter()
            .filter(|c| !self.holds(c, meta, ctx))
            .collect()
    }

    /// First hard constraint that fails regardless of position (content or
    /// tone), if any. Such a variant can never be placed for this request.
    pub fn static_failure<'m>(&self, meta: &'m SectionMeta) -> Option<&'m Constraint> {
        let ctx = PlacementContext::new(&[], &[]);
        meta.hard_constraints
            .iter()
            .filter(|c| !c.is_positional())
            .find(|c| !self.holds(c, meta, &ctx))
    }

    /// Props this variant renders with for the current content and tone
    pub fn props(&self, meta: &SectionMeta) -> Props {
        resolve_props(meta, self.content, self.tone)
    }

    /// Score `meta` as the next section after `ctx.placed`
    pub fn score(&self, meta: &SectionMeta, ctx: &PlacementContext) -> ScoreBreakdown {
        let props = self.props(meta);
        self.score_with_props(meta, ctx, &props)
    }

    /// Score a section whose props are already known (e.g. an edited page)
    pub fn score_with_props(
        &self,
        meta: &SectionMeta,
        ctx: &PlacementContext,
        props: &Props,
    ) -> ScoreBreakdown {
        ScoreBreakdown::combine(
            meta.key(),
            content_fit(meta, self.content),
            tone_match(&meta.style, self.tone),
            accessibility(meta, props, self.brand),
            performance(meta),
            self.failed_soft(meta, ctx).len(),
            &self.weights,
        )
    }
}

/// Props for a placed section: the variant's defaults, overlaid with the
/// content block for its kind, plus the active tone
pub fn resolve_props(meta: &SectionMeta, content: &ContentGraph, tone: Tone) -> Props {
    let mut props = meta.defaults.clone();
    if let Some(block) = content.block(&meta.kind) {
        for (slot, value) in block {
            if folio_library::is_populated(value) || !props.contains_key(slot) {
                props.insert(slot.clone(), value.clone());
            }
        }
    }
    props.insert("tone".to_string(), Value::String(tone.to_string()));
    props
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_library::ContentBlock;
    use serde_json::json;

    fn block(value: Value) -> ContentBlock {
        value.as_object().cloned().unwrap()
    }

    fn content() -> ContentGraph {
        ContentGraph::new()
            .with_block("hero", block(json!({ "headline": "Ship faster" })))
            .with_block("features", block(json!({ "features": ["a", "b"] })))
    }

    fn requested() -> Vec<String> {
        vec!["hero".into(), "features".into(), "cta".into(), "footer".into()]
    }

    #[test]
    fn test_positional_constraints() {
        let content = content();
        let brand = BrandTokens::default();
        let eval = Evaluator::new(&content, &brand, Tone::Bold);
        let requested = requested();
        let cta = SectionMeta::new("cta", "minimal");

        let empty = PlacementContext::new(&[], &requested);
        let after_hero = PlacementContext::new(&["hero"], &requested);
        let all_but_footer = PlacementContext::new(&["hero", "features"], &requested);

        assert!(eval.holds(&Constraint::First, &cta, &empty));
        assert!(!eval.holds(&Constraint::First, &cta, &after_hero));

        let after = Constraint::After { kind: "hero".into() };
        assert!(!eval.holds(&after, &cta, &empty));
        assert!(eval.holds(&after, &cta, &after_hero));

        let last = Constraint::Last { except: vec!["footer".into()] };
        assert!(!eval.holds(&last, &cta, &after_hero));
        assert!(eval.holds(&last, &cta, &all_but_footer));
        assert!(!eval.holds(&Constraint::Last { except: vec![] }, &cta, &all_but_footer));

        let before = Constraint::Before { kind: "features".into() };
        assert!(eval.holds(&before, &cta, &after_hero));
        assert!(!eval.holds(&before, &cta, &all_but_footer));
    }

    #[test]
    fn test_after_unrequested_kind_holds() {
        let content = content();
        let brand = BrandTokens::default();
        let eval = Evaluator::new(&content, &brand, Tone::Bold);
        let requested = vec!["features".to_string()];
        let ctx = PlacementContext::new(&[], &requested);
        let features = SectionMeta::new("features", "grid");
        assert!(eval.holds(&Constraint::After { kind: "hero".into() }, &features, &ctx));
    }

    #[test]
    fn test_content_constraints() {
        let content = content();
        let brand = BrandTokens::default();
        let eval = Evaluator::new(&content, &brand, Tone::Bold);
        let ctx = PlacementContext::new(&[], &[]);
        let features = SectionMeta::new("features", "bento");

        assert!(eval.holds(&Constraint::Slot { slot: "features".into() }, &features, &ctx));
        assert!(!eval.holds(&Constraint::Slot { slot: "images".into() }, &features, &ctx));
        let at_least_three = Constraint::ItemCount {
            slot: "features".into(),
            min: Some(3),
            max: None,
        };
        assert!(!eval.holds(&at_least_three, &features, &ctx));
        let at_most_two = Constraint::ItemCount {
            slot: "features".into(),
            min: None,
            max: Some(2),
        };
        assert!(eval.holds(&at_most_two, &features, &ctx));
        assert!(eval.holds(&Constraint::Tones { tones: vec![Tone::Bold] }, &features, &ctx));
        assert!(!eval.holds(&Constraint::Tones { tones: vec![Tone::Zen] }, &features, &ctx));
    }

    #[test]
    fn test_static_failure_ignores_position() {
        let content = content();
        let brand = BrandTokens::default();
        let eval = Evaluator::new(&content, &brand, Tone::Modern);

        let needs_image = SectionMeta::new("hero", "fullbleed")
            .with_hard(Constraint::First)
            .with_hard(Constraint::Slot { slot: "image".into() });
        assert_eq!(
            eval.static_failure(&needs_image),
            Some(&Constraint::Slot { slot: "image".into() })
        );

        let positional_only = SectionMeta::new("cta", "minimal")
            .with_hard(Constraint::After { kind: "hero".into() });
        assert_eq!(eval.static_failure(&positional_only), None);
    }

    #[test]
    fn test_resolve_props_layers() {
        let content = content();
        let meta = SectionMeta::new("hero", "centered")
            .with_default("buttonLabel", json!("Get started"))
            .with_default("headline", json!("Default"));
        let props = resolve_props(&meta, &content, Tone::Warm);
        assert_eq!(props["headline"], "Ship faster");
        assert_eq!(props["buttonLabel"], "Get started");
        assert_eq!(props["tone"], "warm");
    }

    #[test]
    fn test_empty_content_does_not_erase_default() {
        let content = ContentGraph::new().with_block("cta", block(json!({ "headline": "" })));
        let meta = SectionMeta::new("cta", "minimal").with_default("headline", json!("Ready?"));
        let props = resolve_props(&meta, &content, Tone::Modern);
        assert_eq!(props["headline"], "Ready?");
    }

    #[test]
    fn test_soft_violations_lower_score() {
        let content = content();
        let brand = BrandTokens::default();
        let eval = Evaluator::new(&content, &brand, Tone::Modern);
        let requested = requested();
        let ctx = PlacementContext::new(&["hero"], &requested);

        let plain = SectionMeta::new("features", "grid").with_slots(["features"]);
        let picky = plain
            .clone()
            .with_soft(Constraint::Slot { slot: "images".into() });
        let a = eval.score(&plain, &ctx);
        let b = eval.score(&picky, &ctx);
        assert_eq!(b.soft_violations, 1);
        assert!((a.total - b.total - 0.15).abs() < 1e-9);
        assert!(a.points > b.points);
    }
}
