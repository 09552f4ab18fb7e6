//! The four scoring axes. Every function is pure and returns a value in `[0, 1]`.

use folio_core::{BrandTokens, Motion};
use folio_library::{is_populated, A11yCheck, ContentGraph, Props, SectionMeta};
use serde_json::Value;

/// Labels that say nothing about where a link goes
const GENERIC_LINK_TEXT: &[&str] = &[
    "click here",
    "here",
    "more",
    "read more",
    "learn more",
    "link",
    "this",
];

/// Fraction of the variant's content slots the content graph populates
pub fn content_fit(meta: &SectionMeta, content: &ContentGraph) -> f64 {
    if meta.content_slots.is_empty() {
        return 1.0;
    }
    let filled = meta
        .content_slots
        .iter()
        .filter(|slot| content.has_slot(&meta.kind, slot))
        .count();
    filled as f64 / meta.content_slots.len() as f64
}

/// Fraction of the accessibility checklist the resolved props satisfy
pub fn accessibility(meta: &SectionMeta, props: &Props, brand: &BrandTokens) -> f64 {
    if meta.a11y_checklist.is_empty() {
        return 1.0;
    }
    let passed = meta
        .a11y_checklist
        .iter()
        .filter(|check| check_passes(check, meta, props, brand))
        .count();
    passed as f64 / meta.a11y_checklist.len() as f64
}

/// Static cost inverted: text-only sections score 1, media-heavy ones near 0
pub fn performance(meta: &SectionMeta) -> f64 {
    1.0 - f64::from(meta.cost.min(10)) / 10.0
}

/// Evaluate one accessibility check
pub fn check_passes(
    check: &A11yCheck,
    meta: &SectionMeta,
    props: &Props,
    brand: &BrandTokens,
) -> bool {
    match check {
        A11yCheck::AltText { slot } => match populated(props, slot) {
            None => true,
            Some(value) => {
                has_alt(value) || populated(props, &format!("{}Alt", slot)).is_some()
            }
        },
        A11yCheck::Heading { slot } => populated(props, slot)
            .map(|v| v.is_string())
            .unwrap_or(false),
        A11yCheck::LinkText { slot } => match populated(props, slot) {
            None => true,
            Some(Value::String(label)) => {
                let label = label.trim().to_lowercase();
                !GENERIC_LINK_TEXT.contains(&label.as_str())
            }
            Some(_) => false,
        },
        A11yCheck::Contrast { min_ratio } => brand.text_contrast() >= *min_ratio,
        A11yCheck::MotionSafe => {
            meta.style.motion != Motion::Rich
                || props.get("reducedMotion") == Some(&Value::Bool(true))
        }
    }
}

fn populated<'p>(props: &'p Props, slot: &str) -> Option<&'p Value> {
    props.get(slot).filter(|v| is_populated(v))
}

// An image object with its own alt, or a list made only of those
fn has_alt(value: &Value) -> bool {
    match value {
        Value::Object(obj) => obj.get("alt").map(is_populated).unwrap_or(false),
        Value::Array(items) => items.iter().all(|item| {
            item.as_object()
                .and_then(|o| o.get("alt"))
                .map(is_populated)
                .unwrap_or(false)
        }),
        _ => false,
    }
}
