//! Constraint and accessibility check definitions

use folio_core::Tone;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A placement condition attached to a section variant.
///
/// Listed under `hard` a constraint gates admissibility; listed under
/// `soft` it only costs score when violated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Constraint {
    /// Section must open the page
    First,
    /// Every other requested kind, except those listed, must already be placed
    Last {
        #[serde(default, skip_serializing_if = "Vec::is_empty")]
        except: Vec<String>,
    },
    /// A section of `kind` must already be placed (if `kind` was requested)
    After { kind: String },
    /// No section of `kind` may already be placed
    Before { kind: String },
    /// The content graph must populate `slot` for this section's kind
    Slot { slot: String },
    /// The list in `slot` must have a length within bounds
    ItemCount {
        slot: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        min: Option<usize>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        max: Option<usize>,
    },
    /// The requested tone must be one of these
    Tones { tones: Vec<Tone> },
}

impl Constraint {
    /// Whether the constraint depends on the sequence placed so far
    /// rather than on content or tone alone
    pub fn is_positional(&self) -> bool {
        matches!(
            self,
            Constraint::First
                | Constraint::Last { .. }
                | Constraint::After { .. }
                | Constraint::Before { .. }
        )
    }
}

impl fmt::Display for Constraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Constraint::First => write!(f, "must be first"),
            Constraint::Last { except } if except.is_empty() => write!(f, "must be last"),
            Constraint::Last { except } => {
                write!(f, "must be last (except before {})", except.join(", "))
            }
            Constraint::After { kind } => write!(f, "must follow {}", kind),
            Constraint::Before { kind } => write!(f, "must precede {}", kind),
            Constraint::Slot { slot } => write!(f, "needs content for '{}'", slot),
            Constraint::ItemCount { slot, min, max } => match (min, max) {
                (Some(lo), Some(hi)) => write!(f, "needs {}..={} items in '{}'", lo, hi, slot),
                (Some(lo), None) => write!(f, "needs at least {} items in '{}'", lo, slot),
                (None, Some(hi)) => write!(f, "needs at most {} items in '{}'", hi, slot),
                (None, None) => write!(f, "needs a list in '{}'", slot),
            },
            Constraint::Tones { tones } => {
                let names: Vec<&str> = tones.iter().map(|t| t.as_str()).collect();
                write!(f, "only for tones {}", names.join(", "))
            }
        }
    }
}

/// An accessibility checklist entry evaluated against resolved props
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "check", rename_all = "snake_case")]
pub enum A11yCheck {
    /// Images in `slot` carry alt text
    AltText { slot: String },
    /// `slot` holds a non-empty heading
    Heading { slot: String },
    /// Link label in `slot` is descriptive
    LinkText { slot: String },
    /// Brand text/background contrast reaches `min_ratio`
    Contrast { min_ratio: f32 },
    /// Rich motion has a reduced-motion fallback
    MotionSafe,
}

impl fmt::Display for A11yCheck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            A11yCheck::AltText { slot } => write!(f, "alt text for '{}'", slot),
            A11yCheck::Heading { slot } => write!(f, "heading in '{}'", slot),
            A11yCheck::LinkText { slot } => write!(f, "descriptive link text in '{}'", slot),
            A11yCheck::Contrast { min_ratio } => write!(f, "contrast ratio >= {}", min_ratio),
            A11yCheck::MotionSafe => write!(f, "reduced-motion fallback"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Deserialize)]
    struct Wrapper {
        constraint: Vec<Constraint>,
    }

    #[test]
    fn test_parse_constraints_from_toml() {
        let toml_str = r#"
[[constraint]]
type = "first"

[[constraint]]
type = "last"
except = ["footer"]

[[constraint]]
type = "after"
kind = "hero"

[[constraint]]
type = "item_count"
slot = "features"
min = 3
"#;

        let parsed: Wrapper = toml::from_str(toml_str).unwrap();
        assert_eq!(parsed.constraint.len(), 4);
        assert_eq!(parsed.constraint[0], Constraint::First);
        assert!(matches!(&parsed.constraint[1], Constraint::Last { except } if except == &["footer"]));
        assert!(matches!(&parsed.constraint[2], Constraint::After { kind } if kind == "hero"));
        assert!(matches!(
            &parsed.constraint[3],
            Constraint::ItemCount { slot, min: Some(3), max: None } if slot == "features"
        ));
    }

    #[test]
    fn test_last_defaults_to_no_exceptions() {
        let parsed: Wrapper = toml::from_str("[[constraint]]\ntype = \"last\"\n").unwrap();
        assert_eq!(parsed.constraint[0], Constraint::Last { except: vec![] });
    }

    #[test]
    fn test_parse_tones_constraint() {
        let parsed: Wrapper =
            toml::from_str("[[constraint]]\ntype = \"tones\"\ntones = [\"bold\", \"retro\"]\n")
                .unwrap();
        assert_eq!(
            parsed.constraint[0],
            Constraint::Tones {
                tones: vec![Tone::Bold, Tone::Retro]
            }
        );
    }

    #[test]
    fn test_positional_classification() {
        assert!(Constraint::First.is_positional());
        assert!(Constraint::Before { kind: "cta".into() }.is_positional());
        assert!(!Constraint::Slot { slot: "headline".into() }.is_positional());
        assert!(!Constraint::Tones { tones: vec![] }.is_positional());
    }

    #[test]
    fn test_a11y_check_json_shape() {
        let json = serde_json::to_value(A11yCheck::AltText { slot: "image".into() }).unwrap();
        assert_eq!(json["check"], "alt_text");
        assert_eq!(json["slot"], "image");
        let back: A11yCheck = serde_json::from_value(json).unwrap();
        assert_eq!(back, A11yCheck::AltText { slot: "image".into() });
    }

    #[test]
    fn test_display_is_readable() {
        assert_eq!(Constraint::After { kind: "hero".into() }.to_string(), "must follow hero");
        assert_eq!(
            Constraint::Last { except: vec!["footer".into()] }.to_string(),
            "must be last (except before footer)"
        );
    }
}
