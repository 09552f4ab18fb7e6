//! Command interpretation
//!
//! A command is split into clauses, and each clause is matched against an
//! ordered table of patterns. The first pattern that matches decides the
//! intent. Clauses that match nothing, or that target a section the page
//! does not have, become warnings instead of errors.

use crate::transforms::{Direction, Transform};
use folio_core::{Emphasis, FolioError, Tone};
use folio_library::{SectionLibrary, SectionNode};
use regex::{Captures, Regex};
use tracing::{debug, warn};

/// What a command turned into
#[derive(Debug, Clone, Default)]
pub struct Interpretation {
    /// `"{name}:{target}"` labels, one per recognised clause
    pub intents: Vec<String>,
    pub transforms: Vec<Transform>,
    pub warnings: Vec<String>,
}

impl Interpretation {
    pub fn is_empty(&self) -> bool {
        self.transforms.is_empty()
    }

    /// All transforms as a single edit, or `None` when nothing was recognised
    pub fn combined(&self, label: impl Into<String>) -> Option<Transform> {
        match self.transforms.len() {
            0 => None,
            1 => Some(self.transforms[0].clone()),
            _ => Some(Transform::chain(label, self.transforms.clone())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Intent {
    UpdateContent,
    SetEmphasis,
    SwapVariant,
    ApplyTheme,
    AddUrgency,
    TightenAboveFold,
    MoveSection,
    RemoveSection,
    AddSection,
}

struct Rule {
    intent: Intent,
    regex: Regex,
}

const KIND: &str = r"(?P<kind>[a-z][a-z0-9-]*)";

/// Patterns in match order. `add urgency` must precede `add <kind>`.
fn rule_table() -> Vec<(Intent, String)> {
    vec![
        (
            Intent::UpdateContent,
            format!(
                r#"^set\s+(?:the\s+)?(?:{KIND}\s+)?(?P<field>[a-z][a-z0-9_]*)\s+to\s+(?:'(?P<single>[^']*)'|"(?P<double>[^"]*)")$"#
            ),
        ),
        (
            Intent::SetEmphasis,
            format!(
                r"^make\s+(?:the\s+)?{KIND}(?:\s+section)?\s+(?:more\s+)?(?P<level>dramatic|bold|subtle|minimal|balanced)$"
            ),
        ),
        (
            Intent::SwapVariant,
            format!(
                r"^(?:swap|switch|change)\s+(?:the\s+)?{KIND}(?:\s+section)?\s+to\s+(?:the\s+)?(?P<variant>[a-z][a-z0-9-]*)(?:\s+variant)?$"
            ),
        ),
        (
            Intent::ApplyTheme,
            r"^apply\s+(?:the\s+)?(?:theme\s+(?P<tone>[a-z]+)|(?P<tone_first>[a-z]+)\s+theme)$"
                .to_string(),
        ),
        (Intent::AddUrgency, r"^add\s+(?:some\s+)?urgency$".to_string()),
        (
            Intent::TightenAboveFold,
            r"^tighten\s+(?:up\s+)?(?:the\s+)?above[\s-]+the[\s-]+fold$".to_string(),
        ),
        (
            Intent::MoveSection,
            format!(
                r"^move\s+(?:the\s+)?{KIND}(?:\s+section)?\s+(?P<dir>up|down|to\s+(?:the\s+)?top|to\s+(?:the\s+)?bottom)$"
            ),
        ),
        (
            Intent::RemoveSection,
            format!(r"^(?:remove|delete|drop)\s+(?:the\s+)?{KIND}(?:\s+section)?$"),
        ),
        (
            Intent::AddSection,
            format!(r"^add\s+(?:an?\s+)?{KIND}(?:\s+section)?$"),
        ),
    ]
}

/// Turns edit commands into transforms against one section library
pub struct CommandInterpreter<'a> {
    library: &'a SectionLibrary,
    rules: Vec<Rule>,
}

impl<'a> CommandInterpreter<'a> {
    pub fn new(library: &'a SectionLibrary) -> Self {
        let rules = rule_table()
            .into_iter()
            .filter_map(|(intent, pattern)| {
                // Every pattern is a literal above; a failure here is a typo
                match Regex::new(&format!("(?i){}", pattern)) {
                    Ok(regex) => Some(Rule { intent, regex }),
                    Err(e) => {
                        warn!(?intent, error = %e, "dropping invalid command pattern");
                        None
                    }
                }
            })
            .collect();
        Self { library, rules }
    }

    /// Interpret `command` against the current page. Never fails; problems
    /// are reported in [`Interpretation::warnings`].
    pub fn interpret(&self, command: &str, sections: &[SectionNode]) -> Interpretation {
        let mut result = Interpretation::default();

        for clause in split_clauses(command) {
            let matched = self
                .rules
                .iter()
                .find_map(|rule| rule.regex.captures(&clause).map(|caps| (rule.intent, caps)));

            let outcome = match matched {
                Some((intent, caps)) => self.build(intent, &caps, sections),
                None => Err(String::new()),
            };

            match outcome {
                Ok(transform) => {
                    debug!(clause = %clause, intent = %transform.label(), "interpreted clause");
                    result.intents.push(transform.label().to_string());
                    result.transforms.push(transform);
                }
                Err(reason) => {
                    let text = if reason.is_empty() {
                        clause.clone()
                    } else {
                        format!("{} ({})", clause, reason)
                    };
                    let warning = FolioError::UnrecognizedCommand(text).to_string();
                    warn!("{}", warning);
                    result.warnings.push(warning);
                }
            }
        }

        if result.intents.is_empty() && result.warnings.is_empty() {
            let warning = FolioError::UnrecognizedCommand(command.trim().to_string()).to_string();
            warn!("{}", warning);
            result.warnings.push(warning);
        }

        result
    }

    fn build(
        &self,
        intent: Intent,
        caps: &Captures,
        sections: &[SectionNode],
    ) -> std::result::Result<Transform, String> {
        let kind = caps.name("kind").map(|m| m.as_str().to_ascii_lowercase());

        match intent {
            Intent::UpdateContent => {
                let field = capture(caps, "field");
                let text = caps
                    .name("single")
                    .or_else(|| caps.name("double"))
                    .map_or("", |m| m.as_str());
                let target = match kind {
                    Some(kind) => {
                        require_on_page(&kind, sections)?;
                        sections.iter().find(|n| n.kind() == kind)
                    }
                    None => sections
                        .iter()
                        .find(|n| canonical_field(n, field).is_some())
                        .or_else(|| sections.first()),
                };
                let target = target.ok_or_else(|| "the page is empty".to_string())?;
                let field = canonical_field(target, field).unwrap_or_else(|| lower_first(field));
                Ok(Transform::update_content(target.kind(), &field, text))
            }
            Intent::SetEmphasis => {
                let kind = kind.unwrap_or_default();
                require_on_page(&kind, sections)?;
                let emphasis = match capture(caps, "level").to_ascii_lowercase().as_str() {
                    "dramatic" | "bold" => Emphasis::Dramatic,
                    "subtle" | "minimal" => Emphasis::Subtle,
                    _ => Emphasis::Balanced,
                };
                let meta = self
                    .library
                    .variants_of(&kind)
                    .into_iter()
                    .find(|m| m.style.emphasis == emphasis)
                    .ok_or_else(|| format!("no {} variant of '{}'", emphasis, kind))?;
                Ok(Transform::swap_variant(
                    format!("setEmphasis:{}.{}", kind, emphasis),
                    meta.clone(),
                ))
            }
            Intent::SwapVariant => {
                let kind = kind.unwrap_or_default();
                require_on_page(&kind, sections)?;
                let variant = capture(caps, "variant").to_ascii_lowercase();
                let meta = self
                    .library
                    .get_variant(&kind, &variant)
                    .ok_or_else(|| format!("no variant '{}' of '{}'", variant, kind))?;
                Ok(Transform::swap_variant(
                    format!("swapVariant:{}.{}", kind, variant),
                    meta.clone(),
                ))
            }
            Intent::ApplyTheme => {
                let name = caps
                    .name("tone")
                    .or_else(|| caps.name("tone_first"))
                    .map_or("", |m| m.as_str());
                let tone: Tone = name.parse()?;
                Ok(Transform::apply_theme(tone))
            }
            Intent::AddUrgency => {
                require_on_page("cta", sections)?;
                Ok(Transform::add_urgency())
            }
            Intent::TightenAboveFold => {
                if sections.is_empty() {
                    return Err("the page is empty".to_string());
                }
                Ok(Transform::tighten_above_fold())
            }
            Intent::MoveSection => {
                let kind = kind.unwrap_or_default();
                require_on_page(&kind, sections)?;
                let dir = capture(caps, "dir").to_ascii_lowercase();
                let direction = if dir == "up" {
                    Direction::Up
                } else if dir == "down" {
                    Direction::Down
                } else if dir.ends_with("top") {
                    Direction::Top
                } else {
                    Direction::Bottom
                };
                Ok(Transform::move_section(&kind, direction))
            }
            Intent::RemoveSection => {
                let kind = kind.unwrap_or_default();
                require_on_page(&kind, sections)?;
                Ok(Transform::remove_section(&kind))
            }
            Intent::AddSection => {
                let kind = kind.unwrap_or_default();
                let meta = self
                    .library
                    .variants_of(&kind)
                    .into_iter()
                    .next()
                    .ok_or_else(|| format!("no '{}' section in the library", kind))?;
                Ok(Transform::add_section(meta.clone()))
            }
        }
    }
}

fn capture<'t>(caps: &Captures<'t>, name: &str) -> &'t str {
    caps.name(name).map_or("", |m| m.as_str())
}

/// The slot or prop name on `node` that `field` names, ignoring case
fn canonical_field(node: &SectionNode, field: &str) -> Option<String> {
    node.meta
        .content_slots
        .iter()
        .chain(node.props.keys())
        .find(|name| name.eq_ignore_ascii_case(field))
        .cloned()
}

fn lower_first(field: &str) -> String {
    let mut chars = field.chars();
    match chars.next() {
        Some(first) => first.to_ascii_lowercase().to_string() + chars.as_str(),
        None => String::new(),
    }
}

fn require_on_page(kind: &str, sections: &[SectionNode]) -> std::result::Result<(), String> {
    if sections.iter().any(|n| n.kind() == kind) {
        Ok(())
    } else {
        Err(format!("no '{}' section on the page", kind))
    }
}

/// Split a command into clauses on `and`, `then`, `,` and `;`, leaving
/// quoted text intact. Empty clauses are dropped.
pub fn split_clauses(command: &str) -> Vec<String> {
    let chars: Vec<char> = command.chars().collect();
    let mut clauses = Vec::new();
    let mut current = String::new();
    let mut quote: Option<char> = None;
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];
        if let Some(open) = quote {
            current.push(c);
            if c == open {
                quote = None;
            }
            i += 1;
            continue;
        }

        match c {
            '\'' | '"' => {
                quote = Some(c);
                current.push(c);
            }
            ',' | ';' => flush(&mut clauses, &mut current),
            c if c.is_whitespace() => {
                if let Some(len) = conjunction_at(&chars, i + 1) {
                    flush(&mut clauses, &mut current);
                    i += 1 + len;
                    continue;
                }
                current.push(c);
            }
            _ => current.push(c),
        }
        i += 1;
    }
    flush(&mut clauses, &mut current);

    clauses
}

fn flush(clauses: &mut Vec<String>, current: &mut String) {
    let clause = current.trim();
    if !clause.is_empty() {
        clauses.push(clause.to_string());
    }
    current.clear();
}

/// Length of an `and`/`then` word starting at `start`, if one does
fn conjunction_at(chars: &[char], start: usize) -> Option<usize> {
    ["and", "then"].iter().find_map(|word| {
        let end = start + word.len();
        let candidate: String = chars.get(start..end)?.iter().collect();
        let bounded = chars.get(end).map_or(true, |c| c.is_whitespace());
        (bounded && candidate.eq_ignore_ascii_case(word)).then_some(word.len())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_library::{page_keys, Props};
    use serde_json::json;

    fn library() -> SectionLibrary {
        SectionLibrary::builtin().unwrap()
    }

    fn page(library: &SectionLibrary) -> Vec<SectionNode> {
        ["hero-centered", "features-grid", "pricing-tiers", "cta-minimal", "footer-simple"]
            .iter()
            .enumerate()
            .map(|(i, key)| {
                let meta = library.get(key).unwrap().clone();
                let mut props: Props = meta.defaults.clone();
                props.insert("tone".into(), json!("modern"));
                SectionNode::new(meta, props, i)
            })
            .collect()
    }

    #[test]
    fn test_split_clauses() {
        assert_eq!(
            split_clauses("make hero dramatic and move pricing up, then remove faq; add team"),
            vec!["make hero dramatic", "move pricing up", "remove faq", "add team"]
        );
        assert_eq!(
            split_clauses("set headline to 'Fast and simple, then done'"),
            vec!["set headline to 'Fast and simple, then done'"]
        );
        assert_eq!(split_clauses("expand brandon"), vec!["expand brandon"]);
        assert!(split_clauses(" , ; ").is_empty());
    }

    #[test]
    fn test_set_headline_scenario() {
        let library = library();
        let before = page(&library);
        let interpreter = CommandInterpreter::new(&library);

        let result = interpreter.interpret("set headline to 'New Headline'", &before);
        assert_eq!(result.intents, vec!["updateContent:hero.headline"]);
        assert!(result.warnings.is_empty());

        let after = result.transforms[0].apply(&before);
        assert_eq!(after[0].prop_str("headline"), Some("New Headline"));
        let mut expected = before[0].props.clone();
        expected.insert("headline".into(), json!("New Headline"));
        assert_eq!(after[0].props, expected);
        assert_eq!(&after[1..], &before[1..]);
    }

    #[test]
    fn test_set_field_matches_slot_case_insensitively() {
        let library = library();
        let before = page(&library);
        let interpreter = CommandInterpreter::new(&library);

        let result = interpreter.interpret("Set Headline to 'New Headline'", &before);
        assert_eq!(result.intents, vec!["updateContent:hero.headline"]);
        let after = result.transforms[0].apply(&before);
        assert_eq!(after[0].prop_str("headline"), Some("New Headline"));
        assert!(!after[0].props.contains_key("Headline"));

        let result = interpreter.interpret("set cta BUTTONLABEL to 'Go'", &before);
        assert_eq!(result.intents, vec!["updateContent:cta.buttonLabel"]);

        let result = interpreter.interpret("set hero Tagline to 'Hi'", &before);
        assert_eq!(result.intents, vec!["updateContent:hero.tagline"]);
    }

    #[test]
    fn test_set_with_explicit_kind() {
        let library = library();
        let before = page(&library);
        let interpreter = CommandInterpreter::new(&library);
        let result = interpreter.interpret("set cta buttonLabel to \"Buy now\"", &before);
        assert_eq!(result.intents, vec!["updateContent:cta.buttonLabel"]);
        let after = result.transforms[0].apply(&before);
        assert_eq!(after[3].prop_str("buttonLabel"), Some("Buy now"));
    }

    #[test]
    fn test_make_dramatic_swaps_variant() {
        let library = library();
        let before = page(&library);
        let interpreter = CommandInterpreter::new(&library);
        let result = interpreter.interpret("make hero dramatic", &before);
        assert_eq!(result.intents, vec!["setEmphasis:hero.dramatic"]);
        let after = result.transforms[0].apply(&before);
        assert_eq!(after[0].key(), "hero-statement");
        assert_eq!(after[0].id.as_str(), "hero-statement-0");
    }

    #[test]
    fn test_swap_theme_and_urgency() {
        let library = library();
        let before = page(&library);
        let interpreter = CommandInterpreter::new(&library);
        let result = interpreter.interpret(
            "swap cta to banner, apply theme zen and add urgency",
            &before,
        );
        assert_eq!(
            result.intents,
            vec!["swapVariant:cta.banner", "applyTheme:zen", "addUrgency"]
        );
        let after = result.combined("edit").unwrap().apply(&before);
        assert_eq!(after[3].key(), "cta-banner");
        assert_eq!(after[3].props["urgent"], json!(true));
        assert!(after.iter().all(|n| n.prop_str("tone") == Some("zen")));
    }

    #[test]
    fn test_reorder_and_remove() {
        let library = library();
        let before = page(&library);
        let interpreter = CommandInterpreter::new(&library);
        let result = interpreter.interpret(
            "move pricing to the top then remove features and add faq section",
            &before,
        );
        assert_eq!(
            result.intents,
            vec!["moveSection:pricing.top", "removeSection:features", "addSection:faq"]
        );
        let after = result.combined("edit").unwrap().apply(&before);
        assert_eq!(
            page_keys(&after),
            vec![
                "pricing-tiers",
                "hero-centered",
                "cta-minimal",
                "faq-accordion",
                "footer-simple"
            ]
        );
    }

    #[test]
    fn test_tighten_above_fold() {
        let library = library();
        let before = page(&library);
        let interpreter = CommandInterpreter::new(&library);
        let result = interpreter.interpret("Tighten above the fold", &before);
        assert_eq!(result.intents, vec!["tightenAboveFold"]);
        let after = result.transforms[0].apply(&before);
        assert_eq!(after[0].prop_str("density"), Some("compact"));
    }

    #[test]
    fn test_unrecognized_command_warns_without_transform() {
        let library = library();
        let before = page(&library);
        let interpreter = CommandInterpreter::new(&library);
        let result = interpreter.interpret("make it pop", &before);
        assert!(result.intents.is_empty());
        assert!(result.transforms.is_empty());
        assert_eq!(result.warnings, vec!["Unrecognized command: make it pop"]);
        assert!(result.combined("noop").is_none());

        let again = interpreter.interpret("make it pop", &before);
        assert_eq!(again.intents, result.intents);
        assert_eq!(again.warnings, result.warnings);
        assert!(again.transforms.is_empty());
    }

    #[test]
    fn test_missing_target_is_a_warning() {
        let library = library();
        let before = page(&library);
        let interpreter = CommandInterpreter::new(&library);
        let result = interpreter.interpret("remove gallery and make hero bold", &before);
        assert_eq!(result.intents, vec!["setEmphasis:hero.dramatic"]);
        assert_eq!(result.warnings.len(), 1);
        assert!(result.warnings[0].contains("no 'gallery' section on the page"));

        let result = interpreter.interpret("apply theme neon", &before);
        assert!(result.transforms.is_empty());
        assert!(result.warnings[0].contains("unknown tone 'neon'"));

        let result = interpreter.interpret("add widgets", &before);
        assert!(result.transforms.is_empty());
    }

    #[test]
    fn test_blank_command_warns() {
        let library = library();
        let interpreter = CommandInterpreter::new(&library);
        let result = interpreter.interpret("  ", &[]);
        assert!(result.is_empty());
        assert_eq!(result.warnings.len(), 1);
    }
}
