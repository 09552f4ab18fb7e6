//! Content-strategy transforms

use crate::spec::{ContentStrategy, Density, Voice};
use folio_library::ContentBlock;
use serde_json::Value;

/// Longest list kept under minimal density
pub const MINIMAL_LIST_LEN: usize = 3;

/// Rewrite literal content to fit the voice and density
pub fn apply_strategy(content: &ContentBlock, strategy: &ContentStrategy) -> ContentBlock {
    let mut out = content.clone();

    if strategy.density == Density::Minimal {
        for value in out.values_mut() {
            if let Value::Array(items) = value {
                items.truncate(MINIMAL_LIST_LEN);
            }
        }
    }

    if let Some(Value::String(headline)) = out.get_mut("headline") {
        match strategy.voice {
            Voice::Bold => *headline = headline.to_uppercase(),
            Voice::Playful => {
                let trimmed = headline.trim_end();
                if !trimmed.ends_with(&['.', '!', '?'][..]) {
                    *headline = format!("{}!", trimmed);
                }
            }
            Voice::Professional | Voice::Friendly | Voice::Calm => {}
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn block(value: Value) -> ContentBlock {
        value.as_object().cloned().unwrap()
    }

    fn strategy(voice: Voice, density: Density) -> ContentStrategy {
        ContentStrategy { voice, density }
    }

    #[test]
    fn test_minimal_density_truncates_lists() {
        let content = block(json!({ "features": [1, 2, 3, 4, 5], "headline": "Hi" }));
        let out = apply_strategy(&content, &strategy(Voice::Professional, Density::Minimal));
        assert_eq!(out["features"], json!([1, 2, 3]));
        assert_eq!(out["headline"], "Hi");
        // The input is left alone
        assert_eq!(content["features"].as_array().unwrap().len(), 5);
    }

    #[test]
    fn test_bold_voice_uppercases_headline() {
        let content = block(json!({ "headline": "Ship faster", "subheadline": "today" }));
        let out = apply_strategy(&content, &strategy(Voice::Bold, Density::Balanced));
        assert_eq!(out["headline"], "SHIP FASTER");
        assert_eq!(out["subheadline"], "today");
    }

    #[test]
    fn test_playful_voice_adds_exclamation_once() {
        let s = strategy(Voice::Playful, Density::Detailed);
        let out = apply_strategy(&block(json!({ "headline": "Let's build " })), &s);
        assert_eq!(out["headline"], "Let's build!");
        let out = apply_strategy(&block(json!({ "headline": "Ready?" })), &s);
        assert_eq!(out["headline"], "Ready?");
    }

    #[test]
    fn test_detailed_keeps_lists() {
        let content = block(json!({ "items": [1, 2, 3, 4] }));
        let out = apply_strategy(&content, &strategy(Voice::Calm, Density::Detailed));
        assert_eq!(out, content);
    }
}
