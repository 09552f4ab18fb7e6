//! Tone matching

use folio_core::{Tone, ToneProfile};
use folio_library::VariantStyle;

/// Share of the tone score decided by style closeness; the rest is affinity
const PROFILE_SHARE: f64 = 0.8;

/// How well a variant's style suits `tone`, in `[0, 1]`
pub fn tone_match(style: &VariantStyle, tone: Tone) -> f64 {
    let profile = tone.profile();
    PROFILE_SHARE * profile_closeness(style, &profile) + (1.0 - PROFILE_SHARE) * affinity(style, tone)
}

/// Mean closeness of each style attribute to the tone's profile
pub fn profile_closeness(style: &VariantStyle, profile: &ToneProfile) -> f64 {
    let parts = [
        ordinal_closeness(style.emphasis.rank(), profile.emphasis.rank()),
        ordinal_closeness(style.spacing.rank(), profile.spacing.rank()),
        ordinal_closeness(style.motion.rank(), profile.motion.rank()),
        if style.typography == profile.typography {
            1.0
        } else {
            0.5
        },
        if profile.layouts.contains(&style.layout) {
            1.0
        } else {
            0.4
        },
    ];
    parts.iter().sum::<f64>() / parts.len() as f64
}

/// Declared tone affinity: listed 1, unlisted 0, no list 0.5
pub fn affinity(style: &VariantStyle, tone: Tone) -> f64 {
    if style.tones.is_empty() {
        0.5
    } else if style.tones.contains(&tone) {
        1.0
    } else {
        0.0
    }
}

// Three-step scales: one step apart is half as close
fn ordinal_closeness(a: usize, b: usize) -> f64 {
    1.0 - (a.abs_diff(b) as f64 / 2.0).min(1.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_core::{Emphasis, Layout, Motion, Spacing, Typography};

    fn style(emphasis: Emphasis, layout: Layout, tones: Vec<Tone>) -> VariantStyle {
        VariantStyle {
            emphasis,
            layout,
            tones,
            ..Default::default()
        }
    }

    #[test]
    fn test_dramatic_beats_subtle_under_bold() {
        let dramatic = style(Emphasis::Dramatic, Layout::FullBleed, vec![Tone::Bold]);
        let subtle = style(Emphasis::Subtle, Layout::Stacked, vec![Tone::Zen]);
        assert!(tone_match(&dramatic, Tone::Bold) > tone_match(&subtle, Tone::Bold));
        assert!(tone_match(&subtle, Tone::Zen) > tone_match(&dramatic, Tone::Zen));
    }

    #[test]
    fn test_perfect_match_is_one() {
        let profile = Tone::Minimal.profile();
        let exact = VariantStyle {
            emphasis: profile.emphasis,
            layout: profile.layouts[0],
            spacing: profile.spacing,
            motion: profile.motion,
            typography: profile.typography,
            tones: vec![Tone::Minimal],
        };
        assert!((tone_match(&exact, Tone::Minimal) - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_score_stays_in_unit_range() {
        for tone in Tone::ALL {
            let far = VariantStyle {
                emphasis: Emphasis::Subtle,
                layout: Layout::Carousel,
                spacing: Spacing::Compact,
                motion: Motion::Rich,
                typography: Typography::Mono,
                tones: vec![],
            };
            let score = tone_match(&far, *tone);
            assert!((0.0..=1.0).contains(&score), "{} -> {}", tone, score);
        }
    }

    #[test]
    fn test_affinity() {
        let s = style(Emphasis::Balanced, Layout::Grid, vec![]);
        assert_eq!(affinity(&s, Tone::Bold), 0.5);
        let s = style(Emphasis::Balanced, Layout::Grid, vec![Tone::Warm]);
        assert_eq!(affinity(&s, Tone::Warm), 1.0);
        assert_eq!(affinity(&s, Tone::Bold), 0.0);
    }
}
