//! Canned design specs, one per tone

use crate::spec::{
    ColorScheme, ContentStrategy, CtaStrategy, Density, DesignSpec, FirstImpression, Flow,
    LayoutPreferences, SectionSpec, StyleSpec, Voice,
};
use folio_core::{Priority, Tone};

impl DesignSpec {
    /// A complete spec for `tone`, used when no upstream spec is available
    pub fn preset(tone: Tone) -> Self {
        let profile = tone.profile();

        let color_scheme = match tone {
            Tone::Luxury | Tone::Techno => ColorScheme::Dark,
            Tone::Minimal
            | Tone::Bold
            | Tone::Playful
            | Tone::Corporate
            | Tone::Elegant
            | Tone::Modern
            | Tone::Warm
            | Tone::Creative
            | Tone::Nature
            | Tone::Retro
            | Tone::Monochrome
            | Tone::Zen => ColorScheme::Light,
        };

        let (voice, density) = match tone {
            Tone::Bold | Tone::Retro | Tone::Techno => (Voice::Bold, Density::Balanced),
            Tone::Playful | Tone::Creative => (Voice::Playful, Density::Balanced),
            Tone::Corporate => (Voice::Professional, Density::Detailed),
            Tone::Modern => (Voice::Professional, Density::Balanced),
            Tone::Warm | Tone::Nature => (Voice::Friendly, Density::Balanced),
            Tone::Elegant | Tone::Luxury => (Voice::Calm, Density::Balanced),
            Tone::Minimal | Tone::Monochrome | Tone::Zen => (Voice::Calm, Density::Minimal),
        };

        let (first_impression, flow, cta_strategy) = match tone {
            Tone::Bold | Tone::Retro => {
                (FirstImpression::Bold, Flow::Linear, CtaStrategy::Urgent)
            }
            Tone::Playful | Tone::Creative | Tone::Luxury => {
                (FirstImpression::Bold, Flow::Storytelling, CtaStrategy::Direct)
            }
            Tone::Techno => (FirstImpression::Bold, Flow::Scannable, CtaStrategy::Direct),
            Tone::Corporate | Tone::Modern => {
                (FirstImpression::Informative, Flow::Scannable, CtaStrategy::Direct)
            }
            Tone::Warm | Tone::Nature | Tone::Elegant => {
                (FirstImpression::Calm, Flow::Storytelling, CtaStrategy::Soft)
            }
            Tone::Minimal | Tone::Monochrome | Tone::Zen => {
                (FirstImpression::Calm, Flow::Linear, CtaStrategy::Soft)
            }
        };

        let sections = vec![
            SectionSpec::new("hero", Priority::Critical),
            SectionSpec::new("features", Priority::Critical),
            SectionSpec::new("testimonials", Priority::Important),
            SectionSpec::new("pricing", Priority::NiceToHave),
            SectionSpec::new("cta", Priority::Critical),
            SectionSpec::new("footer", Priority::Important),
        ];

        DesignSpec {
            style: Some(StyleSpec {
                tone,
                color_scheme,
                primary_color: None,
                spacing: profile.spacing,
                typography: profile.typography,
                animation: profile.motion,
            }),
            sections,
            content_strategy: Some(ContentStrategy { voice, density }),
            layout: LayoutPreferences {
                first_impression,
                flow,
                cta_strategy,
            },
        }
    }
}
