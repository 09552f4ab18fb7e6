//! Closed style vocabularies shared by every Folio crate

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Declares a closed, string-named enum with `ALL`, `as_str`, `rank`,
/// `Display` and case-insensitive `FromStr`.
macro_rules! style_enum {
    (
        $(#[$meta:meta])*
        $name:ident { $($(#[$vmeta:meta])* $variant:ident => $text:literal),+ $(,)? }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        pub enum $name {
            $($(#[$vmeta])* #[serde(rename = $text)] $variant),+
        }

        impl $name {
            /// Every value, in declaration order
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $text),+
                }
            }

            /// Position in declaration order (used as an ordinal scale)
            pub fn rank(&self) -> usize {
                Self::ALL.iter().position(|v| v == self).unwrap_or(0)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = String;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let wanted = s.trim().to_ascii_lowercase();
                Self::ALL
                    .iter()
                    .copied()
                    .find(|v| v.as_str() == wanted)
                    .ok_or_else(|| {
                        let allowed: Vec<&str> = Self::ALL.iter().map(|v| v.as_str()).collect();
                        format!(
                            "unknown {} '{}'; expected one of: {}",
                            stringify!($name).to_lowercase(),
                            s,
                            allowed.join(", ")
                        )
                    })
            }
        }
    };
}

style_enum! {
    /// Aesthetic/voice preset driving scoring and content transforms
    Tone {
        Minimal => "minimal",
        Bold => "bold",
        Playful => "playful",
        Corporate => "corporate",
        Elegant => "elegant",
        Modern => "modern",
        Warm => "warm",
        Luxury => "luxury",
        Creative => "creative",
        Nature => "nature",
        Retro => "retro",
        Monochrome => "monochrome",
        Techno => "techno",
        Zen => "zen",
    }
}

style_enum! {
    /// How important a requested section is
    Priority {
        Critical => "critical",
        Important => "important",
        NiceToHave => "nice-to-have",
    }
}

style_enum! {
    /// Visual weight of a variant, ordered from quiet to loud
    Emphasis {
        Subtle => "subtle",
        Balanced => "balanced",
        Dramatic => "dramatic",
    }
}

style_enum! {
    /// Structural arrangement of a variant
    Layout {
        Centered => "centered",
        Split => "split",
        FullBleed => "full-bleed",
        Grid => "grid",
        Bento => "bento",
        List => "list",
        Stacked => "stacked",
        Carousel => "carousel",
        Columns => "columns",
    }
}

style_enum! {
    /// Whitespace density, ordered from tight to airy
    Spacing {
        Compact => "compact",
        Comfortable => "comfortable",
        Spacious => "spacious",
    }
}

style_enum! {
    /// Amount of animation, ordered from none to rich
    Motion {
        None => "none",
        Subtle => "subtle",
        Rich => "rich",
    }
}

style_enum! {
    /// Typeface family style
    Typography {
        Sans => "sans",
        Serif => "serif",
        Display => "display",
        Mono => "mono",
    }
}

impl Default for Tone {
    fn default() -> Self {
        Tone::Modern
    }
}

impl Default for Priority {
    fn default() -> Self {
        Priority::Important
    }
}

impl Default for Emphasis {
    fn default() -> Self {
        Emphasis::Balanced
    }
}

impl Default for Layout {
    fn default() -> Self {
        Layout::Stacked
    }
}

impl Default for Spacing {
    fn default() -> Self {
        Spacing::Comfortable
    }
}

impl Default for Motion {
    fn default() -> Self {
        Motion::Subtle
    }
}

impl Default for Typography {
    fn default() -> Self {
        Typography::Sans
    }
}

/// The style a tone asks for
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ToneProfile {
    pub emphasis: Emphasis,
    pub spacing: Spacing,
    pub motion: Motion,
    pub typography: Typography,
    /// Layouts that read as on-tone, best first
    pub layouts: &'static [Layout],
    /// Seed for the primary palette
    pub seed_color: &'static str,
    /// Base corner radius in pixels
    pub radius: f32,
    /// Shadow depth, 0 (flat) to 3 (floating)
    pub depth: u8,
}

impl Tone {
    /// Style table for this tone
    pub fn profile(&self) -> ToneProfile {
        use Emphasis as E;
        use Layout as L;
        use Motion as M;
        use Spacing as S;
        use Typography as T;

        #[rustfmt::skip]
        let (emphasis, spacing, motion, typography, layouts, seed_color, radius, depth): (
            Emphasis,
            Spacing,
            Motion,
            Typography,
            &'static [Layout],
            &'static str,
            f32,
            u8,
        ) = match self {
            Tone::Minimal => (E::Subtle, S::Spacious, M::None, T::Sans, &[L::Centered, L::Stacked], "#111827", 4.0, 0),
            Tone::Bold => (E::Dramatic, S::Comfortable, M::Subtle, T::Display, &[L::FullBleed, L::Split], "#dc2626", 6.0, 2),
            Tone::Playful => (E::Dramatic, S::Comfortable, M::Rich, T::Display, &[L::Grid, L::Carousel], "#f59e0b", 16.0, 2),
            Tone::Corporate => (E::Balanced, S::Comfortable, M::Subtle, T::Sans, &[L::Split, L::Grid, L::Columns], "#1d4ed8", 6.0, 1),
            Tone::Elegant => (E::Subtle, S::Spacious, M::Subtle, T::Serif, &[L::Centered, L::Split], "#6b21a8", 2.0, 1),
            Tone::Modern => (E::Balanced, S::Comfortable, M::Subtle, T::Sans, &[L::Split, L::Grid, L::Bento], "#4f46e5", 10.0, 2),
            Tone::Warm => (E::Balanced, S::Comfortable, M::Subtle, T::Serif, &[L::Stacked, L::Carousel], "#c2410c", 12.0, 1),
            Tone::Luxury => (E::Dramatic, S::Spacious, M::Subtle, T::Serif, &[L::FullBleed, L::Centered], "#a16207", 0.0, 3),
            Tone::Creative => (E::Dramatic, S::Comfortable, M::Rich, T::Display, &[L::Bento, L::Grid, L::Carousel], "#db2777", 14.0, 2),
            Tone::Nature => (E::Subtle, S::Spacious, M::Subtle, T::Serif, &[L::Stacked, L::Split], "#15803d", 12.0, 1),
            Tone::Retro => (E::Dramatic, S::Compact, M::Subtle, T::Display, &[L::Grid, L::Stacked], "#b45309", 0.0, 3),
            Tone::Monochrome => (E::Subtle, S::Comfortable, M::None, T::Mono, &[L::Stacked, L::List], "#000000", 0.0, 0),
            Tone::Techno => (E::Dramatic, S::Compact, M::Rich, T::Mono, &[L::Grid, L::Bento], "#06b6d4", 4.0, 2),
            Tone::Zen => (E::Subtle, S::Spacious, M::None, T::Serif, &[L::Centered], "#57534e", 8.0, 0),
        };

        ToneProfile {
            emphasis,
            spacing,
            motion,
            typography,
            layouts,
            seed_color,
            radius,
            depth,
        }
    }
}
