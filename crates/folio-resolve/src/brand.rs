//! Brand token derivation from style attributes

use crate::spec::{ColorScheme, StyleSpec};
use folio_core::{
    BrandTokens, Color, ColorScale, ColorTokens, FontPair, RadiusScale, Result, ShadowScale,
    Spacing, Tone, Typography, BASE_SPACING,
};

/// Slate gray the neutral ramp is built from
const NEUTRAL_SEED: u32 = 0x64748b;

/// Derive the full token set for a style.
///
/// Fails only when `primary_color` is not a valid hex color.
pub fn derive_brand(style: &StyleSpec) -> Result<BrandTokens> {
    let profile = style.tone.profile();
    let seed = match &style.primary_color {
        Some(hex) => Color::parse(hex)?,
        None => Color::parse(profile.seed_color)?,
    };

    // Neutrals lean slightly towards the primary hue
    let neutral = ColorScale::from_seed(Color::from_hex(NEUTRAL_SEED).mix(&seed, 0.1));
    let darkest = neutral.get(900).unwrap_or(Color::BLACK);
    let lightest = neutral.get(50).unwrap_or(Color::WHITE);

    let (background, text) = match (style.color_scheme, style.tone) {
        (ColorScheme::Light, Tone::Monochrome) => (Color::WHITE, Color::BLACK),
        (ColorScheme::Dark, Tone::Monochrome) => (Color::BLACK, Color::WHITE),
        (ColorScheme::Light, _) => (Color::WHITE, darkest),
        (ColorScheme::Dark, _) => (darkest, lightest),
    };

    Ok(BrandTokens {
        colors: ColorTokens {
            primary: ColorScale::from_seed(seed),
            neutral,
            accent: accent_for(style.tone, seed),
            background,
            text,
        },
        fonts: font_pair(style.typography),
        spacing: spacing_scale(style.spacing),
        radius: RadiusScale::from_base(profile.radius),
        shadows: ShadowScale::from_depth(profile.depth),
    })
}

/// Heading/body families per typography style
pub fn font_pair(typography: Typography) -> FontPair {
    let (heading, body) = match typography {
        Typography::Sans => ("Inter", "Inter"),
        Typography::Serif => ("Playfair Display", "Source Serif Pro"),
        Typography::Display => ("Space Grotesk", "Inter"),
        Typography::Mono => ("JetBrains Mono", "IBM Plex Sans"),
    };
    FontPair {
        heading: heading.to_string(),
        body: body.to_string(),
    }
}

/// Multiplier applied to the base spacing scale
pub fn spacing_multiplier(spacing: Spacing) -> f32 {
    match spacing {
        Spacing::Compact => 0.75,
        Spacing::Comfortable => 1.0,
        Spacing::Spacious => 1.5,
    }
}

pub fn spacing_scale(spacing: Spacing) -> Vec<f32> {
    let m = spacing_multiplier(spacing);
    BASE_SPACING.iter().map(|s| s * m).collect()
}

// Expressive tones get a lighter companion of the primary for highlights
fn accent_for(tone: Tone, seed: Color) -> Option<Color> {
    match tone {
        Tone::Playful | Tone::Creative | Tone::Retro | Tone::Techno => {
            Some(seed.mix(&Color::WHITE, 0.4))
        }
        Tone::Luxury => Some(Color::from_hex(0xd4af37)),
        Tone::Minimal
        | Tone::Bold
        | Tone::Corporate
        | Tone::Elegant
        | Tone::Modern
        | Tone::Warm
        | Tone::Nature
        | Tone::Monochrome
        | Tone::Zen => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_core::FolioError;

    fn style(tone: Tone) -> StyleSpec {
        StyleSpec {
            tone,
            ..Default::default()
        }
    }

    #[test]
    fn test_primary_seed_defaults_to_tone() {
        let brand = derive_brand(&style(Tone::Bold)).unwrap();
        assert_eq!(brand.colors.primary.base().to_hex(), "#dc2626");
    }

    #[test]
    fn test_explicit_primary_color() {
        let mut s = style(Tone::Bold);
        s.primary_color = Some("#0f0".to_string());
        let brand = derive_brand(&s).unwrap();
        assert_eq!(brand.colors.primary.base().to_hex(), "#00ff00");

        s.primary_color = Some("green".to_string());
        assert!(matches!(derive_brand(&s), Err(FolioError::InvalidColor(_))));
    }

    #[test]
    fn test_spacing_tables() {
        assert_eq!(spacing_scale(Spacing::Compact)[0], 3.0);
        assert_eq!(spacing_scale(Spacing::Comfortable)[3], 16.0);
        assert_eq!(spacing_scale(Spacing::Spacious)[7], 96.0);
    }

    #[test]
    fn test_schemes_keep_text_readable() {
        for tone in Tone::ALL {
            for scheme in [ColorScheme::Light, ColorScheme::Dark] {
                let s = StyleSpec {
                    tone: *tone,
                    color_scheme: scheme,
                    ..Default::default()
                };
                let brand = derive_brand(&s).unwrap();
                assert!(
                    brand.text_contrast() >= 4.5,
                    "{} {:?} contrast {}",
                    tone,
                    scheme,
                    brand.text_contrast()
                );
            }
        }
    }

    #[test]
    fn test_derivation_is_stable() {
        let s = style(Tone::Techno);
        assert_eq!(derive_brand(&s).unwrap(), derive_brand(&s).unwrap());
        assert!(derive_brand(&s).unwrap().colors.accent.is_some());
    }
}
