//! Brand design tokens

use crate::color::Color;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Palette steps generated for every color scale
pub const SCALE_STEPS: [u16; 10] = [50, 100, 200, 300, 400, 500, 600, 700, 800, 900];

/// Base spacing scale in pixels, before any density multiplier
pub const BASE_SPACING: [f32; 8] = [4.0, 8.0, 12.0, 16.0, 24.0, 32.0, 48.0, 64.0];

/// A tint/shade ramp keyed by step (50 lightest, 900 darkest)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ColorScale(pub BTreeMap<u16, Color>);

impl ColorScale {
    /// Build a ramp around `seed`, which lands on step 500
    pub fn from_seed(seed: Color) -> Self {
        let mut steps = BTreeMap::new();
        for step in SCALE_STEPS {
            let color = match step {
                50 => seed.mix(&Color::WHITE, 0.95),
                100 => seed.mix(&Color::WHITE, 0.9),
                200 => seed.mix(&Color::WHITE, 0.75),
                300 => seed.mix(&Color::WHITE, 0.6),
                400 => seed.mix(&Color::WHITE, 0.3),
                500 => seed.mix(&Color::WHITE, 0.0),
                600 => seed.mix(&Color::BLACK, 0.15),
                700 => seed.mix(&Color::BLACK, 0.3),
                800 => seed.mix(&Color::BLACK, 0.45),
                _ => seed.mix(&Color::BLACK, 0.6),
            };
            steps.insert(step, color);
        }
        Self(steps)
    }

    pub fn get(&self, step: u16) -> Option<Color> {
        self.0.get(&step).copied()
    }

    /// The seed step, falling back to the middle of the ramp
    pub fn base(&self) -> Color {
        self.get(500)
            .or_else(|| self.0.values().nth(self.0.len() / 2).copied())
            .unwrap_or_default()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColorTokens {
    pub primary: ColorScale,
    pub neutral: ColorScale,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accent: Option<Color>,
    pub background: Color,
    pub text: Color,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FontPair {
    pub heading: String,
    pub body: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RadiusScale {
    pub sm: f32,
    pub md: f32,
    pub lg: f32,
    pub full: f32,
}

impl RadiusScale {
    /// Scale built from a single base radius
    pub fn from_base(base: f32) -> Self {
        Self {
            sm: (base / 2.0).round(),
            md: base,
            lg: base * 2.0,
            full: 9999.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShadowScale {
    pub sm: String,
    pub md: String,
    pub lg: String,
}

impl ShadowScale {
    /// CSS box-shadows for a depth from 0 (flat) to 3 (floating)
    pub fn from_depth(depth: u8) -> Self {
        match depth {
            0 => Self {
                sm: "none".to_string(),
                md: "none".to_string(),
                lg: "none".to_string(),
            },
            1 => Self {
                sm: "0 1px 2px rgba(0,0,0,0.05)".to_string(),
                md: "0 2px 4px rgba(0,0,0,0.08)".to_string(),
                lg: "0 4px 8px rgba(0,0,0,0.10)".to_string(),
            },
            2 => Self {
                sm: "0 1px 3px rgba(0,0,0,0.10)".to_string(),
                md: "0 4px 6px rgba(0,0,0,0.12)".to_string(),
                lg: "0 10px 15px rgba(0,0,0,0.15)".to_string(),
            },
            _ => Self {
                sm: "0 2px 4px rgba(0,0,0,0.15)".to_string(),
                md: "0 8px 16px rgba(0,0,0,0.20)".to_string(),
                lg: "0 20px 40px rgba(0,0,0,0.25)".to_string(),
            },
        }
    }
}

/// Complete brand token set consumed by scoring and by renderers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BrandTokens {
    pub colors: ColorTokens,
    pub fonts: FontPair,
    pub spacing: Vec<f32>,
    pub radius: RadiusScale,
    pub shadows: ShadowScale,
}

impl BrandTokens {
    /// Foreground/background pair used for contrast checks
    pub fn text_contrast(&self) -> f32 {
        self.colors.text.contrast_ratio(&self.colors.background)
    }
}

impl Default for BrandTokens {
    fn default() -> Self {
        Self {
            colors: ColorTokens {
                primary: ColorScale::from_seed(Color::from_hex(0x4f46e5)),
                neutral: ColorScale::from_seed(Color::from_hex(0x64748b)),
                accent: None,
                background: Color::WHITE,
                text: Color::from_hex(0x111827),
            },
            fonts: FontPair {
                heading: "Inter".to_string(),
                body: "Inter".to_string(),
            },
            spacing: BASE_SPACING.to_vec(),
            radius: RadiusScale::from_base(6.0),
            shadows: ShadowScale::from_depth(1),
        }
    }
}
