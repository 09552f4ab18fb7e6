//! sRGB colors

use crate::error::{FolioError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// RGB color with channels in `0.0..=1.0`.
///
/// Serializes as a `#rrggbb` string.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Color {
    pub const WHITE: Self = Self {
        r: 1.0,
        g: 1.0,
        b: 1.0,
    };
    pub const BLACK: Self = Self {
        r: 0.0,
        g: 0.0,
        b: 0.0,
    };

    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    pub fn from_hex(hex: u32) -> Self {
        Self {
            r: ((hex >> 16) & 0xFF) as f32 / 255.0,
            g: ((hex >> 8) & 0xFF) as f32 / 255.0,
            b: (hex & 0xFF) as f32 / 255.0,
        }
    }

    /// Parse `#rgb` or `#rrggbb` (the leading `#` is optional)
    pub fn parse(s: &str) -> Result<Self> {
        let digits = s.trim().trim_start_matches('#');
        let expanded: String = match digits.len() {
            3 => digits.chars().flat_map(|c| [c, c]).collect(),
            6 => digits.to_string(),
            _ => return Err(FolioError::InvalidColor(s.to_string())),
        };
        let value =
            u32::from_str_radix(&expanded, 16).map_err(|_| FolioError::InvalidColor(s.to_string()))?;
        Ok(Self::from_hex(value))
    }

    /// Lowercase `#rrggbb`
    pub fn to_hex(&self) -> String {
        let [r, g, b] = self.to_bytes();
        format!("#{:02x}{:02x}{:02x}", r, g, b)
    }

    pub fn to_bytes(&self) -> [u8; 3] {
        let channel = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        [channel(self.r), channel(self.g), channel(self.b)]
    }

    /// Linear interpolation towards `other` by `t` in `0.0..=1.0`.
    ///
    /// The result is snapped to 8-bit channels so it survives a hex round-trip.
    pub fn mix(&self, other: &Self, t: f32) -> Self {
        let t = t.clamp(0.0, 1.0);
        let raw = Self {
            r: self.r + (other.r - self.r) * t,
            g: self.g + (other.g - self.g) * t,
            b: self.b + (other.b - self.b) * t,
        };
        let [r, g, b] = raw.to_bytes();
        Self::from_hex(((r as u32) << 16) | ((g as u32) << 8) | b as u32)
    }

    /// WCAG relative luminance
    pub fn relative_luminance(&self) -> f32 {
        fn linear(c: f32) -> f32 {
            if c <= 0.03928 {
                c / 12.92
            } else {
                ((c + 0.055) / 1.055).powf(2.4)
            }
        }
        // Quantize first so the result only depends on the 8-bit color
        let [r, g, b] = self.to_bytes();
        0.2126 * linear(r as f32 / 255.0)
            + 0.7152 * linear(g as f32 / 255.0)
            + 0.0722 * linear(b as f32 / 255.0)
    }

    /// WCAG contrast ratio between two colors, `1.0..=21.0`
    pub fn contrast_ratio(&self, other: &Self) -> f32 {
        let a = self.relative_luminance();
        let b = other.relative_luminance();
        let (light, dark) = if a >= b { (a, b) } else { (b, a) };
        (light + 0.05) / (dark + 0.05)
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::WHITE
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl TryFrom<String> for Color {
    type Error = FolioError;

    fn try_from(value: String) -> Result<Self> {
        Self::parse(&value)
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_hex()
    }
}
