//! Color representation and conversion utilities
//!
//! Provides the three interchangeable representations used throughout the
//! crate:
//! - Hex strings (`#rrggbb`, lowercase)
//! - 8-bit RGB triples
//! - HSV triples with every component normalized to [0, 1]
//!
//! HSV uses the hexcone model on channels divided by 255. The largest
//! channel maps straight to value and back, so only the ×255 truncation of
//! the other channels is lossy.

use palette::Srgb;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::{AnalysisError, Result};

/// An opaque 8-bit sRGB color.
///
/// Serializes as its lowercase hex string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct Color {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

/// HSV triple with hue, saturation and value all in [0, 1].
///
/// Hue is a position on the color wheel: 0.0 is red, 0.5 is cyan.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HsvColor {
    pub hue: f64,
    pub saturation: f64,
    pub value: f64,
}

impl HsvColor {
    /// Create an HSV triple, wrapping hue into [0, 1) and clamping the rest
    pub fn new(hue: f64, saturation: f64, value: f64) -> Self {
        Self {
            hue: wrap_hue(hue),
            saturation: saturation.clamp(0.0, 1.0),
            value: value.clamp(0.0, 1.0),
        }
    }

    /// Same saturation and value, hue rotated by `turns` of the wheel
    pub fn rotate_hue(self, turns: f64) -> Self {
        Self {
            hue: wrap_hue(self.hue + turns),
            ..self
        }
    }
}

impl Color {
    pub const BLACK: Color = Color::new(0, 0, 0);
    pub const WHITE: Color = Color::new(255, 255, 255);

    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }

    /// Parse a hex color string
    ///
    /// # Errors
    ///
    /// Returns `AnalysisError::InvalidFormat` unless the input is exactly six
    /// hex digits, optionally prefixed by `#`
    pub fn from_hex(hex: &str) -> Result<Self> {
        hex_to_rgb(hex).map(Self::from)
    }

    /// Lowercase `#rrggbb` representation
    pub fn to_hex(&self) -> String {
        rgb_to_hex(self.rgb())
    }

    /// Build a color from channels on the 0–255 scale, clamping and truncating
    pub fn from_channels(red: f64, green: f64, blue: f64) -> Self {
        Self::new(quantize(red), quantize(green), quantize(blue))
    }

    /// Build a color from channels normalized to [0, 1] (×255, truncated)
    pub fn from_unit_rgb(red: f64, green: f64, blue: f64) -> Self {
        Self::from_channels(red * 255.0, green * 255.0, blue * 255.0)
    }

    pub fn rgb(&self) -> [u8; 3] {
        [self.red, self.green, self.blue]
    }

    /// Normalized sRGB value
    pub fn to_srgb(&self) -> Srgb<f64> {
        Srgb::new(self.red, self.green, self.blue).into_format()
    }

    pub fn to_hsv(&self) -> HsvColor {
        rgb_to_hsv(self.rgb())
    }

    pub fn from_hsv(hsv: HsvColor) -> Self {
        hsv_to_rgb(hsv).into()
    }
}

impl From<[u8; 3]> for Color {
    fn from([red, green, blue]: [u8; 3]) -> Self {
        Self::new(red, green, blue)
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_hex()
    }
}

impl TryFrom<String> for Color {
    type Error = AnalysisError;

    fn try_from(value: String) -> Result<Self> {
        Color::from_hex(&value)
    }
}

impl FromStr for Color {
    type Err = AnalysisError;

    fn from_str(s: &str) -> Result<Self> {
        Color::from_hex(s)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.red, self.green, self.blue)
    }
}

/// Parse `#rrggbb` or `rrggbb` (either case) into an RGB triple
///
/// # Errors
///
/// Returns `AnalysisError::InvalidFormat` for any other shape
pub fn hex_to_rgb(hex: &str) -> Result<[u8; 3]> {
    let digits = hex.strip_prefix('#').unwrap_or(hex);
    if digits.len() != 6 {
        return Err(AnalysisError::invalid_format(
            hex,
            format!("expected 6 hex digits, got {}", digits.chars().count()),
        ));
    }
    // from_str_radix alone would accept a leading '+'
    if let Some(bad) = digits.chars().find(|c| !c.is_ascii_hexdigit()) {
        return Err(AnalysisError::invalid_format(
            hex,
            format!("'{bad}' is not a hex digit"),
        ));
    }

    let channel = |range: std::ops::Range<usize>| {
        u8::from_str_radix(&digits[range], 16)
            .map_err(|e| AnalysisError::invalid_format(hex, e.to_string()))
    };

    Ok([channel(0..2)?, channel(2..4)?, channel(4..6)?])
}

/// Format an RGB triple as lowercase `#rrggbb`
pub fn rgb_to_hex(rgb: [u8; 3]) -> String {
    format!("#{:02x}{:02x}{:02x}", rgb[0], rgb[1], rgb[2])
}

/// Convert 8-bit RGB to HSV with every component in [0, 1]
pub fn rgb_to_hsv(rgb: [u8; 3]) -> HsvColor {
    // Not palette's u8 conversion: it multiplies by 1/255, which truncates
    // one step low after ×255 for some channels
    let [r, g, b] = rgb.map(|c| f64::from(c) / 255.0);
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let range = max - min;
    if range == 0.0 {
        return HsvColor::new(0.0, 0.0, max);
    }

    let saturation = range / max;
    let rc = (max - r) / range;
    let gc = (max - g) / range;
    let bc = (max - b) / range;
    let sector = if r == max {
        bc - gc
    } else if g == max {
        2.0 + rc - bc
    } else {
        4.0 + gc - rc
    };

    HsvColor::new(sector / 6.0, saturation, max)
}

/// Convert HSV back to 8-bit RGB, truncating each channel after ×255
///
/// The largest channel is `value` itself, so it survives a round trip
/// exactly.
pub fn hsv_to_rgb(hsv: HsvColor) -> [u8; 3] {
    let HsvColor {
        hue,
        saturation: s,
        value: v,
    } = hsv;
    if s == 0.0 {
        return Color::from_unit_rgb(v, v, v).rgb();
    }

    let scaled = hue * 6.0;
    let sector = scaled.trunc();
    let f = scaled - sector;
    let p = v * (1.0 - s);
    let q = v * (1.0 - s * f);
    let t = v * (1.0 - s * (1.0 - f));

    let (r, g, b) = match (sector as u8) % 6 {
        0 => (v, t, p),
        1 => (q, v, p),
        2 => (p, v, t),
        3 => (p, q, v),
        4 => (t, p, v),
        _ => (v, p, q),
    };
    Color::from_unit_rgb(r, g, b).rgb()
}

/// Wrap a hue expressed in turns into [0, 1).
///
/// Negative hues wrap around the wheel rather than being truncated.
pub fn wrap_hue(hue: f64) -> f64 {
    if !hue.is_finite() {
        return 0.0;
    }
    let wrapped = hue.rem_euclid(1.0);
    // rem_euclid of a tiny negative value can round up to exactly 1.0
    if wrapped >= 1.0 {
        0.0
    } else {
        wrapped
    }
}

fn quantize(channel: f64) -> u8 {
    if channel.is_nan() {
        return 0;
    }
    channel.clamp(0.0, 255.0) as u8
}
