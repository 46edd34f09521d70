//! Reference values for color analysis
//!
//! This module contains compile-time constants for luminance, contrast,
//! harmony and extraction, grouped by concern.

/// WCAG 2.x relative luminance and contrast reference values
pub mod wcag {
    /// Linear-segment threshold for sRGB gamma expansion (WCAG 2.0 wording)
    pub const GAMMA_THRESHOLD: f64 = 0.03928;

    /// Slope of the linear segment
    pub const LINEAR_DIVISOR: f64 = 12.92;

    /// Offset and scale of the power segment
    pub const GAMMA_OFFSET: f64 = 0.055;
    pub const GAMMA_SCALE: f64 = 1.055;

    /// Exponent of the power segment
    pub const GAMMA_EXPONENT: f64 = 2.4;

    /// Luminance weights for red, green and blue (Rec. 709 primaries)
    pub const LUMINANCE_WEIGHTS: [f64; 3] = [0.2126, 0.7152, 0.0722];

    /// Flare term added to both luminances in the contrast ratio
    pub const CONTRAST_FLARE: f64 = 0.05;

    /// Minimum contrast for large text at level AA
    pub const AA_LARGE_TEXT: f64 = 3.0;

    /// Minimum contrast for normal text at level AA
    pub const AA_NORMAL_TEXT: f64 = 4.5;

    /// Minimum contrast for normal text at level AAA
    pub const AAA_NORMAL_TEXT: f64 = 7.0;
}

/// Hue rotation amounts on a wheel normalized to [0, 1)
pub mod harmony {
    /// Complementary rotation (180°)
    pub const COMPLEMENTARY_OFFSET: f64 = 0.5;

    /// Analogous rotation (≈30°)
    pub const ANALOGOUS_OFFSET: f64 = 0.083;

    pub const COMPLEMENTARY_DESCRIPTION: &str =
        "Consider using this complementary color for accent elements";

    pub const ANALOGOUS_DESCRIPTION: &str =
        "These analogous colors could create a more harmonious feel";
}

/// Font color candidates and background classification
pub mod font {
    use crate::color::Color;

    /// Backgrounds with relative luminance above this value are "light"
    pub const LIGHT_BACKGROUND_THRESHOLD: f64 = 0.5;

    /// Text candidates for light backgrounds, in declaration order
    pub const DARK_CANDIDATES: [(&str, Color); 3] = [
        ("Black", Color::new(0x00, 0x00, 0x00)),
        ("Dark Gray", Color::new(0x33, 0x33, 0x33)),
        ("Medium Gray", Color::new(0x55, 0x55, 0x55)),
    ];

    /// Text candidates for dark backgrounds, in declaration order
    pub const LIGHT_CANDIDATES: [(&str, Color); 3] = [
        ("White", Color::new(0xff, 0xff, 0xff)),
        ("Light Gray", Color::new(0xf0, 0xf0, 0xf0)),
        ("Medium Light Gray", Color::new(0xcc, 0xcc, 0xcc)),
    ];
}

/// Palette extraction parameters
pub mod extraction {
    /// Number of dominant colors requested by default
    pub const DEFAULT_COLOR_COUNT: usize = 5;

    /// Largest palette the median-cut extractor will produce
    pub const MAX_COLOR_COUNT: usize = 256;

    /// Default sampling stride (1 = every pixel)
    pub const DEFAULT_QUALITY: u32 = 10;

    /// Significant bits kept per channel when building the histogram
    pub const SIGNIFICANT_BITS: u32 = 5;

    /// Pixels with alpha below this value are ignored
    pub const MIN_ALPHA: u8 = 125;

    /// Pixels with every channel above this value are ignored as background white
    pub const WHITE_CUTOFF: u8 = 250;

    /// Share of the target box count split by population before switching
    /// to population × volume
    pub const POPULATION_SPLIT_FRACTION: f64 = 0.75;
}
