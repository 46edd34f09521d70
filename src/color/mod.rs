//! Color science module
//!
//! This module handles color representation and conversion, WCAG luminance
//! and contrast math, and hue-based harmony generation.

pub mod conversion;
pub mod contrast;
pub mod harmony;

pub use conversion::{hex_to_rgb, hsv_to_rgb, rgb_to_hex, rgb_to_hsv, Color, HsvColor};
pub use contrast::{contrast_ratio, relative_luminance, ContrastGrade};
pub use harmony::{Harmony, HarmonyGenerator};
