//! Hue-based harmony generation
//!
//! Derives accent colors from a base color by rotating its hue while keeping
//! saturation and value:
//! - Complementary: half a turn (180°)
//! - Analogous: ± a small offset (≈30° by default)

use serde::{Deserialize, Serialize};

use super::conversion::Color;
use crate::constants::harmony::{ANALOGOUS_OFFSET, COMPLEMENTARY_OFFSET};
use crate::{AnalysisError, Result};

/// Colors derived from one base color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Harmony {
    pub base: Color,
    pub complementary: Color,
    /// Hue rotated forward, then backward, by the analogous offset
    pub analogous: [Color; 2],
}

/// Harmony generator with a configurable analogous offset
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HarmonyGenerator {
    analogous_offset: f64,
}

impl Default for HarmonyGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl HarmonyGenerator {
    /// Create a generator with the default ≈30° analogous offset
    pub fn new() -> Self {
        Self {
            analogous_offset: ANALOGOUS_OFFSET,
        }
    }

    /// Create a generator with a custom analogous offset, in turns
    ///
    /// # Errors
    ///
    /// Returns `AnalysisError::InvalidParameter` unless `0 < offset <= 0.5`
    pub fn with_offset(analogous_offset: f64) -> Result<Self> {
        if !(analogous_offset > 0.0 && analogous_offset <= 0.5) {
            return Err(AnalysisError::invalid_parameter(
                "analogous_offset",
                analogous_offset,
            ));
        }
        Ok(Self { analogous_offset })
    }

    pub fn analogous_offset(&self) -> f64 {
        self.analogous_offset
    }

    /// Color on the opposite side of the hue wheel
    pub fn complementary(&self, base: Color) -> Color {
        Color::from_hsv(base.to_hsv().rotate_hue(COMPLEMENTARY_OFFSET))
    }

    /// Colors at `+offset` and `-offset` around the base hue
    pub fn analogous(&self, base: Color) -> [Color; 2] {
        let hsv = base.to_hsv();
        [
            Color::from_hsv(hsv.rotate_hue(self.analogous_offset)),
            Color::from_hsv(hsv.rotate_hue(-self.analogous_offset)),
        ]
    }

    pub fn generate(&self, base: Color) -> Harmony {
        Harmony {
            base,
            complementary: self.complementary(base),
            analogous: self.analogous(base),
        }
    }
}
