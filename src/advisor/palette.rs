//! Palette improvement suggestions
//!
//! Turns an extracted palette into design advice:
//! - Complementary accent for the dominant color
//! - Analogous neighbours of the dominant color
//! - A warning when the two most dominant colors contrast poorly

use serde::{Deserialize, Serialize};

use crate::color::{contrast_ratio, Color, HarmonyGenerator};
use crate::constants::harmony::{ANALOGOUS_DESCRIPTION, COMPLEMENTARY_DESCRIPTION};
use crate::constants::wcag::AA_NORMAL_TEXT;
use crate::{AnalysisError, Result};

/// A single palette improvement
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Suggestion {
    /// Base color followed by its complement
    Complementary {
        colors: [Color; 2],
        description: String,
    },
    /// Base color followed by its two analogous neighbours
    Analogous {
        colors: [Color; 3],
        description: String,
    },
    /// Low contrast between the two most dominant colors
    Contrast { ratio: f64, description: String },
}

impl Suggestion {
    pub fn description(&self) -> &str {
        match self {
            Suggestion::Complementary { description, .. }
            | Suggestion::Analogous { description, .. }
            | Suggestion::Contrast { description, .. } => description,
        }
    }

    /// Colors carried by the suggestion; empty for contrast warnings
    pub fn colors(&self) -> &[Color] {
        match self {
            Suggestion::Complementary { colors, .. } => colors.as_slice(),
            Suggestion::Analogous { colors, .. } => colors.as_slice(),
            Suggestion::Contrast { .. } => &[],
        }
    }

    pub fn is_contrast_warning(&self) -> bool {
        matches!(self, Suggestion::Contrast { .. })
    }
}

/// Builds improvement suggestions from a dominance-ordered palette
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PaletteAdvisor {
    harmony: HarmonyGenerator,
    warning_threshold: f64,
}

impl Default for PaletteAdvisor {
    fn default() -> Self {
        Self::new()
    }
}

impl PaletteAdvisor {
    pub fn new() -> Self {
        Self {
            harmony: HarmonyGenerator::new(),
            warning_threshold: AA_NORMAL_TEXT,
        }
    }

    /// Create an advisor with a custom harmony generator and warning threshold
    ///
    /// # Errors
    ///
    /// Returns `AnalysisError::InvalidParameter` if the threshold is below 1.0,
    /// the smallest possible contrast ratio
    pub fn with_params(harmony: HarmonyGenerator, warning_threshold: f64) -> Result<Self> {
        if !(warning_threshold >= 1.0) {
            return Err(AnalysisError::invalid_parameter(
                "warning_threshold",
                warning_threshold,
            ));
        }
        Ok(Self {
            harmony,
            warning_threshold,
        })
    }

    /// Suggest improvements for `palette`, most dominant color first.
    ///
    /// Output order is `[Complementary, Analogous]`, followed by a contrast
    /// warning when the palette has at least two colors and their contrast is
    /// below the threshold. A single-color palette never warns.
    ///
    /// # Errors
    ///
    /// Returns `AnalysisError::EmptyPalette` if `palette` is empty
    pub fn suggest(&self, palette: &[Color]) -> Result<Vec<Suggestion>> {
        let (&base, rest) = palette.split_first().ok_or(AnalysisError::EmptyPalette)?;
        let harmony = self.harmony.generate(base);

        let mut suggestions = vec![
            Suggestion::Complementary {
                colors: [base, harmony.complementary],
                description: COMPLEMENTARY_DESCRIPTION.to_string(),
            },
            Suggestion::Analogous {
                colors: [base, harmony.analogous[0], harmony.analogous[1]],
                description: ANALOGOUS_DESCRIPTION.to_string(),
            },
        ];

        if let Some(&second) = rest.first() {
            let ratio = contrast_ratio(base, second);
            if ratio < self.warning_threshold {
                suggestions.push(Suggestion::Contrast {
                    ratio,
                    description: format!(
                        "Current contrast ratio ({ratio:.2}) might be too low. \
                         Consider increasing contrast for better readability."
                    ),
                });
            }
        }

        Ok(suggestions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn palette(hexes: &[&str]) -> Vec<Color> {
        hexes.iter().map(|h| Color::from_hex(h).unwrap()).collect()
    }

    #[test]
    fn test_low_contrast_pair_warns() {
        let suggestions = PaletteAdvisor::new()
            .suggest(&palette(&["#cccccc", "#dddddd"]))
            .unwrap();

        assert_eq!(suggestions.len(), 3);
        let warning = &suggestions[2];
        assert!(warning.is_contrast_warning());
        match warning {
            Suggestion::Contrast { ratio, description } => {
                assert!(*ratio < AA_NORMAL_TEXT);
                assert!(description.contains(&format!("({ratio:.2})")));
            }
            other => panic!("expected contrast warning, got {other:?}"),
        }
    }

    #[test]
    fn test_high_contrast_pair_does_not_warn() {
        let suggestions = PaletteAdvisor::new()
            .suggest(&palette(&["#000000", "#ffffff"]))
            .unwrap();
        assert_eq!(suggestions.len(), 2);
        assert!(!suggestions.iter().any(Suggestion::is_contrast_warning));
    }

    #[test]
    fn test_order_and_base_color() {
        let base = Color::new(0x33, 0x66, 0xcc);
        let suggestions = PaletteAdvisor::new()
            .suggest(&[base, Color::new(0x34, 0x67, 0xcd)])
            .unwrap();

        assert!(matches!(suggestions[0], Suggestion::Complementary { .. }));
        assert!(matches!(suggestions[1], Suggestion::Analogous { .. }));
        assert!(matches!(suggestions[2], Suggestion::Contrast { .. }));

        assert_eq!(suggestions[0].colors().len(), 2);
        assert_eq!(suggestions[1].colors().len(), 3);
        assert_eq!(suggestions[0].colors()[0], base);
        assert_eq!(suggestions[1].colors()[0], base);
        assert!(suggestions[2].colors().is_empty());
    }

    #[test]
    fn test_single_color_palette_skips_warning() {
        let suggestions = PaletteAdvisor::new()
            .suggest(&palette(&["#cccccc"]))
            .unwrap();
        assert_eq!(suggestions.len(), 2);
    }

    #[test]
    fn test_only_first_two_colors_checked() {
        // Black/white leads; the low-contrast tail is ignored
        let suggestions = PaletteAdvisor::new()
            .suggest(&palette(&["#000000", "#ffffff", "#fefefe", "#fdfdfd"]))
            .unwrap();
        assert_eq!(suggestions.len(), 2);
    }

    #[test]
    fn test_empty_palette_is_error() {
        let err = PaletteAdvisor::new().suggest(&[]).unwrap_err();
        assert_eq!(err.kind(), crate::ErrorKind::EmptyPalette);
    }

    #[test]
    fn test_custom_threshold() {
        let advisor = PaletteAdvisor::with_params(HarmonyGenerator::new(), 1.0).unwrap();
        let suggestions = advisor.suggest(&palette(&["#cccccc", "#dddddd"])).unwrap();
        assert_eq!(suggestions.len(), 2);

        assert!(PaletteAdvisor::with_params(HarmonyGenerator::new(), 0.5).is_err());
        assert!(PaletteAdvisor::with_params(HarmonyGenerator::new(), f64::NAN).is_err());
    }

    #[test]
    fn test_serialized_shape() {
        let suggestions = PaletteAdvisor::new()
            .suggest(&palette(&["#ff0000", "#ff1010"]))
            .unwrap();
        let json = serde_json::to_value(&suggestions).unwrap();

        assert_eq!(json[0]["type"], "Complementary");
        assert_eq!(json[0]["colors"][0], "#ff0000");
        assert_eq!(json[0]["colors"][1], "#00ffff");
        assert_eq!(json[1]["type"], "Analogous");
        assert_eq!(json[1]["colors"].as_array().unwrap().len(), 3);
        assert_eq!(json[2]["type"], "Contrast");
        assert!(json[2]["description"]
            .as_str()
            .unwrap()
            .starts_with("Current contrast ratio ("));

        let back: Vec<Suggestion> = serde_json::from_value(json).unwrap();
        assert_eq!(back, suggestions);
    }
}
