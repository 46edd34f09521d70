//! Font color recommendations for a background color
//!
//! Classifies the background as light or dark by relative luminance, then
//! ranks a fixed set of three text colors for that class by contrast.

use serde::{Deserialize, Serialize};

use crate::color::{contrast_ratio, relative_luminance, Color, ContrastGrade};
use crate::constants::font::{DARK_CANDIDATES, LIGHT_BACKGROUND_THRESHOLD, LIGHT_CANDIDATES};
use crate::{AnalysisError, Result};

/// One candidate text color scored against a background
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FontSuggestion {
    pub color: Color,
    pub name: String,
    pub contrast: f64,
    pub grade: ContrastGrade,
}

/// Ranks candidate text colors by contrast against a background
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FontColorAdvisor {
    light_background_threshold: f64,
}

impl Default for FontColorAdvisor {
    fn default() -> Self {
        Self::new()
    }
}

impl FontColorAdvisor {
    pub fn new() -> Self {
        Self {
            light_background_threshold: LIGHT_BACKGROUND_THRESHOLD,
        }
    }

    /// Create an advisor with a custom light/dark luminance threshold
    ///
    /// # Errors
    ///
    /// Returns `AnalysisError::InvalidParameter` if the threshold is outside [0, 1]
    pub fn with_threshold(light_background_threshold: f64) -> Result<Self> {
        if !(0.0..=1.0).contains(&light_background_threshold) {
            return Err(AnalysisError::invalid_parameter(
                "light_background_threshold",
                light_background_threshold,
            ));
        }
        Ok(Self {
            light_background_threshold,
        })
    }

    /// Whether text on this background should be dark.
    ///
    /// Luminance exactly at the threshold counts as a dark background.
    pub fn is_light_background(&self, background: Color) -> bool {
        relative_luminance(background) > self.light_background_threshold
    }

    /// Suggest text colors for `background`, highest contrast first.
    ///
    /// Ties keep the candidates' declaration order.
    pub fn suggest(&self, background: Color) -> Vec<FontSuggestion> {
        let candidates = if self.is_light_background(background) {
            &DARK_CANDIDATES
        } else {
            &LIGHT_CANDIDATES
        };

        let mut suggestions: Vec<FontSuggestion> = candidates
            .iter()
            .map(|&(name, color)| {
                let contrast = contrast_ratio(background, color);
                FontSuggestion {
                    color,
                    name: name.to_string(),
                    contrast,
                    grade: ContrastGrade::from_ratio(contrast),
                }
            })
            .collect();

        // sort_by is stable
        suggestions.sort_by(|a, b| b.contrast.total_cmp(&a.contrast));
        suggestions
    }

    /// Same as [`suggest`](Self::suggest) for a hex background
    ///
    /// # Errors
    ///
    /// Returns `AnalysisError::InvalidFormat` if `background` is not a valid hex color
    pub fn suggest_for_hex(&self, background: &str) -> Result<Vec<FontSuggestion>> {
        Ok(self.suggest(Color::from_hex(background)?))
    }
}
