//! Configuration structures for the chroma_advisor analysis pipeline.
//!
//! This module defines all tunable parameters for color analysis,
//! organized into groups for extraction, harmony and contrast.
//!
//! # Configuration Loading
//!
//! Configuration can be loaded from JSON files or constructed programmatically:
//!
//! ```no_run
//! use chroma_advisor::AdvisorConfig;
//! use std::path::Path;
//!
//! // Load from file
//! let config = AdvisorConfig::from_json_file(Path::new("config.json"))?;
//!
//! // Or use defaults
//! let config = AdvisorConfig::default();
//! # Ok::<(), chroma_advisor::AnalysisError>(())
//! ```
//!
//! Missing sections and fields fall back to their defaults, so a file only
//! needs to name the values it changes.
//!
//! # Configuration Sections
//!
//! - [`ExtractionConfig`]: palette size and sampling stride
//! - [`HarmonyConfig`]: analogous hue offset
//! - [`ContrastConfig`]: warning and background thresholds

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::advisor::{FontColorAdvisor, PaletteAdvisor};
use crate::color::HarmonyGenerator;
use crate::constants::{extraction, font, harmony, wcag};
use crate::{AnalysisError, Result};

/// Complete configuration for one analysis run.
///
/// Can be serialized to/from JSON for reproducible runs.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AdvisorConfig {
    /// Palette extraction configuration
    pub extraction: ExtractionConfig,

    /// Harmony generation configuration
    pub harmony: HarmonyConfig,

    /// Contrast thresholds
    pub contrast: ContrastConfig,
}

/// Palette extraction parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractionConfig {
    /// Number of dominant colors to request (1-256)
    pub color_count: usize,

    /// Pixel sampling stride, 1 = every pixel
    pub quality: u32,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            color_count: extraction::DEFAULT_COLOR_COUNT,
            quality: extraction::DEFAULT_QUALITY,
        }
    }
}

/// Harmony generation parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HarmonyConfig {
    /// Analogous rotation in turns, (0, 0.5]
    pub analogous_offset: f64,
}

impl Default for HarmonyConfig {
    fn default() -> Self {
        Self {
            analogous_offset: harmony::ANALOGOUS_OFFSET,
        }
    }
}

/// Contrast thresholds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContrastConfig {
    /// Palette contrast below this ratio triggers a warning
    pub warning_threshold: f64,

    /// Background luminance above this value counts as light (0.0-1.0)
    pub light_background_threshold: f64,
}

impl Default for ContrastConfig {
    fn default() -> Self {
        Self {
            warning_threshold: wcag::AA_NORMAL_TEXT,
            light_background_threshold: font::LIGHT_BACKGROUND_THRESHOLD,
        }
    }
}

impl AdvisorConfig {
    /// Check every value is in range
    ///
    /// # Errors
    ///
    /// Returns `AnalysisError::InvalidParameter` naming the first bad value
    pub fn validate(&self) -> Result<()> {
        let ExtractionConfig {
            color_count,
            quality,
        } = self.extraction;
        if !(1..=extraction::MAX_COLOR_COUNT).contains(&color_count) {
            return Err(AnalysisError::invalid_parameter(
                "extraction.color_count",
                color_count,
            ));
        }
        if quality == 0 {
            return Err(AnalysisError::invalid_parameter(
                "extraction.quality",
                quality,
            ));
        }

        self.harmony_generator()?;
        self.palette_advisor()?;
        self.font_advisor()?;
        Ok(())
    }

    /// Harmony generator for the configured offset
    pub fn harmony_generator(&self) -> Result<HarmonyGenerator> {
        HarmonyGenerator::with_offset(self.harmony.analogous_offset)
    }

    /// Palette advisor for the configured harmony and warning threshold
    pub fn palette_advisor(&self) -> Result<PaletteAdvisor> {
        PaletteAdvisor::with_params(self.harmony_generator()?, self.contrast.warning_threshold)
    }

    /// Font advisor for the configured background threshold
    pub fn font_advisor(&self) -> Result<FontColorAdvisor> {
        FontColorAdvisor::with_threshold(self.contrast.light_background_threshold)
    }

    /// Parse and validate configuration from a JSON string
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)
            .map_err(|e| AnalysisError::config("Failed to parse configuration", e))?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from JSON file
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            AnalysisError::config(
                format!("Failed to read configuration {}", path.display()),
                e,
            )
        })?;
        Self::from_json_str(&content)
    }

    /// Save configuration to JSON file
    pub fn to_json_file(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| AnalysisError::config("Failed to serialize configuration", e))?;
        std::fs::write(path, json).map_err(|e| {
            AnalysisError::config(
                format!("Failed to write configuration {}", path.display()),
                e,
            )
        })
    }
}
