//! # Chroma Advisor
//!
//! A Rust crate for deriving design advice from the colors of an image.
//!
//! This library provides automated color guidance by:
//! - Extracting a dominant palette with median-cut quantization
//! - Suggesting complementary and analogous accents for the dominant color
//! - Warning when the two most dominant colors contrast poorly
//! - Ranking font colors by WCAG contrast against the dominant color
//!
//! ## Example
//!
//! ```rust,no_run
//! use chroma_advisor::analyze;
//!
//! let result = analyze("photo.jpg", "file")?;
//! println!("Palette: {:?}", result.dominant_palette);
//! # Ok::<(), chroma_advisor::AnalysisError>(())
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::str::FromStr;
use tracing::{debug, info};

pub mod advisor;
pub mod color;
pub mod config;
pub mod constants;
pub mod error;
pub mod extraction;
pub mod image_loader;

pub use advisor::{FontColorAdvisor, FontSuggestion, PaletteAdvisor, Suggestion};
pub use color::{contrast_ratio, relative_luminance, Color, ContrastGrade, HarmonyGenerator};
pub use config::AdvisorConfig;
pub use error::{AnalysisError, ErrorKind, LoadError, Result};
pub use extraction::{MedianCutExtractor, PaletteExtractor};
pub use image_loader::LoadedImage;

/// Where analysis input comes from
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum SourceType {
    /// A path on the local filesystem
    #[default]
    File,
}

impl SourceType {
    pub fn as_str(&self) -> &'static str {
        match self {
            SourceType::File => "file",
        }
    }
}

impl FromStr for SourceType {
    type Err = AnalysisError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "file" => Ok(SourceType::File),
            other => Err(AnalysisError::UnsupportedSource {
                source_type: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for SourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Palette, improvement suggestions and font suggestions for one image
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Dominant colors, most dominant first
    pub dominant_palette: Vec<Color>,
    /// Harmony suggestions and contrast warnings
    pub palette_improvements: Vec<Suggestion>,
    /// Font colors for text on the dominant color, best contrast first
    pub font_suggestions: Vec<FontSuggestion>,
}

/// One analysis over one decoded image.
///
/// Owns the image, the extractor and the configuration for the duration of
/// a request; nothing outlives it.
#[derive(Debug, Clone)]
pub struct AnalysisRequest<E = MedianCutExtractor> {
    image: LoadedImage,
    extractor: E,
    config: AdvisorConfig,
}

impl AnalysisRequest<MedianCutExtractor> {
    /// Load `source` and prepare a request with the default extractor and
    /// configuration
    ///
    /// # Errors
    ///
    /// Returns `AnalysisError::ImageLoadError` if the image cannot be loaded
    pub fn open(source: impl AsRef<Path>, source_type: SourceType) -> Result<Self> {
        let image = match source_type {
            SourceType::File => image_loader::load_image(source.as_ref())?,
        };
        Ok(Self::from_image(image))
    }

    /// Prepare a request for an already decoded image
    pub fn from_image(image: LoadedImage) -> Self {
        Self {
            image,
            extractor: MedianCutExtractor::new(),
            config: AdvisorConfig::default(),
        }
    }
}

impl<E: PaletteExtractor> AnalysisRequest<E> {
    /// Swap in a different palette extractor
    pub fn with_extractor<F: PaletteExtractor>(self, extractor: F) -> AnalysisRequest<F> {
        AnalysisRequest {
            image: self.image,
            extractor,
            config: self.config,
        }
    }

    /// Use `config` for this request
    ///
    /// # Errors
    ///
    /// Returns `AnalysisError::InvalidParameter` if the configuration is invalid
    pub fn with_config(mut self, config: AdvisorConfig) -> Result<Self> {
        config.validate()?;
        self.config = config;
        Ok(self)
    }

    pub fn image(&self) -> &LoadedImage {
        &self.image
    }

    pub fn config(&self) -> &AdvisorConfig {
        &self.config
    }

    /// Extract the dominant palette, most dominant first
    ///
    /// # Errors
    ///
    /// Returns:
    /// - `AnalysisError::ImageLoadError` if the extractor fails
    /// - `AnalysisError::EmptyPalette` if it finds no colors
    pub fn dominant_palette(&self) -> Result<Vec<Color>> {
        let extraction = &self.config.extraction;
        let palette =
            self.extractor
                .extract(&self.image, extraction.color_count, extraction.quality)?;
        if palette.is_empty() {
            return Err(AnalysisError::EmptyPalette);
        }
        Ok(palette)
    }

    /// Harmony suggestions and contrast warning for `palette`
    pub fn suggest_palette_improvements(&self, palette: &[Color]) -> Result<Vec<Suggestion>> {
        self.config.palette_advisor()?.suggest(palette)
    }

    /// Font colors for text on `background`, best contrast first
    pub fn suggest_font_colors(&self, background: Color) -> Result<Vec<FontSuggestion>> {
        Ok(self.config.font_advisor()?.suggest(background))
    }

    /// Run the full analysis, extracting the palette once
    pub fn run(&self) -> Result<AnalysisResult> {
        let dominant_palette = self.dominant_palette()?;
        debug!(palette = ?dominant_palette, "dominant palette");

        let palette_improvements = self.suggest_palette_improvements(&dominant_palette)?;
        let font_suggestions = self.suggest_font_colors(dominant_palette[0])?;

        Ok(AnalysisResult {
            dominant_palette,
            palette_improvements,
            font_suggestions,
        })
    }
}

/// Analyze an image and derive color advice
///
/// This is the main entry point for color analysis. It loads the image,
/// extracts five dominant colors and builds palette and font suggestions
/// from them.
///
/// # Arguments
///
/// * `source` - Path to the image file
/// * `source_type` - Kind of source; only `"file"` is supported
///
/// # Errors
///
/// Returns `AnalysisError` if:
/// - The source type is not supported
/// - The image cannot be found, read or decoded
/// - No usable colors are found in the image
pub fn analyze(source: impl AsRef<Path>, source_type: &str) -> Result<AnalysisResult> {
    analyze_with_config(source, source_type, AdvisorConfig::default())
}

/// Like [`analyze`], with explicit configuration
pub fn analyze_with_config(
    source: impl AsRef<Path>,
    source_type: &str,
    config: AdvisorConfig,
) -> Result<AnalysisResult> {
    let source = source.as_ref();
    let source_type: SourceType = source_type.parse()?;
    info!(source = %source.display(), %source_type, "analyzing image");

    let result = AnalysisRequest::open(source, source_type)?
        .with_config(config)?
        .run()?;

    info!(
        colors = result.dominant_palette.len(),
        suggestions = result.palette_improvements.len(),
        "analysis complete"
    );
    Ok(result)
}
