//! Error types for the chroma_advisor library

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for chroma_advisor operations
pub type Result<T> = std::result::Result<T, AnalysisError>;

/// Coarse error classification for programmatic dispatch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Source path does not exist
    NotFound,
    /// Source type is not recognized
    UnsupportedSource,
    /// Image bytes could not be read, decoded or reduced to a palette
    DecodeError,
    /// Malformed hex color string
    InvalidFormat,
    /// Extraction produced no colors
    EmptyPalette,
    /// Invalid configuration value or configuration file
    InvalidConfig,
}

/// Failures raised while loading an image or extracting its palette.
///
/// These never reach callers directly: [`AnalysisError::ImageLoadError`]
/// wraps them at the load boundary.
#[derive(Error, Debug)]
pub enum LoadError {
    /// Image file does not exist
    #[error("Image file not found: {}", .path.display())]
    NotFound { path: PathBuf },

    /// Image file exists but could not be read
    #[error("Failed to read image file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Image bytes could not be decoded into a pixel buffer
    #[error("{message}: {source}")]
    Decode {
        message: String,
        #[source]
        source: image::ImageError,
    },

    /// Palette extractor rejected its input
    #[error("Palette extraction failed: {message}")]
    Extraction { message: String },
}

impl LoadError {
    /// Create a decode error with context
    pub fn decode(message: impl Into<String>, source: image::ImageError) -> Self {
        Self::Decode {
            message: message.into(),
            source,
        }
    }

    /// Create an extraction error
    pub fn extraction(message: impl Into<String>) -> Self {
        Self::Extraction {
            message: message.into(),
        }
    }
}

/// Comprehensive error types for color analysis operations
#[derive(Error, Debug)]
pub enum AnalysisError {
    /// Image could not be loaded, decoded or reduced to a palette
    #[error("Error loading image: {source}")]
    ImageLoadError {
        #[from]
        source: LoadError,
    },

    /// Source type is not one of the supported values
    #[error("Unsupported source_type: {source_type}")]
    UnsupportedSource { source_type: String },

    /// Hex color string is malformed
    #[error("Invalid hex color '{value}': {reason}")]
    InvalidFormat { value: String, reason: String },

    /// Extractor returned zero colors
    #[error("Palette is empty: at least one color is required")]
    EmptyPalette,

    /// Invalid input parameters
    #[error("Invalid parameter: {parameter} = {value}")]
    InvalidParameter { parameter: String, value: String },

    /// Configuration file could not be read or written
    #[error("Configuration error: {message}")]
    ConfigError {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl AnalysisError {
    /// Create an invalid-format error for a hex string
    pub fn invalid_format(value: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidFormat {
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create an invalid-parameter error
    pub fn invalid_parameter(parameter: impl Into<String>, value: impl ToString) -> Self {
        Self::InvalidParameter {
            parameter: parameter.into(),
            value: value.to_string(),
        }
    }

    /// Create a configuration error with context
    pub fn config<E>(message: impl Into<String>, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::ConfigError {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Classify this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            AnalysisError::ImageLoadError { source } => match source {
                LoadError::NotFound { .. } => ErrorKind::NotFound,
                LoadError::Io { .. } | LoadError::Decode { .. } | LoadError::Extraction { .. } => {
                    ErrorKind::DecodeError
                }
            },
            AnalysisError::UnsupportedSource { .. } => ErrorKind::UnsupportedSource,
            AnalysisError::InvalidFormat { .. } => ErrorKind::InvalidFormat,
            AnalysisError::EmptyPalette => ErrorKind::EmptyPalette,
            AnalysisError::InvalidParameter { .. } | AnalysisError::ConfigError { .. } => {
                ErrorKind::InvalidConfig
            }
        }
    }

    /// Check if this error came from the image loading boundary
    pub fn is_load_failure(&self) -> bool {
        matches!(self, AnalysisError::ImageLoadError { .. })
    }

    /// Get user-friendly error description for application display
    pub fn user_message(&self) -> String {
        match self.kind() {
            ErrorKind::NotFound => {
                "Could not find the image. Please check the path and try again.".to_string()
            }
            ErrorKind::DecodeError => {
                "Could not read the image. Please check the file format and try again.".to_string()
            }
            ErrorKind::UnsupportedSource => {
                "This source type is not supported. Use \"file\".".to_string()
            }
            ErrorKind::InvalidFormat => {
                "Colors must be written as six hex digits, for example #3366cc.".to_string()
            }
            ErrorKind::EmptyPalette => {
                "No usable colors were found in the image. Try an image with more opaque, non-white content.".to_string()
            }
            ErrorKind::InvalidConfig => {
                "The analysis configuration is invalid. Please check its values.".to_string()
            }
        }
    }
}
