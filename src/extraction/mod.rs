//! Dominant palette extraction
//!
//! The color science core only needs "image in, ranked colors out", so
//! extraction sits behind [`PaletteExtractor`]. [`MedianCutExtractor`] is the
//! default implementation.

pub mod median_cut;

pub use median_cut::MedianCutExtractor;

use crate::color::Color;
use crate::error::LoadError;
use crate::image_loader::LoadedImage;

/// Reduces an image to its dominant colors
pub trait PaletteExtractor {
    /// Extract up to `color_count` colors, most dominant first.
    ///
    /// `quality` is a sampling stride: 1 reads every pixel, 10 every tenth.
    /// An image with no usable pixels yields an empty palette rather than an
    /// error.
    ///
    /// # Errors
    ///
    /// Returns `LoadError::Extraction` for unusable parameters
    fn extract(
        &self,
        image: &LoadedImage,
        color_count: usize,
        quality: u32,
    ) -> Result<Vec<Color>, LoadError>;
}

impl<E: PaletteExtractor + ?Sized> PaletteExtractor for &E {
    fn extract(
        &self,
        image: &LoadedImage,
        color_count: usize,
        quality: u32,
    ) -> Result<Vec<Color>, LoadError> {
        (**self).extract(image, color_count, quality)
    }
}

impl<E: PaletteExtractor + ?Sized> PaletteExtractor for Box<E> {
    fn extract(
        &self,
        image: &LoadedImage,
        color_count: usize,
        quality: u32,
    ) -> Result<Vec<Color>, LoadError> {
        (**self).extract(image, color_count, quality)
    }
}
