//! Image loading with pixel-mode normalization
//!
//! This module provides the single entry point for turning a file or an
//! in-memory buffer into pixels the palette extractor can read.
//!
//! ## Supported Formats
//!
//! Everything the `image` crate can decode with its default features:
//! JPEG, PNG, GIF (first frame), WebP, TIFF, BMP, ICO, TGA, PNM, QOI, ...
//!
//! ## Design
//!
//! Decoded images are normalized to one of two pixel modes: 8-bit RGB, or
//! 8-bit RGBA when the source carries alpha. Grayscale, 16-bit and float
//! images are converted. The format is detected from content, not from the
//! file extension.

use image::{DynamicImage, ImageFormat, ImageReader, RgbImage, RgbaImage};
use std::io::Cursor;
use std::path::Path;
use tracing::debug;

use crate::error::LoadError;

/// Pixel layout of a loaded image
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PixelMode {
    /// Three 8-bit channels
    Rgb,
    /// Four 8-bit channels, straight alpha
    Rgba,
}

/// A decoded image in RGB or RGBA mode
#[derive(Debug, Clone)]
pub struct LoadedImage {
    pixels: Pixels,
    format: Option<ImageFormat>,
}

#[derive(Debug, Clone)]
enum Pixels {
    Rgb(RgbImage),
    Rgba(RgbaImage),
}

impl LoadedImage {
    /// Wrap a decoded image, converting it to RGB8 or RGBA8 if needed
    pub fn from_dynamic(image: DynamicImage, format: Option<ImageFormat>) -> Self {
        let pixels = match image {
            DynamicImage::ImageRgb8(buffer) => Pixels::Rgb(buffer),
            DynamicImage::ImageRgba8(buffer) => Pixels::Rgba(buffer),
            other if other.color().has_alpha() => Pixels::Rgba(other.to_rgba8()),
            other => Pixels::Rgb(other.to_rgb8()),
        };
        Self { pixels, format }
    }

    pub fn mode(&self) -> PixelMode {
        match self.pixels {
            Pixels::Rgb(_) => PixelMode::Rgb,
            Pixels::Rgba(_) => PixelMode::Rgba,
        }
    }

    /// Detected container format, when known
    pub fn format(&self) -> Option<ImageFormat> {
        self.format
    }

    pub fn dimensions(&self) -> (u32, u32) {
        match &self.pixels {
            Pixels::Rgb(buffer) => buffer.dimensions(),
            Pixels::Rgba(buffer) => buffer.dimensions(),
        }
    }

    pub fn pixel_count(&self) -> usize {
        let (width, height) = self.dimensions();
        width as usize * height as usize
    }

    /// Iterate pixels in row-major order as RGBA; RGB pixels get alpha 255
    pub fn rgba_pixels(&self) -> Box<dyn Iterator<Item = [u8; 4]> + '_> {
        match &self.pixels {
            Pixels::Rgba(buffer) => Box::new(buffer.pixels().map(|p| p.0)),
            Pixels::Rgb(buffer) => {
                Box::new(buffer.pixels().map(|p| [p.0[0], p.0[1], p.0[2], u8::MAX]))
            }
        }
    }
}

/// Load an image from disk
///
/// # Errors
///
/// Returns:
/// - `LoadError::NotFound` if the path does not exist
/// - `LoadError::Io` if the file cannot be opened or sniffed
/// - `LoadError::Decode` if the bytes are not a decodable image
///
/// # Example
///
/// ```rust,no_run
/// use chroma_advisor::image_loader::load_image;
/// use std::path::Path;
///
/// let image = load_image(Path::new("photo.jpg"))?;
/// println!("Loaded image: {:?}", image.dimensions());
/// # Ok::<(), chroma_advisor::LoadError>(())
/// ```
pub fn load_image(path: &Path) -> Result<LoadedImage, LoadError> {
    if !path.exists() {
        return Err(LoadError::NotFound {
            path: path.to_path_buf(),
        });
    }

    let reader = ImageReader::open(path)
        .and_then(ImageReader::with_guessed_format)
        .map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
    let format = reader.format();

    let image = reader.decode().map_err(|e| {
        LoadError::decode(format!("Failed to decode image {}", path.display()), e)
    })?;

    let loaded = LoadedImage::from_dynamic(image, format);
    debug!(
        path = %path.display(),
        format = ?loaded.format(),
        mode = ?loaded.mode(),
        width = loaded.dimensions().0,
        height = loaded.dimensions().1,
        "image loaded"
    );
    Ok(loaded)
}

/// Load an image from an in-memory buffer
///
/// # Errors
///
/// Returns `LoadError::Decode` if the bytes are not a decodable image
pub fn load_image_bytes(bytes: &[u8]) -> Result<LoadedImage, LoadError> {
    let reader = ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()
        .map_err(|e| LoadError::decode("Failed to read image bytes", e.into()))?;
    let format = reader.format();

    let image = reader
        .decode()
        .map_err(|e| LoadError::decode("Failed to decode image bytes", e))?;

    let loaded = LoadedImage::from_dynamic(image, format);
    debug!(
        bytes = bytes.len(),
        format = ?loaded.format(),
        mode = ?loaded.mode(),
        "image decoded from memory"
    );
    Ok(loaded)
}

/// Check if a file extension belongs to a format this build can decode
pub fn is_supported_extension(ext: &str) -> bool {
    ImageFormat::from_extension(ext.to_ascii_lowercase())
        .is_some_and(|format| format.reading_enabled())
}

/// Check if a path has a decodable image extension
pub fn has_supported_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(is_supported_extension)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{GrayImage, ImageBuffer, Luma, LumaA, Rgb, Rgba};

    fn encode_png(image: &DynamicImage) -> Vec<u8> {
        let mut bytes = Vec::new();
        image
            .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
            .unwrap();
        bytes
    }

    #[test]
    fn test_supported_extensions() {
        assert!(is_supported_extension("png"));
        assert!(is_supported_extension("PNG"));
        assert!(is_supported_extension("jpg"));
        assert!(is_supported_extension("jpeg"));
        assert!(!is_supported_extension("xyz"));
        assert!(!is_supported_extension("doc"));
        assert!(has_supported_extension(Path::new("photo.JPG")));
        assert!(!has_supported_extension(Path::new("notes")));
    }

    #[test]
    fn test_missing_file_is_not_found() {
        let err = load_image(Path::new("definitely/not/here.png")).unwrap_err();
        assert!(matches!(err, LoadError::NotFound { .. }));
    }

    #[test]
    fn test_rgb_image_keeps_mode() {
        let image = DynamicImage::ImageRgb8(RgbImage::from_pixel(2, 2, Rgb([10, 20, 30])));
        let loaded = load_image_bytes(&encode_png(&image)).unwrap();
        assert_eq!(loaded.mode(), PixelMode::Rgb);
        assert_eq!(loaded.format(), Some(ImageFormat::Png));
        assert_eq!(loaded.dimensions(), (2, 2));
        assert_eq!(loaded.pixel_count(), 4);
        assert!(loaded.rgba_pixels().all(|p| p == [10, 20, 30, 255]));
    }

    #[test]
    fn test_rgba_image_keeps_alpha() {
        let image = DynamicImage::ImageRgba8(RgbaImage::from_pixel(1, 3, Rgba([1, 2, 3, 4])));
        let loaded = load_image_bytes(&encode_png(&image)).unwrap();
        assert_eq!(loaded.mode(), PixelMode::Rgba);
        assert_eq!(loaded.rgba_pixels().collect::<Vec<_>>(), vec![[1, 2, 3, 4]; 3]);
    }

    #[test]
    fn test_grayscale_converted_to_rgb() {
        let gray: GrayImage = ImageBuffer::from_pixel(3, 1, Luma([77]));
        let loaded = LoadedImage::from_dynamic(DynamicImage::ImageLuma8(gray), None);
        assert_eq!(loaded.mode(), PixelMode::Rgb);
        assert!(loaded.rgba_pixels().all(|p| p == [77, 77, 77, 255]));
    }

    #[test]
    fn test_gray_alpha_converted_to_rgba() {
        let image = DynamicImage::ImageLumaA8(ImageBuffer::from_pixel(2, 1, LumaA([40, 0])));
        let loaded = LoadedImage::from_dynamic(image, None);
        assert_eq!(loaded.mode(), PixelMode::Rgba);
        assert!(loaded.rgba_pixels().all(|p| p == [40, 40, 40, 0]));
    }

    #[test]
    fn test_sixteen_bit_alpha_converted_to_rgba() {
        let image = DynamicImage::ImageRgba16(ImageBuffer::from_pixel(
            1,
            1,
            Rgba([u16::MAX, 0, u16::MAX, u16::MAX]),
        ));
        let loaded = LoadedImage::from_dynamic(image, None);
        assert_eq!(loaded.mode(), PixelMode::Rgba);
        assert_eq!(loaded.rgba_pixels().next(), Some([255, 0, 255, 255]));
    }

    #[test]
    fn test_garbage_bytes_fail_to_decode() {
        let err = load_image_bytes(b"definitely not an image").unwrap_err();
        assert!(matches!(err, LoadError::Decode { .. }));
    }
}
