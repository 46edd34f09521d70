//! Integration tests for the complete analyze pipeline
//!
//! These tests validate the end-to-end workflow on generated images:
//! - Image loading and error classification
//! - Palette extraction
//! - Palette and font suggestions
//! - JSON result shape

use chroma_advisor::{
    analyze, analyze_with_config, AdvisorConfig, AnalysisError, AnalysisRequest, Color,
    ErrorKind, LoadError, LoadedImage, PaletteExtractor, SourceType, Suggestion,
};
use image::{Rgb, RgbImage, Rgba, RgbaImage};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Stripe colors in descending width, well apart in every channel
const STRIPES: [([u8; 3], u32); 5] = [
    ([24, 40, 160], 50),
    ([200, 32, 32], 40),
    ([32, 168, 64], 30),
    ([232, 200, 24], 20),
    ([16, 16, 16], 10),
];

fn write_stripes(dir: &TempDir, name: &str) -> PathBuf {
    let width: u32 = STRIPES.iter().map(|(_, w)| w).sum();
    let mut image = RgbImage::new(width, 20);
    let mut x0 = 0;
    for (rgb, w) in STRIPES {
        for x in x0..x0 + w {
            for y in 0..20 {
                image.put_pixel(x, y, Rgb(rgb));
            }
        }
        x0 += w;
    }
    let path = dir.path().join(name);
    image.save(&path).unwrap();
    path
}

fn is_lower_hex(value: &str) -> bool {
    value.len() == 7
        && value.starts_with('#')
        && value[1..]
            .chars()
            .all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c))
}

// ============================================================================
// Error Handling Tests
// ============================================================================

#[test]
fn test_analyze_file_not_found() {
    let err = analyze(Path::new("nonexistent_file.jpg"), "file").unwrap_err();

    assert_eq!(err.kind(), ErrorKind::NotFound);
    match err {
        AnalysisError::ImageLoadError {
            source: LoadError::NotFound { path },
        } => assert_eq!(path, PathBuf::from("nonexistent_file.jpg")),
        other => panic!("Expected NotFound load error, got: {other:?}"),
    }
}

#[test]
fn test_analyze_unsupported_source_type() {
    let dir = TempDir::new().unwrap();
    let path = write_stripes(&dir, "stripes.png");

    let err = analyze(&path, "url").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::UnsupportedSource);
    assert_eq!(err.to_string(), "Unsupported source_type: url");
}

#[test]
fn test_analyze_undecodable_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("broken.png");
    std::fs::write(&path, b"this is not a png").unwrap();

    let err = analyze(&path, "file").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::DecodeError);
    assert!(err.is_load_failure());
    assert!(std::error::Error::source(&err).is_some());
}

#[test]
fn test_analyze_blank_image_is_empty_palette() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("blank.png");
    let mut image = RgbaImage::from_pixel(16, 16, Rgba([255, 255, 255, 255]));
    for x in 0..8 {
        image.put_pixel(x, 0, Rgba([90, 10, 10, 0]));
    }
    image.save(&path).unwrap();

    let err = analyze(&path, "file").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::EmptyPalette);
}

// ============================================================================
// End-to-End Analysis
// ============================================================================

#[test]
fn test_analyze_five_color_image() {
    let dir = TempDir::new().unwrap();
    let path = write_stripes(&dir, "stripes.png");

    let result = analyze(&path, "file").unwrap();

    assert_eq!(result.dominant_palette.len(), 5);
    for color in &result.dominant_palette {
        assert!(is_lower_hex(&color.to_hex()), "bad hex {color}");
    }

    // Widest stripe dominates
    let [r, g, b] = result.dominant_palette[0].rgb();
    assert!(b > r && b > g, "expected blue first, got {}", result.dominant_palette[0]);

    assert!(matches!(
        result.palette_improvements[0],
        Suggestion::Complementary { .. }
    ));
    assert!(matches!(
        result.palette_improvements[1],
        Suggestion::Analogous { .. }
    ));
    assert_eq!(result.palette_improvements[0].colors()[0], result.dominant_palette[0]);

    // Dark blue background takes light text
    assert_eq!(result.font_suggestions.len(), 3);
    assert_eq!(result.font_suggestions[0].name, "White");
    let contrasts: Vec<f64> = result.font_suggestions.iter().map(|s| s.contrast).collect();
    assert!(contrasts.windows(2).all(|w| w[0] >= w[1]));
}

#[test]
fn test_analyze_json_shape() {
    let dir = TempDir::new().unwrap();
    let path = write_stripes(&dir, "stripes.png");

    let result = analyze(&path, "file").unwrap();
    let json = serde_json::to_value(&result).unwrap();

    let palette = json["dominant_palette"].as_array().unwrap();
    assert_eq!(palette.len(), 5);
    assert!(palette.iter().all(|c| is_lower_hex(c.as_str().unwrap())));

    let improvements = json["palette_improvements"].as_array().unwrap();
    assert_eq!(improvements[0]["type"], "Complementary");
    assert_eq!(
        improvements[0]["description"],
        "Consider using this complementary color for accent elements"
    );
    assert_eq!(improvements[1]["type"], "Analogous");
    assert_eq!(improvements[1]["colors"].as_array().unwrap().len(), 3);

    let font = &json["font_suggestions"][0];
    assert_eq!(font["color"], "#ffffff");
    assert_eq!(font["name"], "White");
    assert!(font["contrast"].as_f64().unwrap() > 1.0);
}

#[test]
fn test_analyze_with_config() {
    let dir = TempDir::new().unwrap();
    let path = write_stripes(&dir, "stripes.png");

    let config = AdvisorConfig::from_json_str(
        r#"{"extraction": {"color_count": 3, "quality": 1}, "contrast": {"warning_threshold": 21.0}}"#,
    )
    .unwrap();
    let result = analyze_with_config(&path, "file", config).unwrap();

    assert_eq!(result.dominant_palette.len(), 3);
    // Nothing reaches 21:1 except black on white
    assert!(result.palette_improvements[2].is_contrast_warning());
}

#[test]
fn test_config_file_drives_analysis() {
    let dir = TempDir::new().unwrap();
    let path = write_stripes(&dir, "stripes.png");
    let config_path = dir.path().join("config.json");

    let mut config = AdvisorConfig::default();
    config.extraction.color_count = 2;
    config.to_json_file(&config_path).unwrap();

    let loaded = AdvisorConfig::from_json_file(&config_path).unwrap();
    let result = analyze_with_config(&path, "file", loaded).unwrap();
    assert_eq!(result.dominant_palette.len(), 2);
}

#[test]
fn test_grayscale_input() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("gray.png");
    image::GrayImage::from_pixel(10, 10, image::Luma([200]))
        .save(&path)
        .unwrap();

    let result = analyze(&path, "file").unwrap();
    assert_eq!(result.dominant_palette.len(), 1);
    // Light gray background takes dark text
    assert_eq!(result.font_suggestions[0].name, "Black");
}

// ============================================================================
// Extractor Seam
// ============================================================================

struct Reversed;

impl PaletteExtractor for Reversed {
    fn extract(
        &self,
        image: &LoadedImage,
        color_count: usize,
        quality: u32,
    ) -> Result<Vec<Color>, LoadError> {
        let mut palette =
            chroma_advisor::MedianCutExtractor::new().extract(image, color_count, quality)?;
        palette.reverse();
        Ok(palette)
    }
}

#[test]
fn test_custom_extractor_through_request() {
    let dir = TempDir::new().unwrap();
    let path = write_stripes(&dir, "stripes.png");

    let request = AnalysisRequest::open(&path, SourceType::File).unwrap();
    let default = request.dominant_palette().unwrap();
    let reversed = request.with_extractor(Reversed).run().unwrap();

    let mut expected = default.clone();
    expected.reverse();
    assert_eq!(reversed.dominant_palette, expected);
    // Near-black stripe now leads
    assert_eq!(reversed.font_suggestions[0].name, "White");
}

#[test]
fn test_analysis_logs_with_subscriber() {
    let dir = TempDir::new().unwrap();
    let path = write_stripes(&dir, "stripes.png");

    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_test_writer()
        .finish();
    tracing::subscriber::with_default(subscriber, || {
        let result = analyze(&path, "file").unwrap();
        assert_eq!(result.dominant_palette.len(), 5);
    });
}
