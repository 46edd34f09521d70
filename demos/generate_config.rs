//! Generate default advisor configuration file
//!
//! Creates a JSON config with all default parameters

use chroma_advisor::AdvisorConfig;
use std::{env, path::Path, process};

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        eprintln!("Usage: {} <output_config.json>", args[0]);
        eprintln!();
        eprintln!("Example:");
        eprintln!("  {} config/advisor.json", args[0]);
        process::exit(1);
    }

    let output_path = Path::new(&args[1]);

    // Create parent directory if needed
    if let Some(parent) = output_path.parent() {
        if let Err(e) = std::fs::create_dir_all(parent) {
            eprintln!("Error creating directory: {}", e);
            process::exit(1);
        }
    }

    let config = AdvisorConfig::default();

    match config.to_json_file(output_path) {
        Ok(()) => {
            eprintln!("Configuration saved to {}", output_path.display());
            eprintln!();
            eprintln!("Config summary:");
            eprintln!(
                "  Extraction: {} colors, every {} pixel(s)",
                config.extraction.color_count, config.extraction.quality
            );
            eprintln!(
                "  Harmony: analogous offset {:.3} turn (≈{:.0}°)",
                config.harmony.analogous_offset,
                config.harmony.analogous_offset * 360.0
            );
            eprintln!(
                "  Contrast: warn below {:.1}:1, light background above luminance {:.2}",
                config.contrast.warning_threshold, config.contrast.light_background_threshold
            );
        }
        Err(e) => {
            eprintln!("Error saving config: {}", e);
            process::exit(1);
        }
    }
}
