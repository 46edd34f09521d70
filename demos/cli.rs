//! Command-line interface for chroma_advisor
//!
//! Analyzes one image: JSON result on stdout, human summary on stderr

use chroma_advisor::{analyze_with_config, AdvisorConfig, AnalysisResult, Suggestion};
use std::{env, path::Path, process, str::FromStr};
use tracing_subscriber::EnvFilter;

fn main() {
    let args: Vec<String> = env::args().collect();

    let mut verbose = false;
    let mut config_path = None;
    let mut color_count: Option<usize> = None;
    let mut quality: Option<u32> = None;
    let mut image_path_arg = None;

    // Parse arguments
    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--verbose" | "-v" => verbose = true,
            "--config" => {
                i += 1;
                config_path = Some(required_value(&args, i, "--config").to_string());
            }
            "--colors" => {
                i += 1;
                color_count = Some(parse_number(required_value(&args, i, "--colors"), "--colors"));
            }
            "--quality" => {
                i += 1;
                quality = Some(parse_number(required_value(&args, i, "--quality"), "--quality"));
            }
            "--help" | "-h" => {
                print_help(&args[0]);
                process::exit(0);
            }
            arg if !arg.starts_with("--") => {
                if image_path_arg.is_none() {
                    image_path_arg = Some(arg.to_string());
                } else {
                    eprintln!("Error: Multiple image paths provided");
                    process::exit(1);
                }
            }
            _ => {
                eprintln!("Unknown option: {}", args[i]);
                eprintln!("Use --help for usage information");
                process::exit(1);
            }
        }
        i += 1;
    }

    init_tracing(verbose);

    let image_path_str = match image_path_arg {
        Some(path) => path,
        None => {
            print_help(&args[0]);
            process::exit(1);
        }
    };

    let mut config = match config_path {
        Some(path) => match AdvisorConfig::from_json_file(Path::new(&path)) {
            Ok(cfg) => cfg,
            Err(e) => {
                eprintln!("Error loading config file: {}", e);
                process::exit(1);
            }
        },
        None => AdvisorConfig::default(),
    };
    if let Some(count) = color_count {
        config.extraction.color_count = count;
    }
    if let Some(q) = quality {
        config.extraction.quality = q;
    }

    match analyze_with_config(Path::new(&image_path_str), "file", config) {
        Ok(result) => print_result(&result),
        Err(error) => {
            eprintln!("Analysis failed: {}", error);
            eprintln!("Suggestion: {}", error.user_message());
            process::exit(1);
        }
    }
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("chroma_advisor=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn required_value<'a>(args: &'a [String], i: usize, option: &str) -> &'a str {
    match args.get(i) {
        Some(value) => value.as_str(),
        None => {
            eprintln!("Error: {} requires a value", option);
            process::exit(1);
        }
    }
}

fn parse_number<T: FromStr>(value: &str, option: &str) -> T {
    match value.parse() {
        Ok(n) => n,
        Err(_) => {
            eprintln!("Error: {} expects a number, got '{}'", option, value);
            process::exit(1);
        }
    }
}

fn print_help(program_name: &str) {
    eprintln!("Usage: {} [OPTIONS] <image_path>", program_name);
    eprintln!();
    eprintln!("Extract a dominant palette and suggest accent and font colors.");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --colors N       Number of dominant colors (default: 5)");
    eprintln!("  --quality N      Sample every Nth pixel (default: 10)");
    eprintln!("  --config FILE    Load settings from a JSON configuration file");
    eprintln!("  --verbose, -v    Log pipeline details to stderr");
    eprintln!("  --help, -h       Show this help message");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  RUST_LOG         Log filter when --verbose is not given (default: warn)");
    eprintln!();
    eprintln!("Examples:");
    eprintln!("  {} photo.jpg", program_name);
    eprintln!("  {} --colors 8 --quality 1 poster.png", program_name);
    eprintln!("  {} --config advisor.json photo.jpg", program_name);
}

fn print_result(result: &AnalysisResult) {
    // Print JSON to stdout for programmatic use
    match serde_json::to_string_pretty(result) {
        Ok(json) => println!("{}", json),
        Err(e) => {
            eprintln!("Error serializing result: {}", e);
            process::exit(1);
        }
    }

    // Print summary to stderr for human reading
    eprintln!();
    eprintln!("Color Analysis Summary:");
    let palette: Vec<String> = result.dominant_palette.iter().map(|c| c.to_hex()).collect();
    eprintln!("  Dominant Palette: {}", palette.join(" "));

    for suggestion in &result.palette_improvements {
        match suggestion {
            Suggestion::Complementary { colors, .. } => {
                eprintln!("  Complementary: {} -> {}", colors[0], colors[1]);
            }
            Suggestion::Analogous { colors, .. } => {
                eprintln!("  Analogous: {} {} {}", colors[0], colors[1], colors[2]);
            }
            Suggestion::Contrast { ratio, .. } => {
                eprintln!("  Warning: top colors contrast at {:.2}:1", ratio);
            }
        }
    }

    eprintln!("  Font Colors:");
    for font in &result.font_suggestions {
        eprintln!(
            "    {:<18} {}  {:>5.2}:1  {}",
            font.name, font.color, font.contrast, font.grade
        );
    }
}
