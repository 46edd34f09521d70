//! Batch CLI for chroma_advisor
//!
//! Analyzes every image in a directory, optionally with a JSON configuration
//! file, and prints one JSON document keyed by file name

use chroma_advisor::image_loader::has_supported_extension;
use chroma_advisor::{analyze_with_config, AdvisorConfig};
use serde_json::{json, Map, Value};
use std::{
    env, fs,
    path::{Path, PathBuf},
    process,
};
use tracing_subscriber::EnvFilter;

fn main() {
    let args: Vec<String> = env::args().collect();

    let mut verbose = false;
    let mut config_path = None;
    let mut input_arg = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--verbose" | "-v" => verbose = true,
            "--config" => {
                i += 1;
                match args.get(i) {
                    Some(path) => config_path = Some(PathBuf::from(path)),
                    None => {
                        eprintln!("Error: --config requires a value");
                        process::exit(1);
                    }
                }
            }
            "--help" | "-h" => {
                print_help(&args[0]);
                process::exit(0);
            }
            arg if !arg.starts_with("--") && input_arg.is_none() => {
                input_arg = Some(PathBuf::from(arg));
            }
            _ => {
                eprintln!("Unknown argument: {}", args[i]);
                eprintln!("Use --help for usage information");
                process::exit(1);
            }
        }
        i += 1;
    }

    init_tracing(verbose);

    let input_path = match input_arg {
        Some(path) => path,
        None => {
            print_help(&args[0]);
            process::exit(1);
        }
    };

    // Load configuration
    let config = match &config_path {
        Some(path) => match AdvisorConfig::from_json_file(path) {
            Ok(cfg) => {
                eprintln!("Loaded configuration from {}", path.display());
                cfg
            }
            Err(e) => {
                eprintln!("Error loading config file: {}", e);
                process::exit(1);
            }
        },
        None => AdvisorConfig::default(),
    };

    // Find all image files in input directory
    let image_files = match find_image_files(&input_path) {
        Ok(files) => files,
        Err(e) => {
            eprintln!("Error finding image files: {}", e);
            process::exit(1);
        }
    };

    if image_files.is_empty() {
        eprintln!("No image files found in {}", input_path.display());
        process::exit(1);
    }

    eprintln!("Found {} image files to process", image_files.len());
    eprintln!();

    // Process each image
    let mut results = Map::new();
    let mut success_count = 0;
    let mut error_count = 0;

    for (i, image_path) in image_files.iter().enumerate() {
        let filename = image_path
            .file_name()
            .and_then(|s| s.to_str())
            .unwrap_or("unknown")
            .to_string();

        eprint!("[{}/{}] Processing {}... ", i + 1, image_files.len(), filename);

        match analyze_with_config(image_path, "file", config.clone()) {
            Ok(result) => {
                eprintln!("✓");
                success_count += 1;

                if verbose {
                    let palette: Vec<String> =
                        result.dominant_palette.iter().map(|c| c.to_hex()).collect();
                    eprintln!("  → Palette: {}", palette.join(" "));
                }

                match serde_json::to_value(&result) {
                    Ok(value) => {
                        results.insert(filename, value);
                    }
                    Err(e) => eprintln!("Warning serializing result: {}", e),
                }
            }
            Err(error) => {
                eprintln!("✗ {}", error);
                error_count += 1;
                results.insert(
                    filename,
                    json!({ "error": error.to_string(), "kind": format!("{:?}", error.kind()) }),
                );
            }
        }
    }

    match serde_json::to_string_pretty(&Value::Object(results)) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Error serializing results: {}", e),
    }

    eprintln!();
    eprintln!("Batch processing complete:");
    eprintln!("  Success: {}", success_count);
    eprintln!("  Errors: {}", error_count);

    if error_count > 0 {
        process::exit(1);
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

fn print_help(program_name: &str) {
    eprintln!("Usage: {} [OPTIONS] <directory>", program_name);
    eprintln!();
    eprintln!("Analyze every image in a directory and print results as JSON.");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --config FILE    Load settings from a JSON configuration file");
    eprintln!("  --verbose, -v    Print each palette and log pipeline details");
    eprintln!("  --help, -h       Show this help message");
    eprintln!();
    eprintln!("Examples:");
    eprintln!("  {} photos/", program_name);
    eprintln!("  {} --config advisor.json photos/ > palettes.json", program_name);
}

fn find_image_files(dir: &Path) -> Result<Vec<PathBuf>, std::io::Error> {
    if dir.is_file() {
        // Single file provided
        return Ok(vec![dir.to_path_buf()]);
    }

    let mut files = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_file() && has_supported_extension(&path) {
            files.push(path);
        }
    }

    files.sort();
    Ok(files)
}
