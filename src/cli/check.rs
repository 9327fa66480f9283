//! Check command implementation

use std::path::Path;
use std::process::ExitCode;

use crate::catalog::EmojiCatalog;
use crate::loader::{scan, LoadMode, LoadWarning};

use super::{EXIT_ERROR, EXIT_SUCCESS};

/// Execute the check command
///
/// Loads every candidate image in `dir` and reports each one as added,
/// duplicate, or unusable. Fails if any image could not be decoded.
pub fn run_check(dir: &Path, strict: bool) -> ExitCode {
    if !dir.is_dir() {
        eprintln!("Warning: '{}' is not a directory, no emoji loaded", dir.display());
    }

    let mut catalog = EmojiCatalog::new();
    let report = scan(dir, &mut catalog, LoadMode::from_strict(strict));

    for name in &report.loaded {
        println!("Added emoji {}", name);
    }

    let mut failed = false;
    for warning in &report.warnings {
        match warning {
            LoadWarning::DecodeFailed { name, .. } => {
                failed = true;
                println!(
                    "Unable to use image for emoji {}. Please use a different image file for this emoji.",
                    name
                );
                eprintln!("  {}", warning);
            }
            other => println!("Skipped: {}", other),
        }
    }

    println!("{} emoji loaded.", catalog.len());

    if failed {
        ExitCode::from(EXIT_ERROR)
    } else {
        ExitCode::from(EXIT_SUCCESS)
    }
}
