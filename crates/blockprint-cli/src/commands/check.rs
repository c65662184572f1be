//! Check command implementation.
//!
//! Validates configuration and reports which configured sources exist,
//! without extracting anything.

use std::path::Path;

use blockprint_catalog::Strategy;

use crate::cli::CheckArgs;
use crate::config::{BlockprintConfig, ConfigOverrides};
use crate::error::Result;
use crate::ui;

/// Execute the check command.
///
/// # Validation Steps
///
/// 1. Load and validate blockprint.config.json (or the defaults)
/// 2. Check the base directory, each root, and each special-case file
///
/// Missing sources are reported as warnings, matching `generate`, which
/// skips them.
pub fn execute(args: CheckArgs) -> Result<()> {
    if args.schema {
        let schema = BlockprintConfig::json_schema()?;
        println!("{}", serde_json::to_string_pretty(&schema)?);
        return Ok(());
    }

    ui::info("Checking configuration...");
    match BlockprintConfig::locate(args.config.as_deref())? {
        Some(path) => ui::info(&format!("Using {}", path.display())),
        None => ui::warning("No blockprint.config.json found, using defaults"),
    }
    let config = BlockprintConfig::load(args.config.as_deref(), &ConfigOverrides::default())?;
    ui::success("Configuration is valid!");

    let pipeline = &config.pipeline;
    ui::info("Checking sources...");
    let mut missing = 0usize;

    if !pipeline.base.is_dir() {
        ui::error(&format!("Base directory not found: {}", pipeline.base.display()));
        missing += 1;
    }

    for root in &pipeline.roots {
        let path = pipeline.base.join(&root.path);
        missing += usize::from(!report(&path, path.is_dir(), root.collection.as_str()));
    }

    for case in &pipeline.special_cases {
        let path = pipeline.base.join(&case.path);
        let label = match &case.strategy {
            Strategy::Annotated => format!("{} (annotated)", case.collection),
            Strategy::NthBlock { index } => format!("{} (block {})", case.collection, index),
            Strategy::Static { name, .. } => format!("{} (static \"{}\")", case.collection, name),
        };
        missing += usize::from(!report(&path, path.is_file(), &label));
    }

    if missing == 0 {
        ui::success("All checks passed!");
    } else {
        ui::warning(&format!(
            "{} configured source(s) missing; `generate` will skip them",
            missing
        ));
    }
    Ok(())
}

fn report(path: &Path, exists: bool, label: &str) -> bool {
    if exists {
        ui::success(&format!("  {} -> {}", path.display(), label));
    } else {
        ui::warning(&format!("  {} -> {} (missing)", path.display(), label));
    }
    exists
}
