//! Generate command implementation.
//!
//! Extracts every annotation block into a manifest and writes the artifact.

use std::time::Instant;

use blockprint_catalog::{render_artifact, write_artifact};

use crate::cli::GenerateArgs;
use crate::commands::utils;
use crate::config::{BlockprintConfig, ConfigOverrides};
use crate::error::Result;
use crate::ui;

/// Execute the generate command.
///
/// 1. Load and validate configuration (CLI > Env > File > Defaults)
/// 2. Walk roots and special cases, printing warnings
/// 3. Render and write the artifact
/// 4. Display a per-collection summary
///
/// Missing roots, missing special-case files and malformed annotations are
/// reported and skipped; only an uninspectable root or a failed write stop
/// the command.
pub fn execute(args: GenerateArgs) -> Result<()> {
    let start_time = Instant::now();

    ui::info("Loading configuration...");
    let config = BlockprintConfig::load(args.config.as_deref(), &ConfigOverrides::from(&args))?;
    let pipeline = &config.pipeline;

    let extraction = utils::extract(pipeline)?;

    let contents = render_artifact(&extraction.manifest, pipeline)?;
    write_artifact(&pipeline.output, &contents)?;

    ui::print_manifest_summary(&extraction.manifest, start_time.elapsed());
    ui::success(&format!("Wrote {}", pipeline.output.display()));
    Ok(())
}
