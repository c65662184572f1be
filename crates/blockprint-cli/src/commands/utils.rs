//! Helpers shared by the command implementations.

use std::fs;
use std::path::Path;

use blockprint_catalog::{load_artifact, Aggregator, Extraction, Manifest, PipelineConfig};

use crate::config::{BlockprintConfig, ConfigOverrides};
use crate::error::{CliError, Result, ResultExt};
use crate::ui;

/// Run the aggregator and print every recovered problem.
pub fn extract(config: &PipelineConfig) -> Result<Extraction> {
    let spinner = ui::Spinner::new("Extracting annotations...");
    let extraction = match Aggregator::native(config.clone()).run() {
        Ok(extraction) => extraction,
        Err(err) => {
            spinner.fail("Extraction failed");
            return Err(err.into());
        }
    };
    spinner.finish(&format!(
        "Extracted {} entries from {}",
        extraction.manifest.len(),
        config.base.display()
    ));
    report(&extraction);
    Ok(extraction)
}

/// Print warnings and per-file annotation diagnostics.
pub fn report(extraction: &Extraction) {
    for warning in &extraction.warnings {
        ui::warning(&warning.to_string());
    }
    for diagnostic in &extraction.diagnostics {
        ui::warning(&format!(
            "{}: {}",
            diagnostic.file_path, diagnostic.diagnostic
        ));
    }
}

/// Read a generated artifact, or extract afresh when none is given.
pub fn load_manifest(artifact: Option<&Path>, config_path: Option<&Path>) -> Result<Manifest> {
    match artifact {
        Some(path) => load_manifest_file(path),
        None => {
            let config = BlockprintConfig::load(config_path, &ConfigOverrides::default())?;
            Ok(extract(&config.pipeline)?.manifest)
        }
    }
}

/// Read a TypeScript or JSON manifest artifact.
pub fn load_manifest_file(path: &Path) -> Result<Manifest> {
    if !path.is_file() {
        return Err(CliError::FileNotFound(path.to_path_buf()));
    }
    let manifest = load_artifact(path).with_hint("Regenerate it with `blockprint generate`")?;
    tracing::debug!(entries = manifest.len(), "loaded {}", path.display());
    Ok(manifest)
}

/// Ensure an output directory exists, creating it if necessary.
pub fn ensure_output_dir(out_dir: &Path) -> Result<()> {
    if !out_dir.exists() {
        fs::create_dir_all(out_dir).with_path(out_dir)?;
    } else if !out_dir.is_dir() {
        return Err(CliError::InvalidArgument(format!(
            "Output path exists but is not a directory: {}",
            out_dir.display()
        )));
    }
    Ok(())
}
