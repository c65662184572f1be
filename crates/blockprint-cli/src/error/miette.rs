//! Miette diagnostic conversion for CLI errors.

use crate::error::CliError;
use blockprint_catalog::CatalogError;
use miette::Report;

/// Convert CliError to miette Report
pub fn cli_error_to_miette(err: CliError) -> Report {
    match err {
        CliError::Catalog(e) => catalog_error_to_miette(e),
        CliError::Config(e) => miette::miette!("{}", e),
        CliError::Wizard(e) => miette::miette!(
            help = "Run `blockprint wizard` without --answers to step through interactively",
            "{}",
            e
        ),
        _ => miette::miette!("{}", err),
    }
}

fn catalog_error_to_miette(err: CatalogError) -> Report {
    match err {
        CatalogError::RootInspection { path, error } => miette::miette!(
            help = "Check permissions on the source root, or remove it from `roots`",
            "Cannot inspect source root {}: {}",
            path.display(),
            error
        ),
        CatalogError::InvalidArtifact { message } => miette::miette!(
            help = "Regenerate the manifest with `blockprint generate`",
            "Invalid manifest artifact: {}",
            message
        ),
        other => miette::miette!("{}", other),
    }
}
