//! Reference command implementation.

use blockprint_catalog::{render_markdown, write_artifact, ReferenceIndex};

use crate::cli::ReferenceArgs;
use crate::commands::utils;
use crate::error::Result;
use crate::ui;

/// Execute the reference command.
///
/// Renders the Markdown reference to `--out`, or to stdout.
pub fn execute(args: ReferenceArgs) -> Result<()> {
    let manifest = utils::load_manifest(args.manifest.as_deref(), args.config.as_deref())?;
    let index = ReferenceIndex::build(&manifest);
    if index.is_empty() {
        ui::warning("The manifest has no entries; the reference will be empty");
    }

    let markdown = render_markdown(&index);
    match &args.out {
        Some(path) => {
            write_artifact(path, &markdown)?;
            ui::success(&format!(
                "Wrote reference for {} entries to {}",
                index.len(),
                path.display()
            ));
        }
        None => print!("{markdown}"),
    }
    Ok(())
}
