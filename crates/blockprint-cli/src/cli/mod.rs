//! Command-line interface definition for blockprint.
//!
//! # Command Structure
//!
//! - `blockprint generate` - Extract annotations and write the manifest artifact
//! - `blockprint reference` - Render the Markdown reference for a manifest
//! - `blockprint wizard` - Step through the page wizard
//! - `blockprint check` - Validate configuration and report source locations

mod commands;
pub mod enums;
mod tests;
mod validation;

use clap::Parser;

pub use commands::{CheckArgs, Command, GenerateArgs, ReferenceArgs, WizardArgs};
pub use enums::*;
pub use validation::parse_boilerplate;

/// Blockprint - component manifests from annotation comments
#[derive(Parser, Debug)]
#[command(
    name = "blockprint",
    version,
    about = "Component manifests, reference docs and page scaffolds from annotation comments",
    long_about = "Blockprint reads `@wizard` annotation blocks from TypeScript sources,\n\
                  assembles them into a typed manifest, renders a Markdown reference,\n\
                  and drives a step-by-step wizard that emits a page skeleton and prompt."
)]
pub struct Cli {
    /// Enable verbose logging (debug level)
    ///
    /// Shows every file visited, each special case tried, and per-file
    /// annotation diagnostics.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}
