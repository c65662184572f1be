use clap::{Args, Subcommand};
use std::path::PathBuf;

use crate::cli::enums::*;
use crate::cli::validation::parse_boilerplate;

/// Available blockprint subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Extract annotations and write the manifest artifact
    ///
    /// Walks the configured roots and special-case files, prints every
    /// recovered problem as a warning, and writes the TypeScript or JSON
    /// manifest.
    Generate(GenerateArgs),

    /// Render the Markdown component reference
    ///
    /// Reads a generated manifest artifact, or extracts a fresh one when no
    /// artifact is given, and groups its entries by category.
    Reference(ReferenceArgs),

    /// Step through the page wizard
    ///
    /// Runs interactively on the terminal, or non-interactively from a JSON
    /// answers file, and emits a page skeleton and a generation prompt.
    Wizard(WizardArgs),

    /// Validate configuration and report which sources exist
    Check(CheckArgs),
}

/// Arguments for the generate command
#[derive(Args, Debug, Default)]
pub struct GenerateArgs {
    /// Path to blockprint.config.json
    ///
    /// Defaults to blockprint.config.json in the current directory when it
    /// exists; built-in defaults are used otherwise.
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Directory that roots and special cases are relative to
    #[arg(short, long, value_name = "DIR")]
    pub base: Option<PathBuf>,

    /// Artifact destination
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Artifact format
    ///
    /// - typescript: module exporting a typed `WizardManifest` constant
    /// - json: plain pretty-printed JSON
    #[arg(short = 'f', long, value_enum)]
    pub format: Option<ArtifactFormatArg>,
}

/// Arguments for the reference command
#[derive(Args, Debug, Default)]
pub struct ReferenceArgs {
    /// Generated manifest artifact (.ts or .json) to render
    ///
    /// When omitted, the sources are extracted again using the configuration.
    #[arg(short, long, value_name = "FILE")]
    pub manifest: Option<PathBuf>,

    /// Write the Markdown here instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub out: Option<PathBuf>,

    /// Path to blockprint.config.json (used when --manifest is absent)
    #[arg(short, long, value_name = "FILE", conflicts_with = "manifest")]
    pub config: Option<PathBuf>,
}

/// Arguments for the wizard command
#[derive(Args, Debug, Default)]
pub struct WizardArgs {
    /// Generated manifest artifact (.ts or .json) to offer blocks from
    ///
    /// When omitted, the sources are extracted again using the configuration.
    #[arg(short, long, value_name = "FILE")]
    pub manifest: Option<PathBuf>,

    /// JSON answers file for a non-interactive run
    ///
    /// Example:
    ///   { "canvas": "form-entry", "blocks": ["Button"], "title": "Sign up" }
    #[arg(short, long, value_name = "FILE")]
    pub answers: Option<PathBuf>,

    /// Write page.tsx and prompt.txt into this directory instead of stdout
    #[arg(short = 'd', long, value_name = "DIR")]
    pub out_dir: Option<PathBuf>,

    /// Boilerplate named in the generation prompt
    #[arg(long, value_name = "NAME", value_parser = parse_boilerplate)]
    pub boilerplate: Option<String>,

    /// Path to blockprint.config.json
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

/// Arguments for the check command
#[derive(Args, Debug, Default)]
pub struct CheckArgs {
    /// Path to blockprint.config.json
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Print the JSON schema of blockprint.config.json and exit
    #[arg(long)]
    pub schema: bool,
}
