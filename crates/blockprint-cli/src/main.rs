//! Blockprint CLI entry point.
//!
//! Handles command-line argument parsing, logging initialization, and command
//! dispatch.

use blockprint_cli::{cli, commands, error, logger, ui};
use clap::Parser;
use miette::Result;

fn main() -> Result<()> {
    let args = cli::Cli::parse();

    logger::init_logger(args.verbose, args.quiet, args.no_color);
    ui::init_colors(args.no_color);

    let result = match args.command {
        cli::Command::Generate(generate_args) => commands::generate_execute(generate_args),
        cli::Command::Reference(reference_args) => commands::reference_execute(reference_args),
        cli::Command::Wizard(wizard_args) => commands::wizard_execute(wizard_args),
        cli::Command::Check(check_args) => commands::check_execute(check_args),
    };

    // Convert CLI errors to miette diagnostics for error reporting
    result.map_err(error::cli_error_to_miette)
}
