//! Blockprint CLI - component manifests from annotation comments.
//!
//! This crate provides the command-line interface over `blockprint-catalog`
//! and `blockprint-wizard`.
//!
//! [`cli`] holds the clap definitions and [`commands`] one module per
//! subcommand. [`config`] layers defaults, `blockprint.config.json`,
//! `BLOCKPRINT_*` variables and flags. Terminal output lives in [`ui`] and
//! [`logger`]; [`error`] turns failures into hinted messages.
//!
//! ```rust,no_run
//! use blockprint_cli::commands::generate_execute;
//! use blockprint_cli::cli::GenerateArgs;
//!
//! blockprint_cli::logger::init_logger(false, false, false);
//! generate_execute(GenerateArgs::default())?;
//! # Ok::<(), blockprint_cli::CliError>(())
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod logger;
pub mod ui;

pub use error::{CliError, ConfigError, Result, ResultExt};
