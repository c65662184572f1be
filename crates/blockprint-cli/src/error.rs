//! Error handling for the blockprint CLI.
//!
//! Library errors from the catalog and wizard crates convert into [`CliError`]
//! through `#[from]`. Configuration problems have their own [`ConfigError`]
//! with a hint for the user. At the binary boundary everything becomes a
//! `miette` report (see [`cli_error_to_miette`]).
//!
//! # Example
//!
//! ```rust,no_run
//! use blockprint_cli::error::{Result, ResultExt};
//! use std::path::Path;
//!
//! fn read_answers(path: &Path) -> Result<String> {
//!     std::fs::read_to_string(path)
//!         .with_path(path)
//!         .with_hint("Pass --answers with a JSON file")
//! }
//! ```

mod miette;

pub use self::miette::cli_error_to_miette;

use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

use blockprint_catalog::CatalogError;
use blockprint_wizard::WizardError;
use thiserror::Error;

/// Every failure a command can report.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Extraction, artifact or reference failures.
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    /// Wizard transitions, edits and answer files.
    #[error("Wizard error: {0}")]
    Wizard(#[from] WizardError),

    /// A flag combination or environment the command cannot work with.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// A manifest, answers file or config path that does not exist.
    #[error("File not found: {}", .0.display())]
    FileNotFound(PathBuf),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// An error already rendered with its hint.
    #[error("{0}")]
    Custom(String),
}

/// Problems with `blockprint.config.json` and its overrides.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// `--config` named a file that is not there.
    #[error("Config file not found: {}\n\nHint: Create a blockprint.config.json file or drop --config to use defaults", .0.display())]
    NotFound(PathBuf),

    /// Layering the sources failed (bad JSON, wrong types, bad env values).
    #[error("Failed to load configuration: {0}\n\nHint: Check blockprint.config.json and BLOCKPRINT_* variables")]
    Load(#[from] Box<figment::Error>),

    /// A field parsed but is not usable.
    #[error("Invalid value for '{field}': {value}\n\nHint: {hint}")]
    InvalidValue {
        field: String,
        value: String,
        hint: String,
    },

    /// Two entries that must differ are the same.
    #[error("Duplicate {field}: {value}\n\nHint: Each {field} may only appear once")]
    Duplicate { field: String, value: String },
}

impl From<figment::Error> for ConfigError {
    fn from(error: figment::Error) -> Self {
        ConfigError::Load(Box::new(error))
    }
}

pub type Result<T, E = CliError> = std::result::Result<T, E>;

/// Attach a path or a hint to any error convertible into [`CliError`].
pub trait ResultExt<T> {
    /// Report a not-found I/O error as [`CliError::FileNotFound`] for `path`.
    fn with_path(self, path: impl AsRef<Path>) -> Result<T>;

    /// Append `Hint: ...` to the rendered error.
    fn with_hint(self, hint: impl fmt::Display) -> Result<T>;
}

impl<T, E: Into<CliError>> ResultExt<T> for std::result::Result<T, E> {
    fn with_path(self, path: impl AsRef<Path>) -> Result<T> {
        self.map_err(|e| match e.into() {
            CliError::Io(io) if io.kind() == io::ErrorKind::NotFound => {
                CliError::FileNotFound(path.as_ref().to_path_buf())
            }
            other => other,
        })
    }

    fn with_hint(self, hint: impl fmt::Display) -> Result<T> {
        self.map_err(|e| {
            let err: CliError = e.into();
            CliError::Custom(format!("{err}\n\nHint: {hint}"))
        })
    }
}
