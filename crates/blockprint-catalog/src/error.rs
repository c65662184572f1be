use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for catalog operations.
pub type Result<T> = std::result::Result<T, CatalogError>;

/// Error variants for catalog extraction, assembly and loading.
///
/// Per-file problems during extraction never surface here; they are
/// downgraded to [`crate::aggregator::PipelineWarning`]s.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The filesystem entry of a configured root could not be inspected.
    #[error("failed to inspect source root '{path}': {error}")]
    RootInspection {
        /// Path to the root directory.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        error: std::io::Error,
    },

    /// Failed to read a source or artifact file.
    #[error("failed to read '{path}': {error}")]
    Io {
        /// Path of the file.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        error: std::io::Error,
    },

    /// Failed to write the generated artifact.
    #[error("failed to write artifact '{path}': {error}")]
    Write {
        /// Destination path.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        error: std::io::Error,
    },

    /// A manifest artifact could not be decoded.
    #[error("invalid manifest artifact: {message}")]
    InvalidArtifact {
        /// What went wrong.
        message: String,
    },

    /// Serializing the manifest failed.
    #[error("failed to serialize manifest: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl CatalogError {
    pub(crate) fn invalid_artifact(message: impl Into<String>) -> Self {
        Self::InvalidArtifact {
            message: message.into(),
        }
    }
}
