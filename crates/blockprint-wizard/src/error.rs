use thiserror::Error;

use crate::session::Step;

/// Result type alias for wizard operations.
pub type Result<T> = std::result::Result<T, WizardError>;

/// Error variants for wizard transitions and edits.
#[derive(Debug, Error)]
pub enum WizardError {
    /// `Back` on the first step or `Next` on the last.
    #[error("cannot go {direction} from {step}")]
    NoSuchTransition { step: Step, direction: &'static str },

    /// `Next` from canvas selection before a canvas was picked.
    #[error("choose a canvas before continuing")]
    CanvasRequired,

    /// An edit that belongs to a different step.
    #[error("{action} is only available in {expected}, the wizard is in {actual}")]
    WrongStep {
        action: &'static str,
        expected: Step,
        actual: Step,
    },

    #[error("unknown canvas '{0}'; expected one of dashboard, data-display, form-entry, component-showcase, custom-blank")]
    UnknownCanvas(String),

    /// The block is not offered for the chosen canvas.
    #[error("'{name}' is not a candidate for the {canvas} canvas")]
    NotACandidate { name: String, canvas: String },

    #[error("'{name}' is not a selected block")]
    NotSelected { name: String },

    #[error("'{component}' has no property named '{prop}'")]
    UnknownProp { component: String, prop: String },

    #[error("invalid wizard answers: {0}")]
    InvalidAnswers(#[source] serde_json::Error),

    #[error("failed to serialize component props: {0}")]
    Serialize(#[from] serde_json::Error),
}
