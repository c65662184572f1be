#![deny(clippy::all)]

//! Page wizard for blockprint.
//!
//! A [`WizardSession`] walks five steps over a [`blockprint_catalog::Manifest`]:
//! choose a canvas, pick blocks, customize their props, choose layout and
//! theme, then generate a page skeleton and a prompt for a code generator.

pub mod answers;
pub mod canvas;
pub mod error;
pub mod generate;
pub mod session;

pub use answers::WizardAnswers;
pub use canvas::{candidates, canvas_options, CanvasType};
pub use error::{Result, WizardError};
pub use generate::{generate, GeneratedOutput, OutputOptions};
pub use session::{
    resolve_block, BlockFields, Draft, PropField, PropValues, Step, WizardSession,
    WizardSessionConfig, WizardState, BLANK_LAYOUT, THEMES,
};
