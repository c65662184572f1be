//! Command implementations for the blockprint CLI.
//!
//! - [`generate`] - Extract annotations and write the manifest artifact
//! - [`reference`] - Render the Markdown reference
//! - [`wizard`] - Page wizard, interactive or scripted
//! - [`check`] - Configuration and source validation
//!
//! Each command provides an `execute` function that takes the parsed command
//! arguments and returns a Result.

pub mod check;
pub mod generate;
pub mod reference;
pub(crate) mod utils;
pub mod wizard;

// Re-export execute functions for convenience
pub use check::execute as check_execute;
pub use generate::execute as generate_execute;
pub use reference::execute as reference_execute;
pub use wizard::execute as wizard_execute;
