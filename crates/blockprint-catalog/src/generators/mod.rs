//! Renderers turning a manifest into text.

pub mod json;
pub mod markdown;
pub mod typescript;
