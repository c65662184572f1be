#![deny(clippy::all)]

//! Building-block catalog extraction for blockprint.
//!
//! This crate provides:
//! - A tokenizer and parser for `@wizard` annotation blocks in TypeScript sources.
//! - An aggregator that walks source roots and configured special-case files
//!   into a [`Manifest`] of five collections.
//! - Generators for the TypeScript and JSON manifest artifacts, and a loader
//!   that reads them back.
//! - A Markdown reference renderer grouped by category.

pub mod aggregator;
pub mod annotation;
pub mod artifact;
pub mod config;
pub mod error;
pub mod extractor;
pub mod fs;
pub mod generators;
pub mod model;
pub mod reference;

pub use aggregator::{Aggregator, Extraction, FileDiagnostic, PipelineWarning};
pub use annotation::{Diagnostic, DiagnosticKind};
pub use artifact::{load_artifact, render_artifact, write_artifact};
pub use config::{ArtifactFormat, PipelineConfig, RootConfig, SpecialCase, Strategy};
pub use error::{CatalogError, Result};
pub use extractor::{ExtractedEntry, Extractor, DEFAULT_MARKER};
pub use fs::{MemoryFs, NativeFs, SourceFs};
pub use generators::markdown::render_markdown;
pub use model::{CatalogEntry, Collection, Manifest, PropSpec, ReturnSpec, DEFAULT_CATEGORY};
pub use reference::ReferenceIndex;
