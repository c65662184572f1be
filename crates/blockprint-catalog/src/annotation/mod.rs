//! The annotation micro-language.
//!
//! Text flows through three stages: [`locate`] finds the marker block and the
//! identifier it documents, [`tokenizer`] classifies each block line, and
//! [`parser`] turns the tokens into an [`AnnotationIr`] plus diagnostics.

pub mod locate;
pub mod parser;
pub mod tokenizer;

pub use locate::{declared_identifier, locate_block, locate_blocks, BlockSpan, LocatedBlock};
pub use parser::{parse, AnnotationIr, Diagnostic, DiagnosticKind};
pub use tokenizer::{tokenize, Token, TokenKind};
