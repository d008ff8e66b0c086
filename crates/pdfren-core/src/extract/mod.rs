//! Identifier extraction module.

mod parser;
pub mod rules;

pub use parser::{ExtractionResult, RuleBasedExtractor};

use crate::models::fields::Field;
use crate::pdf::ExtractedText;

/// Trait for document field extractors.
///
/// Extraction is best-effort: unreadable documents produce an empty field
/// set, never an error.
pub trait FieldSetExtractor {
    /// Extract the requested fields from raw document bytes.
    fn extract(&self, data: &[u8], fields: &[Field]) -> ExtractionResult;

    /// Extract the requested fields from already recovered text.
    fn extract_from_text(&self, text: &ExtractedText, fields: &[Field]) -> ExtractionResult;
}
