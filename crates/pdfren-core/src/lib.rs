//! Core library for renaming PDF documents by their identifiers.
//!
//! This crate provides:
//! - PDF text recovery (page by page, with a whole-document fallback)
//! - Rule-based extraction of customer, invoice, sales order and ship-to fields
//! - Filename synthesis under four naming policies, with sanitization
//! - Batch renaming with collision handling and ZIP packaging

pub mod archive;
pub mod batch;
pub mod error;
pub mod extract;
pub mod models;
pub mod naming;
pub mod pdf;

pub use archive::ZipArchiver;
pub use batch::{deduplicate_names, Renamer};
pub use error::{ArchiveError, PdfError, RenamerError, Result};
pub use extract::{ExtractionResult, FieldSetExtractor, RuleBasedExtractor};
pub use models::{
    Document, Field, FieldSet, NameSource, NamingPolicy, RenamedEntry, RenamerConfig,
};
pub use naming::{sanitize_filename, NameSynthesizer};
pub use pdf::{ExtractedText, PdfExtractor, PdfProcessor};
