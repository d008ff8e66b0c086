//! Input documents and renamed output entries.

use serde::{Deserialize, Serialize};

use super::fields::FieldSet;

/// An uploaded document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    /// Filename as supplied by the caller, used when no field is found.
    pub filename: String,
    /// Raw document bytes.
    pub content: Vec<u8>,
}

impl Document {
    pub fn new(filename: impl Into<String>, content: impl Into<Vec<u8>>) -> Self {
        Self {
            filename: filename.into(),
            content: content.into(),
        }
    }
}

/// Where the final filename came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NameSource {
    /// Built from extracted fields.
    Fields,
    /// Original filename reused.
    Fallback,
}

impl NameSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            NameSource::Fields => "fields",
            NameSource::Fallback => "fallback",
        }
    }
}

/// A document with its final filename, ready for archiving.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenamedEntry {
    /// Final, sanitized filename.
    pub filename: String,
    /// Filename the document arrived with.
    pub original_filename: String,
    /// Unmodified document bytes.
    pub content: Vec<u8>,
    /// Fields the name was built from.
    pub fields: FieldSet,
    /// Whether fields or the fallback produced the name.
    pub source: NameSource,
}
