//! Error types for the pdfren-core library.

use thiserror::Error;

/// Main error type for the pdfren library.
#[derive(Error, Debug)]
pub enum RenamerError {
    /// PDF processing error.
    #[error("PDF error: {0}")]
    Pdf(#[from] PdfError),

    /// Archive creation error.
    #[error("archive error: {0}")]
    Archive(#[from] ArchiveError),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Errors related to PDF processing.
#[derive(Error, Debug)]
pub enum PdfError {
    /// Failed to open/parse the PDF file.
    #[error("failed to parse PDF: {0}")]
    Parse(String),

    /// Failed to extract text from PDF.
    #[error("failed to extract text: {0}")]
    TextExtraction(String),

    /// The PDF is encrypted and cannot be processed.
    #[error("PDF is encrypted")]
    Encrypted,

    /// The PDF is empty or has no pages.
    #[error("PDF has no pages")]
    NoPages,

    /// Invalid page number requested.
    #[error("invalid page number: {0}")]
    InvalidPage(u32),
}

/// Errors related to writing the output archive.
#[derive(Error, Debug)]
pub enum ArchiveError {
    /// The underlying ZIP writer failed.
    #[error("zip error: {0}")]
    Zip(#[from] zip::result::ZipError),

    /// Two entries resolved to the same name.
    #[error("duplicate archive entry: {0}")]
    DuplicateEntry(String),

    /// I/O error while writing entry content.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for the pdfren library.
pub type Result<T> = std::result::Result<T, RenamerError>;
