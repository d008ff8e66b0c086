//! PDF processing module.

mod extractor;

pub use extractor::PdfExtractor;

use crate::error::PdfError;

/// Result type for PDF operations.
pub type Result<T> = std::result::Result<T, PdfError>;

/// Trait for PDF processing implementations.
pub trait PdfProcessor {
    /// Load a PDF from bytes.
    fn load(&mut self, data: &[u8]) -> Result<()>;

    /// Get the number of pages in the PDF.
    fn page_count(&self) -> u32;

    /// Extract text from the entire PDF.
    fn extract_text(&self) -> Result<String>;

    /// Extract text from a specific page (1-indexed).
    fn extract_page_text(&self, page: u32) -> Result<String>;
}

/// Text from a single PDF page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PdfPage {
    /// Page number (1-indexed).
    pub number: u32,
    /// Extracted text from this page.
    pub text: String,
}

/// Text recovered from a document, in page order.
///
/// `text` is the per-page text joined with newlines. `pages` is empty when the
/// text came from the whole-document fallback rather than page-by-page reads.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtractedText {
    /// Full concatenated text.
    pub text: String,
    /// Pages that contributed text.
    pub pages: Vec<PdfPage>,
}

impl ExtractedText {
    /// Build from pages, skipping pages without text.
    pub fn from_pages(pages: Vec<PdfPage>) -> Self {
        let pages: Vec<PdfPage> = pages
            .into_iter()
            .filter(|p| !p.text.trim().is_empty())
            .collect();

        let mut text = String::new();
        for page in &pages {
            if !text.is_empty() && !text.ends_with('\n') {
                text.push('\n');
            }
            text.push_str(&page.text);
        }

        Self { text, pages }
    }

    /// Wrap text that was not recovered page by page.
    pub fn from_text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            pages: Vec::new(),
        }
    }

    /// Lines of the full text, in document order.
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.text.lines()
    }

    /// Whether no usable text was recovered.
    pub fn is_empty(&self) -> bool {
        self.text.trim().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(number: u32, text: &str) -> PdfPage {
        PdfPage {
            number,
            text: text.to_string(),
        }
    }

    #[test]
    fn test_from_pages_joins_in_order() {
        let text = ExtractedText::from_pages(vec![
            page(1, "Customer Number: A1"),
            page(2, "Invoice Number: 42\n"),
            page(3, "Ship To: Acme"),
        ]);

        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(
            lines,
            vec!["Customer Number: A1", "Invoice Number: 42", "Ship To: Acme"]
        );
        assert_eq!(text.pages.len(), 3);
    }

    #[test]
    fn test_from_pages_skips_blank_pages() {
        let text = ExtractedText::from_pages(vec![page(1, "  \n"), page(2, "SV123456")]);
        assert_eq!(text.text, "SV123456");
        assert_eq!(text.pages.len(), 1);
        assert_eq!(text.pages[0].number, 2);
    }

    #[test]
    fn test_empty_text() {
        assert!(ExtractedText::default().is_empty());
        assert!(ExtractedText::from_text(" \n\t").is_empty());
        assert!(!ExtractedText::from_text("x").is_empty());
    }
}
