//! Invoice number extraction.
//!
//! "Invoice Date", "Invoice To" and a title line followed by another label
//! ("INVOICE" then "Bill To:") are neighbouring labels, not values; the
//! shared label guard skips them.

use super::patterns::INVOICE_NUMBER;
use super::{scan_labeled, ExtractionMatch, FieldExtractor};

/// Invoice number field extractor.
#[derive(Debug, Default, Clone, Copy)]
pub struct InvoiceNumberExtractor;

impl InvoiceNumberExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl FieldExtractor for InvoiceNumberExtractor {
    type Output = ExtractionMatch<String>;

    fn extract(&self, text: &str) -> Option<Self::Output> {
        self.extract_all(text).into_iter().next()
    }

    fn extract_all(&self, text: &str) -> Vec<Self::Output> {
        scan_labeled(&INVOICE_NUMBER, text)
    }
}

/// Extract the first invoice number from text.
pub fn extract_invoice_number(text: &str) -> Option<String> {
    InvoiceNumberExtractor::new().extract(text).map(|m| m.value)
}
