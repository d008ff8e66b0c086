//! Rule-based field extraction over recovered document text.

use std::collections::BTreeMap;
use std::time::Instant;

use serde::Serialize;
use tracing::debug;

use crate::models::config::ExtractionConfig;
use crate::models::fields::{Field, FieldSet};
use crate::pdf::{ExtractedText, PdfExtractor};

use super::rules::{
    CustomerNumberExtractor, ExtractionMatch, FieldExtractor, InvoiceNumberExtractor,
    OrderNumberExtractor, ShipToExtractor,
};
use super::FieldSetExtractor;

/// Result of field extraction for one document.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ExtractionResult {
    /// Fields that were found.
    pub fields: FieldSet,
    /// Confidence of each found field.
    pub confidence: BTreeMap<Field, f32>,
    /// Whether any text could be recovered from the document.
    pub readable: bool,
    /// Extraction warnings.
    pub warnings: Vec<String>,
    /// Processing time in milliseconds.
    pub processing_time_ms: u64,
}

/// Field extractor applying the ordered pattern rules.
pub struct RuleBasedExtractor {
    customer: CustomerNumberExtractor,
    invoice: InvoiceNumberExtractor,
    order: OrderNumberExtractor,
    ship_to: ShipToExtractor,
}

impl RuleBasedExtractor {
    /// Create a new extractor with default settings.
    pub fn new() -> Self {
        Self {
            customer: CustomerNumberExtractor::new(),
            invoice: InvoiceNumberExtractor::new(),
            order: OrderNumberExtractor::new(),
            ship_to: ShipToExtractor::new(),
        }
    }

    /// Create an extractor from configuration.
    pub fn from_config(config: &ExtractionConfig) -> Self {
        Self::new().with_strict_order_tokens(config.strict_order_tokens)
    }

    /// Set whether bare order codes need at least six digits.
    pub fn with_strict_order_tokens(mut self, strict: bool) -> Self {
        self.order = self.order.with_strict_tokens(strict);
        self
    }

    /// Apply the rule for a single field.
    pub fn extract_field(&self, text: &str, field: Field) -> Option<ExtractionMatch<String>> {
        match field {
            Field::CustomerNumber => self.customer.extract(text),
            Field::InvoiceNumber => self.invoice.extract(text),
            Field::OrderNumber => self.order.extract(text),
            Field::ShipToName => self.ship_to.extract(text),
        }
    }

    /// Extract the requested fields from plain text.
    pub fn parse(&self, text: &str, fields: &[Field]) -> ExtractionResult {
        let start = Instant::now();
        let mut result = ExtractionResult {
            readable: !text.trim().is_empty(),
            ..Default::default()
        };

        for &field in fields {
            match self.extract_field(text, field) {
                Some(m) => {
                    debug!("{}: {:?} from {:?}", field, m.value, m.source);
                    result.fields.set(field, m.value);
                    if result.fields.contains(field) {
                        result.confidence.insert(field, m.confidence);
                    }
                }
                None => debug!("{}: not found", field),
            }
        }

        result.processing_time_ms = start.elapsed().as_millis() as u64;
        result
    }
}

impl Default for RuleBasedExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldSetExtractor for RuleBasedExtractor {
    fn extract(&self, data: &[u8], fields: &[Field]) -> ExtractionResult {
        let start = Instant::now();

        let mut result = match PdfExtractor::read(data) {
            Ok(text) => self.extract_from_text(&text, fields),
            Err(e) => {
                debug!("Document text unavailable: {}", e);
                ExtractionResult {
                    warnings: vec![format!("could not read document: {}", e)],
                    ..Default::default()
                }
            }
        };

        result.processing_time_ms = start.elapsed().as_millis() as u64;
        result
    }

    fn extract_from_text(&self, text: &ExtractedText, fields: &[Field]) -> ExtractionResult {
        let mut result = self.parse(&text.text, fields);
        if !result.readable {
            result.warnings.push("document contains no extractable text".to_string());
        }
        result
    }
}
