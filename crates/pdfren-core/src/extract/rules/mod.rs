//! Rule-based field extractors.

pub mod customer;
pub mod invoice;
pub mod order;
pub mod patterns;
pub mod ship_to;

pub use customer::{extract_customer_number, CustomerNumberExtractor};
pub use invoice::{extract_invoice_number, InvoiceNumberExtractor};
pub use order::{extract_order_number, OrderNumberExtractor};
pub use patterns::*;
pub use ship_to::{extract_ship_to_name, ShipToExtractor};

use regex::Regex;
use tracing::trace;

/// Trait for field extractors.
pub trait FieldExtractor {
    /// The type of value this extractor produces.
    type Output;

    /// Extract the field from text.
    fn extract(&self, text: &str) -> Option<Self::Output>;

    /// Extract all occurrences of the field, in document order.
    fn extract_all(&self, text: &str) -> Vec<Self::Output>;
}

/// Extraction context with confidence scores.
#[derive(Debug, Clone, PartialEq)]
pub struct ExtractionMatch<T> {
    /// Extracted value.
    pub value: T,
    /// Confidence score (0.0 - 1.0).
    pub confidence: f32,
    /// Position in source text.
    pub position: Option<(usize, usize)>,
    /// Source text that was matched.
    pub source: String,
}

impl<T> ExtractionMatch<T> {
    pub fn new(value: T, confidence: f32, source: impl Into<String>) -> Self {
        Self {
            value,
            confidence,
            position: None,
            source: source.into(),
        }
    }

    pub fn with_position(mut self, start: usize, end: usize) -> Self {
        self.position = Some((start, end));
        self
    }
}

/// Confidence of a value that follows an explicit label.
pub const LABELED_CONFIDENCE: f32 = 0.95;

/// Confidence of a value recognized only by its shape.
pub const TOKEN_CONFIDENCE: f32 = 0.6;

/// Words that name a field rather than hold its value.
const LABEL_WORDS: &[&str] = &[
    "customer", "invoice", "number", "no", "name", "date", "to",
];

/// Words that close a multi-word label such as "Bill To" or "Order Date".
const TRAILING_LABEL_WORDS: &[&str] = &["to", "name", "number", "no", "date"];

/// Whether a captured token is actually another label.
pub fn is_label_word(token: &str) -> bool {
    LABEL_WORDS.iter().any(|w| w.eq_ignore_ascii_case(token))
}

/// Whether the word captured at `text[..token_end]` opens a label of its own:
/// it is followed on the same line by a colon or by a closing label word.
/// Tokens with digits are always values.
fn starts_label(text: &str, token: &str, token_end: usize) -> bool {
    if token.chars().any(|c| c.is_ascii_digit()) {
        return false;
    }

    let rest = text[token_end..].trim_start_matches([' ', '\t']);
    if rest.starts_with(':') {
        return true;
    }

    let next_word = rest
        .split(|c: char| !c.is_alphanumeric())
        .next()
        .unwrap_or("");
    TRAILING_LABEL_WORDS
        .iter()
        .any(|w| w.eq_ignore_ascii_case(next_word))
}

/// Scan `text` with a `label ... (value)` pattern, rejecting captures that
/// are labels themselves or carry no alphanumerics.
///
/// A rejected match restarts the scan one character after the rejected
/// label, so a real label consumed as a separator is still found.
pub(crate) fn scan_labeled(pattern: &Regex, text: &str) -> Vec<ExtractionMatch<String>> {
    let mut results = Vec::new();
    let mut pos = 0;

    while pos < text.len() {
        let Some(caps) = pattern.captures_at(text, pos) else {
            break;
        };
        let (Some(full), Some(value)) = (caps.get(0), caps.get(1)) else {
            break;
        };

        let token = value.as_str();
        if starts_label(text, token, value.end())
            || is_label_word(token)
            || !token.chars().any(|c| c.is_alphanumeric())
        {
            trace!("Rejected {:?} in {:?}", token, full.as_str());
            pos = next_char_boundary(text, full.start());
            continue;
        }

        results.push(
            ExtractionMatch::new(token.to_string(), LABELED_CONFIDENCE, full.as_str())
                .with_position(full.start(), full.end()),
        );
        pos = full.end();
    }

    results
}

fn next_char_boundary(text: &str, index: usize) -> usize {
    index + text[index..].chars().next().map_or(1, char::len_utf8)
}
