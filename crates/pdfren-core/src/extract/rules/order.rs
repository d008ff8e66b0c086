//! Sales order number extraction.
//!
//! Two tiers, in priority order:
//! 1. a line containing "Order Number" or "Sales Order" with a colon; the
//!    trimmed text after the colon is the value.
//! 2. the first bare SO/SV order code anywhere in the text.

use tracing::trace;

use super::patterns::{ORDER_LABEL, ORDER_TOKEN_LOOSE, ORDER_TOKEN_STRICT};
use super::{ExtractionMatch, FieldExtractor, LABELED_CONFIDENCE, TOKEN_CONFIDENCE};

/// Order number field extractor.
#[derive(Debug, Clone, Copy)]
pub struct OrderNumberExtractor {
    strict_tokens: bool,
}

impl OrderNumberExtractor {
    /// Create a new order number extractor with strict token matching.
    pub fn new() -> Self {
        Self {
            strict_tokens: true,
        }
    }

    /// Set whether bare order codes need at least six digits.
    pub fn with_strict_tokens(mut self, strict: bool) -> Self {
        self.strict_tokens = strict;
        self
    }

    /// Tier 1: labelled lines.
    pub fn extract_labeled(&self, text: &str) -> Vec<ExtractionMatch<String>> {
        let mut results = Vec::new();
        let mut offset = 0;

        for raw_line in text.split_inclusive('\n') {
            let line_start = offset;
            offset += raw_line.len();

            let line = raw_line.trim_end_matches(['\r', '\n']);
            let Some(label) = ORDER_LABEL.find(line) else {
                continue;
            };
            let Some(colon) = line[label.start()..].find(':').map(|i| label.start() + i) else {
                continue;
            };

            // "Sales Order Date: ..." labels a date, not the order
            if colon > label.end() && line[label.end()..colon].to_lowercase().contains("date") {
                trace!("Skipping dated order label: {:?}", line);
                continue;
            }

            let value = line[colon + 1..].trim();
            if value.is_empty() {
                continue;
            }

            results.push(
                ExtractionMatch::new(value.to_string(), LABELED_CONFIDENCE, line.trim())
                    .with_position(line_start, line_start + line.len()),
            );
        }

        results
    }

    /// Tier 2: bare order codes.
    pub fn extract_tokens(&self, text: &str) -> Vec<ExtractionMatch<String>> {
        let pattern = if self.strict_tokens {
            &*ORDER_TOKEN_STRICT
        } else {
            &*ORDER_TOKEN_LOOSE
        };

        pattern
            .find_iter(text)
            .map(|m| {
                ExtractionMatch::new(m.as_str().to_string(), TOKEN_CONFIDENCE, m.as_str())
                    .with_position(m.start(), m.end())
            })
            .collect()
    }
}

impl Default for OrderNumberExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for OrderNumberExtractor {
    type Output = ExtractionMatch<String>;

    fn extract(&self, text: &str) -> Option<Self::Output> {
        self.extract_labeled(text)
            .into_iter()
            .next()
            .or_else(|| self.extract_tokens(text).into_iter().next())
    }

    fn extract_all(&self, text: &str) -> Vec<Self::Output> {
        let mut results = self.extract_labeled(text);
        for token in self.extract_tokens(text) {
            if results.iter().any(|r| r.value == token.value) {
                continue;
            }
            results.push(token);
        }
        results
    }
}

/// Extract the sales order number from text using strict token matching.
pub fn extract_order_number(text: &str) -> Option<String> {
    OrderNumberExtractor::new().extract(text).map(|m| m.value)
}
