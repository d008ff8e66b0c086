//! Ship-to name extraction.

use super::patterns::SHIP_TO_LABEL;
use super::{ExtractionMatch, FieldExtractor, LABELED_CONFIDENCE};

/// Ship-to name field extractor.
///
/// Only the first "Ship To" line is considered by [`FieldExtractor::extract`].
/// The name is the text after the label on that line, or the next non-blank
/// line, cut at the first digit where the street address usually begins.
#[derive(Debug, Default, Clone, Copy)]
pub struct ShipToExtractor;

impl ShipToExtractor {
    pub fn new() -> Self {
        Self
    }

    /// Resolve the name following each "Ship To" line, in line order.
    fn candidates(&self, text: &str) -> Vec<Option<ExtractionMatch<String>>> {
        let lines: Vec<&str> = text.lines().collect();
        let mut results = Vec::new();

        for (i, line) in lines.iter().enumerate() {
            let trimmed = line.trim();
            let Some(label) = SHIP_TO_LABEL.find(trimmed) else {
                continue;
            };

            let inline = trimmed[label.end()..].trim();
            let (candidate, source) = if !inline.is_empty() {
                (inline, trimmed)
            } else {
                match lines[i + 1..].iter().map(|l| l.trim()).find(|l| !l.is_empty()) {
                    Some(next) => (next, next),
                    None => ("", trimmed),
                }
            };

            let name = strip_address(candidate);
            results.push(
                (!name.is_empty())
                    .then(|| ExtractionMatch::new(name.to_string(), LABELED_CONFIDENCE, source)),
            );
        }

        results
    }
}

impl FieldExtractor for ShipToExtractor {
    type Output = ExtractionMatch<String>;

    fn extract(&self, text: &str) -> Option<Self::Output> {
        self.candidates(text).into_iter().next().flatten()
    }

    fn extract_all(&self, text: &str) -> Vec<Self::Output> {
        self.candidates(text).into_iter().flatten().collect()
    }
}

/// Cut a name at its first digit and drop trailing whitespace and commas.
pub fn strip_address(candidate: &str) -> &str {
    let end = candidate
        .find(|c: char| c.is_ascii_digit())
        .unwrap_or(candidate.len());
    candidate[..end].trim_end_matches(|c: char| c.is_whitespace() || c == ',')
}

/// Extract the ship-to name from text.
pub fn extract_ship_to_name(text: &str) -> Option<String> {
    ShipToExtractor::new().extract(text).map(|m| m.value)
}
