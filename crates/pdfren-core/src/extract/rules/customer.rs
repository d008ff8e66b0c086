//! Customer number extraction.

use super::patterns::CUSTOMER_NUMBER;
use super::{scan_labeled, ExtractionMatch, FieldExtractor};

/// Customer number field extractor.
#[derive(Debug, Default, Clone, Copy)]
pub struct CustomerNumberExtractor;

impl CustomerNumberExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl FieldExtractor for CustomerNumberExtractor {
    type Output = ExtractionMatch<String>;

    fn extract(&self, text: &str) -> Option<Self::Output> {
        self.extract_all(text).into_iter().next()
    }

    fn extract_all(&self, text: &str) -> Vec<Self::Output> {
        scan_labeled(&CUSTOMER_NUMBER, text)
    }
}

/// Extract the first customer number from text.
pub fn extract_customer_number(text: &str) -> Option<String> {
    CustomerNumberExtractor::new().extract(text).map(|m| m.value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_customer_number() {
        assert_eq!(
            extract_customer_number("Customer Number: ABC123"),
            Some("ABC123".to_string())
        );
    }

    #[test]
    fn test_preserves_case_and_hyphens() {
        assert_eq!(
            extract_customer_number("CUSTOMER NO: cti-00x7 / Terms: Net 30"),
            Some("cti-00x7".to_string())
        );
    }

    #[test]
    fn test_value_on_next_line() {
        let text = "Customer Number\n  C-4411\nDate 2024-03-01";
        assert_eq!(extract_customer_number(text), Some("C-4411".to_string()));
    }

    #[test]
    fn test_skips_customer_name_label() {
        let text = "Customer Name: Acme Corp\nCustomer No. 5512";
        assert_eq!(extract_customer_number(text), Some("5512".to_string()));
    }

    #[test]
    fn test_skips_other_customer_label() {
        let text = "Customer Service: 555\nCustomer Number: ABC123";
        assert_eq!(extract_customer_number(text), Some("ABC123".to_string()));
    }

    #[test]
    fn test_first_match_wins() {
        let extractor = CustomerNumberExtractor::new();
        let text = "Customer: A1\nCustomer Number: B2";

        let all = extractor.extract_all(text);
        assert_eq!(all.len(), 2);
        assert_eq!(extractor.extract(text).unwrap().value, "A1");
        assert!(all[0].position.unwrap().0 < all[1].position.unwrap().0);
    }

    #[test]
    fn test_no_label() {
        assert_eq!(extract_customer_number("Invoice Number: 9988"), None);
        assert_eq!(extract_customer_number(""), None);
    }
}
