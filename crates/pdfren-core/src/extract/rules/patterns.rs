//! Common regex patterns for identifier extraction.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // "Customer Number: ABC-123", "Customer No. 42", "Customer #A7", "Customer: X1"
    pub static ref CUSTOMER_NUMBER: Regex = Regex::new(
        r"(?i)\bcustomer\s*(?:number\b|no\b\.?)?[\s:#]*([A-Za-z0-9\-]+)"
    ).unwrap();

    // "Invoice Number: 9988", "Invoice No 9988", "Invoice #9988"
    pub static ref INVOICE_NUMBER: Regex = Regex::new(
        r"(?i)\binvoice\s*(?:number\b|no\b\.?)?[\s:#]*([A-Za-z0-9\-]+)"
    ).unwrap();

    // Lines carrying a labelled order number
    pub static ref ORDER_LABEL: Regex = Regex::new(
        r"(?i)order\s*number|sales\s*order"
    ).unwrap();

    // Bare order codes: SO/SV followed by at least six digits
    pub static ref ORDER_TOKEN_STRICT: Regex = Regex::new(
        r"S[OV]\d{6,}[0-9A-Za-z]*"
    ).unwrap();

    // Bare order codes: SO/SV followed by any alphanumeric run
    pub static ref ORDER_TOKEN_LOOSE: Regex = Regex::new(
        r"\bS[OV][0-9A-Za-z]+\b"
    ).unwrap();

    // "Ship To", "Ship to Name:", "SHIP TO -" at the start of a trimmed line
    pub static ref SHIP_TO_LABEL: Regex = Regex::new(
        r"(?i)^ship\s*to\b(?:\s*name\b)?[\s:#\-]*"
    ).unwrap();
}
