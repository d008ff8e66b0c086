//! Extracted identifier fields.

use std::fmt;

use serde::{Deserialize, Serialize};

/// An identifier that can be recovered from a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    /// Customer number ("Customer Number: ABC123").
    CustomerNumber,
    /// Invoice number ("Invoice No 9988").
    InvoiceNumber,
    /// Sales order number ("Order Number: SV004455").
    OrderNumber,
    /// Name of the ship-to party.
    ShipToName,
}

impl Field {
    /// All fields, in the order they are reported.
    pub const ALL: [Field; 4] = [
        Field::CustomerNumber,
        Field::InvoiceNumber,
        Field::OrderNumber,
        Field::ShipToName,
    ];

    /// Snake-case name used in reports.
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::CustomerNumber => "customer_number",
            Field::InvoiceNumber => "invoice_number",
            Field::OrderNumber => "order_number",
            Field::ShipToName => "ship_to_name",
        }
    }

    /// Human readable label.
    pub fn label(&self) -> &'static str {
        match self {
            Field::CustomerNumber => "Customer number",
            Field::InvoiceNumber => "Invoice number",
            Field::OrderNumber => "Order number",
            Field::ShipToName => "Ship-to name",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-document record of optionally present identifiers.
///
/// A field is either absent or holds a non-empty, trimmed value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldSet {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_number: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub invoice_number: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_number: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub ship_to_name: Option<String>,
}

impl FieldSet {
    /// Create an empty field set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get a field value.
    pub fn get(&self, field: Field) -> Option<&str> {
        self.slot(field).as_deref()
    }

    /// Set a field value. Blank values leave the field absent.
    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let value = value.into();
        let trimmed = value.trim();
        *self.slot_mut(field) = if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        };
    }

    /// Builder-style [`FieldSet::set`].
    pub fn with(mut self, field: Field, value: impl Into<String>) -> Self {
        self.set(field, value);
        self
    }

    /// Whether the field was found.
    pub fn contains(&self, field: Field) -> bool {
        self.slot(field).is_some()
    }

    /// Whether no field was found.
    pub fn is_empty(&self) -> bool {
        Field::ALL.iter().all(|f| !self.contains(*f))
    }

    /// Iterate over the fields that were found.
    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> {
        Field::ALL
            .into_iter()
            .filter_map(move |f| self.get(f).map(|v| (f, v)))
    }

    fn slot(&self, field: Field) -> &Option<String> {
        match field {
            Field::CustomerNumber => &self.customer_number,
            Field::InvoiceNumber => &self.invoice_number,
            Field::OrderNumber => &self.order_number,
            Field::ShipToName => &self.ship_to_name,
        }
    }

    fn slot_mut(&mut self, field: Field) -> &mut Option<String> {
        match field {
            Field::CustomerNumber => &mut self.customer_number,
            Field::InvoiceNumber => &mut self.invoice_number,
            Field::OrderNumber => &mut self.order_number,
            Field::ShipToName => &mut self.ship_to_name,
        }
    }
}
