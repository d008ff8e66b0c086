//! Naming policies.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::fields::Field;

/// How documents in a batch are renamed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NamingPolicy {
    /// `CTI-<customer>.pdf`
    #[default]
    ByCustomer,
    /// `CTI-<invoice>.pdf`
    ByInvoice,
    /// `CTI-<customer>-<invoice>.pdf`
    ByCustomerAndInvoice,
    /// `CTI Sales Order <order> <ship-to>.pdf`
    BySalesOrder,
}

impl NamingPolicy {
    /// Fields the policy needs, in the order they appear in the name.
    pub fn fields(&self) -> &'static [Field] {
        match self {
            NamingPolicy::ByCustomer => &[Field::CustomerNumber],
            NamingPolicy::ByInvoice => &[Field::InvoiceNumber],
            NamingPolicy::ByCustomerAndInvoice => &[Field::CustomerNumber, Field::InvoiceNumber],
            NamingPolicy::BySalesOrder => &[Field::OrderNumber, Field::ShipToName],
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            NamingPolicy::ByCustomer => "by_customer",
            NamingPolicy::ByInvoice => "by_invoice",
            NamingPolicy::ByCustomerAndInvoice => "by_customer_and_invoice",
            NamingPolicy::BySalesOrder => "by_sales_order",
        }
    }
}

impl fmt::Display for NamingPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NamingPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('-', "_").as_str() {
            "by_customer" | "customer" => Ok(NamingPolicy::ByCustomer),
            "by_invoice" | "invoice" => Ok(NamingPolicy::ByInvoice),
            "by_customer_and_invoice" | "customer_invoice" | "customer_and_invoice" => {
                Ok(NamingPolicy::ByCustomerAndInvoice)
            }
            "by_sales_order" | "sales_order" | "salesorder" => Ok(NamingPolicy::BySalesOrder),
            other => Err(format!("unknown naming policy: {}", other)),
        }
    }
}
