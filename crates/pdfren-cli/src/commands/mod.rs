//! Subcommand implementations.

pub mod config;
pub mod inspect;
pub mod rename;

use pdfren_core::NamingPolicy;

/// Naming policy as spelled on the command line.
#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum PolicyArg {
    /// CTI-<customer>.pdf
    Customer,
    /// CTI-<invoice>.pdf
    Invoice,
    /// CTI-<customer>-<invoice>.pdf
    CustomerInvoice,
    /// CTI Sales Order <order> <ship-to>.pdf
    SalesOrder,
}

impl From<PolicyArg> for NamingPolicy {
    fn from(arg: PolicyArg) -> Self {
        match arg {
            PolicyArg::Customer => NamingPolicy::ByCustomer,
            PolicyArg::Invoice => NamingPolicy::ByInvoice,
            PolicyArg::CustomerInvoice => NamingPolicy::ByCustomerAndInvoice,
            PolicyArg::SalesOrder => NamingPolicy::BySalesOrder,
        }
    }
}
