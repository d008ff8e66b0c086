//! Filename construction from extracted fields.

use tracing::trace;

use crate::models::config::NamingConfig;
use crate::models::document::NameSource;
use crate::models::fields::{Field, FieldSet};
use crate::models::policy::NamingPolicy;

use super::sanitize::sanitize_filename_or;

/// A synthesized filename and where it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SynthesizedName {
    /// Final, sanitized filename.
    pub filename: String,
    /// Whether fields or the fallback produced the name.
    pub source: NameSource,
}

/// Builds output filenames under a [`NamingPolicy`].
#[derive(Debug, Clone)]
pub struct NameSynthesizer {
    prefix: String,
    sales_order_label: String,
    force_pdf_extension: bool,
    placeholder: String,
}

impl NameSynthesizer {
    /// Create a synthesizer with the default `CTI` naming.
    pub fn new() -> Self {
        Self::from_config(&NamingConfig::default())
    }

    /// Create a synthesizer from configuration.
    pub fn from_config(config: &NamingConfig) -> Self {
        Self {
            prefix: config.prefix.trim().to_string(),
            sales_order_label: config.sales_order_label.trim().to_string(),
            force_pdf_extension: config.force_pdf_extension,
            placeholder: config.placeholder.clone(),
        }
    }

    /// Build the name for one document.
    ///
    /// Absent fields are omitted; with no relevant field the original
    /// filename is reused. The result is always sanitized.
    pub fn synthesize(
        &self,
        policy: NamingPolicy,
        fields: &FieldSet,
        original_filename: &str,
    ) -> SynthesizedName {
        let values: Vec<&str> = policy
            .fields()
            .iter()
            .filter_map(|&f| fields.get(f))
            .collect();

        let (candidate, source) = if values.is_empty() {
            (self.fallback_name(original_filename), NameSource::Fallback)
        } else {
            (self.field_name(policy, &values), NameSource::Fields)
        };

        let filename = sanitize_filename_or(&candidate, &self.placeholder);
        trace!("{} -> {:?} ({:?})", original_filename, filename, source);

        SynthesizedName { filename, source }
    }

    fn field_name(&self, policy: NamingPolicy, values: &[&str]) -> String {
        let stem = match policy {
            NamingPolicy::BySalesOrder => join_nonempty(
                [self.prefix.as_str(), self.sales_order_label.as_str()]
                    .into_iter()
                    .chain(values.iter().copied()),
                " ",
            ),
            NamingPolicy::ByCustomer
            | NamingPolicy::ByInvoice
            | NamingPolicy::ByCustomerAndInvoice => join_nonempty(
                std::iter::once(self.prefix.as_str()).chain(values.iter().copied()),
                "-",
            ),
        };

        format!("{}.pdf", stem)
    }

    fn fallback_name(&self, original_filename: &str) -> String {
        if self.force_pdf_extension && !has_pdf_extension(original_filename) {
            format!("{}.pdf", original_filename)
        } else {
            original_filename.to_string()
        }
    }
}

impl Default for NameSynthesizer {
    fn default() -> Self {
        Self::new()
    }
}

fn join_nonempty<'a>(parts: impl Iterator<Item = &'a str>, separator: &str) -> String {
    parts
        .filter(|p| !p.is_empty())
        .collect::<Vec<_>>()
        .join(separator)
}

fn has_pdf_extension(name: &str) -> bool {
    name.rsplit_once('.')
        .is_some_and(|(_, ext)| ext.eq_ignore_ascii_case("pdf"))
}

/// Fields required by `policy` that `fields` lacks.
pub fn missing_fields(policy: NamingPolicy, fields: &FieldSet) -> Vec<Field> {
    policy
        .fields()
        .iter()
        .copied()
        .filter(|&f| !fields.contains(f))
        .collect()
}
