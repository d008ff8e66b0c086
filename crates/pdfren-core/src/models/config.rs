//! Configuration structures for the rename pipeline.

use serde::{Deserialize, Serialize};

use crate::error::RenamerError;
use crate::naming::is_allowed;

use super::policy::NamingPolicy;

/// Main configuration for pdfren.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenamerConfig {
    /// Field extraction configuration.
    pub extraction: ExtractionConfig,

    /// Filename construction configuration.
    pub naming: NamingConfig,

    /// Output archive configuration.
    pub archive: ArchiveConfig,
}

/// Field extraction configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractionConfig {
    /// Require at least six digits after SO/SV for unlabelled order tokens.
    /// When false any alphanumeric run after the prefix is accepted.
    pub strict_order_tokens: bool,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            strict_order_tokens: true,
        }
    }
}

/// Filename construction configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NamingConfig {
    /// Policy used when none is given explicitly.
    pub default_policy: NamingPolicy,

    /// Leading token of every synthesized name.
    pub prefix: String,

    /// Words placed between the prefix and the order fields.
    pub sales_order_label: String,

    /// Append `.pdf` to fallback names that lack it.
    pub force_pdf_extension: bool,

    /// Name used when sanitization leaves nothing.
    pub placeholder: String,
}

impl Default for NamingConfig {
    fn default() -> Self {
        Self {
            default_policy: NamingPolicy::ByCustomer,
            prefix: "CTI".to_string(),
            sales_order_label: "Sales Order".to_string(),
            force_pdf_extension: false,
            placeholder: "document.pdf".to_string(),
        }
    }
}

/// Compression applied to archive entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Compression {
    /// Deflate each entry.
    #[default]
    Deflated,
    /// Store entries uncompressed.
    Stored,
}

/// Output archive configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArchiveConfig {
    /// File name of the produced archive.
    pub file_name: String,

    /// Compression method.
    pub compression: Compression,
}

impl Default for ArchiveConfig {
    fn default() -> Self {
        Self {
            file_name: "renamed.zip".to_string(),
            compression: Compression::Deflated,
        }
    }
}

impl RenamerConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &std::path::Path) -> Result<Self, std::io::Error> {
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content).map_err(|e| {
            std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string())
        })
    }

    /// Save configuration to a JSON file.
    pub fn save(&self, path: &std::path::Path) -> Result<(), std::io::Error> {
        let content = serde_json::to_string_pretty(self).map_err(|e| {
            std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string())
        })?;
        std::fs::write(path, content)
    }

    /// Check values that would otherwise be silently rewritten by
    /// sanitization.
    pub fn validate(&self) -> crate::Result<()> {
        let naming = &self.naming;
        for (key, value) in [
            ("naming.prefix", &naming.prefix),
            ("naming.sales_order_label", &naming.sales_order_label),
        ] {
            if let Some(c) = value.chars().find(|&c| !is_allowed(c)) {
                return Err(RenamerError::Config(format!(
                    "{} contains disallowed character {:?}",
                    key, c
                )));
            }
        }

        if self.archive.file_name.trim().is_empty() {
            return Err(RenamerError::Config(
                "archive.file_name must not be empty".to_string(),
            ));
        }

        Ok(())
    }
}
