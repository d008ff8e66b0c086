//! Data models shared across the pipeline.

pub mod config;
pub mod document;
pub mod fields;
pub mod policy;

pub use config::{ArchiveConfig, Compression, ExtractionConfig, NamingConfig, RenamerConfig};
pub use document::{Document, NameSource, RenamedEntry};
pub use fields::{Field, FieldSet};
pub use policy::NamingPolicy;
