//! Output filename construction and sanitization.

mod sanitize;
mod synthesizer;

pub use sanitize::{is_allowed, sanitize_filename, sanitize_filename_or, PLACEHOLDER_FILENAME};
pub use synthesizer::{missing_fields, NameSynthesizer, SynthesizedName};
