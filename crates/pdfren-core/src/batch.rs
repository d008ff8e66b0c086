//! Batch renaming: extraction and naming for every document in input order.

use std::collections::HashSet;
use std::time::Instant;

use tracing::{debug, info, warn};

use crate::extract::{FieldSetExtractor, RuleBasedExtractor};
use crate::models::config::RenamerConfig;
use crate::models::document::{Document, RenamedEntry};
use crate::models::policy::NamingPolicy;
use crate::naming::{missing_fields, NameSynthesizer};

/// Renames documents from the identifiers found in their text.
pub struct Renamer<E = RuleBasedExtractor> {
    extractor: E,
    synthesizer: NameSynthesizer,
}

impl Renamer<RuleBasedExtractor> {
    /// Create a renamer with the rule-based extractor.
    pub fn new(config: &RenamerConfig) -> Self {
        Self::with_extractor(
            RuleBasedExtractor::from_config(&config.extraction),
            NameSynthesizer::from_config(&config.naming),
        )
    }
}

impl Default for Renamer<RuleBasedExtractor> {
    fn default() -> Self {
        Self::new(&RenamerConfig::default())
    }
}

impl<E: FieldSetExtractor> Renamer<E> {
    /// Create a renamer with a custom extractor.
    pub fn with_extractor(extractor: E, synthesizer: NameSynthesizer) -> Self {
        Self {
            extractor,
            synthesizer,
        }
    }

    /// Rename a single document. Never fails: unreadable documents keep
    /// their original name.
    pub fn rename(&self, document: Document, policy: NamingPolicy) -> RenamedEntry {
        let result = self.extractor.extract(&document.content, policy.fields());

        if !result.readable {
            for warning in &result.warnings {
                warn!("{}: {}", document.filename, warning);
            }
        }

        let missing = missing_fields(policy, &result.fields);
        if !missing.is_empty() {
            debug!("{}: no {:?}", document.filename, missing);
        }

        let name = self
            .synthesizer
            .synthesize(policy, &result.fields, &document.filename);

        debug!(
            "{} -> {} ({}, {}ms)",
            document.filename,
            name.filename,
            name.source.as_str(),
            result.processing_time_ms
        );

        RenamedEntry {
            filename: name.filename,
            original_filename: document.filename,
            content: document.content,
            fields: result.fields,
            source: name.source,
        }
    }

    /// Rename a batch under one policy.
    ///
    /// The output has one entry per input, in input order, and no two
    /// entries share a name.
    pub fn rename_batch(
        &self,
        documents: Vec<Document>,
        policy: NamingPolicy,
    ) -> Vec<RenamedEntry> {
        let start = Instant::now();
        let count = documents.len();

        let mut entries: Vec<RenamedEntry> = documents
            .into_iter()
            .map(|doc| self.rename(doc, policy))
            .collect();

        let renamed = deduplicate_names(&mut entries);
        if renamed > 0 {
            info!("Disambiguated {} colliding names", renamed);
        }

        info!(
            "Renamed {} documents by {} in {:?}",
            count,
            policy,
            start.elapsed()
        );
        entries
    }
}

/// Make entry names unique by appending `_2`, `_3`, ... before the
/// extension. Names are compared case-insensitively; the first occurrence
/// keeps its name. Returns the number of entries renamed.
pub fn deduplicate_names(entries: &mut [RenamedEntry]) -> usize {
    let mut taken: HashSet<String> = HashSet::with_capacity(entries.len());
    let mut renamed = 0;

    for entry in entries.iter_mut() {
        if taken.insert(entry.filename.to_lowercase()) {
            continue;
        }

        let (stem, extension) = split_extension(&entry.filename);
        let mut n = 2;
        let unique = loop {
            let candidate = format!("{}_{}{}", stem, n, extension);
            if taken.insert(candidate.to_lowercase()) {
                break candidate;
            }
            n += 1;
        };

        debug!("Name collision: {} -> {}", entry.filename, unique);
        entry.filename = unique;
        renamed += 1;
    }

    renamed
}

/// Split `name` into stem and extension (with its dot). A leading dot does
/// not start an extension.
fn split_extension(name: &str) -> (&str, &str) {
    match name.rfind('.') {
        Some(i) if i > 0 => name.split_at(i),
        _ => (name, ""),
    }
}
