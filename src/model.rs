//! In-memory model of one generation run.
//!
//! Everything here is built once by the loader, held immutably, and consumed
//! exactly once by the emitter. Ordering is significant throughout: the
//! language order fixes enum member order and the fallback language, the
//! table/entry order fixes the variant order of the generated string enum.

use std::path::PathBuf;

/// The canonical ordered list of supported languages for a generation run.
///
/// Derived from the header row of the first table and validated against every
/// other table's header. Invariant: non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageSet {
    languages: Vec<String>,
}

impl LanguageSet {
    pub fn new(languages: Vec<String>) -> Self {
        debug_assert!(!languages.is_empty());
        Self { languages }
    }

    pub fn len(&self) -> usize {
        self.languages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.languages.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.languages.iter().map(String::as_str)
    }

    /// The fallback language for `languageFromString`'s wildcard arm.
    pub fn first(&self) -> &str {
        &self.languages[0]
    }

    pub fn as_slice(&self) -> &[String] {
        &self.languages
    }
}

/// One row of a translation table: an entry key plus one translation per
/// language, in `LanguageSet` order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationEntry {
    pub key: String,
    pub translations: Vec<String>,
}

/// One parsed CSV file: a named, ordered collection of entries.
#[derive(Debug, Clone)]
pub struct TranslationTable {
    /// File stem of the source CSV, used in diagnostics.
    pub name: String,
    pub source: PathBuf,
    pub entries: Vec<TranslationEntry>,
}

/// All tables of a run plus the language set they share.
///
/// Tables keep discovery order (sorted by file name); entries keep file order.
/// The emitter walks this exactly once.
#[derive(Debug, Clone)]
pub struct TranslationCorpus {
    pub languages: LanguageSet,
    pub tables: Vec<TranslationTable>,
}

impl TranslationCorpus {
    /// Total number of entries across all tables.
    pub fn entry_count(&self) -> usize {
        self.tables.iter().map(|t| t.entries.len()).sum()
    }
}

/// Enum variant name for a language identifier or entry key: only the first
/// character changes case. This exact rule keeps the generated output
/// byte-compatible across runs and tools.
pub fn variant_name(identifier: &str) -> String {
    let mut chars = identifier.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Record field name for a language identifier: the whole identifier
/// lower-cased.
pub fn field_name(identifier: &str) -> String {
    identifier.to_lowercase()
}
