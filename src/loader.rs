//! Table Loader: CSV discovery and parsing.
//!
//! Reads every `*.csv` directly inside the source directory (non-recursive),
//! parses each file into a [`TranslationTable`], and establishes the canonical
//! [`LanguageSet`] from the first table's header. Every later table must
//! declare the same header, so the language set is a single validated value
//! rather than whatever the last file happened to say.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use csv::ReaderBuilder;
use walkdir::WalkDir;

use crate::error::StructuralError;
use crate::model::{LanguageSet, TranslationCorpus, TranslationEntry, TranslationTable};

/// Default extension of tabular input files, without the dot.
pub const DEFAULT_EXTENSION: &str = "csv";

/// List the table files directly inside `dir`, sorted by file name.
///
/// Subdirectories and files with other extensions are ignored silently.
/// Sorting makes the generated output independent of OS directory order.
pub fn discover(dir: &Path, extension: &str) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in WalkDir::new(dir).min_depth(1).max_depth(1) {
        let entry = entry.with_context(|| format!("Failed to read directory: {}", dir.display()))?;
        if !entry.file_type().is_file() {
            continue;
        }
        let path = entry.into_path();
        if path.extension().and_then(|e| e.to_str()) == Some(extension) {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

/// Parse one CSV file into its header languages and its table.
///
/// The header's first cell is reserved for the entry-key column and discarded;
/// the remaining cells are the language identifiers, kept exactly as written.
/// Key and translation cells of data rows are left-trimmed.
pub fn parse_table(path: &Path) -> Result<(Vec<String>, TranslationTable)> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)
        .with_context(|| format!("Failed to open table: {}", path.display()))?;

    let name = path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or_default()
        .to_string();

    let mut records = reader.records();

    let header = match records.next() {
        Some(record) => {
            record.with_context(|| format!("Failed to read table: {}", path.display()))?
        }
        None => {
            return Err(StructuralError::MissingHeader {
                file: path.to_path_buf(),
            }
            .into());
        }
    };
    let languages: Vec<String> = header.iter().skip(1).map(str::to_string).collect();
    if languages.is_empty() {
        return Err(StructuralError::NoLanguages {
            file: path.to_path_buf(),
        }
        .into());
    }

    let mut entries = Vec::new();
    for record in records {
        let record =
            record.with_context(|| format!("Failed to read table: {}", path.display()))?;
        if record.len() < 2 {
            return Err(StructuralError::RowTooShort {
                file: path.to_path_buf(),
                row: record.position().map(|p| p.line()).unwrap_or(0),
                found: record.len(),
            }
            .into());
        }
        entries.push(TranslationEntry {
            key: record[0].trim_start().to_string(),
            translations: record.iter().skip(1).map(|cell| cell.trim_start().to_string()).collect(),
        });
    }

    Ok((
        languages,
        TranslationTable {
            name,
            source: path.to_path_buf(),
            entries,
        },
    ))
}

/// Load every table in `dir` and build the corpus for one generation run.
///
/// The first table fixes the language set; a header mismatch in any later
/// table is fatal.
pub fn load_directory(dir: &Path, extension: &str) -> Result<TranslationCorpus> {
    let files = discover(dir, extension)?;
    if files.is_empty() {
        return Err(StructuralError::EmptyDirectory {
            directory: dir.to_path_buf(),
            extension: extension.to_string(),
        }
        .into());
    }

    let mut languages: Option<Vec<String>> = None;
    let mut tables = Vec::with_capacity(files.len());
    for path in &files {
        let (header, table) = parse_table(path)?;
        match &languages {
            None => languages = Some(header),
            Some(expected) if *expected != header => {
                return Err(StructuralError::HeaderMismatch {
                    file: path.clone(),
                    expected: expected.join(", "),
                    found: header.join(", "),
                }
                .into());
            }
            Some(_) => {}
        }
        tables.push(table);
    }

    // `languages` is Some here: `files` is non-empty and every parsed header
    // has at least one language.
    let languages = languages.unwrap_or_default();
    Ok(TranslationCorpus {
        languages: LanguageSet::new(languages),
        tables,
    })
}
