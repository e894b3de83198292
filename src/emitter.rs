//! Module Emitter: validation and Elm code generation.
//!
//! Consumes the corpus built by the loader and renders one Elm module in a
//! single deterministic pass: language enum, translation record, conversion
//! and accessor functions, then the merged `IntlString` enum with its
//! `translate` lookup. Re-running with unchanged inputs produces byte-identical
//! output; that is a correctness requirement for build pipelines that compare
//! generated files.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::error::StructuralError;
use crate::model::{TranslationCorpus, field_name, variant_name};

/// Prefix of every generated module, kept for compatibility with existing
/// build pipelines that glob for these files.
pub const MODULE_PREFIX: &str = "AUTOGEN_FILE_";

/// Module name for a source directory: `AUTOGEN_FILE_<dirBaseName>`.
///
/// Relative paths such as `.` are canonicalized first so the base name is
/// always meaningful.
pub fn module_name(source_dir: &Path) -> Result<String> {
    let base = match source_dir.file_name().and_then(|n| n.to_str()) {
        Some(name) => name.to_string(),
        None => {
            let canonical = fs::canonicalize(source_dir).with_context(|| {
                format!("Failed to resolve source directory: {}", source_dir.display())
            })?;
            canonical
                .file_name()
                .and_then(|n| n.to_str())
                .context("Source directory has no usable base name")?
                .to_string()
        }
    };
    Ok(format!("{MODULE_PREFIX}{base}"))
}

/// Validate cross-table consistency.
///
/// Every entry must carry exactly one translation per language, and entry
/// keys must map to unique enum variant names across the whole corpus.
pub fn validate(corpus: &TranslationCorpus) -> Result<(), StructuralError> {
    let expected = corpus.languages.len();
    let mut seen: HashMap<String, &str> = HashMap::new();

    for table in &corpus.tables {
        for entry in &table.entries {
            if entry.translations.len() != expected {
                return Err(StructuralError::LanguageCountMismatch {
                    table: table.name.clone(),
                    key: entry.key.clone(),
                    expected,
                    found: entry.translations.len(),
                });
            }
            let variant = variant_name(&entry.key);
            if let Some(first_table) = seen.insert(variant, &table.name) {
                return Err(StructuralError::DuplicateKey {
                    key: entry.key.clone(),
                    first_table: first_table.to_string(),
                    second_table: table.name.clone(),
                });
            }
        }
    }
    Ok(())
}

/// Render the complete module text.
pub fn render(corpus: &TranslationCorpus, module_name: &str) -> Result<String, StructuralError> {
    validate(corpus)?;

    let units = [
        format!("module {module_name} exposing (..)"),
        render_language_type(corpus),
        render_translation_alias(corpus),
        render_language_to_string(corpus),
        render_language_from_string(corpus),
        render_get_translation(corpus),
        render_set_translation(corpus),
        render_intl_string_type(corpus),
        render_translate(corpus),
    ];
    Ok(units.join("\n\n\n") + "\n")
}

/// Validate, render, and write the module file into `output_dir`.
///
/// Returns the path of the written file. The write is not atomic; a failed
/// run must be treated as producing no valid output.
pub fn write_module(
    corpus: &TranslationCorpus,
    source_dir: &Path,
    output_dir: &Path,
) -> Result<PathBuf> {
    let name = module_name(source_dir)?;
    let rendered = render(corpus, &name)?;
    let path = output_dir.join(format!("{name}.elm"));
    fs::write(&path, rendered)
        .with_context(|| format!("Failed to write module: {}", path.display()))?;
    Ok(path)
}

fn render_sum_type(name: &str, variants: impl Iterator<Item = String>) -> String {
    let mut out = format!("type {name}");
    for (i, variant) in variants.enumerate() {
        let sep = if i == 0 { '=' } else { '|' };
        out.push_str(&format!("\n    {sep} {variant}"));
    }
    out
}

fn render_case(header: &str, scrutinee: &str, arms: &[(String, String)]) -> String {
    let mut out = format!("{header}\n    case {scrutinee} of");
    for (pattern, body) in arms {
        out.push_str(&format!("\n        {pattern} ->\n            {body}\n"));
    }
    // Arms end with a trailing newline for the blank line between them; drop
    // the last one so units join uniformly.
    if out.ends_with('\n') {
        out.pop();
    }
    out
}

fn render_language_type(corpus: &TranslationCorpus) -> String {
    render_sum_type("Language", corpus.languages.iter().map(variant_name))
}

fn render_translation_alias(corpus: &TranslationCorpus) -> String {
    let fields: Vec<String> = corpus
        .languages
        .iter()
        .map(|lang| format!("{} : String", field_name(lang)))
        .collect();
    format!("type alias Translation =\n    {{ {} }}", fields.join(", "))
}

fn render_language_to_string(corpus: &TranslationCorpus) -> String {
    let arms: Vec<_> = corpus
        .languages
        .iter()
        .map(|lang| (variant_name(lang), format!("\"{}\"", elm_string(lang))))
        .collect();
    render_case(
        "languageString : Language -> String\nlanguageString language =",
        "language",
        &arms,
    )
}

fn render_language_from_string(corpus: &TranslationCorpus) -> String {
    let mut arms: Vec<_> = corpus
        .languages
        .iter()
        .map(|lang| (format!("\"{}\"", elm_string(lang)), variant_name(lang)))
        .collect();
    // Total function: unknown strings fall back to the first language. This is
    // a documented policy, not an error.
    arms.push(("_".to_string(), variant_name(corpus.languages.first())));
    render_case(
        "languageFromString : String -> Language\nlanguageFromString string =",
        "string",
        &arms,
    )
}

fn render_get_translation(corpus: &TranslationCorpus) -> String {
    let fields: Vec<String> = corpus.languages.iter().map(field_name).collect();
    let arms: Vec<_> = corpus
        .languages
        .iter()
        .map(|lang| (variant_name(lang), field_name(lang)))
        .collect();
    render_case(
        &format!(
            "getTranslation : Language -> Translation -> String\ngetTranslation language {{ {} }} =",
            fields.join(", ")
        ),
        "language",
        &arms,
    )
}

fn render_set_translation(corpus: &TranslationCorpus) -> String {
    let arms: Vec<_> = corpus
        .languages
        .iter()
        .map(|lang| {
            (
                variant_name(lang),
                format!("{{ translation | {} = string }}", field_name(lang)),
            )
        })
        .collect();
    render_case(
        "setTranslation : Translation -> Language -> String -> Translation\nsetTranslation translation language string =",
        "language",
        &arms,
    )
}

fn render_intl_string_type(corpus: &TranslationCorpus) -> String {
    render_sum_type(
        "IntlString",
        corpus
            .tables
            .iter()
            .flat_map(|t| t.entries.iter())
            .map(|entry| variant_name(&entry.key)),
    )
}

fn render_translate(corpus: &TranslationCorpus) -> String {
    let arms: Vec<_> = corpus
        .tables
        .iter()
        .flat_map(|t| t.entries.iter())
        .map(|entry| {
            let literals: Vec<String> = entry
                .translations
                .iter()
                .map(|t| format!("\"{}\"", elm_string(t)))
                .collect();
            (
                variant_name(&entry.key),
                format!("getTranslation language <| Translation {}", literals.join(" ")),
            )
        })
        .collect();
    render_case(
        "translate : Language -> IntlString -> String\ntranslate language intlString =",
        "intlString",
        &arms,
    )
}

/// Escape a value for an Elm string literal.
fn elm_string(value: &str) -> String {
    value.replace('\\', "\\\\").replace('"', "\\\"")
}
