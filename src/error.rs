//! Structural validation errors.
//!
//! These are the errors a user can fix by editing their CSV tables, as opposed
//! to environment errors (unreadable directory, unwritable output path) which
//! propagate as plain `anyhow` errors. The CLI maps structural errors to exit
//! code 1 and everything else to exit code 2.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StructuralError {
    /// A data row needs an entry key plus at least one translation.
    #[error(
        "{}: row {row} has {found} column(s); expected an entry key plus at least one translation",
        .file.display()
    )]
    RowTooShort {
        file: PathBuf,
        /// 1-based line number of the offending row.
        row: u64,
        found: usize,
    },

    /// A file declared a different language header than the first table.
    #[error(
        "{}: language header [{found}] does not match [{expected}] declared by the first table",
        .file.display()
    )]
    HeaderMismatch {
        file: PathBuf,
        expected: String,
        found: String,
    },

    /// A file with no header row at all.
    #[error("{}: file is empty, expected a header row", .file.display())]
    MissingHeader { file: PathBuf },

    /// A header row with an entry-key column but no language columns.
    #[error("{}: header row declares no languages", .file.display())]
    NoLanguages { file: PathBuf },

    /// No tables found in the source directory.
    #[error("{}: no .{extension} tables found", .directory.display())]
    EmptyDirectory {
        directory: PathBuf,
        extension: String,
    },

    /// An entry's translation count differs from the language count.
    #[error(
        "table '{table}': entry '{key}' has {found} translation(s); expected {expected}"
    )]
    LanguageCountMismatch {
        table: String,
        key: String,
        expected: usize,
        found: usize,
    },

    /// The same entry key appears in two tables; variant names must be unique
    /// across the whole generated enum.
    #[error(
        "duplicate entry key '{key}': first defined in table '{first_table}', redefined in table '{second_table}'"
    )]
    DuplicateKey {
        key: String,
        first_table: String,
        second_table: String,
    },
}
