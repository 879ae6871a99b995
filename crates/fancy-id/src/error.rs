//! Error types for the fancy-id crate.
//!
//! Template problems surface as [`FormatError`] when a specification is
//! built; generation itself never fails. Loading a category table from JSON
//! surfaces [`CategoryTableError`].

use camino::Utf8PathBuf;
use thiserror::Error;

/// Errors raised while interpreting a format template.
///
/// These are caller input errors and are reported at specification or
/// engine construction time, never from `generate`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    /// The template did not contain any recognisable word group.
    #[error("format string '{template}' did not contain any valid word groups")]
    NoWordGroups {
        /// The template that was parsed.
        template: String,
    },

    /// One or more tokens do not name a known category.
    #[error("unknown word groups: {}", groups.join(", "))]
    UnknownWordGroups {
        /// The unrecognised tokens, in template order.
        groups: Vec<String>,
    },
}

/// Errors that can occur when loading a category table.
///
/// These cover file access, JSON parsing, and schema validation of the
/// category word lists.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CategoryTableError {
    /// The table file could not be read.
    #[error("failed to read category table at '{path}': {message}")]
    IoError {
        /// Path to the table file.
        path: Utf8PathBuf,
        /// Description of the I/O error.
        message: String,
    },

    /// The table JSON is malformed or missing required fields.
    #[error("invalid category table JSON: {message}")]
    ParseError {
        /// Description of the parse error.
        message: String,
    },

    /// The table version is not supported.
    #[error("unsupported category table version: expected {expected}, found {actual}")]
    UnsupportedVersion {
        /// Expected version number.
        expected: u32,
        /// Actual version found in the table.
        actual: u32,
    },

    /// The table defines no categories.
    #[error("category table contains no categories")]
    EmptyTable,

    /// A category name is empty or contains non-alphabetic characters.
    #[error("invalid category name '{name}': names must be non-empty and alphabetic")]
    InvalidCategoryName {
        /// The rejected name.
        name: String,
    },

    /// Two categories share a name when compared case-insensitively.
    #[error("duplicate category '{name}'")]
    DuplicateCategory {
        /// The upper-cased duplicate name.
        name: String,
    },

    /// A category has no words.
    #[error("category '{name}' has no words")]
    EmptyWordList {
        /// The upper-cased category name.
        name: String,
    },

    /// A category contains a blank word.
    #[error("category '{name}' has a blank word at index {index}")]
    BlankWord {
        /// The upper-cased category name.
        name: String,
        /// Index of the blank word in the list.
        index: usize,
    },
}
