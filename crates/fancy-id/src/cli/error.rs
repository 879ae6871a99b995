//! Error types for the fancy-id CLI.

use camino::Utf8PathBuf;
use thiserror::Error;

use crate::error::{CategoryTableError, FormatError};

/// Errors surfaced by the CLI run.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CliError {
    /// The `--words` path does not name a file.
    #[error("invalid --words path '{path}': expected a file")]
    InvalidWordsPath {
        /// Path supplied on the command line.
        path: Utf8PathBuf,
    },
    /// The format template could not be interpreted.
    #[error("format error: {source}")]
    FormatError {
        /// Underlying format error.
        #[from]
        #[source]
        source: FormatError,
    },
    /// The category table could not be loaded.
    #[error("category table error: {source}")]
    CategoryTableError {
        /// Underlying table error.
        #[from]
        #[source]
        source: CategoryTableError,
    },
}
