//! CLI support for generating identifiers.
//!
//! This module provides argument parsing and the run logic for the
//! `fancy-id` binary. The binary delegates to these functions so they can be
//! exercised in tests without spawning a subprocess.

mod error;

use camino::{Utf8Path, Utf8PathBuf};
use cap_std::{ambient_authority, fs::Dir};
use clap::Parser;
use tracing::debug;

pub use self::error::CliError;
use crate::category::CategoryTable;
use crate::engine::{IdentifierEngine, estimate_capacity};
use crate::error::CategoryTableError;
use crate::specification::Specification;

const DEFAULT_COUNT: usize = 1;

/// `fancy-id` command arguments.
#[derive(Debug, Clone, PartialEq, Eq, Parser)]
#[command(
    name = "fancy-id",
    about = "Generate pronounceable random identifiers from an example template",
    version
)]
pub struct Options {
    /// Example of the identifiers to produce, e.g. `Adjective-Adjective-Animal`.
    #[arg(value_name = "FORMAT")]
    pub format: Option<String>,
    /// Seed for a reproducible sequence.
    #[arg(long, value_name = "seed")]
    pub seed: Option<u64>,
    /// Number of identifiers to discard before printing.
    #[arg(long, value_name = "n", default_value_t = 0)]
    pub skip: u64,
    /// Number of identifiers to print.
    #[arg(short = 'n', long, value_name = "n", default_value_t = DEFAULT_COUNT)]
    pub count: usize,
    /// JSON category table used instead of the built-in words.
    #[arg(long, value_name = "path")]
    pub words: Option<Utf8PathBuf>,
    /// Print the estimated number of distinct identifiers instead.
    #[arg(long)]
    pub estimate: bool,
}

/// What a successful run produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Generated identifiers, in sequence order.
    Identifiers(Vec<String>),
    /// Upper bound on distinct identifiers for the format.
    Estimate(u128),
}

impl Outcome {
    /// Returns the lines the CLI prints for this outcome.
    ///
    /// # Example
    ///
    /// ```
    /// use fancy_id::cli::Outcome;
    ///
    /// assert_eq!(Outcome::Estimate(64).lines(), vec!["64".to_owned()]);
    /// ```
    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        match self {
            Self::Identifiers(ids) => ids.clone(),
            Self::Estimate(capacity) => vec![capacity.to_string()],
        }
    }
}

/// Runs the CLI for already-parsed options.
///
/// # Errors
///
/// Returns [`CliError`] when the category table cannot be loaded or the
/// format cannot be interpreted.
///
/// # Example
///
/// ```
/// use clap::Parser;
/// use fancy_id::cli::{Options, Outcome, run};
///
/// let options = Options::try_parse_from(["fancy-id", "size-color", "--estimate"])
///     .expect("parse args");
///
/// assert_eq!(run(&options).expect("run"), Outcome::Estimate(64));
/// ```
pub fn run(options: &Options) -> Result<Outcome, CliError> {
    let loaded;
    let table = match &options.words {
        Some(path) => {
            loaded = load_table(path)?;
            &loaded
        }
        None => CategoryTable::builtin(),
    };

    if options.estimate {
        let spec = match options.format.as_deref() {
            Some(template) => Specification::parse(template, table)?,
            None => Specification::default(),
        };
        return Ok(Outcome::Estimate(estimate_capacity(&spec, table)?));
    }

    let engine = IdentifierEngine::from_template(
        options.format.as_deref(),
        table,
        options.seed,
        options.skip,
    )?;
    debug!(count = options.count, "generating identifiers");
    Ok(Outcome::Identifiers(engine.take(options.count).collect()))
}

/// Loads a JSON category table from a path relative to the working
/// directory.
///
/// Read failures report `path` as given, not just its file name.
///
/// # Errors
///
/// Returns [`CliError`] if the path has no file name, its directory cannot be
/// opened, or the table is invalid.
pub fn load_table(path: &Utf8Path) -> Result<CategoryTable, CliError> {
    let file_name = path.file_name().ok_or_else(|| CliError::InvalidWordsPath {
        path: path.to_path_buf(),
    })?;
    let parent = path
        .parent()
        .filter(|parent| !parent.as_str().is_empty())
        .unwrap_or_else(|| Utf8Path::new("."));
    let dir = Dir::open_ambient_dir(parent, ambient_authority()).map_err(|err| {
        CategoryTableError::IoError {
            path: path.to_path_buf(),
            message: err.to_string(),
        }
    })?;

    let table =
        CategoryTable::from_file(&dir, Utf8Path::new(file_name)).map_err(|err| match err {
            CategoryTableError::IoError { message, .. } => CategoryTableError::IoError {
                path: path.to_path_buf(),
                message,
            },
            other => other,
        })?;
    Ok(table)
}
