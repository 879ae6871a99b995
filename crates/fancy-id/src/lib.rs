//! Pronounceable, reproducible random identifiers.
//!
//! This crate builds identifiers such as `SilentDrabOyster` or
//! `tiny-maroon-walrus` by drawing words from named categories. The shape of
//! an identifier comes from a sparse example template: the crate infers the
//! category order, the separator and the casing style from it.
//!
//! # Overview
//!
//! The crate supports:
//!
//! - Interpreting templates such as `"Adjective-Adjective-Animal"` into a
//!   [`Specification`]
//! - Seeded, reproducible identifier sequences with an optional skip offset
//! - Upper-bound estimates of how many identifiers a template can produce
//! - Built-in `ADJECTIVE`, `ANIMAL`, `SIZE` and `COLOR` categories, or
//!   custom categories loaded from JSON
//!
//! # Example
//!
//! ```
//! use fancy_id::{CategoryTable, IdentifierEngine, estimate, generate_once};
//!
//! let one_off = generate_once(Some("adjective_animal")).expect("valid template");
//! assert_eq!(one_off.split('_').count(), 2);
//!
//! let mut engine =
//!     IdentifierEngine::from_template(None, CategoryTable::builtin(), Some(42), 10)
//!         .expect("default template");
//! let id = engine.generate();
//! assert!(id.chars().next().is_some_and(char::is_uppercase));
//!
//! assert!(estimate("ADJECTIVE-ANIMAL").expect("valid") > 1);
//! ```

mod casing;
mod category;
pub mod cli;
mod engine;
mod error;
mod format;
mod specification;
mod words;

pub use casing::Casing;
pub use category::{CategoryTable, WordList};
pub use engine::{IdentifierEngine, estimate_capacity};
pub use error::{CategoryTableError, FormatError};
pub use format::parse;
pub use specification::Specification;

/// Generates one identifier with a fresh OS-seeded random source.
///
/// Without a template, or with an empty one, the identifier looks like
/// `AdjectiveAdjectiveAnimal`. Nothing is retained between calls.
///
/// # Errors
///
/// Returns [`FormatError`] if the template cannot be interpreted against the
/// built-in categories.
pub fn generate_once(template: Option<&str>) -> Result<String, FormatError> {
    let mut engine = IdentifierEngine::from_template(template, CategoryTable::builtin(), None, 0)?;
    Ok(engine.generate())
}

/// Estimates how many distinct identifiers a template can produce with the
/// built-in categories.
///
/// See [`estimate_capacity`] for how the bound is computed.
///
/// # Errors
///
/// Returns [`FormatError`] if the template cannot be interpreted.
pub fn estimate(template: &str) -> Result<u128, FormatError> {
    let table = CategoryTable::builtin();
    let spec = parse(template, table)?;
    estimate_capacity(&spec, table)
}
