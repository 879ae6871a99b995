//! Identifier generation from a validated specification.
//!
//! An [`IdentifierEngine`] owns its random source. Seeded engines are
//! reproducible: the same specification, table, seed and skip always yield
//! the same sequence. Each draw consumes exactly one choice per word group,
//! in word group order, and that ordering is part of the reproducibility
//! contract.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::debug;

use crate::category::{CategoryTable, WordList};
use crate::error::FormatError;
use crate::specification::Specification;

/// A stateful identifier generator.
///
/// The only mutable state is the random source's position, which advances on
/// every [`generate`](Self::generate) call and is never rewound. Engines are
/// not meant to be shared between threads without external locking; build
/// one engine per thread instead.
///
/// # Example
///
/// ```
/// use fancy_id::{CategoryTable, IdentifierEngine};
///
/// let table = CategoryTable::builtin();
/// let mut first = IdentifierEngine::from_template(Some("size-animal"), table, Some(7), 0)
///     .expect("valid template");
/// let mut second = IdentifierEngine::from_template(Some("size-animal"), table, Some(7), 0)
///     .expect("valid template");
///
/// let id = first.generate();
/// assert_eq!(id, second.generate());
/// assert_eq!(id.split('-').count(), 2);
/// ```
#[derive(Debug)]
pub struct IdentifierEngine<'t, R = ChaCha8Rng> {
    spec: Specification,
    groups: Vec<&'t WordList>,
    rng: R,
    seed: Option<u64>,
    generated: u64,
}

impl<'t> IdentifierEngine<'t, ChaCha8Rng> {
    /// Creates an engine with its own OS-seeded random source.
    ///
    /// # Errors
    ///
    /// Returns [`FormatError::UnknownWordGroups`] if `spec` names a category
    /// missing from `table`.
    pub fn new(spec: Specification, table: &'t CategoryTable) -> Result<Self, FormatError> {
        Self::build(spec, table, ChaCha8Rng::from_os_rng(), None, 0)
    }

    /// Creates a reproducible engine and discards the first `skip`
    /// identifiers.
    ///
    /// # Errors
    ///
    /// Returns [`FormatError::UnknownWordGroups`] if `spec` names a category
    /// missing from `table`.
    pub fn seeded(
        spec: Specification,
        table: &'t CategoryTable,
        seed: u64,
        skip: u64,
    ) -> Result<Self, FormatError> {
        Self::build(spec, table, ChaCha8Rng::seed_from_u64(seed), Some(seed), skip)
    }

    /// Creates an engine from an optional template, seed and skip count.
    ///
    /// A missing or empty template means [`Specification::default`]; a
    /// missing seed means an OS-seeded source.
    ///
    /// # Errors
    ///
    /// Returns [`FormatError`] if the template cannot be interpreted against
    /// `table`.
    pub fn from_template(
        template: Option<&str>,
        table: &'t CategoryTable,
        seed: Option<u64>,
        skip: u64,
    ) -> Result<Self, FormatError> {
        let spec = match template.filter(|raw| !raw.is_empty()) {
            Some(raw) => Specification::parse(raw, table)?,
            None => Specification::default(),
        };
        let (rng, recorded_seed) = seed.map_or_else(
            || (ChaCha8Rng::from_os_rng(), None),
            |value| (ChaCha8Rng::seed_from_u64(value), Some(value)),
        );
        Self::build(spec, table, rng, recorded_seed, skip)
    }
}

impl<'t, R: Rng> IdentifierEngine<'t, R> {
    /// Creates an engine over a caller-supplied random source and discards
    /// the first `skip` identifiers.
    ///
    /// # Errors
    ///
    /// Returns [`FormatError::UnknownWordGroups`] if `spec` names a category
    /// missing from `table`.
    pub fn with_rng(
        spec: Specification,
        table: &'t CategoryTable,
        rng: R,
        skip: u64,
    ) -> Result<Self, FormatError> {
        Self::build(spec, table, rng, None, skip)
    }

    fn build(
        spec: Specification,
        table: &'t CategoryTable,
        rng: R,
        seed: Option<u64>,
        skip: u64,
    ) -> Result<Self, FormatError> {
        let groups = resolve_groups(&spec, table)?;
        let mut engine = Self {
            spec,
            groups,
            rng,
            seed,
            generated: 0,
        };

        for _ in 0..skip {
            drop(engine.generate());
        }

        debug!(
            seed = ?engine.seed,
            skip,
            word_groups = ?engine.spec.word_groups(),
            "constructed identifier engine"
        );
        Ok(engine)
    }

    /// Draws the next identifier.
    ///
    /// One word is chosen uniformly from each word group's category, in
    /// order, then cased and joined according to the specification.
    #[must_use]
    pub fn generate(&mut self) -> String {
        let words: Vec<&str> = self
            .groups
            .iter()
            .map(|list| list.choose(&mut self.rng))
            .collect();
        self.generated += 1;
        self.spec.render(&words)
    }

    /// Returns the specification this engine realises.
    #[must_use]
    pub const fn spec(&self) -> &Specification {
        &self.spec
    }

    /// Returns the seed, if the engine was built with one.
    #[must_use]
    pub const fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Returns how many identifiers have been drawn, skipped ones included.
    #[must_use]
    pub const fn generated(&self) -> u64 {
        self.generated
    }
}

impl<R: Rng> Iterator for IdentifierEngine<'_, R> {
    type Item = String;

    /// Never returns `None`.
    fn next(&mut self) -> Option<Self::Item> {
        Some(self.generate())
    }
}

/// Estimates how many distinct identifiers `spec` can produce.
///
/// The result is the product of the category sizes of every word group,
/// saturating at `u128::MAX`. It is an upper bound: repeated groups and
/// words shared between categories can make the true count smaller.
///
/// # Errors
///
/// Returns [`FormatError::UnknownWordGroups`] if `spec` names a category
/// missing from `table`.
///
/// # Example
///
/// ```
/// use fancy_id::{CategoryTable, Specification, estimate_capacity};
///
/// let table = CategoryTable::builtin();
/// let spec: Specification = "SIZE-COLOR".parse().expect("valid template");
///
/// assert_eq!(estimate_capacity(&spec, table), Ok(64));
/// ```
pub fn estimate_capacity(spec: &Specification, table: &CategoryTable) -> Result<u128, FormatError> {
    let groups = resolve_groups(spec, table)?;
    Ok(groups.iter().fold(1_u128, |total, list| {
        total.saturating_mul(u128::try_from(list.len()).unwrap_or(u128::MAX))
    }))
}

/// Looks up the word list of every group, reporting all missing names.
fn resolve_groups<'t>(
    spec: &Specification,
    table: &'t CategoryTable,
) -> Result<Vec<&'t WordList>, FormatError> {
    let unknown: Vec<String> = spec
        .word_groups()
        .iter()
        .filter(|name| !table.contains(name))
        .cloned()
        .collect();
    if !unknown.is_empty() {
        return Err(FormatError::UnknownWordGroups { groups: unknown });
    }

    Ok(spec
        .word_groups()
        .iter()
        .filter_map(|name| table.get(name))
        .collect())
}
