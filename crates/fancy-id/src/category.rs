//! Category table types and JSON parsing.
//!
//! A category table maps case-insensitive category names (such as
//! `ADJECTIVE`) to ordered, non-empty word lists. The built-in table is
//! immutable static data; custom tables are loaded from JSON.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use camino::Utf8Path;
use cap_std::fs::Dir;
use rand::Rng;
use rand::seq::IndexedRandom;
use serde::Deserialize;
use tracing::debug;

use crate::error::CategoryTableError;
use crate::words::{ADJECTIVES, ANIMALS, COLORS, SIZES};

/// Current supported table version.
const SUPPORTED_VERSION: u32 = 1;

static BUILTIN: LazyLock<CategoryTable> = LazyLock::new(|| {
    CategoryTable::from_static(&[
        ("ADJECTIVE", ADJECTIVES),
        ("ANIMAL", ANIMALS),
        ("SIZE", SIZES),
        ("COLOR", COLORS),
    ])
});

/// A set of named word categories.
///
/// Names are stored upper-cased and looked up case-insensitively. Every
/// category holds at least one word.
///
/// # Example
///
/// ```
/// use fancy_id::CategoryTable;
///
/// let json = r#"{
///     "version": 1,
///     "categories": {
///         "Fruit": ["apple", "pear"],
///         "VEGETABLE": ["leek"]
///     }
/// }"#;
///
/// let table = CategoryTable::from_json(json).expect("valid table");
/// assert_eq!(table.len(), 2);
/// assert!(table.contains("fruit"));
/// assert_eq!(table.get("Vegetable").map(|words| words.len()), Some(1));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryTable {
    categories: BTreeMap<String, WordList>,
}

impl CategoryTable {
    /// Returns the built-in table with `ADJECTIVE`, `ANIMAL`, `SIZE` and
    /// `COLOR` categories.
    #[must_use]
    pub fn builtin() -> &'static Self {
        &BUILTIN
    }

    /// Parses a category table from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns [`CategoryTableError`] if:
    /// - The JSON is malformed or missing required fields
    /// - The version is unsupported
    /// - No categories are defined
    /// - A name is not alphabetic or collides case-insensitively
    /// - A word list is empty or contains a blank word
    pub fn from_json(json: &str) -> Result<Self, CategoryTableError> {
        let raw: RawCategoryTable =
            serde_json::from_str(json).map_err(|e| CategoryTableError::ParseError {
                message: e.to_string(),
            })?;

        Self::from_raw(raw)
    }

    /// Loads a category table from a JSON file inside `dir`.
    ///
    /// # Errors
    ///
    /// Returns [`CategoryTableError`] if the file cannot be read or parsed.
    pub fn from_file(dir: &Dir, path: &Utf8Path) -> Result<Self, CategoryTableError> {
        let contents = dir
            .read_to_string(path)
            .map_err(|e| CategoryTableError::IoError {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?;

        let table = Self::from_json(&contents)?;
        debug!(path = %path, categories = table.len(), "loaded category table");
        Ok(table)
    }

    fn from_raw(raw: RawCategoryTable) -> Result<Self, CategoryTableError> {
        if raw.version != SUPPORTED_VERSION {
            return Err(CategoryTableError::UnsupportedVersion {
                expected: SUPPORTED_VERSION,
                actual: raw.version,
            });
        }

        if raw.categories.is_empty() {
            return Err(CategoryTableError::EmptyTable);
        }

        let mut categories = BTreeMap::new();
        for (name, words) in raw.categories {
            if name.is_empty() || !name.chars().all(char::is_alphabetic) {
                return Err(CategoryTableError::InvalidCategoryName { name });
            }

            let key = name.to_uppercase();
            if words.is_empty() {
                return Err(CategoryTableError::EmptyWordList { name: key });
            }
            if let Some(index) = words.iter().position(|word| word.trim().is_empty()) {
                return Err(CategoryTableError::BlankWord { name: key, index });
            }
            if categories.contains_key(&key) {
                return Err(CategoryTableError::DuplicateCategory { name: key });
            }

            categories.insert(key, WordList { words });
        }

        Ok(Self { categories })
    }

    fn from_static(entries: &[(&str, &[&str])]) -> Self {
        let categories = entries
            .iter()
            .map(|(name, words)| {
                let list = WordList {
                    words: words.iter().map(|word| (*word).to_owned()).collect(),
                };
                ((*name).to_owned(), list)
            })
            .collect();
        Self { categories }
    }

    /// Looks up a category by name, ignoring case.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&WordList> {
        self.categories.get(&name.to_uppercase())
    }

    /// Returns `true` if a category with this name exists, ignoring case.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Returns the upper-cased category names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.categories.keys().map(String::as_str)
    }

    /// Returns the number of categories.
    #[must_use]
    pub fn len(&self) -> usize {
        self.categories.len()
    }

    /// Returns `true` if the table has no categories.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}

/// The ordered candidate words of one category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordList {
    words: Vec<String>,
}

impl WordList {
    /// Returns the words in table order.
    #[must_use]
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Returns the number of words.
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Always `false`: tables reject empty categories.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Draws one word uniformly at random, consuming exactly one choice from
    /// `rng`.
    pub(crate) fn choose<R: Rng + ?Sized>(&self, rng: &mut R) -> &str {
        // Lists are non-empty by construction.
        self.words.choose(rng).map_or("", String::as_str)
    }
}

/// Raw JSON representation for deserialization.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawCategoryTable {
    version: u32,
    categories: BTreeMap<String, Vec<String>>,
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use rstest::rstest;

    use super::*;

    const VALID_JSON: &str = r#"{
        "version": 1,
        "categories": {
            "SIZE": ["small", "big"],
            "Animal": ["owl", "otter", "oyster"]
        }
    }"#;

    #[test]
    fn parses_valid_table() {
        let table = CategoryTable::from_json(VALID_JSON).expect("valid table");

        assert_eq!(table.len(), 2);
        assert_eq!(table.names().collect::<Vec<_>>(), vec!["ANIMAL", "SIZE"]);
    }

    #[rstest]
    #[case("animal")]
    #[case("ANIMAL")]
    #[case("Animal")]
    #[case("aNiMaL")]
    fn looks_up_categories_ignoring_case(#[case] name: &str) {
        let table = CategoryTable::from_json(VALID_JSON).expect("valid table");
        let words = table.get(name).expect("category found");

        assert_eq!(words.words(), ["owl", "otter", "oyster"]);
    }

    #[test]
    fn unknown_category_is_absent() {
        let table = CategoryTable::from_json(VALID_JSON).expect("valid table");

        assert!(!table.contains("COLOR"));
    }

    #[rstest]
    #[case::malformed_json("not valid json")]
    #[case::missing_version(r#"{"categories": {"A": ["a"]}}"#)]
    #[case::unknown_field(r#"{"version": 1, "categories": {"A": ["a"]}, "extra": true}"#)]
    fn rejects_json_with_parse_error(#[case] json: &str) {
        let result = CategoryTable::from_json(json);
        assert!(matches!(result, Err(CategoryTableError::ParseError { .. })));
    }

    #[rstest]
    #[case::unsupported_version(
        r#"{"version": 7, "categories": {"A": ["a"]}}"#,
        CategoryTableError::UnsupportedVersion { expected: 1, actual: 7 }
    )]
    #[case::empty_table(r#"{"version": 1, "categories": {}}"#, CategoryTableError::EmptyTable)]
    #[case::empty_word_list(
        r#"{"version": 1, "categories": {"fish": []}}"#,
        CategoryTableError::EmptyWordList { name: "FISH".to_owned() }
    )]
    #[case::blank_word(
        r#"{"version": 1, "categories": {"FISH": ["cod", "  "]}}"#,
        CategoryTableError::BlankWord { name: "FISH".to_owned(), index: 1 }
    )]
    #[case::non_alphabetic_name(
        r#"{"version": 1, "categories": {"BIG-FISH": ["cod"]}}"#,
        CategoryTableError::InvalidCategoryName { name: "BIG-FISH".to_owned() }
    )]
    #[case::empty_name(
        r#"{"version": 1, "categories": {"": ["cod"]}}"#,
        CategoryTableError::InvalidCategoryName { name: String::new() }
    )]
    #[case::case_insensitive_duplicate(
        r#"{"version": 1, "categories": {"FISH": ["cod"], "fish": ["eel"]}}"#,
        CategoryTableError::DuplicateCategory { name: "FISH".to_owned() }
    )]
    fn rejects_invalid_table(#[case] json: &str, #[case] expected: CategoryTableError) {
        let result = CategoryTable::from_json(json);
        assert_eq!(result, Err(expected));
    }

    #[test]
    fn builtin_table_has_default_categories() {
        let table = CategoryTable::builtin();

        for name in ["ADJECTIVE", "ANIMAL", "SIZE", "COLOR"] {
            let words = table.get(name).expect("builtin category");
            assert!(words.len() > 1, "{name} should offer a choice");
        }
    }

    #[test]
    fn choose_draws_from_the_list() {
        let table = CategoryTable::from_json(VALID_JSON).expect("valid table");
        let animals = table.get("ANIMAL").expect("category found");
        let mut rng = ChaCha8Rng::seed_from_u64(42);

        for _ in 0..50 {
            let word = animals.choose(&mut rng);
            assert!(animals.words().iter().any(|candidate| candidate == word));
        }
    }
}
