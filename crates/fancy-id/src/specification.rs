//! The canonical, validated shape of an identifier.

use std::fmt;
use std::str::FromStr;

use crate::casing::Casing;
use crate::category::CategoryTable;
use crate::error::FormatError;
use crate::format;

/// Category name used twice by the default specification.
const DEFAULT_ADJECTIVE: &str = "ADJECTIVE";

/// Category name closing the default specification.
const DEFAULT_ANIMAL: &str = "ANIMAL";

/// Ordered word groups, separator and casing policy for an identifier.
///
/// A specification is immutable once built and can back any number of
/// generation calls. The default is `AdjectiveAdjectiveAnimal`: two
/// `ADJECTIVE` groups and one `ANIMAL` group, camel-cased, no separator.
///
/// # Example
///
/// ```
/// use fancy_id::{Casing, CategoryTable, Specification};
///
/// let spec = Specification::parse("adjective_animal", CategoryTable::builtin())
///     .expect("valid template");
///
/// assert_eq!(spec.word_groups(), ["ADJECTIVE", "ANIMAL"]);
/// assert_eq!(spec.separator(), "_");
/// assert_eq!(spec.casing(), Casing::Lower);
/// assert_eq!(spec.render(&["Mellow", "Yak"]), "mellow_yak");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Specification {
    word_groups: Vec<String>,
    separator: String,
    casing: Casing,
}

impl Specification {
    /// Builds a specification from explicit parts, validating every word
    /// group against `table`.
    ///
    /// Group names are stored upper-cased.
    ///
    /// # Errors
    ///
    /// Returns [`FormatError::NoWordGroups`] if `word_groups` is empty and
    /// [`FormatError::UnknownWordGroups`] if any group is not in `table`.
    pub fn new<S: AsRef<str>>(
        word_groups: &[S],
        separator: impl Into<String>,
        casing: Casing,
        table: &CategoryTable,
    ) -> Result<Self, FormatError> {
        Self::from_tokens("", word_groups, separator.into(), casing, table)
    }

    /// Validates raw template tokens and stores them upper-cased.
    ///
    /// Unknown tokens are reported before an empty token list.
    pub(crate) fn from_tokens<S: AsRef<str>>(
        template: &str,
        tokens: &[S],
        separator: String,
        casing: Casing,
        table: &CategoryTable,
    ) -> Result<Self, FormatError> {
        let raw: Vec<&str> = tokens.iter().map(AsRef::as_ref).collect();
        let unknown: Vec<String> = raw
            .iter()
            .filter(|token| !table.contains(token))
            .map(|token| (*token).to_owned())
            .collect();
        if !unknown.is_empty() {
            return Err(FormatError::UnknownWordGroups { groups: unknown });
        }

        if raw.is_empty() {
            return Err(FormatError::NoWordGroups {
                template: template.to_owned(),
            });
        }

        Ok(Self {
            word_groups: raw.iter().map(|token| token.to_uppercase()).collect(),
            separator,
            casing,
        })
    }

    /// Interprets an example template such as `"Adjective-Adjective-Animal"`.
    ///
    /// See [`crate::parse`] for the inference rules.
    ///
    /// # Errors
    ///
    /// Returns [`FormatError`] if the template yields no word groups or names
    /// a category missing from `table`.
    pub fn parse(template: &str, table: &CategoryTable) -> Result<Self, FormatError> {
        format::parse(template, table)
    }

    /// Returns the upper-cased category names in draw order.
    #[must_use]
    pub fn word_groups(&self) -> &[String] {
        &self.word_groups
    }

    /// Returns the string placed between words.
    #[must_use]
    pub fn separator(&self) -> &str {
        &self.separator
    }

    /// Returns the casing policy.
    #[must_use]
    pub const fn casing(&self) -> Casing {
        self.casing
    }

    /// Applies the casing policy to `words` and joins them with the
    /// separator.
    #[must_use]
    pub fn render<S: AsRef<str>>(&self, words: &[S]) -> String {
        words
            .iter()
            .enumerate()
            .map(|(position, word)| self.casing.apply(position, AsRef::<str>::as_ref(word)))
            .collect::<Vec<_>>()
            .join(&self.separator)
    }
}

impl Default for Specification {
    fn default() -> Self {
        Self {
            word_groups: vec![
                DEFAULT_ADJECTIVE.to_owned(),
                DEFAULT_ADJECTIVE.to_owned(),
                DEFAULT_ANIMAL.to_owned(),
            ],
            separator: String::new(),
            casing: Casing::Camel,
        }
    }
}

impl FromStr for Specification {
    type Err = FormatError;

    /// Parses against [`CategoryTable::builtin`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s, CategoryTable::builtin())
    }
}

impl fmt::Display for Specification {
    /// Writes the word groups cased and joined as an identifier would be.
    ///
    /// Specifications obtained from [`Specification::parse`] read back to an
    /// equal value. One built with [`Specification::new`] around a letter or
    /// digit separator may not.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(&self.word_groups))
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    const WORDS: [&str; 3] = ["silent", "drab", "oyster"];

    #[rstest]
    #[case("Adjective-Adjective-Animal", "Silent-Drab-Oyster")]
    #[case("Adjective Adjective Animal", "Silent Drab Oyster")]
    #[case("AdjectiveAdjectiveAnimal", "SilentDrabOyster")]
    #[case("ADJECTIVE ADJECTIVE ANIMAL", "SILENT DRAB OYSTER")]
    #[case("adjective adjective animal", "silent drab oyster")]
    #[case("adjectiveAdjectiveAnimal", "silentDrabOyster")]
    #[case("ADJECTIVE_ADJECTIVE_ANIMAL", "SILENT_DRAB_OYSTER")]
    fn renders_words_in_template_style(#[case] template: &str, #[case] expected: &str) {
        let spec: Specification = template.parse().expect("valid template");

        assert_eq!(spec.render(&WORDS), expected);
    }

    #[test]
    fn default_is_adjective_adjective_animal() {
        let spec = Specification::default();

        assert_eq!(spec.word_groups(), ["ADJECTIVE", "ADJECTIVE", "ANIMAL"]);
        assert_eq!(spec.separator(), "");
        assert_eq!(spec.casing(), Casing::Camel);
        assert_eq!(spec.to_string(), "AdjectiveAdjectiveAnimal");
    }

    #[test]
    fn display_round_trips_through_parse() {
        let spec: Specification = "size--Color--Animal".parse().expect("valid template");
        let reparsed: Specification = spec.to_string().parse().expect("valid template");

        assert_eq!(spec, reparsed);
    }

    #[test]
    fn display_of_word_character_separator_reads_back_differently() {
        let spec = Specification::new(
            &["SIZE", "ANIMAL"],
            "x",
            Casing::Camel,
            CategoryTable::builtin(),
        )
        .expect("valid parts");
        let rendered = spec.to_string();
        let reparsed: Specification = rendered.parse().expect("valid template");

        assert_eq!(rendered, "SizexAnimal");
        assert_eq!(reparsed.word_groups(), ["SIZE"]);
        assert_ne!(spec, reparsed);
    }

    #[test]
    fn new_normalises_group_names() {
        let spec = Specification::new(
            &["size", "Animal"],
            "-",
            Casing::Upper,
            CategoryTable::builtin(),
        )
        .expect("valid parts");

        assert_eq!(spec.word_groups(), ["SIZE", "ANIMAL"]);
    }

    #[test]
    fn new_rejects_unknown_groups() {
        let result = Specification::new(
            &["SIZE", "PLANET", "MOON"],
            "",
            Casing::Camel,
            CategoryTable::builtin(),
        );

        assert_eq!(
            result,
            Err(FormatError::UnknownWordGroups {
                groups: vec!["PLANET".to_owned(), "MOON".to_owned()],
            })
        );
    }

    #[test]
    fn new_rejects_empty_groups() {
        let groups: [&str; 0] = [];
        let result = Specification::new(&groups, "-", Casing::Camel, CategoryTable::builtin());

        assert!(matches!(result, Err(FormatError::NoWordGroups { .. })));
    }
}
