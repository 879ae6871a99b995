//! Format template interpretation.
//!
//! Templates are sparse examples of the identifier a caller wants, such as
//! `"Adjective-Adjective-Animal"`, `"SIZE COLOR ANIMAL"` or
//! `"adjectiveAnimal"`. Interpretation happens in three steps:
//!
//! 1. **Separator detection.** The leftmost run of ASCII punctuation with a
//!    non-punctuation character on both sides becomes the separator. Failing
//!    that, the leftmost run of non-word characters between two word
//!    characters is used. Otherwise the separator is empty. Leading and
//!    trailing delimiters are never picked.
//! 2. **Tokenisation.** With a separator, the template is split on every
//!    occurrence; empty pieces are kept and fail validation. Without one,
//!    the template is scanned left to right and a token is emitted as soon as
//!    the accumulated prefix names a category. The scan is greedy and never
//!    backtracks, so when one category name is a prefix of another the
//!    shorter name always wins. Any unmatched tail is dropped.
//! 3. **Casing inference** from the raw tokens (see [`Casing::infer`]).

use tracing::debug;

use crate::casing::Casing;
use crate::category::CategoryTable;
use crate::error::FormatError;
use crate::specification::Specification;

/// Parses a template into a [`Specification`] validated against `table`.
///
/// # Errors
///
/// Returns [`FormatError::UnknownWordGroups`] if any token does not name a
/// category in `table` (ignoring case), and [`FormatError::NoWordGroups`] if
/// the template yields no tokens at all, as when a separator-free template
/// starts with no category name.
///
/// # Example
///
/// ```
/// use fancy_id::{Casing, CategoryTable, parse};
///
/// let spec = parse("SIZE--COLOR--ANIMAL", CategoryTable::builtin()).expect("valid template");
/// assert_eq!(spec.word_groups(), ["SIZE", "COLOR", "ANIMAL"]);
/// assert_eq!(spec.separator(), "--");
/// assert_eq!(spec.casing(), Casing::Upper);
///
/// assert!(parse("wibble wobble", CategoryTable::builtin()).is_err());
/// ```
pub fn parse(template: &str, table: &CategoryTable) -> Result<Specification, FormatError> {
    let separator = detect_separator(template);
    let tokens: Vec<&str> = if separator.is_empty() {
        scan_concatenated(template, table)
    } else {
        template.split(separator).collect()
    };

    let casing = Casing::infer(&tokens);
    let spec = Specification::from_tokens(template, &tokens, separator.to_owned(), casing, table)?;
    debug!(
        template,
        word_groups = ?spec.word_groups(),
        separator = spec.separator(),
        casing = ?spec.casing(),
        "interpreted format template"
    );
    Ok(spec)
}

/// Picks the separator: a punctuation gap first, then a non-word gap.
fn detect_separator(template: &str) -> &str {
    bounded_run(template, |c| c.is_ascii_punctuation())
        .or_else(|| bounded_run(template, |c| !is_word_char(c)))
        .unwrap_or("")
}

/// Finds the leftmost maximal run of `is_member` characters that has a
/// non-member character immediately before and after it.
fn bounded_run(template: &str, is_member: impl Fn(char) -> bool) -> Option<&str> {
    let mut after_outsider = false;
    let mut run_start: Option<usize> = None;

    for (index, c) in template.char_indices() {
        if is_member(c) {
            if run_start.is_none() && after_outsider {
                run_start = Some(index);
            }
            after_outsider = false;
        } else {
            if let Some(start) = run_start {
                return template.get(start..index);
            }
            after_outsider = true;
        }
    }

    None
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Splits a separator-free template by greedy prefix matching.
///
/// Text after the last matched category is ignored.
fn scan_concatenated<'t>(template: &'t str, table: &CategoryTable) -> Vec<&'t str> {
    let mut tokens = Vec::new();
    let mut chunk_start = 0;

    for (index, c) in template.char_indices() {
        let chunk_end = index + c.len_utf8();
        let matched = template
            .get(chunk_start..chunk_end)
            .filter(|chunk| table.contains(chunk));
        if let Some(chunk) = matched {
            tokens.push(chunk);
            chunk_start = chunk_end;
        }
    }

    tokens
}
