//! Casing policies applied to drawn words.
//!
//! A policy is inferred from the raw tokens of a template and later applied
//! to every generated identifier. Only upper/lower distinctions are
//! considered; there is no locale-specific casing.

/// How the words of an identifier are cased.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Casing {
    /// `silent drab oyster`
    Lower,
    /// `SILENT DRAB OYSTER`
    Upper,
    /// `SilentDrabOyster`
    #[default]
    Camel,
    /// `silentDrabOyster`
    LowerCamel,
}

impl Casing {
    /// Infers the policy from raw template tokens.
    ///
    /// Rules are checked in priority order: all tokens upper-case, all tokens
    /// lower-case, a lower-case first letter followed by tokens that all start
    /// upper-case, and finally [`Casing::Camel`] for anything else. Only the
    /// first character of later tokens matters for the camel variants.
    ///
    /// # Examples
    ///
    /// ```
    /// use fancy_id::Casing;
    ///
    /// assert_eq!(Casing::infer(&["ADJECTIVE", "ANIMAL"]), Casing::Upper);
    /// assert_eq!(Casing::infer(&["adjective", "animal"]), Casing::Lower);
    /// assert_eq!(Casing::infer(&["adjective", "Animal"]), Casing::LowerCamel);
    /// assert_eq!(Casing::infer(&["Adjective", "animal"]), Casing::Camel);
    /// ```
    #[must_use]
    pub fn infer<S: AsRef<str>>(tokens: &[S]) -> Self {
        let raw: Vec<&str> = tokens.iter().map(AsRef::as_ref).collect();
        if raw.iter().all(|token| is_upper(token)) {
            return Self::Upper;
        }
        if raw.iter().all(|token| is_lower(token)) {
            return Self::Lower;
        }
        let first_is_lower = raw
            .first()
            .and_then(|token| token.chars().next())
            .is_some_and(char::is_lowercase);
        let rest_start_upper = raw
            .iter()
            .skip(1)
            .all(|token| token.chars().next().is_some_and(char::is_uppercase));
        if first_is_lower && rest_start_upper {
            Self::LowerCamel
        } else {
            Self::Camel
        }
    }

    /// Applies the policy to the word at `position` within an identifier.
    #[must_use]
    pub fn apply(self, position: usize, word: &str) -> String {
        match self {
            Self::Lower => word.to_lowercase(),
            Self::Upper => word.to_uppercase(),
            Self::Camel => capitalize(word),
            Self::LowerCamel if position == 0 => word.to_lowercase(),
            Self::LowerCamel => capitalize(word),
        }
    }
}

/// `true` when the token has a cased character and none of them are lower.
fn is_upper(token: &str) -> bool {
    token.chars().any(char::is_uppercase) && !token.chars().any(char::is_lowercase)
}

/// `true` when the token has a cased character and none of them are upper.
fn is_lower(token: &str) -> bool {
    token.chars().any(char::is_lowercase) && !token.chars().any(char::is_uppercase)
}

/// Upper-cases the first character and lower-cases the rest.
fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    chars.next().map_or_else(String::new, |first| {
        first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect()
    })
}
