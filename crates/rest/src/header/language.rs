//! Language tag handling for the `Content-Language` header.

use std::fmt;
use std::str::FromStr;

use super::HeaderParseError;

/// A natural-language tag such as `en-US`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageTag(String);

impl LanguageTag {
    /// Creates a language tag from the given value, stored as given.
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Returns the tag as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LanguageTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for LanguageTag {
    type Err = HeaderParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() || s.contains(char::is_whitespace) {
            return Err(HeaderParseError::invalid_language_tag(s));
        }
        Ok(Self(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_simple_tag() {
        assert_eq!("en-US".parse::<LanguageTag>().unwrap(), LanguageTag::new("en-US"));
    }

    #[test]
    fn rejects_empty_and_spaced_input() {
        assert!("".parse::<LanguageTag>().is_err());
        assert!("en US".parse::<LanguageTag>().is_err());
    }
}
