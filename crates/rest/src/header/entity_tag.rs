//! Entity tag handling for the `ETag` header.

use std::fmt;
use std::str::FromStr;

use super::HeaderParseError;

/// An HTTP entity tag.
///
/// Renders as a quoted string, prefixed with `W/` for weak tags. The raw
/// value is stored unquoted and taken as given.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntityTag {
    value: String,
    weak: bool,
}

impl EntityTag {
    /// Creates a strong entity tag from the raw (unquoted) value.
    pub fn new(value: impl Into<String>) -> Self {
        Self { value: value.into(), weak: false }
    }

    /// Creates a weak entity tag from the raw (unquoted) value.
    pub fn weak(value: impl Into<String>) -> Self {
        Self { value: value.into(), weak: true }
    }

    /// Returns the raw tag value without quotes.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Returns true for weak tags.
    pub fn is_weak(&self) -> bool {
        self.weak
    }
}

impl From<&str> for EntityTag {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl fmt::Display for EntityTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.weak {
            write!(f, "W/\"{}\"", self.value)
        } else {
            write!(f, "\"{}\"", self.value)
        }
    }
}

impl FromStr for EntityTag {
    type Err = HeaderParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (weak, quoted) = match s.strip_prefix("W/") {
            Some(rest) => (true, rest),
            None => (false, s),
        };

        let value = quoted
            .strip_prefix('"')
            .and_then(|v| v.strip_suffix('"'))
            .ok_or_else(|| HeaderParseError::invalid_entity_tag(s))?;

        Ok(Self { value: value.to_string(), weak })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_quoted() {
        assert_eq!(EntityTag::new("v1").to_string(), "\"v1\"");
    }

    #[test]
    fn renders_weak_prefix() {
        assert_eq!(EntityTag::weak("v1").to_string(), "W/\"v1\"");
    }

    #[test]
    fn parses_both_forms() {
        assert_eq!("\"v1\"".parse::<EntityTag>().unwrap(), EntityTag::new("v1"));
        assert_eq!("W/\"v1\"".parse::<EntityTag>().unwrap(), EntityTag::weak("v1"));
    }

    #[test]
    fn rejects_unquoted_input() {
        assert!("v1".parse::<EntityTag>().is_err());
        assert!("\"".parse::<EntityTag>().is_err());
    }
}
