//! Typed response header values.
//!
//! Response headers are stored as strings inside the header map; this
//! module provides the typed values that render into them: entity tags,
//! cache directives, cookies, language tags and content-negotiation
//! variants. Media types reuse [`mime::Mime`] directly.

mod cache_control;
mod cookie;
mod entity_tag;
mod language;
mod variant;

pub use cache_control::CacheControl;
pub use cookie::NewCookie;
pub use entity_tag::EntityTag;
pub use language::LanguageTag;
pub use variant::{Variant, vary_header};

use thiserror::Error;

/// Error raised when parsing a typed header value from its string form.
#[derive(Debug, Error)]
pub enum HeaderParseError {
    #[error("invalid entity tag: {reason}")]
    InvalidEntityTag { reason: String },

    #[error("invalid language tag: {reason}")]
    InvalidLanguageTag { reason: String },
}

impl HeaderParseError {
    pub fn invalid_entity_tag<S: ToString>(str: S) -> Self {
        Self::InvalidEntityTag { reason: str.to_string() }
    }

    pub fn invalid_language_tag<S: ToString>(str: S) -> Self {
        Self::InvalidLanguageTag { reason: str.to_string() }
    }
}
