//! Request context made available to response construction.
//!
//! A [`RequestContext`] carries the per-request state a response builder
//! consults: the absolute base URI of the request being handled. It is
//! handed to the builder explicitly rather than read from ambient global
//! state, so a builder always sees the request of the call path that
//! created it and never a concurrent one.

use http::Uri;

use crate::uri::resolve_reference;

/// Per-request state consulted when resolving relative URIs into the
/// absolute form response headers conventionally carry.
#[derive(Debug, Clone)]
pub struct RequestContext {
    base_uri: Uri,
}

impl RequestContext {
    /// Creates a context rooted at the given base URI: the scheme,
    /// authority and base path of the current request. The URI is taken
    /// as given and expected to be absolute.
    pub fn new(base_uri: Uri) -> Self {
        Self { base_uri }
    }

    /// Returns the request's base URI.
    pub fn base_uri(&self) -> &Uri {
        &self.base_uri
    }

    /// Resolves a URI reference against the request's base URI.
    ///
    /// Absolute references are returned unchanged. A relative reference
    /// has a single leading path separator stripped before resolution,
    /// so `/widgets/1` against `https://host/api/` yields
    /// `https://host/api/widgets/1`.
    pub fn resolve(&self, reference: &Uri) -> Uri {
        resolve_reference(&self.base_uri, reference)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_relative_reference() {
        let context = RequestContext::new(Uri::from_static("https://host/api/"));
        let resolved = context.resolve(&Uri::from_static("/widgets/1"));

        assert_eq!(resolved, Uri::from_static("https://host/api/widgets/1"));
    }

    #[test]
    fn absolute_reference_is_untouched() {
        let context = RequestContext::new(Uri::from_static("https://host/api/"));
        let resolved = context.resolve(&Uri::from_static("http://mirror/widgets/1"));

        assert_eq!(resolved, Uri::from_static("http://mirror/widgets/1"));
    }
}
