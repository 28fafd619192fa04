//! Cache directive handling for the `Cache-Control` header.

use std::fmt;

/// Directives for the `Cache-Control` response header.
///
/// Unset fields emit nothing; the rendered form is the comma-joined
/// directive list in a fixed order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CacheControl {
    pub private: bool,
    pub no_cache: bool,
    pub no_store: bool,
    pub no_transform: bool,
    pub must_revalidate: bool,
    pub proxy_revalidate: bool,
    /// Freshness lifetime in seconds.
    pub max_age: Option<u32>,
    /// Shared-cache freshness lifetime in seconds.
    pub s_max_age: Option<u32>,
}

impl fmt::Display for CacheControl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut directives: Vec<String> = Vec::new();

        if self.private {
            directives.push("private".to_string());
        }
        if self.no_cache {
            directives.push("no-cache".to_string());
        }
        if self.no_store {
            directives.push("no-store".to_string());
        }
        if self.no_transform {
            directives.push("no-transform".to_string());
        }
        if self.must_revalidate {
            directives.push("must-revalidate".to_string());
        }
        if self.proxy_revalidate {
            directives.push("proxy-revalidate".to_string());
        }
        if let Some(seconds) = self.max_age {
            directives.push(format!("max-age={seconds}"));
        }
        if let Some(seconds) = self.s_max_age {
            directives.push(format!("s-maxage={seconds}"));
        }

        f.write_str(&directives.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_directives_in_fixed_order() {
        let cache = CacheControl { private: true, no_cache: true, max_age: Some(120), ..CacheControl::default() };
        assert_eq!(cache.to_string(), "private, no-cache, max-age=120");
    }

    #[test]
    fn renders_shared_cache_directives() {
        let cache = CacheControl { must_revalidate: true, s_max_age: Some(30), ..CacheControl::default() };
        assert_eq!(cache.to_string(), "must-revalidate, s-maxage=30");
    }

    #[test]
    fn default_renders_empty() {
        assert_eq!(CacheControl::default().to_string(), "");
    }
}
