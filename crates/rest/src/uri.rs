//! Relative URI resolution against a request base URI.
//!
//! Implements the subset of RFC 3986 reference resolution that `Location`
//! and `Content-Location` headers need: merging a relative path reference
//! onto an absolute base and removing dot segments.

use http::Uri;

/// Resolves `reference` against `base`.
///
/// References that already carry a scheme are absolute and returned
/// unchanged. Otherwise a single leading `/` is stripped from the
/// reference path and the remainder is merged onto the base path, so
/// `/widgets/1` against `https://host/api/` yields
/// `https://host/api/widgets/1` rather than a double separator.
pub(crate) fn resolve_reference(base: &Uri, reference: &Uri) -> Uri {
    if reference.scheme().is_some() {
        return reference.clone();
    }

    let path = reference.path();
    let path = path.strip_prefix('/').unwrap_or(path);

    let merged = remove_dot_segments(&merge_paths(base.path(), path));
    let path_and_query = match reference.query() {
        Some(query) => format!("{merged}?{query}"),
        None => merged,
    };

    let resolved = match (base.scheme(), base.authority()) {
        (Some(scheme), Some(authority)) => format!("{scheme}://{authority}{path_and_query}"),
        _ => path_and_query,
    };
    // every component comes from an already-parsed uri
    resolved.parse().unwrap()
}

/// Merges a relative path (no leading separator) onto the base path,
/// replacing everything after the base's last segment separator.
fn merge_paths(base: &str, reference: &str) -> String {
    match base.rfind('/') {
        Some(idx) => format!("{}{}", &base[..=idx], reference),
        None => format!("/{reference}"),
    }
}

/// Removes `.` and `..` segments from an absolute path.
fn remove_dot_segments(path: &str) -> String {
    let mut segments: Vec<&str> = Vec::new();
    for segment in path.split('/') {
        match segment {
            "." => {}
            // the leading empty segment keeps the path rooted
            ".." => {
                if segments.len() > 1 {
                    segments.pop();
                }
            }
            _ => segments.push(segment),
        }
    }

    let mut result = segments.join("/");
    if (path.ends_with("/.") || path.ends_with("/..")) && !result.ends_with('/') {
        result.push('/');
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_leading_separator_before_merging() {
        let resolved = resolve_reference(&Uri::from_static("https://host/api/"), &Uri::from_static("/widgets/1"));
        assert_eq!(resolved, Uri::from_static("https://host/api/widgets/1"));
    }

    #[test]
    fn base_without_trailing_separator_replaces_last_segment() {
        let resolved = resolve_reference(&Uri::from_static("https://host/api"), &Uri::from_static("/widgets/1"));
        assert_eq!(resolved, Uri::from_static("https://host/widgets/1"));
    }

    #[test]
    fn absolute_reference_passes_through() {
        let reference = Uri::from_static("https://elsewhere/x");
        let resolved = resolve_reference(&Uri::from_static("https://host/api/"), &reference);
        assert_eq!(resolved, reference);
    }

    #[test]
    fn query_is_preserved() {
        let resolved = resolve_reference(&Uri::from_static("https://host/api/"), &Uri::from_static("/widgets?page=2"));
        assert_eq!(resolved, Uri::from_static("https://host/api/widgets?page=2"));
    }

    #[test]
    fn dot_segments_are_removed() {
        let resolved = resolve_reference(&Uri::from_static("https://host/a/b/"), &Uri::from_static("/../c/./d"));
        assert_eq!(resolved, Uri::from_static("https://host/a/c/d"));
    }

    #[test]
    fn parent_segments_do_not_escape_the_root() {
        let resolved = resolve_reference(&Uri::from_static("https://host/"), &Uri::from_static("/../../x"));
        assert_eq!(resolved, Uri::from_static("https://host/x"));
    }

    #[test]
    fn trailing_parent_segment_keeps_directory_form() {
        let resolved = resolve_reference(&Uri::from_static("https://host/a/"), &Uri::from_static("/b/.."));
        assert_eq!(resolved, Uri::from_static("https://host/a/"));
    }
}
