//! Content-negotiation variants and `Vary` header computation.

use mime::Mime;

use super::LanguageTag;

/// One representation a resource can serve during content negotiation.
///
/// Every field is optional; a variant only contributes the dimensions it
/// actually sets.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Variant {
    pub media_type: Option<Mime>,
    pub language: Option<LanguageTag>,
    pub encoding: Option<String>,
}

impl Variant {
    /// Creates a variant that only sets a media type.
    pub fn media_type(media_type: Mime) -> Self {
        Self { media_type: Some(media_type), ..Self::default() }
    }

    /// Creates a variant that only sets a language.
    pub fn language(language: LanguageTag) -> Self {
        Self { language: Some(language), ..Self::default() }
    }

    /// Creates a variant that only sets a content encoding.
    pub fn encoding(encoding: impl Into<String>) -> Self {
        Self { encoding: Some(encoding.into()), ..Self::default() }
    }
}

/// Computes the `Vary` header value advertised for a list of variants.
///
/// Scans the whole list once and emits `Accept`, `Accept-Language` and
/// `Accept-Encoding` in that fixed order for each dimension at least one
/// variant sets, joined by `", "`. Returns `None` when no variant sets
/// any dimension.
pub fn vary_header(variants: &[Variant]) -> Option<String> {
    let mut accept = false;
    let mut accept_language = false;
    let mut accept_encoding = false;

    for variant in variants {
        accept |= variant.media_type.is_some();
        accept_language |= variant.language.is_some();
        accept_encoding |= variant.encoding.is_some();
    }

    let mut tokens = Vec::new();
    if accept {
        tokens.push("Accept");
    }
    if accept_language {
        tokens.push("Accept-Language");
    }
    if accept_encoding {
        tokens.push("Accept-Encoding");
    }

    if tokens.is_empty() { None } else { Some(tokens.join(", ")) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_list_has_no_vary_value() {
        assert_eq!(vary_header(&[]), None);
    }

    #[test]
    fn media_type_alone_varies_on_accept() {
        assert_eq!(vary_header(&[Variant::media_type(mime::TEXT_PLAIN)]).as_deref(), Some("Accept"));
    }

    #[test]
    fn token_order_is_fixed_regardless_of_input_order() {
        let variants = [
            Variant::encoding("gzip"),
            Variant::language(LanguageTag::new("en")),
            Variant::media_type(mime::TEXT_PLAIN),
        ];

        assert_eq!(vary_header(&variants).as_deref(), Some("Accept, Accept-Language, Accept-Encoding"));
    }

    #[test]
    fn dimensions_are_ored_across_the_list() {
        let variants = [Variant::media_type(mime::TEXT_PLAIN), Variant::media_type(mime::APPLICATION_JSON)];
        assert_eq!(vary_header(&variants).as_deref(), Some("Accept"));
    }
}
