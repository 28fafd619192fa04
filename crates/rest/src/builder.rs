//! The mutable response builder.
//!
//! [`ResponseBuilder`] accumulates status, entity and headers through
//! chained mutator calls and snapshots them into an immutable
//! [`Response`] on demand. One builder instance belongs to one request
//! handling path; nothing here is shared between threads.

use std::fmt;
use std::time::SystemTime;

use http::header::{
    CACHE_CONTROL, CONTENT_ENCODING, CONTENT_LANGUAGE, CONTENT_LOCATION, CONTENT_TYPE, ETAG, EXPIRES, HeaderName,
    HeaderValue, LAST_MODIFIED, LOCATION, SET_COOKIE, VARY,
};
use http::{HeaderMap, StatusCode, Uri};
use mime::Mime;
use tracing::trace;

use crate::date::http_date;
use crate::entity::Entity;
use crate::header::{CacheControl, EntityTag, LanguageTag, NewCookie, Variant, vary_header};
use crate::request::RequestContext;
use crate::response::Response;

/// A mutable accumulator for response state.
///
/// Every mutator returns `&mut Self`, so calls chain on a single
/// instance. [`build`](Self::build) snapshots the current state without
/// consuming the builder; it stays usable and mutable afterwards.
///
/// Set-style mutators replace any previous value stored under their
/// header name. [`cookie`](Self::cookie) is the one add-style mutator:
/// it appends and never deduplicates.
///
/// Cloning yields a builder with its own header map and cookie list; the
/// entity buffer is shared with the original.
#[derive(Debug, Clone, Default)]
pub struct ResponseBuilder {
    entity: Entity,
    status: Option<StatusCode>,
    headers: HeaderMap,
    cookies: Vec<NewCookie>,
    context: Option<RequestContext>,
}

impl ResponseBuilder {
    /// Creates an empty builder with no request context.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty builder that resolves relative `Location` and
    /// `Content-Location` URIs against the given request's base URI.
    pub fn for_request(context: RequestContext) -> Self {
        Self { context: Some(context), ..Self::default() }
    }

    /// Sets the status code.
    pub fn status(&mut self, status: StatusCode) -> &mut Self {
        self.status = Some(status);
        self
    }

    /// Sets the response payload.
    pub fn entity(&mut self, entity: impl Into<Entity>) -> &mut Self {
        self.entity = entity.into();
        self
    }

    /// Sets a JSON payload and the matching `Content-Type`.
    pub fn json(&mut self, value: serde_json::Value) -> &mut Self {
        self.headers.insert(CONTENT_TYPE, render(&mime::APPLICATION_JSON));
        self.entity = Entity::from(value);
        self
    }

    /// Sets the `Content-Type` header.
    pub fn media_type(&mut self, media_type: Mime) -> &mut Self {
        self.headers.insert(CONTENT_TYPE, render(&media_type));
        self
    }

    /// Sets the `Content-Language` header.
    pub fn language(&mut self, language: LanguageTag) -> &mut Self {
        self.headers.insert(CONTENT_LANGUAGE, render(&language));
        self
    }

    /// Sets the `ETag` header.
    pub fn tag(&mut self, tag: impl Into<EntityTag>) -> &mut Self {
        self.headers.insert(ETAG, render(&tag.into()));
        self
    }

    /// Sets the `Last-Modified` header.
    pub fn last_modified(&mut self, time: SystemTime) -> &mut Self {
        self.headers.insert(LAST_MODIFIED, http_date(time));
        self
    }

    /// Sets the `Expires` header.
    pub fn expires(&mut self, time: SystemTime) -> &mut Self {
        self.headers.insert(EXPIRES, http_date(time));
        self
    }

    /// Sets the `Cache-Control` header.
    pub fn cache_control(&mut self, cache_control: CacheControl) -> &mut Self {
        self.headers.insert(CACHE_CONTROL, render(&cache_control));
        self
    }

    /// Sets the `Location` header.
    ///
    /// A relative URI is resolved against the request context's base URI
    /// when the builder has one; without a context it is stored as
    /// given. See [`RequestContext::resolve`].
    pub fn location(&mut self, location: Uri) -> &mut Self {
        let location = self.resolve(location);
        self.headers.insert(LOCATION, render(&location));
        self
    }

    /// Sets the `Content-Location` header, with the same relative-URI
    /// handling as [`location`](Self::location).
    pub fn content_location(&mut self, location: Uri) -> &mut Self {
        let location = self.resolve(location);
        self.headers.insert(CONTENT_LOCATION, render(&location));
        self
    }

    /// Sets the content type, language and encoding headers carried by
    /// one selected variant. Fields the variant leaves unset do not
    /// touch the corresponding header.
    pub fn variant(&mut self, variant: Variant) -> &mut Self {
        if let Some(media_type) = variant.media_type {
            self.media_type(media_type);
        }
        if let Some(language) = variant.language {
            self.language(language);
        }
        if let Some(encoding) = variant.encoding {
            self.headers.insert(CONTENT_ENCODING, HeaderValue::from_str(&encoding).unwrap());
        }
        self
    }

    /// Sets the `Vary` header advertised for a list of variants.
    ///
    /// The computed value replaces any previous `Vary` header; a list
    /// with no negotiable dimension still replaces it, with an empty
    /// value.
    pub fn variants(&mut self, variants: &[Variant]) -> &mut Self {
        let value = match vary_header(variants) {
            Some(vary) => HeaderValue::from_str(&vary).unwrap(),
            None => HeaderValue::from_static(""),
        };
        self.headers.insert(VARY, value);
        self
    }

    /// Sets an arbitrary header, replacing any previous values stored
    /// under the same name.
    pub fn header(&mut self, name: HeaderName, value: HeaderValue) -> &mut Self {
        self.headers.insert(name, value);
        self
    }

    /// Appends a cookie. Earlier cookies are kept, duplicates included.
    pub fn cookie(&mut self, cookie: NewCookie) -> &mut Self {
        self.headers.append(SET_COOKIE, render(&cookie));
        self.cookies.push(cookie);
        self
    }

    /// Snapshots the accumulated state into an immutable [`Response`].
    ///
    /// The builder is left untouched and can keep accumulating; later
    /// mutations do not affect responses already built.
    pub fn build(&self) -> Response {
        let cookies = (!self.cookies.is_empty()).then(|| self.cookies.clone());
        Response::new(self.entity.clone(), self.status, self.headers.clone(), cookies)
    }

    fn resolve(&self, reference: Uri) -> Uri {
        if reference.scheme().is_some() {
            return reference;
        }
        match &self.context {
            Some(context) => context.resolve(&reference),
            None => {
                trace!(uri = %reference, "no request context, storing relative uri as given");
                reference
            }
        }
    }
}

fn render(value: &impl fmt::Display) -> HeaderValue {
    HeaderValue::from_str(&value.to_string()).unwrap()
}
