//! Immutable response values.

use http::{HeaderMap, StatusCode};

use crate::entity::Entity;
use crate::header::NewCookie;

/// An immutable response snapshot produced by
/// [`ResponseBuilder::build`](crate::ResponseBuilder::build).
///
/// All parts are read-only once constructed. A builder that never
/// accumulated a cookie exposes `None` here rather than an empty list;
/// consumers distinguish "no cookies were ever added" from a zero-length
/// list.
#[derive(Debug)]
pub struct Response {
    entity: Entity,
    status: Option<StatusCode>,
    headers: HeaderMap,
    cookies: Option<Vec<NewCookie>>,
}

impl Response {
    /// Assembles a response from its parts.
    pub fn new(
        entity: Entity,
        status: Option<StatusCode>,
        headers: HeaderMap,
        cookies: Option<Vec<NewCookie>>,
    ) -> Self {
        Self { entity, status, headers, cookies }
    }

    /// Returns the response payload.
    pub fn entity(&self) -> &Entity {
        &self.entity
    }

    /// Returns the status code, or `None` when never set.
    pub fn status(&self) -> Option<StatusCode> {
        self.status
    }

    /// Returns the response headers.
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// Returns the accumulated cookies, or `None` when none were added.
    pub fn cookies(&self) -> Option<&[NewCookie]> {
        self.cookies.as_deref()
    }

    /// Converts into an [`http::Response`], defaulting the status to
    /// `200 OK` when unset.
    pub fn into_http(self) -> http::Response<Entity> {
        let mut response = http::Response::new(self.entity);
        *response.status_mut() = self.status.unwrap_or(StatusCode::OK);
        *response.headers_mut() = self.headers;
        response
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ResponseBuilder;

    #[test]
    fn into_http_defaults_unset_status() {
        let response = ResponseBuilder::new().entity("ok").build().into_http();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[test]
    fn into_http_keeps_explicit_status_and_headers() {
        let mut builder = ResponseBuilder::new();
        builder.status(StatusCode::NOT_FOUND).media_type(mime::TEXT_PLAIN);

        let response = builder.build().into_http();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(response.headers()[http::header::CONTENT_TYPE], "text/plain");
    }
}
