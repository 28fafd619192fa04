//! Response construction primitives for REST-style web services.
//!
//! This crate provides a mutable [`ResponseBuilder`] that accumulates a
//! status code, an entity payload and response headers (content type,
//! language, location, caching directives, cookies, entity tags) through
//! chained calls, and snapshots them into an immutable [`Response`] on
//! demand.
//!
//! Relative `Location` and `Content-Location` URIs are resolved against
//! the base URI of an explicitly supplied [`RequestContext`]; a builder
//! created outside a request scope stores them as given instead of
//! failing.
//!
//! # Example
//!
//! ```
//! use http::StatusCode;
//! use restling::ResponseBuilder;
//! use restling::header::EntityTag;
//!
//! let mut builder = ResponseBuilder::new();
//! let response = builder
//!     .status(StatusCode::OK)
//!     .media_type(mime::TEXT_PLAIN_UTF_8)
//!     .tag(EntityTag::new("v1"))
//!     .entity("hello world")
//!     .build();
//!
//! assert_eq!(response.status(), Some(StatusCode::OK));
//! assert_eq!(response.headers()["content-type"], "text/plain; charset=utf-8");
//! ```

mod builder;
mod date;
mod entity;
mod request;
mod response;
mod uri;

pub mod header;

pub use builder::ResponseBuilder;
pub use date::http_date;
pub use entity::Entity;
pub use request::RequestContext;
pub use response::Response;
