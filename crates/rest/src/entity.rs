//! Response payload handling.
//!
//! This module provides the [`Entity`] type which carries the payload of a
//! response. An entity holds at most one contiguous byte buffer; streaming
//! bodies are the transport layer's concern and out of scope here.

use bytes::Bytes;

/// The payload of a response.
///
/// Cloning an entity shares the underlying buffer instead of copying it,
/// so a builder clone and its original observe the same payload.
#[derive(Debug, Clone, Default)]
pub struct Entity {
    kind: Kind,
}

#[derive(Debug, Clone, Default)]
enum Kind {
    #[default]
    Empty,
    Once(Bytes),
}

impl Entity {
    /// Creates an empty entity.
    pub fn empty() -> Self {
        Self { kind: Kind::Empty }
    }

    /// Creates an entity from a single byte buffer.
    pub fn once(bytes: Bytes) -> Self {
        Self { kind: Kind::Once(bytes) }
    }

    /// Returns true when no payload has been set.
    pub fn is_empty(&self) -> bool {
        matches!(self.kind, Kind::Empty)
    }

    /// Returns the payload bytes, if any.
    pub fn bytes(&self) -> Option<&Bytes> {
        match &self.kind {
            Kind::Empty => None,
            Kind::Once(bytes) => Some(bytes),
        }
    }
}

impl From<Bytes> for Entity {
    fn from(value: Bytes) -> Self {
        Self::once(value)
    }
}

impl From<String> for Entity {
    fn from(value: String) -> Self {
        Self::once(Bytes::from(value))
    }
}

impl From<&'static str> for Entity {
    fn from(value: &'static str) -> Self {
        if value.is_empty() {
            Self::empty()
        } else {
            Self::once(value.as_bytes().into())
        }
    }
}

impl From<Vec<u8>> for Entity {
    fn from(value: Vec<u8>) -> Self {
        Self::once(Bytes::from(value))
    }
}

impl From<()> for Entity {
    fn from(_: ()) -> Self {
        Self::empty()
    }
}

impl From<serde_json::Value> for Entity {
    fn from(value: serde_json::Value) -> Self {
        Self::once(Bytes::from(value.to_string()))
    }
}
