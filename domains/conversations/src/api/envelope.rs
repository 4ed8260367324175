//! Result envelope returned by every facade operation
//!
//! Only two outcomes are rendered: success and not-found. Every other failure
//! is returned as an [`Error`] to the caller.

use chateai_common::{Error, Result};
use serde::Serialize;

/// Discriminated response shape, serialized with a `status` tag
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Envelope<P> {
    Success(P),
    NotFound { error: String, id: i64 },
}

impl<P> Envelope<P> {
    pub fn success(payload: P) -> Self {
        Envelope::Success(payload)
    }

    pub fn not_found(error: impl Into<String>, id: i64) -> Self {
        Envelope::NotFound {
            error: error.into(),
            id,
        }
    }

    /// Render a store outcome.
    ///
    /// `Error::NotFound` becomes the not-found envelope for `id`; any other
    /// error is passed through unchanged.
    pub fn render<T>(outcome: Result<T>, id: i64, payload: impl FnOnce(T) -> P) -> Result<Self> {
        match outcome {
            Ok(value) => Ok(Envelope::Success(payload(value))),
            Err(Error::NotFound(message)) => Ok(Envelope::not_found(message, id)),
            Err(err) => Err(err),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Envelope::Success(_))
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Envelope::NotFound { .. })
    }

    pub fn payload(&self) -> Option<&P> {
        match self {
            Envelope::Success(payload) => Some(payload),
            Envelope::NotFound { .. } => None,
        }
    }

    pub fn into_payload(self) -> Option<P> {
        match self {
            Envelope::Success(payload) => Some(payload),
            Envelope::NotFound { .. } => None,
        }
    }
}

impl<P: Serialize> Envelope<P> {
    /// Serialize to the outbound JSON string
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn to_value(&self) -> Result<serde_json::Value> {
        Ok(serde_json::to_value(self)?)
    }
}

/// Serializes as `{}`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct EmptyData {}

/// Payload for create operations
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Created {
    pub data: EmptyData,
    pub id: i64,
}

impl Created {
    pub fn new(id: i64) -> Self {
        Self {
            data: EmptyData {},
            id,
        }
    }
}

/// Payload for list operations
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Listing<T> {
    pub data: Vec<T>,
}

impl<T> Listing<T> {
    pub fn new(data: Vec<T>) -> Self {
        Self { data }
    }
}

/// Payload for a successful rename
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Renamed {
    pub rows_affected: u64,
    pub id: i64,
    pub name: String,
}

/// Payload for a successful delete
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Deleted {
    pub rows_affected: u64,
    pub id: i64,
}
