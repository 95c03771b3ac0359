//! Error types for the todo API client.
//!
//! # Design
//! `NotFound` gets a dedicated variant because callers frequently distinguish
//! "the item does not exist" from "the server returned an unexpected status."
//! All other non-2xx responses land in `HttpError` with the raw status code
//! and body. `Transport` covers everything that failed before a status line
//! was received.

use thiserror::Error;

use crate::types::TodoId;

/// Errors produced while building requests, executing them, or parsing
/// responses.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The server returned 404.
    #[error("resource not found")]
    NotFound,

    /// The server returned a non-2xx status other than 404.
    #[error("HTTP {status}: {body}")]
    HttpError { status: u16, body: String },

    /// The response body could not be deserialized into the expected type.
    #[error("deserialization failed: {0}")]
    Deserialization(String),

    /// The request payload could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    Serialization(String),

    /// The server answered an item request with a different item.
    #[error("response was for todo {actual}, expected {expected}")]
    IdMismatch { expected: TodoId, actual: TodoId },

    /// The request never produced a response (connection refused, DNS, I/O).
    #[error("transport failed: {0}")]
    Transport(String),
}

impl ApiError {
    /// HTTP status carried by the error, if the server answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::NotFound => Some(404),
            ApiError::HttpError { status, .. } => Some(*status),
            _ => None,
        }
    }
}
