//! Error types for the notes API client.
//!
//! # Design
//! `NotFound` gets a dedicated variant because callers frequently distinguish
//! "the note does not exist" from "the server returned an unexpected status."
//! All other non-2xx responses land in `Http` with the raw status code and
//! body. Nothing here is retried; every error reaches the caller as-is.

use thiserror::Error;

/// Errors returned by `NotesApi` parse methods and by `NotesBackend`
/// implementations.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The server returned 404.
    #[error("note not found")]
    NotFound,

    /// The server returned a non-2xx status other than 404.
    #[error("HTTP {status}: {body}")]
    Http { status: u16, body: String },

    /// The request could not be sent or the response body could not be read.
    #[error("transport failed: {0}")]
    Transport(String),

    /// The response body could not be deserialized into the expected type.
    #[error("deserialization failed: {0}")]
    Deserialization(String),

    /// The request payload could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    Serialization(String),
}
