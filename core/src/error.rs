//! Error types for the study subjects client.
//!
//! # Design
//! `RequestError` covers everything that can go wrong once a request is
//! attempted. Non-2xx responses are not split by status code: they all land
//! in `HttpError` with the raw status and body for diagnostics.
//!
//! `ValidationError` is raised locally, before any request exists.

use thiserror::Error;

/// Errors returned by the subject client and its transport.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RequestError {
    /// No response was obtained: connection refused, DNS failure, broken pipe.
    #[error("no response received: {0}")]
    TransportError(String),

    /// The server answered with a non-2xx status.
    #[error("HTTP {status}: {body}")]
    HttpError { status: u16, body: String },

    /// The response body could not be deserialized into the expected type.
    #[error("deserialization failed: {0}")]
    DeserializationError(String),

    /// The request payload could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    SerializationError(String),
}

/// A draft failed its required-field checks.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("subject name is required")]
    MissingName,

    #[error("exam date is required")]
    MissingExamDate,

    #[error("at least one chapter is required")]
    NoChapters,

    #[error("difficulty must be between 1 and 5, got {0}")]
    DifficultyOutOfRange(i64),
}

impl ValidationError {
    /// Message shown to the user when a submission is rejected.
    pub const PROMPT: &'static str = "Please fill all required fields";
}
