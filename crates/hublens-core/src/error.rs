//! Error types for the hublens libraries.
//!
//! This module provides a unified error type with explicit variants for
//! input validation, upstream API failures and response decoding failures,
//! plus the machine-readable codes surfaced to API consumers.

use thiserror::Error;

/// Machine-readable error codes surfaced to API consumers.
///
/// Every error collapses to one of two codes: bad caller input, or a
/// failure reaching or reading the upstream GitHub API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    /// Caller-supplied input is out of contract.
    ValidationError,
    /// An upstream call or response decode failed.
    InternalApiError,
}

impl ErrorCode {
    /// Returns the wire representation of this code.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::ValidationError => "VALIDATION_ERROR",
            ErrorCode::InternalApiError => "INTERNAL_API_ERROR",
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The unified error type for hublens operations.
#[derive(Debug, Error)]
pub enum Error {
    /// Input validation errors (bad page size, empty token).
    #[error("{message}")]
    Validation { message: String },

    /// Upstream API errors (transport, HTTP status, GraphQL errors).
    #[error("upstream error: {0}")]
    Upstream(#[from] UpstreamError),

    /// An operation-level failure wrapping its upstream cause.
    #[error("{message}")]
    Api {
        message: String,
        #[source]
        source: Option<Box<Error>>,
    },

    /// A response body did not match the expected shape.
    #[error("failed to parse schema: {0}")]
    Decode(#[from] DecodeError),
}

impl Error {
    /// Create a validation error with a caller-facing message.
    pub fn validation(message: impl Into<String>) -> Self {
        Error::Validation {
            message: message.into(),
        }
    }

    /// Wrap an error with an operation-level message.
    pub fn api(message: impl Into<String>, source: Error) -> Self {
        Error::Api {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Returns the error code surfaced to API consumers.
    pub fn code(&self) -> ErrorCode {
        match self {
            Error::Validation { .. } => ErrorCode::ValidationError,
            Error::Upstream(_) | Error::Api { .. } | Error::Decode(_) => {
                ErrorCode::InternalApiError
            }
        }
    }
}

/// Failures reaching or reading the upstream GitHub API.
///
/// Constructed by the transport layer; the core crate stays free of any
/// HTTP client dependency.
#[derive(Debug, Error)]
pub enum UpstreamError {
    /// Network connection failed.
    #[error("connection failed: {message}")]
    Connection { message: String },

    /// Request timed out.
    #[error("request timed out")]
    Timeout,

    /// Generic HTTP transport error.
    #[error("HTTP error: {message}")]
    Http { message: String },

    /// Non-success HTTP status from the upstream.
    #[error("HTTP {status}: {message}")]
    Status { status: u16, message: String },

    /// The GraphQL response carried errors instead of data.
    #[error("GraphQL error: {}", .messages.join("; "))]
    GraphQl { messages: Vec<String> },
}

/// A response body failed validation against its expected shape.
///
/// The message carries the violating field path as reported by the
/// deserializer (missing field, invalid type, and so on).
#[derive(Debug, Error)]
#[error("{message}")]
pub struct DecodeError {
    pub message: String,
}

impl DecodeError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
