//! API-boundary error types.

use thiserror::Error;

/// Result type alias using `ApiError`.
pub type ApiResult<T> = Result<T, ApiError>;

/// Errors surfaced by the data-fetch boundary and the export pipeline.
///
/// Derived-state computation never fails on well-typed input; only I/O
/// against the remote API produces these.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Expected absence (e.g. no budget for the requested period).
    #[error("Resource not found")]
    NotFound,

    /// No valid credential available; no request was attempted.
    #[error("Not authenticated")]
    Unauthenticated,

    /// The request could not complete (DNS, connect, timeout).
    #[error("Network failure: {0}")]
    Network(String),

    /// The server answered with a non-success status and a diagnostic.
    #[error("Server rejected request ({status}): {detail}")]
    ServerRejected {
        /// HTTP status code.
        status: u16,
        /// Diagnostic text from the response body.
        detail: String,
    },

    /// The response body did not match the expected shape.
    #[error("Malformed response: {0}")]
    MalformedResponse(String),
}

impl ApiError {
    /// Returns the error code for logs and user-facing messages.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::NotFound => "NOT_FOUND",
            Self::Unauthenticated => "UNAUTHENTICATED",
            Self::Network(_) => "NETWORK_FAILURE",
            Self::ServerRejected { .. } => "SERVER_REJECTED",
            Self::MalformedResponse(_) => "MALFORMED_RESPONSE",
        }
    }

    /// True when the error represents an expected empty state rather than
    /// a failure the user needs to see.
    #[must_use]
    pub const fn is_expected_absence(&self) -> bool {
        matches!(self, Self::NotFound)
    }

    /// One-line guidance for the user. Network and server-side failures
    /// deliberately read differently: only the former is worth an
    /// immediate retry.
    #[must_use]
    pub const fn retry_guidance(&self) -> &'static str {
        match self {
            Self::NotFound => "Nothing here yet.",
            Self::Unauthenticated => "Sign in again, then retry.",
            Self::Network(_) => "Check your connection and retry.",
            Self::ServerRejected { .. } => "The server refused the request; retrying is unlikely to help.",
            Self::MalformedResponse(_) => "The server sent an unexpected response; try again later.",
        }
    }
}
