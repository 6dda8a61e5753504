//! Error types for backend fetches
//!
//! Provides unified error handling using thiserror.
//!
//! Cache store operations never fail (an absent key is a normal outcome),
//! so the only fallible paths in this crate are the network calls against
//! the backend data source. Fetch failures are surfaced to the caller of
//! `get_or_fetch`, never cached, and never retried automatically.

use thiserror::Error;

// == Backend Error Enum ==
/// Unified error type for backend data source calls.
#[derive(Error, Debug)]
pub enum BackendError {
    /// Transport-level failure (connection, timeout, TLS)
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Backend responded with a non-success status
    #[error("backend responded with status {0}")]
    Status(u16),

    /// Response body did not match the expected shape
    #[error("malformed response: {0}")]
    MalformedResponse(String),
}

// == Result Type Alias ==
/// Convenience Result type for backend calls.
pub type Result<T> = std::result::Result<T, BackendError>;
