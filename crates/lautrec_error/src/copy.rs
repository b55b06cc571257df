//! Copywriting (text generation) error types and retry logic.

/// Text-generation-specific error conditions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum CopyErrorKind {
    /// API key not found in environment
    #[display("GEMINI_API_KEY environment variable not set")]
    MissingApiKey,
    /// The external call did not complete within its deadline
    #[display("Text generation timed out after {}s", _0)]
    Timeout(u64),
    /// The collaborator answered, but the response could not be structured
    #[display("Text generation rejected: {}", _0)]
    Rejected(String),
    /// HTTP error with status code and message
    #[display("HTTP {} error: {}", status_code, message)]
    Http {
        /// HTTP status code
        status_code: u16,
        /// Error message
        message: String,
    },
    /// Network-level failure before any HTTP status was received
    #[display("Transport failure: {}", _0)]
    Transport(String),
}

impl CopyErrorKind {
    /// Check if this error type should be retried.
    pub fn is_retryable(&self) -> bool {
        match self {
            CopyErrorKind::Http { status_code, .. } => {
                matches!(*status_code, 408 | 429 | 500 | 502 | 503 | 504)
            }
            CopyErrorKind::Timeout(_) => true,
            CopyErrorKind::Transport(_) => true,
            _ => false,
        }
    }
}

/// Copywriting error with source location tracking.
///
/// # Examples
///
/// ```
/// use lautrec_error::{CopyError, CopyErrorKind};
///
/// let err = CopyError::new(CopyErrorKind::MissingApiKey);
/// assert!(format!("{}", err).contains("GEMINI_API_KEY"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Copy Error: {} at line {} in {}", kind, line, file)]
pub struct CopyError {
    /// The kind of error that occurred
    pub kind: CopyErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl CopyError {
    /// Create a new CopyError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: CopyErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}

/// Trait for errors that support retry logic.
///
/// This trait allows error types to specify whether a failed external call
/// should be attempted again. Transient conditions (503, 429, timeouts,
/// connection resets) return true; permanent conditions (401, 400,
/// malformed responses) return false.
///
/// # Examples
///
/// ```
/// use lautrec_error::{CopyError, CopyErrorKind, RetryableError};
///
/// let err = CopyError::new(CopyErrorKind::Http {
///     status_code: 503,
///     message: "Service unavailable".to_string(),
/// });
///
/// assert!(err.is_retryable());
/// ```
pub trait RetryableError {
    /// Returns true if this error should trigger a retry.
    fn is_retryable(&self) -> bool;
}

impl RetryableError for CopyError {
    fn is_retryable(&self) -> bool {
        self.kind.is_retryable()
    }
}
