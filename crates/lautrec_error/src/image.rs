//! Image generation error types.

use crate::RetryableError;

/// Image-generation-specific error conditions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum ImageErrorKind {
    /// API key not found in environment
    #[display("GEMINI_API_KEY environment variable not set")]
    MissingApiKey,
    /// The collaborator refused the prompt on content-safety grounds.
    ///
    /// This is a reportable outcome for the requesting platform, distinct
    /// from a transport failure.
    #[display("Safety filter triggered: {}", _0)]
    SafetyRejected(String),
    /// The external call did not complete within its deadline
    #[display("Image generation timed out after {}s", _0)]
    Timeout(u64),
    /// The response arrived but carried no usable image payload
    #[display("Empty image response: {}", _0)]
    EmptyResponse(String),
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

impl ImageErrorKind {
    /// Check if this error type should be retried.
    pub fn is_retryable(&self) -> bool {
        match self {
            ImageErrorKind::Http { status_code, .. } => {
                matches!(*status_code, 408 | 429 | 500 | 502 | 503 | 504)
            }
            ImageErrorKind::Timeout(_) => true,
            ImageErrorKind::Transport(_) => true,
            _ => false,
        }
    }
}

/// Image generation error with source location tracking.
///
/// # Examples
///
/// ```
/// use lautrec_error::{ImageError, ImageErrorKind};
///
/// let err = ImageError::new(ImageErrorKind::SafetyRejected("person_generation".to_string()));
/// assert!(format!("{}", err).contains("Safety filter"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Image Error: {} at line {} in {}", kind, line, file)]
pub struct ImageError {
    /// The kind of error that occurred
    pub kind: ImageErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl ImageError {
    /// Create a new ImageError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: ImageErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}

impl RetryableError for ImageError {
    fn is_retryable(&self) -> bool {
        self.kind.is_retryable()
    }
}
