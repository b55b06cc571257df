//! Platform registry error types.

/// Platform-specific error conditions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum PlatformErrorKind {
    /// Requested platform identifier is not in the registry
    #[display("Unknown platform: {}", _0)]
    Unknown(String),
    /// A platform spec failed load-time validation
    #[display("Invalid spec for {}: {}", platform, message)]
    InvalidSpec {
        /// Platform identifier with the invalid spec
        platform: String,
        /// Description of the violated invariant
        message: String,
    },
    /// The registry contains no platforms at all
    #[display("Platform registry is empty")]
    EmptyRegistry,
}

/// Platform error with source location tracking.
///
/// # Examples
///
/// ```
/// use lautrec_error::{PlatformError, PlatformErrorKind};
///
/// let err = PlatformError::new(PlatformErrorKind::Unknown("snapchat_story".to_string()));
/// assert!(format!("{}", err).contains("snapchat_story"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Platform Error: {} at line {} in {}", kind, line, file)]
pub struct PlatformError {
    /// The kind of error that occurred
    pub kind: PlatformErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl PlatformError {
    /// Create a new PlatformError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: PlatformErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }

    /// Convenience constructor for the unknown-platform case.
    #[track_caller]
    pub fn unknown(platform: impl Into<String>) -> Self {
        Self::new(PlatformErrorKind::Unknown(platform.into()))
    }
}
