//! Top-level error wrapper types.

use crate::{ConfigError, CopyError, CostError, HttpError, ImageError, JsonError, PlatformError};

/// This is the foundation error enum. Every Lautrec crate converts its
/// domain errors into a variant here at the crate boundary.
///
/// # Examples
///
/// ```
/// use lautrec_error::{LautrecError, HttpError};
///
/// let http_err = HttpError::new("Connection failed");
/// let err: LautrecError = http_err.into();
/// assert!(format!("{}", err).contains("HTTP Error"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum LautrecErrorKind {
    /// HTTP error
    #[from(HttpError)]
    Http(HttpError),
    /// JSON serialization/deserialization error
    #[from(JsonError)]
    Json(JsonError),
    /// Configuration error
    #[from(ConfigError)]
    Config(ConfigError),
    /// Platform registry error
    #[from(PlatformError)]
    Platform(PlatformError),
    /// Text generation error
    #[from(CopyError)]
    Copy(CopyError),
    /// Image generation error
    #[from(ImageError)]
    Image(ImageError),
    /// Cost estimation error
    #[from(CostError)]
    Cost(CostError),
}

/// Lautrec error with kind discrimination.
///
/// # Examples
///
/// ```
/// use lautrec_error::{LautrecResult, ConfigError};
///
/// fn might_fail() -> LautrecResult<()> {
///     Err(ConfigError::new("Missing field"))?
/// }
///
/// match might_fail() {
///     Ok(_) => println!("Success"),
///     Err(e) => println!("Error: {}", e),
/// }
/// ```
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("Lautrec Error: {}", _0)]
pub struct LautrecError(Box<LautrecErrorKind>);

impl LautrecError {
    /// Create a new error from a kind.
    pub fn new(kind: LautrecErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &LautrecErrorKind {
        &self.0
    }
}

// Generic From implementation for any type that converts to LautrecErrorKind
impl<T> From<T> for LautrecError
where
    T: Into<LautrecErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for Lautrec operations.
///
/// # Examples
///
/// ```
/// use lautrec_error::{LautrecResult, HttpError};
///
/// fn fetch_data() -> LautrecResult<String> {
///     Err(HttpError::new("404 Not Found"))?
/// }
/// ```
pub type LautrecResult<T> = std::result::Result<T, LautrecError>;
