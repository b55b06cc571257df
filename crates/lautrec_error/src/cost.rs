//! Cost estimation error types.

/// Cost-estimation-specific error conditions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum CostErrorKind {
    /// A resource count was negative
    #[display("Negative count for {}: {}", field, value)]
    NegativeCount {
        /// Name of the offending request field
        field: &'static str,
        /// The rejected value
        value: i64,
    },
    /// A model identifier did not match any price book entry
    #[display("Unknown model: {}", _0)]
    UnknownModel(String),
}

/// Cost estimation error with source location tracking.
///
/// # Examples
///
/// ```
/// use lautrec_error::{CostError, CostErrorKind};
///
/// let err = CostError::new(CostErrorKind::NegativeCount {
///     field: "images_1k",
///     value: -3,
/// });
/// assert!(format!("{}", err).contains("images_1k"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Cost Error: {} at line {} in {}", kind, line, file)]
pub struct CostError {
    /// The kind of error that occurred
    pub kind: CostErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl CostError {
    /// Create a new CostError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: CostErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
