//! Error types for the Lautrec library.
//!
//! This crate provides the foundation error types used throughout the Lautrec
//! ecosystem.
//!
//! # Error Hierarchy
//!
//! All errors follow the `ErrorKind` + wrapper struct pattern for clean error handling:
//! - `*ErrorKind` enum defines specific error conditions
//! - `*Error` struct wraps the kind with source location tracking
//! - All errors use `#[track_caller]` for automatic location capture
//!
//! # Examples
//!
//! ```
//! use lautrec_error::{LautrecResult, HttpError};
//!
//! fn fetch_data() -> LautrecResult<String> {
//!     Err(HttpError::new("Connection refused"))?
//! }
//!
//! match fetch_data() {
//!     Ok(data) => println!("Got: {}", data),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod http;
mod json;
mod config;
mod platform;
mod copy;
mod image;
mod cost;
mod error;

pub use http::HttpError;
pub use json::JsonError;
pub use config::ConfigError;
pub use platform::{PlatformError, PlatformErrorKind};
pub use copy::{CopyError, CopyErrorKind, RetryableError};
pub use image::{ImageError, ImageErrorKind};
pub use cost::{CostError, CostErrorKind};
pub use error::{LautrecError, LautrecErrorKind, LautrecResult};
