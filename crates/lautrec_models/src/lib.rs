//! External generation service clients.
//!
//! Both collaborators ride the Gemini API surface: copywriting through
//! `generateContent`, image generation through the Imagen `predict`
//! endpoint. Each client wraps its calls in a [`RequestLimiter`] and a
//! capped retry loop so upstream rate limits and transient failures stay
//! the client's problem, not the pipeline's.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod gemini;
mod limiter;

pub use gemini::{GEMINI_API_BASE, GeminiCopyClient, ImagenClient};
pub use limiter::{ClientLimits, LimiterGuard, RequestLimiter};
