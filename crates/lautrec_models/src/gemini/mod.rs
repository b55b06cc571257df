//! Gemini API clients for copywriting and image generation.

mod copy;
mod dto;
mod imagen;

pub use copy::GeminiCopyClient;
pub use imagen::ImagenClient;

/// Base URL of the Gemini API.
pub const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";
