//! Driver traits for text and image generation backends.

use crate::HealthStatus;
use async_trait::async_trait;
use lautrec_core::{CopyRequest, CopyResponse, ImageRequest, ImageResponse};
use lautrec_error::LautrecResult;

/// Core trait for copywriting (text generation) backends.
///
/// One call per content piece; retry policy, rate limiting, and timeouts
/// are the driver's concern, never the orchestrator's.
#[async_trait]
pub trait CopyDriver: Send + Sync {
    /// Generate marketing copy for the given prompt.
    async fn write_copy(&self, req: &CopyRequest) -> LautrecResult<CopyResponse>;

    /// Provider name (e.g., "gemini").
    fn provider_name(&self) -> &'static str;

    /// Default model identifier (e.g., "gemini-2.5-flash").
    fn model_name(&self) -> &str;
}

/// Core trait for image generation backends.
#[async_trait]
pub trait ImageDriver: Send + Sync {
    /// Render an image for the given prompt and format.
    ///
    /// A content-safety refusal surfaces as an error kind the caller maps
    /// to a failed-but-reported artifact; it must not be conflated with a
    /// transport failure.
    async fn render(&self, req: &ImageRequest) -> LautrecResult<ImageResponse>;

    /// Provider name (e.g., "imagen").
    fn provider_name(&self) -> &'static str;

    /// Default model identifier (e.g., "imagen-4.0-generate-001").
    fn model_name(&self) -> &str;
}

/// Trait for backends that support health checks.
#[async_trait]
pub trait Health: Send + Sync {
    /// Check if the backend is available and functioning.
    async fn health(&self) -> LautrecResult<HealthStatus>;
}
