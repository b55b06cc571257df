// Mock drivers for pipeline tests.
//
// These implement the interface traits without any network access,
// scripting replies per platform so tests can exercise partial-failure
// isolation deterministically.

use async_trait::async_trait;
use lautrec_core::{CopyRequest, CopyResponse, ImageRequest, ImageResponse};
use lautrec_error::{CopyError, CopyErrorKind, ImageError, ImageErrorKind, LautrecResult};
use lautrec_interface::{CopyDriver, ImageDriver};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

/// A draft reply that fits every bundled platform's ceilings.
pub const VALID_DRAFT: &str =
    r#"{"content": "Fresh espresso, zero effort.", "hashtags": ["espresso", "ai"], "cta": "Try it today"}"#;

enum CopyReply {
    Success(String),
    Failure(CopyErrorKind),
}

/// Mock copywriting driver with per-platform scripted replies.
///
/// The pipeline embeds the platform identifier in every prompt, so
/// replies are keyed on a marker substring of the prompt.
pub struct MockCopyDriver {
    default_reply: CopyReply,
    scripted: Vec<(String, CopyReply)>,
    delays: Vec<(String, Duration)>,
    calls: Arc<AtomicUsize>,
}

impl MockCopyDriver {
    pub fn new_success(text: impl Into<String>) -> Self {
        Self {
            default_reply: CopyReply::Success(text.into()),
            scripted: Vec::new(),
            delays: Vec::new(),
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn respond_for(mut self, marker: impl Into<String>, text: impl Into<String>) -> Self {
        self.scripted
            .push((marker.into(), CopyReply::Success(text.into())));
        self
    }

    pub fn fail_for(mut self, marker: impl Into<String>, kind: CopyErrorKind) -> Self {
        self.scripted.push((marker.into(), CopyReply::Failure(kind)));
        self
    }

    pub fn delay_for(mut self, marker: impl Into<String>, delay: Duration) -> Self {
        self.delays.push((marker.into(), delay));
        self
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn call_counter(&self) -> Arc<AtomicUsize> {
        Arc::clone(&self.calls)
    }
}

#[async_trait]
impl CopyDriver for MockCopyDriver {
    async fn write_copy(&self, req: &CopyRequest) -> LautrecResult<CopyResponse> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        for (marker, delay) in &self.delays {
            if req.prompt.contains(marker.as_str()) {
                tokio::time::sleep(*delay).await;
            }
        }

        let reply = self
            .scripted
            .iter()
            .find(|(marker, _)| req.prompt.contains(marker.as_str()))
            .map(|(_, reply)| reply)
            .unwrap_or(&self.default_reply);

        match reply {
            CopyReply::Success(text) => Ok(CopyResponse {
                text: text.clone(),
                tokens_used: Some(500),
            }),
            CopyReply::Failure(kind) => Err(CopyError::new(kind.clone()).into()),
        }
    }

    fn provider_name(&self) -> &'static str {
        "mock-gemini"
    }

    fn model_name(&self) -> &str {
        "mock-gemini"
    }
}

enum ImageReply {
    Success,
    Failure(ImageErrorKind),
}

/// Mock image driver with per-platform scripted failures.
pub struct MockImageDriver {
    scripted: Vec<(String, ImageReply)>,
    calls: Arc<AtomicUsize>,
}

impl MockImageDriver {
    pub fn new_success() -> Self {
        Self {
            scripted: Vec::new(),
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn fail_for(mut self, marker: impl Into<String>, kind: ImageErrorKind) -> Self {
        self.scripted.push((marker.into(), ImageReply::Failure(kind)));
        self
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn call_counter(&self) -> Arc<AtomicUsize> {
        Arc::clone(&self.calls)
    }
}

#[async_trait]
impl ImageDriver for MockImageDriver {
    async fn render(&self, req: &ImageRequest) -> LautrecResult<ImageResponse> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        let reply = self
            .scripted
            .iter()
            .find(|(marker, _)| req.prompt.contains(marker.as_str()))
            .map(|(_, reply)| reply)
            .unwrap_or(&ImageReply::Success);

        match reply {
            ImageReply::Success => Ok(ImageResponse {
                base64_data: "aVZCT1J3MEtHZ28=".to_string(),
                mime: Some("image/png".to_string()),
            }),
            ImageReply::Failure(kind) => Err(ImageError::new(kind.clone()).into()),
        }
    }

    fn provider_name(&self) -> &'static str {
        "mock-imagen"
    }

    fn model_name(&self) -> &str {
        "mock-imagen-4.0"
    }
}
