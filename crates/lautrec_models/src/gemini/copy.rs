//! Gemini copywriting client over the `generateContent` endpoint.

use super::GEMINI_API_BASE;
use super::dto::{
    Content, GenerateContentRequest, GenerateContentResponse, GenerationConfig, Part,
};
use crate::{ClientLimits, RequestLimiter};
use async_trait::async_trait;
use lautrec_core::{CopyRequest, CopyResponse};
use lautrec_error::{CopyError, CopyErrorKind, LautrecResult, RetryableError};
use lautrec_interface::{CopyDriver, Health, HealthStatus};
use reqwest::Client;
use std::env;
use std::time::Duration;
use tracing::{debug, instrument, warn};

/// Default request deadline for copywriting calls.
const DEFAULT_TIMEOUT_SECS: u64 = 8;
/// Retries are capped; a platform that keeps failing is reported, not hammered.
const DEFAULT_MAX_RETRIES: usize = 2;

/// Client for Gemini text generation.
///
/// Each call is bounded by a per-request timeout and passes through the
/// client's [`RequestLimiter`]. Transient failures (429, 5xx, timeouts,
/// connection resets) retry with jittered exponential backoff, capped at
/// [`DEFAULT_MAX_RETRIES`]; permanent failures return immediately.
///
/// # Example
///
/// ```no_run
/// use lautrec_models::GeminiCopyClient;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let client = GeminiCopyClient::from_env("gemini-2.5-flash")?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct GeminiCopyClient {
    client: Client,
    api_key: String,
    base_url: String,
    model: String,
    limiter: RequestLimiter,
    timeout: Duration,
    max_retries: usize,
}

impl GeminiCopyClient {
    /// Create a client reading the API key from `GEMINI_API_KEY`.
    ///
    /// # Errors
    ///
    /// Returns `MissingApiKey` when the variable is unset. This is a
    /// startup-time configuration error, not a per-request condition.
    #[instrument(skip_all)]
    pub fn from_env(model: impl Into<String>) -> Result<Self, CopyError> {
        let api_key =
            env::var("GEMINI_API_KEY").map_err(|_| CopyError::new(CopyErrorKind::MissingApiKey))?;
        Ok(Self::with_api_key(api_key, model))
    }

    /// Create a client with an explicit API key.
    pub fn with_api_key(api_key: String, model: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            api_key,
            base_url: GEMINI_API_BASE.to_string(),
            model: model.into(),
            limiter: RequestLimiter::new(ClientLimits::default()),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            max_retries: DEFAULT_MAX_RETRIES,
        }
    }

    /// Override the per-request deadline.
    pub fn with_timeout(mut self, seconds: u64) -> Self {
        self.timeout = Duration::from_secs(seconds);
        self
    }

    /// Override the retry cap. Zero disables retry entirely.
    pub fn with_max_retries(mut self, max_retries: usize) -> Self {
        self.max_retries = max_retries;
        self
    }

    /// Override the request limits.
    pub fn with_limits(mut self, limits: ClientLimits) -> Self {
        self.limiter = RequestLimiter::new(limits);
        self
    }

    /// Point the client at a different API base (used by tests).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    fn resolve_model<'a>(&'a self, req: &'a CopyRequest) -> &'a str {
        req.model.as_deref().unwrap_or(&self.model)
    }

    /// One attempt against the API, no retry.
    async fn call_once(&self, req: &CopyRequest) -> Result<CopyResponse, CopyError> {
        let model = self.resolve_model(req);
        let url = format!("{}/models/{}:generateContent", self.base_url, model);

        let body = GenerateContentRequest {
            contents: vec![Content {
                role: "user",
                parts: vec![Part {
                    text: req.prompt.clone(),
                }],
            }],
            generation_config: Some(GenerationConfig {
                max_output_tokens: req.max_tokens,
                temperature: req.temperature,
            }),
        };

        debug!(url = %url, model = %model, "Sending Gemini generateContent request");

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", &self.api_key)
            .timeout(self.timeout)
            .json(&body)
            .send()
            .await
            .map_err(|e| self.transport_error(e))?;

        if !response.status().is_success() {
            let status_code = response.status().as_u16();
            let message = response.text().await.unwrap_or_default();
            return Err(CopyError::new(CopyErrorKind::Http {
                status_code,
                message,
            }));
        }

        let parsed: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| CopyError::new(CopyErrorKind::Rejected(format!("invalid JSON: {e}"))))?;

        let tokens_used = parsed
            .usage_metadata
            .as_ref()
            .and_then(|usage| usage.total_token_count);

        match parsed.first_text() {
            Some(text) => Ok(CopyResponse { text, tokens_used }),
            None => {
                let reason = parsed
                    .prompt_feedback
                    .and_then(|feedback| feedback.block_reason)
                    .unwrap_or_else(|| "no candidates returned".to_string());
                Err(CopyError::new(CopyErrorKind::Rejected(reason)))
            }
        }
    }

    fn transport_error(&self, error: reqwest::Error) -> CopyError {
        if error.is_timeout() {
            CopyError::new(CopyErrorKind::Timeout(self.timeout.as_secs()))
        } else {
            CopyError::new(CopyErrorKind::Transport(error.to_string()))
        }
    }

    async fn generate_with_retry(&self, req: &CopyRequest) -> Result<CopyResponse, CopyError> {
        use tokio_retry2::{Retry, RetryError, strategy::ExponentialBackoff, strategy::jitter};

        if self.max_retries == 0 {
            let _guard = self.limiter.acquire().await;
            return self.call_once(req).await;
        }

        let retry_strategy = ExponentialBackoff::from_millis(500)
            .factor(2)
            .max_delay(Duration::from_secs(8))
            .map(jitter)
            .take(self.max_retries);

        Retry::spawn(retry_strategy, || async {
            let _guard = self.limiter.acquire().await;
            match self.call_once(req).await {
                Ok(response) => Ok(response),
                Err(e) if e.is_retryable() => {
                    warn!("Transient copywriting error, will retry: {}", e);
                    Err(RetryError::Transient {
                        err: e,
                        retry_after: None,
                    })
                }
                Err(e) => Err(RetryError::Permanent(e)),
            }
        })
        .await
    }
}

#[async_trait]
impl CopyDriver for GeminiCopyClient {
    #[instrument(skip(self, req), fields(model = %self.resolve_model(req)))]
    async fn write_copy(&self, req: &CopyRequest) -> LautrecResult<CopyResponse> {
        self.generate_with_retry(req).await.map_err(Into::into)
    }

    fn provider_name(&self) -> &'static str {
        "gemini"
    }

    fn model_name(&self) -> &str {
        &self.model
    }
}

#[async_trait]
impl Health for GeminiCopyClient {
    async fn health(&self) -> LautrecResult<HealthStatus> {
        let url = format!("{}/models", self.base_url);
        let response = self
            .client
            .get(&url)
            .header("x-goog-api-key", &self.api_key)
            .query(&[("pageSize", "1")])
            .timeout(Duration::from_secs(5))
            .send()
            .await;

        let status = match response {
            Ok(resp) if resp.status().is_success() => HealthStatus::Healthy,
            Ok(resp) => HealthStatus::Unhealthy {
                message: format!("models endpoint returned {}", resp.status()),
            },
            Err(e) => HealthStatus::Unhealthy {
                message: e.to_string(),
            },
        };
        Ok(status)
    }
}
