//! Imagen image client over the Gemini `predict` endpoint.

use super::GEMINI_API_BASE;
use super::dto::{PredictInstance, PredictParameters, PredictRequest, PredictResponse};
use crate::{ClientLimits, RequestLimiter};
use async_trait::async_trait;
use lautrec_core::{ImageRequest, ImageResponse};
use lautrec_error::{ImageError, ImageErrorKind, LautrecResult, RetryableError};
use lautrec_interface::{Health, HealthStatus, ImageDriver};
use reqwest::Client;
use std::env;
use std::time::Duration;
use tracing::{debug, instrument, warn};

/// Image generation is slower than text; give it a longer deadline.
const DEFAULT_TIMEOUT_SECS: u64 = 15;
const DEFAULT_MAX_RETRIES: usize = 2;

/// Client for Imagen image generation.
///
/// Safety rejections come back from the API as filtered predictions, not
/// HTTP errors; the client surfaces them as [`ImageErrorKind::SafetyRejected`]
/// so callers can report them per platform instead of treating them as
/// transport failures.
///
/// # Example
///
/// ```no_run
/// use lautrec_models::ImagenClient;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let client = ImagenClient::from_env("imagen-4.0-generate-001")?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct ImagenClient {
    client: Client,
    api_key: String,
    base_url: String,
    model: String,
    limiter: RequestLimiter,
    timeout: Duration,
    max_retries: usize,
}

impl ImagenClient {
    /// Create a client reading the API key from `GEMINI_API_KEY`.
    ///
    /// # Errors
    ///
    /// Returns `MissingApiKey` when the variable is unset.
    #[instrument(skip_all)]
    pub fn from_env(model: impl Into<String>) -> Result<Self, ImageError> {
        let api_key = env::var("GEMINI_API_KEY")
            .map_err(|_| ImageError::new(ImageErrorKind::MissingApiKey))?;
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

    fn resolve_model<'a>(&'a self, req: &'a ImageRequest) -> &'a str {
        req.model.as_deref().unwrap_or(&self.model)
    }

    /// One attempt against the API, no retry.
    async fn call_once(&self, req: &ImageRequest) -> Result<ImageResponse, ImageError> {
        let model = self.resolve_model(req);
        let url = format!("{}/models/{}:predict", self.base_url, model);

        let body = PredictRequest {
            instances: vec![PredictInstance {
                prompt: req.prompt.clone(),
            }],
            parameters: PredictParameters {
                sample_count: 1,
                aspect_ratio: req.aspect_ratio.as_str(),
                sample_image_size: req.size.as_str(),
                person_generation: "allow_adult",
                negative_prompt: req.negative_prompt.clone(),
            },
        };

        debug!(url = %url, model = %model, "Sending Imagen predict request");

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
            return Err(ImageError::new(ImageErrorKind::Http {
                status_code,
                message,
            }));
        }

        let parsed: PredictResponse = response.json().await.map_err(|e| {
            ImageError::new(ImageErrorKind::EmptyResponse(format!("invalid JSON: {e}")))
        })?;

        if let Some(prediction) = parsed
            .predictions
            .iter()
            .find(|p| p.bytes_base64_encoded.is_some())
        {
            return Ok(ImageResponse {
                base64_data: prediction
                    .bytes_base64_encoded
                    .clone()
                    .unwrap_or_default(),
                mime: prediction.mime_type.clone(),
            });
        }

        if let Some(reason) = parsed
            .predictions
            .iter()
            .find_map(|p| p.rai_filtered_reason.clone())
        {
            return Err(ImageError::new(ImageErrorKind::SafetyRejected(reason)));
        }

        Err(ImageError::new(ImageErrorKind::EmptyResponse(
            "no predictions returned".to_string(),
        )))
    }

    fn transport_error(&self, error: reqwest::Error) -> ImageError {
        if error.is_timeout() {
            ImageError::new(ImageErrorKind::Timeout(self.timeout.as_secs()))
        } else {
            ImageError::new(ImageErrorKind::Transport(error.to_string()))
        }
    }

    async fn render_with_retry(&self, req: &ImageRequest) -> Result<ImageResponse, ImageError> {
        use tokio_retry2::{Retry, RetryError, strategy::ExponentialBackoff, strategy::jitter};

        if self.max_retries == 0 {
            let _guard = self.limiter.acquire().await;
            return self.call_once(req).await;
        }

        let retry_strategy = ExponentialBackoff::from_millis(1000)
            .factor(2)
            .max_delay(Duration::from_secs(10))
            .map(jitter)
            .take(self.max_retries);

        Retry::spawn(retry_strategy, || async {
            let _guard = self.limiter.acquire().await;
            match self.call_once(req).await {
                Ok(response) => Ok(response),
                Err(e) if e.is_retryable() => {
                    warn!("Transient image generation error, will retry: {}", e);
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
impl ImageDriver for ImagenClient {
    #[instrument(skip(self, req), fields(model = %self.resolve_model(req)))]
    async fn render(&self, req: &ImageRequest) -> LautrecResult<ImageResponse> {
        self.render_with_retry(req).await.map_err(Into::into)
    }

    fn provider_name(&self) -> &'static str {
        "imagen"
    }

    fn model_name(&self) -> &str {
        &self.model
    }
}

#[async_trait]
impl Health for ImagenClient {
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
