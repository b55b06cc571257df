//! Image composition: prompt, delegate, degrade failures to artifacts.

use crate::prompt::image_prompt;
use lautrec_core::{CampaignBrief, ImageArtifact, ImageRequest, ImageSize};
use lautrec_error::{ImageErrorKind, LautrecError, LautrecErrorKind};
use lautrec_interface::ImageDriver;
use lautrec_platforms::PlatformSpec;
use lautrec_pricing::{CostEstimator, ImageModel};
use std::sync::Arc;
use tracing::{instrument, warn};

/// Produces a platform-dimensioned image by delegating to the image
/// collaborator exactly once per platform.
///
/// Every failure degrades to a failed-but-reported [`ImageArtifact`]:
/// a safety rejection and a transport failure both set `success = false`
/// with a `failure_reason`, and neither aborts the batch or invalidates
/// copy that was already generated.
#[derive(Clone, derive_new::new)]
pub struct ImageComposer {
    driver: Arc<dyn ImageDriver>,
    estimator: Arc<CostEstimator>,
}

impl std::fmt::Debug for ImageComposer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ImageComposer")
            .field("provider", &self.driver.provider_name())
            .field("model", &self.driver.model_name())
            .finish_non_exhaustive()
    }
}

impl ImageComposer {
    /// Generate an image artifact for one platform.
    ///
    /// Always returns an artifact; failures are recorded on it rather
    /// than raised. Only successful generations carry a cost.
    #[instrument(skip(self, brief, spec), fields(platform = %platform))]
    pub async fn compose(
        &self,
        brief: &CampaignBrief,
        platform: &str,
        spec: &PlatformSpec,
    ) -> ImageArtifact {
        let request = ImageRequest {
            prompt: image_prompt(brief, platform, spec),
            aspect_ratio: spec.aspect_ratio(),
            size: ImageSize::OneK,
            negative_prompt: None,
            model: None,
        };

        let width = *spec.image_width();
        let height = *spec.image_height();

        match self.driver.render(&request).await {
            Ok(response) => {
                let model = ImageModel::classify(self.driver.model_name());
                let cost = self.estimator.image_generation_cost(model, ImageSize::OneK);
                ImageArtifact::produced(
                    platform,
                    width,
                    height,
                    response.mime,
                    response.base64_data,
                    cost,
                )
            }
            Err(error) => {
                warn!(platform = %platform, error = %error, "Image generation failed");
                ImageArtifact::failed(platform, width, height, failure_reason(&error))
            }
        }
    }
}

/// Human-readable reason recorded on a failed artifact.
///
/// Safety rejections get the documented phrasing so downstream consumers
/// can distinguish them from transport failures.
fn failure_reason(error: &LautrecError) -> String {
    match error.kind() {
        LautrecErrorKind::Image(image_error) => match &image_error.kind {
            ImageErrorKind::SafetyRejected(reason) => {
                format!("safety filter triggered: {reason}")
            }
            other => other.to_string(),
        },
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lautrec_error::ImageError;

    #[test]
    fn safety_rejection_gets_documented_phrasing() {
        let error: LautrecError =
            ImageError::new(ImageErrorKind::SafetyRejected("person generation".to_string()))
                .into();
        let reason = failure_reason(&error);
        assert!(reason.starts_with("safety filter triggered"));
        assert!(reason.contains("person generation"));
    }

    #[test]
    fn transport_failure_keeps_its_message() {
        let error: LautrecError =
            ImageError::new(ImageErrorKind::Transport("connection reset".to_string())).into();
        assert!(failure_reason(&error).contains("connection reset"));
    }
}
