//! Per-platform and whole-campaign result types.

use crate::{ContentPiece, ImageArtifact};
use serde::{Deserialize, Serialize};

/// Why a platform slot produced no usable content.
///
/// These are the per-platform failure states of the pipeline. They are
/// plain data, not errors: one platform failing never unwinds across
/// platform boundaries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_more::Display)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PlatformFailure {
    /// The requested identifier is not in the platform registry
    #[display("unknown platform: {}", platform)]
    UnknownPlatform {
        /// The unrecognized identifier as requested
        platform: String,
    },
    /// Copy generation did not complete within its deadline
    #[display("text generation timed out after {}s", seconds)]
    CopyTimedOut {
        /// The deadline that elapsed
        seconds: u64,
    },
    /// The collaborator answered but the response could not be structured
    #[display("text generation rejected: {}", message)]
    CopyRejected {
        /// What was wrong with the response
        message: String,
    },
    /// The external service failed at the transport or HTTP level
    #[display("external service failure: {}", message)]
    ServiceFailed {
        /// The transport or status error
        message: String,
    },
}

/// Outcome for a single requested platform.
///
/// One of these occupies each slot of [`CampaignResult::results`], in the
/// same order the platforms were requested, including unknown and failed
/// entries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlatformResult {
    /// Platform identifier as requested
    pub platform: String,
    /// Validated copy, when generation succeeded
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<ContentPiece>,
    /// Image artifact, when one was requested
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<ImageArtifact>,
    /// Copy is valid and the image (if requested) succeeded
    pub ready_for_posting: bool,
    /// Fatal failure for this slot, when generation never produced copy
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<PlatformFailure>,
}

impl PlatformResult {
    /// Slot for an identifier the registry does not know.
    pub fn unknown_platform(platform: impl Into<String>) -> Self {
        let platform = platform.into();
        Self {
            error: Some(PlatformFailure::UnknownPlatform {
                platform: platform.clone(),
            }),
            platform,
            content: None,
            image: None,
            ready_for_posting: false,
        }
    }

    /// Slot for a platform whose copy generation failed.
    pub fn copy_failed(platform: impl Into<String>, failure: PlatformFailure) -> Self {
        Self {
            platform: platform.into(),
            content: None,
            image: None,
            ready_for_posting: false,
            error: Some(failure),
        }
    }
}

/// Aggregated outcome of one campaign invocation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CampaignResult {
    /// Number of platforms requested
    pub platforms_requested: usize,
    /// Number of platforms with no fatal generation error
    pub platforms_generated: usize,
    /// Number of platforms ready for posting
    pub ready_count: usize,
    /// Every requested platform is ready for posting
    pub all_ready: bool,
    /// Sum of costs over artifacts actually produced, in USD
    pub estimated_cost_usd: f64,
    /// Per-platform outcomes in request order
    pub results: Vec<PlatformResult>,
}

impl CampaignResult {
    /// Aggregate per-platform outcomes into a campaign result.
    ///
    /// Only artifacts actually produced contribute to the cost total;
    /// failed image artifacts carry a zero cost by construction.
    pub fn from_results(results: Vec<PlatformResult>) -> Self {
        let platforms_requested = results.len();
        let platforms_generated = results.iter().filter(|r| r.error.is_none()).count();
        let ready_count = results.iter().filter(|r| r.ready_for_posting).count();
        let cost: f64 = results
            .iter()
            .map(|r| {
                r.content.as_ref().map_or(0.0, |c| c.estimated_cost_usd)
                    + r.image.as_ref().map_or(0.0, |i| i.cost_usd)
            })
            .sum();
        Self {
            platforms_requested,
            platforms_generated,
            ready_count,
            all_ready: ready_count == platforms_requested,
            estimated_cost_usd: round_usd(cost),
            results,
        }
    }
}

/// Round a USD amount to 4 decimal places for reporting.
///
/// Summation always happens over unrounded values; only the reported
/// total is rounded.
fn round_usd(amount: f64) -> f64 {
    (amount * 10_000.0).round() / 10_000.0
}
