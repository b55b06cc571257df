//! Pure cost estimation over the price book.

use crate::{ImageModel, PriceBook, TextModel, VideoModel};
use lautrec_core::ImageSize;
use lautrec_error::{CostError, CostErrorKind};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Resource counts to estimate a campaign's cost for.
///
/// Counts arrive as signed integers because they come straight off the
/// wire; the estimator rejects negative values rather than silently
/// clamping them.
///
/// # Examples
///
/// ```
/// use lautrec_pricing::CostRequestBuilder;
///
/// let request = CostRequestBuilder::default()
///     .images_2k(4)
///     .content_pieces(4)
///     .build()
///     .unwrap();
/// assert_eq!(request.images_1k, 0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, derive_builder::Builder)]
pub struct CostRequest {
    /// Number of 1K resolution images
    #[builder(default)]
    #[serde(default)]
    pub images_1k: i64,
    /// Number of 2K resolution images
    #[builder(default)]
    #[serde(default)]
    pub images_2k: i64,
    /// Total seconds of video
    #[builder(default)]
    #[serde(default)]
    pub video_seconds: i64,
    /// Number of content pieces
    #[builder(default)]
    #[serde(default)]
    pub content_pieces: i64,
    /// Image model family to price against
    #[builder(default)]
    #[serde(default)]
    pub image_model: ImageModel,
    /// Video model to price against
    #[builder(default)]
    #[serde(default)]
    pub video_model: VideoModel,
}

/// Cost of one image resolution tier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TierCost {
    /// Number of images in this tier
    pub count: u64,
    /// USD price per image
    pub cost_per_image: f64,
    /// USD cost of the tier
    pub cost_usd: f64,
}

/// Itemized image costs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageCosts {
    /// 1K resolution tier
    pub one_k: TierCost,
    /// 2K resolution tier
    pub two_k: TierCost,
    /// USD cost across both tiers
    pub total_cost_usd: f64,
    /// Model family the prices came from
    pub model: ImageModel,
}

/// Itemized video cost.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VideoCost {
    /// Seconds of video priced
    pub seconds: u64,
    /// Model the price came from
    pub model: VideoModel,
    /// USD price per second
    pub cost_per_second: f64,
    /// USD cost of the video
    pub cost_usd: f64,
}

/// Itemized content generation cost.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentCost {
    /// Number of content pieces priced
    pub pieces: u64,
    /// Assumed token volume per piece
    pub avg_tokens: u32,
    /// Model the rate came from
    pub model: TextModel,
    /// USD cost of the content
    pub cost_usd: f64,
}

/// Structured USD estimate itemized per resource type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CostBreakdown {
    /// Image costs by resolution tier
    pub images: ImageCosts,
    /// Video cost
    pub video: VideoCost,
    /// Content generation cost
    pub content: ContentCost,
    /// USD total across all resources
    pub total_cost_usd: f64,
}

/// Pure cost estimator over a fixed price book.
///
/// Identical inputs always produce identical breakdowns. Display fields
/// are rounded at construction; totals are summed from unrounded values
/// first, so summation never silently truncates.
#[derive(Debug, Clone, PartialEq, derive_new::new)]
pub struct CostEstimator {
    book: PriceBook,
}

impl CostEstimator {
    /// The price book backing this estimator.
    pub fn book(&self) -> &PriceBook {
        &self.book
    }

    /// Estimate the cost of the requested resource counts.
    ///
    /// # Errors
    ///
    /// Returns `NegativeCount` when any count is below zero.
    ///
    /// # Examples
    ///
    /// ```
    /// use lautrec_pricing::{CostEstimator, CostRequestBuilder, PriceBook};
    ///
    /// let estimator = CostEstimator::new(PriceBook::default());
    /// let request = CostRequestBuilder::default()
    ///     .images_2k(4)
    ///     .content_pieces(4)
    ///     .build()
    ///     .unwrap();
    /// let breakdown = estimator.estimate(&request).unwrap();
    /// assert_eq!(breakdown.total_cost_usd, 0.161);
    /// ```
    #[instrument(skip(self))]
    pub fn estimate(&self, request: &CostRequest) -> Result<CostBreakdown, CostError> {
        let images_1k = ensure_non_negative("images_1k", request.images_1k)?;
        let images_2k = ensure_non_negative("images_2k", request.images_2k)?;
        let video_seconds = ensure_non_negative("video_seconds", request.video_seconds)?;
        let content_pieces = ensure_non_negative("content_pieces", request.content_pieces)?;

        let cost_1k = self.book.image_price(request.image_model, ImageSize::OneK);
        let cost_2k = self.book.image_price(request.image_model, ImageSize::TwoK);
        let image_1k_cost = images_1k as f64 * cost_1k;
        let image_2k_cost = images_2k as f64 * cost_2k;
        let total_image_cost = image_1k_cost + image_2k_cost;

        let cost_per_second = self.book.video_price_per_second(request.video_model);
        let video_cost = video_seconds as f64 * cost_per_second;

        let avg_tokens = self.book.avg_tokens_per_piece();
        let content_cost = content_pieces as f64 * self.content_piece_cost(avg_tokens as u64);

        let total = total_image_cost + video_cost + content_cost;

        Ok(CostBreakdown {
            images: ImageCosts {
                one_k: TierCost {
                    count: images_1k,
                    cost_per_image: cost_1k,
                    cost_usd: round4(image_1k_cost),
                },
                two_k: TierCost {
                    count: images_2k,
                    cost_per_image: cost_2k,
                    cost_usd: round4(image_2k_cost),
                },
                total_cost_usd: round4(total_image_cost),
                model: request.image_model,
            },
            video: VideoCost {
                seconds: video_seconds,
                model: request.video_model,
                cost_per_second,
                cost_usd: round4(video_cost),
            },
            content: ContentCost {
                pieces: content_pieces,
                avg_tokens,
                model: TextModel::default(),
                cost_usd: round6(content_cost),
            },
            total_cost_usd: round4(total),
        })
    }

    /// USD cost of generating one content piece of the given token volume.
    pub fn content_piece_cost(&self, tokens: u64) -> f64 {
        tokens as f64 / 1000.0 * self.book.text_price_per_1k_tokens(TextModel::default())
    }

    /// USD cost of generating one image.
    pub fn image_generation_cost(&self, model: ImageModel, size: ImageSize) -> f64 {
        self.book.image_price(model, size)
    }
}

fn ensure_non_negative(field: &'static str, value: i64) -> Result<u64, CostError> {
    u64::try_from(value).map_err(|_| CostError::new(CostErrorKind::NegativeCount { field, value }))
}

/// Round to 4 decimal places for display.
fn round4(amount: f64) -> f64 {
    (amount * 10_000.0).round() / 10_000.0
}

/// Round to 6 decimal places for the sub-cent content line.
fn round6(amount: f64) -> f64 {
    (amount * 1_000_000.0).round() / 1_000_000.0
}
