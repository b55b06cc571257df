//! Versioned price book and cost estimation.
//!
//! Money math lives here and nowhere else. The [`PriceBook`] is immutable
//! configuration loaded once at startup; the [`CostEstimator`] is a pure
//! function over it, supporting both per-call estimation and aggregation
//! across a whole campaign. Failed generations are never billed.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod book;
mod estimate;

pub use book::{ImageModel, PriceBook, TextModel, VideoModel};
pub use estimate::{
    ContentCost, CostBreakdown, CostEstimator, CostRequest, CostRequestBuilder, ImageCosts,
    TierCost, VideoCost,
};
