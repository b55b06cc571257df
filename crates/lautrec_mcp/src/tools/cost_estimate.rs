//! Cost estimation tool.

use crate::tools::McpTool;
use crate::{McpError, McpResult};
use async_trait::async_trait;
use chrono::Utc;
use lautrec_pricing::{CostEstimator, CostRequestBuilder, ImageModel, VideoModel};
use serde::Deserialize;
use serde_json::{Value, json};
use std::sync::Arc;
use tracing::{debug, instrument};

#[derive(Debug, Deserialize)]
struct CostEstimateInput {
    #[serde(default)]
    images_1k: i64,
    #[serde(default)]
    images_2k: i64,
    #[serde(default)]
    video_seconds: i64,
    #[serde(default)]
    content_pieces: i64,
    #[serde(default)]
    image_model: Option<String>,
    #[serde(default)]
    video_model: Option<String>,
}

/// Pure cost estimation over the price book; no external calls.
#[derive(Clone)]
pub struct CostEstimateTool {
    estimator: Arc<CostEstimator>,
}

impl CostEstimateTool {
    /// Creates the tool around a shared estimator.
    pub fn new(estimator: Arc<CostEstimator>) -> Self {
        Self { estimator }
    }
}

#[async_trait]
impl McpTool for CostEstimateTool {
    fn name(&self) -> &str {
        "calculate_cost_estimate"
    }

    fn description(&self) -> &str {
        "Calculate the estimated USD cost of a campaign from resource counts: images \
         by resolution tier, seconds of video, and content pieces. Deterministic; \
         identical inputs produce identical breakdowns."
    }

    fn input_schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "images_1k": {"type": "integer", "description": "Number of 1K resolution images"},
                "images_2k": {"type": "integer", "description": "Number of 2K resolution images"},
                "video_seconds": {"type": "integer", "description": "Total seconds of video"},
                "content_pieces": {"type": "integer", "description": "Number of content pieces"},
                "image_model": {
                    "type": "string",
                    "description": "Image model, e.g. imagen-3.0 or imagen-4.0 (default imagen-3.0)"
                },
                "video_model": {
                    "type": "string",
                    "description": "Video model: veo2, veo3, or veo3_fast (default veo3)"
                }
            }
        })
    }

    #[instrument(skip(self, input))]
    async fn execute(&self, input: Value) -> McpResult<Value> {
        let input: CostEstimateInput = serde_json::from_value(input)
            .map_err(|e| McpError::InvalidInput(e.to_string()))?;

        let request = CostRequestBuilder::default()
            .images_1k(input.images_1k)
            .images_2k(input.images_2k)
            .video_seconds(input.video_seconds)
            .content_pieces(input.content_pieces)
            .image_model(
                input
                    .image_model
                    .as_deref()
                    .map(ImageModel::classify)
                    .unwrap_or_default(),
            )
            .video_model(
                input
                    .video_model
                    .as_deref()
                    .map(VideoModel::classify)
                    .unwrap_or_default(),
            )
            .build()
            .map_err(|e| McpError::InvalidInput(e.to_string()))?;

        debug!(?request, "Estimating campaign cost");

        match self.estimator.estimate(&request) {
            Ok(breakdown) => {
                let total = breakdown.total_cost_usd;
                Ok(json!({
                    "success": true,
                    "breakdown": breakdown,
                    "total_cost_usd": total,
                    "pricing_version": self.estimator.book().version(),
                    "timestamp": Utc::now().to_rfc3339(),
                }))
            }
            Err(e) => Ok(json!({
                "success": false,
                "error": e.to_string(),
            })),
        }
    }
}
