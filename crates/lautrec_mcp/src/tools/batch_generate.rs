//! Full campaign generation tool (copy plus images).

use crate::tools::McpTool;
use crate::{ArtifactStore, McpError, McpResult};
use async_trait::async_trait;
use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;
use chrono::Utc;
use lautrec_campaign::CampaignOrchestrator;
use lautrec_core::{CampaignBriefBuilder, CampaignResult, ContentStyle, ImageStyle};
use serde::Deserialize;
use serde_json::{Value, json};
use std::sync::Arc;
use tracing::{debug, instrument, warn};

#[derive(Debug, Deserialize)]
struct BatchGenerateInput {
    campaign_brief: String,
    platforms: Vec<String>,
    #[serde(default)]
    style: Option<ContentStyle>,
    #[serde(default)]
    target_audience: Option<String>,
    #[serde(default)]
    image_style: Option<ImageStyle>,
    #[serde(default)]
    include_base64: bool,
}

/// Tool running the full campaign path: copy, validation, and a
/// platform-dimensioned image per platform.
///
/// When `include_base64` is false (the default), image payloads are
/// offloaded to the artifact store and results carry filesystem paths
/// instead of inline base64.
#[derive(Clone)]
pub struct BatchGenerateCampaignTool {
    orchestrator: Arc<CampaignOrchestrator>,
    store: Arc<ArtifactStore>,
}

impl BatchGenerateCampaignTool {
    /// Creates the tool around a shared orchestrator and artifact store.
    pub fn new(orchestrator: Arc<CampaignOrchestrator>, store: Arc<ArtifactStore>) -> Self {
        Self {
            orchestrator,
            store,
        }
    }

    /// Move inline image payloads into the artifact store.
    ///
    /// A payload that fails to decode or store keeps its artifact but
    /// loses readiness; the rest of the campaign is unaffected.
    fn offload_images(&self, result: &mut CampaignResult) {
        for slot in &mut result.results {
            let Some(artifact) = slot.image.as_mut() else {
                continue;
            };
            let Some(encoded) = artifact.base64_data.take() else {
                continue;
            };
            match BASE64
                .decode(&encoded)
                .map_err(|e| McpError::StoreError(format!("invalid base64 payload: {e}")))
                .and_then(|bytes| self.store.store_image(&bytes, artifact.mime.as_deref()))
            {
                Ok(path) => {
                    artifact.path = Some(path.display().to_string());
                }
                Err(e) => {
                    warn!(platform = %slot.platform, error = %e, "Failed to offload image");
                    artifact.success = false;
                    artifact.failure_reason = Some(e.to_string());
                    slot.ready_for_posting = false;
                }
            }
        }
    }
}

#[async_trait]
impl McpTool for BatchGenerateCampaignTool {
    fn name(&self) -> &str {
        "batch_generate_campaign"
    }

    fn description(&self) -> &str {
        "Generate a complete campaign: validated copy plus a platform-dimensioned \
         image for every requested platform. Per-platform failures are isolated and \
         reported in place; inspect ready_for_posting on each result."
    }

    fn input_schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": {
                "campaign_brief": {
                    "type": "string",
                    "description": "What to promote"
                },
                "platforms": {
                    "type": "array",
                    "items": {"type": "string"},
                    "description": "Destination platform identifiers"
                },
                "style": {
                    "type": "string",
                    "enum": ["professional", "casual", "humorous", "educational", "promotional"]
                },
                "target_audience": {
                    "type": "string"
                },
                "image_style": {
                    "type": "string",
                    "enum": ["photorealistic", "illustrated", "3d", "modern"]
                },
                "include_base64": {
                    "type": "boolean",
                    "description": "Return image payloads inline instead of output-directory paths (default false)"
                }
            },
            "required": ["campaign_brief", "platforms"]
        })
    }

    #[instrument(skip(self, input))]
    async fn execute(&self, input: Value) -> McpResult<Value> {
        let input: BatchGenerateInput = serde_json::from_value(input)
            .map_err(|e| McpError::InvalidInput(e.to_string()))?;

        debug!(platforms = input.platforms.len(), "Generating full campaign");

        let mut builder = CampaignBriefBuilder::default();
        builder
            .brief(input.campaign_brief)
            .platforms(input.platforms)
            .style(input.style.unwrap_or_default());
        if let Some(audience) = input.target_audience {
            builder.target_audience(audience);
        }
        if let Some(image_style) = input.image_style {
            builder.image_style(image_style);
        }
        let brief = builder
            .build()
            .map_err(|e| McpError::InvalidInput(e.to_string()))?;

        let mut result = self.orchestrator.run(&brief).await;

        if !input.include_base64 {
            self.offload_images(&mut result);
        }

        let mut value = serde_json::to_value(&result)
            .map_err(|e| McpError::ToolExecutionFailed(e.to_string()))?;
        if let Some(map) = value.as_object_mut() {
            map.insert("success".to_string(), json!(true));
            map.insert("timestamp".to_string(), json!(Utc::now().to_rfc3339()));
        }
        Ok(value)
    }
}
