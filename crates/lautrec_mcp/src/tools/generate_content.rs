//! Content-only campaign generation tool.

use crate::tools::McpTool;
use crate::{McpError, McpResult};
use async_trait::async_trait;
use chrono::Utc;
use lautrec_campaign::CampaignOrchestrator;
use lautrec_core::{CampaignBriefBuilder, ContentStyle, HashtagStrategy};
use serde::Deserialize;
use serde_json::{Value, json};
use std::sync::Arc;
use tracing::{debug, instrument};

#[derive(Debug, Deserialize)]
struct GenerateContentInput {
    campaign_brief: String,
    platforms: Vec<String>,
    #[serde(default)]
    style: Option<ContentStyle>,
    #[serde(default)]
    hashtag_strategy: Option<HashtagStrategy>,
    #[serde(default)]
    target_audience: Option<String>,
    #[serde(default = "default_include_cta")]
    include_cta: bool,
}

fn default_include_cta() -> bool {
    true
}

/// Tool running the content-only campaign path (no images; cheaper and
/// faster).
#[derive(Clone)]
pub struct GenerateCampaignContentTool {
    orchestrator: Arc<CampaignOrchestrator>,
}

impl GenerateCampaignContentTool {
    /// Creates the tool around a shared orchestrator.
    pub fn new(orchestrator: Arc<CampaignOrchestrator>) -> Self {
        Self { orchestrator }
    }
}

#[async_trait]
impl McpTool for GenerateCampaignContentTool {
    fn name(&self) -> &str {
        "generate_campaign_content"
    }

    fn description(&self) -> &str {
        "Generate platform-tailored marketing copy with hashtags for every requested \
         platform from a single campaign brief. Content only; use batch_generate_campaign \
         for images. Unknown platforms are reported in place, never dropped."
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
                    "description": "Destination platform identifiers, e.g. instagram_feed, twitter_post"
                },
                "style": {
                    "type": "string",
                    "enum": ["professional", "casual", "humorous", "educational", "promotional"]
                },
                "hashtag_strategy": {
                    "type": "string",
                    "enum": ["industry-specific", "trending", "branded", "niche"]
                },
                "target_audience": {
                    "type": "string",
                    "description": "Audience the copy should address"
                },
                "include_cta": {
                    "type": "boolean",
                    "description": "End each post with a call to action (default true)"
                }
            },
            "required": ["campaign_brief", "platforms"]
        })
    }

    #[instrument(skip(self, input))]
    async fn execute(&self, input: Value) -> McpResult<Value> {
        let input: GenerateContentInput = serde_json::from_value(input)
            .map_err(|e| McpError::InvalidInput(e.to_string()))?;

        debug!(platforms = input.platforms.len(), "Generating campaign content");

        let mut builder = CampaignBriefBuilder::default();
        builder
            .brief(input.campaign_brief)
            .platforms(input.platforms)
            .style(input.style.unwrap_or_default())
            .hashtag_strategy(input.hashtag_strategy.unwrap_or_default())
            .include_cta(input.include_cta);
        if let Some(audience) = input.target_audience {
            builder.target_audience(audience);
        }
        let brief = builder
            .build()
            .map_err(|e| McpError::InvalidInput(e.to_string()))?;

        let result = self.orchestrator.run_content_only(&brief).await;

        let mut value = serde_json::to_value(&result)
            .map_err(|e| McpError::ToolExecutionFailed(e.to_string()))?;
        if let Some(map) = value.as_object_mut() {
            map.insert("success".to_string(), json!(true));
            map.insert("timestamp".to_string(), json!(Utc::now().to_rfc3339()));
        }
        Ok(value)
    }
}
