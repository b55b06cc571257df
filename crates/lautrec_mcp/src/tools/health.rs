//! Liveness probe tool.

use crate::tools::McpTool;
use crate::{ArtifactStore, McpResult};
use async_trait::async_trait;
use lautrec_interface::{Health, HealthStatus};
use serde_json::{Value, json};
use std::sync::Arc;
use tracing::{debug, instrument};

/// Reports collaborator reachability and output-directory writability.
///
/// Missing credentials surface here as unavailable services rather than
/// failing each campaign request individually.
#[derive(Clone)]
pub struct HealthCheckTool {
    text: Option<Arc<dyn Health>>,
    image: Option<Arc<dyn Health>>,
    store: Arc<ArtifactStore>,
}

impl HealthCheckTool {
    /// Creates the tool. `None` handles mean the backend was never
    /// configured (e.g. missing API key at startup).
    pub fn new(
        text: Option<Arc<dyn Health>>,
        image: Option<Arc<dyn Health>>,
        store: Arc<ArtifactStore>,
    ) -> Self {
        Self { text, image, store }
    }

    async fn probe(handle: &Option<Arc<dyn Health>>) -> HealthStatus {
        match handle {
            Some(backend) => match backend.health().await {
                Ok(status) => status,
                Err(e) => HealthStatus::Unhealthy {
                    message: e.to_string(),
                },
            },
            None => HealthStatus::Unhealthy {
                message: "GEMINI_API_KEY not configured".to_string(),
            },
        }
    }
}

#[async_trait]
impl McpTool for HealthCheckTool {
    fn name(&self) -> &str {
        "health_check"
    }

    fn description(&self) -> &str {
        "Report availability of the text and image generation services and whether \
         the output directory is writable."
    }

    fn input_schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": {}
        })
    }

    #[instrument(skip(self, _input))]
    async fn execute(&self, _input: Value) -> McpResult<Value> {
        debug!("Running health check");

        let text = Self::probe(&self.text).await;
        let image = Self::probe(&self.image).await;
        let output_directory_writable = self.store.writable();

        let status = if text.is_available() && image.is_available() && output_directory_writable {
            "ok"
        } else {
            "degraded"
        };

        Ok(json!({
            "status": status,
            "services": {
                "text": text,
                "image": image,
            },
            "output_directory": self.store.base_path().display().to_string(),
            "output_directory_writable": output_directory_writable,
        }))
    }
}
