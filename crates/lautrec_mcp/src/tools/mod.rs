//! Tool implementations for the MCP server.

mod batch_generate;
mod cost_estimate;
mod generate_content;
mod health;
mod server_info;

pub use batch_generate::BatchGenerateCampaignTool;
pub use cost_estimate::CostEstimateTool;
pub use generate_content::GenerateCampaignContentTool;
pub use health::HealthCheckTool;
pub use server_info::ServerInfoTool;

use crate::{ArtifactStore, McpError, McpResult};
use async_trait::async_trait;
use lautrec_campaign::{CampaignOrchestrator, CopyGenerator, GenerationSettings, ImageComposer};
use lautrec_models::{ClientLimits, GeminiCopyClient, ImagenClient};
use lautrec_platforms::PlatformRegistry;
use lautrec_pricing::{CostEstimator, PriceBook};
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;

/// Trait for MCP tools.
#[async_trait]
pub trait McpTool: Send + Sync {
    /// Returns the tool name.
    fn name(&self) -> &str;

    /// Returns the tool description for the LLM.
    fn description(&self) -> &str;

    /// Returns the input schema as JSON Schema.
    fn input_schema(&self) -> Value;

    /// Executes the tool with the given input.
    async fn execute(&self, input: Value) -> McpResult<Value>;
}

/// Registry for managing MCP tools.
#[derive(Clone, Default)]
pub struct ToolRegistry {
    tools: HashMap<String, Arc<dyn McpTool>>,
}

impl ToolRegistry {
    /// Creates a new, empty tool registry.
    pub fn new() -> Self {
        Self {
            tools: HashMap::new(),
        }
    }

    /// Registers a tool.
    pub fn register(&mut self, tool: Arc<dyn McpTool>) {
        self.tools.insert(tool.name().to_string(), tool);
    }

    /// Gets a tool by name.
    pub fn get(&self, name: &str) -> Option<Arc<dyn McpTool>> {
        self.tools.get(name).cloned()
    }

    /// Lists all registered tools.
    pub fn list(&self) -> Vec<Arc<dyn McpTool>> {
        self.tools.values().cloned().collect()
    }

    /// Executes a tool by name.
    pub async fn execute(&self, name: &str, input: Value) -> McpResult<Value> {
        let tool = self
            .get(name)
            .ok_or_else(|| McpError::ToolNotFound(name.to_string()))?;

        tool.execute(input).await
    }

    /// Gets the number of registered tools.
    pub fn len(&self) -> usize {
        self.tools.len()
    }

    /// Returns true if no tools are registered.
    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }

    /// Build the standard registry from configuration and environment.
    ///
    /// Cost estimation and server info are always available. The campaign
    /// tools need `GEMINI_API_KEY`; when it is missing they are skipped
    /// with a warning and the health check reports the gap, so a
    /// misconfigured deployment degrades visibly instead of failing per
    /// request.
    ///
    /// # Errors
    ///
    /// Returns an error when configuration cannot be loaded or the output
    /// directory cannot be created.
    pub fn from_env() -> McpResult<Self> {
        let mut registry = Self::new();

        let settings = GenerationSettings::load()
            .map_err(|e| McpError::InitializationFailed(e.to_string()))?;
        let platforms = Arc::new(
            PlatformRegistry::load().map_err(|e| McpError::InitializationFailed(e.to_string()))?,
        );
        let book =
            PriceBook::load().map_err(|e| McpError::InitializationFailed(e.to_string()))?;
        let estimator = Arc::new(CostEstimator::new(book));
        let store = Arc::new(ArtifactStore::new(settings.output_dir.clone())?);

        registry.register(Arc::new(ServerInfoTool));
        registry.register(Arc::new(CostEstimateTool::new(Arc::clone(&estimator))));

        let limits = ClientLimits::new(settings.requests_per_minute, settings.max_concurrent);

        let copy_client = GeminiCopyClient::from_env(settings.text_model.clone()).map(|client| {
            Arc::new(
                client
                    .with_timeout(settings.text_timeout_secs)
                    .with_max_retries(settings.max_retries)
                    .with_limits(limits),
            )
        });
        let image_client = ImagenClient::from_env(settings.image_model.clone()).map(|client| {
            Arc::new(
                client
                    .with_timeout(settings.image_timeout_secs)
                    .with_max_retries(settings.max_retries)
                    .with_limits(limits),
            )
        });

        match (&copy_client, &image_client) {
            (Ok(copy), Ok(image)) => {
                let copy_driver: Arc<dyn lautrec_interface::CopyDriver> = copy.clone();
                let image_driver: Arc<dyn lautrec_interface::ImageDriver> = image.clone();
                let orchestrator = Arc::new(CampaignOrchestrator::new(
                    platforms,
                    CopyGenerator::new(copy_driver, Arc::clone(&estimator)),
                    ImageComposer::new(image_driver, Arc::clone(&estimator)),
                    settings.max_concurrent,
                ));
                registry.register(Arc::new(GenerateCampaignContentTool::new(Arc::clone(
                    &orchestrator,
                ))));
                registry.register(Arc::new(BatchGenerateCampaignTool::new(
                    orchestrator,
                    Arc::clone(&store),
                )));
                tracing::info!("Campaign generation tools registered");
            }
            _ => {
                tracing::warn!("Campaign tools not registered (check GEMINI_API_KEY)");
            }
        }

        let copy_health: Option<Arc<dyn lautrec_interface::Health>> = match copy_client {
            Ok(client) => Some(client),
            Err(_) => None,
        };
        let image_health: Option<Arc<dyn lautrec_interface::Health>> = match image_client {
            Ok(client) => Some(client),
            Err(_) => None,
        };
        registry.register(Arc::new(HealthCheckTool::new(
            copy_health,
            image_health,
            store,
        )));

        tracing::info!(tools = registry.len(), "ToolRegistry initialized");
        Ok(registry)
    }
}
