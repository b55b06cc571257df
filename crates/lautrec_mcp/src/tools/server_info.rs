//! Server info tool.

use crate::McpResult;
use crate::tools::McpTool;
use async_trait::async_trait;
use serde_json::{Value, json};
use tracing::debug;

/// Tool that returns information about the Lautrec server.
pub struct ServerInfoTool;

#[async_trait]
impl McpTool for ServerInfoTool {
    fn name(&self) -> &str {
        "get_server_info"
    }

    fn description(&self) -> &str {
        "Returns information about the Lautrec MCP server, including version and capabilities."
    }

    fn input_schema(&self) -> Value {
        json!({
            "type": "object",
            "properties": {}
        })
    }

    async fn execute(&self, _input: Value) -> McpResult<Value> {
        debug!("Server info tool called");

        Ok(json!({
            "name": "Lautrec MCP Server",
            "version": env!("CARGO_PKG_VERSION"),
            "description": "Campaign content and image generation across social platforms",
            "capabilities": {
                "tools": true,
                "resources": false,
                "prompts": false
            },
            "available_tools": [
                "generate_campaign_content",
                "batch_generate_campaign",
                "calculate_cost_estimate",
                "health_check",
                "get_server_info"
            ]
        }))
    }
}
