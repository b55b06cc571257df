//! Model Context Protocol (MCP) server for Lautrec.
//!
//! This crate exposes the campaign pipeline as standardized tools an LLM
//! (or any JSON-RPC client) can call over stdio:
//!
//! - `generate_campaign_content`: content-only campaign generation
//! - `batch_generate_campaign`: full campaign generation with images
//! - `calculate_cost_estimate`: pure cost estimation
//! - `health_check`: collaborator reachability and output-dir probe
//! - `get_server_info`: server metadata
//!
//! The tool layer always answers with a structured envelope; per-platform
//! failures live inside the campaign result, never in the transport.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod error;
mod server;
mod store;
pub mod tools;

pub use error::{McpError, McpResult};
pub use server::{McpServer, McpServerBuilder};
pub use store::ArtifactStore;
pub use tools::{
    BatchGenerateCampaignTool, CostEstimateTool, GenerateCampaignContentTool, HealthCheckTool,
    McpTool, ServerInfoTool, ToolRegistry,
};
