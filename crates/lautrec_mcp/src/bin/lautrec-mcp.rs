//! Lautrec MCP server binary.

use lautrec_mcp::{McpServer, ToolRegistry};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables from .env file
    let _ = dotenvy::dotenv();

    // Initialize tracing; stdout is the protocol channel, logs go to stderr
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()))
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    tracing::info!("Starting Lautrec MCP server");

    let registry = ToolRegistry::from_env()?;

    let server = McpServer::builder()
        .name("lautrec")
        .version(env!("CARGO_PKG_VERSION"))
        .tools(registry)
        .build()?;

    server.run_stdio().await?;

    Ok(())
}
