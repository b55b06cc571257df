//! MCP server with a stdio JSON-RPC transport.

use crate::tools::ToolRegistry;
use crate::{McpError, McpResult};
use serde_json::{Value, json};
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tracing::{debug, info, instrument, warn};

/// MCP protocol revision this server speaks.
const PROTOCOL_VERSION: &str = "2024-11-05";

/// MCP server for Lautrec.
///
/// Speaks JSON-RPC 2.0 over stdio, one message per line: `initialize`,
/// `tools/list`, and `tools/call` are handled; notifications are
/// consumed without a response.
pub struct McpServer {
    name: String,
    version: String,
    tools: ToolRegistry,
}

impl McpServer {
    /// Creates a new server builder.
    pub fn builder() -> McpServerBuilder {
        McpServerBuilder::default()
    }

    /// Runs the server using stdio transport until stdin closes.
    ///
    /// # Errors
    ///
    /// Returns an error when stdin or stdout fails at the transport level.
    #[instrument(skip(self))]
    pub async fn run_stdio(self) -> McpResult<()> {
        info!(
            name = %self.name,
            version = %self.version,
            tools = self.tools.len(),
            "MCP server ready, listening on stdio"
        );

        let stdin = BufReader::new(tokio::io::stdin());
        let mut lines = stdin.lines();
        let mut stdout = tokio::io::stdout();

        while let Some(line) = lines
            .next_line()
            .await
            .map_err(|e| McpError::TransportError(e.to_string()))?
        {
            if line.trim().is_empty() {
                continue;
            }

            let Some(response) = self.handle_message(&line).await else {
                continue;
            };

            let mut payload = serde_json::to_string(&response)
                .map_err(|e| McpError::TransportError(e.to_string()))?;
            payload.push('\n');
            stdout
                .write_all(payload.as_bytes())
                .await
                .map_err(|e| McpError::TransportError(e.to_string()))?;
            stdout
                .flush()
                .await
                .map_err(|e| McpError::TransportError(e.to_string()))?;
        }

        info!("stdin closed, shutting down");
        Ok(())
    }

    /// Handle one JSON-RPC message; `None` for notifications.
    pub async fn handle_message(&self, line: &str) -> Option<Value> {
        let request: Value = match serde_json::from_str(line) {
            Ok(value) => value,
            Err(e) => {
                warn!(error = %e, "Unparsable JSON-RPC message");
                return Some(error_response(Value::Null, -32700, format!("parse error: {e}")));
            }
        };

        let method = request
            .get("method")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string();

        // Notifications carry no id and expect no response.
        let id = request.get("id").cloned()?;

        debug!(method = %method, "Handling request");

        match method.as_str() {
            "initialize" => Some(result_response(
                id,
                json!({
                    "protocolVersion": PROTOCOL_VERSION,
                    "serverInfo": {"name": self.name, "version": self.version},
                    "capabilities": {"tools": {}}
                }),
            )),
            "ping" => Some(result_response(id, json!({}))),
            "tools/list" => {
                let tools: Vec<Value> = self
                    .tools
                    .list()
                    .iter()
                    .map(|tool| {
                        json!({
                            "name": tool.name(),
                            "description": tool.description(),
                            "inputSchema": tool.input_schema(),
                        })
                    })
                    .collect();
                Some(result_response(id, json!({"tools": tools})))
            }
            "tools/call" => {
                let params = request.get("params");
                let name = params.and_then(|p| p.get("name")).and_then(Value::as_str);
                let arguments = params
                    .and_then(|p| p.get("arguments"))
                    .cloned()
                    .unwrap_or_else(|| json!({}));

                let Some(name) = name else {
                    return Some(error_response(
                        id,
                        -32602,
                        "missing tool name".to_string(),
                    ));
                };

                match self.tools.execute(name, arguments).await {
                    Ok(value) => Some(result_response(
                        id,
                        json!({
                            "content": [{"type": "text", "text": value.to_string()}],
                            "isError": false
                        }),
                    )),
                    Err(e) => Some(result_response(
                        id,
                        json!({
                            "content": [{"type": "text", "text": e.to_string()}],
                            "isError": true
                        }),
                    )),
                }
            }
            other => Some(error_response(
                id,
                -32601,
                format!("method not found: {other}"),
            )),
        }
    }
}

fn result_response(id: Value, result: Value) -> Value {
    json!({"jsonrpc": "2.0", "id": id, "result": result})
}

fn error_response(id: Value, code: i64, message: String) -> Value {
    json!({"jsonrpc": "2.0", "id": id, "error": {"code": code, "message": message}})
}

/// Builder for the MCP server.
#[derive(Default)]
pub struct McpServerBuilder {
    name: Option<String>,
    version: Option<String>,
    tools: Option<ToolRegistry>,
}

impl McpServerBuilder {
    /// Sets the server name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets the server version.
    pub fn version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    /// Sets the tool registry.
    pub fn tools(mut self, tools: ToolRegistry) -> Self {
        self.tools = Some(tools);
        self
    }

    /// Builds the server.
    pub fn build(self) -> McpResult<McpServer> {
        Ok(McpServer {
            name: self.name.unwrap_or_else(|| "lautrec".to_string()),
            version: self
                .version
                .unwrap_or_else(|| env!("CARGO_PKG_VERSION").to_string()),
            tools: self.tools.unwrap_or_default(),
        })
    }
}
