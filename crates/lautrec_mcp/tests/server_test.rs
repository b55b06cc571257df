// JSON-RPC dispatch tests over an in-memory server.

use lautrec_mcp::{CostEstimateTool, McpServer, ServerInfoTool, ToolRegistry};
use lautrec_pricing::{CostEstimator, PriceBook};
use serde_json::{Value, json};
use std::sync::Arc;

fn server() -> McpServer {
    let mut tools = ToolRegistry::new();
    tools.register(Arc::new(ServerInfoTool));
    tools.register(Arc::new(CostEstimateTool::new(Arc::new(CostEstimator::new(
        PriceBook::default(),
    )))));
    McpServer::builder()
        .name("lautrec-test")
        .version("0.0.0")
        .tools(tools)
        .build()
        .unwrap()
}

#[tokio::test]
async fn initialize_reports_server_info() {
    let server = server();
    let response = server
        .handle_message(r#"{"jsonrpc": "2.0", "id": 1, "method": "initialize", "params": {}}"#)
        .await
        .unwrap();

    assert_eq!(response["id"], 1);
    assert_eq!(response["result"]["serverInfo"]["name"], "lautrec-test");
    assert!(response["result"]["protocolVersion"].is_string());
}

#[tokio::test]
async fn notifications_get_no_response() {
    let server = server();
    let response = server
        .handle_message(r#"{"jsonrpc": "2.0", "method": "notifications/initialized"}"#)
        .await;
    assert!(response.is_none());
}

#[tokio::test]
async fn tools_list_exposes_schemas() {
    let server = server();
    let response = server
        .handle_message(r#"{"jsonrpc": "2.0", "id": 2, "method": "tools/list"}"#)
        .await
        .unwrap();

    let tools = response["result"]["tools"].as_array().unwrap();
    assert_eq!(tools.len(), 2);
    let names: Vec<&str> = tools
        .iter()
        .map(|t| t["name"].as_str().unwrap())
        .collect();
    assert!(names.contains(&"get_server_info"));
    assert!(names.contains(&"calculate_cost_estimate"));
    for tool in tools {
        assert!(tool["inputSchema"]["type"].is_string());
        assert!(tool["description"].as_str().unwrap().len() > 10);
    }
}

#[tokio::test]
async fn tools_call_runs_the_cost_estimator() {
    let server = server();
    let request = json!({
        "jsonrpc": "2.0",
        "id": 3,
        "method": "tools/call",
        "params": {
            "name": "calculate_cost_estimate",
            "arguments": {"images_2k": 4, "content_pieces": 4}
        }
    });
    let response = server
        .handle_message(&request.to_string())
        .await
        .unwrap();

    assert_eq!(response["result"]["isError"], false);
    let text = response["result"]["content"][0]["text"].as_str().unwrap();
    let payload: Value = serde_json::from_str(text).unwrap();
    assert_eq!(payload["success"], true);
    assert_eq!(payload["total_cost_usd"], 0.161);
    assert_eq!(payload["breakdown"]["images"]["two_k"]["count"], 4);
}

#[tokio::test]
async fn unknown_tool_is_reported_as_tool_error() {
    let server = server();
    let request = json!({
        "jsonrpc": "2.0",
        "id": 4,
        "method": "tools/call",
        "params": {"name": "no_such_tool", "arguments": {}}
    });
    let response = server
        .handle_message(&request.to_string())
        .await
        .unwrap();

    assert_eq!(response["result"]["isError"], true);
    let text = response["result"]["content"][0]["text"].as_str().unwrap();
    assert!(text.contains("no_such_tool"));
}

#[tokio::test]
async fn unknown_method_is_a_jsonrpc_error() {
    let server = server();
    let response = server
        .handle_message(r#"{"jsonrpc": "2.0", "id": 5, "method": "resources/list"}"#)
        .await
        .unwrap();
    assert_eq!(response["error"]["code"], -32601);
}

#[tokio::test]
async fn parse_errors_are_reported() {
    let server = server();
    let response = server.handle_message("this is not json").await.unwrap();
    assert_eq!(response["error"]["code"], -32700);
}
