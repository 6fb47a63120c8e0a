use std::sync::Arc;

use serde_json::Value;
use stepwise_core::limits::EngineLimits;
use stepwise_core::mcp::McpState;
use stepwise_core::mcp::handle_line;
use stepwise_core::server::{serve, serve_with};
use tokio::io::BufReader;

async fn run(input: &str) -> Vec<Value> {
    let state = Arc::new(McpState::new(EngineLimits::default()).unwrap());
    let mut output = Vec::new();
    serve(BufReader::new(input.as_bytes()), &mut output, state)
        .await
        .unwrap();
    String::from_utf8(output)
        .unwrap()
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect()
}

#[tokio::test]
async fn test_one_response_per_request_line() {
    let input = concat!(
        r#"{"jsonrpc":"2.0","id":1,"method":"initialize","params":{}}"#,
        "\n",
        r#"{"jsonrpc":"2.0","method":"notifications/initialized"}"#,
        "\n",
        r#"{"jsonrpc":"2.0","id":2,"method":"tools/call","params":{"name":"bubble_sort","arguments":{"array":[3,1,2]}}}"#,
        "\n",
    );
    let responses = run(input).await;
    assert_eq!(responses.len(), 2);
    assert_eq!(responses[0]["id"], 1);
    assert_eq!(responses[1]["id"], 2);

    let text = responses[1]["result"]["content"][0]["text"].as_str().unwrap();
    let body: Value = serde_json::from_str(text).unwrap();
    assert_eq!(body["totalComparisons"], 3);
    assert_eq!(body["totalSwaps"], 2);
}

#[tokio::test]
async fn test_empty_input_shuts_down_cleanly() {
    assert!(run("").await.is_empty());
}

#[tokio::test]
async fn test_panicking_line_does_not_end_session() {
    let state = Arc::new(McpState::new(EngineLimits::default()).unwrap());
    let input = concat!(
        r#"{"jsonrpc":"2.0","id":7,"method":"tools/call","params":{"name":"explode"}}"#,
        "\n",
        r#"{"jsonrpc":"2.0","id":8,"method":"ping"}"#,
        "\n",
    );
    let mut output = Vec::new();
    serve_with(BufReader::new(input.as_bytes()), &mut output, move |line: &str| {
        if line.contains("explode") {
            panic!("handler blew up");
        }
        handle_line(line, &state)
    })
    .await
    .unwrap();

    let responses: Vec<Value> = String::from_utf8(output)
        .unwrap()
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect();
    assert_eq!(responses.len(), 2);
    assert_eq!(responses[0]["id"], 7);
    assert_eq!(responses[0]["error"]["code"], -32603);
    assert_eq!(responses[1]["id"], 8);
    assert!(responses[1]["result"].is_object());
}
