use std::sync::atomic::{AtomicU64, Ordering};

use rayon::prelude::*;
use serde_json::{json, Value};
use tracing::{debug, warn};

use crate::limits::{validate_batch_size, validate_request_size, EngineLimits};
use crate::tools::{call_tool, tool_definitions};

/// Server state shared across MCP request handling.
pub struct McpState {
    pub limits: EngineLimits,
    pool: rayon::ThreadPool,
    calls: AtomicU64,
    failures: AtomicU64,
}

impl McpState {
    pub fn new(limits: EngineLimits) -> Result<Self, rayon::ThreadPoolBuildError> {
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(limits.worker_threads.max(1))
            .thread_name(|i| format!("stepwise-worker-{i}"))
            .build()?;
        Ok(Self {
            limits,
            pool,
            calls: AtomicU64::new(0),
            failures: AtomicU64::new(0),
        })
    }
}

/// Handle a single JSON-RPC request and return a JSON-RPC response.
pub fn handle_request(req: &Value, state: &McpState) -> Value {
    let id = req.get("id").cloned().unwrap_or(Value::Null);
    let method = req.get("method").and_then(|m| m.as_str()).unwrap_or("");

    match method {
        "initialize" => json_rpc_result(id, handle_initialize()),
        "ping" => json_rpc_result(id, json!({})),
        "tools/list" => json_rpc_result(id, json!({ "tools": tool_definitions() })),
        "tools/call" => {
            let params = req.get("params").cloned().unwrap_or(json!({}));
            json_rpc_result(id, handle_tools_call(&params, state))
        }
        _ => json_rpc_error(id, -32601, "Method not found"),
    }
}

/// Handle a JSON-RPC batch on the worker pool. Responses keep request order.
pub fn handle_batch(reqs: &[Value], state: &McpState) -> Vec<Value> {
    state.pool.install(|| {
        reqs.par_iter()
            .filter(|req| !is_notification(req))
            .map(|req| handle_request(req, state))
            .collect()
    })
}

/// Handle one line of the stdio transport.
///
/// `None` when nothing should be written back: the line was blank, a
/// notification, or a batch made only of notifications.
pub fn handle_line(line: &str, state: &McpState) -> Option<Value> {
    if line.trim().is_empty() {
        return None;
    }
    if let Err(violation) = validate_request_size(&state.limits, line.len()) {
        warn!(%violation, "request rejected");
        return Some(json_rpc_error(Value::Null, -32600, &violation.to_string()));
    }

    let message: Value = match serde_json::from_str(line) {
        Ok(message) => message,
        Err(e) => {
            warn!(error = %e, "unparseable request");
            return Some(json_rpc_error(Value::Null, -32700, "Parse error"));
        }
    };

    match message {
        Value::Array(reqs) if reqs.is_empty() => {
            Some(json_rpc_error(Value::Null, -32600, "Invalid Request"))
        }
        Value::Array(reqs) => {
            if let Err(violation) = validate_batch_size(&state.limits, reqs.len()) {
                warn!(%violation, "batch rejected");
                return Some(json_rpc_error(Value::Null, -32600, &violation.to_string()));
            }
            let responses = handle_batch(&reqs, state);
            (!responses.is_empty()).then_some(Value::Array(responses))
        }
        req if is_notification(&req) => None,
        req => Some(handle_request(&req, state)),
    }
}

fn is_notification(req: &Value) -> bool {
    req.get("id").is_none()
        && req
            .get("method")
            .and_then(|m| m.as_str())
            .is_some_and(|m| m.starts_with("notifications/"))
}

fn handle_initialize() -> Value {
    json!({
        "protocolVersion": "2024-11-05",
        "serverInfo": {
            "name": "stepwise",
            "version": env!("CARGO_PKG_VERSION"),
        },
        "capabilities": {
            "tools": {}
        }
    })
}

fn handle_tools_call(params: &Value, state: &McpState) -> Value {
    let tool_name = params.get("name").and_then(|n| n.as_str()).unwrap_or("");
    let arguments = params.get("arguments").cloned().unwrap_or(json!({}));

    if tool_name == "status" {
        return tool_status(state);
    }

    state.calls.fetch_add(1, Ordering::Relaxed);
    match call_tool(tool_name, arguments) {
        Ok(result) => {
            debug!(tool = tool_name, "tool call succeeded");
            text_content(&result, false)
        }
        Err(e) => {
            state.failures.fetch_add(1, Ordering::Relaxed);
            warn!(tool = tool_name, error = %e, "tool call rejected");
            text_content(&json!({ "error": e.to_string() }), true)
        }
    }
}

fn tool_status(state: &McpState) -> Value {
    text_content(
        &json!({
            "state": "ready",
            "tools": tool_definitions().len(),
            "calls": state.calls.load(Ordering::Relaxed),
            "failures": state.failures.load(Ordering::Relaxed),
            "limits": state.limits,
        }),
        false,
    )
}

fn text_content(payload: &Value, is_error: bool) -> Value {
    let content = json!([{
        "type": "text",
        "text": payload.to_string(),
    }]);
    if is_error {
        json!({ "isError": true, "content": content })
    } else {
        json!({ "content": content })
    }
}

/// Error response for a line whose handler failed outright.
///
/// Echoes the request id when the line still parses as a single request.
pub fn internal_error(line: &str) -> Value {
    let id = serde_json::from_str::<Value>(line)
        .ok()
        .and_then(|message| message.get("id").cloned())
        .unwrap_or(Value::Null);
    json_rpc_error(id, -32603, "Internal error")
}

fn json_rpc_result(id: Value, result: Value) -> Value {
    json!({
        "jsonrpc": "2.0",
        "id": id,
        "result": result,
    })
}

fn json_rpc_error(id: Value, code: i32, message: &str) -> Value {
    json!({
        "jsonrpc": "2.0",
        "id": id,
        "error": {
            "code": code,
            "message": message,
        }
    })
}
