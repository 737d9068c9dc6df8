//! MCP tool handlers for Unreal editor commands
//!
//! Every tool maps onto one editor command of the same name. Arguments are
//! forwarded as command params after two checks: required keys must be
//! present, and documented defaults fill keys the client left out. The
//! payload itself stays opaque.

mod actor;
mod blueprint;
mod editor;
mod node;
mod umg;

use crate::editor::EditorBridge;
use crate::mcp::{RequestId, Response, error_codes};
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, warn};
use unreal_mcp_core::{BridgeResponse, Params, UNKNOWN_ERROR};

/// Tool definition for MCP tools/list
#[derive(Debug, Clone, Serialize)]
pub struct ToolDef {
    pub name: &'static str,
    pub description: &'static str,
    #[serde(rename = "inputSchema")]
    pub input_schema: Value,
    /// Values sent when the client omits the key or passes null
    #[serde(skip)]
    pub defaults: Params,
}

impl ToolDef {
    fn new(name: &'static str, description: &'static str, input_schema: Value) -> Self {
        Self {
            name,
            description,
            input_schema,
            defaults: Params::new(),
        }
    }

    fn with_defaults(mut self, defaults: Value) -> Self {
        if let Value::Object(map) = defaults {
            self.defaults = map;
        }
        self
    }

    /// Keys listed as required by the input schema
    pub fn required(&self) -> impl Iterator<Item = &str> {
        self.input_schema
            .get("required")
            .and_then(Value::as_array)
            .into_iter()
            .flatten()
            .filter_map(Value::as_str)
    }

    /// Turn tool arguments into command params
    pub fn build_params(&self, arguments: Value) -> std::result::Result<Params, String> {
        let mut params = match arguments {
            Value::Null => Params::new(),
            Value::Object(map) => map,
            _ => return Err(format!("Arguments for {} must be a JSON object", self.name)),
        };

        let missing: Vec<&str> = self
            .required()
            .filter(|key| params.get(*key).is_none_or(Value::is_null))
            .collect();
        if !missing.is_empty() {
            return Err(format!(
                "Missing required argument(s) for {}: {}",
                self.name,
                missing.join(", ")
            ));
        }

        for (key, default) in &self.defaults {
            if params.get(key).is_none_or(Value::is_null) {
                params.insert(key.clone(), default.clone());
            }
        }

        Ok(params)
    }
}

/// Build an object schema from its properties and required keys
fn object_schema(properties: Value, required: &[&str]) -> Value {
    serde_json::json!({
        "type": "object",
        "properties": properties,
        "required": required,
    })
}

/// Get list of available tools
pub fn list_tools() -> Vec<ToolDef> {
    let mut tools = vec![ToolDef::new(
        "ping",
        "Check that the editor plugin is reachable. Returns {\"message\": \"pong\"}.",
        object_schema(serde_json::json!({}), &[]),
    )];
    tools.extend(actor::tools());
    tools.extend(editor::tools());
    tools.extend(blueprint::tools());
    tools.extend(node::tools());
    tools.extend(umg::tools());
    tools
}

/// Look up a tool by name
pub fn find_tool(name: &str) -> Option<ToolDef> {
    list_tools().into_iter().find(|tool| tool.name == name)
}

/// Handle a tools/call request
pub async fn handle_tool_call<B: EditorBridge>(
    name: &str,
    arguments: Value,
    id: Option<RequestId>,
    bridge: &B,
) -> Response {
    let Some(tool) = find_tool(name) else {
        return Response::error(
            id,
            error_codes::INVALID_PARAMS,
            format!("Unknown tool: {}", name),
        );
    };

    let params = match tool.build_params(arguments) {
        Ok(params) => params,
        Err(message) => return Response::error(id, error_codes::INVALID_PARAMS, message),
    };

    debug!("Calling tool {} with {} param(s)", tool.name, params.len());
    let response = bridge.send(tool.name, params).await;
    if !response.ok {
        warn!(
            "Tool {} failed: {}",
            tool.name,
            response.error_text.as_deref().unwrap_or(UNKNOWN_ERROR)
        );
    }

    Response::success(id, tool_result(&response))
}

/// Wrap a normalized response as MCP tool content
fn tool_result(response: &BridgeResponse) -> Value {
    let text = serde_json::to_string(response)
        .unwrap_or_else(|e| format!("{{\"ok\":false,\"payload\":null,\"error_text\":\"{}\"}}", e));
    serde_json::json!({
        "content": [{ "type": "text", "text": text }],
        "isError": !response.ok,
    })
}
