//! Editor bridge trait

use async_trait::async_trait;
use unreal_mcp_core::{BridgeResponse, Params};

/// Trait for reaching a running editor
///
/// Implement this trait to expose an editor connection to the MCP server.
/// `send` never fails: transport and protocol problems come back as
/// `ok: false` responses so tool calls can report them to the client.
#[async_trait]
pub trait EditorBridge: Send + Sync + 'static {
    /// Send one command and wait for its normalized response
    async fn send(&self, command: &str, params: Params) -> BridgeResponse;

    /// Connection details exposed as the `unreal://bridge` resource
    fn describe(&self) -> serde_json::Value {
        serde_json::json!({})
    }
}
