//! Bridge to the Unreal editor via TCP

use crate::channel::CommandChannel;
use crate::config::BridgeConfig;
use crate::tcp::TcpConnector;
use crate::transport::Connector;
use async_trait::async_trait;
use serde_json::{Value, json};
use tracing::{error, warn};
use unreal_mcp_core::{BridgeResponse, CommandEnvelope, Params, UNKNOWN_ERROR};
use unreal_mcp_server::EditorBridge;

/// Connection to the editor plugin
///
/// `send` never fails: connection, framing and decode failures all come back
/// as `ok: false` responses.
pub struct UnrealBridge<C: Connector = TcpConnector> {
    channel: CommandChannel<C>,
}

impl UnrealBridge<TcpConnector> {
    /// Create a bridge that connects over TCP
    pub fn new(config: BridgeConfig) -> Self {
        Self::with_connector(TcpConnector, config)
    }
}

impl Default for UnrealBridge<TcpConnector> {
    fn default() -> Self {
        Self::new(BridgeConfig::default())
    }
}

impl<C: Connector> UnrealBridge<C> {
    /// Create a bridge over a custom connector
    pub fn with_connector(connector: C, config: BridgeConfig) -> Self {
        Self {
            channel: CommandChannel::with_connector(connector, config),
        }
    }

    pub fn config(&self) -> &BridgeConfig {
        self.channel.config()
    }

    pub fn channel(&self) -> &CommandChannel<C> {
        &self.channel
    }

    /// Send one command and wait for its normalized response
    pub async fn send_command(&self, command: &str, params: Params) -> BridgeResponse {
        let envelope = match CommandEnvelope::new(command, params) {
            Ok(envelope) => envelope,
            Err(e) => {
                warn!("Rejected command {:?}: {}", command, e);
                return e.into();
            }
        };

        match self.channel.call(&envelope).await {
            Ok(response) => {
                if !response.ok {
                    warn!(
                        "Editor reported an error for {}: {}",
                        command,
                        response.error_text.as_deref().unwrap_or(UNKNOWN_ERROR)
                    );
                }
                response
            }
            Err(e) => {
                error!("Command {} failed: {}", command, e);
                e.into()
            }
        }
    }
}

#[async_trait]
impl<C: Connector> EditorBridge for UnrealBridge<C> {
    async fn send(&self, command: &str, params: Params) -> BridgeResponse {
        self.send_command(command, params).await
    }

    fn describe(&self) -> Value {
        let config = self.config();
        json!({
            "address": config.address(),
            "framing": config.framing,
            "connect_timeout_ms": config.connect_timeout.as_millis() as u64,
            "io_timeout_ms": config.io_timeout.as_millis() as u64,
            "max_message_bytes": config.max_message_bytes,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Framing;
    use crate::test_support::{PeerAction, RefusingConnector, spawn_peer};
    use std::sync::Arc;
    use std::time::Duration;

    fn params(value: Value) -> Params {
        match value {
            Value::Object(map) => map,
            _ => panic!("not an object"),
        }
    }

    #[tokio::test]
    async fn test_ping_roundtrip() {
        let (config, _peer) = spawn_peer(vec![PeerAction::reply(
            br#"{"status":"success","result":{"message":"pong"}}"#,
        )])
        .await;
        let bridge = UnrealBridge::new(config);

        let response = bridge.send("ping", Params::new()).await;
        assert!(response.ok);
        assert_eq!(response.payload, Some(json!({ "message": "pong" })));
        assert_eq!(response.error_text, None);
    }

    #[tokio::test]
    async fn test_both_shapes_normalize_alike() {
        let (config, _peer) = spawn_peer(vec![
            PeerAction::reply(br#"{"status":"error","error":"Actor not found: Ghost"}"#),
            PeerAction::reply(br#"{"success":false,"error":"Actor not found: Ghost"}"#),
        ])
        .await;
        let bridge = UnrealBridge::new(config);

        let a = bridge.send("delete_actor", params(json!({ "name": "Ghost" }))).await;
        let b = bridge.send("delete_actor", params(json!({ "name": "Ghost" }))).await;
        assert_eq!(a, b);
        assert_eq!(a, BridgeResponse::failure("Actor not found: Ghost"));
    }

    #[tokio::test]
    async fn test_unreachable_editor_is_failure_response() {
        let bridge = UnrealBridge::with_connector(RefusingConnector, BridgeConfig::default());

        let response = bridge.send("ping", Params::new()).await;
        assert!(!response.ok);
        assert!(response.error_text.unwrap().contains("Connection refused"));
    }

    #[tokio::test]
    async fn test_blank_command_is_failure_response() {
        let bridge = UnrealBridge::with_connector(RefusingConnector, BridgeConfig::default());

        let response = bridge.send("  ", Params::new()).await;
        assert!(!response.ok);
        assert!(response.error_text.unwrap().starts_with("Invalid command"));
        assert_eq!(bridge.channel().connect_attempts().await, 0);
    }

    #[tokio::test]
    async fn test_silent_peer_reports_timeout() {
        let (config, _peer) = spawn_peer(vec![PeerAction::Silent]).await;
        let bridge = UnrealBridge::new(config.with_io_timeout(Duration::from_millis(150)));

        let response = bridge.send("get_actors_in_level", Params::new()).await;
        assert!(!response.ok);
        assert!(response.error_text.unwrap().contains("Timed out"));
    }

    #[tokio::test]
    async fn test_concurrent_callers_are_serialized() {
        let reply = br#"{"status":"success","result":{}}"#;
        let (config, peer) = spawn_peer(vec![
            PeerAction::reply(reply),
            PeerAction::reply(reply),
            PeerAction::reply(reply),
            PeerAction::reply(reply),
        ])
        .await;
        let bridge = Arc::new(UnrealBridge::new(config));

        let tasks: Vec<_> = (0..4)
            .map(|i| {
                let bridge = bridge.clone();
                tokio::spawn(async move {
                    bridge
                        .send("find_actors_by_name", params(json!({ "pattern": format!("Cube{}", i) })))
                        .await
                })
            })
            .collect();
        for task in tasks {
            assert!(task.await.unwrap().ok);
        }

        let requests = peer.await.unwrap();
        assert_eq!(requests.len(), 4);
        for request in requests {
            let value: Value = serde_json::from_slice(&request).unwrap();
            assert_eq!(value["type"], "find_actors_by_name");
        }
        assert_eq!(bridge.channel().connect_attempts().await, 4);
    }

    #[test]
    fn test_describe() {
        let bridge = UnrealBridge::new(
            BridgeConfig::default()
                .with_port(6001)
                .with_framing(Framing::Newline),
        );
        let info = bridge.describe();
        assert_eq!(info["address"], "127.0.0.1:6001");
        assert_eq!(info["framing"], "newline");
        assert_eq!(info["io_timeout_ms"], 5000);
    }
}
