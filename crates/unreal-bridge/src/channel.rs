//! Command channel: one request, one response, one connection

use crate::config::{BridgeConfig, Framing};
use crate::framer::read_message;
use crate::lifecycle::ConnectionManager;
use crate::tcp::TcpConnector;
use crate::transport::Connector;
use serde_json::Value;
use std::sync::Arc;
use tokio::io::AsyncWriteExt;
use tokio::sync::Mutex;
use tracing::debug;
use unreal_mcp_core::{
    BridgeResponse, ChannelError, CommandEnvelope, Result, TransportKind, normalize,
};

/// Sends command envelopes to the editor and normalizes the replies
///
/// Calls are serialized: the connection manager lock is held from connect
/// until the connection is released.
pub struct CommandChannel<C: Connector = TcpConnector> {
    config: Arc<BridgeConfig>,
    manager: Mutex<ConnectionManager<C>>,
}

impl CommandChannel<TcpConnector> {
    pub fn new(config: BridgeConfig) -> Self {
        Self::with_connector(TcpConnector, config)
    }
}

impl<C: Connector> CommandChannel<C> {
    pub fn with_connector(connector: C, config: BridgeConfig) -> Self {
        let config = Arc::new(config);
        Self {
            manager: Mutex::new(ConnectionManager::new(connector, config.clone())),
            config,
        }
    }

    pub fn config(&self) -> &BridgeConfig {
        &self.config
    }

    /// Connects attempted over the channel's lifetime
    pub async fn connect_attempts(&self) -> u64 {
        self.manager.lock().await.connect_attempts()
    }

    /// Run one exchange
    ///
    /// The connection is released on every path, including failures.
    pub async fn call(&self, envelope: &CommandEnvelope) -> Result<BridgeResponse> {
        let mut data = envelope.to_bytes()?;
        if self.config.framing == Framing::Newline {
            data.push(b'\n');
        }
        debug!("[MCP→UE] len={} json={}", data.len(), preview(&data));

        let mut manager = self.manager.lock().await;
        let received = self.exchange(&mut manager, &data).await;
        manager.release().await;
        drop(manager);

        let raw = received?;
        debug!("[UE→MCP] len={} json={}", raw.len(), preview(&raw));

        let value: Value =
            serde_json::from_slice(&raw).map_err(|e| ChannelError::Decode(e.to_string()))?;
        Ok(normalize(Some(value)))
    }

    async fn exchange(&self, manager: &mut ConnectionManager<C>, data: &[u8]) -> Result<Vec<u8>> {
        let io_timeout = self.config.io_timeout;
        let handle = manager.acquire().await?;
        let stream = handle.stream_mut()?;

        let written = tokio::time::timeout(io_timeout, async {
            stream.write_all(data).await?;
            stream.flush().await
        })
        .await;
        match written {
            Ok(Ok(())) => {}
            Ok(Err(e)) => {
                return Err(ChannelError::transport(
                    TransportKind::Write,
                    format!("write failed: {}", e),
                ));
            }
            Err(_) => {
                return Err(ChannelError::transport(
                    TransportKind::WriteTimeout,
                    format!("write timed out after {:?}", io_timeout),
                ));
            }
        }

        let message = read_message(
            stream,
            self.config.framing,
            io_timeout,
            self.config.max_message_bytes,
        )
        .await?;
        Ok(message)
    }
}

fn preview(data: &[u8]) -> String {
    String::from_utf8_lossy(data).chars().take(200).collect()
}
