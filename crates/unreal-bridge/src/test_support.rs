//! Fake connectors and loopback peers for tests

use crate::config::BridgeConfig;
use crate::transport::Connector;
use async_trait::async_trait;
use serde::de::IgnoredAny;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::io::{AsyncRead, AsyncReadExt, AsyncWriteExt, DuplexStream};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;
use unreal_mcp_core::ConnectError;

/// Hands out in-memory streams and keeps the peer ends
pub(crate) struct DuplexConnector {
    capacity: usize,
    peers: Arc<Mutex<Vec<DuplexStream>>>,
}

impl Default for DuplexConnector {
    fn default() -> Self {
        Self::with_capacity(64 * 1024)
    }
}

impl DuplexConnector {
    /// Streams that stop accepting writes once `capacity` bytes sit unread
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            capacity,
            peers: Arc::default(),
        }
    }

    pub fn peers(&self) -> Arc<Mutex<Vec<DuplexStream>>> {
        self.peers.clone()
    }
}

#[async_trait]
impl Connector for DuplexConnector {
    type Stream = DuplexStream;

    async fn connect(&self, _config: &BridgeConfig) -> Result<DuplexStream, ConnectError> {
        let (client, peer) = tokio::io::duplex(self.capacity);
        self.peers.lock().unwrap().push(peer);
        Ok(client)
    }
}

/// Always refuses
pub(crate) struct RefusingConnector;

#[async_trait]
impl Connector for RefusingConnector {
    type Stream = DuplexStream;

    async fn connect(&self, config: &BridgeConfig) -> Result<DuplexStream, ConnectError> {
        Err(ConnectError::Refused {
            addr: config.address(),
        })
    }
}

/// Hands out streams whose peer end is already dropped
pub(crate) struct HungUpConnector;

#[async_trait]
impl Connector for HungUpConnector {
    type Stream = DuplexStream;

    async fn connect(&self, _config: &BridgeConfig) -> Result<DuplexStream, ConnectError> {
        let (client, _peer) = tokio::io::duplex(1024);
        Ok(client)
    }
}

/// What the loopback peer does with one connection
pub(crate) enum PeerAction {
    /// Read the request, write these chunks, close
    Reply(Vec<Vec<u8>>),
    /// Read the request, answer nothing, wait for the client to hang up
    Silent,
}

impl PeerAction {
    pub fn reply(bytes: &[u8]) -> Self {
        PeerAction::Reply(vec![bytes.to_vec()])
    }
}

/// Start a TCP peer on 127.0.0.1 that serves one connection per action
///
/// The join handle yields the raw request bytes in arrival order.
pub(crate) async fn spawn_peer(actions: Vec<PeerAction>) -> (BridgeConfig, JoinHandle<Vec<Vec<u8>>>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let port = listener.local_addr().unwrap().port();
    let config = BridgeConfig::default()
        .with_port(port)
        .with_connect_timeout(Duration::from_secs(2))
        .with_io_timeout(Duration::from_secs(2));

    let handle = tokio::spawn(async move {
        let mut requests = Vec::new();
        for action in actions {
            let (mut socket, _) = listener.accept().await.unwrap();
            requests.push(read_request(&mut socket).await);

            match action {
                PeerAction::Reply(chunks) => {
                    for chunk in chunks {
                        socket.write_all(&chunk).await.unwrap();
                        socket.flush().await.unwrap();
                        tokio::time::sleep(Duration::from_millis(5)).await;
                    }
                }
                PeerAction::Silent => {
                    let mut rest = Vec::new();
                    let _ = socket.read_to_end(&mut rest).await;
                }
            }
        }
        requests
    });

    (config, handle)
}

/// Read until the bytes hold one JSON document (plus an optional newline)
async fn read_request<R: AsyncRead + Unpin>(reader: &mut R) -> Vec<u8> {
    let mut request = Vec::new();
    let mut chunk = [0u8; 1024];
    loop {
        let n = reader.read(&mut chunk).await.unwrap();
        request.extend_from_slice(&chunk[..n]);
        if n == 0 || serde_json::from_slice::<IgnoredAny>(&request).is_ok() {
            // A newline terminator may trail in a separate segment
            if !request.ends_with(b"\n") {
                let _ = tokio::time::timeout(Duration::from_millis(20), async {
                    let n = reader.read(&mut chunk).await.unwrap_or(0);
                    request.extend_from_slice(&chunk[..n]);
                })
                .await;
            }
            return request;
        }
    }
}
