//! Transport abstractions for the editor bridge
//!
//! A `Connector` opens one byte stream to the editor; a `ConnectionHandle`
//! owns that stream for exactly one exchange.

use crate::config::BridgeConfig;
use async_trait::async_trait;
use tokio::io::{AsyncRead, AsyncWrite, AsyncWriteExt};
use tracing::debug;
use unreal_mcp_core::{ChannelError, ConnectError, TransportKind};

/// Opens streams to the editor endpoint
#[async_trait]
pub trait Connector: Send + Sync + 'static {
    type Stream: AsyncRead + AsyncWrite + Unpin + Send + 'static;

    /// Open a new stream, honoring `connect_timeout`
    async fn connect(&self, config: &BridgeConfig) -> Result<Self::Stream, ConnectError>;
}

/// One live stream used for a single exchange
#[derive(Debug)]
pub struct ConnectionHandle<S> {
    id: u64,
    stream: Option<S>,
    usable: bool,
}

impl<S: AsyncWrite + Unpin> ConnectionHandle<S> {
    pub fn new(id: u64, stream: S) -> Self {
        Self {
            id,
            stream: Some(stream),
            usable: true,
        }
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn is_usable(&self) -> bool {
        self.usable && self.stream.is_some()
    }

    /// Borrow the stream of a usable handle
    pub fn stream_mut(&mut self) -> Result<&mut S, ChannelError> {
        if !self.usable {
            return Err(ChannelError::transport(
                TransportKind::Unusable,
                format!("connection #{} is no longer usable", self.id),
            ));
        }
        self.stream.as_mut().ok_or_else(|| {
            ChannelError::transport(
                TransportKind::Unusable,
                format!("connection #{} has no stream", self.id),
            )
        })
    }

    /// Shut the stream down; shutdown errors are ignored
    pub async fn close(&mut self) {
        self.usable = false;
        if let Some(mut stream) = self.stream.take() {
            if let Err(e) = stream.shutdown().await {
                debug!("Shutdown of connection #{} failed: {}", self.id, e);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::AsyncReadExt;

    #[tokio::test]
    async fn test_close_marks_unusable_and_signals_peer() {
        let (client, mut peer) = tokio::io::duplex(64);
        let mut handle = ConnectionHandle::new(1, client);
        assert!(handle.is_usable());
        assert!(handle.stream_mut().is_ok());

        handle.close().await;
        assert!(!handle.is_usable());
        assert!(matches!(
            handle.stream_mut(),
            Err(ChannelError::Transport {
                kind: TransportKind::Unusable,
                ..
            })
        ));

        let mut buf = [0u8; 8];
        assert_eq!(peer.read(&mut buf).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_double_close_is_noop() {
        let (client, _peer) = tokio::io::duplex(64);
        let mut handle = ConnectionHandle::new(7, client);
        handle.close().await;
        handle.close().await;
        assert_eq!(handle.id(), 7);
        assert!(!handle.is_usable());
    }
}
