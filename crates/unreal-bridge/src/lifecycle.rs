//! Connection lifecycle
//!
//! The editor plugin closes its side after every response, so a connection
//! is never reused: each exchange acquires a fresh one and releases it after.

use crate::config::BridgeConfig;
use crate::transport::{ConnectionHandle, Connector};
use std::sync::Arc;
use tracing::{debug, info};
use unreal_mcp_core::ConnectError;

/// Owns at most one open connection to the editor
pub struct ConnectionManager<C: Connector> {
    connector: C,
    config: Arc<BridgeConfig>,
    current: Option<ConnectionHandle<C::Stream>>,
    next_id: u64,
    connect_attempts: u64,
}

impl<C: Connector> ConnectionManager<C> {
    pub fn new(connector: C, config: Arc<BridgeConfig>) -> Self {
        Self {
            connector,
            config,
            current: None,
            next_id: 0,
            connect_attempts: 0,
        }
    }

    /// Close whatever is open and connect again
    pub async fn acquire(&mut self) -> Result<&mut ConnectionHandle<C::Stream>, ConnectError> {
        self.release().await;

        self.connect_attempts += 1;
        let stream = self.connector.connect(&self.config).await?;

        self.next_id += 1;
        let id = self.next_id;
        info!("Connected to Unreal at {} (connection #{})", self.config.address(), id);

        Ok(self.current.insert(ConnectionHandle::new(id, stream)))
    }

    /// Close the open connection, if any
    pub async fn release(&mut self) {
        if let Some(mut handle) = self.current.take() {
            handle.close().await;
            debug!("Closed connection #{}", handle.id());
        }
    }

    pub fn is_connected(&self) -> bool {
        self.current.as_ref().is_some_and(ConnectionHandle::is_usable)
    }

    /// Number of connects attempted, successful or not
    pub fn connect_attempts(&self) -> u64 {
        self.connect_attempts
    }

    pub fn config(&self) -> &BridgeConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{DuplexConnector, RefusingConnector};
    use tokio::io::AsyncReadExt;

    fn manager<C: Connector>(connector: C) -> ConnectionManager<C> {
        ConnectionManager::new(connector, Arc::new(BridgeConfig::default()))
    }

    #[tokio::test]
    async fn test_acquire_always_connects_fresh() {
        let mut manager = manager(DuplexConnector::default());

        let first = manager.acquire().await.unwrap().id();
        let second = manager.acquire().await.unwrap().id();

        assert_ne!(first, second);
        assert_eq!(manager.connect_attempts(), 2);
        assert!(manager.is_connected());
    }

    #[tokio::test]
    async fn test_acquire_closes_previous_connection() {
        let connector = DuplexConnector::default();
        let peers = connector.peers();
        let mut manager = manager(connector);

        manager.acquire().await.unwrap();
        manager.acquire().await.unwrap();

        let mut first_peer = peers.lock().unwrap().remove(0);
        let mut buf = [0u8; 8];
        assert_eq!(first_peer.read(&mut buf).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_release_is_idempotent() {
        let mut manager = manager(DuplexConnector::default());

        manager.release().await;
        manager.acquire().await.unwrap();
        manager.release().await;
        manager.release().await;

        assert!(!manager.is_connected());
        assert_eq!(manager.connect_attempts(), 1);
    }

    #[tokio::test]
    async fn test_failed_connect_is_counted() {
        let mut manager = manager(RefusingConnector);

        let err = manager.acquire().await.unwrap_err();
        assert!(matches!(err, ConnectError::Refused { .. }));
        assert_eq!(manager.connect_attempts(), 1);
        assert!(!manager.is_connected());
    }
}
