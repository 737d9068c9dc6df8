//! TCP connector for the editor plugin listener

use crate::config::BridgeConfig;
use crate::transport::Connector;
use async_trait::async_trait;
use std::io;
use std::net::SocketAddr;
use tokio::net::{TcpSocket, TcpStream, lookup_host};
use tracing::{debug, warn};
use unreal_mcp_core::ConnectError;

/// Connects to the editor over TCP
#[derive(Debug, Clone, Copy, Default)]
pub struct TcpConnector;

#[async_trait]
impl Connector for TcpConnector {
    type Stream = TcpStream;

    async fn connect(&self, config: &BridgeConfig) -> Result<TcpStream, ConnectError> {
        let addr = config.address();

        // Connect with timeout
        match tokio::time::timeout(config.connect_timeout, open(&addr, config)).await {
            Ok(result) => result,
            Err(_) => Err(ConnectError::Timeout {
                addr,
                after: config.connect_timeout,
            }),
        }
    }
}

/// Resolve the address and try each candidate in turn
async fn open(addr: &str, config: &BridgeConfig) -> Result<TcpStream, ConnectError> {
    let targets = lookup_host(addr).await.map_err(|e| ConnectError::Other {
        addr: addr.to_string(),
        reason: format!("address lookup failed: {}", e),
    })?;

    let mut last_error: Option<io::Error> = None;
    for target in targets {
        match connect_one(target, config).await {
            Ok(stream) => return Ok(stream),
            Err(e) => {
                debug!("Connect to {} failed: {}", target, e);
                last_error = Some(e);
            }
        }
    }

    Err(match last_error {
        Some(e) if e.kind() == io::ErrorKind::ConnectionRefused => ConnectError::Refused {
            addr: addr.to_string(),
        },
        Some(e) => ConnectError::Other {
            addr: addr.to_string(),
            reason: e.to_string(),
        },
        None => ConnectError::Other {
            addr: addr.to_string(),
            reason: "address resolved to nothing".into(),
        },
    })
}

async fn connect_one(target: SocketAddr, config: &BridgeConfig) -> io::Result<TcpStream> {
    let socket = if target.is_ipv4() {
        TcpSocket::new_v4()?
    } else {
        TcpSocket::new_v6()?
    };
    tune_socket(&socket, config.socket_buffer_bytes);

    let stream = socket.connect(target).await?;

    // Disable Nagle's algorithm for low latency
    if let Err(e) = stream.set_nodelay(true) {
        warn!("Failed to set TCP_NODELAY: {}", e);
    }

    Ok(stream)
}

/// Socket tuning is best effort
fn tune_socket(socket: &TcpSocket, buffer_bytes: u32) {
    if let Err(e) = socket.set_keepalive(true) {
        warn!("Failed to set SO_KEEPALIVE: {}", e);
    }
    if let Err(e) = socket.set_send_buffer_size(buffer_bytes) {
        warn!("Failed to set send buffer to {} bytes: {}", buffer_bytes, e);
    }
    if let Err(e) = socket.set_recv_buffer_size(buffer_bytes) {
        warn!("Failed to set receive buffer to {} bytes: {}", buffer_bytes, e);
    }
}
