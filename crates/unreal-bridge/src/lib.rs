//! Bridge between the MCP server and the Unreal editor plugin
//!
//! This crate provides:
//! - Connection configuration
//! - Transport abstraction (`Connector`) and the TCP connector
//! - Connection lifecycle: one fresh connection per command
//! - Response framing without a length prefix
//! - The command channel and the `UnrealBridge` facade

pub mod bridge;
pub mod channel;
pub mod config;
pub mod framer;
pub mod lifecycle;
pub mod tcp;
pub mod transport;

#[cfg(test)]
pub(crate) mod test_support;

pub use bridge::UnrealBridge;
pub use channel::CommandChannel;
pub use config::{BridgeConfig, Framing};
pub use framer::{MessageFramer, read_message};
pub use lifecycle::ConnectionManager;
pub use tcp::TcpConnector;
pub use transport::{ConnectionHandle, Connector};
