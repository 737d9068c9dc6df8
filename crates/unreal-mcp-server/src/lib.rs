//! # unreal-mcp-server
//!
//! MCP server that exposes Unreal editor commands as tools.
//!
//! This crate provides:
//! - `EditorBridge` trait implemented by editor connections
//! - MCP JSON-RPC protocol handling
//! - The tool catalog (actors, editor, Blueprints, graph nodes, UMG)
//! - Prompts and resources
//! - stdio transport

pub mod editor;
pub mod error;
pub mod mcp;
pub mod prompts;
pub mod tools;
pub mod transport;

pub use editor::EditorBridge;
pub use error::{Result, ServerError};

use mcp::ServerInfo;
use std::sync::Arc;
use tokio::io::{AsyncBufRead, AsyncWrite};

/// Unreal MCP server
pub struct UnrealMcpServer<B: EditorBridge> {
    /// Connection to the editor
    bridge: Arc<B>,
    /// Name and version reported during initialize
    info: ServerInfo,
}

impl<B: EditorBridge> UnrealMcpServer<B> {
    /// Create a new server around the given bridge
    pub fn new(bridge: B) -> Self {
        Self {
            bridge: Arc::new(bridge),
            info: ServerInfo::default(),
        }
    }

    /// Override the reported server name and version
    pub fn with_info(mut self, info: ServerInfo) -> Self {
        self.info = info;
        self
    }

    /// Run the server on stdio transport
    pub async fn run_stdio(self) -> Result<()> {
        transport::stdio::run(self).await
    }

    /// Run the server over any line-oriented reader and writer
    pub async fn serve<R, W>(self, reader: R, writer: W) -> Result<()>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        transport::stdio::serve(&self, reader, writer).await
    }

    /// Get the editor bridge
    pub fn bridge(&self) -> &B {
        &self.bridge
    }

    /// Get the reported server info
    pub fn info(&self) -> &ServerInfo {
        &self.info
    }
}
