//! # unreal-mcp-core
//!
//! Core types for the Unreal editor command bridge.
//!
//! This crate provides the foundational types shared by the bridge and the MCP server:
//! - Command envelopes sent to the editor plugin
//! - The canonical response shape and the normalizer that produces it
//! - The bridge error taxonomy

pub mod envelope;
pub mod error;
pub mod response;

pub use envelope::{CommandEnvelope, Params};
pub use error::{ChannelError, ConnectError, FramingError, Result, TransportKind};
pub use response::{BridgeResponse, NO_RESPONSE, UNKNOWN_ERROR, normalize};
