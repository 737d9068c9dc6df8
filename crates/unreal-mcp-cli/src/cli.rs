//! Command-line arguments

use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use std::time::Duration;
use unreal_bridge::config::{DEFAULT_HOST, DEFAULT_PORT, MAX_MESSAGE_BYTES};
use unreal_bridge::{BridgeConfig, Framing};

/// Response framing used by the editor plugin
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, ValueEnum)]
pub(crate) enum FramingArg {
    /// Complete once the bytes parse as JSON
    #[default]
    TrialParse,
    /// Newline-terminated messages
    Newline,
}

impl From<FramingArg> for Framing {
    fn from(arg: FramingArg) -> Self {
        match arg {
            FramingArg::TrialParse => Framing::TrialParse,
            FramingArg::Newline => Framing::Newline,
        }
    }
}

/// MCP server that drives a running Unreal editor
#[derive(Parser, Debug)]
#[command(name = "unreal-mcp", version, about)]
pub(crate) struct Cli {
    /// Editor host
    #[arg(long, env = "UNREAL_MCP_HOST", default_value = DEFAULT_HOST)]
    pub(crate) host: String,

    /// Editor plugin port
    #[arg(long, env = "UNREAL_MCP_PORT", default_value_t = DEFAULT_PORT)]
    pub(crate) port: u16,

    /// Connect timeout in milliseconds
    #[arg(
        long,
        env = "UNREAL_MCP_CONNECT_TIMEOUT_MS",
        value_name = "MS",
        default_value_t = 5000,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub(crate) connect_timeout_ms: u64,

    /// Timeout for each write and read in milliseconds
    #[arg(
        long,
        env = "UNREAL_MCP_IO_TIMEOUT_MS",
        value_name = "MS",
        default_value_t = 5000,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub(crate) io_timeout_ms: u64,

    /// How the end of a response is detected
    #[arg(long, env = "UNREAL_MCP_FRAMING", value_enum, default_value_t = FramingArg::TrialParse)]
    pub(crate) framing: FramingArg,

    /// Largest accepted response in bytes
    #[arg(long, env = "UNREAL_MCP_MAX_MESSAGE_BYTES", default_value_t = MAX_MESSAGE_BYTES)]
    pub(crate) max_message_bytes: usize,

    /// Log filter, e.g. `debug` or `unreal_bridge=trace` (overrides RUST_LOG)
    #[arg(long, value_name = "FILTER")]
    pub(crate) log_level: Option<String>,

    /// Write logs to this file instead of stderr
    #[arg(long, value_name = "PATH")]
    pub(crate) log_file: Option<PathBuf>,

    /// Skip the startup ping to the editor
    #[arg(long)]
    pub(crate) no_probe: bool,
}

impl Cli {
    pub(crate) fn bridge_config(&self) -> BridgeConfig {
        BridgeConfig::default()
            .with_host(self.host.clone())
            .with_port(self.port)
            .with_connect_timeout(Duration::from_millis(self.connect_timeout_ms))
            .with_io_timeout(Duration::from_millis(self.io_timeout_ms))
            .with_framing(self.framing.into())
            .with_max_message_bytes(self.max_message_bytes)
    }
}
