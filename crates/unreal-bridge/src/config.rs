//! Bridge configuration

use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

/// Default editor host
pub const DEFAULT_HOST: &str = "127.0.0.1";

/// Default port of the editor plugin's command listener
pub const DEFAULT_PORT: u16 = 55557;

/// Hard bound on a single response (1 MiB)
pub const MAX_MESSAGE_BYTES: usize = 1024 * 1024;

/// Requested send/receive socket buffer size (64 KiB)
pub const SOCKET_BUFFER_BYTES: u32 = 64 * 1024;

/// Size of a single read from the stream
pub const READ_CHUNK: usize = 4096;

/// How the end of a response is detected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Framing {
    /// Complete as soon as the buffered bytes parse as one JSON document
    #[default]
    TrialParse,
    /// Complete at the first `\n`; requests are `\n` terminated too
    Newline,
}

impl Framing {
    pub fn as_str(&self) -> &'static str {
        match self {
            Framing::TrialParse => "trial-parse",
            Framing::Newline => "newline",
        }
    }
}

impl fmt::Display for Framing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Configuration for the editor connection
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BridgeConfig {
    /// Host to connect to (default: 127.0.0.1)
    pub host: String,
    /// Plugin port (default: 55557)
    pub port: u16,
    /// Bound on establishing a connection
    pub connect_timeout: Duration,
    /// Bound on each write and each read
    pub io_timeout: Duration,
    /// Response framing
    pub framing: Framing,
    /// Responses larger than this fail with an overflow
    pub max_message_bytes: usize,
    /// Requested socket buffer size
    pub socket_buffer_bytes: u32,
}

impl Default for BridgeConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.into(),
            port: DEFAULT_PORT,
            connect_timeout: Duration::from_secs(5),
            io_timeout: Duration::from_secs(5),
            framing: Framing::default(),
            max_message_bytes: MAX_MESSAGE_BYTES,
            socket_buffer_bytes: SOCKET_BUFFER_BYTES,
        }
    }
}

impl BridgeConfig {
    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = host.into();
        self
    }

    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    pub fn with_connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }

    pub fn with_io_timeout(mut self, timeout: Duration) -> Self {
        self.io_timeout = timeout;
        self
    }

    pub fn with_framing(mut self, framing: Framing) -> Self {
        self.framing = framing;
        self
    }

    pub fn with_max_message_bytes(mut self, max: usize) -> Self {
        self.max_message_bytes = max;
        self
    }

    pub fn with_socket_buffer_bytes(mut self, size: u32) -> Self {
        self.socket_buffer_bytes = size;
        self
    }

    /// `host:port` of the editor endpoint
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = BridgeConfig::default();
        assert_eq!(config.address(), "127.0.0.1:55557");
        assert_eq!(config.connect_timeout, Duration::from_secs(5));
        assert_eq!(config.io_timeout, Duration::from_secs(5));
        assert_eq!(config.framing, Framing::TrialParse);
        assert_eq!(config.max_message_bytes, 1 << 20);
        assert_eq!(config.socket_buffer_bytes, 65536);
    }

    #[test]
    fn test_builder() {
        let config = BridgeConfig::default()
            .with_host("localhost")
            .with_port(6000)
            .with_framing(Framing::Newline)
            .with_io_timeout(Duration::from_millis(250));
        assert_eq!(config.address(), "localhost:6000");
        assert_eq!(config.framing, Framing::Newline);
        assert_eq!(config.io_timeout, Duration::from_millis(250));
    }

    #[test]
    fn test_framing_names() {
        assert_eq!(serde_json::to_value(Framing::TrialParse).unwrap(), "trial-parse");
        assert_eq!(Framing::Newline.to_string(), "newline");
    }
}
