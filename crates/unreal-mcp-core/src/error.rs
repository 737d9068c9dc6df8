//! Error types for the editor bridge

use std::time::Duration;
use thiserror::Error;

/// Result type for bridge operations
pub type Result<T> = std::result::Result<T, ChannelError>;

/// The editor endpoint could not be reached
#[derive(Debug, Error)]
pub enum ConnectError {
    /// No connection within `connect_timeout`
    #[error("Timed out connecting to {addr} after {after:?}")]
    Timeout { addr: String, after: Duration },

    /// Nothing is listening on the configured port
    #[error("Connection refused by {addr}. Is the editor running with the MCP plugin enabled?")]
    Refused { addr: String },

    /// Name resolution, socket setup or any other connect failure
    #[error("Failed to connect to {addr}: {reason}")]
    Other { addr: String, reason: String },
}

/// The byte stream did not yield a well-formed message
#[derive(Debug, Error)]
pub enum FramingError {
    /// Peer closed the stream before a complete message arrived
    #[error("Connection closed before a complete response arrived ({received} bytes buffered)")]
    ClosedEarly { received: usize },

    /// Buffer grew past the size bound without completing a message
    #[error("Response exceeded {limit} bytes without completing")]
    Overflow { limit: usize },

    /// A single read waited longer than `io_timeout`
    #[error("Timed out after {after:?} waiting for response ({received} bytes buffered)")]
    Timeout { after: Duration, received: usize },

    /// Underlying read failed
    #[error("Read failed: {0}")]
    Io(#[from] std::io::Error),
}

/// Step of an established connection that failed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransportKind {
    /// Reading the response failed
    Read,
    /// Writing the request failed
    Write,
    /// Writing the request took longer than `io_timeout`
    WriteTimeout,
    /// The connection was already closed
    Unusable,
}

/// Failure of one command exchange
#[derive(Debug, Error)]
pub enum ChannelError {
    /// Envelope rejected before anything was sent
    #[error("Invalid command: {0}")]
    InvalidCommand(String),

    /// Could not establish the connection for this call
    #[error(transparent)]
    Connect(#[from] ConnectError),

    /// Response bytes never formed a message
    #[error(transparent)]
    Framing(FramingError),

    /// Envelope could not be serialized
    #[error("Failed to encode command: {0}")]
    Encode(String),

    /// Response bytes are not valid JSON
    #[error("JSON decode error: {0}")]
    Decode(String),

    /// Read or write failure on an established connection
    #[error("Network error: {detail}")]
    Transport { kind: TransportKind, detail: String },
}

impl ChannelError {
    pub fn transport(kind: TransportKind, detail: impl Into<String>) -> Self {
        ChannelError::Transport {
            kind,
            detail: detail.into(),
        }
    }

    /// Whether the failure was caused by a connect, read or write deadline
    pub fn is_timeout(&self) -> bool {
        match self {
            ChannelError::Connect(ConnectError::Timeout { .. }) => true,
            ChannelError::Framing(FramingError::Timeout { .. }) => true,
            ChannelError::Transport {
                kind: TransportKind::WriteTimeout,
                ..
            } => true,
            _ => false,
        }
    }
}

impl From<FramingError> for ChannelError {
    fn from(err: FramingError) -> Self {
        match err {
            FramingError::Io(e) => {
                ChannelError::transport(TransportKind::Read, format!("read failed: {}", e))
            }
            other => ChannelError::Framing(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_framing_io_becomes_transport() {
        let err: ChannelError =
            FramingError::Io(io::Error::new(io::ErrorKind::ConnectionReset, "reset by peer")).into();
        match err {
            ChannelError::Transport { kind, detail } => {
                assert_eq!(kind, TransportKind::Read);
                assert!(detail.contains("reset by peer"));
            }
            other => panic!("Wrong error kind: {:?}", other),
        }
    }

    #[test]
    fn test_framing_kinds_are_preserved() {
        let err: ChannelError = FramingError::ClosedEarly { received: 0 }.into();
        assert!(matches!(
            err,
            ChannelError::Framing(FramingError::ClosedEarly { received: 0 })
        ));
    }

    #[test]
    fn test_timeout_classification() {
        let read_timeout: ChannelError = FramingError::Timeout {
            after: Duration::from_secs(5),
            received: 0,
        }
        .into();
        assert!(read_timeout.is_timeout());

        let connect_timeout = ChannelError::Connect(ConnectError::Timeout {
            addr: "127.0.0.1:55557".into(),
            after: Duration::from_secs(5),
        });
        assert!(connect_timeout.is_timeout());

        let refused = ChannelError::Connect(ConnectError::Refused {
            addr: "127.0.0.1:55557".into(),
        });
        assert!(!refused.is_timeout());

        let write_timeout = ChannelError::transport(TransportKind::WriteTimeout, "write stalled");
        assert!(write_timeout.is_timeout());
        // Only the kind decides, not the message text
        assert!(!ChannelError::transport(TransportKind::Write, "timed out").is_timeout());
        assert!(!ChannelError::Decode("eof".into()).is_timeout());
    }

    #[test]
    fn test_refused_message_names_address() {
        let err = ConnectError::Refused {
            addr: "127.0.0.1:55557".into(),
        };
        assert!(err.to_string().contains("127.0.0.1:55557"));
    }
}
