//! Response framing
//!
//! The editor plugin writes one JSON document per connection and then closes
//! the socket, with no length prefix. `Framing::TrialParse` treats the buffer
//! as complete the moment it parses; `Framing::Newline` waits for a `\n`.
//!
//! `MessageFramer` holds the buffering rules and does no I/O, so it can be
//! driven chunk by chunk. `read_message` wraps it around a stream with a
//! per-read timeout.

use crate::config::{Framing, READ_CHUNK};
use serde::de::IgnoredAny;
use std::time::Duration;
use tokio::io::{AsyncRead, AsyncReadExt};
use tracing::{debug, warn};
use unreal_mcp_core::FramingError;

/// Accumulates response bytes until a message is complete
#[derive(Debug)]
pub struct MessageFramer {
    framing: Framing,
    max_bytes: usize,
    buffer: Vec<u8>,
}

impl MessageFramer {
    pub fn new(framing: Framing, max_bytes: usize) -> Self {
        Self {
            framing,
            max_bytes,
            buffer: Vec::new(),
        }
    }

    /// Bytes buffered so far
    pub fn buffered(&self) -> usize {
        self.buffer.len()
    }

    /// Append a chunk; returns the message once it is complete
    pub fn push(&mut self, chunk: &[u8]) -> Result<Option<Vec<u8>>, FramingError> {
        match self.framing {
            Framing::TrialParse => self.push_trial_parse(chunk),
            Framing::Newline => self.push_newline(chunk),
        }
    }

    fn push_trial_parse(&mut self, chunk: &[u8]) -> Result<Option<Vec<u8>>, FramingError> {
        self.buffer.extend_from_slice(chunk);
        if self.buffer.len() > self.max_bytes {
            return Err(FramingError::Overflow {
                limit: self.max_bytes,
            });
        }

        // A trailing digit may belong to a number that is still arriving
        if may_still_grow(&self.buffer) || !parses(&self.buffer) {
            return Ok(None);
        }
        Ok(Some(std::mem::take(&mut self.buffer)))
    }

    fn push_newline(&mut self, chunk: &[u8]) -> Result<Option<Vec<u8>>, FramingError> {
        let start = self.buffer.len();
        self.buffer.extend_from_slice(chunk);

        if let Some(offset) = self.buffer[start..].iter().position(|b| *b == b'\n') {
            let end = start + offset;
            if end > self.max_bytes {
                return Err(FramingError::Overflow {
                    limit: self.max_bytes,
                });
            }
            let trailing = self.buffer.len() - end - 1;
            if trailing > 0 {
                debug!("Discarding {} byte(s) after the message terminator", trailing);
            }
            self.buffer.truncate(end);
            let message = std::mem::take(&mut self.buffer);
            return Ok(Some(message.trim_ascii().to_vec()));
        }

        if self.buffer.len() > self.max_bytes {
            return Err(FramingError::Overflow {
                limit: self.max_bytes,
            });
        }
        Ok(None)
    }

    /// Take the buffer if it already holds a complete document
    ///
    /// Used when the stream ends or a read times out.
    pub fn salvage(&mut self) -> Option<Vec<u8>> {
        if parses(&self.buffer) {
            let message = std::mem::take(&mut self.buffer);
            Some(message.trim_ascii().to_vec())
        } else {
            None
        }
    }
}

fn parses(buffer: &[u8]) -> bool {
    serde_json::from_slice::<IgnoredAny>(buffer).is_ok()
}

fn may_still_grow(buffer: &[u8]) -> bool {
    buffer
        .trim_ascii_end()
        .last()
        .is_some_and(u8::is_ascii_digit)
}

/// Read one message from `reader`
///
/// Every read is bounded by `io_timeout`; there is no overall deadline.
pub async fn read_message<R>(
    reader: &mut R,
    framing: Framing,
    io_timeout: Duration,
    max_bytes: usize,
) -> Result<Vec<u8>, FramingError>
where
    R: AsyncRead + Unpin,
{
    let mut framer = MessageFramer::new(framing, max_bytes);
    let mut chunk = vec![0u8; READ_CHUNK];

    loop {
        let n = match tokio::time::timeout(io_timeout, reader.read(&mut chunk)).await {
            Ok(result) => result?,
            Err(_) => {
                let received = framer.buffered();
                if let Some(message) = framer.salvage() {
                    warn!(
                        "Read timed out after {:?}; using the {} byte(s) already received",
                        io_timeout, received
                    );
                    return Ok(message);
                }
                return Err(FramingError::Timeout {
                    after: io_timeout,
                    received,
                });
            }
        };

        if n == 0 {
            let received = framer.buffered();
            return framer
                .salvage()
                .ok_or(FramingError::ClosedEarly { received });
        }

        if let Some(message) = framer.push(&chunk[..n])? {
            return Ok(message);
        }
    }
}
