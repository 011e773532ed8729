//! Bounded line framing for client connections.
//!
//! # Responsibilities
//! - Split the inbound byte stream on `\n`, dropping a trailing `\r`
//! - Decode lossily so stray non-UTF-8 bytes reach the parser as text
//! - Cap buffered bytes per line; an oversized line is discarded through
//!   its terminator and reported once
//!
//! `next_line` is cancel safe: bytes are only consumed from the underlying
//! reader after they have been copied into the line buffer.

use tokio::io::{AsyncBufReadExt, AsyncRead, BufReader};

/// Default per-line limit, excluding the `\n`.
pub const DEFAULT_MAX_LINE_BYTES: usize = 1024;

/// One framed input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Line {
    Text(String),
    /// The line exceeded the limit and was thrown away.
    TooLong,
}

/// Reads `\n`-terminated lines of at most `max_len` bytes.
#[derive(Debug)]
pub struct LineReader<R> {
    inner: BufReader<R>,
    buf: Vec<u8>,
    max_len: usize,
    discarding: bool,
}

impl<R: AsyncRead + Unpin> LineReader<R> {
    pub fn new(reader: R, max_len: usize) -> Self {
        Self {
            inner: BufReader::new(reader),
            buf: Vec::new(),
            max_len,
            discarding: false,
        }
    }

    /// Next line, or `None` at end of stream.
    ///
    /// A final line without a terminator is still returned.
    pub async fn next_line(&mut self) -> std::io::Result<Option<Line>> {
        loop {
            let available = self.inner.fill_buf().await?;
            if available.is_empty() {
                if self.buf.is_empty() && !self.discarding {
                    return Ok(None);
                }
                return Ok(Some(self.take_line()));
            }

            let newline = available.iter().position(|&b| b == b'\n');
            let chunk = &available[..newline.unwrap_or(available.len())];

            if !self.discarding {
                if self.buf.len() + chunk.len() > self.max_len {
                    self.discarding = true;
                    self.buf.clear();
                } else {
                    self.buf.extend_from_slice(chunk);
                }
            }

            let used = newline.map_or(available.len(), |pos| pos + 1);
            self.inner.consume(used);

            if newline.is_some() {
                return Ok(Some(self.take_line()));
            }
        }
    }

    fn take_line(&mut self) -> Line {
        if self.discarding {
            self.discarding = false;
            self.buf.clear();
            return Line::TooLong;
        }

        let mut bytes = std::mem::take(&mut self.buf);
        if bytes.last() == Some(&b'\r') {
            bytes.pop();
        }
        Line::Text(String::from_utf8_lossy(&bytes).into_owned())
    }
}
