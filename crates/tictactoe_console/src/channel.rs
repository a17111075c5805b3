//! Line-oriented text channel between the game and its players.

use crate::error::ChannelError;
use std::io::{self, BufRead, Write};
use tracing::{instrument, trace, warn};

/// Two-way text channel the turn loop talks through.
pub trait TextChannel {
    /// Writes one line of output.
    ///
    /// Write failures are not reported to the caller.
    fn write(&mut self, line: &str);

    /// Reads one line of input, including its line terminator if present.
    ///
    /// # Errors
    ///
    /// Returns [`ChannelError`] when the reader fails or has no more input.
    fn read_line(&mut self) -> Result<String, ChannelError>;
}

/// [`TextChannel`] over any buffered reader and writer.
#[derive(Debug)]
pub struct LineChannel<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> LineChannel<R, W> {
    /// Creates a channel reading from `reader` and writing to `writer`.
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    /// Consumes the channel, returning the reader and writer.
    pub fn into_inner(self) -> (R, W) {
        (self.reader, self.writer)
    }
}

impl LineChannel<io::StdinLock<'static>, io::Stdout> {
    /// Channel bound to the process's stdin and stdout.
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> TextChannel for LineChannel<R, W> {
    #[instrument(skip(self))]
    fn write(&mut self, line: &str) {
        let result = writeln!(self.writer, "{}", line).and_then(|_| self.writer.flush());
        if let Err(e) = result {
            warn!(error = %e, "Failed to write line");
        }
    }

    #[instrument(skip(self))]
    fn read_line(&mut self) -> Result<String, ChannelError> {
        let mut line = String::new();
        let read = self.reader.read_line(&mut line)?;
        if read == 0 {
            return Err(ChannelError::Closed);
        }
        trace!(bytes = read, "Line read");
        Ok(line)
    }
}
