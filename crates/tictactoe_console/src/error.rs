//! Error types for the console front end.

use crate::orchestrator::Axis;
use derive_more::{Display, Error, From};
use tracing::instrument;

/// Failure of the text channel to deliver a line.
#[derive(Debug, Display, Error, From)]
pub enum ChannelError {
    /// The underlying reader failed.
    #[display("Failed to read line: {}", _0)]
    Io(std::io::Error),

    /// The reader reached end of input.
    #[display("Input closed")]
    Closed,
}

/// Why a line typed for a coordinate was rejected.
#[derive(Debug, Display, Error, From)]
pub enum InputError {
    /// No line could be read.
    #[display("Error reading input, please try again")]
    Read(ChannelError),

    /// The line is not an integer.
    #[display("Incorrect number format, please try again")]
    Format(std::num::ParseIntError),

    /// The integer lies outside `0..=2`.
    #[display("Value outside of correct range, please try again")]
    #[from(ignore)]
    Range(#[error(not(source))] i64),
}

/// Error that ends a console game early.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum ConsoleError {
    /// Reading a coordinate failed more times in a row than configured.
    #[display("Gave up reading coordinate {} after {} failed reads", axis, failures)]
    InputExhausted {
        /// Coordinate being prompted for.
        axis: Axis,
        /// Consecutive failed reads.
        failures: u32,
    },
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}
