//! Turn loop driving a game over a text channel.

use crate::channel::TextChannel;
use crate::error::{ConsoleError, InputError};
use tictactoe_engine::{BOARD_SIZE, Engine, GameStatus};
use tracing::{debug, info, instrument, warn};

/// Greeting written before the first board.
pub const GREETING: &str = "Hello to tic tac toe game";

/// Notice written when a move targets a square that cannot be played.
pub const OCCUPIED_NOTICE: &str = "Filed already occupied, please try again";

/// Coordinate being prompted for. `X` selects the row, `Y` the column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display, strum::EnumIter)]
pub enum Axis {
    /// Row coordinate.
    X,
    /// Column coordinate.
    Y,
}

impl Axis {
    /// Prompt asking for this coordinate.
    pub fn prompt(self) -> String {
        format!(
            "Please type number between 0 and {} for coordinate {}",
            BOARD_SIZE - 1,
            self
        )
    }
}

/// Strips one trailing line terminator and parses a coordinate in `0..=2`.
///
/// # Errors
///
/// - [`InputError::Format`] if the text is not a decimal integer.
/// - [`InputError::Range`] if the integer is off the board.
pub fn parse_coordinate(line: &str) -> Result<i64, InputError> {
    let text = line.strip_suffix('\n').unwrap_or(line);
    let text = text.strip_suffix('\r').unwrap_or(text);

    let value: i64 = text.parse()?;
    if !(0..BOARD_SIZE as i64).contains(&value) {
        return Err(InputError::Range(value));
    }
    Ok(value)
}

/// Drives one game from greeting to result.
///
/// Every prompt, notice and board goes out through the channel; every
/// coordinate comes back through it. Bad input is answered with a notice and
/// the same prompt again.
#[derive(Debug)]
pub struct Orchestrator<E, C> {
    engine: E,
    channel: C,
    max_read_failures: Option<u32>,
}

impl<E: Engine, C: TextChannel> Orchestrator<E, C> {
    /// Creates an orchestrator that retries failed reads forever.
    pub fn new(engine: E, channel: C) -> Self {
        Self {
            engine,
            channel,
            max_read_failures: None,
        }
    }

    /// Gives up after `limit` consecutive failed reads of one coordinate.
    pub fn with_max_read_failures(mut self, limit: Option<u32>) -> Self {
        self.max_read_failures = limit;
        self
    }

    /// Returns the engine being driven.
    pub fn engine(&self) -> &E {
        &self.engine
    }

    /// Consumes the orchestrator, returning the engine and channel.
    pub fn into_parts(self) -> (E, C) {
        (self.engine, self.channel)
    }

    /// Plays until the engine reports a win or draw.
    ///
    /// Returns the final status after announcing it with its `Display` text.
    ///
    /// # Errors
    ///
    /// Returns [`ConsoleError::InputExhausted`] only when a read failure
    /// limit is configured and reached.
    #[instrument(skip_all)]
    pub fn run(&mut self) -> Result<GameStatus, ConsoleError> {
        info!("Starting game");
        self.channel.write(GREETING);

        let mut status = self.engine.status();
        while !status.is_over() {
            debug!(%status, "Next turn");
            let board = self.engine.board_rendering();
            self.channel.write(&board);

            self.handle_move()?;
            status = self.engine.status();
        }

        self.channel.write(&status.to_string());
        info!(%status, "Game finished");
        Ok(status)
    }

    /// Resolves and applies one move for the current player.
    ///
    /// A rejected move gets [`OCCUPIED_NOTICE`] and a fresh pair of
    /// coordinates; the board is not shown again.
    #[instrument(skip(self))]
    fn handle_move(&mut self) -> Result<(), ConsoleError> {
        loop {
            let player = self.engine.current_player();
            self.channel.write(&format!("{} move", player));

            let row = self.resolve_coordinate(Axis::X)?;
            let col = self.resolve_coordinate(Axis::Y)?;

            match self.engine.apply_move(row, col) {
                Ok(()) => {
                    debug!(%player, row, col, "Move accepted");
                    return Ok(());
                }
                Err(e) => {
                    debug!(%player, error = %e, "Move rejected");
                    self.channel.write(OCCUPIED_NOTICE);
                }
            }
        }
    }

    /// Prompts for one coordinate until a value in `0..=2` is typed.
    ///
    /// # Errors
    ///
    /// Returns [`ConsoleError::InputExhausted`] once the configured number of
    /// consecutive read failures is reached. Without a limit this never fails.
    #[instrument(skip(self))]
    pub fn resolve_coordinate(&mut self, axis: Axis) -> Result<i64, ConsoleError> {
        let mut failures = 0u32;
        loop {
            self.channel.write(&axis.prompt());

            let err = match self.read_coordinate() {
                Ok(value) => return Ok(value),
                Err(err) => err,
            };

            if matches!(err, InputError::Read(_)) {
                failures += 1;
                if let Some(limit) = self.max_read_failures
                    && failures >= limit
                {
                    warn!(%axis, failures, "Read failure limit reached");
                    return Err(ConsoleError::InputExhausted { axis, failures });
                }
            } else {
                failures = 0;
            }

            debug!(%axis, error = ?err, "Input rejected");
            self.channel.write(&err.to_string());
        }
    }

    fn read_coordinate(&mut self) -> Result<i64, InputError> {
        let line = self.channel.read_line()?;
        parse_coordinate(&line)
    }
}
