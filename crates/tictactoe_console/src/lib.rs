//! Console front end for tic-tac-toe.
//!
//! Drives a [`tictactoe_engine::Game`] from line-oriented text: prints the
//! board, prompts the current player for a row and a column, validates what
//! comes back, and announces the result.
//!
//! # Architecture
//!
//! - **Channel**: [`TextChannel`] abstracts reading and writing lines;
//!   [`LineChannel`] implements it over any reader and writer.
//! - **Orchestrator**: [`Orchestrator`] owns the turn loop and input retries.
//! - **Config**: [`ConsoleConfig`] holds the log filter and read-failure limit.
//!
//! # Example
//!
//! ```
//! use std::io::Cursor;
//! use tictactoe_console::{LineChannel, Orchestrator};
//! use tictactoe_engine::{Game, GameStatus, Player};
//!
//! let input = "0\n0\n1\n0\n0\n1\n2\n0\n0\n2\n";
//! let channel = LineChannel::new(Cursor::new(input), Vec::new());
//! let mut orchestrator = Orchestrator::new(Game::new(), channel);
//!
//! assert_eq!(orchestrator.run()?, GameStatus::Won(Player::X));
//! # Ok::<(), tictactoe_console::ConsoleError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod channel;
mod config;
mod error;
mod orchestrator;

pub use channel::{LineChannel, TextChannel};
pub use config::ConsoleConfig;
pub use error::{ChannelError, ConfigError, ConsoleError, InputError};
pub use orchestrator::{Axis, GREETING, OCCUPIED_NOTICE, Orchestrator, parse_coordinate};
