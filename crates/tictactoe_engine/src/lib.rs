//! Pure tic-tac-toe game logic.
//!
//! Tracks board occupancy, enforces move legality, alternates turns and
//! detects wins and draws. No I/O happens here; a driver such as the console
//! front end talks to the game through the [`Engine`] trait.
//!
//! # Example
//!
//! ```
//! use tictactoe_engine::{Engine, Game, GameStatus, Player};
//!
//! let mut game = Game::new();
//! for (row, col) in [(0, 0), (1, 0), (0, 1), (2, 0), (0, 2)] {
//!     game.apply_move(row, col)?;
//! }
//! assert_eq!(game.status(), GameStatus::Won(Player::X));
//! # Ok::<(), tictactoe_engine::MoveError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod game;
pub mod rules;
mod types;

pub use action::{Move, MoveError};
pub use game::{Engine, Game};
pub use types::{BOARD_SIZE, Board, GameStatus, Player, Square};
