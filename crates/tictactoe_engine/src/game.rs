//! Game state and the engine interface the console drives.

use crate::action::{Move, MoveError};
use crate::rules::{check_winner, is_full};
use crate::types::{Board, GameStatus, Player, Square};
use tracing::{debug, instrument};

/// Capabilities a turn loop needs from a game engine.
///
/// [`Game`] is the real implementation; the seam lets a driver be exercised
/// against a scripted engine.
pub trait Engine {
    /// Places the current player's mark at `(row, col)` and passes the turn.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError`] and leaves the state untouched when the move
    /// is off the board or targets an occupied square.
    fn apply_move(&mut self, row: i64, col: i64) -> Result<(), MoveError>;

    /// Evaluates the board for a win or draw.
    fn status(&self) -> GameStatus;

    /// The player who moves next.
    fn current_player(&self) -> Player;

    /// Text snapshot of the board for display.
    fn board_rendering(&self) -> String;
}

/// Tic-tac-toe game state: the board plus whose turn it is.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    board: Board,
    current_player: Player,
}

impl Game {
    /// Creates a new game with an empty board and X to move.
    #[instrument]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            current_player: Player::X,
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the current player.
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Validates and applies a move for the current player.
    ///
    /// # Errors
    ///
    /// - [`MoveError::OutOfBounds`] if either coordinate is outside `0..=2`.
    /// - [`MoveError::CellOccupied`] if the square already holds a mark.
    #[instrument(skip(self), fields(player = %self.current_player))]
    pub fn make_move(&mut self, action: Move) -> Result<(), MoveError> {
        let Some((row, col)) = action.cell() else {
            debug!(%action, "Move outside the board");
            return Err(MoveError::OutOfBounds {
                row: action.row,
                col: action.col,
            });
        };

        if !self.board.is_empty(row, col) {
            debug!(%action, "Square already occupied");
            return Err(MoveError::CellOccupied {
                row: action.row,
                col: action.col,
            });
        }

        self.board
            .set(row, col, Square::Occupied(self.current_player));
        self.current_player = self.current_player.opponent();
        debug!(%action, next = %self.current_player, "Move applied");
        Ok(())
    }

    /// Computes the game status from the board.
    ///
    /// Lines are checked before fullness, so a win on the last square is a
    /// win and not a draw.
    #[instrument(skip(self))]
    pub fn status(&self) -> GameStatus {
        if let Some(winner) = check_winner(&self.board) {
            GameStatus::Won(winner)
        } else if is_full(&self.board) {
            GameStatus::Draw
        } else {
            GameStatus::InProgress
        }
    }

    /// Formats the board, see [`Board::render`].
    pub fn render(&self) -> String {
        self.board.render()
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine for Game {
    fn apply_move(&mut self, row: i64, col: i64) -> Result<(), MoveError> {
        self.make_move(Move::new(row, col))
    }

    fn status(&self) -> GameStatus {
        Game::status(self)
    }

    fn current_player(&self) -> Player {
        self.current_player
    }

    fn board_rendering(&self) -> String {
        self.render()
    }
}
