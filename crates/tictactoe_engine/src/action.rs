//! Move requests and the ways they can be rejected.
//!
//! Coordinates arrive as signed integers straight from whoever asked for the
//! move, so a `Move` may point anywhere. The engine decides whether it lands
//! on the board.

use crate::types::BOARD_SIZE;

/// A request to place the current player's mark at `(row, col)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
#[display("({row}, {col})")]
pub struct Move {
    /// Row index, valid in `0..=2`.
    pub row: i64,
    /// Column index, valid in `0..=2`.
    pub col: i64,
}

impl Move {
    /// Creates a new move.
    pub fn new(row: i64, col: i64) -> Self {
        Self { row, col }
    }

    /// Returns the board cell this move targets, if it lies on the board.
    pub fn cell(&self) -> Option<(usize, usize)> {
        let row = usize::try_from(self.row).ok().filter(|r| *r < BOARD_SIZE)?;
        let col = usize::try_from(self.col).ok().filter(|c| *c < BOARD_SIZE)?;
        Some((row, col))
    }
}

/// Error that can occur when applying a move.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum MoveError {
    /// Row or column lies outside `0..=2`.
    #[display("invalid coordinates x: {} y: {}", row, col)]
    OutOfBounds {
        /// Requested row.
        row: i64,
        /// Requested column.
        col: i64,
    },

    /// The target square already holds a mark.
    #[display("field with coordinates x: {} y: {} already occupied", row, col)]
    CellOccupied {
        /// Requested row.
        row: i64,
        /// Requested column.
        col: i64,
    },
}
