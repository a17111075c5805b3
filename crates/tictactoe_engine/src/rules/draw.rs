//! Draw detection logic for tic-tac-toe.

use crate::types::{Board, Square};
use tracing::instrument;

/// Checks if the board is full (all squares occupied).
///
/// A full board with no winner indicates a draw.
#[instrument(skip(board))]
pub fn is_full(board: &Board) -> bool {
    board
        .rows()
        .iter()
        .flatten()
        .all(|s| *s != Square::Empty)
}

#[cfg(test)]
mod tests {
    use super::super::win::check_winner;
    use super::*;
    use crate::types::Player;

    fn fill(board: &mut Board, layout: [&str; 3]) {
        for (row, marks) in layout.iter().enumerate() {
            for (col, mark) in marks.chars().enumerate() {
                let square = match mark {
                    'X' => Square::Occupied(Player::X),
                    'O' => Square::Occupied(Player::O),
                    _ => Square::Empty,
                };
                board.set(row, col, square);
            }
        }
    }

    #[test]
    fn test_empty_board_not_full() {
        assert!(!is_full(&Board::new()));
    }

    #[test]
    fn test_partial_board_not_full() {
        let mut board = Board::new();
        board.set(1, 1, Square::Occupied(Player::X));
        assert!(!is_full(&board));
    }

    #[test]
    fn test_draw_detection() {
        let mut board = Board::new();
        fill(&mut board, ["XOX", "OXX", "OXO"]);
        assert!(is_full(&board));
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_full_board_with_winner() {
        let mut board = Board::new();
        fill(&mut board, ["XXX", "OOX", "XOO"]);
        assert!(is_full(&board));
        assert_eq!(check_winner(&board), Some(Player::X));
    }
}
