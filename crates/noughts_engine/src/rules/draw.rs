//! Full-board detection.

use crate::types::Board;
use tracing::instrument;

/// Checks if every cell holds a mark.
///
/// A full board is only a draw once [`super::evaluate_winner`] has found no line.
#[instrument(level = "trace")]
pub fn is_full(board: &Board) -> bool {
    board.cells().iter().all(|cell| !cell.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Owner;

    #[test]
    fn test_empty_board_not_full() {
        assert!(!is_full(&Board::empty()));
    }

    #[test]
    fn test_partial_board_not_full() {
        let board = Board::empty().apply_move(4, Owner::First);
        assert!(!is_full(&board));
    }

    #[test]
    fn test_full_board() {
        let board = (0..9).fold(Board::empty(), |b, i| b.apply_move(i, Owner::First));
        assert!(is_full(&board));
        assert!(board.available_moves().is_empty());
    }
}
