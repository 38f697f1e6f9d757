//! Win detection logic.

use crate::types::{Board, Cell, Owner};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Three board indices forming a row, column or diagonal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WinningLine([usize; 3]);

impl WinningLine {
    /// Returns the three indices of this line.
    pub fn cells(&self) -> [usize; 3] {
        self.0
    }

    /// Returns true if `index` lies on this line.
    pub fn contains(&self, index: usize) -> bool {
        self.0.contains(&index)
    }
}

/// All winning lines: rows, then columns, then diagonals.
pub const WINNING_LINES: [WinningLine; 8] = [
    // Rows
    WinningLine([0, 1, 2]),
    WinningLine([3, 4, 5]),
    WinningLine([6, 7, 8]),
    // Columns
    WinningLine([0, 3, 6]),
    WinningLine([1, 4, 7]),
    WinningLine([2, 5, 8]),
    // Diagonals
    WinningLine([0, 4, 8]),
    WinningLine([2, 4, 6]),
];

/// Returns the first side holding three in a row, with the line it holds.
#[instrument(level = "trace")]
pub fn evaluate_winner(board: &Board) -> Option<(Owner, WinningLine)> {
    let cells = board.cells();
    WINNING_LINES.iter().find_map(|line| {
        let [a, b, c] = line.0;
        match cells[a] {
            Cell::Mark(owner) if cells[b] == cells[a] && cells[c] == cells[a] => {
                Some((owner, *line))
            }
            _ => None,
        }
    })
}
