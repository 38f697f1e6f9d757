//! Game rules for tic-tac-toe.
//!
//! Pure functions that project a [`Board`] onto its outcome. Rules are kept
//! apart from board storage so the search and the session share a single
//! definition of "game over".

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{evaluate_winner, WinningLine, WINNING_LINES};

use crate::types::{Board, Owner};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Outcome of a board position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameOutcome {
    /// Moves remain and nobody has three in a row.
    InProgress,
    /// A side completed the given line.
    Won(Owner, WinningLine),
    /// Board is full with no winner.
    Draw,
}

impl GameOutcome {
    /// Returns true for `Won` and `Draw`.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, GameOutcome::InProgress)
    }

    /// Returns the winning side, if any.
    pub fn winner(&self) -> Option<Owner> {
        match self {
            GameOutcome::Won(owner, _) => Some(*owner),
            _ => None,
        }
    }
}

/// Classifies a board.
///
/// Winner detection runs before the full-board check, since the last move on
/// a full board can also complete a line.
#[instrument(level = "trace")]
pub fn classify(board: &Board) -> GameOutcome {
    if let Some((owner, line)) = evaluate_winner(board) {
        GameOutcome::Won(owner, line)
    } else if is_full(board) {
        GameOutcome::Draw
    } else {
        GameOutcome::InProgress
    }
}
