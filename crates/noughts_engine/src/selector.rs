//! Move selection for the automated opponent.

use crate::difficulty::Difficulty;
use crate::rules::classify;
use crate::search::{Minimax, SearchResult};
use crate::types::{Board, Owner};
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

/// Move chosen by the selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectedMove {
    /// Board index (0-8) of an empty cell.
    pub index: usize,
    /// Minimax score, present only when the move came from a search.
    pub score: Option<i32>,
}

impl SelectedMove {
    fn unscored(index: usize) -> Self {
        Self { index, score: None }
    }
}

impl From<SearchResult> for SelectedMove {
    fn from(result: SearchResult) -> Self {
        Self {
            index: result.index,
            score: Some(result.score),
        }
    }
}

/// Chooses the next move for `me` on `board` at the given difficulty.
///
/// Random choices draw from `rng`; hard and expert never touch it. Returns
/// `None` when the board is already decided, in which case no search runs.
#[instrument(skip(board, rng), fields(board = %board))]
pub fn select_move<R: Rng + ?Sized>(
    board: &Board,
    difficulty: Difficulty,
    me: Owner,
    rng: &mut R,
) -> Option<SelectedMove> {
    if classify(board).is_terminal() {
        warn!("Move requested on a finished board");
        return None;
    }

    let moves = board.available_moves();
    let selected = match difficulty {
        Difficulty::Easy => search_or_random(board, difficulty, me, &moves, rng),
        Difficulty::Medium => winning_move(board, &moves, me)
            .or_else(|| winning_move(board, &moves, me.opponent()))
            .map(SelectedMove::unscored)
            .or_else(|| search_or_random(board, difficulty, me, &moves, rng)),
        Difficulty::Hard | Difficulty::Expert => searched_move(board, difficulty, me),
    };

    if let Some(selected) = selected {
        debug!(index = selected.index, score = ?selected.score, "Move selected");
    }
    selected
}

/// Returns the first move in `moves` that completes a line for `side`.
#[instrument(skip(moves))]
pub fn winning_move(board: &Board, moves: &[usize], side: Owner) -> Option<usize> {
    moves
        .iter()
        .copied()
        .find(|&index| classify(&board.apply_move(index, side)).winner() == Some(side))
}

fn search_or_random<R: Rng + ?Sized>(
    board: &Board,
    difficulty: Difficulty,
    me: Owner,
    moves: &[usize],
    rng: &mut R,
) -> Option<SelectedMove> {
    if rng.gen_bool(difficulty.optimal_probability()) {
        searched_move(board, difficulty, me)
    } else {
        moves.choose(rng).copied().map(SelectedMove::unscored)
    }
}

fn searched_move(board: &Board, difficulty: Difficulty, me: Owner) -> Option<SelectedMove> {
    Minimax::new(me)
        .with_depth_cap(difficulty.depth_cap())
        .search(board)
        .map(SelectedMove::from)
}
