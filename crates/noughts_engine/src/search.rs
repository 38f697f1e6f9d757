//! Minimax search with alpha-beta pruning.
//!
//! Scores are from the point of view of the maximizing side: a win found at
//! ply `d` is worth `10 - d`, a loss `d - 10`, and a draw or a position cut
//! off by the depth cap is worth `0`. The ply bonus makes the search prefer
//! quick wins and slow losses.

use crate::rules::{classify, GameOutcome};
use crate::types::{Board, Owner};
use serde::{Deserialize, Serialize};
use tracing::{instrument, trace};

/// Score of a win on the root's own move.
pub const WIN_SCORE: i32 = 10;

/// Outcome of a root search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    /// Best move found, the lowest index among equally scored moves.
    pub index: usize,
    /// Minimax value of `index` for the maximizing side.
    pub score: i32,
    /// Positions visited, including the root.
    pub nodes: u64,
}

/// Depth-limited minimax searcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Minimax {
    maximizer: Owner,
    depth_cap: Option<u32>,
    use_alpha_beta_pruning: bool,
}

impl Minimax {
    /// Creates an exhaustive, pruning searcher playing for `maximizer`.
    pub fn new(maximizer: Owner) -> Self {
        Self {
            maximizer,
            depth_cap: None,
            use_alpha_beta_pruning: true,
        }
    }

    /// Limits the search to `depth_cap` plies. `None` searches to the end of
    /// the game; a cap of zero still examines every root move.
    pub fn with_depth_cap(mut self, depth_cap: Option<u32>) -> Self {
        self.depth_cap = depth_cap.map(|cap| cap.max(1));
        self
    }

    /// Enables or disables alpha-beta pruning.
    pub fn with_alpha_beta_pruning(mut self, use_abp: bool) -> Self {
        self.use_alpha_beta_pruning = use_abp;
        self
    }

    /// Searches `board` with the maximizer to move.
    ///
    /// Returns `None` when the position is already decided.
    #[instrument(skip(self), fields(maximizer = %self.maximizer, depth_cap = ?self.depth_cap))]
    pub fn search(&self, board: &Board) -> Option<SearchResult> {
        if classify(board).is_terminal() {
            return None;
        }

        let mut nodes = 0;
        let (score, index) = self.evaluate(board, 0, true, i32::MIN, i32::MAX, &mut nodes);
        let index = index?;
        trace!(index, score, nodes, "Search finished");
        Some(SearchResult {
            index,
            score,
            nodes,
        })
    }

    /// Scores `board` at ply `depth` and returns the best move, if it was expanded.
    fn evaluate(
        &self,
        board: &Board,
        depth: u32,
        maximizing: bool,
        mut alpha: i32,
        mut beta: i32,
        nodes: &mut u64,
    ) -> (i32, Option<usize>) {
        *nodes += 1;

        // `depth` never exceeds the nine cells of the board.
        let ply = depth as i32;
        match classify(board) {
            GameOutcome::Won(owner, _) if owner == self.maximizer => return (WIN_SCORE - ply, None),
            GameOutcome::Won(_, _) => return (ply - WIN_SCORE, None),
            GameOutcome::Draw => return (0, None),
            GameOutcome::InProgress => {}
        }
        if self.depth_cap.is_some_and(|cap| depth >= cap) {
            return (0, None);
        }

        let side = if maximizing {
            self.maximizer
        } else {
            self.maximizer.opponent()
        };

        let mut best: Option<(i32, usize)> = None;
        for index in board.available_moves() {
            let child = board.apply_move(index, side);
            let (score, _) = self.evaluate(&child, depth + 1, !maximizing, alpha, beta, nodes);

            let improves = match best {
                None => true,
                Some((best_score, _)) if maximizing => score > best_score,
                Some((best_score, _)) => score < best_score,
            };
            if improves {
                best = Some((score, index));
            }

            if maximizing {
                alpha = alpha.max(score);
            } else {
                beta = beta.min(score);
            }
            if self.use_alpha_beta_pruning && beta <= alpha {
                break;
            }
        }

        match best {
            Some((score, index)) => (score, Some(index)),
            None => (0, None),
        }
    }
}
