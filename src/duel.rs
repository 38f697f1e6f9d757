//! Computer against computer.

use noughts_engine::{classify, select_move, Board, Difficulty, GameOutcome, Owner};
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Results of a series of computer games.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DuelSummary {
    /// Strength of the X player.
    pub x: Difficulty,
    /// Strength of the O player.
    pub o: Difficulty,
    /// Games played.
    pub games: u32,
    /// Games won by X.
    pub x_wins: u32,
    /// Games won by O.
    pub o_wins: u32,
    /// Drawn games.
    pub draws: u32,
}

impl std::fmt::Display for DuelSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "X ({}) vs O ({}) over {} games: X won {}, O won {}, {} drawn",
            self.x, self.o, self.games, self.x_wins, self.o_wins, self.draws
        )
    }
}

/// Plays one game between two computer players and returns the final outcome.
#[instrument(skip(rng))]
pub fn play_game<R: Rng + ?Sized>(x: Difficulty, o: Difficulty, rng: &mut R) -> GameOutcome {
    let mut board = Board::empty();
    let mut to_move = Owner::First;

    loop {
        let outcome = classify(&board);
        if outcome.is_terminal() {
            return outcome;
        }

        let difficulty = match to_move {
            Owner::First => x,
            Owner::Second => o,
        };
        // An in-progress board always has an empty cell.
        let Some(selected) = select_move(&board, difficulty, to_move, rng) else {
            return outcome;
        };
        debug!(index = selected.index, side = %to_move, "Duel move");
        board = board.apply_move(selected.index, to_move);
        to_move = to_move.opponent();
    }
}

/// Plays `games` games and tallies the results.
#[instrument(skip(rng))]
pub fn run_duel<R: Rng + ?Sized>(
    x: Difficulty,
    o: Difficulty,
    games: u32,
    rng: &mut R,
) -> DuelSummary {
    let mut summary = DuelSummary {
        x,
        o,
        ..DuelSummary::default()
    };

    for _ in 0..games {
        match play_game(x, o, rng) {
            GameOutcome::Won(Owner::First, _) => summary.x_wins += 1,
            GameOutcome::Won(Owner::Second, _) => summary.o_wins += 1,
            GameOutcome::Draw => summary.draws += 1,
            GameOutcome::InProgress => continue,
        }
        summary.games += 1;
    }

    info!(%summary, "Duel finished");
    summary
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_experts_always_draw() {
        let mut rng = StdRng::seed_from_u64(0);
        let summary = run_duel(Difficulty::Expert, Difficulty::Expert, 3, &mut rng);
        assert_eq!(summary.games, 3);
        assert_eq!(summary.draws, 3);
    }

    #[test]
    fn test_expert_never_loses_to_easy() {
        let mut rng = StdRng::seed_from_u64(17);
        let summary = run_duel(Difficulty::Easy, Difficulty::Expert, 30, &mut rng);
        assert_eq!(summary.x_wins, 0);
        assert_eq!(summary.x_wins + summary.o_wins + summary.draws, 30);
    }

    #[test]
    fn test_summary_display() {
        let summary = DuelSummary {
            x: Difficulty::Easy,
            o: Difficulty::Hard,
            games: 2,
            x_wins: 0,
            o_wins: 1,
            draws: 1,
        };
        assert_eq!(
            summary.to_string(),
            "X (easy) vs O (hard) over 2 games: X won 0, O won 1, 1 drawn"
        );
    }
}
