//! Scenario tests for the difficulty tiers.

use noughts_engine::{classify, select_move, Board, Difficulty, GameOutcome, Owner};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn board(s: &str) -> Board {
    s.parse().unwrap()
}

/// Tiers that must never miss an immediate win or block.
const TACTICAL: [Difficulty; 3] = [Difficulty::Medium, Difficulty::Hard, Difficulty::Expert];

#[test]
fn test_takes_immediate_win() {
    // O O _ / X X _ / _ _ _ with O to move: completing the top row wins.
    let position = board("OO.XX....");
    for difficulty in TACTICAL {
        for seed in 0..20 {
            let mut rng = StdRng::seed_from_u64(seed);
            let selected = select_move(&position, difficulty, Owner::Second, &mut rng).unwrap();
            assert_eq!(selected.index, 2, "{difficulty} seed {seed}");
        }
    }
}

#[test]
fn test_mirrored_win_for_first_player() {
    // X X _ / O O _ / _ _ _ with X to move: X completes the top row.
    let position = board("XX.OO....");
    for difficulty in TACTICAL {
        let mut rng = StdRng::seed_from_u64(5);
        let selected = select_move(&position, difficulty, Owner::First, &mut rng).unwrap();
        assert_eq!(selected.index, 2, "{difficulty}");
    }
}

#[test]
fn test_own_win_beats_blocking() {
    // X threatens 2, but O completes the middle row at 5 first.
    let position = board("XX.OO....");
    for difficulty in TACTICAL {
        for seed in 0..20 {
            let mut rng = StdRng::seed_from_u64(seed);
            let selected = select_move(&position, difficulty, Owner::Second, &mut rng).unwrap();
            assert_eq!(selected.index, 5, "{difficulty} seed {seed}");
        }
    }
}

#[test]
fn test_blocks_immediate_loss() {
    // X threatens 2 and O has no win of its own.
    let position = board("XX.O.....");
    for difficulty in TACTICAL {
        for seed in 0..20 {
            let mut rng = StdRng::seed_from_u64(seed);
            let selected = select_move(&position, difficulty, Owner::Second, &mut rng).unwrap();
            assert_eq!(selected.index, 2, "{difficulty} seed {seed}");
        }
    }
}

#[test]
fn test_mirrored_block_for_first_player() {
    // O threatens the left column at 6 and X has no win of its own.
    let position = board("O..OX...X");
    for difficulty in TACTICAL {
        let mut rng = StdRng::seed_from_u64(11);
        let selected = select_move(&position, difficulty, Owner::First, &mut rng).unwrap();
        assert_eq!(selected.index, 6, "{difficulty}");
    }
}

#[test]
fn test_hard_and_expert_are_deterministic() {
    let position = board("X...O....");
    for difficulty in [Difficulty::Hard, Difficulty::Expert] {
        let first = select_move(&position, difficulty, Owner::First, &mut StdRng::seed_from_u64(1));
        let second =
            select_move(&position, difficulty, Owner::First, &mut StdRng::seed_from_u64(2));
        assert_eq!(first, second);
    }
}

#[test]
fn test_expert_vs_expert_draws() {
    let mut rng = StdRng::seed_from_u64(0);
    let mut board = Board::empty();
    let mut to_move = Owner::First;

    while classify(&board) == GameOutcome::InProgress {
        let selected = select_move(&board, Difficulty::Expert, to_move, &mut rng).unwrap();
        assert!(board.is_valid_move(selected.index));
        board = board.apply_move(selected.index, to_move);
        to_move = to_move.opponent();
    }

    assert_eq!(classify(&board), GameOutcome::Draw);
}

/// Explores every human reply against the expert; returns the number of finished games.
fn explore(board: Board, to_move: Owner, expert: Owner, rng: &mut StdRng) -> usize {
    match classify(&board) {
        GameOutcome::Won(winner, line) => {
            assert_eq!(winner, expert, "expert lost on {board:?} via {line:?}");
            return 1;
        }
        GameOutcome::Draw => return 1,
        GameOutcome::InProgress => {}
    }

    if to_move == expert {
        let selected = select_move(&board, Difficulty::Expert, expert, rng).unwrap();
        explore(board.apply_move(selected.index, expert), to_move.opponent(), expert, rng)
    } else {
        board
            .available_moves()
            .into_iter()
            .map(|index| explore(board.apply_move(index, to_move), to_move.opponent(), expert, rng))
            .sum()
    }
}

#[test]
fn test_expert_never_loses_moving_first() {
    let mut rng = StdRng::seed_from_u64(0);
    let games = explore(Board::empty(), Owner::First, Owner::First, &mut rng);
    assert!(games > 0);
}

#[test]
fn test_expert_never_loses_moving_second() {
    let mut rng = StdRng::seed_from_u64(0);
    let games = explore(Board::empty(), Owner::First, Owner::Second, &mut rng);
    assert!(games > 0);
}

#[test]
fn test_no_move_on_full_board() {
    let mut rng = StdRng::seed_from_u64(0);
    let full = board("XOXXOOOXX");
    assert_eq!(classify(&full), GameOutcome::Draw);
    assert_eq!(select_move(&full, Difficulty::Easy, Owner::First, &mut rng), None);
}
