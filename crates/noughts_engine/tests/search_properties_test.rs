//! Property tests for the minimax search.

use noughts_engine::{classify, Board, GameOutcome, Minimax, Owner};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

/// Plays `plies` random moves from the empty board, alternating sides.
fn random_position(rng: &mut StdRng, plies: usize) -> (Board, Owner) {
    let mut board = Board::empty();
    let mut to_move = Owner::First;
    for _ in 0..plies {
        if classify(&board) != GameOutcome::InProgress {
            break;
        }
        let moves = board.available_moves();
        let index = *moves.choose(rng).unwrap();
        board = board.apply_move(index, to_move);
        to_move = to_move.opponent();
    }
    (board, to_move)
}

#[test]
fn test_pruning_never_changes_the_result() {
    let mut rng = StdRng::seed_from_u64(2024);
    let caps = [None, Some(1), Some(2), Some(3), Some(4), Some(5), Some(6), Some(7), Some(8)];
    let mut compared = 0;

    for _ in 0..80 {
        let plies = rng.gen_range(2..=7);
        let (board, to_move) = random_position(&mut rng, plies);
        if classify(&board).is_terminal() {
            continue;
        }

        for cap in caps {
            let pruned = Minimax::new(to_move).with_depth_cap(cap).search(&board).unwrap();
            let plain = Minimax::new(to_move)
                .with_depth_cap(cap)
                .with_alpha_beta_pruning(false)
                .search(&board)
                .unwrap();

            assert_eq!(pruned.index, plain.index, "board {board:?} cap {cap:?}");
            assert_eq!(pruned.score, plain.score, "board {board:?} cap {cap:?}");
            assert!(pruned.nodes <= plain.nodes);
            compared += 1;
        }
    }

    assert!(compared > 0);
}

#[test]
fn test_search_result_is_a_legal_move() {
    let mut rng = StdRng::seed_from_u64(99);
    for _ in 0..50 {
        let plies = rng.gen_range(0..=8);
        let (board, to_move) = random_position(&mut rng, plies);
        match Minimax::new(to_move).search(&board) {
            Some(result) => assert!(board.is_valid_move(result.index)),
            None => assert!(classify(&board).is_terminal()),
        }
    }
}

#[test]
fn test_search_prefers_the_quickest_win() {
    // X to move wins at 2; any other move lets O complete the diagonal there.
    let board: Board = "XX..O.O..".parse().unwrap();
    let result = Minimax::new(Owner::First).search(&board).unwrap();
    assert_eq!(result.index, 2);
    assert_eq!(result.score, 9);
}
