//! Pure tic-tac-toe game logic and a difficulty-tiered automated opponent.
//!
//! The crate has two layers:
//!
//! - **Board engine** ([`Board`], [`classify`]): value-typed boards, move
//!   validation and application, win and draw detection.
//! - **Move selector** ([`select_move`]): random play, a win/block heuristic
//!   and minimax with alpha-beta pruning, mixed according to [`Difficulty`].
//!
//! # Example
//!
//! ```
//! use noughts_engine::{classify, select_move, Board, Difficulty, GameOutcome, Owner};
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//!
//! let mut rng = StdRng::seed_from_u64(42);
//! let board = Board::empty().apply_move(4, Owner::First);
//! assert_eq!(classify(&board), GameOutcome::InProgress);
//!
//! let reply = select_move(&board, Difficulty::Expert, Owner::Second, &mut rng).unwrap();
//! assert!(board.is_valid_move(reply.index));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod difficulty;
mod rules;
mod search;
mod selector;
mod types;

pub use difficulty::Difficulty;
pub use rules::{classify, evaluate_winner, is_full, GameOutcome, WinningLine, WINNING_LINES};
pub use search::{Minimax, SearchResult, WIN_SCORE};
pub use selector::{select_move, winning_move, SelectedMove};
pub use types::{Board, BoardParseError, Cell, Owner, CELL_COUNT};
