//! Noughts - tic-tac-toe against a difficulty-tiered computer opponent.
//!
//! The game logic and search live in [`noughts_engine`]; this crate adds the
//! pieces needed to actually play:
//!
//! - **Session**: turn ownership and a running scoreboard
//! - **Config**: TOML settings with command-line overrides
//! - **Terminal**: a line-based front end
//! - **Duel**: computer against computer
//!
//! # Example
//!
//! ```
//! use noughts::{FirstPlayer, Session, Settings};
//! use noughts_engine::{Difficulty, GameOutcome};
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//!
//! let mut rng = StdRng::seed_from_u64(1);
//! let mut session = Session::new(Settings {
//!     difficulty: Difficulty::Expert,
//!     first_player: FirstPlayer::Human,
//! });
//!
//! assert_eq!(session.play_human(4).unwrap(), GameOutcome::InProgress);
//! let reply = session.play_computer(&mut rng).unwrap();
//! assert_ne!(reply.index, 4);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod config;
mod duel;
mod session;
mod terminal;

pub use cli::{Cli, Command};
pub use config::{ConfigError, GameConfig, DEFAULT_CONFIG_PATH};
pub use duel::{play_game, run_duel, DuelSummary};
pub use session::{FirstPlayer, MoveError, Scoreboard, Session, Settings};
pub use terminal::{
    parse_cell, parse_command, parse_turn, run as run_terminal, Command as MenuCommand, InputError,
    TurnInput,
};
