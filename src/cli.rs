//! Command-line interface for noughts.

use crate::session::FirstPlayer;
use clap::{Parser, Subcommand};
use noughts_engine::Difficulty;
use std::path::PathBuf;

/// Noughts - tic-tac-toe against a minimax opponent
#[derive(Parser, Debug)]
#[command(name = "noughts")]
#[command(about = "Tic-tac-toe against a difficulty-tiered computer opponent", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file (defaults to ./noughts.toml when present)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play against the computer on the terminal
    Play {
        /// Computer strength: easy, medium, hard or expert
        #[arg(short, long)]
        difficulty: Option<Difficulty>,

        /// Who plays X and moves first: human or computer
        #[arg(short, long)]
        first: Option<FirstPlayer>,

        /// Seed for the computer's random choices
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Let two computer players face each other
    Duel {
        /// Strength of the X player
        #[arg(short, long, default_value = "expert")]
        x: Difficulty,

        /// Strength of the O player
        #[arg(short, long, default_value = "expert")]
        o: Difficulty,

        /// Number of games to play
        #[arg(short, long, default_value = "100")]
        games: u32,

        /// Seed for the random choices
        #[arg(long)]
        seed: Option<u64>,

        /// Print the summary as JSON
        #[arg(long)]
        json: bool,
    },

    /// List the difficulty tiers
    Difficulties,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_play_overrides() {
        let cli = Cli::try_parse_from(["noughts", "play", "-d", "expert", "--first", "computer"])
            .unwrap();
        match cli.command {
            Command::Play {
                difficulty,
                first,
                seed,
            } => {
                assert_eq!(difficulty, Some(Difficulty::Expert));
                assert_eq!(first, Some(FirstPlayer::Computer));
                assert_eq!(seed, None);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_parse_duel_defaults() {
        let cli = Cli::try_parse_from(["noughts", "duel", "--json"]).unwrap();
        match cli.command {
            Command::Duel { x, o, games, json, .. } => {
                assert_eq!(x, Difficulty::Expert);
                assert_eq!(o, Difficulty::Expert);
                assert_eq!(games, 100);
                assert!(json);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_rejects_unknown_difficulty() {
        assert!(Cli::try_parse_from(["noughts", "play", "-d", "nightmare"]).is_err());
    }
}
