//! Noughts - command-line entry point.

#![warn(missing_docs)]

use anyhow::Result;
use clap::Parser;
use noughts::{run_duel, run_terminal, Cli, Command, GameConfig, Session};
use noughts_engine::Difficulty;
use rand::rngs::StdRng;
use rand::SeedableRng;
use strum::IntoEnumIterator;
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = GameConfig::load(cli.config.as_deref())?;

    match cli.command {
        Command::Play {
            difficulty,
            first,
            seed,
        } => run_play(config.with_overrides(difficulty, first, seed)),
        Command::Duel {
            x,
            o,
            games,
            seed,
            json,
        } => run_duel_command(x, o, games, seed.or(*config.seed()), json),
        Command::Difficulties => {
            for difficulty in Difficulty::iter() {
                println!("{:<8} {}", difficulty, difficulty.description());
            }
            Ok(())
        }
    }
}

/// Seeds the RNG from `seed`, or from the OS when absent.
fn make_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

/// Play against the computer on stdin/stdout
#[instrument(skip(config))]
fn run_play(config: GameConfig) -> Result<()> {
    info!(difficulty = %config.difficulty(), first = %config.first_player(), "Starting game");

    let mut rng = make_rng(*config.seed());
    let mut session = Session::new(config.settings());
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    run_terminal(&mut session, &mut stdin.lock(), &mut stdout.lock(), &mut rng)?;

    let scores = session.scores();
    info!(
        player = scores.player(),
        computer = scores.computer(),
        draws = scores.draws(),
        "Session finished"
    );
    Ok(())
}

/// Computer against computer
#[instrument]
fn run_duel_command(
    x: Difficulty,
    o: Difficulty,
    games: u32,
    seed: Option<u64>,
    json: bool,
) -> Result<()> {
    let mut rng = make_rng(seed);
    let summary = run_duel(x, o, games, &mut rng);

    if json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        println!("{summary}");
    }
    Ok(())
}
