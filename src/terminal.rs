//! Line-based terminal front end for a [`Session`].

use crate::session::{MoveError, Session};
use anyhow::Result;
use derive_more::Display;
use noughts_engine::{Difficulty, GameOutcome};
use rand::Rng;
use std::io::{BufRead, Write};
use std::ops::ControlFlow;
use tracing::{debug, instrument};

/// Error parsing a line typed by the player.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum InputError {
    /// The line was not a cell number.
    #[display("Expected a cell number 1-9, got {:?}", _0)]
    NotANumber(String),

    /// The number is not a cell.
    #[display("Cell {} is off the board, pick 1-9", _0)]
    OutOfRange(usize),

    /// The menu choice was not recognised.
    #[display("Unknown command {:?}", _0)]
    UnknownCommand(String),
}

impl std::error::Error for InputError {}

/// A menu choice, accepted at the move prompt and after a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Abandon or finish the current game and start another.
    Again,
    /// Change difficulty; takes effect on the computer's next move.
    Difficulty(Difficulty),
    /// Swap who moves first, from the next game on.
    SwapFirst,
    /// Zero the scoreboard.
    ResetScores,
    /// Leave.
    Quit,
}

/// One line typed at the move prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnInput {
    /// Board index (0-8) to play.
    Cell(usize),
    /// A menu choice.
    Command(Command),
}

/// Parses a 1-based cell number into a board index.
#[instrument]
pub fn parse_cell(input: &str) -> Result<usize, InputError> {
    let trimmed = input.trim();
    let number: usize = trimmed
        .parse()
        .map_err(|_| InputError::NotANumber(trimmed.to_string()))?;
    if !(1..=9).contains(&number) {
        return Err(InputError::OutOfRange(number));
    }
    Ok(number - 1)
}

/// Parses a menu choice. An empty line means [`Command::Again`].
#[instrument]
pub fn parse_command(input: &str) -> Result<Command, InputError> {
    let mut words = input.split_whitespace();
    let command = match words.next().map(str::to_lowercase).as_deref() {
        None | Some("y") | Some("yes") | Some("n") | Some("new") => Command::Again,
        Some("q") | Some("quit") => Command::Quit,
        Some("r") | Some("reset") => Command::ResetScores,
        Some("f") | Some("first") => Command::SwapFirst,
        Some("d") | Some("difficulty") => {
            let tier = words.next().unwrap_or_default();
            let difficulty = tier
                .parse()
                .map_err(|_| InputError::UnknownCommand(input.trim().to_string()))?;
            Command::Difficulty(difficulty)
        }
        Some(_) => return Err(InputError::UnknownCommand(input.trim().to_string())),
    };
    Ok(command)
}

/// Parses the move prompt: a cell number or a non-empty menu choice.
#[instrument]
pub fn parse_turn(input: &str) -> Result<TurnInput, InputError> {
    let trimmed = input.trim();
    if trimmed.is_empty() || trimmed.starts_with(|c: char| c.is_ascii_digit()) {
        return parse_cell(trimmed).map(TurnInput::Cell);
    }
    parse_command(trimmed)
        .map(TurnInput::Command)
        .map_err(|_| InputError::NotANumber(trimmed.to_string()))
}

/// Runs games on `session` until the player quits or input ends.
#[instrument(skip_all)]
pub fn run<I, O, R>(
    session: &mut Session,
    input: &mut I,
    output: &mut O,
    rng: &mut R,
) -> Result<()>
where
    I: BufRead,
    O: Write,
    R: Rng + ?Sized,
{
    writeln!(
        output,
        "You are {}. Computer plays {} ({}).",
        session.human(),
        session.settings().difficulty,
        session.settings().difficulty.description()
    )?;

    loop {
        writeln!(output, "\n{}\n", session.board())?;

        if session.outcome().is_terminal() {
            report_outcome(session, output)?;
            write!(
                output,
                "Again? [n]ew / [d]ifficulty <tier> / [f]irst player / [r]eset scores / [q]uit: "
            )?;
            output.flush()?;
            let Some(line) = read_line(input)? else {
                return Ok(());
            };
            match parse_command(&line) {
                Ok(command) => {
                    if apply_command(session, command, output)?.is_break() {
                        return Ok(());
                    }
                    if session.outcome().is_terminal() {
                        session.reset_game();
                    }
                }
                Err(e) => writeln!(output, "{e}")?,
            }
            continue;
        }

        if session.is_computer_turn() {
            let selected = session.play_computer(rng)?;
            writeln!(output, "Computer plays {}.", selected.index + 1)?;
            continue;
        }

        write!(output, "Your move (1-9, or n/d <tier>/f/r/q): ")?;
        output.flush()?;
        let Some(line) = read_line(input)? else {
            return Ok(());
        };
        match parse_turn(&line) {
            Ok(TurnInput::Cell(index)) => match session.play_human(index) {
                Ok(_) => {}
                Err(MoveError::SquareOccupied(index)) => {
                    writeln!(output, "Cell {} is already taken", index + 1)?;
                }
                Err(e) => writeln!(output, "{e}")?,
            },
            Ok(TurnInput::Command(command)) => {
                if apply_command(session, command, output)?.is_break() {
                    return Ok(());
                }
            }
            Err(e) => writeln!(output, "{e}")?,
        }
    }
}

/// Carries out a menu choice. Breaks when the player quits.
fn apply_command<O: Write>(
    session: &mut Session,
    command: Command,
    output: &mut O,
) -> Result<ControlFlow<()>> {
    debug!(?command, "Menu choice");
    match command {
        Command::Quit => return Ok(ControlFlow::Break(())),
        Command::Again => {
            session.reset_game();
            writeln!(output, "New game.")?;
        }
        Command::Difficulty(difficulty) => {
            session.set_difficulty(difficulty);
            writeln!(
                output,
                "Difficulty set to {} - {}",
                difficulty,
                difficulty.description()
            )?;
        }
        Command::SwapFirst => {
            let first = session.settings().first_player.swapped();
            session.set_first_player(first);
            writeln!(output, "{} will move first next game.", first.label())?;
        }
        Command::ResetScores => {
            session.reset_scores();
            writeln!(output, "Scores reset.")?;
        }
    }
    Ok(ControlFlow::Continue(()))
}

fn report_outcome<O: Write>(session: &Session, output: &mut O) -> Result<()> {
    match session.outcome() {
        GameOutcome::Won(winner, line) => {
            let cells = line.cells().map(|i| (i + 1).to_string()).join(", ");
            let who = if winner == session.human() {
                "You win"
            } else {
                "Computer wins"
            };
            writeln!(output, "{who}! {winner} completed cells {cells}.")?;
        }
        GameOutcome::Draw => writeln!(output, "It's a draw.")?,
        GameOutcome::InProgress => {}
    }

    let scores = session.scores();
    writeln!(
        output,
        "Score - you: {}, computer: {}, draws: {}",
        scores.player(),
        scores.computer(),
        scores.draws()
    )?;
    Ok(())
}

fn read_line<I: BufRead>(input: &mut I) -> Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        debug!("Input closed");
        return Ok(None);
    }
    Ok(Some(line))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_cell() {
        assert_eq!(parse_cell("1\n"), Ok(0));
        assert_eq!(parse_cell(" 9 "), Ok(8));
        assert_eq!(parse_cell("0"), Err(InputError::OutOfRange(0)));
        assert_eq!(parse_cell("ten"), Err(InputError::NotANumber("ten".to_string())));
    }

    #[test]
    fn test_parse_command() {
        assert_eq!(parse_command("\n"), Ok(Command::Again));
        assert_eq!(parse_command("Q"), Ok(Command::Quit));
        assert_eq!(parse_command("r"), Ok(Command::ResetScores));
        assert_eq!(parse_command("n"), Ok(Command::Again));
        assert_eq!(parse_command("F"), Ok(Command::SwapFirst));
        assert_eq!(parse_command("d hard"), Ok(Command::Difficulty(Difficulty::Hard)));
        assert!(parse_command("d").is_err());
        assert!(parse_command("maybe").is_err());
    }

    #[test]
    fn test_parse_turn() {
        assert_eq!(parse_turn("5\n"), Ok(TurnInput::Cell(4)));
        assert_eq!(parse_turn("n"), Ok(TurnInput::Command(Command::Again)));
        assert_eq!(
            parse_turn("d easy"),
            Ok(TurnInput::Command(Command::Difficulty(Difficulty::Easy)))
        );
        assert_eq!(parse_turn("\n"), Err(InputError::NotANumber(String::new())));
        assert_eq!(parse_turn("ten"), Err(InputError::NotANumber("ten".to_string())));
        assert_eq!(parse_turn("12"), Err(InputError::OutOfRange(12)));
    }
}
