//! Match session: one human against the computer, with a running scoreboard.

use derive_getters::Getters;
use noughts_engine::{
    classify, select_move, Board, Difficulty, GameOutcome, Owner, SelectedMove,
};
use rand::Rng;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};
use tracing::{debug, info, instrument, warn};

/// Which side takes the first move (X) in a new game.
///
/// Defaults to [`FirstPlayer::Human`] so the player moves first.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum FirstPlayer {
    /// The human plays X.
    #[default]
    Human,
    /// The computer plays X.
    Computer,
}

impl FirstPlayer {
    /// Names the side in terminal messages.
    pub fn label(self) -> &'static str {
        match self {
            Self::Human => "You",
            Self::Computer => "The computer",
        }
    }

    /// Returns the other choice, as used when the player swaps who opens.
    #[instrument]
    pub fn swapped(self) -> Self {
        match self {
            Self::Human => Self::Computer,
            Self::Computer => Self::Human,
        }
    }
}

/// User-configurable settings for a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Settings {
    /// Strength of the computer.
    pub difficulty: Difficulty,
    /// Who takes the first move in each game.
    pub first_player: FirstPlayer,
}

/// Games won by each side and games drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Getters, Serialize, Deserialize)]
pub struct Scoreboard {
    /// Games won by the human.
    player: u32,
    /// Games won by the computer.
    computer: u32,
    /// Drawn games.
    draws: u32,
}

/// Error that can occur when playing a move in a session.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The index is not on the board.
    #[display("Cell {} is not on the board", _0)]
    OutOfRange(usize),

    /// The cell already holds a mark.
    #[display("Cell {} is already occupied", _0)]
    SquareOccupied(usize),

    /// The game has already finished.
    #[display("Game is already over")]
    GameOver,

    /// It is not this side's turn.
    #[display("It's not {}'s turn", _0)]
    NotYourTurn(Owner),

    /// The selector found nothing to play.
    #[display("No move available")]
    NoMoveAvailable,
}

impl std::error::Error for MoveError {}

/// A sequence of games between a human and the computer.
#[derive(Debug, Clone)]
pub struct Session {
    board: Board,
    to_move: Owner,
    human: Owner,
    settings: Settings,
    outcome: GameOutcome,
    history: Vec<usize>,
    scores: Scoreboard,
}

impl Session {
    /// Starts a session with a fresh board.
    #[instrument]
    pub fn new(settings: Settings) -> Self {
        info!(
            difficulty = %settings.difficulty,
            first = %settings.first_player,
            "Starting session"
        );
        Self {
            board: Board::empty(),
            to_move: Owner::First,
            human: human_side(settings.first_player),
            settings,
            outcome: GameOutcome::InProgress,
            history: Vec::new(),
            scores: Scoreboard::default(),
        }
    }

    /// Returns the current board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the side to move.
    pub fn to_move(&self) -> Owner {
        self.to_move
    }

    /// Returns the side the human plays.
    pub fn human(&self) -> Owner {
        self.human
    }

    /// Returns the side the computer plays.
    pub fn computer(&self) -> Owner {
        self.human.opponent()
    }

    /// Returns the outcome after the last move.
    pub fn outcome(&self) -> GameOutcome {
        self.outcome
    }

    /// Returns the cells played this game, in order.
    pub fn history(&self) -> &[usize] {
        &self.history
    }

    /// Returns the running scoreboard.
    pub fn scores(&self) -> &Scoreboard {
        &self.scores
    }

    /// Returns the current settings.
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Returns true while the game is running and the computer is to move.
    pub fn is_computer_turn(&self) -> bool {
        self.outcome == GameOutcome::InProgress && self.to_move == self.computer()
    }

    /// Plays the human's move at `index` (0-8).
    #[instrument(skip(self), fields(human = %self.human))]
    pub fn play_human(&mut self, index: usize) -> Result<GameOutcome, MoveError> {
        self.ensure_turn(self.human)?;
        if index >= noughts_engine::CELL_COUNT {
            return Err(MoveError::OutOfRange(index));
        }
        if !self.board.is_valid_move(index) {
            return Err(MoveError::SquareOccupied(index));
        }

        Ok(self.apply(index, self.human))
    }

    /// Asks the selector for the computer's move and plays it.
    #[instrument(
        skip(self, rng),
        fields(computer = %self.computer(), difficulty = %self.settings.difficulty)
    )]
    pub fn play_computer<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
    ) -> Result<SelectedMove, MoveError> {
        let computer = self.computer();
        self.ensure_turn(computer)?;

        let selected = select_move(&self.board, self.settings.difficulty, computer, rng)
            .ok_or(MoveError::NoMoveAvailable)?;
        self.apply(selected.index, computer);
        Ok(selected)
    }

    /// Clears the board for a new game, keeping scores and settings.
    ///
    /// A changed first player takes effect here.
    #[instrument(skip(self))]
    pub fn reset_game(&mut self) {
        debug!("Resetting board");
        self.board = Board::empty();
        self.to_move = Owner::First;
        self.human = human_side(self.settings.first_player);
        self.outcome = GameOutcome::InProgress;
        self.history.clear();
    }

    /// Zeroes the scoreboard.
    #[instrument(skip(self))]
    pub fn reset_scores(&mut self) {
        self.scores = Scoreboard::default();
    }

    /// Changes the difficulty used for the computer's next move.
    #[instrument(skip(self))]
    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        self.settings.difficulty = difficulty;
    }

    /// Changes who moves first, from the next game on.
    #[instrument(skip(self))]
    pub fn set_first_player(&mut self, first_player: FirstPlayer) {
        self.settings.first_player = first_player;
    }

    fn ensure_turn(&self, side: Owner) -> Result<(), MoveError> {
        if self.outcome.is_terminal() {
            warn!("Move attempted after game over");
            return Err(MoveError::GameOver);
        }
        if self.to_move != side {
            return Err(MoveError::NotYourTurn(side));
        }
        Ok(())
    }

    fn apply(&mut self, index: usize, side: Owner) -> GameOutcome {
        self.board = self.board.apply_move(index, side);
        self.history.push(index);
        self.to_move = side.opponent();
        self.outcome = classify(&self.board);
        debug!(index, side = %side, outcome = ?self.outcome, "Move applied");

        match self.outcome {
            GameOutcome::InProgress => {}
            GameOutcome::Won(winner, _) if winner == self.human => {
                self.scores.player += 1;
                info!("Human wins");
            }
            GameOutcome::Won(_, _) => {
                self.scores.computer += 1;
                info!("Computer wins");
            }
            GameOutcome::Draw => {
                self.scores.draws += 1;
                info!("Draw");
            }
        }
        self.outcome
    }
}

fn human_side(first_player: FirstPlayer) -> Owner {
    match first_player {
        FirstPlayer::Human => Owner::First,
        FirstPlayer::Computer => Owner::Second,
    }
}
