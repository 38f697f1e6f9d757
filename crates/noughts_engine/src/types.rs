//! Core domain types for the board engine.

use derive_more::Display;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::instrument;

/// Number of cells on the board.
pub const CELL_COUNT: usize = 9;

/// Side owning a mark on the board.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Owner {
    /// Moves first, plays `X`.
    #[display("X")]
    First,
    /// Moves second, plays `O`.
    #[display("O")]
    Second,
}

impl Owner {
    /// Returns the other side.
    pub fn opponent(self) -> Self {
        match self {
            Owner::First => Owner::Second,
            Owner::Second => Owner::First,
        }
    }

    /// Returns the symbol drawn for this side.
    pub fn symbol(self) -> char {
        match self {
            Owner::First => 'X',
            Owner::Second => 'O',
        }
    }
}

/// A single cell of the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    /// Nobody has played here yet.
    #[default]
    Empty,
    /// Cell claimed by a side.
    Mark(Owner),
}

impl Cell {
    /// Returns true if the cell has no mark.
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }

    /// Returns the owner of the mark, if any.
    pub fn owner(self) -> Option<Owner> {
        match self {
            Cell::Empty => None,
            Cell::Mark(owner) => Some(owner),
        }
    }
}

/// 3x3 board in row-major order (indices 0-8).
///
/// Boards are plain values: [`Board::apply_move`] returns a fresh board and
/// leaves the receiver untouched, so search code can branch freely.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Board {
    cells: [Cell; CELL_COUNT],
}

impl Board {
    /// Creates a board with every cell empty.
    pub fn empty() -> Self {
        Self {
            cells: [Cell::Empty; CELL_COUNT],
        }
    }

    /// Creates a board from explicit cells.
    pub fn from_cells(cells: [Cell; CELL_COUNT]) -> Self {
        Self { cells }
    }

    /// Returns the cell at `index`, or `None` past the end of the board.
    pub fn get(&self, index: usize) -> Option<Cell> {
        self.cells.get(index).copied()
    }

    /// Returns all cells.
    pub fn cells(&self) -> &[Cell; CELL_COUNT] {
        &self.cells
    }

    /// Returns true iff `index` is on the board and its cell is empty.
    pub fn is_valid_move(&self, index: usize) -> bool {
        matches!(self.get(index), Some(Cell::Empty))
    }

    /// Returns a copy of this board with `owner` marked at `index`.
    ///
    /// The move is not re-validated: callers check [`Board::is_valid_move`]
    /// first. Panics if `index` is not below [`CELL_COUNT`].
    pub fn apply_move(&self, index: usize, owner: Owner) -> Self {
        let mut next = *self;
        next.cells[index] = Cell::Mark(owner);
        next
    }

    /// Returns the indices of empty cells in ascending order.
    pub fn available_moves(&self) -> Vec<usize> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_empty())
            .map(|(index, _)| index)
            .collect()
    }
}

impl std::fmt::Display for Board {
    /// Renders the board as three rows; empty cells show their 1-based number.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..3 {
            for col in 0..3 {
                let index = row * 3 + col;
                match self.cells[index] {
                    Cell::Empty => write!(f, "{}", index + 1)?,
                    Cell::Mark(owner) => write!(f, "{}", owner.symbol())?,
                }
                if col < 2 {
                    write!(f, "|")?;
                }
            }
            if row < 2 {
                write!(f, "\n-+-+-\n")?;
            }
        }
        Ok(())
    }
}

/// Error parsing a board from its compact text form.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum BoardParseError {
    /// The text did not contain exactly nine cells.
    #[display("Expected 9 cells, found {}", _0)]
    WrongLength(usize),

    /// A character other than `X`, `O`, `.`, `_` or `-` was found.
    #[display("Invalid cell character {:?}", _0)]
    InvalidCell(char),
}

impl std::error::Error for BoardParseError {}

impl FromStr for Board {
    type Err = BoardParseError;

    /// Parses nine cell characters in row-major order, ignoring whitespace
    /// and `|` separators. `X` and `O` are marks; `.`, `_` and `-` are empty.
    #[instrument]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let symbols: Vec<char> = s
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '|')
            .collect();
        if symbols.len() != CELL_COUNT {
            return Err(BoardParseError::WrongLength(symbols.len()));
        }

        let mut cells = [Cell::Empty; CELL_COUNT];
        for (cell, symbol) in cells.iter_mut().zip(symbols) {
            *cell = match symbol.to_ascii_uppercase() {
                'X' => Cell::Mark(Owner::First),
                'O' => Cell::Mark(Owner::Second),
                '.' | '_' | '-' => Cell::Empty,
                other => return Err(BoardParseError::InvalidCell(other)),
            };
        }
        Ok(Self::from_cells(cells))
    }
}
