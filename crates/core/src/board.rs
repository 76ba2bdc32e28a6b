//! Board representation.
//!
//! The board is nine cells in row-major order:
//! ```text
//! 0 | 1 | 2
//! ---------
//! 3 | 4 | 5
//! ---------
//! 6 | 7 | 8
//! ```

use crate::{Result, TicTacToeError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Number of cells on the board.
pub const CELL_COUNT: usize = 9;

/// Three cell indices that win when uniformly marked.
pub type Line = [usize; 3];

/// Every winning line, checked in this order.
pub const LINES: [Line; 8] = [
    [0, 1, 2], // top row
    [3, 4, 5], // middle row
    [6, 7, 8], // bottom row
    [0, 3, 6], // left column
    [1, 4, 7], // center column
    [2, 5, 8], // right column
    [0, 4, 8], // main diagonal
    [2, 4, 6], // anti-diagonal
];

/// A mark placed on the board.
///
/// `Player` is the human (shown as `X`), `Opponent` is the computer
/// (shown as `O`).
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, Serialize, Deserialize)]
pub enum Mark {
    Player,
    Opponent,
}

impl Mark {
    /// Get the other side.
    pub fn opposite(self) -> Self {
        match self {
            Mark::Player => Mark::Opponent,
            Mark::Opponent => Mark::Player,
        }
    }

    /// Character used to draw this mark.
    pub fn symbol(self) -> char {
        match self {
            Mark::Player => 'X',
            Mark::Opponent => 'O',
        }
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// A 3x3 tic-tac-toe board.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, Default, Serialize, Deserialize)]
pub struct Board {
    cells: [Option<Mark>; CELL_COUNT],
}

impl Board {
    /// Create an empty board.
    pub fn new() -> Self {
        Self {
            cells: [None; CELL_COUNT],
        }
    }

    /// Create a board from explicit cell contents.
    pub fn from_cells(cells: [Option<Mark>; CELL_COUNT]) -> Self {
        Self { cells }
    }

    /// Get the mark at a cell, if any. Out-of-range cells read as empty.
    pub fn get(&self, cell: usize) -> Option<Mark> {
        self.cells.get(cell).copied().flatten()
    }

    /// Check whether a cell is on the board and unmarked.
    pub fn is_empty_cell(&self, cell: usize) -> bool {
        cell < CELL_COUNT && self.cells[cell].is_none()
    }

    /// Place a mark in an empty cell.
    ///
    /// # Errors
    /// - `InvalidCell` if `cell` is not in 0..9
    /// - `CellOccupied` if the cell already holds a mark
    pub fn place(&mut self, cell: usize, mark: Mark) -> Result<()> {
        match self.cells.get(cell) {
            None => Err(TicTacToeError::InvalidCell(cell)),
            Some(Some(_)) => Err(TicTacToeError::CellOccupied(cell)),
            Some(None) => {
                self.cells[cell] = Some(mark);
                Ok(())
            }
        }
    }

    /// Overwrite a cell without validation.
    ///
    /// Used by search code that places and clears marks speculatively.
    ///
    /// # Panics
    /// Panics if `cell >= 9`.
    pub fn set_cell(&mut self, cell: usize, value: Option<Mark>) {
        self.cells[cell] = value;
    }

    /// Remove every mark.
    pub fn clear(&mut self) {
        self.cells = [None; CELL_COUNT];
    }

    /// Indices of all empty cells, ascending.
    pub fn empty_cells(&self) -> impl Iterator<Item = usize> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_none())
            .map(|(i, _)| i)
    }

    /// Check if every cell holds a mark.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|c| c.is_some())
    }

    /// Check if no cell holds a mark.
    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|c| c.is_none())
    }

    /// Number of cells holding `mark`.
    pub fn count(&self, mark: Mark) -> usize {
        self.cells.iter().filter(|&&c| c == Some(mark)).count()
    }

    /// Get the raw cells.
    pub fn cells(&self) -> &[Option<Mark>; CELL_COUNT] {
        &self.cells
    }

    /// The mark filling the first completed line, if any.
    pub fn winner(&self) -> Option<Mark> {
        LINES.iter().find_map(|&[a, b, c]| {
            let mark = self.cells[a]?;
            (self.cells[b] == Some(mark) && self.cells[c] == Some(mark)).then_some(mark)
        })
    }

    /// Compact nine-character form, `.` for empty cells.
    ///
    /// Parses back with [`Board::from_str`].
    pub fn to_compact(&self) -> String {
        self.cells
            .iter()
            .map(|c| c.map_or('.', Mark::symbol))
            .collect()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..3 {
            if row > 0 {
                writeln!(f, "-----------")?;
            }
            for col in 0..3 {
                if col > 0 {
                    write!(f, "|")?;
                }
                match self.cells[row * 3 + col] {
                    Some(mark) => write!(f, " {} ", mark)?,
                    None => write!(f, "   ")?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl FromStr for Board {
    type Err = TicTacToeError;

    /// Parse nine cells written row-major as `X`, `O`, or one of `.`, `_`,
    /// `-` for empty. Whitespace, `|` and `/` between cells are ignored.
    fn from_str(s: &str) -> Result<Self> {
        let mut cells = [None; CELL_COUNT];
        let mut count = 0;

        for ch in s.chars() {
            let cell = match ch {
                'X' | 'x' => Some(Mark::Player),
                'O' | 'o' => Some(Mark::Opponent),
                '.' | '_' | '-' => None,
                c if c.is_whitespace() || c == '|' || c == '/' => continue,
                other => {
                    return Err(TicTacToeError::InvalidBoard(format!(
                        "unexpected character '{}'",
                        other
                    )))
                }
            };
            if count == CELL_COUNT {
                return Err(TicTacToeError::InvalidBoard(format!(
                    "more than {} cells in \"{}\"",
                    CELL_COUNT, s
                )));
            }
            cells[count] = cell;
            count += 1;
        }

        if count != CELL_COUNT {
            return Err(TicTacToeError::InvalidBoard(format!(
                "expected {} cells, found {}",
                CELL_COUNT, count
            )));
        }

        Ok(Self { cells })
    }
}
