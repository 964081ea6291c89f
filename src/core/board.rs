//! # Board
//!
//! The 3x3 grid, its cells, and the two marks that can occupy them.
//!
//! ```text
//!  0 | 1 | 2
//! ---+---+---
//!  3 | 4 | 5        index = row * 3 + col
//! ---+---+---
//!  6 | 7 | 8
//! ```
//!
//! A `Board` is a value. Placing a mark produces a new snapshot and leaves
//! the original untouched, which is what lets the history keep every
//! position around for time travel.

use std::fmt;
use std::str::FromStr;

/// Width and height of the grid.
pub const BOARD_SIZE: usize = 3;
/// Number of cells on the grid.
pub const CELL_COUNT: usize = BOARD_SIZE * BOARD_SIZE;

/// Row (0-based) of a cell index.
pub fn row_of(index: usize) -> usize {
    index / BOARD_SIZE
}

/// Column (0-based) of a cell index.
pub fn col_of(index: usize) -> usize {
    index % BOARD_SIZE
}

/// A player's mark. X always moves first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mark {
    X,
    O,
}

impl Mark {
    /// The mark to play at a given history step: even steps belong to X.
    pub fn for_step(step: usize) -> Self {
        if step % 2 == 0 { Mark::X } else { Mark::O }
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mark::X => write!(f, "X"),
            Mark::O => write!(f, "O"),
        }
    }
}

/// One square of the grid.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Cell {
    #[default]
    Empty,
    X,
    O,
}

impl Cell {
    /// The mark in this cell, if any.
    pub fn mark(self) -> Option<Mark> {
        match self {
            Cell::Empty => None,
            Cell::X => Some(Mark::X),
            Cell::O => Some(Mark::O),
        }
    }

    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }

    /// Single-character glyph used by the renderer and `Board`'s `Display`.
    pub fn symbol(self) -> &'static str {
        match self {
            Cell::Empty => " ",
            Cell::X => "X",
            Cell::O => "O",
        }
    }
}

impl From<Mark> for Cell {
    fn from(mark: Mark) -> Self {
        match mark {
            Mark::X => Cell::X,
            Mark::O => Cell::O,
        }
    }
}

/// An immutable 3x3 snapshot, row-major.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [Cell; CELL_COUNT],
}

impl Board {
    pub fn empty() -> Self {
        Self::default()
    }

    /// The cell at `index`, or `None` when the index is off the board.
    pub fn get(&self, index: usize) -> Option<Cell> {
        self.cells.get(index).copied()
    }

    /// True only for an on-board cell that holds no mark.
    pub fn is_empty_at(&self, index: usize) -> bool {
        matches!(self.get(index), Some(Cell::Empty))
    }

    /// A copy of this board with `mark` placed at `index`.
    ///
    /// Does not check occupancy; callers decide whether a move is legal.
    /// An off-board index yields an unchanged copy.
    pub fn with_mark(&self, index: usize, mark: Mark) -> Self {
        let mut next = *self;
        if let Some(cell) = next.cells.get_mut(index) {
            *cell = Cell::from(mark);
        }
        next
    }

    pub fn cells(&self) -> &[Cell; CELL_COUNT] {
        &self.cells
    }

    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|c| !c.is_empty()).count()
    }

    pub fn is_full(&self) -> bool {
        self.filled_count() == CELL_COUNT
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..BOARD_SIZE {
            let line: Vec<&str> = (0..BOARD_SIZE)
                .map(|col| match self.cells[row * BOARD_SIZE + col] {
                    Cell::Empty => ".",
                    cell => cell.symbol(),
                })
                .collect();
            write!(f, "{}", line.join(""))?;
            if row + 1 < BOARD_SIZE {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

/// Failure to read a board diagram.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardParseError {
    /// A character other than a mark, an empty marker, `|` or whitespace.
    InvalidChar(char),
    /// The diagram did not describe exactly nine cells.
    WrongLength(usize),
}

impl fmt::Display for BoardParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardParseError::InvalidChar(c) => write!(f, "invalid board character: {c:?}"),
            BoardParseError::WrongLength(n) => {
                write!(f, "board needs {CELL_COUNT} cells, found {n}")
            }
        }
    }
}

impl std::error::Error for BoardParseError {}

impl FromStr for Board {
    type Err = BoardParseError;

    /// Reads a diagram such as `"XO. / .X. / ..O"`.
    ///
    /// `X`/`x` and `O`/`o` are marks, `.` and `-` are empty cells.
    /// Whitespace, `|` and `/` are separators and ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut cells = Vec::with_capacity(CELL_COUNT);
        for c in s.chars() {
            match c {
                'X' | 'x' => cells.push(Cell::X),
                'O' | 'o' => cells.push(Cell::O),
                '.' | '-' => cells.push(Cell::Empty),
                '|' | '/' => {}
                c if c.is_whitespace() => {}
                other => return Err(BoardParseError::InvalidChar(other)),
            }
        }
        let cells: [Cell; CELL_COUNT] = cells
            .try_into()
            .map_err(|v: Vec<Cell>| BoardParseError::WrongLength(v.len()))?;
        Ok(Self { cells })
    }
}
