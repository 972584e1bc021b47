//! Common types: marks, moves, game status and errors.

use alloc::string::String;
use core::fmt;

use crate::bitboard::BitBoardError;
use crate::config::{BOARD_SIZE, CELL_COUNT};

/// One of the two marks placed on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub enum Mark {
    X,
    O,
}

impl Mark {
    /// The other mark.
    pub fn opponent(self) -> Mark {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }

    /// `+1` for X, `-1` for O. Ranks are always from X's point of view.
    pub fn sign(self) -> i32 {
        match self {
            Mark::X => 1,
            Mark::O => -1,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Mark::X => 'X',
            Mark::O => 'O',
        }
    }
}

/// A cell coordinate, both parts 1-based in `1..=3`.
///
/// Cells pack column-major: bit `(row - 1) + (col - 1) * 3`. Rendered
/// boards show bit `i` on line `i / 3`, so `row` walks along a rendered line
/// and `col` picks the line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    row: u8,
    col: u8,
}

impl Move {
    /// Build a move, rejecting coordinates outside `1..=3`.
    pub fn new(row: i64, col: i64) -> Result<Self, GameError> {
        for v in [row, col] {
            if v < 1 || v > BOARD_SIZE as i64 {
                return Err(GameError::InvalidCoordinate(v));
            }
        }
        Ok(Move {
            row: row as u8,
            col: col as u8,
        })
    }

    /// Move for bit `index`; `index` must be below [`CELL_COUNT`].
    pub(crate) fn from_index(index: usize) -> Self {
        debug_assert!(index < CELL_COUNT);
        let size = BOARD_SIZE as usize;
        Move {
            row: (index % size) as u8 + 1,
            col: (index / size) as u8 + 1,
        }
    }

    pub fn row(&self) -> u8 {
        self.row
    }

    pub fn col(&self) -> u8 {
        self.col
    }

    /// Bit index of this cell.
    pub fn index(&self) -> usize {
        (self.row as usize - 1) + (self.col as usize - 1) * BOARD_SIZE as usize
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Outcome of evaluating a board. Derived on demand, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub enum Status {
    InProgress,
    XWins,
    OWins,
    Draw,
    /// Both marks own a line, or the mark counts are more than one apart.
    Impossible,
}

impl Status {
    /// True for every status other than [`Status::InProgress`].
    pub fn is_finished(self) -> bool {
        self != Status::InProgress
    }

    /// The winning mark, if any.
    pub fn winner(self) -> Option<Mark> {
        match self {
            Status::XWins => Some(Mark::X),
            Status::OWins => Some(Mark::O),
            _ => None,
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Status::InProgress => "Game not finished",
            Status::XWins => "X wins",
            Status::OWins => "O wins",
            Status::Draw => "Draw",
            Status::Impossible => "Impossible",
        };
        f.write_str(text)
    }
}

/// Why a board encoding was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EncodingError {
    /// Encoding must be exactly nine characters.
    WrongLength(usize),
    /// Only `_`, `X` and `O` are allowed.
    InvalidSymbol(char),
}

/// Errors returned by board, player and strategy operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// Underlying bitboard error (index out of range).
    BitBoard(BitBoardError),
    /// Target cell already holds a mark.
    CellOccupied(Move),
    /// Board encoding string could not be parsed.
    MalformedEncoding(EncodingError),
    /// Coordinate outside `1..=3`.
    InvalidCoordinate(i64),
    /// Input line did not hold two numbers.
    MalformedInput,
    /// Unknown player type at game setup.
    UnresolvedPlayerName(String),
    /// A strategy was asked to move on a full board.
    NoLegalMove,
    /// The input source reached end of file.
    InputClosed,
}

impl GameError {
    /// Errors a human recovers from by entering another move.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            GameError::CellOccupied(_) | GameError::InvalidCoordinate(_) | GameError::MalformedInput
        )
    }
}

impl From<BitBoardError> for GameError {
    fn from(err: BitBoardError) -> Self {
        GameError::BitBoard(err)
    }
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::BitBoard(e) => write!(f, "BitBoard error: {}", e),
            GameError::CellOccupied(_) => write!(f, "This cell is occupied! Choose another one!"),
            GameError::MalformedEncoding(EncodingError::WrongLength(len)) => write!(
                f,
                "The data for building the position must have a length equal to {} characters, got {}.",
                CELL_COUNT, len
            ),
            GameError::MalformedEncoding(EncodingError::InvalidSymbol(ch)) => {
                write!(f, "Invalid symbol '{}' (only _, X, O is allowed)", ch)
            }
            GameError::InvalidCoordinate(_) => write!(f, "Coordinates should be from 1 to 3!"),
            GameError::MalformedInput => write!(f, "You should enter numbers!"),
            GameError::UnresolvedPlayerName(name) => write!(f, "Unknown player type '{}'", name),
            GameError::NoLegalMove => write!(f, "No legal move: the board is full"),
            GameError::InputClosed => write!(f, "Input closed"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for GameError {}
