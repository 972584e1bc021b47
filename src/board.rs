//! Game board state: one bitboard per mark plus move counts and the turn flag.

use alloc::string::String;
use core::fmt;
use core::str::FromStr;

use crate::bitboard::{BitBoard, SetBits};
use crate::common::{EncodingError, GameError, Mark, Move, Status};
use crate::config::{BOARD_SIZE, CELL_COUNT, WIN_LINES};

type BB = BitBoard<u16, { BOARD_SIZE as usize }>;

/// A 3×3 tic-tac-toe position.
///
/// The two mark sets never overlap. X always moves first, so during legal
/// play `count(X) - count(O)` is 0 or 1. Boards are small `Copy` values;
/// searches clone them freely to try moves.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Board {
    x: BB,
    o: BB,
    count_x: u8,
    count_o: u8,
    x_to_move: bool,
}

/// Bitboard position of a move. `Move` packs column-major, the bitboard
/// row-major, so the parts swap.
#[inline]
fn cell_pos(mv: Move) -> (usize, usize) {
    (mv.col() as usize - 1, mv.row() as usize - 1)
}

fn has_line(marks: &BB) -> bool {
    WIN_LINES
        .iter()
        .any(|&line| marks.contains(&BB::from_raw(line)))
}

impl Board {
    /// Create an empty board with X to move.
    pub fn new() -> Self {
        Board {
            x: BB::new(),
            o: BB::new(),
            count_x: 0,
            count_o: 0,
            x_to_move: true,
        }
    }

    /// Place the current mover's mark at `mv` and pass the turn.
    ///
    /// Fails with [`GameError::CellOccupied`] without touching the board
    /// when the cell already holds a mark.
    pub fn apply_move(&mut self, mv: Move) -> Result<(), GameError> {
        if !self.is_empty_cell(mv) {
            return Err(GameError::CellOccupied(mv));
        }
        let mark = self.current_mark();
        self.place(mv, mark)?;
        self.x_to_move = !self.x_to_move;
        Ok(())
    }

    /// Copy of the board with `mv` applied; `self` is untouched.
    pub fn with_move(&self, mv: Move) -> Result<Board, GameError> {
        let mut next = *self;
        next.apply_move(mv)?;
        Ok(next)
    }

    fn place(&mut self, mv: Move, mark: Mark) -> Result<(), GameError> {
        let (r, c) = cell_pos(mv);
        match mark {
            Mark::X => {
                self.x.set(r, c)?;
                self.count_x += 1;
            }
            Mark::O => {
                self.o.set(r, c)?;
                self.count_o += 1;
            }
        }
        Ok(())
    }

    /// True iff neither mark occupies `mv`.
    pub fn is_empty_cell(&self, mv: Move) -> bool {
        self.cell(mv).is_none()
    }

    /// The mark at `mv`, if any.
    pub fn cell(&self, mv: Move) -> Option<Mark> {
        let (r, c) = cell_pos(mv);
        if self.x.get(r, c).unwrap_or(false) {
            Some(Mark::X)
        } else if self.o.get(r, c).unwrap_or(false) {
            Some(Mark::O)
        } else {
            None
        }
    }

    /// Evaluate the position.
    pub fn status(&self) -> Status {
        let x_wins = has_line(&self.x);
        let o_wins = has_line(&self.o);
        let diff = (self.count_x as i32 - self.count_o as i32).abs();

        if diff > 1 || (x_wins && o_wins) {
            Status::Impossible
        } else if x_wins {
            Status::XWins
        } else if o_wins {
            Status::OWins
        } else if self.count_x as usize + self.count_o as usize == CELL_COUNT {
            Status::Draw
        } else {
            Status::InProgress
        }
    }

    /// Empty cells in ascending bit order, i.e. rendered line by line.
    pub fn empty_cells(&self) -> EmptyCells {
        EmptyCells {
            bits: (!(self.x | self.o)).iter_set_bits(),
        }
    }

    pub fn is_full(&self) -> bool {
        (self.x | self.o) == BB::full()
    }

    pub fn x_to_move(&self) -> bool {
        self.x_to_move
    }

    /// The mark placed by the next [`Board::apply_move`].
    pub fn current_mark(&self) -> Mark {
        if self.x_to_move {
            Mark::X
        } else {
            Mark::O
        }
    }

    /// Number of cells holding `mark`.
    pub fn count(&self, mark: Mark) -> usize {
        match mark {
            Mark::X => self.count_x as usize,
            Mark::O => self.count_o as usize,
        }
    }

    /// Nine-character encoding, character `i` describing bit `i`.
    pub fn encode(&self) -> String {
        (0..CELL_COUNT)
            .map(|i| match self.cell(Move::from_index(i)) {
                Some(mark) => mark.symbol(),
                None => '_',
            })
            .collect()
    }

    /// Text grid of the board; same as the `Display` output.
    pub fn render(&self) -> String {
        use core::fmt::Write;
        let mut out = String::new();
        let _ = write!(out, "{}", self);
        out
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// Parses the nine-character `_`/`X`/`O` encoding. The turn is inferred from
/// the counts: O moves when X has placed more marks.
impl FromStr for Board {
    type Err = GameError;

    fn from_str(data: &str) -> Result<Self, Self::Err> {
        let len = data.chars().count();
        if len != CELL_COUNT {
            return Err(GameError::MalformedEncoding(EncodingError::WrongLength(len)));
        }
        let mut board = Board::new();
        for (i, ch) in data.chars().enumerate() {
            let mv = Move::from_index(i);
            match ch {
                '_' => {}
                'X' => board.place(mv, Mark::X)?,
                'O' => board.place(mv, Mark::O)?,
                other => {
                    return Err(GameError::MalformedEncoding(EncodingError::InvalidSymbol(
                        other,
                    )))
                }
            }
        }
        board.x_to_move = board.count_x <= board.count_o;
        Ok(board)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let size = BOARD_SIZE as usize;
        writeln!(f, "---------")?;
        for line in 0..size {
            write!(f, "| ")?;
            for pos in 0..size {
                let ch = match self.cell(Move::from_index(line * size + pos)) {
                    Some(mark) => mark.symbol(),
                    None => '_',
                };
                write!(f, "{} ", ch)?;
            }
            writeln!(f, "|")?;
        }
        writeln!(f, "---------")
    }
}

/// Iterator over the empty cells of a [`Board`].
pub struct EmptyCells {
    bits: SetBits<u16, { BOARD_SIZE as usize }>,
}

impl Iterator for EmptyCells {
    type Item = Move;

    fn next(&mut self) -> Option<Move> {
        self.bits
            .next()
            .map(|(r, c)| Move::from_index(r * BOARD_SIZE as usize + c))
    }
}
