#![cfg(feature = "std")]

use std::cell::RefCell;
use std::io::{self, BufRead, Stdin, StdinLock, Stdout, Write};
use std::rc::Rc;
use std::string::String;
use std::vec::Vec;

use crate::common::{GameError, Move};
use crate::player::MoveSource;

struct Streams<R, W> {
    input: R,
    output: W,
}

/// Handle to the line-based terminal shared by the menu, the game loop and
/// every human player. Clones refer to the same input and output.
pub struct Console<R, W> {
    streams: Rc<RefCell<Streams<R, W>>>,
}

impl<R, W> Clone for Console<R, W> {
    fn clone(&self) -> Self {
        Self {
            streams: Rc::clone(&self.streams),
        }
    }
}

impl Console<StdinLock<'static>, Stdout> {
    /// Console over the process stdin and stdout.
    pub fn stdio() -> Self {
        let stdin: Stdin = io::stdin();
        Self::new(stdin.lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            streams: Rc::new(RefCell::new(Streams { input, output })),
        }
    }

    /// Next input line without its line terminator, `None` at end of input.
    ///
    /// A line that is not UTF-8 is consumed whole and reported as
    /// [`io::ErrorKind::InvalidData`], so the caller can ask again.
    pub fn read_line(&self) -> io::Result<Option<String>> {
        let mut raw = Vec::new();
        let read = self.streams.borrow_mut().input.read_until(b'\n', &mut raw)?;
        if read == 0 {
            return Ok(None);
        }
        let mut line =
            String::from_utf8(raw).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        let trimmed = line.trim_end_matches(['\r', '\n']).len();
        line.truncate(trimmed);
        Ok(Some(line))
    }

    /// Print `text` without a newline and flush it.
    pub fn prompt(&self, text: &str) -> io::Result<()> {
        let mut streams = self.streams.borrow_mut();
        streams.output.write_all(text.as_bytes())?;
        streams.output.flush()
    }
}

impl<R, W> Console<R, W> {
    /// Inspect the output stream.
    pub fn with_output<T>(&self, f: impl FnOnce(&W) -> T) -> T {
        f(&self.streams.borrow().output)
    }
}

impl<R, W: Write> Write for Console<R, W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.streams.borrow_mut().output.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.streams.borrow_mut().output.flush()
    }
}

/// Parse a line holding two numbers: the board line first, then the
/// position within that line.
pub fn parse_move(line: &str) -> Result<Move, GameError> {
    let mut parts = line.split_whitespace();
    let mut next = || -> Result<i64, GameError> {
        parts
            .next()
            .ok_or(GameError::MalformedInput)?
            .parse::<i64>()
            .map_err(|_| GameError::MalformedInput)
    };
    let line_no = next()?;
    let position = next()?;
    Move::new(position, line_no)
}

impl<R: BufRead, W: Write> MoveSource for Console<R, W> {
    fn read_move(&mut self) -> Result<Move, GameError> {
        let line = self
            .prompt("Enter the coordinates: ")
            .and_then(|()| self.read_line())
            .map_err(|e| match e.kind() {
                io::ErrorKind::InvalidData => GameError::MalformedInput,
                _ => {
                    log::warn!("reading coordinates failed: {}", e);
                    GameError::InputClosed
                }
            })?;
        match line {
            Some(line) => parse_move(&line),
            None => Err(GameError::InputClosed),
        }
    }

    fn reject(&mut self, err: &GameError) {
        if let Err(e) = writeln!(self, "{}", err) {
            log::warn!("could not report rejected move: {}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn parse_line_then_position() {
        let mv = parse_move("1 3").unwrap();
        assert_eq!((mv.row(), mv.col()), (3, 1));
        assert_eq!(mv.index(), 2);
    }

    #[test]
    fn parse_rejects_bad_input() {
        assert_eq!(parse_move("one two"), Err(GameError::MalformedInput));
        assert_eq!(parse_move("2"), Err(GameError::MalformedInput));
        assert_eq!(parse_move(""), Err(GameError::MalformedInput));
        assert_eq!(parse_move("4 1"), Err(GameError::InvalidCoordinate(4)));
        assert_eq!(parse_move("1 0"), Err(GameError::InvalidCoordinate(0)));
    }

    #[test]
    fn console_reads_lines_until_eof() {
        let console = Console::new(Cursor::new("a b\r\n2 2\n"), Vec::new());
        assert_eq!(console.read_line().unwrap().as_deref(), Some("a b"));
        assert_eq!(console.read_line().unwrap().as_deref(), Some("2 2"));
        assert_eq!(console.read_line().unwrap(), None);
    }

    #[test]
    fn console_skips_line_that_is_not_utf8() {
        let console = Console::new(Cursor::new(&b"\xff\xfe\n2 2\n"[..]), Vec::new());
        let err = console.read_line().unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);
        assert_eq!(console.read_line().unwrap().as_deref(), Some("2 2"));
    }

    #[test]
    fn human_is_asked_again_after_garbled_line() {
        use crate::board::Board;
        use crate::player::{HumanPlayer, Player};
        use rand::{rngs::SmallRng, SeedableRng};

        let console = Console::new(Cursor::new(&b"\xff\xfe\n1 1\n"[..]), Vec::new());
        let mut human = HumanPlayer::new(console.clone());
        let mut board = Board::new();
        let mut rng = SmallRng::seed_from_u64(0);
        let mv = human.make_move(&mut board, &mut rng).unwrap();
        assert_eq!((mv.row(), mv.col()), (1, 1));
        let out = console.with_output(|o| String::from_utf8(o.clone()).unwrap());
        assert_eq!(
            out,
            "Enter the coordinates: You should enter numbers!\nEnter the coordinates: "
        );
    }

    #[test]
    fn console_move_source_prompts() {
        let mut console = Console::new(Cursor::new("x\n"), Vec::new());
        assert_eq!(console.read_move(), Err(GameError::MalformedInput));
        assert_eq!(console.read_move(), Err(GameError::InputClosed));
        console.reject(&GameError::MalformedInput);
        let out = console.with_output(|o| String::from_utf8(o.clone()).unwrap());
        assert_eq!(
            out,
            "Enter the coordinates: Enter the coordinates: You should enter numbers!\n"
        );
    }
}
