use alloc::boxed::Box;
use rand::rngs::SmallRng;

use crate::{
    board::Board,
    common::{GameError, Mark, Move, Status},
    player::Player,
};

/// Lifecycle of a [`Game`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    NotStarted,
    InProgress,
    Finished,
}

/// One board and the two players taking turns on it.
pub struct Game {
    board: Board,
    x_player: Box<dyn Player>,
    o_player: Box<dyn Player>,
    phase: GamePhase,
}

impl Game {
    /// New game on an empty board; `x_player` moves first.
    pub fn new(x_player: Box<dyn Player>, o_player: Box<dyn Player>) -> Self {
        Self::from_board(Board::new(), x_player, o_player)
    }

    /// Continue from an existing position.
    pub fn from_board(board: Board, x_player: Box<dyn Player>, o_player: Box<dyn Player>) -> Self {
        Self {
            board,
            x_player,
            o_player,
            phase: GamePhase::NotStarted,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn status(&self) -> Status {
        self.board.status()
    }

    /// Player placing `mark`.
    pub fn player(&self, mark: Mark) -> &dyn Player {
        match mark {
            Mark::X => self.x_player.as_ref(),
            Mark::O => self.o_player.as_ref(),
        }
    }

    /// Let the player whose mark is due make one move.
    ///
    /// Returns [`GameError::NoLegalMove`] once the game has ended.
    pub fn turn(&mut self, rng: &mut SmallRng) -> Result<Move, GameError> {
        if self.board.status().is_finished() {
            self.phase = GamePhase::Finished;
            return Err(GameError::NoLegalMove);
        }
        self.phase = GamePhase::InProgress;

        let player = match self.board.current_mark() {
            Mark::X => &mut self.x_player,
            Mark::O => &mut self.o_player,
        };
        let mv = player.make_move(&mut self.board, rng)?;

        if self.board.status().is_finished() {
            self.phase = GamePhase::Finished;
        }
        Ok(mv)
    }

    /// Play to the end without any output.
    pub fn run(&mut self, rng: &mut SmallRng) -> Result<Status, GameError> {
        while !self.board.status().is_finished() {
            self.turn(rng)?;
        }
        self.phase = GamePhase::Finished;
        Ok(self.board.status())
    }

    /// Play to the end, printing the board before every turn, announcing
    /// computer moves and finishing with the final board and result.
    #[cfg(feature = "std")]
    pub fn play<W: std::io::Write>(
        &mut self,
        rng: &mut SmallRng,
        out: &mut W,
    ) -> anyhow::Result<Status> {
        log::info!(
            "game started: {} vs {}",
            self.x_player.name(),
            self.o_player.name()
        );
        loop {
            write!(out, "{}", self.board)?;

            let status = self.board.status();
            if status.is_finished() {
                writeln!(out, "{}", status)?;
                out.flush()?;
                self.phase = GamePhase::Finished;
                log::info!("game finished: {}", status);
                return Ok(status);
            }
            out.flush()?;

            let mover = self.board.current_mark();
            self.turn(rng)?;
            let player = self.player(mover);
            if !player.is_human() {
                writeln!(out, "Making move level \"{}\"", player.name())?;
            }
        }
    }
}
