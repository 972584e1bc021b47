use alloc::boxed::Box;
use rand::rngs::SmallRng;

use crate::{
    ai::{Difficulty, Strategy},
    board::Board,
    common::{GameError, Move},
};

use crate::player::Player;

/// Computer player backed by one of the difficulty strategies.
pub struct AiPlayer {
    strategy: Box<dyn Strategy>,
}

impl AiPlayer {
    pub fn new(difficulty: Difficulty) -> Self {
        Self::with_strategy(difficulty.strategy())
    }

    pub fn with_strategy(strategy: Box<dyn Strategy>) -> Self {
        Self { strategy }
    }
}

impl Player for AiPlayer {
    /// Strategies only pick empty cells, so the move is applied as is.
    fn make_move(&mut self, board: &mut Board, rng: &mut SmallRng) -> Result<Move, GameError> {
        let mv = self.strategy.generate_move(board, rng)?;
        board.apply_move(mv)?;
        log::info!("{} ai placed {}", self.strategy.name(), mv);
        Ok(mv)
    }

    fn name(&self) -> &str {
        self.strategy.name()
    }
}
