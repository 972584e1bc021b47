//! Commonly used types and utilities for ease of import.

pub use crate::{
    AiPlayer, Board, Difficulty, Game, GameError, Mark, Move, Player, PlayerKind, Status,
    Strategy,
};

#[cfg(feature = "std")]
pub use crate::{init_logging, Console, Menu};
