use alloc::boxed::Box;
use alloc::string::ToString;
use core::str::FromStr;

use rand::rngs::SmallRng;

use crate::{
    ai::Difficulty,
    board::Board,
    common::{GameError, Move},
    player_ai::AiPlayer,
};

/// Interface implemented by the different player types.
///
/// A player obtains one legal move, applies it to the shared board and
/// reports which move it made.
pub trait Player {
    /// Choose a move and apply it to `board`.
    fn make_move(&mut self, board: &mut Board, rng: &mut SmallRng) -> Result<Move, GameError>;

    /// Name the player was created from (`user`, `easy`, ...).
    fn name(&self) -> &str;

    fn is_human(&self) -> bool {
        false
    }
}

/// Where a human player's moves come from.
pub trait MoveSource {
    /// Read one move. Bad input surfaces as a recoverable [`GameError`];
    /// [`GameError::InputClosed`] when no more input will arrive.
    fn read_move(&mut self) -> Result<Move, GameError>;

    /// Tell the human why the last move was refused.
    fn reject(&mut self, err: &GameError);
}

/// Player driven by a [`MoveSource`]. Asks again, without limit, until the
/// entered move is legal.
pub struct HumanPlayer<S> {
    source: S,
}

impl<S: MoveSource> HumanPlayer<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }
}

impl<S: MoveSource> Player for HumanPlayer<S> {
    fn make_move(&mut self, board: &mut Board, _rng: &mut SmallRng) -> Result<Move, GameError> {
        loop {
            let attempt = self
                .source
                .read_move()
                .and_then(|mv| board.apply_move(mv).map(|()| mv));
            match attempt {
                Ok(mv) => return Ok(mv),
                Err(e) if e.is_recoverable() => {
                    log::debug!("rejected input: {:?}", e);
                    self.source.reject(&e);
                }
                Err(e) => return Err(e),
            }
        }
    }

    fn name(&self) -> &str {
        "user"
    }

    fn is_human(&self) -> bool {
        true
    }
}

/// The player types that can be named at game setup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub enum PlayerKind {
    User,
    Ai(Difficulty),
}

impl PlayerKind {
    /// Build the player. `source` feeds a [`PlayerKind::User`] and is
    /// dropped for computer players.
    pub fn build<S: MoveSource + 'static>(self, source: S) -> Box<dyn Player> {
        match self {
            PlayerKind::User => Box::new(HumanPlayer::new(source)),
            PlayerKind::Ai(difficulty) => Box::new(AiPlayer::new(difficulty)),
        }
    }

    pub fn is_human(self) -> bool {
        self == PlayerKind::User
    }
}

impl FromStr for PlayerKind {
    type Err = GameError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name {
            "user" => Ok(PlayerKind::User),
            "easy" => Ok(PlayerKind::Ai(Difficulty::Easy)),
            "medium" => Ok(PlayerKind::Ai(Difficulty::Medium)),
            "hard" => Ok(PlayerKind::Ai(Difficulty::Hard)),
            other => Err(GameError::UnresolvedPlayerName(other.to_string())),
        }
    }
}
