// Move generation for computer players: random, one-reply lookahead and full
// minimax. Strategies hold no state; every call receives the board and the
// session RNG, and only ever explores copies of the board.

use alloc::boxed::Box;
use rand::rngs::SmallRng;
use rand::Rng;

use crate::{
    board::Board,
    common::{GameError, Move, Status},
    config::{SEARCH_DEPTH, TIEBREAK_SPAN, WIN_RANK},
};

/// A move-generation policy.
pub trait Strategy {
    /// Difficulty name, as typed on the command line.
    fn name(&self) -> &'static str;

    /// Pick a move for the side to move on `board`.
    ///
    /// Returns [`GameError::NoLegalMove`] if the board is full. The board is
    /// never modified.
    fn generate_move(&self, board: &Board, rng: &mut SmallRng) -> Result<Move, GameError>;
}

/// Difficulty tiers, each backed by one [`Strategy`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize))]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub fn name(self) -> &'static str {
        self.strategy().name()
    }

    /// Strategy implementing this tier.
    pub fn strategy(self) -> Box<dyn Strategy> {
        match self {
            Difficulty::Easy => Box::new(EasyAi),
            Difficulty::Medium => Box::new(MediumAi),
            Difficulty::Hard => Box::new(HardAi),
        }
    }
}

/// Static rank of a position from X's point of view: `WIN_RANK` if X has
/// won, `-WIN_RANK` if O has, otherwise 0.
pub fn position_rank(board: &Board) -> i32 {
    match board.status() {
        Status::XWins => WIN_RANK,
        Status::OWins => -WIN_RANK,
        _ => 0,
    }
}

/// Uniformly random empty cell.
#[derive(Debug, Clone, Copy, Default)]
pub struct EasyAi;

impl Strategy for EasyAi {
    fn name(&self) -> &'static str {
        "easy"
    }

    fn generate_move(&self, board: &Board, rng: &mut SmallRng) -> Result<Move, GameError> {
        let count = board.empty_cells().count();
        if count == 0 {
            return Err(GameError::NoLegalMove);
        }
        let pick = rng.random_range(0..count);
        board.empty_cells().nth(pick).ok_or(GameError::NoLegalMove)
    }
}

/// Looks one reply ahead: picks the move after which the opponent's best
/// immediate reply is worst for the opponent.
///
/// Replies that decide nothing are ranked by a random number in
/// `0..TIEBREAK_SPAN` instead of 0, so quiet candidates are shuffled while
/// a reply that wins for the opponent always dominates. Won positions are
/// never replaced.
#[derive(Debug, Clone, Copy, Default)]
pub struct MediumAi;

impl Strategy for MediumAi {
    fn name(&self) -> &'static str {
        "medium"
    }

    fn generate_move(&self, board: &Board, rng: &mut SmallRng) -> Result<Move, GameError> {
        let mut moves = board.empty_cells();
        let mut best_move = moves.next().ok_or(GameError::NoLegalMove)?;
        let opponent_sign = board.current_mark().opponent().sign();
        let mut best_rank = -WIN_RANK;

        for mv in board.empty_cells() {
            let after = board.with_move(mv)?;

            let mut opponent_best = -WIN_RANK;
            for reply in after.empty_cells() {
                let next = after.with_move(reply)?;
                let mut rank = opponent_sign * position_rank(&next);
                if rank == 0 {
                    rank = rng.random_range(0..TIEBREAK_SPAN);
                }
                if rank > opponent_best {
                    opponent_best = rank;
                }
            }

            if -opponent_best > best_rank {
                best_rank = -opponent_best;
                best_move = mv;
            }
        }

        log::debug!("medium picked {} (rank {})", best_move, best_rank);
        Ok(best_move)
    }
}

/// Full minimax to the end of the game. Never loses.
#[derive(Debug, Clone, Copy, Default)]
pub struct HardAi;

impl Strategy for HardAi {
    fn name(&self) -> &'static str {
        "hard"
    }

    fn generate_move(&self, board: &Board, _rng: &mut SmallRng) -> Result<Move, GameError> {
        let sign = board.current_mark().sign();
        let child_maximizes = !board.x_to_move();

        let mut best: Option<(Move, i32)> = None;
        for mv in board.empty_cells() {
            let child = board.with_move(mv)?;
            let rank = sign * minimax(&child, SEARCH_DEPTH, child_maximizes)?;
            log::trace!("hard: {} ranks {}", mv, rank);
            if best.map_or(true, |(_, best_rank)| rank > best_rank) {
                best = Some((mv, rank));
            }
        }

        let (mv, rank) = best.ok_or(GameError::NoLegalMove)?;
        log::debug!("hard picked {} (rank {})", mv, rank);
        Ok(mv)
    }
}

/// Minimax value of `board` from X's point of view. `maximizing` is true
/// when X is to move. Finished positions and exhausted depth return the
/// static [`position_rank`].
pub fn minimax(board: &Board, depth: u32, maximizing: bool) -> Result<i32, GameError> {
    if depth == 0 || board.status().is_finished() {
        return Ok(position_rank(board));
    }

    let mut rank = if maximizing { i32::MIN } else { i32::MAX };
    for mv in board.empty_cells() {
        let child = board.with_move(mv)?;
        let value = minimax(&child, depth - 1, !maximizing)?;
        rank = if maximizing {
            rank.max(value)
        } else {
            rank.min(value)
        };
    }
    Ok(rank)
}
