//! Rule set abstraction for Gess.
//!
//! This module provides the [`RuleSet`] trait, which holds everything that
//! decides whether a move may be played and what it does to the position.
//! The [`Game`](crate::Game) struct delegates to it and only adds turn and
//! outcome bookkeeping.

mod standard;

pub use standard::StandardGess;

use crate::Position;
use gess_core::{Color, Direction, Move, Square};
use serde::Serialize;
use thiserror::Error;

/// Overall state of a game.
///
/// Moves from `Unfinished` to one of the terminal states exactly once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GameState {
    Unfinished,
    WhiteWon,
    BlackWon,
}

impl GameState {
    /// The terminal state in which `color` has won.
    #[inline]
    pub const fn won_by(color: Color) -> Self {
        match color {
            Color::White => GameState::WhiteWon,
            Color::Black => GameState::BlackWon,
        }
    }

    /// Returns the winner, if the game is over.
    #[inline]
    pub const fn winner(self) -> Option<Color> {
        match self {
            GameState::Unfinished => None,
            GameState::WhiteWon => Some(Color::White),
            GameState::BlackWon => Some(Color::Black),
        }
    }

    #[inline]
    pub const fn is_finished(self) -> bool {
        !matches!(self, GameState::Unfinished)
    }
}

impl std::fmt::Display for GameState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            GameState::Unfinished => "UNFINISHED",
            GameState::WhiteWon => "WHITE_WON",
            GameState::BlackWon => "BLACK_WON",
        };
        write!(f, "{}", label)
    }
}

/// Why a move was rejected.
///
/// Variants are listed in the order the checks run; the first failing
/// check decides the reason.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum IllegalMove {
    #[error("source center {0} is too close to the edge")]
    OffBoardSource(Square),

    #[error("source footprint contains an opponent stone at {0}")]
    EnemyStoneInSource(Square),

    #[error("source footprint holds none of your stones")]
    EmptySource,

    #[error("destination center {0} is too close to the edge")]
    OffBoardDestination(Square),

    #[error("a group without a center stone may move at most 3 squares")]
    TooFarWithoutCenter,

    #[error("the group must move")]
    NullMove,

    #[error("diagonal moves must change rank and file by the same amount")]
    ObliqueMove,

    #[error("moving {0} needs a stone on the {0} edge of the group")]
    MissingLeadingStone(Direction),

    #[error("path is blocked at {0}")]
    PathBlocked(Square),

    #[error("move would leave you without a ring")]
    Suicide,
}

/// Trait for the Gess rules.
///
/// # Example
///
/// ```
/// use gess_core::Move;
/// use gess_engine::{RuleSet, StandardGess};
///
/// let position = StandardGess.initial_position();
/// let m = Move::from_notation("c2", "c3").unwrap();
/// assert!(StandardGess.is_legal(&position, m));
/// ```
pub trait RuleSet {
    /// Returns the initial position for this rule set.
    fn initial_position(&self) -> Position;

    /// Runs the legality pipeline for the side to move. Does not modify
    /// the position.
    fn check_move(&self, position: &Position, m: Move) -> Result<(), IllegalMove>;

    /// Returns true if the given move is legal in the position.
    fn is_legal(&self, position: &Position, m: Move) -> bool {
        self.check_move(position, m).is_ok()
    }

    /// Makes a move on the position, returning the new position with the
    /// other side to move.
    ///
    /// No legality checks are run. Use [`check_move`](RuleSet::check_move)
    /// first, or use [`try_make_move`](RuleSet::try_make_move).
    fn make_move(&self, position: &Position, m: Move) -> Position;

    /// Makes a move if it is legal.
    fn try_make_move(&self, position: &Position, m: Move) -> Result<Position, IllegalMove> {
        self.check_move(position, m)?;
        Ok(self.make_move(position, m))
    }

    /// Returns true if `color` has at least one ring on the board.
    fn has_ring(&self, position: &Position, color: Color) -> bool;

    /// Returns the game state implied by the position alone.
    ///
    /// A side without a ring has lost. If neither side has one, the side to
    /// move is the loser.
    fn game_state(&self, position: &Position) -> GameState {
        let us = position.side_to_move;
        if !self.has_ring(position, us) {
            GameState::won_by(us.opposite())
        } else if !self.has_ring(position, us.opposite()) {
            GameState::won_by(us)
        } else {
            GameState::Unfinished
        }
    }
}
