//! Full game management: turn order, resignation, and the win condition.
//!
//! The [`Game`] struct wraps a [`Position`] with the overall game state:
//! - Moves are validated by [`StandardGess`] before anything changes
//! - The turn passes only when a move is accepted
//! - A move that leaves the opponent without a ring wins the game
//! - Once the game is over no further moves are accepted

use crate::rules::{GameState, IllegalMove, RuleSet, StandardGess};
use crate::{Board, Position};
use gess_core::{Color, DiagramError, Move, NotationError};
use thiserror::Error;

/// Error type for game operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    /// The game has already ended.
    #[error("game has already ended")]
    GameAlreadyOver,

    /// A square could not be translated.
    #[error("invalid square: {0}")]
    Notation(#[from] NotationError),

    /// The move breaks a rule.
    #[error("illegal move: {0}")]
    Illegal(#[from] IllegalMove),
}

/// A complete Gess game.
///
/// Unlike [`Position`], which is a single board state, `Game` enforces the
/// game-over guard and tracks who has won.
#[derive(Debug, Clone)]
pub struct Game {
    /// Current position.
    position: Position,
    /// Overall state; leaves `Unfinished` at most once.
    state: GameState,
    /// Accepted moves so far.
    plies: usize,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    /// Creates a new game with the standard starting position, Black to move.
    pub fn new() -> Self {
        Game {
            position: StandardGess.initial_position(),
            state: GameState::Unfinished,
            plies: 0,
        }
    }

    /// Creates a game from a custom starting position.
    ///
    /// If either side already has no ring the game starts finished.
    pub fn from_position(position: Position) -> Self {
        let state = StandardGess.game_state(&position);
        Game {
            position,
            state,
            plies: 0,
        }
    }

    /// Creates a game from a board diagram.
    pub fn from_diagram(diagram: &str) -> Result<Self, DiagramError> {
        Ok(Self::from_position(Position::from_diagram(diagram)?))
    }

    /// Returns a reference to the current position.
    pub fn position(&self) -> &Position {
        &self.position
    }

    /// Read-only view of the board.
    pub fn board(&self) -> &Board {
        &self.position.board
    }

    /// Returns the player whose turn it is.
    pub fn side_to_move(&self) -> Color {
        self.position.side_to_move
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    /// Returns the winner if the game is over.
    pub fn result(&self) -> Option<Color> {
        self.state.winner()
    }

    /// Returns true if the game has ended.
    pub fn is_game_over(&self) -> bool {
        self.state.is_finished()
    }

    /// Returns the number of accepted moves.
    pub fn ply_count(&self) -> usize {
        self.plies
    }

    /// Attempts a move given as two squares, e.g. `make_move("c2", "c3")`.
    ///
    /// Returns true if the move was accepted and played. A rejected move,
    /// for whatever reason, leaves the game exactly as it was.
    pub fn make_move(&mut self, from: &str, to: &str) -> bool {
        self.play_notation(from, to).is_ok()
    }

    /// Like [`make_move`](Game::make_move), but reports why a move failed.
    pub fn play_notation(&mut self, from: &str, to: &str) -> Result<GameState, GameError> {
        if self.is_game_over() {
            return Err(GameError::GameAlreadyOver);
        }
        let m = Move::from_notation(from, to)?;
        self.play(m)
    }

    /// Plays a move, returning the game state after it.
    pub fn play(&mut self, m: Move) -> Result<GameState, GameError> {
        if self.is_game_over() {
            tracing::debug!(%m, "move rejected: game is over");
            return Err(GameError::GameAlreadyOver);
        }

        let mover = self.position.side_to_move;
        let next = StandardGess
            .try_make_move(&self.position, m)
            .map_err(|reason| {
                tracing::debug!(%m, %mover, %reason, "move rejected");
                reason
            })?;

        self.position = next;
        self.plies += 1;
        tracing::debug!(%m, %mover, ply = self.plies, "move played");

        if !StandardGess.has_ring(&self.position, mover.opposite()) {
            self.state = GameState::won_by(mover);
            tracing::info!(winner = %mover, state = %self.state, "game over: opponent has no ring");
        }

        Ok(self.state)
    }

    /// Resigns the game for the side to move; the opponent wins.
    ///
    /// Resigning a finished game changes nothing. The turn is not passed.
    pub fn resign(&mut self) -> GameState {
        if !self.is_game_over() {
            let loser = self.position.side_to_move;
            self.state = GameState::won_by(loser.opposite());
            tracing::info!(%loser, state = %self.state, "game over: resignation");
        }
        self.state
    }
}
