//! Gess rules engine.
//!
//! This crate provides:
//! - [`Board`] - the fixed 20x20 grid of stones (plus the label row)
//! - [`Position`] - a board together with the side to move
//! - [`Game`] - complete game management: turn order, resignation, and the
//!   win condition
//! - [`RuleSet`] - trait for the move legality pipeline, with
//!   [`StandardGess`] as the implementation of the standard rules
//! - Path tracing for sliding footprints and ring detection
//!
//! # Architecture
//!
//! A move names the center of a 3x3 footprint and where that center goes.
//! Legality is decided by a short-circuiting pipeline of checks; the last
//! one plays the move on a scratch copy of the board and rejects it if the
//! mover would be left without a ring. Only a move that passes every check
//! touches the real board.
//!
//! # Example
//!
//! ```
//! use gess_engine::{Game, GameState};
//!
//! let mut game = Game::new();
//! assert!(game.make_move("c2", "c3"));
//! assert!(!game.make_move("b5", "b6"));
//! assert_eq!(game.state(), GameState::Unfinished);
//!
//! game.resign();
//! assert_eq!(game.state(), GameState::BlackWon);
//! ```

mod board;
mod game;
pub mod path;
mod position;
pub mod ring;
pub mod rules;

pub use board::Board;
pub use game::{Game, GameError};
pub use path::{footprint_path_is_clear, footprint_trace, path_is_clear, trace, Between, Trace};
pub use position::Position;
pub use ring::{find_ring, has_ring, ring_owner, rings};
pub use rules::{GameState, IllegalMove, RuleSet, StandardGess};
