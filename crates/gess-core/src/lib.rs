//! Core types for Gess.
//!
//! This crate provides the fundamental types used across the rules engine:
//! - [`Color`] and [`Cell`] for stone representation
//! - [`Square`] for grid coordinates, including the letter+number notation
//! - [`Footprint`] and [`Offset`] for the 3x3 group a move picks up
//! - [`Direction`] for the eight directions a group can slide
//! - [`Move`] for move representation
//! - Board diagram parsing and validation

mod cell;
mod color;
mod diagram;
mod direction;
mod footprint;
mod mov;
mod square;

pub use cell::Cell;
pub use color::Color;
pub use diagram::{Diagram, DiagramError};
pub use direction::Direction;
pub use footprint::{Footprint, Offset};
pub use mov::Move;
pub use square::{NotationError, Square, FILES, RANKS};
