//! Gess position representation.

use gess_core::{Color, Diagram, DiagramError};
use serde::Serialize;

use crate::Board;

/// A board together with the side to move.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Position {
    pub board: Board,

    /// The side to move.
    pub side_to_move: Color,
}

impl Position {
    /// Creates a position with no stones, Black to move.
    pub fn empty() -> Self {
        Position {
            board: Board::empty(),
            side_to_move: Color::Black,
        }
    }

    /// Creates the standard starting position.
    pub fn startpos() -> Self {
        Self::from_diagram(Diagram::STARTPOS).expect("STARTPOS is valid")
    }

    /// Creates a position from a diagram string.
    pub fn from_diagram(diagram: &str) -> Result<Self, DiagramError> {
        let parsed = Diagram::parse(diagram)?;
        Ok(Position {
            board: Board::from_diagram(&parsed),
            side_to_move: parsed.side_to_move,
        })
    }

    /// Converts the position to a diagram string.
    pub fn to_diagram(&self) -> String {
        self.board.to_diagram(self.side_to_move).to_text()
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::startpos()
    }
}
