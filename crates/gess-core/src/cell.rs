//! Grid cell contents.

use crate::Color;
use serde::{Deserialize, Serialize};

/// The content of one grid cell: empty or a stone of either color.
///
/// Stones carry no identity beyond their color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum Cell {
    #[default]
    Empty = 0,
    Black = 1,
    White = 2,
}

impl Cell {
    /// Returns the cell holding a stone of the given color.
    #[inline]
    pub const fn stone(color: Color) -> Self {
        match color {
            Color::Black => Cell::Black,
            Color::White => Cell::White,
        }
    }

    /// Returns the color of the stone in this cell, if any.
    #[inline]
    pub const fn color(self) -> Option<Color> {
        match self {
            Cell::Empty => None,
            Cell::Black => Some(Color::Black),
            Cell::White => Some(Color::White),
        }
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }

    /// Returns true if this cell holds a stone of the given color.
    #[inline]
    pub const fn is(self, color: Color) -> bool {
        matches!(
            (self, color),
            (Cell::Black, Color::Black) | (Cell::White, Color::White)
        )
    }

    /// Returns the diagram character for this cell.
    pub const fn to_char(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::Black => 'b',
            Cell::White => 'w',
        }
    }

    /// Parses a diagram character ('.', 'b' or 'w').
    pub const fn from_char(c: char) -> Option<Self> {
        match c {
            '.' => Some(Cell::Empty),
            'b' => Some(Cell::Black),
            'w' => Some(Cell::White),
            _ => None,
        }
    }
}

impl From<Color> for Cell {
    fn from(color: Color) -> Self {
        Cell::stone(color)
    }
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_char())
    }
}
