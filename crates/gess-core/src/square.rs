//! Grid coordinates and the letter+number square notation.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Number of files (columns), labelled `a` through `t`.
pub const FILES: usize = 20;

/// Number of playable ranks (rows 1 through 20). Row 0 is the label row.
pub const RANKS: usize = 20;

/// Errors that can occur when translating square notation.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum NotationError {
    #[error("empty square notation")]
    Empty,

    #[error("invalid file '{0}': expected a letter from 'a' to 't'")]
    InvalidFile(char),

    #[error("missing rank after file in '{0}'")]
    MissingRank(String),

    #[error("invalid rank '{0}'")]
    InvalidRank(String),

    #[error("invalid move '{0}': expected two squares such as 'c2-c3'")]
    InvalidMove(String),
}

/// A coordinate on the Gess grid.
///
/// `row` is the rank number (1 = bottom playable rank, 20 = top) and `col`
/// is the file index (`a` = 0 through `t` = 19). Coordinates are signed and
/// unchecked: a square may lie off the grid, which is how footprints near
/// the edge and out-of-range notation are represented. Callers bounds-check
/// before reading the board.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Square {
    pub row: i32,
    pub col: i32,
}

impl Square {
    /// Creates a square from a row (rank) and column (file index).
    #[inline]
    pub const fn new(row: i32, col: i32) -> Self {
        Square { row, col }
    }

    /// Translates notation such as `"c2"` or `"l18"` into a square.
    ///
    /// The file letter must be lowercase `a`-`t`. The rank is taken as-is,
    /// without range validation, so `"c25"` yields row 25; the rules decide
    /// whether such a square is usable.
    pub fn from_notation(s: &str) -> Result<Self, NotationError> {
        let mut chars = s.chars();
        let file = chars.next().ok_or(NotationError::Empty)?;
        if !('a'..='t').contains(&file) {
            return Err(NotationError::InvalidFile(file));
        }
        let rank = chars.as_str();
        if rank.is_empty() {
            return Err(NotationError::MissingRank(s.to_string()));
        }
        let row = rank
            .parse::<i32>()
            .map_err(|_| NotationError::InvalidRank(rank.to_string()))?;
        Ok(Square::new(row, file as i32 - 'a' as i32))
    }

    /// Returns the notation for this square, or `None` if the column has
    /// no file letter.
    pub fn to_notation(self) -> Option<String> {
        if !(0..FILES as i32).contains(&self.col) {
            return None;
        }
        let file = (b'a' + self.col as u8) as char;
        Some(format!("{}{}", file, self.row))
    }

    /// Returns the square shifted by the given row and column deltas.
    #[inline]
    pub const fn offset(self, dr: i32, dc: i32) -> Self {
        Square::new(self.row.saturating_add(dr), self.col.saturating_add(dc))
    }

    /// Returns true if the square is addressable on the grid, including the
    /// label row.
    #[inline]
    pub const fn is_on_grid(self) -> bool {
        self.row >= 0 && self.row <= RANKS as i32 && self.col >= 0 && self.col < FILES as i32
    }

    /// Returns true if the square is on the outer playable border: rank 1,
    /// rank 20, file `a` or file `t`. Stones never survive on the border.
    #[inline]
    pub const fn is_on_border(self) -> bool {
        self.row == 1 || self.row == RANKS as i32 || self.col == 0 || self.col == FILES as i32 - 1
    }

    /// Returns true if a footprint centered here fits inside the playable
    /// ranks and files (row 2..=19, col 1..=18).
    #[inline]
    pub const fn is_valid_center(self) -> bool {
        self.row >= 2 && self.row <= 19 && self.col >= 1 && self.col <= 18
    }

    /// Returns true if the square is scanned as a possible ring center
    /// (row 3..=18, col 2..=17).
    #[inline]
    pub const fn is_ring_candidate(self) -> bool {
        self.row >= 3 && self.row <= 18 && self.col >= 2 && self.col <= 17
    }
}

impl fmt::Debug for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.to_notation() {
            Some(n) => write!(f, "Square({})", n),
            None => write!(f, "Square({}, {})", self.row, self.col),
        }
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.to_notation() {
            Some(n) => write!(f, "{}", n),
            None => write!(f, "({}, {})", self.row, self.col),
        }
    }
}
