//! Board diagram parsing and validation.
//!
//! A diagram lists the twenty playable ranks from rank 20 down to rank 1,
//! separated by `/`, each rank being exactly twenty cell characters (`.`
//! empty, `b` black, `w` white) for files `a` through `t`. A space and the
//! side to move (`b` or `w`) follow.

use crate::square::{FILES, RANKS};
use crate::{Cell, Color};
use thiserror::Error;

/// Errors that can occur when parsing board diagrams.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DiagramError {
    #[error("invalid diagram: expected 2 parts, got {0}")]
    InvalidPartCount(usize),

    #[error("invalid diagram: expected 20 ranks, got {0}")]
    InvalidRankCount(usize),

    #[error("rank {rank} has {len} cells, expected 20")]
    InvalidRankLength { rank: usize, len: usize },

    #[error("invalid character '{ch}' in rank {rank}")]
    InvalidCell { rank: usize, ch: char },

    #[error("invalid side to move: expected 'b' or 'w', got '{0}'")]
    InvalidSideToMove(String),
}

/// Parsed diagram data.
///
/// Holds validated cells by rank; the engine turns this into its board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagram {
    /// Cells indexed `[rank - 1][file]`, so `cells[0]` is rank 1.
    pub cells: Vec<Vec<Cell>>,
    pub side_to_move: Color,
}

impl Diagram {
    /// The standard starting position, Black to move.
    pub const STARTPOS: &'static str = concat!(
        "..................../",
        "..w.w.wwwwwwww.w.w../",
        ".www.w.wwww.w.w.www./",
        "..w.w.wwwwwwww.w.w../",
        "..................../",
        "..................../",
        "..w..w..w..w..w..w../",
        "..................../",
        "..................../",
        "..................../",
        "..................../",
        "..................../",
        "..................../",
        "..b..b..b..b..b..b../",
        "..................../",
        "..................../",
        "..b.b.bbbbbbbb.b.b../",
        ".bbb.b.bbbb.b.b.bbb./",
        "..b.b.bbbbbbbb.b.b../",
        ".................... b",
    );

    /// Parses a diagram string.
    pub fn parse(diagram: &str) -> Result<Self, DiagramError> {
        let parts: Vec<&str> = diagram.split_whitespace().collect();
        if parts.len() != 2 {
            return Err(DiagramError::InvalidPartCount(parts.len()));
        }

        let ranks: Vec<&str> = parts[0].split('/').collect();
        if ranks.len() != RANKS {
            return Err(DiagramError::InvalidRankCount(ranks.len()));
        }

        let mut cells = vec![Vec::with_capacity(FILES); RANKS];
        for (i, text) in ranks.iter().enumerate() {
            let rank = RANKS - i;
            let len = text.chars().count();
            if len != FILES {
                return Err(DiagramError::InvalidRankLength { rank, len });
            }
            for ch in text.chars() {
                let cell = Cell::from_char(ch).ok_or(DiagramError::InvalidCell { rank, ch })?;
                cells[rank - 1].push(cell);
            }
        }

        let side_to_move = match parts[1] {
            "b" => Color::Black,
            "w" => Color::White,
            other => return Err(DiagramError::InvalidSideToMove(other.to_string())),
        };

        Ok(Diagram {
            cells,
            side_to_move,
        })
    }

    /// Returns the cell at `rank` (1-20) and `file` (0-19), or `None` if
    /// out of range.
    pub fn cell(&self, rank: usize, file: usize) -> Option<Cell> {
        self.cells.get(rank.checked_sub(1)?)?.get(file).copied()
    }

    /// Serializes back to diagram text.
    pub fn to_text(&self) -> String {
        let ranks: Vec<String> = self
            .cells
            .iter()
            .rev()
            .map(|rank| rank.iter().map(|c| c.to_char()).collect())
            .collect();
        format!("{} {}", ranks.join("/"), self.side_to_move.to_char())
    }
}
