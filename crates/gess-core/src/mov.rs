//! Move representation.

use crate::{Direction, NotationError, Square};
use std::fmt;

/// A Gess move: the center of the group to pick up and the center where it
/// is set down.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub from: Square,
    pub to: Square,
}

impl Move {
    #[inline]
    pub const fn new(from: Square, to: Square) -> Self {
        Move { from, to }
    }

    /// Builds a move from two square notations, e.g. `("c2", "c3")`.
    pub fn from_notation(from: &str, to: &str) -> Result<Self, NotationError> {
        Ok(Move::new(
            Square::from_notation(from)?,
            Square::from_notation(to)?,
        ))
    }

    /// Parses a move written as `"c2-c3"` or `"c2 c3"`.
    pub fn parse(s: &str) -> Result<Self, NotationError> {
        let parts: Vec<&str> = s
            .split(|c: char| c == '-' || c.is_whitespace())
            .filter(|p| !p.is_empty())
            .collect();
        match parts.as_slice() {
            [from, to] => Self::from_notation(from, to),
            _ => Err(NotationError::InvalidMove(s.to_string())),
        }
    }

    /// Returns the (row, col) displacement of the center.
    #[inline]
    pub const fn delta(self) -> (i32, i32) {
        (
            self.to.row.saturating_sub(self.from.row),
            self.to.col.saturating_sub(self.from.col),
        )
    }

    /// Returns the direction given by the sign pattern of the delta, or
    /// `None` if the center does not move.
    #[inline]
    pub const fn direction(self) -> Option<Direction> {
        let (dr, dc) = self.delta();
        Direction::from_delta(dr, dc)
    }

    /// Returns the number of steps the center travels: the larger of the
    /// absolute row and column deltas.
    #[inline]
    pub const fn distance(self) -> u32 {
        let (dr, dc) = self.delta();
        let (dr, dc) = (dr.unsigned_abs(), dc.unsigned_abs());
        if dr > dc {
            dr
        } else {
            dc
        }
    }
}

impl fmt::Debug for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Move({}-{})", self.from, self.to)
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.from, self.to)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_dash_and_space() {
        let expected = Move::new(Square::new(2, 2), Square::new(3, 2));
        assert_eq!(Move::parse("c2-c3"), Ok(expected));
        assert_eq!(Move::parse("c2 c3"), Ok(expected));
        assert_eq!(Move::parse("  c2   c3 "), Ok(expected));
    }

    #[test]
    fn parse_rejects_wrong_arity() {
        assert!(matches!(Move::parse("c2"), Err(NotationError::InvalidMove(_))));
        assert!(matches!(
            Move::parse("c2-c3-c4"),
            Err(NotationError::InvalidMove(_))
        ));
    }

    #[test]
    fn parse_propagates_square_errors() {
        assert_eq!(Move::parse("z2-c3"), Err(NotationError::InvalidFile('z')));
    }

    #[test]
    fn delta_and_direction() {
        let m = Move::from_notation("l18", "l15").unwrap();
        assert_eq!(m.delta(), (-3, 0));
        assert_eq!(m.direction(), Some(Direction::S));
        assert_eq!(m.distance(), 3);

        let m = Move::from_notation("s15", "p12").unwrap();
        assert_eq!(m.delta(), (-3, -3));
        assert_eq!(m.direction(), Some(Direction::SW));

        let m = Move::from_notation("c5", "c5").unwrap();
        assert_eq!(m.direction(), None);
        assert_eq!(m.distance(), 0);
    }

    #[test]
    fn display() {
        let m = Move::from_notation("c2", "c3").unwrap();
        assert_eq!(m.to_string(), "c2-c3");
        assert_eq!(format!("{:?}", m), "Move(c2-c3)");
    }
}
