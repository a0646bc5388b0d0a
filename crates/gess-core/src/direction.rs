//! Slide directions and the footprint cells each one sweeps.

use crate::Offset;

/// One of the eight directions a footprint can slide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    N,
    S,
    E,
    W,
    NE,
    NW,
    SE,
    SW,
}

impl Direction {
    pub const ALL: [Direction; 8] = [
        Direction::N,
        Direction::S,
        Direction::E,
        Direction::W,
        Direction::NE,
        Direction::NW,
        Direction::SE,
        Direction::SW,
    ];

    /// Picks the direction from the sign pattern of a move's deltas.
    ///
    /// Only the signs matter here: `(3, 1)` maps to `NE` just like `(1, 1)`.
    /// Returns `None` for a zero displacement.
    pub const fn from_delta(dr: i32, dc: i32) -> Option<Self> {
        match (dr.signum(), dc.signum()) {
            (1, 0) => Some(Direction::N),
            (-1, 0) => Some(Direction::S),
            (0, 1) => Some(Direction::E),
            (0, -1) => Some(Direction::W),
            (1, 1) => Some(Direction::NE),
            (1, -1) => Some(Direction::NW),
            (-1, 1) => Some(Direction::SE),
            (-1, -1) => Some(Direction::SW),
            _ => None,
        }
    }

    /// Unit step as (row, col).
    #[inline]
    pub const fn step(self) -> (i32, i32) {
        self.leading_cell().delta()
    }

    #[inline]
    pub const fn is_diagonal(self) -> bool {
        matches!(
            self,
            Direction::NE | Direction::NW | Direction::SE | Direction::SW
        )
    }

    /// The footprint cell that must hold the mover's stone for the group
    /// to travel this way.
    pub const fn leading_cell(self) -> Offset {
        match self {
            Direction::N => Offset::N,
            Direction::S => Offset::S,
            Direction::E => Offset::E,
            Direction::W => Offset::W,
            Direction::NE => Offset::NE,
            Direction::NW => Offset::NW,
            Direction::SE => Offset::SE,
            Direction::SW => Offset::SW,
        }
    }

    /// The footprint cells whose paths must be clear for a slide this way:
    /// the leading edge, plus for diagonals the two edges meeting at the
    /// leading corner.
    pub const fn swept_cells(self) -> &'static [Offset] {
        match self {
            Direction::N => &[Offset::N, Offset::NE, Offset::NW],
            Direction::S => &[Offset::S, Offset::SE, Offset::SW],
            Direction::E => &[Offset::E, Offset::NE, Offset::SE],
            Direction::W => &[Offset::W, Offset::NW, Offset::SW],
            Direction::NE => &[Offset::NW, Offset::N, Offset::NE, Offset::E, Offset::SE],
            Direction::NW => &[Offset::NW, Offset::N, Offset::NE, Offset::W, Offset::SW],
            Direction::SE => &[Offset::SE, Offset::S, Offset::SW, Offset::E, Offset::NE],
            Direction::SW => &[Offset::SE, Offset::S, Offset::SW, Offset::W, Offset::NW],
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Direction::N => "north",
            Direction::S => "south",
            Direction::E => "east",
            Direction::W => "west",
            Direction::NE => "northeast",
            Direction::NW => "northwest",
            Direction::SE => "southeast",
            Direction::SW => "southwest",
        };
        write!(f, "{}", name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_delta_signs() {
        assert_eq!(Direction::from_delta(3, 0), Some(Direction::N));
        assert_eq!(Direction::from_delta(-1, 0), Some(Direction::S));
        assert_eq!(Direction::from_delta(0, 2), Some(Direction::E));
        assert_eq!(Direction::from_delta(0, -5), Some(Direction::W));
        assert_eq!(Direction::from_delta(2, 2), Some(Direction::NE));
        assert_eq!(Direction::from_delta(2, -2), Some(Direction::NW));
        assert_eq!(Direction::from_delta(-3, 3), Some(Direction::SE));
        assert_eq!(Direction::from_delta(-1, -1), Some(Direction::SW));
        assert_eq!(Direction::from_delta(0, 0), None);
    }

    #[test]
    fn oblique_delta_uses_sign_pattern() {
        assert_eq!(Direction::from_delta(3, 1), Some(Direction::NE));
    }

    #[test]
    fn step_matches_from_delta() {
        for dir in Direction::ALL {
            let (dr, dc) = dir.step();
            assert_eq!(Direction::from_delta(dr, dc), Some(dir));
        }
    }

    #[test]
    fn straight_sweeps_mirror_each_other() {
        assert_eq!(Direction::E.swept_cells(), &[Offset::E, Offset::NE, Offset::SE]);
        assert_eq!(Direction::W.swept_cells(), &[Offset::W, Offset::NW, Offset::SW]);
        assert_eq!(Direction::N.swept_cells(), &[Offset::N, Offset::NE, Offset::NW]);
        assert_eq!(Direction::S.swept_cells(), &[Offset::S, Offset::SE, Offset::SW]);
    }

    #[test]
    fn swept_cells_include_leading_cell() {
        for dir in Direction::ALL {
            let cells = dir.swept_cells();
            assert!(cells.contains(&dir.leading_cell()));
            assert_eq!(cells.len(), if dir.is_diagonal() { 5 } else { 3 });
            assert!(!cells.contains(&Offset::Center));
        }
    }
}
