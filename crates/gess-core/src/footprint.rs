//! The 3x3 group of cells a move picks up and sets down.

use crate::Square;

/// A position within a footprint, relative to its center.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Offset {
    Center = 0,
    N = 1,
    S = 2,
    E = 3,
    W = 4,
    NE = 5,
    NW = 6,
    SE = 7,
    SW = 8,
}

impl Offset {
    /// All offsets in footprint order: center, N, S, E, W, NE, NW, SE, SW.
    pub const ALL: [Offset; 9] = [
        Offset::Center,
        Offset::N,
        Offset::S,
        Offset::E,
        Offset::W,
        Offset::NE,
        Offset::NW,
        Offset::SE,
        Offset::SW,
    ];

    /// The eight neighbors, without the center.
    pub const NEIGHBORS: [Offset; 8] = [
        Offset::N,
        Offset::S,
        Offset::E,
        Offset::W,
        Offset::NE,
        Offset::NW,
        Offset::SE,
        Offset::SW,
    ];

    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Returns the (row, col) displacement from the center. North is
    /// increasing row, east is increasing column.
    #[inline]
    pub const fn delta(self) -> (i32, i32) {
        match self {
            Offset::Center => (0, 0),
            Offset::N => (1, 0),
            Offset::S => (-1, 0),
            Offset::E => (0, 1),
            Offset::W => (0, -1),
            Offset::NE => (1, 1),
            Offset::NW => (1, -1),
            Offset::SE => (-1, 1),
            Offset::SW => (-1, -1),
        }
    }
}

/// The nine squares of a 3x3 group around a center.
///
/// No bounds checking is done: squares may lie off the grid when the center
/// is near an edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Footprint {
    squares: [Square; 9],
}

impl Footprint {
    /// Builds the footprint centered on `center`.
    pub fn around(center: Square) -> Self {
        Footprint {
            squares: Offset::ALL.map(|o| {
                let (dr, dc) = o.delta();
                center.offset(dr, dc)
            }),
        }
    }

    #[inline]
    pub const fn center(&self) -> Square {
        self.squares[Offset::Center as usize]
    }

    /// Returns the square at the given offset.
    #[inline]
    pub const fn get(&self, offset: Offset) -> Square {
        self.squares[offset.index()]
    }

    /// Iterates over the squares in footprint order.
    pub fn iter(&self) -> impl Iterator<Item = Square> + '_ {
        self.squares.iter().copied()
    }

    /// Returns the footprint squares as an ordered array.
    #[inline]
    pub const fn squares(&self) -> [Square; 9] {
        self.squares
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn footprint_order() {
        let fp = Footprint::around(Square::new(5, 5));
        assert_eq!(
            fp.squares(),
            [
                Square::new(5, 5),
                Square::new(6, 5),
                Square::new(4, 5),
                Square::new(5, 6),
                Square::new(5, 4),
                Square::new(6, 6),
                Square::new(6, 4),
                Square::new(4, 6),
                Square::new(4, 4),
            ]
        );
    }

    #[test]
    fn named_access_matches_order() {
        let fp = Footprint::around(Square::new(10, 3));
        for (i, (offset, sq)) in Offset::ALL.into_iter().zip(fp.iter()).enumerate() {
            assert_eq!(offset.index(), i);
            assert_eq!(fp.get(offset), sq);
        }
        assert_eq!(fp.center(), Square::new(10, 3));
    }

    #[test]
    fn edge_footprint_leaves_grid() {
        let fp = Footprint::around(Square::new(1, 0));
        assert_eq!(fp.get(Offset::SW), Square::new(0, -1));
        assert!(!fp.get(Offset::W).is_on_grid());
    }

    #[test]
    fn neighbors_exclude_center() {
        assert_eq!(Offset::NEIGHBORS.len(), 8);
        assert!(!Offset::NEIGHBORS.contains(&Offset::Center));
    }
}
