//! Path tracing for sliding footprints.
//!
//! A footprint slides in a straight line. Each of its cells travels from its
//! source square to the matching destination square, and every square
//! strictly between the two must be empty. Destination squares themselves
//! are not checked: whatever is there gets overwritten.

use gess_core::{Cell, Direction, Footprint, Square};

use crate::Board;

/// Outcome of tracing one cell's path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trace {
    /// Every intermediate square is empty.
    Clear,
    /// The first non-empty intermediate square and what occupies it.
    Blocked(Square, Cell),
    /// The path left the grid without reaching the destination.
    OffGrid(Square),
}

impl Trace {
    #[inline]
    pub const fn is_clear(self) -> bool {
        matches!(self, Trace::Clear)
    }
}

/// Squares strictly between two points along one direction.
///
/// Yields nothing once the walk reaches the target or steps off the grid;
/// [`Between::reached`] tells the two apart.
#[derive(Debug, Clone)]
pub struct Between {
    next: Square,
    to: Square,
    step: (i32, i32),
}

impl Between {
    pub fn new(from: Square, to: Square, dir: Direction) -> Self {
        let step = dir.step();
        Between {
            next: from.offset(step.0, step.1),
            to,
            step,
        }
    }

    /// True once the walk has arrived at the target square.
    #[inline]
    pub fn reached(&self) -> bool {
        self.next == self.to
    }
}

impl Iterator for Between {
    type Item = Square;

    fn next(&mut self) -> Option<Square> {
        if self.next == self.to || !self.next.is_on_grid() {
            return None;
        }
        let sq = self.next;
        self.next = sq.offset(self.step.0, self.step.1);
        Some(sq)
    }
}

/// Walks from `from` toward `to` one step at a time in `dir` and reports
/// the first obstacle.
///
/// A walk that never lands on `to` (the two squares are not aligned along
/// `dir`) ends when it leaves the grid, so the trace always terminates.
pub fn trace(board: &Board, from: Square, to: Square, dir: Direction) -> Trace {
    let mut walk = Between::new(from, to, dir);
    for sq in walk.by_ref() {
        let cell = board.cell(sq);
        if !cell.is_empty() {
            return Trace::Blocked(sq, cell);
        }
    }
    if walk.reached() {
        Trace::Clear
    } else {
        Trace::OffGrid(walk.next)
    }
}

/// Returns true if nothing stands strictly between `from` and `to`.
#[inline]
pub fn path_is_clear(board: &Board, from: Square, to: Square, dir: Direction) -> bool {
    trace(board, from, to, dir).is_clear()
}

/// Traces every cell `dir` sweeps from the source footprint to the
/// destination footprint and returns the first trace that is not clear.
pub fn footprint_trace(board: &Board, from: &Footprint, to: &Footprint, dir: Direction) -> Trace {
    dir.swept_cells()
        .iter()
        .map(|&offset| trace(board, from.get(offset), to.get(offset), dir))
        .find(|t| !t.is_clear())
        .unwrap_or(Trace::Clear)
}

/// Returns true if every cell `dir` sweeps has a clear path.
#[inline]
pub fn footprint_path_is_clear(board: &Board, from: &Footprint, to: &Footprint, dir: Direction) -> bool {
    footprint_trace(board, from, to, dir).is_clear()
}
