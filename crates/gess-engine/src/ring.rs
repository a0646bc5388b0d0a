//! Ring detection.
//!
//! A ring is an empty square whose eight neighbors all hold stones of the
//! same color. A player with no ring on the board has lost.

use gess_core::{Cell, Color, Footprint, Offset, Square};

use crate::Board;

/// First and last rows scanned for ring centers.
const RING_ROWS: std::ops::RangeInclusive<i32> = 3..=18;

/// First and last columns scanned for ring centers.
const RING_COLS: std::ops::RangeInclusive<i32> = 2..=17;

/// Returns the color owning a ring centered on `center`, if there is one.
pub fn ring_owner(board: &Board, center: Square) -> Option<Color> {
    if board.get(center) != Some(Cell::Empty) {
        return None;
    }
    let fp = Footprint::around(center);
    let mut neighbors = Offset::NEIGHBORS.iter().map(|&o| board.cell(fp.get(o)));
    let owner = neighbors.next()?.color()?;
    neighbors.all(|c| c.is(owner)).then_some(owner)
}

/// Iterates over the ring candidates in scan order: rows 3-18, columns 2-17.
fn candidates() -> impl Iterator<Item = Square> {
    RING_ROWS.flat_map(|row| RING_COLS.map(move |col| Square::new(row, col)))
}

/// Returns the first ring of `color` in scan order.
pub fn find_ring(board: &Board, color: Color) -> Option<Square> {
    candidates().find(|&sq| ring_owner(board, sq) == Some(color))
}

/// Returns true if `color` has at least one ring.
#[inline]
pub fn has_ring(board: &Board, color: Color) -> bool {
    find_ring(board, color).is_some()
}

/// Returns every ring center of `color`.
pub fn rings(board: &Board, color: Color) -> Vec<Square> {
    candidates()
        .filter(|&sq| ring_owner(board, sq) == Some(color))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(s: &str) -> Square {
        Square::from_notation(s).unwrap()
    }

    fn ring_at(center: Square, color: Color) -> Board {
        let mut board = Board::empty();
        let fp = Footprint::around(center);
        for &o in &Offset::NEIGHBORS {
            board.set(fp.get(o), Cell::stone(color));
        }
        board
    }

    #[test]
    fn startpos_rings() {
        let board = Board::startpos();
        assert_eq!(rings(&board, Color::Black), vec![sq("l3")]);
        assert_eq!(rings(&board, Color::White), vec![sq("l18")]);
        assert!(has_ring(&board, Color::Black));
        assert!(has_ring(&board, Color::White));
    }

    #[test]
    fn empty_board_has_no_rings() {
        let board = Board::empty();
        assert!(!has_ring(&board, Color::Black));
        assert!(!has_ring(&board, Color::White));
    }

    #[test]
    fn hand_placed_ring() {
        let board = ring_at(sq("j10"), Color::White);
        assert_eq!(find_ring(&board, Color::White), Some(sq("j10")));
        assert_eq!(find_ring(&board, Color::Black), None);
        assert_eq!(ring_owner(&board, sq("j10")), Some(Color::White));
    }

    #[test]
    fn filled_center_is_not_a_ring() {
        let mut board = ring_at(sq("j10"), Color::Black);
        board.set(sq("j10"), Cell::Black);
        assert!(!has_ring(&board, Color::Black));
    }

    #[test]
    fn any_changed_neighbor_breaks_the_ring() {
        let center = sq("f7");
        let fp = Footprint::around(center);
        for &o in &Offset::NEIGHBORS {
            for replacement in [Cell::Empty, Cell::White] {
                let mut board = ring_at(center, Color::Black);
                board.set(fp.get(o), replacement);
                assert!(!has_ring(&board, Color::Black), "{:?} -> {}", o, replacement);
            }
        }
    }

    #[test]
    fn rings_outside_scan_window_are_ignored() {
        // centers on rank 2 or file b are never scanned
        assert!(!has_ring(&ring_at(sq("e2"), Color::Black), Color::Black));
        assert!(!has_ring(&ring_at(sq("b10"), Color::White), Color::White));
        assert!(!has_ring(&ring_at(sq("s10"), Color::White), Color::White));
        assert!(has_ring(&ring_at(sq("c3"), Color::Black), Color::Black));
        assert!(has_ring(&ring_at(sq("r18"), Color::White), Color::White));
    }

    #[test]
    fn find_ring_returns_first_in_scan_order() {
        let mut board = ring_at(sq("m15"), Color::White);
        let fp = Footprint::around(sq("e5"));
        for &o in &Offset::NEIGHBORS {
            board.set(fp.get(o), Cell::White);
        }
        assert_eq!(find_ring(&board, Color::White), Some(sq("e5")));
        assert_eq!(rings(&board, Color::White), vec![sq("e5"), sq("m15")]);
    }
}
