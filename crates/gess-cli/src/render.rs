//! Board printing with configurable glyphs.

use crate::config::DisplayConfig;
use gess_core::{Cell, FILES};
use gess_engine::Board;
use std::fmt::Write;

/// Renders `board` with file letters on top and rank numbers on the left.
pub fn render(board: &Board, display: &DisplayConfig) -> String {
    let mut out = String::from("   ");
    for col in 0..FILES {
        let _ = write!(out, " {}", (b'a' + col as u8) as char);
    }
    for (rank, row) in board.ranks() {
        let _ = write!(out, "\n{:>3}", rank);
        for &cell in row {
            let glyph = match cell {
                Cell::Empty => display.empty,
                Cell::Black => display.black,
                Cell::White => display.white,
            };
            let _ = write!(out, " {}", glyph);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_glyphs_match_board_display() {
        let board = Board::startpos();
        assert_eq!(
            render(&board, &DisplayConfig::default()),
            board.to_string().trim_end()
        );
    }

    #[test]
    fn custom_glyphs() {
        let display = DisplayConfig {
            black: 'X',
            white: 'O',
            empty: '-',
        };
        let text = render(&Board::startpos(), &display);
        let rank2 = text.lines().find(|l| l.trim_start().starts_with("2 ")).unwrap();
        assert!(rank2.contains('X'));
        assert!(!rank2.contains('O'));
        assert!(text.lines().skip(1).all(|l| !l.contains('b') && !l.contains('.')));
        assert_eq!(text.lines().count(), 21);
    }
}
