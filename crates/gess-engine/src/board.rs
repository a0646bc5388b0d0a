//! Grid storage and the move applicator.

use gess_core::{Cell, Color, Diagram, Footprint, Square, FILES, RANKS};
use serde::Serialize;
use std::fmt;

/// The Gess grid: rows 0 through 20 by columns 0 through 19.
///
/// Row 0 is the label row and never holds stones; ranks 1-20 are playable.
/// Every cell always holds exactly one [`Cell`] value and the grid never
/// resizes. Cloning is the way to get a scratch copy for simulation.
#[derive(Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Board {
    cells: [[Cell; FILES]; RANKS + 1],
}

impl Board {
    /// Creates a board with no stones.
    pub const fn empty() -> Self {
        Board {
            cells: [[Cell::Empty; FILES]; RANKS + 1],
        }
    }

    /// Creates the standard starting layout.
    pub fn startpos() -> Self {
        let diagram = Diagram::parse(Diagram::STARTPOS).expect("STARTPOS is valid");
        Self::from_diagram(&diagram)
    }

    /// Creates a board from parsed diagram cells.
    pub fn from_diagram(diagram: &Diagram) -> Self {
        let mut board = Board::empty();
        for rank in 1..=RANKS {
            for file in 0..FILES {
                if let Some(cell) = diagram.cell(rank, file) {
                    board.cells[rank][file] = cell;
                }
            }
        }
        board
    }

    /// Returns the cell at the square, or `None` if it is off the grid.
    #[inline]
    pub fn get(&self, sq: Square) -> Option<Cell> {
        if sq.is_on_grid() {
            Some(self.cells[sq.row as usize][sq.col as usize])
        } else {
            None
        }
    }

    /// Returns the cell at the square, treating off-grid squares as empty.
    #[inline]
    pub fn cell(&self, sq: Square) -> Cell {
        self.get(sq).unwrap_or(Cell::Empty)
    }

    /// Writes a cell. Returns false, leaving the board untouched, if the
    /// square is off the grid.
    #[inline]
    pub fn set(&mut self, sq: Square, cell: Cell) -> bool {
        if !sq.is_on_grid() {
            return false;
        }
        self.cells[sq.row as usize][sq.col as usize] = cell;
        true
    }

    /// Counts the cells holding the given value on the playable ranks.
    pub fn count(&self, cell: Cell) -> usize {
        self.ranks()
            .flat_map(|(_, row)| row.iter())
            .filter(|&&c| c == cell)
            .count()
    }

    /// Counts the stones of one color.
    pub fn stones(&self, color: Color) -> usize {
        self.count(Cell::stone(color))
    }

    /// Iterates over the playable ranks from rank 20 down to rank 1.
    pub fn ranks(&self) -> impl Iterator<Item = (usize, &[Cell; FILES])> + '_ {
        (1..=RANKS).rev().map(move |rank| (rank, &self.cells[rank]))
    }

    /// Moves the contents of one footprint onto another.
    ///
    /// All nine source cells are recorded and cleared first, then each
    /// destination cell receives the content from the same footprint
    /// position. Destination cells on the border are always left empty.
    pub fn apply(&mut self, from: &Footprint, to: &Footprint) {
        let carried = from.squares().map(|sq| {
            let cell = self.cell(sq);
            self.set(sq, Cell::Empty);
            cell
        });
        for (sq, cell) in to.iter().zip(carried) {
            let cell = if sq.is_on_border() { Cell::Empty } else { cell };
            self.set(sq, cell);
        }
    }

    /// Converts the board into diagram cells.
    pub fn to_diagram(&self, side_to_move: Color) -> Diagram {
        Diagram {
            cells: (1..=RANKS).map(|rank| self.cells[rank].to_vec()).collect(),
            side_to_move,
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::startpos()
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f)?;
        fmt::Display::fmt(self, f)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "   ")?;
        for col in 0..FILES {
            write!(f, " {}", (b'a' + col as u8) as char)?;
        }
        writeln!(f)?;
        for (rank, row) in self.ranks() {
            write!(f, "{:>3}", rank)?;
            for cell in row {
                write!(f, " {}", cell.to_char())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
