//! Square tray holding placed pieces
//!
//! Cells are addressed `[x, y]` with the origin at the bottom left. The tray
//! is a value type: placing a piece produces a new tray and leaves the
//! original untouched, so sibling search branches never observe each other.

use std::fmt;

use ndarray::Array2;

use crate::io::configuration::EMPTY_CELL;
use crate::tour::piece::{Cell, Piece};

/// `size × size` grid of optional pieces
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Tray {
    cells: Array2<Option<Piece>>,
}

impl Tray {
    /// Create an empty tray with the given edge length
    pub fn new(size: usize) -> Self {
        Self {
            cells: Array2::from_elem((size, size), None),
        }
    }

    /// Edge length
    pub fn size(&self) -> usize {
        self.cells.nrows()
    }

    /// Number of cells
    pub fn area(&self) -> usize {
        self.cells.len()
    }

    /// Test if a cell lies on the tray
    pub fn contains(&self, cell: Cell) -> bool {
        cell[0] < self.size() && cell[1] < self.size()
    }

    /// Piece at `cell`, `None` for empty or off-tray cells
    pub fn get(&self, cell: Cell) -> Option<Piece> {
        self.cells.get((cell[0], cell[1])).copied().flatten()
    }

    /// Test if `cell` is on the tray and holds no piece
    pub fn is_vacant(&self, cell: Cell) -> bool {
        matches!(self.cells.get((cell[0], cell[1])), Some(None))
    }

    /// Copy of this tray with `piece` placed at `cell`
    ///
    /// Off-tray cells leave the copy unchanged.
    #[must_use]
    pub fn with_piece(&self, cell: Cell, piece: Piece) -> Self {
        let mut next = self.clone();
        if let Some(slot) = next.cells.get_mut((cell[0], cell[1])) {
            *slot = Some(piece);
        }
        next
    }

    /// Number of cells holding a piece
    pub fn occupied(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    /// Test if every cell holds a piece
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    /// All placed pieces with their cells, column by column
    pub fn pieces(&self) -> impl Iterator<Item = (Cell, Piece)> + '_ {
        self.cells
            .indexed_iter()
            .filter_map(|((x, y), piece)| piece.map(|piece| ([x, y], piece)))
    }
}

impl fmt::Display for Tray {
    /// Rows from the top (y = size - 1) down, columns left to right
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let size = self.size();
        for y in (0..size).rev() {
            for x in 0..size {
                match self.get([x, y]) {
                    Some(piece) => write!(f, "{piece} ")?,
                    None => write!(f, "{EMPTY_CELL} ")?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
