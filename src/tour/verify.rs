//! Independent check that a finished tray really is a closed tour
//!
//! Walks the piece pointers from the start cell instead of trusting the
//! search's own bookkeeping.

use bitvec::prelude::*;
use std::fmt;

use crate::tour::piece::{Cell, Piece};
use crate::tour::search::{Solution, TourConfig};

/// A violated tour property
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TourDefect {
    /// A cell holds no piece
    EmptyCell {
        /// The empty cell
        cell: Cell,
    },
    /// A piece points off the tray
    LeavesTray {
        /// Cell holding the piece
        cell: Cell,
        /// The offending piece
        piece: Piece,
    },
    /// The walk reached a cell for the second time before closing
    Revisited {
        /// Cell reached twice
        cell: Cell,
        /// Step at which it was reached again
        step: usize,
    },
    /// After visiting every cell the walk does not return to the start
    NotClosed {
        /// Cell the last piece points to
        end: Cell,
    },
    /// More pieces of a type were used than supplied
    OverSupply {
        /// The piece type
        hop: usize,
        /// Pieces of that type on the tray
        used: usize,
        /// Pieces of that type available
        allotment: usize,
    },
    /// Total pieces on the tray differs from the cell count
    WrongPieceCount {
        /// Pieces on the tray
        pieces: usize,
        /// Cells on the tray
        expected: usize,
    },
}

impl fmt::Display for TourDefect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyCell { cell } => write!(f, "cell ({}, {}) is empty", cell[0], cell[1]),
            Self::LeavesTray { cell, piece } => write!(
                f,
                "piece {piece} at ({}, {}) points off the tray",
                cell[0], cell[1]
            ),
            Self::Revisited { cell, step } => write!(
                f,
                "cell ({}, {}) visited again at step {step}",
                cell[0], cell[1]
            ),
            Self::NotClosed { end } => write!(
                f,
                "tour ends at ({}, {}) instead of the start",
                end[0], end[1]
            ),
            Self::OverSupply {
                hop,
                used,
                allotment,
            } => write!(f, "{used} pieces of type {hop} used, only {allotment} supplied"),
            Self::WrongPieceCount { pieces, expected } => {
                write!(f, "{pieces} pieces placed on a tray of {expected} cells")
            }
        }
    }
}

impl std::error::Error for TourDefect {}

/// Check every closed-tour property of a finished solution
///
/// # Errors
///
/// Returns the first [`TourDefect`] found
pub fn verify_tour(config: &TourConfig, solution: &Solution) -> Result<(), TourDefect> {
    let tray = solution.tray();
    let size = config.size();
    let area = config.area();

    let pieces = solution.pieces().len();
    if pieces != area || tray.occupied() != area {
        return Err(TourDefect::WrongPieceCount {
            pieces: tray.occupied().max(pieces),
            expected: area,
        });
    }

    let mut tally: Vec<(usize, usize)> = Vec::new();
    for (_, piece) in tray.pieces() {
        match tally.iter_mut().find(|(hop, _)| *hop == piece.hop) {
            Some((_, used)) => *used += 1,
            None => tally.push((piece.hop, 1)),
        }
    }
    for (hop, used) in tally {
        let allotment = config.supply().count_of(hop);
        if used > allotment {
            return Err(TourDefect::OverSupply {
                hop,
                used,
                allotment,
            });
        }
    }

    let mut visited = bitvec![0; area];
    let mut cell = config.start();
    for step in 0..area {
        let index = cell[1] * size + cell[0];
        if visited.get(index).as_deref() == Some(&true) {
            return Err(TourDefect::Revisited { cell, step });
        }
        visited.set(index, true);

        let piece = tray.get(cell).ok_or(TourDefect::EmptyCell { cell })?;
        cell = piece
            .target(cell, size)
            .ok_or(TourDefect::LeavesTray { cell, piece })?;
    }

    if cell == config.start() {
        Ok(())
    } else {
        Err(TourDefect::NotClosed { end: cell })
    }
}
