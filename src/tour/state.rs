//! Immutable search states and the placement legality rules

use std::fmt;

use crate::tour::piece::{Cell, Piece};
use crate::tour::search::TourConfig;
use crate::tour::tray::Tray;

/// Why a candidate piece cannot be placed at the cursor
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IllegalPlacement {
    /// Every piece of this type is already on the tray
    Exhausted {
        /// The requested piece type
        hop: usize,
    },
    /// The piece points off the tray
    OffTray {
        /// Cell the piece would be placed on
        cursor: Cell,
        /// The rejected piece
        piece: Piece,
    },
    /// The piece points at a cell that already holds a piece
    Occupied {
        /// The occupied target cell
        target: Cell,
    },
}

impl fmt::Display for IllegalPlacement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Exhausted { hop } => write!(f, "no pieces of type {hop} available"),
            Self::OffTray { cursor, piece } => write!(
                f,
                "piece {piece} at ({}, {}) points off the tray",
                cursor[0], cursor[1]
            ),
            Self::Occupied { target } => write!(
                f,
                "next location ({}, {}) is not empty",
                target[0], target[1]
            ),
        }
    }
}

impl std::error::Error for IllegalPlacement {}

/// Outcome of trying one piece: the extended state or the reason it was pruned
pub type Placement = Result<SearchState, IllegalPlacement>;

/// Partial tour: tray contents, cursor and per-type usage
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchState {
    tray: Tray,
    cursor: Cell,
    used: Vec<usize>,
    path: Vec<Piece>,
}

impl SearchState {
    /// Empty tray with the cursor on the configured start cell
    pub fn initial(config: &TourConfig) -> Self {
        Self {
            tray: Tray::new(config.size()),
            cursor: config.start(),
            used: vec![0; config.supply().len()],
            path: Vec::with_capacity(config.area()),
        }
    }

    /// Place `piece` on the cursor cell and advance the cursor to its target
    ///
    /// The target must be vacant. The single exception is the final piece,
    /// which may point back at the start cell to close the tour.
    ///
    /// # Errors
    ///
    /// Returns the [`IllegalPlacement`] that prunes this branch. `self` is
    /// never modified.
    pub fn place(&self, config: &TourConfig, piece: Piece) -> Placement {
        let slot = config
            .supply()
            .slot_of(piece.hop)
            .filter(|&slot| self.used_in_slot(slot) < config.supply().allotment(slot))
            .ok_or(IllegalPlacement::Exhausted { hop: piece.hop })?;

        let target = piece
            .target(self.cursor, config.size())
            .ok_or(IllegalPlacement::OffTray {
                cursor: self.cursor,
                piece,
            })?;

        let closes_tour = self.piece_count() + 1 == config.area() && target == config.start();
        if !self.tray.is_vacant(target) && !closes_tour {
            return Err(IllegalPlacement::Occupied { target });
        }

        let mut used = self.used.clone();
        if let Some(count) = used.get_mut(slot) {
            *count += 1;
        }
        let mut path = self.path.clone();
        path.push(piece);

        Ok(Self {
            tray: self.tray.with_piece(self.cursor, piece),
            cursor: target,
            used,
            path,
        })
    }

    /// Tray contents so far
    pub const fn tray(&self) -> &Tray {
        &self.tray
    }

    /// Cell the next piece goes on
    pub const fn cursor(&self) -> Cell {
        self.cursor
    }

    /// Number of pieces placed
    pub const fn piece_count(&self) -> usize {
        self.path.len()
    }

    /// Pieces used per supply slot, in ascending hop order
    pub fn used(&self) -> &[usize] {
        &self.used
    }

    /// Pieces used of the type at `slot`
    pub fn used_in_slot(&self, slot: usize) -> usize {
        self.used.get(slot).copied().unwrap_or(0)
    }

    /// Placed pieces in placement order
    pub fn pieces(&self) -> &[Piece] {
        &self.path
    }

    /// Placement order as tokens, each followed by a space
    pub fn path(&self) -> String {
        self.path.iter().map(|piece| format!("{piece} ")).collect()
    }

    /// Test if every cell of the tray has been filled
    pub const fn is_complete(&self, config: &TourConfig) -> bool {
        self.piece_count() >= config.area()
    }
}
