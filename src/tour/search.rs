//! Depth-first enumeration of closed tours
//!
//! Every candidate `(type, direction)` pair is tried at the cursor in a fixed
//! order: types ascending, then North, South, East, West. A legal placement
//! yields a fresh [`SearchState`] which is explored recursively; an illegal
//! one is counted and dropped. Completed states are handed to the caller as
//! they are found, so the search itself keeps no solution list. The caller
//! may break out of the enumeration from any solution.

use std::ops::ControlFlow;

use crate::io::configuration::{DEFAULT_START, DEFAULT_TRAY_SIZE, MAX_TRAY_SIZE};
use crate::io::error::{Result, invalid_parameter};
use crate::tour::piece::{Cell, Direction, Piece};
use crate::tour::state::{IllegalPlacement, SearchState};
use crate::tour::supply::Supply;

/// A completed search state
pub type Solution = SearchState;

/// Validated puzzle instance: tray size, start cell and piece supply
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TourConfig {
    size: usize,
    start: Cell,
    supply: Supply,
}

impl TourConfig {
    /// Validate and build a puzzle instance
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `size` is zero or larger than [`MAX_TRAY_SIZE`]
    /// - `start` lies outside the tray
    pub fn new(size: usize, start: Cell, supply: Supply) -> Result<Self> {
        if size == 0 {
            return Err(invalid_parameter(
                "size",
                &size,
                &"the tray needs at least one cell",
            ));
        }
        if size > MAX_TRAY_SIZE {
            return Err(invalid_parameter(
                "size",
                &size,
                &format!("must not exceed {MAX_TRAY_SIZE}"),
            ));
        }
        if start[0] >= size || start[1] >= size {
            return Err(invalid_parameter(
                "start",
                &format!("{},{}", start[0], start[1]),
                &format!("must lie on the {size}x{size} tray"),
            ));
        }

        Ok(Self {
            size,
            start,
            supply,
        })
    }

    /// The 2014 puzzle: 4x4 tray, start bottom left, standard supply
    pub fn standard() -> Self {
        Self {
            size: DEFAULT_TRAY_SIZE,
            start: DEFAULT_START,
            supply: Supply::standard(),
        }
    }

    /// Tray edge length
    pub const fn size(&self) -> usize {
        self.size
    }

    /// Number of pieces a complete tour places
    pub const fn area(&self) -> usize {
        self.size * self.size
    }

    /// Cell the tour starts from and must return to
    pub const fn start(&self) -> Cell {
        self.start
    }

    /// Available pieces
    pub const fn supply(&self) -> &Supply {
        &self.supply
    }
}

/// Counters gathered over one exhaustive search
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Completed tours reported
    pub solutions: usize,
    /// Legal placements made, i.e. states created
    pub placements: usize,
    /// Candidates rejected because they point off the tray
    pub off_tray: usize,
    /// Candidates rejected because their target is occupied
    pub occupied: usize,
    /// Piece types skipped because their supply was used up
    pub exhausted: usize,
    /// Set when the caller broke off the enumeration
    pub stopped: bool,
}

impl SearchStats {
    fn record_rejection(&mut self, rejection: IllegalPlacement) {
        match rejection {
            IllegalPlacement::Exhausted { .. } => self.exhausted += 1,
            IllegalPlacement::OffTray { .. } => self.off_tray += 1,
            IllegalPlacement::Occupied { .. } => self.occupied += 1,
        }
    }
}

/// Exhaustive tour enumerator for one puzzle instance
#[derive(Clone, Debug)]
pub struct TourSearch {
    config: TourConfig,
}

impl TourSearch {
    /// Create a search over the given instance
    pub const fn new(config: TourConfig) -> Self {
        Self { config }
    }

    /// Instance being searched
    pub const fn config(&self) -> &TourConfig {
        &self.config
    }

    /// Enumerate every tour, passing each to `on_solution` as it is found
    ///
    /// Returning [`ControlFlow::Break`] from `on_solution` ends the search
    /// at once; the returned statistics then cover the explored part only.
    pub fn run<F>(&self, mut on_solution: F) -> SearchStats
    where
        F: FnMut(&Solution) -> ControlFlow<()>,
    {
        let mut stats = SearchStats::default();
        let initial = SearchState::initial(&self.config);
        let flow = self.descend(&initial, &mut on_solution, &mut stats);
        stats.stopped = flow.is_break();
        stats
    }

    /// Number of tours, symmetric duplicates included
    pub fn count(&self) -> usize {
        self.run(|_| ControlFlow::Continue(())).solutions
    }

    /// Every tour in enumeration order
    pub fn solutions(&self) -> Vec<Solution> {
        let mut solutions = Vec::new();
        self.run(|solution| {
            solutions.push(solution.clone());
            ControlFlow::Continue(())
        });
        solutions
    }

    fn descend<F>(
        &self,
        state: &SearchState,
        on_solution: &mut F,
        stats: &mut SearchStats,
    ) -> ControlFlow<()>
    where
        F: FnMut(&Solution) -> ControlFlow<()>,
    {
        if state.is_complete(&self.config) {
            stats.solutions += 1;
            return on_solution(state);
        }

        let supply = self.config.supply();
        for (slot, hop) in supply.hops().enumerate() {
            if state.used_in_slot(slot) >= supply.allotment(slot) {
                stats.exhausted += 1;
                continue;
            }
            for direction in Direction::ALL {
                match state.place(&self.config, Piece::new(hop, direction)) {
                    Ok(next) => {
                        stats.placements += 1;
                        self.descend(&next, on_solution, stats)?;
                    }
                    Err(rejection) => stats.record_rejection(rejection),
                }
            }
        }
        ControlFlow::Continue(())
    }
}
