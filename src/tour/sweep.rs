//! Sweep over every supply configuration for a fixed set of piece types
//!
//! A configuration hands out exactly one piece per tray cell, split between
//! the piece types. Configurations are visited in lexicographic order of
//! their counts, first type outermost, with the last type taking whatever
//! remains.

use std::ops::ControlFlow;

use crate::io::error::{Result, invalid_parameter};
use crate::tour::piece::Cell;
use crate::tour::search::{TourConfig, TourSearch};
use crate::tour::supply::Supply;

/// Weak compositions of `total` into `parts` counts, in lexicographic order
#[derive(Clone, Debug)]
pub struct Compositions {
    total: usize,
    next: Option<Vec<usize>>,
}

impl Compositions {
    /// Enumerate every way to split `total` into `parts` non-negative counts
    pub fn new(total: usize, parts: usize) -> Self {
        let next = (parts > 0).then(|| {
            let mut first = vec![0; parts];
            if let Some(last) = first.last_mut() {
                *last = total;
            }
            first
        });
        Self { total, next }
    }

    /// Number of compositions, `C(total + parts - 1, parts - 1)`
    ///
    /// Returns `None` when the count does not fit in a `usize`.
    pub fn count_for(total: usize, parts: usize) -> Option<usize> {
        if parts == 0 {
            return Some(0);
        }
        // value is C(total + i, i) after step i, non-decreasing in i
        let mut value: usize = 1;
        for i in 1..parts {
            let factor = total.checked_add(i)? as u128;
            let next = (value as u128).checked_mul(factor)? / i as u128;
            value = usize::try_from(next).ok()?;
        }
        Some(value)
    }

    fn advance(&self, current: &[usize]) -> Option<Vec<usize>> {
        let free = current.len().checked_sub(1)?;
        // Rightmost free count that can still grow: everything after it is
        // folded back into the last slot.
        let mut counts = current.to_vec();
        let mut position = free;
        while position > 0 {
            position -= 1;
            let prefix: usize = counts.iter().take(position + 1).sum();
            if prefix < self.total {
                if let Some(count) = counts.get_mut(position) {
                    *count += 1;
                }
                for count in counts.iter_mut().take(free).skip(position + 1) {
                    *count = 0;
                }
                let assigned: usize = counts.iter().take(free).sum();
                if let Some(last) = counts.last_mut() {
                    *last = self.total - assigned;
                }
                return Some(counts);
            }
        }
        None
    }
}

impl Iterator for Compositions {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next.take()?;
        self.next = self.advance(&current);
        Some(current)
    }
}

/// Solution count for one supply configuration
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SweepEntry {
    /// Position of the configuration in sweep order, starting at zero
    pub index: usize,
    /// The configuration searched
    pub supply: Supply,
    /// Raw tours found, symmetric duplicates included
    pub solutions: usize,
}

impl SweepEntry {
    /// Per-type counts in ascending hop order
    pub fn counts(&self) -> Vec<usize> {
        self.supply.iter().map(|(_, count)| count).collect()
    }
}

/// Aggregate result of a sweep
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SweepSummary {
    /// Configurations with at least one tour, in sweep order
    pub viable: Vec<SweepEntry>,
    /// Configurations searched
    pub configurations: usize,
    /// Tours found over all configurations
    pub total_solutions: usize,
    /// Set when the observer broke off the sweep
    pub stopped: bool,
}

/// Runs the tour search for every supply configuration of a piece type set
#[derive(Clone, Debug)]
pub struct Sweep {
    size: usize,
    start: Cell,
    types: Supply,
    configurations: usize,
}

impl Sweep {
    /// Prepare a sweep over the given piece types
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - no piece types are given, or a type is zero or repeated
    /// - `size` or `start` do not describe a valid tray
    /// - the number of configurations does not fit in a `usize`
    pub fn new(size: usize, start: Cell, hops: &[usize]) -> Result<Self> {
        if hops.is_empty() {
            return Err(invalid_parameter(
                "types",
                &"",
                &"at least one piece type is required",
            ));
        }
        let types = Supply::new(hops.iter().map(|&hop| (hop, 0)))?;
        TourConfig::new(size, start, types.clone())?;

        let configurations = Compositions::count_for(size * size, types.len()).ok_or_else(|| {
            invalid_parameter(
                "types",
                &types.len(),
                &format!("too many supply configurations for a {size}x{size} tray"),
            )
        })?;

        Ok(Self {
            size,
            start,
            types,
            configurations,
        })
    }

    /// Piece types in ascending order
    pub fn hops(&self) -> Vec<usize> {
        self.types.hops().collect()
    }

    /// Number of configurations the sweep will search
    pub const fn configuration_count(&self) -> usize {
        self.configurations
    }

    /// Every configuration as a supply, in sweep order
    pub fn configurations(&self) -> impl Iterator<Item = Supply> + '_ {
        Compositions::new(self.size * self.size, self.types.len())
            .map(|counts| self.types.with_counts(&counts))
    }

    /// Search every configuration, reporting each entry to `observe` as it completes
    ///
    /// Returning [`ControlFlow::Break`] from `observe` ends the sweep after
    /// that entry has been tallied.
    ///
    /// # Errors
    ///
    /// Returns an error if a configuration cannot be built
    pub fn run<F>(&self, mut observe: F) -> Result<SweepSummary>
    where
        F: FnMut(&SweepEntry) -> ControlFlow<()>,
    {
        let mut summary = SweepSummary::default();

        for (index, supply) in self.configurations().enumerate() {
            let config = TourConfig::new(self.size, self.start, supply.clone())?;
            let solutions = TourSearch::new(config).count();
            let entry = SweepEntry {
                index,
                supply,
                solutions,
            };

            let flow = observe(&entry);
            summary.configurations += 1;
            summary.total_solutions += solutions;
            if solutions > 0 {
                summary.viable.push(entry);
            }
            if flow.is_break() {
                summary.stopped = true;
                break;
            }
        }

        Ok(summary)
    }
}
