//! Piece supply: how many pieces of each type a puzzle instance provides
//!
//! Types are kept sorted ascending, which is also the order the search tries
//! them in. Per-type usage during a search is tracked by slot index into this
//! ordering rather than by hop value.

use std::fmt;
use std::str::FromStr;

use crate::io::configuration::STANDARD_SUPPLY;
use crate::io::error::{Result, TourError, invalid_supply};

/// Allotted count for each piece type, ascending by hop
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Supply {
    entries: Vec<(usize, usize)>,
}

impl Supply {
    /// Build a supply from `(hop, count)` pairs in any order
    ///
    /// # Errors
    ///
    /// Returns an error if a hop is zero or appears more than once
    pub fn new(entries: impl IntoIterator<Item = (usize, usize)>) -> Result<Self> {
        let mut entries: Vec<(usize, usize)> = entries.into_iter().collect();
        entries.sort_unstable_by_key(|&(hop, _)| hop);

        if entries.iter().any(|&(hop, _)| hop == 0) {
            return Err(invalid_supply(
                &Self::describe(&entries),
                &"piece types must hop at least one cell",
            ));
        }
        if entries
            .windows(2)
            .any(|pair| matches!(pair, [(a, _), (b, _)] if a == b))
        {
            return Err(invalid_supply(
                &Self::describe(&entries),
                &"each piece type may only be listed once",
            ));
        }

        Ok(Self { entries })
    }

    /// The 2014 puzzle supply: one 1-hop, eight 2-hops, seven 3-hops
    pub fn standard() -> Self {
        Self {
            entries: STANDARD_SUPPLY.to_vec(),
        }
    }

    /// Same piece types with new allotments, zero where `counts` runs short
    #[must_use]
    pub fn with_counts(&self, counts: &[usize]) -> Self {
        let entries = self
            .entries
            .iter()
            .enumerate()
            .map(|(slot, &(hop, _))| (hop, counts.get(slot).copied().unwrap_or(0)))
            .collect();
        Self { entries }
    }

    /// Number of distinct piece types
    pub const fn len(&self) -> usize {
        self.entries.len()
    }

    /// Test if no piece types are configured
    pub const fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Hop of the type at `slot`
    pub fn hop(&self, slot: usize) -> Option<usize> {
        self.entries.get(slot).map(|&(hop, _)| hop)
    }

    /// Allotment of the type at `slot`, zero for unknown slots
    pub fn allotment(&self, slot: usize) -> usize {
        self.entries.get(slot).map_or(0, |&(_, count)| count)
    }

    /// Slot index of a piece type
    pub fn slot_of(&self, hop: usize) -> Option<usize> {
        self.entries
            .binary_search_by_key(&hop, |&(entry_hop, _)| entry_hop)
            .ok()
    }

    /// Allotment for a piece type, zero when the type is not supplied
    pub fn count_of(&self, hop: usize) -> usize {
        self.slot_of(hop).map_or(0, |slot| self.allotment(slot))
    }

    /// Piece types in ascending order
    pub fn hops(&self) -> impl Iterator<Item = usize> + '_ {
        self.entries.iter().map(|&(hop, _)| hop)
    }

    /// `(hop, count)` pairs in ascending hop order
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.entries.iter().copied()
    }

    /// Total number of pieces across all types
    pub fn total(&self) -> usize {
        self.entries.iter().map(|&(_, count)| count).sum()
    }

    fn describe(entries: &[(usize, usize)]) -> String {
        entries
            .iter()
            .map(|(hop, count)| format!("{hop}:{count}"))
            .collect::<Vec<_>>()
            .join(",")
    }
}

impl fmt::Display for Supply {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&Self::describe(&self.entries))
    }
}

impl FromStr for Supply {
    type Err = TourError;

    /// Parse `hop:count` pairs separated by commas, e.g. `1:1,2:8,3:7`
    fn from_str(input: &str) -> Result<Self> {
        let mut entries = Vec::new();
        for item in input.split(',').map(str::trim).filter(|item| !item.is_empty()) {
            let (hop, count) = item
                .split_once(':')
                .ok_or_else(|| invalid_supply(&input, &format!("'{item}' is not hop:count")))?;
            let hop = hop
                .trim()
                .parse::<usize>()
                .map_err(|err| invalid_supply(&input, &format!("bad hop in '{item}': {err}")))?;
            let count = count
                .trim()
                .parse::<usize>()
                .map_err(|err| invalid_supply(&input, &format!("bad count in '{item}': {err}")))?;
            entries.push((hop, count));
        }

        if entries.is_empty() {
            return Err(invalid_supply(&input, &"no piece types given"));
        }

        Self::new(entries)
    }
}
