//! Exhaustive enumeration of closed tours of hop pieces on a square tray
//!
//! Each piece sits on one cell and points to the next cell a fixed number of
//! hops away in one of four directions. A tour fills every cell so that the
//! chain of pointers, followed from the start cell, visits each cell once and
//! returns to the start. The search is plain depth-first backtracking over
//! immutable states, bounded by a per-type piece supply.

#![forbid(unsafe_code)]

/// Input/output operations, configuration and error handling
pub mod io;
/// Pieces, trays, supplies and the tour search itself
pub mod tour;

pub use io::error::{Result, TourError};
