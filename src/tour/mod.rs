/// Pieces, directions and piece tokens
pub mod piece;
/// Depth-first tour enumeration over validated puzzle instances
pub mod search;
/// Immutable search states and placement legality
pub mod state;
/// Per-type piece allotments
pub mod supply;
/// Enumeration of every supply configuration for a set of piece types
pub mod sweep;
/// Square grid of placed pieces
pub mod tray;
/// Independent closed-tour checks for finished trays
pub mod verify;

pub use piece::{Cell, Direction, Piece};
pub use search::{SearchStats, Solution, TourConfig, TourSearch};
pub use state::{IllegalPlacement, Placement, SearchState};
pub use supply::Supply;
pub use sweep::{Sweep, SweepEntry, SweepSummary};
pub use tray::Tray;
