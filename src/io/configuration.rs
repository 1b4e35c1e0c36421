//! Puzzle constants and runtime configuration defaults

// The 2014 holiday puzzle: a 4x4 tray filled from the bottom left corner
/// Default tray edge length
pub const DEFAULT_TRAY_SIZE: usize = 4;

/// Default start cell as `[x, y]`
pub const DEFAULT_START: [usize; 2] = [0, 0];

/// Piece supply of the standard puzzle as `(hop, count)` pairs
pub const STANDARD_SUPPLY: [(usize, usize); 3] = [(1, 1), (2, 8), (3, 7)];

/// Piece types used by the configuration sweep
pub const DEFAULT_PIECE_TYPES: [usize; 3] = [1, 2, 3];

// Recursion depth is size², keep it well inside the default thread stack
/// Maximum allowed tray edge length
pub const MAX_TRAY_SIZE: usize = 16;

// Progress bar display settings
/// Width of progress bars in characters
pub const PROGRESS_BAR_WIDTH: u16 = 40;
/// Solutions between spinner refreshes while solving
pub const SOLVE_PROGRESS_INTERVAL: usize = 64;

// Output settings
/// Line printed before each rendered solution
pub const SOLUTION_HEADER: &str = "--- solution ---";
/// Rendering of an empty tray cell
pub const EMPTY_CELL: &str = "__";
