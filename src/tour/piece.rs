//! Pieces, their orientations and the textual token format

use std::fmt;
use std::str::FromStr;

/// Tray coordinates as `[x, y]`, with y growing northwards
pub type Cell = [usize; 2];

/// One of the four orientations a piece can be placed in
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Towards larger y
    North,
    /// Towards smaller y
    South,
    /// Towards larger x
    East,
    /// Towards smaller x
    West,
}

impl Direction {
    /// Every orientation, in the order the search tries them
    pub const ALL: [Self; 4] = [Self::North, Self::South, Self::East, Self::West];

    /// Unit vector as `[dx, dy]`
    pub const fn offset(self) -> [isize; 2] {
        match self {
            Self::North => [0, 1],
            Self::South => [0, -1],
            Self::East => [1, 0],
            Self::West => [-1, 0],
        }
    }

    /// Single letter used in piece tokens
    pub const fn letter(self) -> char {
        match self {
            Self::North => 'N',
            Self::South => 'S',
            Self::East => 'E',
            Self::West => 'W',
        }
    }

    /// Inverse of [`Direction::letter`]
    pub const fn from_letter(letter: char) -> Option<Self> {
        match letter {
            'N' => Some(Self::North),
            'S' => Some(Self::South),
            'E' => Some(Self::East),
            'W' => Some(Self::West),
            _ => None,
        }
    }
}

/// A piece placed on the tray: hop distance plus orientation
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Piece {
    /// Hop distance, also the piece type
    pub hop: usize,
    /// Orientation the hop is taken in
    pub direction: Direction,
}

impl Piece {
    /// Create a piece of the given type and orientation
    pub const fn new(hop: usize, direction: Direction) -> Self {
        Self { hop, direction }
    }

    /// Cell this piece points to when placed at `from`
    ///
    /// Returns `None` when the hop leaves a tray of edge length `size`.
    pub fn target(self, from: Cell, size: usize) -> Option<Cell> {
        let [dx, dy] = self.direction.offset();
        let hop = isize::try_from(self.hop).ok()?;
        let x = from[0].checked_add_signed(dx.checked_mul(hop)?)?;
        let y = from[1].checked_add_signed(dy.checked_mul(hop)?)?;
        (x < size && y < size).then_some([x, y])
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.hop, self.direction.letter())
    }
}

/// Failure to read a piece token such as `2N`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsePieceError {
    /// The rejected token
    pub token: String,
}

impl fmt::Display for ParsePieceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "'{}' is not a piece token (expected a hop followed by N, S, E or W)",
            self.token
        )
    }
}

impl std::error::Error for ParsePieceError {}

impl FromStr for Piece {
    type Err = ParsePieceError;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        let reject = || ParsePieceError {
            token: token.to_string(),
        };
        let trimmed = token.trim();
        let letter = trimmed.chars().last().ok_or_else(reject)?;
        let direction = Direction::from_letter(letter).ok_or_else(reject)?;
        let digits = trimmed
            .get(..trimmed.len() - letter.len_utf8())
            .ok_or_else(reject)?;
        if !digits.bytes().all(|byte| byte.is_ascii_digit()) {
            return Err(reject());
        }
        let hop = digits
            .parse::<usize>()
            .ok()
            .filter(|&hop| hop > 0)
            .ok_or_else(reject)?;
        Ok(Self::new(hop, direction))
    }
}

/// Read a whitespace-separated path of piece tokens
///
/// # Errors
///
/// Returns the first token that is not a valid piece
pub fn parse_path(path: &str) -> Result<Vec<Piece>, ParsePieceError> {
    path.split_whitespace().map(str::parse).collect()
}
