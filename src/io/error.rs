//! Error types for configuration, output and verification failures
//!
//! Search-time pruning never surfaces here: an illegal placement is a value
//! handled inside the search (see [`crate::tour::state::IllegalPlacement`]).

use std::fmt;
use std::path::{Path, PathBuf};

use crate::tour::verify::TourDefect;

/// Main error type for everything outside the search itself
#[derive(Debug)]
pub enum TourError {
    /// Configuration parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Supply description could not be parsed or is inconsistent
    InvalidSupply {
        /// The supply text as given
        input: String,
        /// What is wrong with it
        reason: String,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// A reported solution failed independent verification
    DefectiveTour {
        /// 1-based position of the solution in the enumeration order
        index: usize,
        /// The violated tour property
        defect: TourDefect,
    },
}

impl fmt::Display for TourError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::InvalidSupply { input, reason } => {
                write!(f, "Invalid supply '{input}': {reason}")
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
            Self::DefectiveTour { index, defect } => {
                write!(f, "Solution {index} is not a valid tour: {defect}")
            }
        }
    }
}

impl std::error::Error for TourError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::FileSystem { source, .. } => Some(source),
            Self::DefectiveTour { defect, .. } => Some(defect),
            _ => None,
        }
    }
}

/// Convenience type alias for fallible configuration and output operations
pub type Result<T> = std::result::Result<T, TourError>;

impl From<std::io::Error> for TourError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<stdout>"),
            operation: "write",
            source: err,
        }
    }
}

/// Attaches the file being worked on to raw I/O failures
pub trait WithPath<T> {
    /// Wrap an I/O error with the path and operation it belongs to
    ///
    /// # Errors
    ///
    /// Propagates the original error as [`TourError::FileSystem`]
    fn with_path(self, path: &Path, operation: &'static str) -> Result<T>;
}

impl<T> WithPath<T> for std::io::Result<T> {
    fn with_path(self, path: &Path, operation: &'static str) -> Result<T> {
        self.map_err(|source| TourError::FileSystem {
            path: path.to_path_buf(),
            operation,
            source,
        })
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> TourError {
    TourError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create an invalid supply error
pub fn invalid_supply(input: &impl ToString, reason: &impl ToString) -> TourError {
    TourError::InvalidSupply {
        input: input.to_string(),
        reason: reason.to_string(),
    }
}
