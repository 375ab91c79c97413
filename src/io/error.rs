//! Error types for layout I/O and scene consistency

use std::fmt;
use std::num::ParseIntError;
use std::path::{Path, PathBuf};

/// Main error type for all scene operations
#[derive(Debug)]
pub enum SceneError {
    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// A layout cell could not be parsed as an integer
    ///
    /// Treated as a corrupt file: the whole load of that file is aborted.
    MalformedCell {
        /// File the cell was read from
        path: PathBuf,
        /// 1-based line number
        line: usize,
        /// 1-based column (token) number within the line
        column: usize,
        /// The offending token, as written
        token: String,
        /// Underlying integer parse error
        source: ParseIntError,
    },

    /// Parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Tile catalog and spatial index disagree
    IndexMismatch {
        /// Grid cell where the disagreement was found
        position: [i32; 2],
        /// Description of the disagreement
        reason: String,
    },
}

impl fmt::Display for SceneError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
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
            Self::MalformedCell {
                path,
                line,
                column,
                token,
                source,
            } => {
                write!(
                    f,
                    "Malformed cell '{token}' at {}:{line}:{column}: {source}",
                    path.display()
                )
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::IndexMismatch {
                position: [x, y],
                reason,
            } => {
                write!(f, "Index mismatch at ({x}, {y}): {reason}")
            }
        }
    }
}

impl std::error::Error for SceneError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::FileSystem { source, .. } => Some(source),
            Self::MalformedCell { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for scene results
pub type Result<T> = std::result::Result<T, SceneError>;

/// Attaches the file path and operation to I/O failures
pub trait WithPath<T> {
    /// Convert an I/O error into [`SceneError::FileSystem`] for `path`
    ///
    /// # Errors
    ///
    /// Propagates the original error with the path and operation applied
    fn with_path(self, path: &Path, operation: &'static str) -> Result<T>;
}

impl<T> WithPath<T> for std::io::Result<T> {
    fn with_path(self, path: &Path, operation: &'static str) -> Result<T> {
        self.map_err(|source| SceneError::FileSystem {
            path: path.to_path_buf(),
            operation,
            source,
        })
    }
}

impl From<std::io::Error> for SceneError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> SceneError {
    SceneError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/io/error.rs"]
mod tests;
