//! Error types and context management for level and movement operations

use std::fmt;
use std::path::PathBuf;

/// Main error type for all generation, grid and movement operations
#[derive(Debug)]
pub enum GameError {
    /// A size, border or tuning parameter violates the generator's invariants
    ///
    /// Raised when:
    /// - A level dimension or the border thickness is odd or zero
    /// - A smoothing stop value falls outside 0-10
    InvalidConfiguration {
        /// Name of the offending parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Grid query or placement outside `[0, width) x [0, height)`
    OutOfBounds {
        /// Requested tile position (x, y)
        position: [i32; 2],
        /// Grid dimensions (width, height)
        dimensions: (usize, usize),
        /// Grid operation that rejected the position
        operation: &'static str,
    },

    /// Failed to save an exported level image
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image export error
        source: image::ImageError,
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
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidConfiguration {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid configuration '{parameter}' = '{value}': {reason}")
            }
            Self::OutOfBounds {
                position,
                dimensions,
                operation,
            } => {
                write!(
                    f,
                    "Position ({}, {}) is outside the {}x{} grid during {operation}",
                    position[0], position[1], dimensions.0, dimensions.1
                )
            }
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export image to '{}': {source}",
                    path.display()
                )
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
        }
    }
}

impl std::error::Error for GameError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for crate results
pub type Result<T> = std::result::Result<T, GameError>;

/// Additional context to enrich error messages
#[derive(Debug, Clone, Default)]
pub struct ErrorContext {
    /// Grid operation being performed
    pub operation: Option<&'static str>,
}

/// Enriches error messages with the failing grid operation
pub trait WithContext<T> {
    /// Add error context to a Result
    ///
    /// # Errors
    ///
    /// Propagates the original error with additional context applied
    fn with_context(self, context: ErrorContext) -> Result<T>;

    /// Add just the operation context
    ///
    /// # Errors
    ///
    /// Propagates the original error with the operation context applied
    fn with_operation(self, operation: &'static str) -> Result<T>;
}

impl<T, E> WithContext<T> for std::result::Result<T, E>
where
    E: Into<GameError>,
{
    fn with_context(self, context: ErrorContext) -> Result<T> {
        self.map_err(|e| {
            let mut error = e.into();
            // Only bounds failures carry an operation slot
            if let GameError::OutOfBounds { operation, .. } = &mut error {
                if let Some(op) = context.operation {
                    *operation = op;
                }
            }
            error
        })
    }

    fn with_operation(self, operation: &'static str) -> Result<T> {
        self.with_context(ErrorContext {
            operation: Some(operation),
        })
    }
}

impl From<image::ImageError> for GameError {
    fn from(err: image::ImageError) -> Self {
        Self::ImageExport {
            path: PathBuf::from("<unknown>"),
            source: err,
        }
    }
}

impl From<std::io::Error> for GameError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

/// Create an invalid configuration error
pub fn invalid_configuration(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> GameError {
    GameError::InvalidConfiguration {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create an out-of-bounds error for a grid of the given (width, height)
pub const fn out_of_bounds(position: [i32; 2], dimensions: (usize, usize)) -> GameError {
    GameError::OutOfBounds {
        position,
        dimensions,
        operation: "grid access",
    }
}
