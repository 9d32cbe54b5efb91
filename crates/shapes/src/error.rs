//! Errors raised while constructing shapes.

use std::fmt;

/// Precondition violations at construction time.
///
/// Everything past construction is total, so this is the only error type.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ShapeError {
    /// A circle needs at least one polygon side to be approximated.
    InvalidSides { sides: u32 },
}

impl fmt::Display for ShapeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSides { sides } => {
                write!(f, "circle side count must be positive, got {sides}")
            }
        }
    }
}

impl std::error::Error for ShapeError {}
