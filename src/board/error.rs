//! Error types for board operations.
//!
//! The rules core has no runtime-recoverable failures: applying an illegal
//! move or undoing past the start of the game is a caller bug and panics.
//! Errors here cover fallible construction only (square parsing and
//! position building).

use std::fmt;

use super::types::Color;

/// Error type for square parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SquareError {
    /// Invalid algebraic notation
    InvalidNotation { notation: String },
}

impl fmt::Display for SquareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SquareError::InvalidNotation { notation } => {
                write!(f, "Invalid square notation '{notation}'")
            }
        }
    }
}

impl std::error::Error for SquareError {}

/// Error type for invalid positions handed to `GameStateBuilder`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PositionError {
    /// A side has no king on the board
    MissingKing { color: Color },
    /// A side has more than one king on the board
    DuplicateKing { color: Color },
}

impl fmt::Display for PositionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PositionError::MissingKing { color } => {
                write!(f, "{color} has no king")
            }
            PositionError::DuplicateKing { color } => {
                write!(f, "{color} has more than one king")
            }
        }
    }
}

impl std::error::Error for PositionError {}
