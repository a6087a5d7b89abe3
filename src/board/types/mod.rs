//! Core chess types.
//!
//! This module contains the fundamental types used throughout the rules
//! engine:
//! - `Piece` and `Color` - chess piece types and colors
//! - `Square` - (rank, file) board square
//! - `Move` and `MoveList` - move representation
//! - `CastlingRights` - castling state

mod castling;
mod moves;
mod piece;
mod square;

// Re-export all public types
pub use castling::CastlingRights;
pub use moves::{Move, MoveList};
pub use piece::{Color, Piece};
pub use square::Square;

// Re-export internal utilities
pub(crate) use piece::PROMOTION_PIECES;
