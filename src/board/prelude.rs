//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types and functions.
//!
//! # Example
//! ```
//! use chess_rules::board::prelude::*;
//! ```

pub use super::{
    choose_move, CastlingRights, Color, GameState, GameStateBuilder, Move, MoveList, Piece,
    PositionError, SearchMode, SearchParams, Square, SquareError,
};
