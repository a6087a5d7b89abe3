//! Chess board representation and game logic.
//!
//! Uses a plain 8x8 grid with ray-based check and pin detection. Supports
//! full chess rules including castling, en passant, and promotions, and
//! keeps enough history to undo every applied move exactly.
//!
//! # Example
//! ```
//! use chess_rules::board::GameState;
//!
//! let mut state = GameState::new();
//! let moves = state.generate_legal_moves();
//! println!("Starting position has {} legal moves", moves.len());
//! ```

mod attack_tables;
mod builder;
mod checks;
mod error;
mod eval;
mod make_unmake;
mod movegen;
pub mod prelude;
mod search;
mod state;
mod types;

#[cfg(test)]
mod tests;

// Public API - types users need
pub use builder::GameStateBuilder;
pub use error::{PositionError, SquareError};
pub use state::{Board, GameState};
pub use types::{CastlingRights, Color, Move, MoveList, Piece, Square};

// Public API - move selection and configuration
pub use search::{
    choose_move, choose_move_with_params, SearchMode, SearchParams, CHECKMATE_SCORE, DEFAULT_DEPTH,
};
