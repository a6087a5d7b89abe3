pub mod board;

pub use board::{choose_move, Color, GameState, Move, Piece, SearchMode, Square};
