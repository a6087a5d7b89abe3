//! Fluent builder for constructing chess positions.
//!
//! Allows creating positions piece by piece rather than replaying a move
//! sequence from the initial position.
//!
//! # Example
//! ```
//! use chess_rules::board::{Color, GameStateBuilder, Piece, Square};
//!
//! let state = GameStateBuilder::new()
//!     .piece(Square(0, 4), Color::White, Piece::King)
//!     .piece(Square(7, 4), Color::Black, Piece::King)
//!     .piece(Square(1, 0), Color::White, Piece::Pawn)
//!     .side_to_move(Color::White)
//!     .build()
//!     .unwrap();
//! ```

use super::error::PositionError;
use super::state::Board;
use super::types::{CastlingRights, Color, Piece, Square};
use super::GameState;

/// A fluent builder for constructing `GameState` positions.
#[derive(Clone, Debug)]
pub struct GameStateBuilder {
    pieces: Vec<(Square, Color, Piece)>,
    side_to_move: Color,
    castling_rights: CastlingRights,
    en_passant_target: Option<Square>,
}

impl Default for GameStateBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl GameStateBuilder {
    /// Create a new empty builder (no pieces, White to move, no castling
    /// rights).
    #[must_use]
    pub fn new() -> Self {
        GameStateBuilder {
            pieces: Vec::new(),
            side_to_move: Color::White,
            castling_rights: CastlingRights::none(),
            en_passant_target: None,
        }
    }

    /// Create a builder starting from the standard initial position.
    #[must_use]
    pub fn starting_position() -> Self {
        let mut builder = Self::new();

        let back_rank = [
            Piece::Rook,
            Piece::Knight,
            Piece::Bishop,
            Piece::Queen,
            Piece::King,
            Piece::Bishop,
            Piece::Knight,
            Piece::Rook,
        ];
        for (file, &piece) in back_rank.iter().enumerate() {
            builder.pieces.push((Square(0, file), Color::White, piece));
            builder.pieces.push((Square(7, file), Color::Black, piece));
            builder
                .pieces
                .push((Square(1, file), Color::White, Piece::Pawn));
            builder
                .pieces
                .push((Square(6, file), Color::Black, Piece::Pawn));
        }

        builder.castling_rights = CastlingRights::all();
        builder
    }

    /// Place a piece on the board, replacing any existing piece there.
    #[must_use]
    pub fn piece(mut self, square: Square, color: Color, piece: Piece) -> Self {
        self.pieces.retain(|(sq, _, _)| *sq != square);
        self.pieces.push((square, color, piece));
        self
    }

    /// Remove a piece from a square.
    #[must_use]
    pub fn clear(mut self, square: Square) -> Self {
        self.pieces.retain(|(sq, _, _)| *sq != square);
        self
    }

    /// Set the side to move.
    #[must_use]
    pub const fn side_to_move(mut self, color: Color) -> Self {
        self.side_to_move = color;
        self
    }

    /// Set castling rights.
    #[must_use]
    pub const fn castling(mut self, rights: CastlingRights) -> Self {
        self.castling_rights = rights;
        self
    }

    /// Set the en passant target square.
    #[must_use]
    pub const fn en_passant(mut self, target: Square) -> Self {
        self.en_passant_target = Some(target);
        self
    }

    /// Build the game state.
    ///
    /// # Errors
    /// Returns `PositionError` unless each side has exactly one king.
    pub fn build(self) -> Result<GameState, PositionError> {
        let mut board = Board::empty();
        let mut white_king = None;
        let mut black_king = None;

        for (square, color, piece) in self.pieces {
            board.set_piece(square, color, piece);
            if piece == Piece::King {
                let slot = match color {
                    Color::White => &mut white_king,
                    Color::Black => &mut black_king,
                };
                if slot.is_some() {
                    return Err(PositionError::DuplicateKing { color });
                }
                *slot = Some(square);
            }
        }

        let white_king = white_king.ok_or(PositionError::MissingKing {
            color: Color::White,
        })?;
        let black_king = black_king.ok_or(PositionError::MissingKing {
            color: Color::Black,
        })?;

        Ok(GameState {
            board,
            white_to_move: self.side_to_move == Color::White,
            white_king,
            black_king,
            en_passant_target: self.en_passant_target,
            castling_rights: self.castling_rights,
            move_history: Vec::new(),
            rights_history: vec![self.castling_rights],
            ep_history: vec![self.en_passant_target],
            in_check: false,
            pins: Vec::new(),
            checkers: Vec::new(),
            checkmate: false,
            stalemate: false,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starting_position_matches_new_game() {
        let built = GameStateBuilder::starting_position().build().unwrap();
        let standard = GameState::new();

        assert_eq!(built.board, standard.board);
        assert_eq!(built.castling_rights(), standard.castling_rights());
        assert_eq!(built.side_to_move(), standard.side_to_move());
        assert_eq!(built.king_square(Color::White), Square(0, 4));
        assert_eq!(built.king_square(Color::Black), Square(7, 4));
    }

    #[test]
    fn test_missing_king_rejected() {
        let result = GameStateBuilder::new()
            .piece(Square(0, 4), Color::White, Piece::King)
            .build();
        assert_eq!(
            result.err(),
            Some(PositionError::MissingKing {
                color: Color::Black
            })
        );
    }

    #[test]
    fn test_duplicate_king_rejected() {
        let result = GameStateBuilder::new()
            .piece(Square(0, 4), Color::White, Piece::King)
            .piece(Square(0, 0), Color::White, Piece::King)
            .piece(Square(7, 4), Color::Black, Piece::King)
            .build();
        assert_eq!(
            result.err(),
            Some(PositionError::DuplicateKing {
                color: Color::White
            })
        );
    }

    #[test]
    fn test_clear_square() {
        let state = GameStateBuilder::starting_position()
            .clear(Square(0, 0))
            .build()
            .unwrap();

        assert!(state.board().piece_at(Square(0, 0)).is_none());
        assert!(state.board().piece_at(Square(0, 1)).is_some());
    }

    #[test]
    fn test_side_to_move() {
        let state = GameStateBuilder::new()
            .piece(Square(0, 4), Color::White, Piece::King)
            .piece(Square(7, 4), Color::Black, Piece::King)
            .side_to_move(Color::Black)
            .build()
            .unwrap();

        assert!(!state.white_to_move());
    }
}
