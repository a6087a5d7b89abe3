//! Board and game-state aggregates.

use std::fmt;

use super::checks::{Checker, Pin};
use super::types::{CastlingRights, Color, Move, Piece, Square};

/// An 8x8 grid of square contents. Pure data; all game logic lives on
/// `GameState`.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Board {
    squares: [[Option<(Color, Piece)>; 8]; 8],
}

impl Board {
    pub(crate) fn empty() -> Self {
        Board {
            squares: [[None; 8]; 8],
        }
    }

    /// The piece on a square, if any
    #[inline]
    #[must_use]
    pub fn piece_at(&self, sq: Square) -> Option<(Color, Piece)> {
        self.squares[sq.0][sq.1]
    }

    /// Get just the piece type on a square (without color)
    #[must_use]
    pub fn piece_on(&self, sq: Square) -> Option<Piece> {
        self.piece_at(sq).map(|(_, piece)| piece)
    }

    /// Get just the color of the piece on a square
    #[must_use]
    pub fn color_on(&self, sq: Square) -> Option<Color> {
        self.piece_at(sq).map(|(color, _)| color)
    }

    #[inline]
    pub(crate) fn is_empty(&self, sq: Square) -> bool {
        self.squares[sq.0][sq.1].is_none()
    }

    #[inline]
    pub(crate) fn set_piece(&mut self, sq: Square, color: Color, piece: Piece) {
        self.squares[sq.0][sq.1] = Some((color, piece));
    }

    #[inline]
    pub(crate) fn clear_square(&mut self, sq: Square) {
        self.squares[sq.0][sq.1] = None;
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "  +---+---+---+---+---+---+---+---+")?;
        for rank in (0..8).rev() {
            write!(f, "{} |", rank + 1)?;
            for file in 0..8 {
                let ch = match self.squares[rank][file] {
                    Some((Color::White, piece)) => piece.to_char().to_ascii_uppercase(),
                    Some((Color::Black, piece)) => piece.to_char(),
                    None => '.',
                };
                write!(f, " {ch} |")?;
            }
            writeln!(f, "\n  +---+---+---+---+---+---+---+---+")?;
        }
        write!(f, "    a   b   c   d   e   f   g   h")
    }
}

/// Full game state: board, side to move, castling and en-passant
/// bookkeeping, and the parallel history stacks that make every applied
/// move exactly reversible.
///
/// The board, king squares, rights and en-passant target are mutated only
/// through `apply_move` / `undo_move`. The `in_check` / `pins` /
/// `checkers` / `checkmate` / `stalemate` fields are transient: they are
/// valid immediately after `generate_legal_moves` and stale after the next
/// mutation.
#[derive(Clone, Debug)]
pub struct GameState {
    pub(crate) board: Board,
    pub(crate) white_to_move: bool,
    pub(crate) white_king: Square,
    pub(crate) black_king: Square,
    pub(crate) en_passant_target: Option<Square>,
    pub(crate) castling_rights: CastlingRights,
    pub(crate) move_history: Vec<Move>,
    // Invariant: each snapshot stack holds move_history.len() + 1 entries
    pub(crate) rights_history: Vec<CastlingRights>,
    pub(crate) ep_history: Vec<Option<Square>>,
    pub(crate) in_check: bool,
    pub(crate) pins: Vec<Pin>,
    pub(crate) checkers: Vec<Checker>,
    pub(crate) checkmate: bool,
    pub(crate) stalemate: bool,
}

impl GameState {
    /// Standard initial position: white to move, full castling rights,
    /// empty history.
    #[must_use]
    pub fn new() -> Self {
        let mut board = Board::empty();
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
            board.set_piece(Square(0, file), Color::White, piece);
            board.set_piece(Square(7, file), Color::Black, piece);
            board.set_piece(Square(1, file), Color::White, Piece::Pawn);
            board.set_piece(Square(6, file), Color::Black, Piece::Pawn);
        }

        GameState {
            board,
            white_to_move: true,
            white_king: Square(0, 4),
            black_king: Square(7, 4),
            en_passant_target: None,
            castling_rights: CastlingRights::all(),
            move_history: Vec::new(),
            rights_history: vec![CastlingRights::all()],
            ep_history: vec![None],
            in_check: false,
            pins: Vec::new(),
            checkers: Vec::new(),
            checkmate: false,
            stalemate: false,
        }
    }

    /// The board grid (read-only; mutate through `apply_move`/`undo_move`)
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The side to move
    #[must_use]
    pub fn side_to_move(&self) -> Color {
        if self.white_to_move {
            Color::White
        } else {
            Color::Black
        }
    }

    #[must_use]
    pub fn white_to_move(&self) -> bool {
        self.white_to_move
    }

    /// Location of `color`'s king
    #[must_use]
    pub fn king_square(&self, color: Color) -> Square {
        match color {
            Color::White => self.white_king,
            Color::Black => self.black_king,
        }
    }

    pub(crate) fn set_king_square(&mut self, color: Color, sq: Square) {
        match color {
            Color::White => self.white_king = sq,
            Color::Black => self.black_king = sq,
        }
    }

    /// The square a pawn just double-stepped over, if any
    #[must_use]
    pub fn en_passant_target(&self) -> Option<Square> {
        self.en_passant_target
    }

    /// The current castling rights
    #[must_use]
    pub fn castling_rights(&self) -> CastlingRights {
        self.castling_rights
    }

    /// All moves applied so far, oldest first
    #[must_use]
    pub fn move_history(&self) -> &[Move] {
        &self.move_history
    }

    /// The most recently applied move, if any
    #[must_use]
    pub fn last_move(&self) -> Option<Move> {
        self.move_history.last().copied()
    }

    /// Whether the side to move is in check.
    ///
    /// Valid only after `generate_legal_moves` on the current position.
    #[must_use]
    pub fn is_in_check(&self) -> bool {
        self.in_check
    }

    /// Whether the side to move is checkmated.
    ///
    /// Valid only after `generate_legal_moves` on the current position.
    #[must_use]
    pub fn is_checkmate(&self) -> bool {
        self.checkmate
    }

    /// Whether the side to move is stalemated.
    ///
    /// Valid only after `generate_legal_moves` on the current position.
    #[must_use]
    pub fn is_stalemate(&self) -> bool {
        self.stalemate
    }
}

impl Default for GameState {
    fn default() -> Self {
        GameState::new()
    }
}

impl fmt::Display for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.board)?;
        write!(f, "{} to move", self.side_to_move())
    }
}
