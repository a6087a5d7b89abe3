//! Move application and undo.
//!
//! `apply_move` trusts its input: it never re-checks legality, so callers
//! must only pass moves returned by `generate_legal_moves` for the current
//! position. `undo_move` restores board, king squares, castling rights and
//! en-passant target to bit-for-bit equality with the pre-apply state.

use super::types::{Color, Move, Piece, Square};
use super::GameState;

impl GameState {
    /// Apply a legal move, flipping the side to move and pushing one entry
    /// onto each history stack.
    pub fn apply_move(&mut self, mv: Move) {
        let color = self.side_to_move();

        self.board.clear_square(mv.from);
        let placed = mv.promotion.unwrap_or(mv.piece_moved);
        self.board.set_piece(mv.to, color, placed);

        if mv.piece_moved == Piece::King {
            self.set_king_square(color, mv.to);
        }

        if mv.is_en_passant {
            // The captured pawn sits beside the start square, not on the
            // destination.
            self.board.clear_square(Square(mv.from.0, mv.to.1));
        }

        if mv.piece_moved == Piece::Pawn && mv.from.0.abs_diff(mv.to.0) == 2 {
            self.en_passant_target = Some(Square(usize::midpoint(mv.from.0, mv.to.0), mv.to.1));
        } else {
            self.en_passant_target = None;
        }

        if mv.is_castling {
            let (rook_from, rook_to) = rook_files(mv.to.1);
            self.board.clear_square(Square(mv.to.0, rook_from));
            self.board.set_piece(Square(mv.to.0, rook_to), color, Piece::Rook);
        }

        self.update_castling_rights(&mv, color);
        self.ep_history.push(self.en_passant_target);
        self.move_history.push(mv);
        self.white_to_move = !self.white_to_move;
    }

    /// Undo the most recent move. Returns the undone move, or `None` if
    /// the history is empty.
    pub fn undo_move(&mut self) -> Option<Move> {
        let mv = self.move_history.pop()?;
        self.rights_history.pop();
        self.castling_rights = *self
            .rights_history
            .last()
            .expect("rights history holds one snapshot per move plus the initial state");
        self.ep_history.pop();
        self.en_passant_target = *self
            .ep_history
            .last()
            .expect("en-passant history holds one snapshot per move plus the initial state");

        self.white_to_move = !self.white_to_move;
        let color = self.side_to_move();

        self.board.set_piece(mv.from, color, mv.piece_moved);
        self.board.clear_square(mv.to);

        if mv.piece_moved == Piece::King {
            self.set_king_square(color, mv.from);
        }

        if mv.is_en_passant {
            if let Some(pawn) = mv.piece_captured {
                self.board
                    .set_piece(Square(mv.from.0, mv.to.1), color.opponent(), pawn);
            }
        } else if let Some(captured) = mv.piece_captured {
            self.board.set_piece(mv.to, color.opponent(), captured);
        }

        if mv.is_castling {
            let (rook_from, rook_to) = rook_files(mv.to.1);
            self.board.clear_square(Square(mv.to.0, rook_to));
            self.board
                .set_piece(Square(mv.to.0, rook_from), color, Piece::Rook);
        }

        // Terminal flags are not historical; the next legality query
        // recomputes them.
        self.checkmate = false;
        self.stalemate = false;

        Some(mv)
    }

    /// Any king move revokes both of that color's rights; a rook move off
    /// its home square revokes that side's right. The (possibly unchanged)
    /// rights are snapshotted onto the history.
    fn update_castling_rights(&mut self, mv: &Move, color: Color) {
        match mv.piece_moved {
            Piece::King => {
                self.castling_rights.remove(color, true);
                self.castling_rights.remove(color, false);
            }
            Piece::Rook if mv.from == Square(color.back_rank(), 0) => {
                self.castling_rights.remove(color, false);
            }
            Piece::Rook if mv.from == Square(color.back_rank(), 7) => {
                self.castling_rights.remove(color, true);
            }
            _ => {}
        }
        self.rights_history.push(self.castling_rights);
    }
}

/// Rook origin and destination files for a castle landing on `king_file`
/// (6 = kingside, 2 = queenside).
const fn rook_files(king_file: usize) -> (usize, usize) {
    if king_file == 6 {
        (7, 5)
    } else {
        (0, 3)
    }
}
