use super::super::attack_tables::king_targets;
use super::super::types::{MoveList, Piece, Square};
use super::super::GameState;

impl GameState {
    pub(crate) fn generate_king_moves(&mut self, from: Square, moves: &mut MoveList) {
        let color = self.side_to_move();

        for &to in king_targets(from) {
            if self.board.color_on(to) == Some(color) {
                continue;
            }
            // Probe the destination by relocating only the king-square
            // cache; check detection treats the stale king on the board
            // as transparent.
            self.set_king_square(color, to);
            let (in_check, _, _) = self.compute_checks_and_pins();
            self.set_king_square(color, from);

            if !in_check {
                moves.push(self.create_move(from, to, None, false, false));
            }
        }

        self.generate_castle_moves(from, moves);
    }

    /// Castling requires: not currently in check, the right still held,
    /// the rook on its home square, the intervening squares empty, and no
    /// attacked square on the king's path.
    ///
    /// Relies on `in_check` having been set by the detection pass at the
    /// top of `generate_legal_moves`.
    fn generate_castle_moves(&self, from: Square, moves: &mut MoveList) {
        if self.in_check {
            return;
        }

        let color = self.side_to_move();
        let back = color.back_rank();
        if from != Square(back, 4) {
            return;
        }

        if self.castling_rights.has(color, true)
            && self.board.is_empty(Square(back, 5))
            && self.board.is_empty(Square(back, 6))
            && self.board.piece_at(Square(back, 7)) == Some((color, Piece::Rook))
            && !self.square_attacked(Square(back, 5))
            && !self.square_attacked(Square(back, 6))
        {
            moves.push(self.create_move(from, Square(back, 6), None, true, false));
        }

        if self.castling_rights.has(color, false)
            && self.board.is_empty(Square(back, 1))
            && self.board.is_empty(Square(back, 2))
            && self.board.is_empty(Square(back, 3))
            && self.board.piece_at(Square(back, 0)) == Some((color, Piece::Rook))
            && !self.square_attacked(Square(back, 3))
            && !self.square_attacked(Square(back, 2))
        {
            moves.push(self.create_move(from, Square(back, 2), None, true, false));
        }
    }
}
