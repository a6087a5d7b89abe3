use super::super::types::{MoveList, Piece, Square, PROMOTION_PIECES};
use super::super::GameState;

impl GameState {
    pub(crate) fn generate_pawn_moves(&mut self, from: Square, moves: &mut MoveList) {
        let color = self.side_to_move();
        let dir = color.pawn_direction();
        let pin = self.pin_on(from);

        if let Some(ahead) = from.offset((dir, 0), 1) {
            if self.board.is_empty(ahead) && Self::pin_allows(pin, (dir, 0)) {
                if ahead.0 == color.pawn_promotion_rank() {
                    for promo in PROMOTION_PIECES {
                        moves.push(self.create_move(from, ahead, Some(promo), false, false));
                    }
                } else {
                    moves.push(self.create_move(from, ahead, None, false, false));
                    if from.0 == color.pawn_start_rank() {
                        if let Some(double) = from.offset((dir, 0), 2) {
                            if self.board.is_empty(double) {
                                moves.push(self.create_move(from, double, None, false, false));
                            }
                        }
                    }
                }
            }
        }

        for df in [-1, 1] {
            let Some(target) = from.offset((dir, df), 1) else {
                continue;
            };
            if !Self::pin_allows(pin, (dir, df)) {
                continue;
            }
            match self.board.piece_at(target) {
                Some((c, _)) if c != color => {
                    if target.0 == color.pawn_promotion_rank() {
                        for promo in PROMOTION_PIECES {
                            moves.push(self.create_move(from, target, Some(promo), false, false));
                        }
                    } else {
                        moves.push(self.create_move(from, target, None, false, false));
                    }
                }
                None if Some(target) == self.en_passant_target => {
                    if self.en_passant_is_safe(from, target) {
                        moves.push(self.create_move(from, target, None, false, true));
                    }
                }
                _ => {}
            }
        }
    }

    /// En passant removes two pawns from one rank at once, which the pin
    /// scan cannot see (each pawn shields the other). Verify on the board
    /// itself that the capture leaves the own king unattacked.
    fn en_passant_is_safe(&mut self, from: Square, to: Square) -> bool {
        let color = self.side_to_move();
        let captured = Square(from.0, to.1);

        self.board.clear_square(from);
        self.board.clear_square(captured);
        self.board.set_piece(to, color, Piece::Pawn);

        let safe = !self.attacked_by(self.king_square(color), color.opponent());

        self.board.clear_square(to);
        self.board.set_piece(from, color, Piece::Pawn);
        self.board.set_piece(captured, color.opponent(), Piece::Pawn);

        safe
    }
}
