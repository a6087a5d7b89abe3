//! Material evaluation.

use super::types::Square;
use super::GameState;

impl GameState {
    /// Signed material balance: piece values summed for White, subtracted
    /// for Black. Positive favors White.
    #[must_use]
    pub fn material_score(&self) -> i32 {
        let mut score = 0;
        for rank in 0..8 {
            for file in 0..8 {
                if let Some((color, piece)) = self.board.piece_at(Square(rank, file)) {
                    score += color.sign() * piece.value();
                }
            }
        }
        score
    }
}
