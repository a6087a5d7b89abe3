use super::super::attack_tables::knight_targets;
use super::super::types::{MoveList, Square};
use super::super::GameState;

impl GameState {
    pub(crate) fn generate_knight_moves(&self, from: Square, moves: &mut MoveList) {
        // A knight can never stay on its pin axis, so a pinned knight has
        // no moves at all.
        if self.pin_on(from).is_some() {
            return;
        }

        let color = self.side_to_move();
        for &to in knight_targets(from) {
            if self.board.color_on(to) != Some(color) {
                moves.push(self.create_move(from, to, None, false, false));
            }
        }
    }
}
