use super::super::types::{MoveList, Square};
use super::super::GameState;

impl GameState {
    pub(crate) fn generate_sliding_moves(
        &self,
        from: Square,
        directions: &[(isize, isize)],
        moves: &mut MoveList,
    ) {
        let color = self.side_to_move();
        let pin = self.pin_on(from);

        for &dir in directions {
            if !Self::pin_allows(pin, dir) {
                continue;
            }
            for step in 1..8 {
                let Some(to) = from.offset(dir, step) else {
                    break;
                };
                match self.board.piece_at(to) {
                    None => moves.push(self.create_move(from, to, None, false, false)),
                    Some((c, _)) if c != color => {
                        moves.push(self.create_move(from, to, None, false, false));
                        break;
                    }
                    _ => break,
                }
            }
        }
    }
}
