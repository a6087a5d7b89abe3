//! Property-based tests using proptest.

use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::board::GameState;

fn move_count_strategy() -> impl Strategy<Value = usize> {
    1..=30usize
}

fn seed_strategy() -> impl Strategy<Value = u64> {
    any::<u64>()
}

proptest! {
    /// Property: applying a random move sequence and undoing it all
    /// restores the state exactly.
    #[test]
    fn prop_apply_undo_restores_state(seed in seed_strategy(), num_moves in move_count_strategy()) {
        let mut state = GameState::new();
        let mut rng = StdRng::seed_from_u64(seed);
        let initial = state.clone();

        let mut applied = 0;
        for _ in 0..num_moves {
            let moves = state.generate_legal_moves();
            if moves.is_empty() {
                break;
            }
            let mv = moves[rng.gen_range(0..moves.len())];
            state.apply_move(mv);
            applied += 1;
        }

        for _ in 0..applied {
            prop_assert!(state.undo_move().is_some());
        }
        prop_assert!(state.undo_move().is_none());

        super::assert_states_match(&state, &initial);
    }

    /// Property: no legal move ever leaves the mover's own king attacked.
    #[test]
    fn prop_legal_moves_never_expose_the_king(seed in seed_strategy(), num_moves in move_count_strategy()) {
        let mut state = GameState::new();
        let mut rng = StdRng::seed_from_u64(seed);

        for _ in 0..num_moves {
            let moves = state.generate_legal_moves();
            if moves.is_empty() {
                break;
            }
            let mover = state.side_to_move();
            for mv in &moves {
                state.apply_move(*mv);
                let king = state.king_square(mover);
                prop_assert!(
                    !state.attacked_by(king, mover.opponent()),
                    "{mv} leaves the king attacked in\n{state}"
                );
                state.undo_move();
            }
            let mv = moves[rng.gen_range(0..moves.len())];
            state.apply_move(mv);
        }
    }

    /// Property: the history stacks stay in lockstep through any playout.
    #[test]
    fn prop_history_stacks_stay_in_lockstep(seed in seed_strategy(), num_moves in move_count_strategy()) {
        let mut state = GameState::new();
        let mut rng = StdRng::seed_from_u64(seed);

        for _ in 0..num_moves {
            prop_assert_eq!(state.rights_history.len(), state.move_history.len() + 1);
            prop_assert_eq!(state.ep_history.len(), state.move_history.len() + 1);
            let moves = state.generate_legal_moves();
            if moves.is_empty() {
                break;
            }
            let mv = moves[rng.gen_range(0..moves.len())];
            state.apply_move(mv);
        }

        while state.undo_move().is_some() {
            prop_assert_eq!(state.rights_history.len(), state.move_history.len() + 1);
            prop_assert_eq!(state.ep_history.len(), state.move_history.len() + 1);
        }
    }
}
