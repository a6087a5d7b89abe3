//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `movegen.rs` - Legal move generation and perft counts
//! - `checks.rs` - Check, pin, and double-check handling
//! - `make_unmake.rs` - Apply/undo correctness
//! - `edge_cases.rs` - Castling gating, promotions, terminal positions
//! - `search.rs` - Opponent move selection
//! - `proptest.rs` - Property-based tests

mod movegen;
mod proptest;

use crate::board::{GameState, Move, MoveList, Square};

/// Look up a legal move by coordinate notation ("e2", "e4").
fn find_move(moves: &MoveList, from: &str, to: &str) -> Option<Move> {
    let from: Square = from.parse().unwrap();
    let to: Square = to.parse().unwrap();
    moves.iter().copied().find(|m| m.from == from && m.to == to)
}

/// Apply the legal move `from`-`to`, panicking if it is not legal.
fn play(state: &mut GameState, from: &str, to: &str) {
    let moves = state.generate_legal_moves();
    let mv = find_move(&moves, from, to)
        .unwrap_or_else(|| panic!("expected {from}{to} to be legal in\n{state}"));
    state.apply_move(mv);
}

/// Apply a whole sequence of coordinate-notation moves.
fn play_sequence(state: &mut GameState, moves: &[(&str, &str)]) {
    for (from, to) in moves {
        play(state, from, to);
    }
}

/// Assert that two states agree on everything `undo_move` promises to
/// restore.
fn assert_states_match(actual: &GameState, expected: &GameState) {
    use crate::board::Color;

    assert_eq!(actual.board(), expected.board(), "board mismatch");
    assert_eq!(actual.side_to_move(), expected.side_to_move());
    assert_eq!(actual.castling_rights(), expected.castling_rights());
    assert_eq!(actual.en_passant_target(), expected.en_passant_target());
    assert_eq!(
        actual.king_square(Color::White),
        expected.king_square(Color::White)
    );
    assert_eq!(
        actual.king_square(Color::Black),
        expected.king_square(Color::Black)
    );
    assert_eq!(actual.move_history(), expected.move_history());
}
