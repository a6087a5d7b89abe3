//! Legal move generation and perft counts.

use super::{find_move, play, play_sequence};
use crate::board::{GameState, Piece};

#[test]
fn test_starting_position_has_twenty_moves() {
    let mut state = GameState::new();
    let moves = state.generate_legal_moves();
    assert_eq!(moves.len(), 20);
    assert!(!state.is_in_check());
    assert!(!state.is_checkmate());
    assert!(!state.is_stalemate());
}

#[test]
fn test_black_also_has_twenty_replies() {
    let mut state = GameState::new();
    play(&mut state, "e2", "e4");
    assert_eq!(state.generate_legal_moves().len(), 20);
}

#[test]
fn test_pawn_double_push_only_from_start_rank() {
    let mut state = GameState::new();
    play_sequence(&mut state, &[("e2", "e3"), ("a7", "a6")]);
    let moves = state.generate_legal_moves();
    assert!(find_move(&moves, "e3", "e4").is_some());
    assert!(find_move(&moves, "e3", "e5").is_none());
}

#[test]
fn test_knight_moves_jump_over_pieces() {
    let mut state = GameState::new();
    let moves = state.generate_legal_moves();
    assert!(find_move(&moves, "b1", "a3").is_some());
    assert!(find_move(&moves, "b1", "c3").is_some());
    assert!(find_move(&moves, "b1", "d2").is_none());
}

#[test]
fn test_sliders_blocked_by_own_pieces() {
    let mut state = GameState::new();
    let moves = state.generate_legal_moves();
    assert!(moves.iter().all(|m| m.piece_moved != Piece::Rook));
    assert!(moves.iter().all(|m| m.piece_moved != Piece::Bishop));
    assert!(moves.iter().all(|m| m.piece_moved != Piece::Queen));
}

#[test]
fn test_captures_record_victim() {
    let mut state = GameState::new();
    play_sequence(&mut state, &[("e2", "e4"), ("d7", "d5")]);
    let moves = state.generate_legal_moves();
    let capture = find_move(&moves, "e4", "d5").unwrap();
    assert!(capture.is_capture());
    assert_eq!(capture.piece_captured, Some(Piece::Pawn));
}

#[test]
fn test_perft_startpos_shallow() {
    let mut state = GameState::new();
    assert_eq!(state.perft(1), 20);
    assert_eq!(state.perft(2), 400);
    assert_eq!(state.perft(3), 8902);
}

#[test]
#[ignore = "slow; run with --ignored"]
fn test_perft_startpos_depth_four() {
    let mut state = GameState::new();
    assert_eq!(state.perft(4), 197_281);
}

#[test]
fn test_perft_leaves_state_untouched() {
    let mut state = GameState::new();
    let before = state.clone();
    state.perft(3);
    super::assert_states_match(&state, &before);
}
