//! End-to-end check of the public API: build a position, ask the engine
//! for a move, and confirm it delivers mate.

use rand::rngs::StdRng;
use rand::SeedableRng;

use chess_rules::board::prelude::*;

#[test]
fn engine_plays_the_back_rank_mate() {
    let mut state = GameStateBuilder::new()
        .piece(Square(0, 0), Color::White, Piece::Rook)
        .piece(Square(0, 1), Color::White, Piece::King)
        .piece(Square(7, 7), Color::Black, Piece::King)
        .piece(Square(6, 6), Color::Black, Piece::Pawn)
        .piece(Square(6, 7), Color::Black, Piece::Pawn)
        .build()
        .unwrap();

    let mut rng = StdRng::seed_from_u64(2024);
    let mv = choose_move(&mut state, SearchMode::Minimax, 2, &mut rng);
    assert_eq!(mv.notation(), "a1a8");

    state.apply_move(mv);
    assert!(state.generate_legal_moves().is_empty());
    assert!(state.is_checkmate());
}

#[test]
fn full_game_between_two_random_players_stays_legal() {
    let mut state = GameState::new();
    let mut rng = StdRng::seed_from_u64(7);

    for _ in 0..200 {
        let moves = state.generate_legal_moves();
        if moves.is_empty() {
            assert!(state.is_checkmate() || state.is_stalemate());
            break;
        }
        let mv = choose_move(&mut state, SearchMode::Random, 0, &mut rng);
        assert!(moves.contains(&mv));
        state.apply_move(mv);
    }
}
