//! Move selection.
//!
//! Three opponents of increasing strength:
//! - `Random` picks any legal move,
//! - `Greedy` evaluates each move one ply deep,
//! - `Minimax` runs an exhaustive fixed-depth minimax over the legal-move
//!   tree, sharing one mutable `GameState` through the strict
//!   apply/recurse/undo discipline.
//!
//! Candidate order is shuffled, so tie-breaks vary between seeds; for a
//! fixed RNG seed the chosen move is deterministic.

mod params;

pub use params::{SearchParams, CHECKMATE_SCORE, DEFAULT_DEPTH};

use rand::seq::SliceRandom;
use rand::Rng;

use super::types::{Color, Move, MoveList};
use super::GameState;

/// Opponent strength selector.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SearchMode {
    Random,
    Greedy,
    Minimax,
}

/// Choose a move for the side to move with default parameters at `depth`.
///
/// # Panics
/// Panics if the position has no legal moves; callers must check the
/// terminal flags first.
pub fn choose_move<R: Rng>(
    state: &mut GameState,
    mode: SearchMode,
    depth: u32,
    rng: &mut R,
) -> Move {
    choose_move_with_params(state, mode, &SearchParams::with_depth(depth), rng)
}

/// Choose a move for the side to move.
///
/// # Panics
/// Panics if the position has no legal moves; callers must check the
/// terminal flags first.
pub fn choose_move_with_params<R: Rng>(
    state: &mut GameState,
    mode: SearchMode,
    params: &SearchParams,
    rng: &mut R,
) -> Move {
    let mut moves = state.generate_legal_moves();
    assert!(
        !moves.is_empty(),
        "choose_move requires at least one legal move"
    );
    moves.as_mut_slice().shuffle(rng);

    let chosen = match mode {
        SearchMode::Random => moves[rng.gen_range(0..moves.len())],
        SearchMode::Greedy => greedy_move(state, &moves, params),
        SearchMode::Minimax => minimax_root(state, &moves, params),
    };

    #[cfg(feature = "logging")]
    log::debug!(
        "{} plays {} ({:?}, depth {})",
        state.side_to_move(),
        chosen,
        mode,
        params.depth
    );

    chosen
}

/// One-ply lookahead: evaluate the position after each candidate once and
/// keep the best from the mover's perspective. Checkmating moves win
/// outright.
fn greedy_move(state: &mut GameState, moves: &MoveList, params: &SearchParams) -> Move {
    let sign = state.side_to_move().sign();
    let mut best_move = moves[0];
    let mut best_score = i32::MIN;

    for mv in moves {
        state.apply_move(*mv);
        state.generate_legal_moves();
        let score = if state.is_checkmate() {
            CHECKMATE_SCORE
        } else if state.is_stalemate() {
            sign * params.stalemate_score
        } else {
            sign * state.material_score()
        };
        state.undo_move();

        if score > best_score {
            best_score = score;
            best_move = *mv;
        }
    }

    best_move
}

fn minimax_root(state: &mut GameState, moves: &MoveList, params: &SearchParams) -> Move {
    let maximizing = state.side_to_move() == Color::White;
    let mut best_move = moves[0];
    let mut best_score = if maximizing { i32::MIN } else { i32::MAX };

    for mv in moves {
        state.apply_move(*mv);
        let score = minimax_score(state, params.depth.saturating_sub(1), params);
        state.undo_move();

        let improved = if maximizing {
            score > best_score
        } else {
            score < best_score
        };
        if improved {
            best_score = score;
            best_move = *mv;
        }
    }

    best_move
}

/// White-perspective score of the current position searched to `depth`
/// plies. White maximizes, Black minimizes.
fn minimax_score(state: &mut GameState, depth: u32, params: &SearchParams) -> i32 {
    let moves = state.generate_legal_moves();

    if state.is_checkmate() {
        // The side to move is mated; the score favors the other side.
        return -state.side_to_move().sign() * CHECKMATE_SCORE;
    }
    if state.is_stalemate() {
        return params.stalemate_score;
    }
    if depth == 0 {
        return state.material_score();
    }

    let maximizing = state.side_to_move() == Color::White;
    let mut best = if maximizing { i32::MIN } else { i32::MAX };

    for mv in &moves {
        state.apply_move(*mv);
        let score = minimax_score(state, depth - 1, params);
        state.undo_move();

        best = if maximizing {
            best.max(score)
        } else {
            best.min(score)
        };
    }

    best
}
