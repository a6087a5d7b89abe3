//! Precomputed per-square target tables for the leaper pieces.

use once_cell::sync::Lazy;

use super::types::Square;

/// The four orthogonal ray directions followed by the four diagonals.
pub(crate) const RAY_DIRECTIONS: [(isize, isize); 8] = [
    (-1, 0),
    (0, -1),
    (1, 0),
    (0, 1),
    (-1, -1),
    (-1, 1),
    (1, -1),
    (1, 1),
];

pub(crate) const ORTHOGONAL_DIRECTIONS: [(isize, isize); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];

pub(crate) const DIAGONAL_DIRECTIONS: [(isize, isize); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];

pub(crate) const KNIGHT_DELTAS: [(isize, isize); 8] = [
    (2, 1),
    (2, -1),
    (-2, 1),
    (-2, -1),
    (1, 2),
    (1, -2),
    (-1, 2),
    (-1, -2),
];

static KNIGHT_TARGETS: Lazy<[Vec<Square>; 64]> = Lazy::new(|| targets_for(&KNIGHT_DELTAS));

static KING_TARGETS: Lazy<[Vec<Square>; 64]> = Lazy::new(|| targets_for(&RAY_DIRECTIONS));

fn targets_for(deltas: &[(isize, isize)]) -> [Vec<Square>; 64] {
    std::array::from_fn(|idx| {
        let from = Square::from_index(idx);
        deltas
            .iter()
            .filter_map(|&d| from.offset(d, 1))
            .collect()
    })
}

/// On-board squares a knight on `from` attacks (and, symmetrically, the
/// squares a checking knight could occupy).
#[inline]
pub(crate) fn knight_targets(from: Square) -> &'static [Square] {
    &KNIGHT_TARGETS[from.as_index()]
}

/// On-board squares adjacent to `from`.
#[inline]
pub(crate) fn king_targets(from: Square) -> &'static [Square] {
    &KING_TARGETS[from.as_index()]
}
