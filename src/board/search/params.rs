//! Search configuration.

/// Score assigned to a checkmated position (signed by who is mated).
pub const CHECKMATE_SCORE: i32 = 1000;

/// Default search depth in plies.
pub const DEFAULT_DEPTH: u32 = 2;

/// Tunable knobs for move selection.
///
/// The stalemate value is deliberately configurable: it defaults to a
/// neutral draw score, but callers can bias the engine toward or away
/// from draws.
#[derive(Clone, Copy, Debug)]
pub struct SearchParams {
    /// Minimax depth in plies (ignored by the random and greedy modes)
    pub depth: u32,
    /// Score assigned to a stalemated position
    pub stalemate_score: i32,
}

impl Default for SearchParams {
    fn default() -> Self {
        SearchParams {
            depth: DEFAULT_DEPTH,
            stalemate_score: 0,
        }
    }
}

impl SearchParams {
    /// Default parameters at the given depth.
    #[must_use]
    pub fn with_depth(depth: u32) -> Self {
        SearchParams {
            depth,
            ..SearchParams::default()
        }
    }
}
