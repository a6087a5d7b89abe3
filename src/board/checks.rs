//! Check, pin, and square-attack detection.
//!
//! All detection is ray-based from a target square outward: the four
//! orthogonal and four diagonal rays classify sliding attackers (plus
//! king and pawn at distance one), and the knight offsets are probed
//! separately since knights neither slide nor pin.

use super::attack_tables::{knight_targets, RAY_DIRECTIONS};
use super::types::{Color, Piece, Square};
use super::GameState;

/// An own piece that may only move along its pin ray (in either
/// direction) without exposing its king.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Pin {
    pub square: Square,
    pub direction: (isize, isize),
}

/// An enemy piece giving check, with the ray direction from the king
/// toward it. Knight checkers carry the `(0, 0)` sentinel since no ray
/// connects them to the king.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Checker {
    pub square: Square,
    pub direction: (isize, isize),
}

/// Whether `piece` (of color `attacker`) attacks along direction `dir` at
/// ray distance `distance`. `dir` points from the attacked square toward
/// the piece.
fn threatens(piece: Piece, attacker: Color, dir: (isize, isize), distance: usize) -> bool {
    let orthogonal = dir.0 == 0 || dir.1 == 0;
    match piece {
        Piece::Queen => true,
        Piece::Rook => orthogonal,
        Piece::Bishop => !orthogonal,
        Piece::King => distance == 1,
        // A pawn attacks one square diagonally forward, so seen from the
        // attacked square the ray's rank component runs against the
        // pawn's direction of travel.
        Piece::Pawn => distance == 1 && !orthogonal && dir.0 == -attacker.pawn_direction(),
        Piece::Knight => false,
    }
}

impl GameState {
    /// Scan outward from the side-to-move's king: classify direct checks
    /// and register own pieces pinned against the king.
    pub(crate) fn compute_checks_and_pins(&self) -> (bool, Vec<Pin>, Vec<Checker>) {
        let ally = self.side_to_move();
        let enemy = ally.opponent();
        let king_sq = self.king_square(ally);

        let mut in_check = false;
        let mut pins = Vec::new();
        let mut checkers = Vec::new();

        for &dir in &RAY_DIRECTIONS {
            let mut shield: Option<Square> = None;
            for step in 1..8 {
                let Some(sq) = king_sq.offset(dir, step) else {
                    break;
                };
                match self.board.piece_at(sq) {
                    // The king itself is transparent: while a king move is
                    // probed only the king-square cache is relocated, and
                    // the stale king on the board must not block the ray.
                    Some((color, Piece::King)) if color == ally => {}
                    Some((color, _)) if color == ally => {
                        if shield.is_none() {
                            shield = Some(sq);
                        } else {
                            // Two own pieces on the ray: no pin possible
                            break;
                        }
                    }
                    Some((_, piece)) => {
                        if threatens(piece, enemy, dir, step) {
                            match shield {
                                None => {
                                    in_check = true;
                                    checkers.push(Checker {
                                        square: sq,
                                        direction: dir,
                                    });
                                }
                                Some(pinned) => pins.push(Pin {
                                    square: pinned,
                                    direction: dir,
                                }),
                            }
                        }
                        break;
                    }
                    None => {}
                }
            }
        }

        for &sq in knight_targets(king_sq) {
            if self.board.piece_at(sq) == Some((enemy, Piece::Knight)) {
                in_check = true;
                checkers.push(Checker {
                    square: sq,
                    direction: (0, 0),
                });
            }
        }

        (in_check, pins, checkers)
    }

    /// Whether any piece of color `by` attacks `square`. Pieces of the
    /// other color block rays, the attacked square's own content is
    /// ignored.
    pub(crate) fn attacked_by(&self, square: Square, by: Color) -> bool {
        for &dir in &RAY_DIRECTIONS {
            for step in 1..8 {
                let Some(sq) = square.offset(dir, step) else {
                    break;
                };
                if let Some((color, piece)) = self.board.piece_at(sq) {
                    if color == by && threatens(piece, by, dir, step) {
                        return true;
                    }
                    break;
                }
            }
        }

        knight_targets(square)
            .iter()
            .any(|&sq| self.board.piece_at(sq) == Some((by, Piece::Knight)))
    }

    /// Whether the opponent of the side to move attacks `square`. Used
    /// for castling-through-check legality.
    pub(crate) fn square_attacked(&self, square: Square) -> bool {
        self.attacked_by(square, self.side_to_move().opponent())
    }

    /// The pin direction constraining the piece on `sq`, if it is pinned.
    ///
    /// Valid only between `generate_legal_moves`'s own detection pass and
    /// the end of generation.
    pub(crate) fn pin_on(&self, sq: Square) -> Option<(isize, isize)> {
        self.pins
            .iter()
            .find(|pin| pin.square == sq)
            .map(|pin| pin.direction)
    }
}
