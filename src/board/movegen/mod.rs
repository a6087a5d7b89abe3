//! Legal move generation.
//!
//! Generation is pin-aware rather than make-and-verify: check and pin
//! detection runs once up front, each per-piece generator honors its pin
//! constraint, and a single-checker position filters non-king moves down
//! to the block-or-capture square set.

mod kings;
mod knights;
mod pawns;
mod sliders;

use super::attack_tables::{DIAGONAL_DIRECTIONS, ORTHOGONAL_DIRECTIONS, RAY_DIRECTIONS};
use super::checks::Checker;
use super::types::{Move, MoveList, Piece, Square};
use super::GameState;

impl GameState {
    /// Generate every legal move for the side to move.
    ///
    /// Also recomputes the transient `in_check` / `is_checkmate` /
    /// `is_stalemate` status for the position.
    pub fn generate_legal_moves(&mut self) -> MoveList {
        let (in_check, pins, checkers) = self.compute_checks_and_pins();
        self.in_check = in_check;
        self.pins = pins;
        self.checkers = checkers;

        let moves = if !in_check {
            self.generate_pseudo_moves()
        } else if self.checkers.len() == 1 {
            // Single checker: any non-king move must land on the
            // block-or-capture set.
            let pseudo = self.generate_pseudo_moves();
            let valid = self.check_interpositions(self.checkers[0]);
            let mut legal = MoveList::new();
            for mv in &pseudo {
                if mv.piece_moved == Piece::King || valid.contains(&mv.to) {
                    legal.push(*mv);
                }
            }
            legal
        } else {
            // Double check: only the king may move
            let mut legal = MoveList::new();
            let king_sq = self.king_square(self.side_to_move());
            self.generate_king_moves(king_sq, &mut legal);
            legal
        };

        self.checkmate = moves.is_empty() && in_check;
        self.stalemate = moves.is_empty() && !in_check;
        moves
    }

    /// Count leaf nodes of the legal-move tree to `depth` plies. Test and
    /// benchmark oracle for move generation.
    pub fn perft(&mut self, depth: usize) -> u64 {
        if depth == 0 {
            return 1;
        }

        let moves = self.generate_legal_moves();
        if depth == 1 {
            return moves.len() as u64;
        }

        let mut nodes = 0;
        for mv in &moves {
            self.apply_move(*mv);
            nodes += self.perft(depth - 1);
            self.undo_move();
        }

        nodes
    }

    fn generate_pseudo_moves(&mut self) -> MoveList {
        let color = self.side_to_move();
        let mut moves = MoveList::new();

        for rank in 0..8 {
            for file in 0..8 {
                let from = Square(rank, file);
                match self.board.piece_at(from) {
                    Some((c, piece)) if c == color => match piece {
                        Piece::Pawn => self.generate_pawn_moves(from, &mut moves),
                        Piece::Knight => self.generate_knight_moves(from, &mut moves),
                        Piece::Bishop => {
                            self.generate_sliding_moves(from, &DIAGONAL_DIRECTIONS, &mut moves);
                        }
                        Piece::Rook => {
                            self.generate_sliding_moves(from, &ORTHOGONAL_DIRECTIONS, &mut moves);
                        }
                        Piece::Queen => {
                            self.generate_sliding_moves(from, &RAY_DIRECTIONS, &mut moves);
                        }
                        Piece::King => self.generate_king_moves(from, &mut moves),
                    },
                    _ => {}
                }
            }
        }

        moves
    }

    /// Squares on which a non-king move neutralizes `checker`: for a
    /// sliding checker every square between king and checker inclusive of
    /// the checker, for a knight the checker's square alone.
    fn check_interpositions(&self, checker: Checker) -> Vec<Square> {
        if self.board.piece_on(checker.square) == Some(Piece::Knight) {
            return vec![checker.square];
        }

        let king_sq = self.king_square(self.side_to_move());
        let mut squares = Vec::new();
        for step in 1..8 {
            let Some(sq) = king_sq.offset(checker.direction, step) else {
                break;
            };
            squares.push(sq);
            if sq == checker.square {
                break;
            }
        }
        squares
    }

    pub(crate) fn create_move(
        &self,
        from: Square,
        to: Square,
        promotion: Option<Piece>,
        is_castling: bool,
        is_en_passant: bool,
    ) -> Move {
        let piece_moved = self
            .board
            .piece_on(from)
            .expect("move generation starts from an occupied square");

        let piece_captured = if is_en_passant {
            Some(Piece::Pawn)
        } else if !is_castling {
            self.board.piece_on(to)
        } else {
            None
        };

        Move {
            from,
            to,
            piece_moved,
            piece_captured,
            promotion,
            is_castling,
            is_en_passant,
        }
    }

    /// Whether a pin constraint permits movement along `dir`. A pinned
    /// piece may move along its pin axis in either direction.
    pub(crate) fn pin_allows(pin: Option<(isize, isize)>, dir: (isize, isize)) -> bool {
        pin.map_or(true, |p| p == dir || p == (-dir.0, -dir.1))
    }
}
