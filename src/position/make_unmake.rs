//! `makeMove` / `undoMove` and the castling-rights bookkeeping they share.
//!
//! The make/undo pair is the hot path of the whole core: a search calls
//! them tens of millions of times per move searched, so both sides trust
//! the move they are given completely. Passing a move that is not
//! pseudo-legal in the current position is undefined behaviour — there is
//! no validation here, by design.

use super::{Position, UndoRecord, MAX_UNDO_DEPTH};
use crate::moves::{Move, MoveType};
use crate::types::{castling_bit, direction, CastlingSide, Color, Piece, PieceType, Square};
use crate::zobrist::ZOBRIST;

/// `clearCastling(square)`: revokes whatever castling right is tied to
/// `square` being vacated — a king or corner rook leaving its home square,
/// or being captured there. Used both for the move's origin and, on
/// captures, for the capture square.
fn revoked_by_vacating(square: Square) -> u8 {
    match square.raw() {
        0x00 => castling_bit(Color::White, CastlingSide::Queenside), // a1
        0x07 => castling_bit(Color::White, CastlingSide::Kingside),  // h1
        0x70 => castling_bit(Color::Black, CastlingSide::Queenside), // a8
        0x77 => castling_bit(Color::Black, CastlingSide::Kingside),  // h8
        0x04 => {
            castling_bit(Color::White, CastlingSide::Kingside)
                | castling_bit(Color::White, CastlingSide::Queenside)
        } // e1
        0x74 => {
            castling_bit(Color::Black, CastlingSide::Kingside)
                | castling_bit(Color::Black, CastlingSide::Queenside)
        } // e8
        _ => 0,
    }
}

/// Rook origin/target for a castling move, keyed by the king's target square.
/// Castling is never Chess960-style here: both corners are hardcoded.
fn castling_rook_squares(king_target: Square) -> (Square, Square) {
    match king_target.raw() {
        0x06 => (Square::new(0, 7), Square::new(0, 5)), // g1: h1 -> f1
        0x02 => (Square::new(0, 0), Square::new(0, 3)), // c1: a1 -> d1
        0x76 => (Square::new(7, 7), Square::new(7, 5)), // g8: h8 -> f8
        0x72 => (Square::new(7, 0), Square::new(7, 3)), // c8: a8 -> d8
        _ => unreachable!("castling move with an unexpected king target"),
    }
}

/// En-passant capture square, given the double-step target and the mover's color.
fn en_passant_capture_square(target: Square, mover: Color) -> Square {
    target.offset(if mover == Color::White { direction::S } else { direction::N })
}

impl Position {
    /// Revokes the castling right(s) tied to `square`, XORing the change
    /// into `zobrist_key` before overwriting `castling_rights` so the key
    /// stays consistent with a from-scratch recomputation. A no-op if
    /// `square` carries no castling right or the right is already gone.
    fn clear_castling(&mut self, square: Square) {
        let revoke = revoked_by_vacating(square);
        let new_rights = self.castling_rights & !revoke;
        if new_rights != self.castling_rights {
            let changed = self.castling_rights ^ new_rights;
            self.zobrist_key ^= ZOBRIST.castling_rights_key(changed);
            self.castling_rights = new_rights;
        }
    }

    /// Applies `mv` to the position. `mv` must be pseudo-legal here;
    /// nothing is checked.
    pub fn make_move(&mut self, mv: Move) {
        debug_assert!(self.states_size < MAX_UNDO_DEPTH, "undo stack overflow");
        self.states[self.states_size] = UndoRecord {
            zobrist_key: self.zobrist_key,
            castling_rights: self.castling_rights,
            en_passant_square: self.en_passant_square,
            halfmove_clock: self.halfmove_clock,
        };
        self.states_size += 1;

        let move_type = mv.move_type();
        let origin = mv.origin();
        let target = mv.target();
        let origin_piece = mv.origin_piece();
        let mover = origin_piece.color;
        let target_piece = mv.target_piece();
        let is_pawn_move = origin_piece.piece_type == PieceType::Pawn;
        let is_capture = target_piece.is_some();

        if target_piece.is_some() {
            let capture_square = if move_type == MoveType::EnPassant {
                en_passant_capture_square(target, mover)
            } else {
                target
            };
            self.remove(capture_square);
            self.clear_castling(capture_square);
        }

        self.remove(origin);
        if move_type == MoveType::PawnPromotion {
            let promoted = mv
                .promotion_piece_type()
                .expect("pawn-promotion move without a promotion piece type");
            self.put(Piece::new(mover, promoted), target);
        } else {
            self.put(origin_piece, target);
        }

        if move_type == MoveType::Castling {
            let (rook_origin, rook_target) = castling_rook_squares(target);
            let rook = self.remove(rook_origin);
            self.put(rook, rook_target);
        }

        self.clear_castling(origin);

        let new_en_passant = if move_type == MoveType::PawnDouble {
            Some(en_passant_capture_square(target, mover))
        } else {
            None
        };
        self.set_en_passant_square(new_en_passant);

        self.set_active_color(mover.opposite());

        self.halfmove_clock = if is_pawn_move || is_capture { 0 } else { self.halfmove_clock + 1 };
        self.halfmove_number += 1;
    }

    /// Reverses `make_move(mv)`, where `mv` is the same move just applied.
    /// `zobrist_key`, `castling_rights`, `en_passant_square`, and
    /// `halfmove_clock` are restored from the undo stack rather than
    /// recomputed — any Zobrist churn from the `remove`/`put` calls below is
    /// simply overwritten, which is cheaper and less error-prone than
    /// threading inverse XORs through every branch.
    pub fn undo_move(&mut self, mv: Move) {
        debug_assert!(self.states_size > 0, "undo with an empty stack");

        self.halfmove_number -= 1;

        let move_type = mv.move_type();
        let origin = mv.origin();
        let target = mv.target();
        let origin_piece = mv.origin_piece();
        let mover = origin_piece.color;
        let target_piece = mv.target_piece();

        self.active_color = mover;

        if move_type == MoveType::Castling {
            let (rook_origin, rook_target) = castling_rook_squares(target);
            let rook = self.remove(rook_target);
            self.put(rook, rook_origin);
        }

        self.remove(target);
        self.put(origin_piece, origin);

        if let Some(captured) = target_piece {
            let capture_square = if move_type == MoveType::EnPassant {
                en_passant_capture_square(target, mover)
            } else {
                target
            };
            self.put(captured, capture_square);
        }

        self.states_size -= 1;
        let record = self.states[self.states_size];
        self.zobrist_key = record.zobrist_key;
        self.castling_rights = record.castling_rights;
        self.en_passant_square = record.en_passant_square;
        self.halfmove_clock = record.halfmove_clock;
    }
}
