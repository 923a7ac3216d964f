//! On-the-fly attack detection.
//!
//! No precomputed attack tables: each query walks the handful of 0x88
//! deltas for the relevant piece families directly off the board. Attack
//! queries happen once per candidate move during legality filtering, not
//! once per generated pseudo-legal move, so the table lookups a denser
//! board would buy aren't worth a second square-indexing scheme alongside
//! the bitboards.

use super::Position;
use crate::types::{direction, Color, PieceType, Square};

const KNIGHT_DELTAS: [i16; 8] = [33, 31, 18, 14, -33, -31, -18, -14];

const KING_DELTAS: [i16; 8] = [
    direction::N,
    direction::S,
    direction::E,
    direction::W,
    direction::NE,
    direction::NW,
    direction::SE,
    direction::SW,
];

const BISHOP_DELTAS: [i16; 4] = [direction::NE, direction::NW, direction::SE, direction::SW];
const ROOK_DELTAS: [i16; 4] = [direction::N, direction::S, direction::E, direction::W];

fn pawn_attack_deltas(attacker: Color) -> [i16; 2] {
    match attacker {
        Color::White => [direction::NW, direction::NE],
        Color::Black => [direction::SW, direction::SE],
    }
}

/// True iff `target` is attacked by some piece of `attacker_color`.
pub(super) fn is_attacked(position: &Position, target: Square, attacker_color: Color) -> bool {
    for delta in pawn_attack_deltas(attacker_color) {
        let from = target.offset(-delta);
        if from.is_valid() && matches(position, from, attacker_color, &[PieceType::Pawn]) {
            return true;
        }
    }

    for &delta in &KNIGHT_DELTAS {
        let from = target.offset(delta);
        if from.is_valid() && matches(position, from, attacker_color, &[PieceType::Knight]) {
            return true;
        }
    }

    for &delta in &KING_DELTAS {
        let from = target.offset(delta);
        if from.is_valid() && matches(position, from, attacker_color, &[PieceType::King]) {
            return true;
        }
    }

    if ray_hits(position, target, &BISHOP_DELTAS, attacker_color, &[PieceType::Bishop, PieceType::Queen]) {
        return true;
    }

    ray_hits(position, target, &ROOK_DELTAS, attacker_color, &[PieceType::Rook, PieceType::Queen])
}

fn matches(position: &Position, square: Square, color: Color, types: &[PieceType]) -> bool {
    match position.piece_at(square) {
        Some(piece) => piece.color == color && types.contains(&piece.piece_type),
        None => false,
    }
}

/// Scans outward from `target` along each delta until off-board or a piece
/// is found; a found piece ends that ray whether or not it matches.
fn ray_hits(
    position: &Position,
    target: Square,
    deltas: &[i16],
    attacker_color: Color,
    attacker_types: &[PieceType],
) -> bool {
    for &delta in deltas {
        let mut square = target.offset(delta);
        while square.is_valid() {
            match position.piece_at(square) {
                Some(piece) => {
                    if piece.color == attacker_color && attacker_types.contains(&piece.piece_type) {
                        return true;
                    }
                    break;
                }
                None => square = square.offset(delta),
            }
        }
    }
    false
}
