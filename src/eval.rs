//! Static evaluation: material plus mobility, from the side-to-move's
//! perspective.
//!
//! Deliberately simple — no piece-square tables, no king safety, no pawn
//! structure, no tapering. Those live in a full evaluator built on top of
//! this core; here the only job is to give a cheap, reasonably-shaped leaf
//! score that a search driver can call tens of millions of times.

use crate::config::evaluation;
use crate::position::Position;
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

/// `position.material(color)` plus a bishop-pair bonus. The bonus lives
/// here, not in `Position::material`, which stays a plain sum of piece
/// values per the core's invariants.
fn material_with_bishop_pair(position: &Position, color: Color) -> i32 {
    let bonus = if position.pieces(color, PieceType::Bishop).size() >= 2 {
        evaluation::BISHOP_PAIR_BONUS
    } else {
        0
    };
    position.material(color) + bonus
}

fn count_step_targets(origin: Square, deltas: &[i16]) -> i32 {
    deltas.iter().filter(|&&delta| origin.offset(delta).is_valid()).count() as i32
}

/// Counts reachable squares along each ray, stopping at (and counting) the
/// first occupied square.
fn count_ray_targets(position: &Position, origin: Square, deltas: &[i16]) -> i32 {
    let mut count = 0;
    for &delta in deltas {
        let mut square = origin.offset(delta);
        while square.is_valid() {
            count += 1;
            if position.piece_at(square).is_some() {
                break;
            }
            square = square.offset(delta);
        }
    }
    count
}

/// Number of squares a `piece_type` piece of `color` could move to, summed
/// over every piece of that type on the board. Pawns and kings carry no
/// mobility weight, so callers never ask for their mobility.
fn mobility(position: &Position, color: Color, piece_type: PieceType) -> i32 {
    position
        .pieces(color, piece_type)
        .iter()
        .map(|origin| match piece_type {
            PieceType::Knight => count_step_targets(origin, &KNIGHT_DELTAS),
            PieceType::King => count_step_targets(origin, &KING_DELTAS),
            PieceType::Bishop => count_ray_targets(position, origin, &BISHOP_DELTAS),
            PieceType::Rook => count_ray_targets(position, origin, &ROOK_DELTAS),
            PieceType::Queen => {
                count_ray_targets(position, origin, &BISHOP_DELTAS)
                    + count_ray_targets(position, origin, &ROOK_DELTAS)
            }
            PieceType::Pawn => 0,
        })
        .sum()
}

fn mobility_weight(piece_type: PieceType) -> i32 {
    match piece_type {
        PieceType::Knight => evaluation::KNIGHT_MOBILITY_WEIGHT,
        PieceType::Bishop => evaluation::BISHOP_MOBILITY_WEIGHT,
        PieceType::Rook => evaluation::ROOK_MOBILITY_WEIGHT,
        PieceType::Queen => evaluation::QUEEN_MOBILITY_WEIGHT,
        PieceType::Pawn | PieceType::King => 0,
    }
}

fn weighted_mobility(position: &Position, color: Color) -> i32 {
    [PieceType::Knight, PieceType::Bishop, PieceType::Rook, PieceType::Queen]
        .into_iter()
        .map(|pt| mobility(position, color, pt) * mobility_weight(pt))
        .sum()
}

/// Centipawn score from `position.active_color()`'s perspective.
#[must_use]
pub fn evaluate(position: &Position) -> i32 {
    let me = position.active_color();
    let opponent = me.opposite();

    let material_score = (material_with_bishop_pair(position, me)
        - material_with_bishop_pair(position, opponent))
        * evaluation::MATERIAL_WEIGHT_PCT
        / 100;

    let mobility_score = (weighted_mobility(position, me) - weighted_mobility(position, opponent))
        * evaluation::MOBILITY_WEIGHT_PCT
        / 100;

    material_score + mobility_score + evaluation::TEMPO
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Piece;

    #[test]
    fn side_to_move_with_more_material_scores_higher() {
        let mut position = Position::empty();
        position.put(Piece::new(Color::White, PieceType::King), Square::new(0, 4));
        position.put(Piece::new(Color::Black, PieceType::King), Square::new(7, 4));
        position.put(Piece::new(Color::White, PieceType::Queen), Square::new(0, 3));
        assert!(evaluate(&position) > 0);
    }

    #[test]
    fn bishop_pair_bonus_applies_at_two_bishops_not_one() {
        let mut one_bishop = Position::empty();
        one_bishop.put(Piece::new(Color::White, PieceType::King), Square::new(0, 4));
        one_bishop.put(Piece::new(Color::Black, PieceType::King), Square::new(7, 4));
        one_bishop.put(Piece::new(Color::White, PieceType::Bishop), Square::new(0, 2));
        let one_bishop_score = evaluate(&one_bishop);

        let mut two_bishops = one_bishop.clone();
        two_bishops.put(Piece::new(Color::White, PieceType::Bishop), Square::new(0, 5));
        let jump = evaluate(&two_bishops) - one_bishop_score;

        assert!(jump > PieceType::Bishop.value());
    }

    #[test]
    fn symmetric_positions_favor_the_side_to_move_only_by_tempo() {
        let mut position = Position::empty();
        position.put(Piece::new(Color::White, PieceType::King), Square::new(0, 4));
        position.put(Piece::new(Color::Black, PieceType::King), Square::new(7, 4));
        position.put(Piece::new(Color::White, PieceType::Rook), Square::new(0, 0));
        position.put(Piece::new(Color::Black, PieceType::Rook), Square::new(7, 0));
        assert_eq!(evaluate(&position), evaluation::TEMPO);
    }
}
