//! Packed move representation.
//!
//! A `Move` is a single 32-bit integer. Bit layout, LSB first:
//!
//! | field               | bits | width |
//! |---------------------|------|-------|
//! | move type           | 0-2  | 3     |
//! | origin square       | 3-9  | 7     |
//! | target square       | 10-16| 7     |
//! | origin piece        | 17-20| 4     |
//! | target piece        | 21-24| 4     |
//! | promotion piece type| 25-27| 3     |
//!
//! Unused fields carry reserved sentinels (`NO_PIECE_BITS`, `NO_PROMOTION_BITS`)
//! rather than zero, since zero is a valid square/piece/type index. All
//! accessors are pure bit extractions — no allocation, no fallible paths.

use crate::types::{Color, Piece, PieceType, Square};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum MoveType {
    Normal = 0,
    PawnDouble = 1,
    PawnPromotion = 2,
    EnPassant = 3,
    Castling = 4,
}

impl MoveType {
    const fn from_bits(bits: u32) -> MoveType {
        match bits {
            0 => MoveType::Normal,
            1 => MoveType::PawnDouble,
            2 => MoveType::PawnPromotion,
            3 => MoveType::EnPassant,
            4 => MoveType::Castling,
            _ => unreachable!(),
        }
    }
}

const TYPE_SHIFT: u32 = 0;
const ORIGIN_SHIFT: u32 = 3;
const TARGET_SHIFT: u32 = 10;
const ORIGIN_PIECE_SHIFT: u32 = 17;
const TARGET_PIECE_SHIFT: u32 = 21;
const PROMOTION_SHIFT: u32 = 25;

const TYPE_MASK: u32 = 0b111;
const SQUARE_MASK: u32 = 0x7f;
const PIECE_MASK: u32 = 0xf;
const PROMOTION_MASK: u32 = 0b111;

/// Sentinel stored in the target-piece field when the move is not a capture.
const NO_PIECE_BITS: u32 = 0xf;
/// Sentinel stored in the promotion field when the move is not a promotion.
const NO_PROMOTION_BITS: u32 = 0b111;

#[inline]
const fn piece_to_bits(piece: Piece) -> u32 {
    piece.zobrist_index() as u32
}

#[inline]
const fn piece_from_bits(bits: u32) -> Piece {
    let color = if bits < 6 { Color::White } else { Color::Black };
    let piece_type = PieceType::from_index((bits % 6) as usize);
    Piece::new(color, piece_type)
}

/// A move, packed into a single 32-bit integer.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Move(u32);

impl Move {
    /// Build a move. `target_piece` is `None` for quiet moves and
    /// double-pawn-pushes. For an en-passant capture it names the captured
    /// pawn even though that pawn does not sit on `target` — make/undo reads
    /// the move type to find the real capture square. `promotion` is `None`
    /// unless `move_type` is `PawnPromotion`.
    #[must_use]
    pub fn new(
        move_type: MoveType,
        origin: Square,
        target: Square,
        origin_piece: Piece,
        target_piece: Option<Piece>,
        promotion: Option<PieceType>,
    ) -> Self {
        let target_piece_bits = target_piece.map_or(NO_PIECE_BITS, piece_to_bits);
        let promotion_bits = promotion.map_or(NO_PROMOTION_BITS, |p| p.index() as u32);

        Move(
            ((move_type as u32) << TYPE_SHIFT)
                | ((origin.raw() as u32) << ORIGIN_SHIFT)
                | ((target.raw() as u32) << TARGET_SHIFT)
                | (piece_to_bits(origin_piece) << ORIGIN_PIECE_SHIFT)
                | (target_piece_bits << TARGET_PIECE_SHIFT)
                | (promotion_bits << PROMOTION_SHIFT),
        )
    }

    #[inline]
    #[must_use]
    pub const fn move_type(self) -> MoveType {
        MoveType::from_bits((self.0 >> TYPE_SHIFT) & TYPE_MASK)
    }

    #[inline]
    #[must_use]
    pub const fn origin(self) -> Square {
        Square::from_raw(((self.0 >> ORIGIN_SHIFT) & SQUARE_MASK) as u8)
    }

    #[inline]
    #[must_use]
    pub const fn target(self) -> Square {
        Square::from_raw(((self.0 >> TARGET_SHIFT) & SQUARE_MASK) as u8)
    }

    #[inline]
    #[must_use]
    pub const fn origin_piece(self) -> Piece {
        piece_from_bits((self.0 >> ORIGIN_PIECE_SHIFT) & PIECE_MASK)
    }

    #[inline]
    #[must_use]
    pub const fn target_piece(self) -> Option<Piece> {
        let bits = (self.0 >> TARGET_PIECE_SHIFT) & PIECE_MASK;
        if bits == NO_PIECE_BITS {
            None
        } else {
            Some(piece_from_bits(bits))
        }
    }

    #[inline]
    #[must_use]
    pub const fn promotion_piece_type(self) -> Option<PieceType> {
        let bits = (self.0 >> PROMOTION_SHIFT) & PROMOTION_MASK;
        if bits == NO_PROMOTION_BITS {
            None
        } else {
            Some(PieceType::from_index(bits as usize))
        }
    }

    #[inline]
    #[must_use]
    pub const fn is_capture(self) -> bool {
        self.target_piece().is_some()
    }
}

impl std::fmt::Display for Move {
    /// UCI long algebraic form: `e2e4`, `e7e8q`.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.origin(), self.target())?;
        if let Some(pt) = self.promotion_piece_type() {
            write!(f, "{}", pt.to_fen_char(Color::Black))?;
        }
        Ok(())
    }
}

impl std::fmt::Debug for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Move({}, {:?})", self, self.move_type())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accessors_roundtrip_quiet_move() {
        let origin = Square::new(1, 4);
        let target = Square::new(3, 4);
        let pawn = Piece::new(Color::White, PieceType::Pawn);
        let m = Move::new(MoveType::PawnDouble, origin, target, pawn, None, None);
        assert_eq!(m.origin(), origin);
        assert_eq!(m.target(), target);
        assert_eq!(m.origin_piece(), pawn);
        assert_eq!(m.target_piece(), None);
        assert_eq!(m.promotion_piece_type(), None);
        assert!(!m.is_capture());
        assert_eq!(m.to_string(), "e2e4");
    }

    #[test]
    fn accessors_roundtrip_promotion_capture() {
        let origin = Square::new(6, 0);
        let target = Square::new(7, 1);
        let pawn = Piece::new(Color::White, PieceType::Pawn);
        let rook = Piece::new(Color::Black, PieceType::Rook);
        let m = Move::new(
            MoveType::PawnPromotion,
            origin,
            target,
            pawn,
            Some(rook),
            Some(PieceType::Queen),
        );
        assert_eq!(m.target_piece(), Some(rook));
        assert_eq!(m.promotion_piece_type(), Some(PieceType::Queen));
        assert!(m.is_capture());
        assert_eq!(m.to_string(), "a7b8q");
    }

    #[test]
    fn en_passant_names_the_captured_pawn() {
        let origin = Square::new(4, 4);
        let target = Square::new(5, 3);
        let pawn = Piece::new(Color::White, PieceType::Pawn);
        let captured = Piece::new(Color::Black, PieceType::Pawn);
        let m = Move::new(MoveType::EnPassant, origin, target, pawn, Some(captured), None);
        assert!(m.is_capture());
        assert_eq!(m.target_piece(), Some(captured));
    }
}
