//! Process-wide Zobrist key table.
//!
//! Initialised once, lazily, from a deterministic seed so that hashes are
//! reproducible across runs (useful for replaying a reported bug). Read-only
//! after construction and freely shareable across threads — nothing here
//! ever mutates after `ZOBRIST` is first forced.
//!
//! The castling-rights table is built from four independent single-bit keys
//! XORed together for composite masks, so that `clearCastling`-style updates
//! can XOR in just the bits that changed (see `castling_rights_key`) rather
//! than looking up a 16-entry table by the old/new mask pair.

use rand::prelude::*;

use crate::types::{Color, Piece, Square};

const RNG_SEED: u64 = 0x5A66_1E55_50A1_7D15;

pub(crate) struct ZobristKeys {
    /// `piece_keys[piece.zobrist_index()][dense_square_index]`
    piece_keys: [[u64; 64]; 12],
    /// One key per castling-right bit (white-K, white-Q, black-K, black-Q).
    castling_bit_keys: [u64; 4],
    /// `en_passant_keys[dense_square_index]`
    en_passant_keys: [u64; 64],
    pub(crate) active_color_key: u64,
}

#[inline]
fn dense_square_index(sq: Square) -> usize {
    sq.rank() as usize * 8 + sq.file() as usize
}

impl ZobristKeys {
    fn new() -> Self {
        let mut rng = StdRng::seed_from_u64(RNG_SEED);

        let mut piece_keys = [[0u64; 64]; 12];
        for piece in &mut piece_keys {
            for key in piece.iter_mut() {
                *key = rng.gen();
            }
        }

        let mut castling_bit_keys = [0u64; 4];
        for key in &mut castling_bit_keys {
            *key = rng.gen();
        }

        let mut en_passant_keys = [0u64; 64];
        for key in &mut en_passant_keys {
            *key = rng.gen();
        }

        ZobristKeys {
            piece_keys,
            castling_bit_keys,
            en_passant_keys,
            active_color_key: rng.gen(),
        }
    }

    #[inline]
    pub(crate) fn piece_key(&self, piece: Piece, sq: Square) -> u64 {
        self.piece_keys[piece.zobrist_index()][dense_square_index(sq)]
    }

    #[inline]
    pub(crate) fn en_passant_key(&self, sq: Square) -> u64 {
        self.en_passant_keys[dense_square_index(sq)]
    }

    /// XOR of the single-bit keys named by `mask`. Decomposable under XOR:
    /// `castling_rights_key(a) ^ castling_rights_key(b) == castling_rights_key(a ^ b)`,
    /// which is exactly what lets `clearCastling` XOR in only the bits that
    /// were revoked.
    #[inline]
    pub(crate) fn castling_rights_key(&self, mask: u8) -> u64 {
        let mut key = 0u64;
        for (bit, &k) in self.castling_bit_keys.iter().enumerate() {
            if mask & (1 << bit) != 0 {
                key ^= k;
            }
        }
        key
    }
}

pub(crate) static ZOBRIST: std::sync::LazyLock<ZobristKeys> = std::sync::LazyLock::new(ZobristKeys::new);

/// Compute a Zobrist key from scratch for the given board contents and state.
/// Used by tests (and available to callers) to check incremental maintenance
/// against a from-scratch recomputation.
#[must_use]
pub fn compute_key(
    occupied: impl Iterator<Item = (Square, Piece)>,
    castling_rights: u8,
    en_passant_square: Option<Square>,
    active_color: Color,
) -> u64 {
    let mut key = 0u64;
    for (sq, piece) in occupied {
        key ^= ZOBRIST.piece_key(piece, sq);
    }
    key ^= ZOBRIST.castling_rights_key(castling_rights);
    if let Some(sq) = en_passant_square {
        key ^= ZOBRIST.en_passant_key(sq);
    }
    if active_color == Color::Black {
        key ^= ZOBRIST.active_color_key;
    }
    key
}
