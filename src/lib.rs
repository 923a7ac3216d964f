//! Chess position core: board representation, move encoding, make/undo with
//! incremental Zobrist hashing, attack detection, draw detection, FEN
//! notation, and a material-plus-mobility evaluator.
//!
//! This crate is deliberately *just* the core a search driver sits on top
//! of: it has no move generator, no search, no UCI front end, and no
//! persistent tables. See [`position::Position`] for the central type.

pub mod bitboard;
pub mod config;
pub mod error;
pub mod eval;
pub mod moves;
pub mod notation;
pub mod position;
pub mod types;
pub mod zobrist;

pub use bitboard::Bitboard;
pub use error::FenError;
pub use moves::{Move, MoveType};
pub use position::Position;
pub use types::{
    CastlingRight, CastlingSide, Color, Piece, PieceType, Square, CASTLE_ALL,
    CASTLE_BLACK_KINGSIDE, CASTLE_BLACK_QUEENSIDE, CASTLE_WHITE_KINGSIDE, CASTLE_WHITE_QUEENSIDE,
};
