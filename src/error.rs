//! Error types for the position core.
//!
//! Parser errors (`FenError`) are the only error kind the core ever returns
//! to a caller; out-of-range primitive conversions are programmer error and
//! panic instead (see the module docs on `types`).

use std::fmt;

/// Error type for FEN parsing failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FenError {
    /// FEN string has the wrong number of whitespace-separated fields.
    WrongFieldCount { found: usize },
    /// Invalid piece character in the piece-placement field.
    InvalidPiece { char: char },
    /// A rank in the piece-placement field named more than 8 files.
    TooManyFiles { rank: usize },
    /// The piece-placement field did not name exactly 8 ranks.
    WrongRankCount { found: usize },
    /// Side-to-move field was not `w` or `b`.
    InvalidActiveColor { found: String },
    /// Castling-availability field contained a character outside `KQkqA-Ha-h-`.
    InvalidCastling { char: char },
    /// En-passant field was not `-` or a valid algebraic square.
    InvalidEnPassant { found: String },
    /// En-passant square named a rank inconsistent with the side to move.
    EnPassantWrongRank { found: String },
    /// Halfmove clock field did not parse as a non-negative integer.
    InvalidHalfmoveClock { found: String },
    /// Fullmove number field did not parse as a positive integer.
    InvalidFullmoveNumber { found: String },
}

impl fmt::Display for FenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FenError::WrongFieldCount { found } => {
                write!(f, "FEN must have 4, 5, or 6 fields, found {found}")
            }
            FenError::InvalidPiece { char } => {
                write!(f, "invalid piece character '{char}' in FEN")
            }
            FenError::TooManyFiles { rank } => {
                write!(f, "rank {rank} names more than 8 files")
            }
            FenError::WrongRankCount { found } => {
                write!(f, "piece placement must name 8 ranks, found {found}")
            }
            FenError::InvalidActiveColor { found } => {
                write!(f, "active color must be 'w' or 'b', found '{found}'")
            }
            FenError::InvalidCastling { char } => {
                write!(f, "invalid castling character '{char}'")
            }
            FenError::InvalidEnPassant { found } => {
                write!(f, "invalid en-passant square '{found}'")
            }
            FenError::EnPassantWrongRank { found } => {
                write!(f, "en-passant square '{found}' is on the wrong rank for the side to move")
            }
            FenError::InvalidHalfmoveClock { found } => {
                write!(f, "invalid halfmove clock '{found}'")
            }
            FenError::InvalidFullmoveNumber { found } => {
                write!(f, "invalid fullmove number '{found}'")
            }
        }
    }
}

impl std::error::Error for FenError {}
