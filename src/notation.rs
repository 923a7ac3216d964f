//! Forsyth-Edwards Notation: parsing a `Position` from a FEN string and
//! emitting one back.
//!
//! Parsing never panics; every malformed input is reported through
//! [`FenError`]. Emitting is infallible — any `Position` reachable through
//! this module's own parser round-trips.

use std::str::FromStr;

use crate::error::FenError;
use crate::position::Position;
use crate::types::{
    castling_bit, CastlingSide, Color, Piece, PieceType, Square, CASTLE_BLACK_KINGSIDE,
    CASTLE_BLACK_QUEENSIDE, CASTLE_WHITE_KINGSIDE, CASTLE_WHITE_QUEENSIDE,
};

/// Resolves a Shredder-FEN castling letter (a rook's file, rather than `K`/`Q`)
/// to the matching castling-right bit by comparing the rook's file against
/// the file the color's king currently occupies.
fn shredder_bit(position: &Position, color: Color, file_char: char) -> u8 {
    let rook_file = file_char as u8 - b'a';
    let king_file = position.king_square(color).file();
    let side = if rook_file > king_file {
        CastlingSide::Kingside
    } else {
        CastlingSide::Queenside
    };
    castling_bit(color, side)
}

impl Position {
    /// Parses a FEN string, accepting 4, 5, or 6 whitespace-separated
    /// fields (halfmove clock and fullmove number are optional, defaulting
    /// to 0 and 1).
    pub fn try_from_fen(fen: &str) -> Result<Position, FenError> {
        let fields: Vec<&str> = fen.split_whitespace().collect();
        if !(4..=6).contains(&fields.len()) {
            #[cfg(feature = "logging")]
            log::debug!("rejecting FEN with {} fields: {fen:?}", fields.len());
            return Err(FenError::WrongFieldCount { found: fields.len() });
        }

        let mut position = Position::empty();

        let ranks: Vec<&str> = fields[0].split('/').collect();
        if ranks.len() != 8 {
            return Err(FenError::WrongRankCount { found: ranks.len() });
        }
        for (rank_from_top, rank_str) in ranks.iter().enumerate() {
            let rank = 7 - rank_from_top as u8;
            let mut file = 0u8;
            for c in rank_str.chars() {
                if let Some(skip) = c.to_digit(10) {
                    if !(1..=8).contains(&skip) {
                        return Err(FenError::TooManyFiles { rank: rank_from_top });
                    }
                    file += skip as u8;
                    if file > 8 {
                        return Err(FenError::TooManyFiles { rank: rank_from_top });
                    }
                    continue;
                }
                if file >= 8 {
                    return Err(FenError::TooManyFiles { rank: rank_from_top });
                }
                let piece_type =
                    PieceType::from_fen_char(c).ok_or(FenError::InvalidPiece { char: c })?;
                let color = if c.is_uppercase() { Color::White } else { Color::Black };
                position.put(Piece::new(color, piece_type), Square::new(rank, file));
                file += 1;
            }
        }

        let active_color = match fields[1] {
            "w" => Color::White,
            "b" => Color::Black,
            other => {
                return Err(FenError::InvalidActiveColor { found: other.to_string() });
            }
        };
        position.set_active_color(active_color);

        if fields[2] != "-" {
            for c in fields[2].chars() {
                let bit = match c {
                    'K' => CASTLE_WHITE_KINGSIDE,
                    'Q' => CASTLE_WHITE_QUEENSIDE,
                    'k' => CASTLE_BLACK_KINGSIDE,
                    'q' => CASTLE_BLACK_QUEENSIDE,
                    'A'..='H' => shredder_bit(&position, Color::White, c.to_ascii_lowercase()),
                    'a'..='h' => shredder_bit(&position, Color::Black, c),
                    _ => return Err(FenError::InvalidCastling { char: c }),
                };
                position.set_castling_right(bit);
            }
        }

        if fields[3] != "-" {
            let square = Square::from_algebraic(fields[3])
                .ok_or_else(|| FenError::InvalidEnPassant { found: fields[3].to_string() })?;
            let expected_rank = if active_color == Color::Black { 2 } else { 5 };
            if square.rank() != expected_rank {
                return Err(FenError::EnPassantWrongRank { found: fields[3].to_string() });
            }
            position.set_en_passant_square(Some(square));
        }

        let halfmove_clock = if fields.len() >= 5 {
            fields[4]
                .parse::<u32>()
                .map_err(|_| FenError::InvalidHalfmoveClock { found: fields[4].to_string() })?
        } else {
            0
        };
        position.set_halfmove_clock(halfmove_clock);

        let fullmove_number = if fields.len() == 6 {
            let n = fields[5]
                .parse::<u32>()
                .map_err(|_| FenError::InvalidFullmoveNumber { found: fields[5].to_string() })?;
            if n == 0 {
                return Err(FenError::InvalidFullmoveNumber { found: fields[5].to_string() });
            }
            n
        } else {
            1
        };
        position.set_fullmove_number(fullmove_number);

        Ok(position)
    }

    /// Parses a FEN string.
    ///
    /// # Panics
    /// Panics if `fen` is malformed. Use [`Position::try_from_fen`] for
    /// fallible parsing.
    #[must_use]
    pub fn from_fen(fen: &str) -> Position {
        Self::try_from_fen(fen).expect("invalid FEN string")
    }

    /// Emits this position as a FEN string, always with all six fields.
    #[must_use]
    pub fn to_fen(&self) -> String {
        let mut ranks = Vec::with_capacity(8);
        for rank in (0..8u8).rev() {
            let mut row = String::new();
            let mut empty = 0u8;
            for file in 0..8u8 {
                match self.piece_at(Square::new(rank, file)) {
                    Some(piece) => {
                        if empty > 0 {
                            row.push_str(&empty.to_string());
                            empty = 0;
                        }
                        row.push(piece.piece_type.to_fen_char(piece.color));
                    }
                    None => empty += 1,
                }
            }
            if empty > 0 {
                row.push_str(&empty.to_string());
            }
            ranks.push(row);
        }

        let active = match self.active_color() {
            Color::White => "w",
            Color::Black => "b",
        };

        let mut castling = String::new();
        if self.castling_rights() & CASTLE_WHITE_KINGSIDE != 0 {
            castling.push('K');
        }
        if self.castling_rights() & CASTLE_WHITE_QUEENSIDE != 0 {
            castling.push('Q');
        }
        if self.castling_rights() & CASTLE_BLACK_KINGSIDE != 0 {
            castling.push('k');
        }
        if self.castling_rights() & CASTLE_BLACK_QUEENSIDE != 0 {
            castling.push('q');
        }
        if castling.is_empty() {
            castling.push('-');
        }

        let en_passant = self
            .en_passant_square()
            .map_or_else(|| "-".to_string(), |sq| sq.to_string());

        format!(
            "{} {} {} {} {} {}",
            ranks.join("/"),
            active,
            castling,
            en_passant,
            self.halfmove_clock(),
            self.fullmove_number(),
        )
    }
}

impl FromStr for Position {
    type Err = FenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Position::try_from_fen(s)
    }
}
