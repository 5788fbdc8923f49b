/*
    Laura-Core: a fast and efficient move generator for chess engines.

    Copyright (C) 2024-2025 HansTibberio <hanstiberio@proton.me>

    Laura-Core is free software: you can redistribute it and/or modify
    it under the terms of the GNU General Public License as published by
    the Free Software Foundation, either version 3 of the License, or
    (at your option) any later version.

    Laura-Core is distributed in the hope that it will be useful,
    but WITHOUT ANY WARRANTY; without even the implied warranty of
    MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
    GNU General Public License for more details.

    You should have received a copy of the GNU General Public License
    along with Laura-Core. If not, see <https://www.gnu.org/licenses/>.
*/

use std::fmt;

use crate::errors::PieceParseError;
use crate::Color;

/// The six kinds of chess pieces, ordered `Pawn..King` so that a piece's Zobrist
/// index can be computed as `color * 6 + piece_type`.
#[derive(PartialEq, Eq, Ord, PartialOrd, Copy, Clone, Debug, Hash)]
#[repr(u8)]
pub enum PieceType {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl fmt::Display for PieceType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Pawn => write!(f, "Pawn"),
            Self::Knight => write!(f, "Knight"),
            Self::Bishop => write!(f, "Bishop"),
            Self::Rook => write!(f, "Rook"),
            Self::Queen => write!(f, "Queen"),
            Self::King => write!(f, "King"),
        }
    }
}

impl PieceType {
    /// The four pieces underpromotion and promotion may choose, in the order coordinate
    /// notation accepts them: `q`, `r`, `b`, `n`.
    pub const PROMOTION_PIECES: [PieceType; 4] =
        [PieceType::Queen, PieceType::Rook, PieceType::Bishop, PieceType::Knight];

    /// The character used for this piece type in promotion suffixes (`q|r|b|n`).
    /// Only meaningful for the four promotion-eligible piece types.
    #[inline]
    pub const fn promotion_char(self) -> char {
        match self {
            PieceType::Queen => 'q',
            PieceType::Rook => 'r',
            PieceType::Bishop => 'b',
            PieceType::Knight => 'n',
            _ => '?',
        }
    }

    /// Parses a promotion suffix character (`q|r|b|n`, case-sensitive) into a `PieceType`.
    #[inline]
    pub const fn from_promotion_char(c: char) -> Option<PieceType> {
        match c {
            'q' => Some(PieceType::Queen),
            'r' => Some(PieceType::Rook),
            'b' => Some(PieceType::Bishop),
            'n' => Some(PieceType::Knight),
            _ => None,
        }
    }
}

/// All possible chess pieces, combining both color and piece type: the first six
/// variants are White pieces, the last six are Black, mirroring `PieceType`'s order.
/// A square with no piece is represented as `Option<Piece> = None`, not as a variant here.
#[rustfmt::skip]
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Debug, Hash)]
#[repr(u8)]
pub enum Piece {
    WP, WN, WB, WR, WQ, WK,
    BP, BN, BB, BR, BQ, BK,
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

/// Attempt to convert a FEN piece letter into a `Piece`.
impl TryFrom<char> for Piece {
    type Error = PieceParseError;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c {
            'P' => Ok(Piece::WP),
            'N' => Ok(Piece::WN),
            'B' => Ok(Piece::WB),
            'R' => Ok(Piece::WR),
            'Q' => Ok(Piece::WQ),
            'K' => Ok(Piece::WK),
            'p' => Ok(Piece::BP),
            'n' => Ok(Piece::BN),
            'b' => Ok(Piece::BB),
            'r' => Ok(Piece::BR),
            'q' => Ok(Piece::BQ),
            'k' => Ok(Piece::BK),
            other => Err(PieceParseError::InvalidChar(other)),
        }
    }
}

impl Piece {
    /// Number of distinct piece kinds (6).
    pub const COUNT: usize = 6;

    /// Total number of pieces, both colors combined (6x2 = 12).
    pub const NUM_PIECES: usize = 12;

    /// Builds a `Piece` from a `PieceType` and a `Color`.
    #[inline(always)]
    pub const fn new(piece_type: PieceType, color: Color) -> Self {
        let index: u8 = color as u8 * Self::COUNT as u8 + piece_type as u8;
        unsafe { std::mem::transmute(index) }
    }

    /// Index of this piece in `0..12`, used to address the Zobrist piece-square table
    /// (`color * 6 + piece_type`).
    #[inline(always)]
    pub const fn to_index(self) -> usize {
        self as usize
    }

    /// Returns the `Color` of the piece.
    #[inline(always)]
    pub const fn color(self) -> Color {
        if (self as u8) < Self::COUNT as u8 {
            Color::White
        } else {
            Color::Black
        }
    }

    /// Returns the `PieceType` of the piece (e.g. Pawn, Knight, ...).
    #[inline(always)]
    pub const fn piece_type(self) -> PieceType {
        let index: u8 = self as u8 % Self::COUNT as u8;
        unsafe { std::mem::transmute(index) }
    }

    /// Returns `true` for bishops and knights, the pieces relevant to the
    /// insufficient-material check.
    #[inline(always)]
    pub const fn is_minor(self) -> bool {
        matches!(self.piece_type(), PieceType::Bishop | PieceType::Knight)
    }

    /// Returns the FEN character for the piece: uppercase for White, lowercase for Black.
    #[inline]
    pub const fn to_char(&self) -> char {
        match self {
            Self::WP => 'P',
            Self::WN => 'N',
            Self::WB => 'B',
            Self::WR => 'R',
            Self::WQ => 'Q',
            Self::WK => 'K',
            Self::BP => 'p',
            Self::BN => 'n',
            Self::BB => 'b',
            Self::BR => 'r',
            Self::BQ => 'q',
            Self::BK => 'k',
        }
    }
}
