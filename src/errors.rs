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

//! The error surface of the core: four named kinds (`ParseFen`, `ParseMove`, `IllegalMove`,
//! `MissingPromotion`), each carried by its own Rust type rather than one catch-all enum, so
//! that callers pattern-match on the failure they actually care about. Every other failure in
//! the core is a bug, not a reported error.

use core::fmt;

/// Errors that can occur while parsing castling rights out of a FEN string.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum CastleRightsParseError {
    /// An invalid character was encountered while parsing castling rights (not `KQkq-`).
    InvalidChar(char),
    /// `-` must be the only character.
    InvalidDashUsage,
}

impl fmt::Display for CastleRightsParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CastleRightsParseError::InvalidChar(ch) => {
                write!(f, "invalid castling character '{}'", ch)
            }
            CastleRightsParseError::InvalidDashUsage => {
                write!(f, "'-' must be the only character in castling rights")
            }
        }
    }
}

/// Errors that can occur when parsing a chess piece from a FEN letter.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PieceParseError {
    /// The character does not correspond to any valid chess piece.
    InvalidChar(char),
}

impl fmt::Display for PieceParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PieceParseError::InvalidChar(c) => write!(f, "invalid piece character '{}'", c),
        }
    }
}

/// Errors that can occur when parsing a square from algebraic notation.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SquareParseError {
    /// The input does not have exactly two characters.
    InvalidLength,
    /// The square name is not a valid algebraic square (a1-h8).
    InvalidName,
}

impl fmt::Display for SquareParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SquareParseError::InvalidLength => {
                write!(f, "invalid square length (expected exactly 2 characters)")
            }
            SquareParseError::InvalidName => write!(f, "invalid square name"),
        }
    }
}

/// The `ParseFen` error kind: a FEN string that is malformed, as a structural or
/// per-field failure. Carries the six-field FEN that was rejected so the caller can
/// see the offending input alongside the specific reason.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseFenError {
    /// The FEN string (or fragment) that failed to parse.
    pub fen: String,
    /// The specific reason parsing failed.
    pub kind: FenErrorKind,
}

impl fmt::Display for ParseFenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid FEN \"{}\": {}", self.fen, self.kind)
    }
}

impl std::error::Error for ParseFenError {}

/// The specific way a FEN string failed to parse. See §6.1 of the format contract:
/// six whitespace-separated fields, each independently validated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FenErrorKind {
    /// The FEN string does not contain exactly six whitespace-separated fields.
    WrongFieldCount(usize),
    /// A rank in the piece-placement field does not sum to exactly 8 squares.
    InvalidRowLength,
    /// The piece-placement field contains a `/` in the wrong place, or too many/few ranks.
    InvalidBoardLayout,
    /// An invalid piece character was found in the piece-placement field.
    InvalidPiece(PieceParseError),
    /// The side-to-move field is not `w` or `b`.
    InvalidSideToMove,
    /// The castling-rights field is invalid.
    InvalidCastlingRights(CastleRightsParseError),
    /// The en-passant target square is syntactically invalid.
    InvalidEnPassantSquare(SquareParseError),
    /// The halfmove clock is not a base-10 integer in `[0, 255]`.
    InvalidHalfmoveClock,
    /// The fullmove number is not a base-10 integer in `[1, 65535]`.
    InvalidFullmoveNumber,
}

impl fmt::Display for FenErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FenErrorKind::WrongFieldCount(n) => {
                write!(f, "expected 6 whitespace-separated fields, found {}", n)
            }
            FenErrorKind::InvalidRowLength => {
                write!(f, "a FEN rank does not sum to exactly 8 squares")
            }
            FenErrorKind::InvalidBoardLayout => write!(f, "invalid board layout"),
            FenErrorKind::InvalidPiece(err) => write!(f, "{}", err),
            FenErrorKind::InvalidSideToMove => {
                write!(f, "invalid side to move (expected 'w' or 'b')")
            }
            FenErrorKind::InvalidCastlingRights(err) => {
                write!(f, "invalid castling rights: {}", err)
            }
            FenErrorKind::InvalidEnPassantSquare(err) => {
                write!(f, "invalid en passant square: {}", err)
            }
            FenErrorKind::InvalidHalfmoveClock => {
                write!(f, "invalid halfmove clock (expected an integer in [0, 255])")
            }
            FenErrorKind::InvalidFullmoveNumber => {
                write!(f, "invalid fullmove number (expected an integer in [1, 65535])")
            }
        }
    }
}

/// The `ParseMove` error kind: malformed coordinate-notation input. Carries the
/// offending fragment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseMoveError {
    /// The text that failed to parse as a move.
    pub text: String,
    /// The specific reason parsing failed.
    pub kind: MoveErrorKind,
}

impl fmt::Display for ParseMoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid move \"{}\": {}", self.text, self.kind)
    }
}

impl std::error::Error for ParseMoveError {}

/// The specific way a coordinate-notation move string failed to parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveErrorKind {
    /// The string is not 4 or 5 characters long.
    InvalidLength,
    /// The source or destination square is not valid algebraic notation.
    InvalidSquare(SquareParseError),
    /// The trailing promotion character is not one of `q|r|b|n`.
    InvalidPromotion(char),
}

impl fmt::Display for MoveErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveErrorKind::InvalidLength => {
                write!(f, "expected 4 or 5 characters (<from><to>[promo])")
            }
            MoveErrorKind::InvalidSquare(err) => write!(f, "{}", err),
            MoveErrorKind::InvalidPromotion(c) => {
                write!(f, "invalid promotion character '{}' (expected q, r, b, or n)", c)
            }
        }
    }
}

/// The `IllegalMove` and `MissingPromotion` error kinds, returned by [`crate::Board::make_move`].
/// Both carry the offending move's coordinate-notation text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveError {
    /// The move is syntactically well-formed but is not a member of `legal_moves()` for
    /// the current position (wrong color, empty source, blocked path, exposes the king,
    /// unmet castling precondition, etc). The board is left unchanged.
    IllegalMove(String),
    /// A pawn would land on its last rank but no promotion piece was specified.
    /// The board is left unchanged.
    MissingPromotion(String),
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveError::IllegalMove(mv) => write!(f, "illegal move: {}", mv),
            MoveError::MissingPromotion(mv) => {
                write!(f, "move {} reaches the last rank but specifies no promotion piece", mv)
            }
        }
    }
}

impl std::error::Error for MoveError {}
