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
use std::str::FromStr;

use crate::errors::CastleRightsParseError;
use crate::{Color, Square};

// This implementation follows the approach used in Carp (GPLv3), which packs castling
// rights into a 4-bit mask and updates it with a per-square mask table on every move.
// Source: https://github.com/dede1751/carp/blob/main/chess/src/castle.rs

/// The castling rights of both players, packed into a 4-bit mask stored in a `u8`.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Default, Debug, Hash)]
pub struct CastleRights(u8);

/// Parses a FEN castling field: either `-`, or a non-empty subset of `KQkq`.
impl FromStr for CastleRights {
    type Err = CastleRightsParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "-" {
            return Ok(CastleRights(0));
        }

        let mut rights: u8 = 0;
        for ch in s.chars() {
            match ch {
                'K' => rights |= CASTLE_WK_MASK,
                'Q' => rights |= CASTLE_WQ_MASK,
                'k' => rights |= CASTLE_BK_MASK,
                'q' => rights |= CASTLE_BQ_MASK,
                '-' => return Err(CastleRightsParseError::InvalidDashUsage),
                other => return Err(CastleRightsParseError::InvalidChar(other)),
            }
        }

        Ok(CastleRights(rights))
    }
}

impl fmt::Display for CastleRights {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0 & CASTLE_WK_MASK != 0 {
            write!(f, "K")?;
        }
        if self.0 & CASTLE_WQ_MASK != 0 {
            write!(f, "Q")?;
        }
        if self.0 & CASTLE_BK_MASK != 0 {
            write!(f, "k")?;
        }
        if self.0 & CASTLE_BQ_MASK != 0 {
            write!(f, "q")?;
        }
        if self.0 == 0 {
            write!(f, "-")?;
        }
        Ok(())
    }
}

const CASTLE_WK_MASK: u8 = 0b1000;
const CASTLE_WQ_MASK: u8 = 0b0100;
const CASTLE_BK_MASK: u8 = 0b0010;
const CASTLE_BQ_MASK: u8 = 0b0001;

const KINGSIDE_CASTLE: [u8; 2] = [CASTLE_WK_MASK, CASTLE_BK_MASK];
const QUEENSIDE_CASTLE: [u8; 2] = [CASTLE_WQ_MASK, CASTLE_BQ_MASK];

const ALL_CASTLE: u8 = 0b1111;
const NOT_WK_RIGHTS: u8 = ALL_CASTLE ^ CASTLE_WK_MASK;
const NOT_WQ_RIGHTS: u8 = ALL_CASTLE ^ CASTLE_WQ_MASK;
const NOT_BK_RIGHTS: u8 = ALL_CASTLE ^ CASTLE_BK_MASK;
const NOT_BQ_RIGHTS: u8 = ALL_CASTLE ^ CASTLE_BQ_MASK;
const NOT_WHITE_RIGHTS: u8 = NOT_WK_RIGHTS & NOT_WQ_RIGHTS;
const NOT_BLACK_RIGHTS: u8 = NOT_BK_RIGHTS & NOT_BQ_RIGHTS;

/// Per-square mask applied (by AND) to the castling rights whenever a move touches that
/// square, either as the mover's origin or as a capture landing square. Only the four
/// corner squares and the two king squares actually clear anything; every other square
/// is `ALL_CASTLE` (a no-op AND).
#[rustfmt::skip]
const CASTLE_RIGHTS_MASK: [u8; Square::NUM_SQUARES] = [
    NOT_WQ_RIGHTS,    ALL_CASTLE, ALL_CASTLE, ALL_CASTLE, NOT_WHITE_RIGHTS, ALL_CASTLE, ALL_CASTLE, NOT_WK_RIGHTS,
    ALL_CASTLE,       ALL_CASTLE, ALL_CASTLE, ALL_CASTLE, ALL_CASTLE,       ALL_CASTLE, ALL_CASTLE, ALL_CASTLE,
    ALL_CASTLE,       ALL_CASTLE, ALL_CASTLE, ALL_CASTLE, ALL_CASTLE,       ALL_CASTLE, ALL_CASTLE, ALL_CASTLE,
    ALL_CASTLE,       ALL_CASTLE, ALL_CASTLE, ALL_CASTLE, ALL_CASTLE,       ALL_CASTLE, ALL_CASTLE, ALL_CASTLE,
    ALL_CASTLE,       ALL_CASTLE, ALL_CASTLE, ALL_CASTLE, ALL_CASTLE,       ALL_CASTLE, ALL_CASTLE, ALL_CASTLE,
    ALL_CASTLE,       ALL_CASTLE, ALL_CASTLE, ALL_CASTLE, ALL_CASTLE,       ALL_CASTLE, ALL_CASTLE, ALL_CASTLE,
    ALL_CASTLE,       ALL_CASTLE, ALL_CASTLE, ALL_CASTLE, ALL_CASTLE,       ALL_CASTLE, ALL_CASTLE, ALL_CASTLE,
    NOT_BQ_RIGHTS,    ALL_CASTLE, ALL_CASTLE, ALL_CASTLE, NOT_BLACK_RIGHTS, ALL_CASTLE, ALL_CASTLE, NOT_BK_RIGHTS,
];

impl CastleRights {
    /// Number of distinct combinations of the four castling bits (used to size the
    /// Zobrist castling-rights table).
    pub const NUM_CASTLING_RIGHTS: usize = 16;

    /// No castling rights for either side.
    #[inline(always)]
    pub const fn none() -> Self {
        Self(0)
    }

    /// All four castling rights.
    #[inline(always)]
    pub const fn all() -> Self {
        Self(ALL_CASTLE)
    }

    /// The value as an index in `0..16`, used to address the Zobrist castling table.
    #[inline(always)]
    pub const fn to_index(self) -> usize {
        self.0 as usize
    }

    /// Whether kingside castling is still available for `color`.
    #[inline(always)]
    pub const fn has_kingside(self, color: Color) -> bool {
        self.0 & KINGSIDE_CASTLE[color as usize] != 0
    }

    /// Whether queenside castling is still available for `color`.
    #[inline(always)]
    pub const fn has_queenside(self, color: Color) -> bool {
        self.0 & QUEENSIDE_CASTLE[color as usize] != 0
    }

    /// Clears both of `color`'s castling rights (the king moved).
    #[inline(always)]
    pub const fn clear_color(self, color: Color) -> Self {
        match color {
            Color::White => Self(self.0 & NOT_WHITE_RIGHTS),
            Color::Black => Self(self.0 & NOT_BLACK_RIGHTS),
        }
    }

    /// Updates the rights after a move touching `src` (the mover's origin) and `dest`
    /// (its destination, which matters when a rook is captured on its home square).
    /// Rights only ever narrow: each mask is either `ALL_CASTLE` (no effect) or clears
    /// exactly the bits tied to a king or rook home square.
    #[inline]
    pub const fn update(self, src: Square, dest: Square) -> CastleRights {
        CastleRights(self.0 & CASTLE_RIGHTS_MASK[src.to_index()] & CASTLE_RIGHTS_MASK[dest.to_index()])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_subset_and_dash() {
        let rights: CastleRights = "Kq".parse().unwrap();
        assert!(rights.has_kingside(Color::White));
        assert!(!rights.has_queenside(Color::White));
        assert!(!rights.has_kingside(Color::Black));
        assert!(rights.has_queenside(Color::Black));
        assert_eq!("-".parse::<CastleRights>().unwrap(), CastleRights::none());
    }

    #[test]
    fn rejects_bad_chars_and_embedded_dash() {
        assert_eq!(
            "Kx".parse::<CastleRights>(),
            Err(CastleRightsParseError::InvalidChar('x'))
        );
        assert_eq!(
            "K-".parse::<CastleRights>(),
            Err(CastleRightsParseError::InvalidDashUsage)
        );
    }

    #[test]
    fn display_round_trips() {
        for text in ["KQkq", "Kk", "-", "Qq"] {
            let rights: CastleRights = text.parse().unwrap();
            assert_eq!(rights.to_string(), text);
        }
    }

    #[test]
    fn update_only_narrows_rights() {
        let all: CastleRights = CastleRights::all();
        let after_rook_move: CastleRights = all.update(Square::H1, Square::H5);
        assert!(!after_rook_move.has_kingside(Color::White));
        assert!(after_rook_move.has_queenside(Color::White));

        let after_king_move: CastleRights = after_rook_move.update(Square::E8, Square::E6);
        assert!(!after_king_move.has_kingside(Color::Black));
        assert!(!after_king_move.has_queenside(Color::Black));

        let unrelated: CastleRights = all.update(Square::A3, Square::A4);
        assert_eq!(unrelated, all);
    }

    #[test]
    fn capture_on_corner_clears_rights() {
        let all: CastleRights = CastleRights::all();
        let after_capture: CastleRights = all.update(Square::B6, Square::A8);
        assert!(!after_capture.has_queenside(Color::Black));
        assert!(after_capture.has_kingside(Color::Black));
    }
}
