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

use core::fmt;
use core::mem::transmute;
use core::str::FromStr;

use crate::errors::SquareParseError;
use crate::{File, Rank};

/// Macro that declares the 64-variant `Square` enum, one doc comment per square,
/// in `rank * 8 + file` order (A1=0 .. H8=63).
macro_rules! squares {
    ($($square:ident),* $(,)?) => {
        /// A square on the chessboard, encoded as an index in `[0, 64)`.
        ///
        /// `index = rank * 8 + file`, with `A1 = 0`, `H1 = 7`, `A8 = 56`, `H8 = 63`.
        #[derive(PartialEq, Eq, PartialOrd, Ord, Copy, Clone, Debug, Hash)]
        #[repr(u8)]
        pub enum Square {
            $(
                #[doc = concat!("The square `", stringify!($square), "`.")]
                $square,
            )*
        }
    };
}

#[rustfmt::skip]
squares! {
    A1, B1, C1, D1, E1, F1, G1, H1,
    A2, B2, C2, D2, E2, F2, G2, H2,
    A3, B3, C3, D3, E3, F3, G3, H3,
    A4, B4, C4, D4, E4, F4, G4, H4,
    A5, B5, C5, D5, E5, F5, G5, H5,
    A6, B6, C6, D6, E6, F6, G6, H6,
    A7, B7, C7, D7, E7, F7, G7, H7,
    A8, B8, C8, D8, E8, F8, G8, H8,
}

const SQUARE_NAMES: [&str; Square::NUM_SQUARES] = [
    "a1", "b1", "c1", "d1", "e1", "f1", "g1", "h1", "a2", "b2", "c2", "d2", "e2", "f2", "g2", "h2",
    "a3", "b3", "c3", "d3", "e3", "f3", "g3", "h3", "a4", "b4", "c4", "d4", "e4", "f4", "g4", "h4",
    "a5", "b5", "c5", "d5", "e5", "f5", "g5", "h5", "a6", "b6", "c6", "d6", "e6", "f6", "g6", "h6",
    "a7", "b7", "c7", "d7", "e7", "f7", "g7", "h7", "a8", "b8", "c8", "d8", "e8", "f8", "g8", "h8",
];

/// Parses a square from its algebraic notation, e.g. `"e4"` or `"g5"`.
impl FromStr for Square {
    type Err = SquareParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() != 2 {
            return Err(SquareParseError::InvalidLength);
        }

        SQUARE_NAMES
            .iter()
            .position(|&name| name == s)
            .map(Square::from_index)
            .ok_or(SquareParseError::InvalidName)
    }
}

/// Displays the square in algebraic notation, e.g. `"e4"`.
impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", SQUARE_NAMES[self.to_index()])
    }
}

impl Square {
    /// Total number of squares on a chessboard (8x8 = 64).
    pub const NUM_SQUARES: usize = 64;

    /// Builds a `Square` from a `File` (column) and `Rank` (row). Always valid since
    /// both `File` and `Rank` are themselves bounded to `0..8`.
    #[inline(always)]
    pub const fn from_file_rank(file: File, rank: Rank) -> Self {
        let index: u8 = (rank.to_index() as u8) << 3 | file.to_index() as u8;
        unsafe { transmute(index) }
    }

    /// Builds a `Square` from signed file/rank coordinates, returning `None` when either
    /// coordinate falls outside `0..8`. This is the "no-square" sentinel case used while
    /// probing offset moves (knight jumps, king steps, pawn diagonals) near the board edge.
    #[inline]
    pub const fn from_coords(file: i8, rank: i8) -> Option<Self> {
        if file < 0 || file > 7 || rank < 0 || rank > 7 {
            None
        } else {
            Some(Self::from_file_rank(File::from_index(file as usize), Rank::from_index(rank as usize)))
        }
    }

    /// Convert an index (0-63) to a `Square`.
    #[inline(always)]
    pub const fn from_index(index: usize) -> Self {
        unsafe { transmute((index & 63) as u8) }
    }

    /// Convert a `Square` to its index (0 for A1, 63 for H8).
    #[inline(always)]
    pub const fn to_index(self) -> usize {
        self as usize
    }

    /// Get the rank (row) of the square.
    #[inline(always)]
    pub const fn rank(self) -> Rank {
        Rank::from_index((self as u8 >> 3) as usize)
    }

    /// Get the file (column) of the square.
    #[inline(always)]
    pub const fn file(self) -> File {
        File::from_index((self as u8 & 7) as usize)
    }

    /// Returns the algebraic notation of the square, e.g. `"a1"`.
    #[inline]
    pub fn to_algebraic(self) -> &'static str {
        SQUARE_NAMES[self.to_index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trip_all_squares() {
        for index in 0..Square::NUM_SQUARES {
            let square: Square = Square::from_index(index);
            let text: String = square.to_string();
            let parsed: Square = text.parse().unwrap();
            assert_eq!(parsed, square);
            assert_eq!(parsed.to_index(), index);
        }
    }

    #[test]
    fn file_rank_round_trip() {
        let square: Square = Square::from_file_rank(File::E, Rank::Four);
        assert_eq!(square, Square::E4);
        assert_eq!(square.file(), File::E);
        assert_eq!(square.rank(), Rank::Four);
    }

    #[test]
    fn coords_off_board() {
        assert_eq!(Square::from_coords(-1, 3), None);
        assert_eq!(Square::from_coords(3, 8), None);
        assert_eq!(Square::from_coords(7, 7), Some(Square::H8));
    }

    #[test]
    fn parse_errors() {
        assert_eq!("z9".parse::<Square>(), Err(SquareParseError::InvalidName));
        assert_eq!("a".parse::<Square>(), Err(SquareParseError::InvalidLength));
    }
}
