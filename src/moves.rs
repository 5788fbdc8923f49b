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
use core::str::FromStr;

use arrayvec::ArrayVec;

use crate::errors::{MoveErrorKind, ParseMoveError, SquareParseError};
use crate::{PieceType, Square};

/// A chess move in its canonical form: a source square, a destination square, and an
/// optional promotion piece. Nothing else is encoded here — whether the move is a
/// capture, a castle, or an en passant capture is a fact about `(board, move)` decided
/// at application time, never a flag stored on the move itself.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Hash)]
pub struct Move {
    pub from: Square,
    pub to: Square,
    pub promotion: Option<PieceType>,
}

impl Move {
    /// Builds a non-promoting move.
    #[inline(always)]
    pub const fn new(from: Square, to: Square) -> Self {
        Self { from, to, promotion: None }
    }

    /// Builds a promoting move. `promotion` should be one of the four promotion-eligible
    /// piece types (queen, rook, bishop, knight); this is not enforced here, only by the
    /// generator that produces moves and by `Board::make_move`.
    #[inline(always)]
    pub const fn promoting(from: Square, to: Square, promotion: PieceType) -> Self {
        Self { from, to, promotion: Some(promotion) }
    }
}

/// Displays a move in coordinate notation: `<from><to>[promo]`, e.g. `"e2e4"` or `"b7a8q"`.
impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)?;
        if let Some(promotion) = self.promotion {
            write!(f, "{}", promotion.promotion_char())?;
        }
        Ok(())
    }
}

/// Parses coordinate notation: 4 or 5 characters, `<from_file><from_rank><to_file><to_rank>[promo]`.
impl FromStr for Move {
    type Err = ParseMoveError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = |kind: MoveErrorKind| ParseMoveError { text: s.to_string(), kind };

        if s.len() != 4 && s.len() != 5 {
            return Err(err(MoveErrorKind::InvalidLength));
        }

        let from: Square = s[0..2]
            .parse()
            .map_err(|e: SquareParseError| err(MoveErrorKind::InvalidSquare(e)))?;
        let to: Square = s[2..4]
            .parse()
            .map_err(|e: SquareParseError| err(MoveErrorKind::InvalidSquare(e)))?;

        let promotion: Option<PieceType> = match s.len() {
            4 => None,
            _ => {
                let c: char = s.as_bytes()[4] as char;
                Some(
                    PieceType::from_promotion_char(c)
                        .ok_or_else(|| err(MoveErrorKind::InvalidPromotion(c)))?,
                )
            }
        };

        Ok(Move { from, to, promotion })
    }
}

/// The maximum number of pseudo-legal moves a single chess position can have. No real
/// position comes close; this bound exists purely to size the inline buffer.
pub const MAX_MOVES: usize = 255;

/// A fixed-capacity list of moves, filled by the generator and consumed by callers
/// without ever spilling to the heap.
pub type MoveList = ArrayVec<Move, MAX_MOVES>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_without_promotion() {
        let mv: Move = Move::new(Square::E2, Square::E4);
        assert_eq!(mv.to_string(), "e2e4");
    }

    #[test]
    fn display_with_promotion() {
        let mv: Move = Move::promoting(Square::B7, Square::A8, PieceType::Queen);
        assert_eq!(mv.to_string(), "b7a8q");
    }

    #[test]
    fn round_trip_parse_and_display() {
        for text in ["e2e4", "e7e8q", "a2a1n", "h7h8r", "g1f3"] {
            let mv: Move = text.parse().unwrap();
            assert_eq!(mv.to_string(), text);
        }
    }

    #[test]
    fn rejects_bad_length() {
        assert_eq!(
            "e2e".parse::<Move>().unwrap_err().kind,
            MoveErrorKind::InvalidLength
        );
        assert_eq!(
            "e2e4qq".parse::<Move>().unwrap_err().kind,
            MoveErrorKind::InvalidLength
        );
    }

    #[test]
    fn rejects_bad_promotion_letter() {
        assert_eq!(
            "e7e8k".parse::<Move>().unwrap_err().kind,
            MoveErrorKind::InvalidPromotion('k')
        );
    }

    #[test]
    fn rejects_uppercase_promotion_letter() {
        assert_eq!(
            "e7e8Q".parse::<Move>().unwrap_err().kind,
            MoveErrorKind::InvalidPromotion('Q')
        );
    }
}
