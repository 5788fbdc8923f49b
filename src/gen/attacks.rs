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

//! Offset tables for the jumping pieces (knight, king, pawn) and the four ray
//! directions used by the sliding pieces (bishop, rook, queen). A 64-cell mailbox board
//! has no bitboards to shift, so every lookup here walks file/rank deltas from the
//! square in question and lets [`Square::from_coords`] reject anything off the edge.

use crate::{Color, Square};

/// Contains the movement deltas for a knight, relative to its current position.
pub const KNIGHT_DELTAS: [(i8, i8); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

/// The eight squares adjacent to a king.
pub const KING_DELTAS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// The four diagonal ray directions, for bishops and queens.
pub const DIAGONAL_DIRECTIONS: [(i8, i8); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

/// The four orthogonal ray directions, for rooks and queens.
pub const ORTHOGONAL_DIRECTIONS: [(i8, i8); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

/// Every square a knight could jump to from `sq`, ignoring occupancy.
#[inline]
pub fn knight_targets(sq: Square) -> impl Iterator<Item = Square> {
    let file: i8 = sq.file().to_index() as i8;
    let rank: i8 = sq.rank().to_index() as i8;
    KNIGHT_DELTAS
        .into_iter()
        .filter_map(move |(df, dr)| Square::from_coords(file + df, rank + dr))
}

/// Every square a king could step to from `sq`, ignoring occupancy and check.
#[inline]
pub fn king_targets(sq: Square) -> impl Iterator<Item = Square> {
    let file: i8 = sq.file().to_index() as i8;
    let rank: i8 = sq.rank().to_index() as i8;
    KING_DELTAS
        .into_iter()
        .filter_map(move |(df, dr)| Square::from_coords(file + df, rank + dr))
}

/// The one or two squares a pawn of `color` standing on `sq` could capture onto.
#[inline]
pub fn pawn_attack_targets(color: Color, sq: Square) -> impl Iterator<Item = Square> {
    let file: i8 = sq.file().to_index() as i8;
    let rank: i8 = sq.rank().to_index() as i8;
    let dr: i8 = match color {
        Color::White => 1,
        Color::Black => -1,
    };
    [(-1, dr), (1, dr)]
        .into_iter()
        .filter_map(move |(df, dr)| Square::from_coords(file + df, rank + dr))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn knight_from_corner_has_two_targets() {
        let targets: Vec<Square> = knight_targets(Square::A1).collect();
        assert_eq!(targets.len(), 2);
        assert!(targets.contains(&Square::B3));
        assert!(targets.contains(&Square::C2));
    }

    #[test]
    fn knight_from_center_has_eight_targets() {
        assert_eq!(knight_targets(Square::D4).count(), 8);
    }

    #[test]
    fn king_from_corner_has_three_targets() {
        assert_eq!(king_targets(Square::A1).count(), 3);
    }

    #[test]
    fn king_from_center_has_eight_targets() {
        assert_eq!(king_targets(Square::D4).count(), 8);
    }

    #[test]
    fn pawn_attacks_depend_on_color() {
        let white: Vec<Square> = pawn_attack_targets(Color::White, Square::E4).collect();
        assert_eq!(white, vec![Square::D5, Square::F5]);

        let black: Vec<Square> = pawn_attack_targets(Color::Black, Square::E4).collect();
        assert_eq!(black, vec![Square::D3, Square::F3]);
    }

    #[test]
    fn pawn_attacks_from_file_edge_has_one_target() {
        assert_eq!(pawn_attack_targets(Color::White, Square::A2).count(), 1);
    }
}
