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

//! Move generation over the mailbox board.
//!
//! Deliberately the simple two-pass approach rather than a pin-aware or check-mask
//! generator: [`Board::pseudo_legal_moves`] enumerates every move that obeys piece
//! movement rules (plus castling's own preconditions) without regard to whether it
//! leaves the mover's own king in check, and [`Board::legal_moves`] filters that list
//! by copying the board, applying each candidate, and checking whether the mover's king
//! ends up attacked. Correct and easy to verify against perft counts; not the fastest
//! possible generator, which is not a goal here.

use crate::gen::attacks::{
    king_targets, knight_targets, pawn_attack_targets, DIAGONAL_DIRECTIONS, ORTHOGONAL_DIRECTIONS,
};
use crate::{Board, Color, Move, MoveList, Piece, PieceType, Square};

impl Board {
    /// Whether `square` is attacked by any piece of `by_color`, regardless of whose turn
    /// it is. Implemented by probing outward from `square` along every pattern a piece of
    /// `by_color` could use to reach it (the reverse of actually generating that piece's
    /// moves), rather than generating every move of every `by_color` piece and checking
    /// membership.
    pub fn is_square_attacked(&self, square: Square, by_color: Color) -> bool {
        if knight_targets(square).any(|sq| self.piece_on(sq) == Some(Piece::new(PieceType::Knight, by_color))) {
            return true;
        }

        if king_targets(square).any(|sq| self.piece_on(sq) == Some(Piece::new(PieceType::King, by_color))) {
            return true;
        }

        // A pawn of `by_color` attacks `square` iff `square` is one of the squares that
        // color's pawn attacks from the other side, i.e. walk the attacker's own attack
        // pattern *from* `square` using the opposite color's direction.
        if pawn_attack_targets(!by_color, square).any(|sq| self.piece_on(sq) == Some(Piece::new(PieceType::Pawn, by_color))) {
            return true;
        }

        let file: i8 = square.file().to_index() as i8;
        let rank: i8 = square.rank().to_index() as i8;

        for &(df, dr) in DIAGONAL_DIRECTIONS.iter() {
            if self.ray_hits(file, rank, df, dr, by_color, &[PieceType::Bishop, PieceType::Queen]) {
                return true;
            }
        }

        for &(df, dr) in ORTHOGONAL_DIRECTIONS.iter() {
            if self.ray_hits(file, rank, df, dr, by_color, &[PieceType::Rook, PieceType::Queen]) {
                return true;
            }
        }

        false
    }

    /// Walks one ray from `(file, rank)` in direction `(df, dr)` until it runs off the
    /// board or hits an occupied square. Returns whether the first occupant it hits is a
    /// `by_color` piece of one of `kinds`.
    fn ray_hits(&self, file: i8, rank: i8, df: i8, dr: i8, by_color: Color, kinds: &[PieceType]) -> bool {
        let mut f: i8 = file + df;
        let mut r: i8 = rank + dr;
        while let Some(sq) = Square::from_coords(f, r) {
            if let Some(piece) = self.piece_on(sq) {
                return piece.color() == by_color && kinds.contains(&piece.piece_type());
            }
            f += df;
            r += dr;
        }
        false
    }

    /// Whether `color`'s king currently stands on an attacked square.
    #[inline]
    pub fn is_in_check(&self, color: Color) -> bool {
        self.is_square_attacked(self.king_square(color), !color)
    }

    /// Every pseudo-legal move for the side to move: movement-rule-legal, castling's own
    /// preconditions already checked, but *not* filtered for leaving the mover's own king
    /// in check. See [`Board::legal_moves`] for the filtered list.
    pub fn pseudo_legal_moves(&self) -> MoveList {
        let mut moves = MoveList::new();
        let side = self.active_color;

        for index in 0..Square::NUM_SQUARES {
            let square = Square::from_index(index);
            let Some(piece) = self.piece_on(square) else { continue };
            if piece.color() != side {
                continue;
            }

            match piece.piece_type() {
                PieceType::Pawn => self.pawn_moves(square, side, &mut moves),
                PieceType::Knight => self.stepper_moves(square, side, knight_targets(square), &mut moves),
                PieceType::King => self.stepper_moves(square, side, king_targets(square), &mut moves),
                PieceType::Bishop => self.slider_moves(square, side, &DIAGONAL_DIRECTIONS, &mut moves),
                PieceType::Rook => self.slider_moves(square, side, &ORTHOGONAL_DIRECTIONS, &mut moves),
                PieceType::Queen => {
                    self.slider_moves(square, side, &DIAGONAL_DIRECTIONS, &mut moves);
                    self.slider_moves(square, side, &ORTHOGONAL_DIRECTIONS, &mut moves);
                }
            }
        }

        self.castling_moves(side, &mut moves);
        moves
    }

    /// Every legal move for the side to move: the pseudo-legal list, filtered to exclude
    /// moves that would leave the mover's own king attacked.
    pub fn legal_moves(&self) -> MoveList {
        let mut moves = MoveList::new();
        for mv in self.pseudo_legal_moves() {
            if self.leaves_king_safe(mv) {
                let _ = moves.try_push(mv);
            }
        }
        moves
    }

    /// Whether `mv` is a member of [`Board::legal_moves`] for the current position.
    pub fn is_legal_move(&self, mv: Move) -> bool {
        self.pseudo_legal_moves().contains(&mv) && self.leaves_king_safe(mv)
    }

    /// Applies `mv` to a scratch copy of the board and reports whether the mover's own
    /// king is safe afterwards. Does not mutate `self`.
    fn leaves_king_safe(&self, mv: Move) -> bool {
        let mover = self.active_color;
        let mut scratch = self.copy();
        scratch.apply_move(mv);
        !scratch.is_in_check(mover)
    }

    fn stepper_moves(&self, from: Square, side: Color, targets: impl Iterator<Item = Square>, moves: &mut MoveList) {
        for to in targets {
            if self.piece_on(to).map(|p| p.color()) != Some(side) {
                let _ = moves.try_push(Move::new(from, to));
            }
        }
    }

    fn slider_moves(&self, from: Square, side: Color, directions: &[(i8, i8); 4], moves: &mut MoveList) {
        let file: i8 = from.file().to_index() as i8;
        let rank: i8 = from.rank().to_index() as i8;

        for &(df, dr) in directions {
            let mut f = file + df;
            let mut r = rank + dr;
            while let Some(to) = Square::from_coords(f, r) {
                match self.piece_on(to) {
                    None => {
                        let _ = moves.try_push(Move::new(from, to));
                    }
                    Some(occupant) => {
                        if occupant.color() != side {
                            let _ = moves.try_push(Move::new(from, to));
                        }
                        break;
                    }
                }
                f += df;
                r += dr;
            }
        }
    }

    fn pawn_moves(&self, from: Square, side: Color, moves: &mut MoveList) {
        let (start_rank, promotion_rank, forward): (usize, usize, i8) = match side {
            Color::White => (1, 7, 1),
            Color::Black => (6, 0, -1),
        };

        let file: i8 = from.file().to_index() as i8;
        let rank: i8 = from.rank().to_index() as i8;

        if let Some(one) = Square::from_coords(file, rank + forward) {
            if self.piece_on(one).is_none() {
                self.push_pawn_move(from, one, promotion_rank, moves);

                if from.rank().to_index() == start_rank {
                    if let Some(two) = Square::from_coords(file, rank + 2 * forward) {
                        if self.piece_on(two).is_none() {
                            let _ = moves.try_push(Move::new(from, two));
                        }
                    }
                }
            }
        }

        for to in pawn_attack_targets(side, from) {
            if let Some(occupant) = self.piece_on(to) {
                if occupant.color() != side {
                    self.push_pawn_move(from, to, promotion_rank, moves);
                }
            } else if Some(to) == self.ep_target {
                let _ = moves.try_push(Move::new(from, to));
            }
        }
    }

    fn push_pawn_move(&self, from: Square, to: Square, promotion_rank: usize, moves: &mut MoveList) {
        if to.rank().to_index() == promotion_rank {
            for promotion in PieceType::PROMOTION_PIECES {
                let _ = moves.try_push(Move::promoting(from, to, promotion));
            }
        } else {
            let _ = moves.try_push(Move::new(from, to));
        }
    }

    fn castling_moves(&self, side: Color, moves: &mut MoveList) {
        let opponent = !side;
        let (rank, king_square): (BackRank, Square) = match side {
            Color::White => (BackRank::One, Square::E1),
            Color::Black => (BackRank::Eight, Square::E8),
        };

        if self.is_in_check(side) {
            return;
        }

        if self.castling_rights.has_kingside(side) {
            let (f_sq, g_sq) = rank.kingside_transit();
            if self.piece_on(f_sq).is_none()
                && self.piece_on(g_sq).is_none()
                && !self.is_square_attacked(f_sq, opponent)
                && !self.is_square_attacked(g_sq, opponent)
            {
                let _ = moves.try_push(Move::new(king_square, g_sq));
            }
        }

        if self.castling_rights.has_queenside(side) {
            let (d_sq, c_sq, b_sq) = rank.queenside_transit();
            if self.piece_on(d_sq).is_none()
                && self.piece_on(c_sq).is_none()
                && self.piece_on(b_sq).is_none()
                && !self.is_square_attacked(d_sq, opponent)
                && !self.is_square_attacked(c_sq, opponent)
            {
                let _ = moves.try_push(Move::new(king_square, c_sq));
            }
        }
    }
}

/// The back rank a castling side's king and rooks sit on, used only to pick out the
/// transit squares a castling move must check.
#[derive(Clone, Copy)]
enum BackRank {
    One,
    Eight,
}

impl BackRank {
    fn kingside_transit(self) -> (Square, Square) {
        match self {
            BackRank::One => (Square::F1, Square::G1),
            BackRank::Eight => (Square::F8, Square::G8),
        }
    }

    fn queenside_transit(self) -> (Square, Square, Square) {
        match self {
            BackRank::One => (Square::D1, Square::C1, Square::B1),
            BackRank::Eight => (Square::D8, Square::C8, Square::B8),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starting_position_has_twenty_moves() {
        let board = Board::default();
        assert_eq!(board.legal_moves().len(), 20);
    }

    #[test]
    fn detects_check_from_a_rook() {
        let board: Board = "4k3/8/8/8/8/8/8/4R2K w - - 0 1".parse().unwrap();
        assert!(board.is_square_attacked(Square::E8, Color::White));
        assert!(board.is_in_check(Color::Black));
    }

    #[test]
    fn king_in_check_has_no_castling_moves() {
        let board: Board = "4k3/8/8/8/8/8/8/r3K2R w K - 0 1".parse().unwrap();
        assert!(board.is_in_check(Color::White));
        assert!(board.legal_moves().iter().all(|m| m.from != Square::E1 || m.to != Square::G1));
    }

    #[test]
    fn castling_is_available_when_path_is_clear_and_safe() {
        let board: Board = "4k3/8/8/8/8/8/8/4K2R w K - 0 1".parse().unwrap();
        assert!(board
            .legal_moves()
            .iter()
            .any(|m| m.from == Square::E1 && m.to == Square::G1));
    }

    #[test]
    fn pinned_piece_cannot_move() {
        // White king on e1, white bishop pinned on e2 by a black rook on e8.
        let board: Board = "4r3/8/8/8/8/8/4B3/4K3 w - - 0 1".parse().unwrap();
        assert!(board.legal_moves().iter().all(|m| m.from != Square::E2));
    }

    #[test]
    fn en_passant_capture_is_generated() {
        let board: Board = "rnbqkbnr/pppp1ppp/8/8/3Pp3/8/PPP1PPPP/RNBQKBNR b KQkq d3 0 3"
            .parse()
            .unwrap();
        assert!(board
            .legal_moves()
            .iter()
            .any(|m| m.from == Square::E4 && m.to == Square::D3));
    }

    #[test]
    fn pawn_promotion_generates_four_moves() {
        let board: Board = "8/P7/8/8/8/8/8/4K2k w - - 0 1".parse().unwrap();
        let promotions: Vec<_> = board
            .legal_moves()
            .into_iter()
            .filter(|m| m.from == Square::A7 && m.to == Square::A8)
            .collect();
        assert_eq!(promotions.len(), 4);
    }
}
