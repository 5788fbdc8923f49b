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

//! Game-status classification: checkmate/stalemate detection, the four draw families
//! (insufficient material, 50/75-move, 3-fold/5-fold repetition), and perft/divide as
//! pure leaf-counting utilities over [`Board::legal_moves`].

use crate::{Board, Color, PieceType};

/// The classification of a position, in the evaluation order `status()` applies them:
/// checkmate and stalemate first (they depend on whether a legal move exists), then the
/// automatic draws (fivefold repetition, 75-move), then the claimable draws (threefold
/// repetition, 50-move), then insufficient material, then ongoing play.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum GameStatus {
    /// The side to move has no legal moves and is in check.
    Checkmate,
    /// The side to move has no legal moves and is not in check.
    Stalemate,
    /// The current position has occurred five times; the game is drawn automatically.
    FivefoldRepetition,
    /// 75 moves (150 plies) have passed without a pawn move or capture; automatic draw.
    SeventyFiveMoveRule,
    /// Neither side has enough material to deliver checkmate.
    InsufficientMaterial,
    /// The current position has occurred three times; either player may claim a draw.
    ThreefoldRepetition,
    /// 50 moves (100 plies) have passed without a pawn move or capture; either player
    /// may claim a draw.
    FiftyMoveRule,
    /// The game continues; the side to move has at least one legal move and none of the
    /// automatic draw conditions apply.
    Ongoing,
}

impl Board {
    /// Classifies the current position, applying the rules in the exact order they take
    /// precedence: checkmate/stalemate, then fivefold repetition, then the 75-move rule,
    /// then insufficient material, then threefold repetition, then the 50-move rule,
    /// then ongoing.
    pub fn status(&self) -> GameStatus {
        if self.legal_moves().is_empty() {
            return if self.is_in_check(self.active_color) {
                GameStatus::Checkmate
            } else {
                GameStatus::Stalemate
            };
        }

        if self.repetition_count() >= 5 {
            return GameStatus::FivefoldRepetition;
        }

        if self.halfmove_clock >= 150 {
            return GameStatus::SeventyFiveMoveRule;
        }

        if self.has_insufficient_material() {
            return GameStatus::InsufficientMaterial;
        }

        if self.repetition_count() >= 3 {
            return GameStatus::ThreefoldRepetition;
        }

        if self.halfmove_clock >= 100 {
            return GameStatus::FiftyMoveRule;
        }

        GameStatus::Ongoing
    }

    /// Whether the game has ended, under any of `status()`'s classifications other than
    /// `Ongoing`. Note that the claimable draws (threefold repetition, 50-move rule) are
    /// included here even though the rules of chess let play continue past them — see
    /// [`Board::can_claim_draw`] for the distinction.
    #[inline]
    pub fn is_game_over(&self) -> bool {
        self.status() != GameStatus::Ongoing
    }

    /// Whether the side to move may currently claim a draw (threefold repetition or the
    /// 50-move rule), as opposed to a draw that ends the game automatically.
    pub fn can_claim_draw(&self) -> bool {
        matches!(self.status(), GameStatus::ThreefoldRepetition | GameStatus::FiftyMoveRule)
    }

    /// The winner of a finished game, or `None` if the game is ongoing or drawn.
    pub fn winner(&self) -> Option<Color> {
        match self.status() {
            GameStatus::Checkmate => Some(!self.active_color),
            _ => None,
        }
    }

    /// How many times the current position's hash appears in `history`, including the
    /// current occurrence. A hash collision between two distinct positions would
    /// overcount; with a 64-bit key this is astronomically unlikely and not guarded
    /// against here.
    pub fn repetition_count(&self) -> usize {
        self.history.iter().filter(|&&h| h == self.hash).count()
    }

    /// Whether neither side has enough material to deliver checkmate by any sequence of
    /// legal moves: king vs king; king+bishop vs king; king+knight vs king; or king+bishop
    /// vs king+bishop with both bishops on the same color square.
    pub fn has_insufficient_material(&self) -> bool {
        let mut minors_by_color: [Vec<(PieceType, bool)>; 2] = [Vec::new(), Vec::new()];

        for occupant in self.squares.iter().flatten() {
            match occupant.piece_type() {
                PieceType::King => continue,
                PieceType::Bishop | PieceType::Knight => {}
                _ => return false,
            }
        }

        for (index, occupant) in self.squares.iter().enumerate() {
            let Some(piece) = occupant else { continue };
            if !piece.is_minor() {
                continue;
            }
            let square_is_light = (index / 8 + index % 8) % 2 == 1;
            minors_by_color[piece.color() as usize].push((piece.piece_type(), square_is_light));
        }

        let [white, black] = minors_by_color;

        match (white.len(), black.len()) {
            (0, 0) => true,
            (1, 0) | (0, 1) => true,
            (1, 1) => {
                let (white_kind, white_light) = white[0];
                let (black_kind, black_light) = black[0];
                white_kind == PieceType::Bishop && black_kind == PieceType::Bishop && white_light == black_light
            }
            _ => false,
        }
    }

    /// The number of leaf positions reachable in exactly `depth` plies from the current
    /// position. A pure, non-mutating traversal: each recursive call operates on its own
    /// copy of the board.
    pub fn perft(&self, depth: u32) -> u64 {
        if depth == 0 {
            return 1;
        }

        let moves = self.legal_moves();
        if depth == 1 {
            return moves.len() as u64;
        }

        moves
            .into_iter()
            .map(|mv| {
                let mut next = self.copy();
                next.apply_move(mv);
                next.perft(depth - 1)
            })
            .sum()
    }

    /// Like [`Board::perft`], but returns the leaf count broken down per legal move at
    /// the root instead of the total alone.
    pub fn divide(&self, depth: u32) -> Vec<(crate::Move, u64)> {
        self.legal_moves()
            .into_iter()
            .map(|mv| {
                let mut next = self.copy();
                next.apply_move(mv);
                let count = if depth == 0 { 1 } else { next.perft(depth - 1) };
                (mv, count)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starting_position_is_ongoing() {
        assert_eq!(Board::default().status(), GameStatus::Ongoing);
    }

    #[test]
    fn fools_mate_is_checkmate() {
        let board: Board = "rnb1kbnr/pppp1ppp/8/4p3/6Pq/5P2/PPPPP2P/RNBQKBNR w KQkq - 1 3"
            .parse()
            .unwrap();
        assert_eq!(board.status(), GameStatus::Checkmate);
        assert_eq!(board.winner(), Some(Color::Black));
    }

    #[test]
    fn stalemate_position() {
        let board: Board = "7k/5Q2/6K1/8/8/8/8/8 b - - 0 1".parse().unwrap();
        assert_eq!(board.status(), GameStatus::Stalemate);
        assert_eq!(board.winner(), None);
    }

    #[test]
    fn bare_kings_is_insufficient_material() {
        let board: Board = "4k3/8/8/8/8/8/8/4K3 w - - 0 1".parse().unwrap();
        assert!(board.has_insufficient_material());
        assert_eq!(board.status(), GameStatus::InsufficientMaterial);
    }

    #[test]
    fn king_and_two_knights_is_not_forced_mate_but_is_sufficient() {
        let board: Board = "4k3/8/8/8/8/8/8/2NNK3 w - - 0 1".parse().unwrap();
        assert!(!board.has_insufficient_material());
    }

    #[test]
    fn opposite_colored_bishops_are_sufficient_material() {
        let board: Board = "4k3/8/8/8/8/8/2b5/2BK4 w - - 0 1".parse().unwrap();
        assert!(!board.has_insufficient_material());
    }

    #[test]
    fn same_colored_bishops_are_insufficient_material() {
        let board: Board = "4k3/8/8/8/8/8/3b4/2BK4 w - - 0 1".parse().unwrap();
        assert!(board.has_insufficient_material());
    }

    #[test]
    fn fivefold_repetition_via_shuffling_knights() {
        let mut board = Board::default();
        for _ in 0..4 {
            board.make_move("g1f3".parse().unwrap()).unwrap();
            board.make_move("g8f6".parse().unwrap()).unwrap();
            board.make_move("f3g1".parse().unwrap()).unwrap();
            board.make_move("f6g8".parse().unwrap()).unwrap();
        }
        assert_eq!(board.repetition_count(), 5);
        assert_eq!(board.status(), GameStatus::FivefoldRepetition);
    }

    #[test]
    fn perft_starting_position_depth_3() {
        let board = Board::default();
        assert_eq!(board.perft(0), 1);
        assert_eq!(board.perft(1), 20);
        assert_eq!(board.perft(2), 400);
        assert_eq!(board.perft(3), 8902);
    }

    #[test]
    fn divide_sums_to_perft() {
        let board = Board::default();
        let total: u64 = board.divide(2).iter().map(|(_, count)| count).sum();
        assert_eq!(total, board.perft(2));
    }
}
