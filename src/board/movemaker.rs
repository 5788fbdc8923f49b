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

// This implementation follows the approach used in Carp for applying a move and updating
// every piece of state it touches in one pass (GPLv3).
// Source: https://github.com/dede1751/carp/blob/main/chess/src/movegen/make_move.rs

use crate::errors::MoveError;
use crate::zobrist;
use crate::{Board, Color, Move, Piece, PieceType, Rank, Square};

impl Board {
    /// Validates `mv` against [`Board::legal_moves`] (and the promotion-on-last-rank
    /// requirement) and, if it passes, applies it. The board is left completely
    /// unchanged if `mv` is rejected.
    pub fn make_move(&mut self, mv: Move) -> Result<(), MoveError> {
        let text = mv.to_string();

        let piece = match self.piece_on(mv.from) {
            Some(piece) => piece,
            None => return Err(MoveError::IllegalMove(text)),
        };

        let reaches_last_rank = piece.piece_type() == PieceType::Pawn
            && (mv.to.rank() == Rank::Eight || mv.to.rank() == Rank::One);
        if reaches_last_rank && mv.promotion.is_none() {
            return Err(MoveError::MissingPromotion(text));
        }

        if !self.is_legal_move(mv) {
            return Err(MoveError::IllegalMove(text));
        }

        self.apply_move(mv);
        Ok(())
    }

    /// Applies `mv` without any legality check. Callers outside this module should go
    /// through [`Board::make_move`]; this exists so move generation's legality filter
    /// (which needs to try a move and look at the result) doesn't pay for validating a
    /// move it just generated itself.
    pub(crate) fn apply_move(&mut self, mv: Move) {
        let from = mv.from;
        let to = mv.to;
        let piece = self
            .piece_on(from)
            .expect("apply_move requires a piece on the source square");
        let side = piece.color();

        let is_en_passant =
            piece.piece_type() == PieceType::Pawn && Some(to) == self.ep_target && self.piece_on(to).is_none();
        let is_capture = self.piece_on(to).is_some() || is_en_passant;

        if is_en_passant {
            let captured_square = Square::from_file_rank(to.file(), from.rank());
            self.remove_piece(captured_square);
        } else if self.piece_on(to).is_some() {
            self.remove_piece(to);
        }

        self.remove_piece(from);
        let placed = match mv.promotion {
            Some(promotion) => Piece::new(promotion, side),
            None => piece,
        };
        self.set_piece(placed, to);

        if piece.piece_type() == PieceType::King && from.file().distance(to.file()).unsigned_abs() == 2 {
            let (rook_from, rook_to) = castling_rook_squares(from, to);
            let rook = self
                .piece_on(rook_from)
                .expect("a castling move always has its own rook in place");
            self.remove_piece(rook_from);
            self.set_piece(rook, rook_to);
        }

        self.hash ^= zobrist::hash_castle(self.castling_rights);
        self.castling_rights = self.castling_rights.update(from, to);
        self.hash ^= zobrist::hash_castle(self.castling_rights);

        if let Some(ep) = self.ep_target {
            self.hash ^= zobrist::hash_ep_file(ep);
        }
        self.ep_target = double_push_ep_target(piece, from, to);
        if let Some(ep) = self.ep_target {
            self.hash ^= zobrist::hash_ep_file(ep);
        }

        self.halfmove_clock = if piece.piece_type() == PieceType::Pawn || is_capture {
            0
        } else {
            self.halfmove_clock.saturating_add(1)
        };

        if side == Color::Black {
            self.fullmove_num = self.fullmove_num.wrapping_add(1);
        }

        self.hash ^= zobrist::hash_side();
        self.active_color = !side;

        self.history.push(self.hash);
    }
}

/// The rook's origin and destination for the castling move a king just made from `from`
/// to `to` (already known to be a two-file king step).
fn castling_rook_squares(from: Square, to: Square) -> (Square, Square) {
    match (from, to) {
        (Square::E1, Square::G1) => (Square::H1, Square::F1),
        (Square::E1, Square::C1) => (Square::A1, Square::D1),
        (Square::E8, Square::G8) => (Square::H8, Square::F8),
        (Square::E8, Square::C8) => (Square::A8, Square::D8),
        _ => unreachable!("castling only ever moves the king between its home and g/c file"),
    }
}

/// The new en passant target after a pawn move from `from` to `to`, or `None` if this
/// wasn't a two-square pawn advance.
fn double_push_ep_target(piece: Piece, from: Square, to: Square) -> Option<Square> {
    if piece.piece_type() != PieceType::Pawn {
        return None;
    }
    let from_rank = from.rank().to_index() as i8;
    let to_rank = to.rank().to_index() as i8;
    if (to_rank - from_rank).abs() != 2 {
        return None;
    }
    Square::from_coords(from.file().to_index() as i8, (from_rank + to_rank) / 2)
}
