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
use core::fmt::Write as _;
use core::str::FromStr;

use crate::errors::{FenErrorKind, ParseFenError};
use crate::zobrist;
use crate::{CastleRights, Color, File, Piece, Rank, Square};

// The mailbox layout and FEN codec below follow the same field-by-field structure as
// Carp's board (GPLv3), adapted from bitboards to a plain `[Option<Piece>; 64]` array.
// Source: https://github.com/dede1751/carp/blob/main/chess/src/board.rs

/// A chess position: piece placement, side to move, castling rights, en passant target,
/// the two move clocks, and the Zobrist hash and history needed for repetition detection.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Board {
    /// The piece occupying each of the 64 squares, if any.
    pub squares: [Option<Piece>; Square::NUM_SQUARES],
    /// The side to move.
    pub active_color: Color,
    /// The castling rights still available to either side.
    pub castling_rights: CastleRights,
    /// The square a pawn passed over on its last move, if a two-square pawn advance just
    /// happened; `None` otherwise. Cleared on every move that isn't itself a two-square
    /// pawn advance.
    pub ep_target: Option<Square>,
    /// Plies since the last pawn move or capture.
    pub halfmove_clock: u8,
    /// The full move number, starting at 1 and incremented after Black's move.
    pub fullmove_num: u16,
    /// The Zobrist hash of the current position.
    pub hash: u64,
    /// Append-only history of hashes, starting with the position's own initial hash;
    /// the last entry always equals `hash`. Used for repetition detection.
    pub history: Vec<u64>,
}

impl Default for Board {
    /// The standard starting position.
    fn default() -> Self {
        "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1"
            .parse()
            .expect("the starting position FEN is always valid")
    }
}

impl Board {
    /// An empty board: no pieces, White to move, no castling rights, no en passant
    /// target, clocks at their initial values. Not itself a legal position; callers
    /// populate `squares` (via [`Board::set_piece`]) before use.
    pub fn empty() -> Self {
        let mut board = Self {
            squares: [None; Square::NUM_SQUARES],
            active_color: Color::White,
            castling_rights: CastleRights::none(),
            ep_target: None,
            halfmove_clock: 0,
            fullmove_num: 1,
            hash: 0,
            history: Vec::new(),
        };
        board.hash = board.compute_hash();
        board.history.push(board.hash);
        board
    }

    /// Returns an independent deep copy of this board, history included.
    #[inline]
    pub fn copy(&self) -> Self {
        self.clone()
    }

    /// Recomputes the Zobrist hash from scratch, reading every field that participates
    /// in it: occupied squares, side to move, castling rights, and en passant file.
    pub fn compute_hash(&self) -> u64 {
        let mut hash: u64 = 0;

        for (index, occupant) in self.squares.iter().enumerate() {
            if let Some(piece) = occupant {
                hash ^= zobrist::hash_piece(*piece, Square::from_index(index));
            }
        }

        if self.active_color == Color::Black {
            hash ^= zobrist::hash_side();
        }

        hash ^= zobrist::hash_castle(self.castling_rights);

        if let Some(ep) = self.ep_target {
            hash ^= zobrist::hash_ep_file(ep);
        }

        hash
    }

    /// Places `piece` on `square`, updating the hash incrementally. Overwrites whatever
    /// was there without XOR-ing it out first; callers must remove an existing occupant
    /// (via [`Board::remove_piece`]) before placing a different one on the same square.
    pub fn set_piece(&mut self, piece: Piece, square: Square) {
        self.squares[square.to_index()] = Some(piece);
        self.hash ^= zobrist::hash_piece(piece, square);
    }

    /// Removes whichever piece occupies `square`, updating the hash incrementally.
    /// No-op (and leaves the hash untouched) if the square is already empty.
    pub fn remove_piece(&mut self, square: Square) {
        if let Some(piece) = self.squares[square.to_index()].take() {
            self.hash ^= zobrist::hash_piece(piece, square);
        }
    }

    /// The piece on `square`, if any.
    #[inline(always)]
    pub const fn piece_on(&self, square: Square) -> Option<Piece> {
        self.squares[square.to_index()]
    }

    /// The square `color`'s king stands on. Panics if the board has no king of that
    /// color, which never happens for any board reachable from a legal start.
    pub fn king_square(&self, color: Color) -> Square {
        self.squares
            .iter()
            .position(|occupant| matches!(occupant, Some(p) if p.color() == color && p.piece_type() == crate::PieceType::King))
            .map(Square::from_index)
            .expect("every reachable board has exactly one king per color")
    }

    /// Converts the current position into a FEN string.
    pub fn to_fen(&self) -> String {
        let mut fen = String::with_capacity(64);

        for rank_index in (0..Rank::NUM_RANKS).rev() {
            let mut empty_run: u32 = 0;
            for file_index in 0..File::NUM_FILES {
                let square = Square::from_file_rank(File::from_index(file_index), Rank::from_index(rank_index));
                match self.piece_on(square) {
                    Some(piece) => {
                        if empty_run > 0 {
                            let _ = write!(fen, "{}", empty_run);
                            empty_run = 0;
                        }
                        fen.push(piece.to_char());
                    }
                    None => empty_run += 1,
                }
            }
            if empty_run > 0 {
                let _ = write!(fen, "{}", empty_run);
            }
            if rank_index != 0 {
                fen.push('/');
            }
        }

        let _ = write!(fen, " {} ", self.active_color);
        let _ = write!(fen, "{} ", self.castling_rights);

        match self.ep_target {
            Some(square) => fen.push_str(&square.to_string()),
            None => fen.push('-'),
        }

        let _ = write!(fen, " {} {}", self.halfmove_clock, self.fullmove_num);

        fen
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "FEN: {}", self.to_fen())?;
        writeln!(f, "Zobrist: {:016x}", self.hash)?;
        writeln!(f, "  +---+---+---+---+---+---+---+---+")?;
        for rank_index in (0..Rank::NUM_RANKS).rev() {
            write!(f, "{} ", rank_index + 1)?;
            for file_index in 0..File::NUM_FILES {
                let square = Square::from_file_rank(File::from_index(file_index), Rank::from_index(rank_index));
                let c = self.piece_on(square).map(|p| p.to_char()).unwrap_or(' ');
                write!(f, "| {} ", c)?;
            }
            writeln!(f, "|")?;
            writeln!(f, "  +---+---+---+---+---+---+---+---+")?;
        }
        writeln!(f, "    a   b   c   d   e   f   g   h")?;
        write!(f, "Side to move: {}", self.active_color)
    }
}

/// Parses a FEN string into a `Board`, per §6.1: six whitespace-separated fields, each
/// independently validated. Does not additionally check that the resulting position is
/// *legal* (no two kings, side-not-to-move in check, ...) — any syntactically valid FEN
/// is accepted, matching the permissive half of the spec's open question on this point.
impl FromStr for Board {
    type Err = ParseFenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = |kind: FenErrorKind| ParseFenError { fen: s.to_string(), kind };

        let fields: Vec<&str> = s.split_whitespace().collect();
        if fields.len() != 6 {
            return Err(err(FenErrorKind::WrongFieldCount(fields.len())));
        }

        let mut board = Board::empty();
        board.hash = 0;

        let mut rank_index: i32 = 7;
        let mut file_index: i32 = 0;
        for token in fields[0].chars() {
            match token {
                '/' => {
                    if file_index != 8 {
                        return Err(err(FenErrorKind::InvalidRowLength));
                    }
                    if rank_index == 0 {
                        return Err(err(FenErrorKind::InvalidBoardLayout));
                    }
                    rank_index -= 1;
                    file_index = 0;
                }
                '1'..='8' => {
                    file_index += token.to_digit(10).unwrap() as i32;
                    if file_index > 8 {
                        return Err(err(FenErrorKind::InvalidRowLength));
                    }
                }
                _ => {
                    if file_index >= 8 || !(0..=7).contains(&rank_index) {
                        return Err(err(FenErrorKind::InvalidRowLength));
                    }
                    let piece = Piece::try_from(token).map_err(|e| err(FenErrorKind::InvalidPiece(e)))?;
                    let square = Square::from_file_rank(File::from_index(file_index as usize), Rank::from_index(rank_index as usize));
                    board.set_piece(piece, square);
                    file_index += 1;
                }
            }
        }
        if file_index != 8 || rank_index != 0 {
            return Err(err(FenErrorKind::InvalidBoardLayout));
        }

        board.active_color = match fields[1] {
            "w" => Color::White,
            "b" => Color::Black,
            _ => return Err(err(FenErrorKind::InvalidSideToMove)),
        };

        board.castling_rights = fields[2]
            .parse()
            .map_err(|e| err(FenErrorKind::InvalidCastlingRights(e)))?;

        board.ep_target = match fields[3] {
            "-" => None,
            text => Some(text.parse().map_err(|e| err(FenErrorKind::InvalidEnPassantSquare(e)))?),
        };

        board.halfmove_clock = fields[4]
            .parse::<u16>()
            .ok()
            .filter(|&v| v <= 255)
            .map(|v| v as u8)
            .ok_or_else(|| err(FenErrorKind::InvalidHalfmoveClock))?;

        board.fullmove_num = fields[5]
            .parse::<u32>()
            .ok()
            .filter(|&v| (1..=65535).contains(&v))
            .map(|v| v as u16)
            .ok_or_else(|| err(FenErrorKind::InvalidFullmoveNumber))?;

        board.hash = board.compute_hash();
        board.history = vec![board.hash];

        Ok(board)
    }
}
