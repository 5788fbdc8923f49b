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

//! Process-wide Zobrist key tables.
//!
//! The tables are generated once, on first access, from a fixed seed via
//! [`Xoshiro256PlusPlus`](crate::gen::random::Xoshiro256PlusPlus). Every `Board` in the
//! process reads the same `KEYS`, so two independently constructed positions that agree
//! on squares, side to move, castling rights, and en passant file always hash equal.

use once_cell::sync::Lazy;

use crate::gen::random::Xoshiro256PlusPlus;
use crate::{CastleRights, Piece, Square};

/// The fixed seed the key table is drawn from. Any seed works; what matters is that it
/// never changes, so that the keys are stable across runs and across every `Board`
/// instance built from this crate.
const SEED: [u64; 4] = [
    0x9E3779B97F4A7C15,
    0xBF58476D1CE4E5B9,
    0x94D049BB133111EB,
    0x2545F4914F6CDD1D,
];

pub struct ZobristKeys {
    /// One key per (piece, square) pair, indexed `[piece.to_index()][square.to_index()]`.
    pub piece_square: [[u64; Square::NUM_SQUARES]; Piece::NUM_PIECES],
    /// XORed in whenever it is Black to move.
    pub side: u64,
    /// One key per castling-rights value, indexed by `CastleRights::to_index()`.
    pub castle: [u64; CastleRights::NUM_CASTLING_RIGHTS],
    /// One key per en-passant file, indexed `0..8` (A..H).
    pub ep_file: [u64; 8],
}

/// The process-wide key table, initialised once under a one-shot guard on first use.
pub static KEYS: Lazy<ZobristKeys> = Lazy::new(|| {
    let mut rng: Xoshiro256PlusPlus = Xoshiro256PlusPlus::new(SEED);

    let mut piece_square: [[u64; Square::NUM_SQUARES]; Piece::NUM_PIECES] =
        [[0; Square::NUM_SQUARES]; Piece::NUM_PIECES];
    for piece_row in piece_square.iter_mut() {
        for key in piece_row.iter_mut() {
            *key = rng.next();
        }
    }

    let side: u64 = rng.next();

    let mut castle: [u64; CastleRights::NUM_CASTLING_RIGHTS] = [0; CastleRights::NUM_CASTLING_RIGHTS];
    for key in castle.iter_mut() {
        *key = rng.next();
    }

    let mut ep_file: [u64; 8] = [0; 8];
    for key in ep_file.iter_mut() {
        *key = rng.next();
    }

    ZobristKeys { piece_square, side, castle, ep_file }
});

/// The single-XOR contribution of `piece` standing on `square`. Used both to build a
/// position's hash from scratch and to incrementally update it when a piece is placed
/// on, or removed from, that square (XOR is its own inverse).
#[inline]
pub fn hash_piece(piece: Piece, square: Square) -> u64 {
    KEYS.piece_square[piece.to_index()][square.to_index()]
}

/// The contribution of the current castling rights.
#[inline]
pub fn hash_castle(rights: CastleRights) -> u64 {
    KEYS.castle[rights.to_index()]
}

/// The contribution of an en passant target square, keyed by file only (rank is implied
/// by side to move, so two positions with the same ep file hash identically regardless
/// of which side just advanced).
#[inline]
pub fn hash_ep_file(square: Square) -> u64 {
    KEYS.ep_file[square.file().to_index()]
}

/// The contribution of the side to move (XORed in iff Black is to move).
#[inline]
pub fn hash_side() -> u64 {
    KEYS.side
}
