//! Board snapshots for the King and Bishop puzzle.
//!
//! A [`Board`] is never mutated once built. Moves go through
//! [`Piece::move_to`], which returns a fresh board and leaves the old one
//! usable for undo or comparison.

pub mod coord;
pub mod piece;

pub use coord::{decode, encode, Coord, Move};
pub use piece::{apply_move, legal_moves, Kind, Piece};

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{PuzzleError, Result};

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    White,
    Black,
}

impl Side {
    #[inline]
    pub fn opponent(self) -> Side {
        match self {
            Side::White => Side::Black,
            Side::Black => Side::White,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self { Side::White => "White", Side::Black => "Black" })
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    size: u32,
    pieces: Vec<Piece>,
}

impl Board {
    /// Builds a board from a size and piece list. At most one piece may stand
    /// on a square; debug builds assert it, [`crate::io::parse_board`] rejects
    /// such files with a `Format` error.
    pub fn new(size: u32, pieces: Vec<Piece>) -> Self {
        debug_assert!(
            pieces.iter().enumerate().all(|(i, p)| pieces[..i].iter().all(|q| q.pos != p.pos)),
            "two pieces on one square"
        );
        Self { size, pieces }
    }

    pub fn size(&self) -> u32 { self.size }

    pub fn pieces(&self) -> &[Piece] { &self.pieces }

    #[inline]
    pub fn in_bounds(&self, c: Coord) -> bool {
        (1..=self.size).contains(&c.file) && (1..=self.size).contains(&c.rank)
    }

    pub fn piece_present(&self, c: Coord) -> bool { self.pieces.iter().any(|p| p.pos == c) }

    pub fn piece_at(&self, c: Coord) -> Result<Piece> {
        self.pieces.iter().copied().find(|p| p.pos == c).ok_or(PuzzleError::NotFound(c))
    }

    pub fn pieces_of(&self, side: Side) -> impl Iterator<Item = &Piece> + '_ {
        self.pieces.iter().filter(move |p| p.side == side)
    }

    pub fn king(&self, side: Side) -> Result<Piece> {
        self.pieces_of(side)
            .copied()
            .find(|p| p.kind == Kind::King)
            .ok_or(PuzzleError::MissingKing(side))
    }

    /// Every square, files outer and ranks inner: a1, a2, .., b1, ..
    pub fn squares(&self) -> impl Iterator<Item = Coord> {
        let n = self.size;
        (1..=n).flat_map(move |file| (1..=n).map(move |rank| Coord::new(file, rank)))
    }

    /// Copy of this board without `mover` or whatever stands on `captured`,
    /// with `added` appended.
    pub(crate) fn with_move(&self, mover: &Piece, captured: Option<Coord>, added: Piece) -> Board {
        let mut pieces: Vec<Piece> = self
            .pieces
            .iter()
            .filter(|p| *p != mover && Some(p.pos) != captured)
            .copied()
            .collect();
        pieces.push(added);
        Board { size: self.size, pieces }
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(&crate::io::to_unicode(self)) }
}
