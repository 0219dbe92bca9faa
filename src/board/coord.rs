use std::fmt;
use std::str::FromStr;

use crate::error::{PuzzleError, Result};

/// A square on the board, 1-indexed: `a1` is `Coord { file: 1, rank: 1 }`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coord {
    pub file: u32,
    pub rank: u32,
}

/// Largest file index the algebraic format can spell (`z`).
pub const MAX_FILE: u32 = 26;

impl Coord {
    #[inline]
    pub const fn new(file: u32, rank: u32) -> Self { Self { file, rank } }

    /// Chebyshev distance between two squares.
    #[inline]
    pub fn l_inf(self, other: Coord) -> u32 {
        self.file.abs_diff(other.file).max(self.rank.abs_diff(other.rank))
    }
}

/// Parses an algebraic location such as `e2`, `B7` or `z10`.
pub fn decode(loc: &str) -> Result<Coord> {
    let mut chars = loc.chars();
    let lead = chars.next().ok_or_else(|| PuzzleError::format("empty location"))?;
    if !lead.is_ascii_alphabetic() {
        return Err(PuzzleError::format(format!("bad file in location {loc:?}")));
    }
    let file = (lead.to_ascii_lowercase() as u32) - ('a' as u32) + 1;
    let digits = chars.as_str();
    if !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(PuzzleError::format(format!("bad rank in location {loc:?}")));
    }
    let rank = digits
        .parse::<u32>()
        .map_err(|_| PuzzleError::format(format!("bad rank in location {loc:?}")))?;
    if rank == 0 {
        return Err(PuzzleError::format(format!("rank out of range in location {loc:?}")));
    }
    Ok(Coord { file, rank })
}

/// Inverse of [`decode`]. Only files `1..=26` have a letter; anything else
/// renders as `?` and will not decode back.
pub fn encode(c: Coord) -> String {
    let column = if (1..=MAX_FILE).contains(&c.file) {
        char::from(b'a' + (c.file - 1) as u8)
    } else {
        '?'
    };
    format!("{}{}", column, c.rank)
}

impl FromStr for Coord {
    type Err = PuzzleError;

    fn from_str(s: &str) -> Result<Self> { decode(s) }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(&encode(*self)) }
}

/// A source and destination pair, written `a2a3`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Move {
    pub from: Coord,
    pub to: Coord,
}

impl Move {
    pub const fn new(from: Coord, to: Coord) -> Self { Self { from, to } }
}

impl FromStr for Move {
    type Err = PuzzleError;

    /// The source is the first letter plus its digits; the destination is the rest.
    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        let split = s
            .char_indices()
            .skip(1)
            .find(|(_, ch)| ch.is_ascii_alphabetic())
            .map(|(i, _)| i)
            .ok_or_else(|| PuzzleError::format(format!("move {s:?} has no destination")))?;
        let from = decode(&s[..split])?;
        let to = decode(&s[split..])?;
        Ok(Move { from, to })
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { write!(f, "{}{}", self.from, self.to) }
}
