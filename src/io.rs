//! Board files and the Unicode board picture.
//!
//! Plain format, three lines:
//!
//! ```text
//! 5
//! Bb5, Bd4, Bc1, Kc5
//! Bc3, Be3, Kb3
//! ```
//!
//! Size first, then White's pieces, then Black's, each token a kind letter
//! followed by an algebraic square.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use anyhow::Context;
use log::{info, warn};

use crate::board::{decode, Board, Coord, Kind, Piece, Side};
use crate::board::coord::MAX_FILE;
use crate::error::{PuzzleError, Result};

const TOKEN_SEP: &str = ", ";
const FILLER: char = '\u{2001}';

pub fn parse_board(text: &str) -> Result<Board> {
    let mut lines = text.lines();
    let size_line = lines.next().unwrap_or("").trim();
    let size: u32 = size_line
        .parse()
        .map_err(|_| PuzzleError::format(format!("board size {size_line:?} is not a number")))?;
    if !(1..=MAX_FILE).contains(&size) {
        return Err(PuzzleError::format(format!("board size {size} outside 1..={MAX_FILE}")));
    }
    let in_bounds = |c: Coord| (1..=size).contains(&c.file) && (1..=size).contains(&c.rank);
    let mut pieces = Vec::new();
    let mut seen = HashSet::new();
    for (side, line) in [Side::White, Side::Black].into_iter().zip(lines.by_ref()) {
        let line = line.trim();
        if line.is_empty() { continue; }
        for token in line.split(TOKEN_SEP) {
            let token = token.trim();
            let mut chars = token.chars();
            let tag = chars.next().ok_or_else(|| PuzzleError::format("empty piece token"))?;
            let pos = decode(chars.as_str())?;
            let Some(kind) = Kind::from_tag(tag) else {
                warn!("skipping piece token {token:?}: unknown kind {tag:?}");
                continue;
            };
            if !in_bounds(pos) {
                return Err(PuzzleError::format(format!("piece {token:?} is off a {size}x{size} board")));
            }
            if !seen.insert(pos) {
                return Err(PuzzleError::format(format!("two pieces on {pos}")));
            }
            pieces.push(Piece::new(kind, side, pos));
        }
    }
    if lines.any(|l| !l.trim().is_empty()) {
        warn!("ignoring lines after the Black pieces");
    }
    Ok(Board::new(size, pieces))
}

fn side_tokens(board: &Board, side: Side) -> String {
    board
        .pieces_of(side)
        .map(|p| format!("{}{}", p.kind.tag(), p.pos))
        .collect::<Vec<_>>()
        .join(TOKEN_SEP)
}

/// Inverse of [`parse_board`]. No newline after the Black line.
pub fn format_board(board: &Board) -> String {
    format!("{}\n{}\n{}", board.size(), side_tokens(board, Side::White), side_tokens(board, Side::Black))
}

pub fn read_board<P: AsRef<Path>>(path: P) -> anyhow::Result<Board> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).with_context(|| format!("read board file: {}", path.display()))?;
    let board = parse_board(&text).with_context(|| format!("parse board file: {}", path.display()))?;
    info!("loaded {}x{} board with {} pieces from {}", board.size(), board.size(), board.pieces().len(), path.display());
    Ok(board)
}

pub fn save_board<P: AsRef<Path>>(path: P, board: &Board) -> anyhow::Result<()> {
    let path = path.as_ref();
    fs::write(path, format_board(board)).with_context(|| format!("write board file: {}", path.display()))?;
    info!("saved board to {}", path.display());
    Ok(())
}

fn glyph(p: &Piece) -> char {
    match (p.kind, p.side) {
        (Kind::King, Side::White) => '\u{2654}',
        (Kind::King, Side::Black) => '\u{265A}',
        (Kind::Bishop, Side::White) => '\u{2657}',
        (Kind::Bishop, Side::Black) => '\u{265D}',
    }
}

/// One line per rank, rank 1 first; one glyph per file.
pub fn to_unicode(board: &Board) -> String {
    let n = board.size() as usize;
    let mut grid = vec![vec![FILLER; n]; n];
    for p in board.pieces() {
        if board.in_bounds(p.pos) {
            grid[p.pos.rank as usize - 1][p.pos.file as usize - 1] = glyph(p);
        }
    }
    grid.into_iter().map(|row| row.into_iter().collect::<String>()).collect::<Vec<_>>().join("\n")
}
