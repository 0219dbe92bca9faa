use log::debug;

use super::{Board, Coord, Move, Side};
use crate::error::Result;
use crate::search::safety::is_check;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Kind {
    King,
    Bishop,
}

impl Kind {
    /// Letter used in board files: `K` or `B`.
    pub fn tag(self) -> char {
        match self {
            Kind::King => 'K',
            Kind::Bishop => 'B',
        }
    }

    pub fn from_tag(tag: char) -> Option<Kind> {
        match tag {
            'K' => Some(Kind::King),
            'B' => Some(Kind::Bishop),
            _ => None,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: Kind,
    pub side: Side,
    pub pos: Coord,
}

impl Piece {
    pub const fn new(kind: Kind, side: Side, pos: Coord) -> Self { Self { kind, side, pos } }

    pub const fn king(file: u32, rank: u32, side: Side) -> Self { Self::new(Kind::King, side, Coord::new(file, rank)) }

    pub const fn bishop(file: u32, rank: u32, side: Side) -> Self { Self::new(Kind::Bishop, side, Coord::new(file, rank)) }

    /// Attack geometry only: ignores what stands on `dest`, whose turn it is,
    /// and whether the move would expose the own king.
    pub fn can_reach(&self, dest: Coord, board: &Board) -> bool {
        if dest == self.pos {
            return false;
        }
        match self.kind {
            Kind::King => self.pos.l_inf(dest) <= 1,
            Kind::Bishop => {
                if !board.in_bounds(dest) {
                    return false;
                }
                if self.pos.file.abs_diff(dest.file) != self.pos.rank.abs_diff(dest.rank) {
                    return false;
                }
                diagonal_between(self.pos, dest).all(|sq| !board.piece_present(sq))
            }
        }
    }

    /// Full legality for the owner of this piece.
    ///
    /// A board without the mover's king cannot certify the self-check rule,
    /// so such moves are reported as illegal.
    pub fn can_move_to(&self, dest: Coord, board: &Board) -> bool {
        if !board.in_bounds(dest) || dest == self.pos {
            return false;
        }
        if !self.can_reach(dest, board) {
            return false;
        }
        if let Ok(target) = board.piece_at(dest) {
            if target.side == self.side {
                return false;
            }
        }
        let after = self.move_to(dest, board);
        matches!(is_check(self.side, &after), Ok(false))
    }

    /// Board after this piece moves to `dest`, capturing whatever stands there.
    /// Does not validate; call [`Piece::can_move_to`] first.
    pub fn move_to(&self, dest: Coord, board: &Board) -> Board {
        let captured = board.piece_present(dest).then_some(dest);
        board.with_move(self, captured, Piece { pos: dest, ..*self })
    }

    /// Legal destinations in [`Board::squares`] order.
    pub fn legal_moves(&self, board: &Board) -> Vec<Coord> {
        board.squares().filter(|&sq| self.can_move_to(sq, board)).collect()
    }
}

/// Squares strictly between two diagonal endpoints.
fn diagonal_between(from: Coord, to: Coord) -> impl Iterator<Item = Coord> {
    let step_f: i64 = if to.file > from.file { 1 } else { -1 };
    let step_r: i64 = if to.rank > from.rank { 1 } else { -1 };
    let n = from.file.abs_diff(to.file) as i64;
    (1..n).map(move |i| {
        Coord::new((from.file as i64 + i * step_f) as u32, (from.rank as i64 + i * step_r) as u32)
    })
}

/// Applies `mv` without checking legality. Fails with `NotFound` if the
/// source square is empty.
pub fn apply_move(board: &Board, mv: Move) -> Result<Board> {
    let piece = board.piece_at(mv.from)?;
    Ok(piece.move_to(mv.to, board))
}

/// All legal moves for `side`, piece by piece in board order.
pub fn legal_moves(board: &Board, side: Side) -> Vec<Move> {
    let moves: Vec<Move> = board
        .pieces_of(side)
        .flat_map(|p| p.legal_moves(board).into_iter().map(move |to| Move::new(p.pos, to)))
        .collect();
    debug!("{} legal moves for {}", moves.len(), side);
    moves
}
