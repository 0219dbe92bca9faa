use serde::{Deserialize, Serialize};

use crate::board::{Board, Coord, Kind, Side};
use crate::error::Result;

/// Result of looking at a position from the side to move.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    Ongoing,
    Checkmate { winner: Side },
    Stalemate,
}

impl Outcome {
    pub fn is_terminal(self) -> bool { self != Outcome::Ongoing }
}

/// Returns true if `side`'s king is attacked by any opposing piece.
/// Fails with `MissingKing` when `side` has no king on the board.
pub fn is_check(side: Side, board: &Board) -> Result<bool> {
    let king = board.king(side)?;
    Ok(board.pieces_of(side.opponent()).any(|p| p.can_reach(king.pos, board)))
}

/// Returns true if `side` has at least one legal move anywhere on the board.
pub fn has_legal_move(side: Side, board: &Board) -> bool {
    board
        .pieces_of(side)
        .any(|p| board.squares().any(|sq| p.can_move_to(sq, board)))
}

/// Returns true if `side` is in check and has no move that escapes it.
pub fn is_checkmate(side: Side, board: &Board) -> Result<bool> {
    if !is_check(side, board)? { return Ok(false); }
    Ok(!has_legal_move(side, board))
}

/// Returns true if `side` is not in check but has no legal move.
pub fn is_stalemate(side: Side, board: &Board) -> Result<bool> {
    if is_check(side, board)? { return Ok(false); }
    Ok(!has_legal_move(side, board))
}

/// Classifies the position for `side_to_move`. Fails with `MissingKing`
/// unless `side_to_move` has a king on the board.
pub fn outcome(side_to_move: Side, board: &Board) -> Result<Outcome> {
    if is_checkmate(side_to_move, board)? {
        return Ok(Outcome::Checkmate { winner: side_to_move.opponent() });
    }
    if is_stalemate(side_to_move, board)? {
        return Ok(Outcome::Stalemate);
    }
    Ok(Outcome::Ongoing)
}

/// Classifies `after`, the board reached when `mover` played onto `dest` of
/// `before`. Taking the opposing king wins outright; this only happens from a
/// start position that already had that king in check.
pub fn outcome_after(mover: Side, before: &Board, dest: Coord, after: &Board) -> Result<Outcome> {
    if matches!(before.piece_at(dest), Ok(p) if p.kind == Kind::King && p.side != mover) {
        return Ok(Outcome::Checkmate { winner: mover });
    }
    outcome(mover.opponent(), after)
}
