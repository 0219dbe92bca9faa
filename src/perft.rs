use crate::board::{legal_moves, Board, Move, Side};

/// Legal moves of `side`, each paired with the board it leads to.
pub fn successors(board: &Board, side: Side) -> Vec<(Move, Board)> {
    board
        .pieces_of(side)
        .flat_map(|p| p.legal_moves(board).into_iter().map(move |to| (Move::new(p.pos, to), p.move_to(to, board))))
        .collect()
}

/// Counts legal move sequences of length `depth` starting with `side` to move.
/// A side with no legal moves ends its branch, so terminal positions below
/// the horizon contribute nothing.
pub fn perft(board: &Board, side: Side, depth: u32) -> u64 {
    if depth == 0 { return 1; }
    if depth == 1 { return legal_moves(board, side).len() as u64; }
    successors(board, side)
        .iter()
        .map(|(_, child)| perft(child, side.opponent(), depth - 1))
        .sum()
}

/// Per-root-move counts, in the order `legal_moves` yields them.
pub fn divide(board: &Board, side: Side, depth: u32) -> Vec<(Move, u64)> {
    if depth == 0 { return Vec::new(); }
    successors(board, side)
        .into_iter()
        .map(|(mv, child)| (mv, perft(&child, side.opponent(), depth - 1)))
        .collect()
}
