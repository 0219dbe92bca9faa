use log::debug;
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;

use crate::board::{Board, Coord, Piece, Side};
use crate::error::{PuzzleError, Result};

/// Picks a legal move for `side`.
///
/// Pieces are tried in an order shuffled by `rng`; for each piece the squares
/// are scanned in [`Board::squares`] order and the first legal destination
/// wins. So the RNG decides which piece moves, never where it goes.
/// Fails with `NoMove` if `side` cannot move at all.
pub fn find_move(board: &Board, side: Side, rng: &mut SmallRng) -> Result<(Piece, Coord)> {
    let mut pieces: Vec<Piece> = board.pieces_of(side).copied().collect();
    pieces.shuffle(rng);
    for piece in pieces {
        if let Some(dest) = board.squares().find(|&sq| piece.can_move_to(sq, board)) {
            debug!("selector: {:?} {} -> {}", piece.kind, piece.pos, dest);
            return Ok((piece, dest));
        }
    }
    Err(PuzzleError::NoMove(side))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use crate::board::Side::{Black, White};

    #[test]
    fn lone_king_takes_first_square_in_scan_order() {
        let b = Board::new(5, vec![Piece::king(3, 3, Black), Piece::king(5, 5, White)]);
        let mut rng = SmallRng::seed_from_u64(7);
        let (p, dest) = find_move(&b, Black, &mut rng).unwrap();
        assert_eq!(p, Piece::king(3, 3, Black));
        assert_eq!(dest, Coord::new(2, 2));
    }

    #[test]
    fn stalemated_side_has_no_move() {
        let b = Board::new(4, vec![Piece::king(1, 1, Black), Piece::king(3, 2, White), Piece::bishop(3, 4, White)]);
        let mut rng = SmallRng::seed_from_u64(1);
        assert_eq!(find_move(&b, Black, &mut rng), Err(PuzzleError::NoMove(Black)));
    }
}
