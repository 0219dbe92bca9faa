use chess_puzzle::board::{legal_moves, Board, Move, Piece, Side};
use chess_puzzle::search::find_move;
use chess_puzzle::PuzzleError;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use chess_puzzle::board::Side::{Black, White};

fn b1() -> Board {
    chess_puzzle::io::parse_board("5\nBb5, Bd4, Bc1, Kc5\nBc3, Be3, Kb3").unwrap()
}

#[test]
fn selected_move_is_legal() {
    let b = b1();
    for seed in 0..20 {
        let mut rng = SmallRng::seed_from_u64(seed);
        let (piece, dest) = find_move(&b, Black, &mut rng).expect("black can move");
        assert_eq!(piece.side, Black);
        assert!(piece.can_move_to(dest, &b), "seed {seed} picked illegal {:?} -> {dest}", piece);
        assert!(legal_moves(&b, Black).contains(&Move::new(piece.pos, dest)));
    }
}

#[test]
fn same_seed_same_move() {
    let b = b1();
    let pick = |seed| find_move(&b, Black, &mut SmallRng::seed_from_u64(seed)).unwrap();
    assert_eq!(pick(99), pick(99));
}

#[test]
fn destination_is_first_legal_square_for_chosen_piece() {
    let b = b1();
    for seed in 0..10 {
        let (piece, dest) = find_move(&b, White, &mut SmallRng::seed_from_u64(seed)).unwrap();
        assert_eq!(Some(dest), piece.legal_moves(&b).first().copied());
    }
}

#[test]
fn checkmated_side_has_no_move() {
    let b = Board::new(5, vec![
        Piece::king(2, 5, White),
        Piece::bishop(5, 5, White),
        Piece::king(2, 3, Black),
        Piece::bishop(5, 3, Black),
        Piece::bishop(1, 2, Black),
        Piece::bishop(3, 1, White),
        Piece::bishop(4, 1, White),
    ]);
    let mut rng = SmallRng::seed_from_u64(3);
    assert_eq!(find_move(&b, Black, &mut rng), Err(PuzzleError::NoMove(Black)));
    assert!(PuzzleError::NoMove(Black).is_fatal());
}
