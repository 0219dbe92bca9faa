use chess_puzzle::board::{Board, Coord, Kind, Piece, Side};
use chess_puzzle::io::{format_board, parse_board, read_board, save_board, to_unicode};
use std::fs::create_dir_all;
use chess_puzzle::board::Side::{Black, White};

const B1_TEXT: &str = "5\nBb5, Bd4, Bc1, Kc5\nBc3, Be3, Kb3";

fn triples(b: &Board) -> Vec<(Kind, Side, Coord)> {
    let mut v: Vec<_> = b.pieces().iter().map(|p| (p.kind, p.side, p.pos)).collect();
    v.sort_by_key(|(k, s, c)| (*c, *k as u8, *s as u8));
    v
}

#[test]
fn parses_coursework_board() {
    let b = parse_board(B1_TEXT).expect("valid board");
    assert_eq!(b.size(), 5);
    let kinds: Vec<Kind> = b.pieces().iter().map(|p| p.kind).collect();
    assert_eq!(kinds, vec![Kind::Bishop, Kind::Bishop, Kind::Bishop, Kind::King, Kind::Bishop, Kind::Bishop, Kind::King]);
    assert_eq!(b.piece_at(Coord::new(3, 5)).unwrap(), Piece::king(3, 5, White));
    assert_eq!(b.piece_at(Coord::new(2, 3)).unwrap(), Piece::king(2, 3, Black));
}

#[test]
fn format_is_exact_inverse() {
    let b = parse_board(B1_TEXT).unwrap();
    assert_eq!(format_board(&b), B1_TEXT);
    let lone = Board::new(3, vec![Piece::king(1, 1, Black)]);
    assert_eq!(format_board(&lone), "3\n\nKa1");
}

#[test]
fn serialization_is_idempotent() {
    let boards = vec![
        parse_board(B1_TEXT).unwrap(),
        Board::new(8, vec![Piece::king(1, 1, White), Piece::bishop(8, 8, Black), Piece::king(8, 1, Black), Piece::bishop(4, 5, White)]),
        Board::new(26, vec![Piece::king(26, 26, White), Piece::king(1, 12, Black)]),
        Board::new(1, vec![]),
    ];
    for b in boards {
        let back = parse_board(&format_board(&b)).expect("reparse");
        assert_eq!(back.size(), b.size());
        pretty_assertions::assert_eq!(triples(&back), triples(&b));
    }
}

#[test]
fn save_and_read_file() {
    let dir = std::path::Path::new("target/board_io_test");
    create_dir_all(dir).unwrap();
    let path = dir.join("b1.txt");
    let b = parse_board(B1_TEXT).unwrap();
    save_board(&path, &b).unwrap();
    assert_eq!(std::fs::read_to_string(&path).unwrap(), B1_TEXT);
    assert_eq!(read_board(&path).unwrap(), b);
    assert!(read_board(dir.join("missing.txt")).is_err());
}

#[test]
fn trailing_newline_is_accepted() {
    let b = parse_board("5\nBb5, Bd4, Bc1, Kc5\nBc3, Be3, Kb3\n").unwrap();
    assert_eq!(b.pieces().len(), 7);
}

#[test]
fn unicode_picture_has_one_glyph_per_square() {
    let b = Board::new(5, vec![Piece::bishop(2, 2, White), Piece::king(4, 4, Black)]);
    let pic = to_unicode(&b);
    assert!(pic.contains('\u{2657}'));
    assert!(pic.contains('\u{265A}'));
    let rows: Vec<&str> = pic.lines().collect();
    assert_eq!(rows.len(), 5);
    assert!(rows.iter().all(|r| r.chars().count() == 5));
    assert_eq!(rows[1].chars().nth(1), Some('\u{2657}'));
    assert_eq!(rows[3].chars().nth(3), Some('\u{265A}'));
    assert_eq!(b.to_string(), pic);
}
