use chess_puzzle::board::{decode, encode, Coord, Move};
use chess_puzzle::PuzzleError;

#[test]
fn locations_round_trip_over_format_domain() {
    for file in 1..=26 {
        for rank in 1..=99 {
            let c = Coord::new(file, rank);
            assert_eq!(decode(&encode(c)).unwrap(), c, "round trip failed for {c:?}");
        }
    }
}

#[test]
fn upper_case_files_decode() {
    assert_eq!(decode("E2").unwrap(), decode("e2").unwrap());
    assert_eq!("D4".parse::<Coord>().unwrap(), Coord::new(4, 4));
}

#[test]
fn bad_locations_are_format_errors() {
    assert!(matches!(decode("44"), Err(PuzzleError::Format(_))));
    assert!(matches!(decode("d"), Err(PuzzleError::Format(_))));
    assert!(matches!(decode("d4x"), Err(PuzzleError::Format(_))));
}

#[test]
fn move_text_matches_console_form() {
    let mv: Move = "c1D2".parse().expect("valid move");
    assert_eq!(mv.from, Coord::new(3, 1));
    assert_eq!(mv.to, Coord::new(4, 2));
    assert_eq!(mv.to_string(), "c1d2");
}
