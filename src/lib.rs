// King and Bishop puzzle engine: rules, board files, random opponent
pub mod board;
pub mod error;
pub mod io;
pub mod perft;
pub mod search;
pub mod selfplay;
pub mod session;

pub use board::{Board, Coord, Kind, Move, Piece, Side};
pub use error::PuzzleError;
