use thiserror::Error;

use crate::board::{Coord, Move, Side};

/// Errors raised by the rules engine.
///
/// `Format`, `NotFound` and `IllegalMove` come from bad input and are recoverable by asking
/// again. `MissingKing` and `NoMove` mean a caller broke a precondition.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum PuzzleError {
    /// A coordinate, move or board file could not be parsed
    #[error("Invalid format: {0}")]
    Format(String),

    /// A piece was requested from an empty square
    #[error("No piece at {0}")]
    NotFound(Coord),

    /// A well-formed move that the rules do not allow
    #[error("Illegal move: {0}")]
    IllegalMove(Move),

    /// The board has no king for the side being checked
    #[error("No King found for {0}")]
    MissingKing(Side),

    /// The move selector was asked to move a side without legal moves
    #[error("No valid move found for {0}")]
    NoMove(Side),
}

impl PuzzleError {
    pub fn format(msg: impl Into<String>) -> Self { PuzzleError::Format(msg.into()) }

    /// True for contract violations that the game loop must not swallow.
    pub fn is_fatal(&self) -> bool {
        matches!(self, PuzzleError::MissingKing(_) | PuzzleError::NoMove(_))
    }
}

pub type Result<T> = std::result::Result<T, PuzzleError>;
