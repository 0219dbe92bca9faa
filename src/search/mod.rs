pub mod safety;
pub mod selector;

pub use safety::{has_legal_move, is_check, is_checkmate, is_stalemate, outcome, outcome_after, Outcome};
pub use selector::find_move;
