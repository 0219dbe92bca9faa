use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use log::debug;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};

use crate::board::{apply_move, Board, Move, Side};
use crate::error::Result;
use crate::search::{find_move, outcome, outcome_after, Outcome};

#[derive(Clone, Debug)]
pub struct SelfPlayParams {
    pub games: usize,
    pub max_plies: usize,
    pub seed: u64,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRecord {
    pub moves: Vec<String>,
    /// `None` when `max_plies` ran out first.
    pub outcome: Option<Outcome>,
}

/// Plays `params.games` random-vs-random games from `start`, White first.
/// Game `gi` uses seed `params.seed + gi`, so runs are reproducible.
/// `on_game` sees each record as soon as its game ends.
pub fn generate_games<F>(start: &Board, params: &SelfPlayParams, mut on_game: F) -> Result<Vec<GameRecord>>
where
    F: FnMut(&GameRecord),
{
    let mut games = Vec::with_capacity(params.games);
    for gi in 0..params.games {
        let mut rng = SmallRng::seed_from_u64(params.seed.wrapping_add(gi as u64));
        let record = play_game(start, params.max_plies, &mut rng)?;
        on_game(&record);
        games.push(record);
    }
    Ok(games)
}

pub fn play_game(start: &Board, max_plies: usize, rng: &mut SmallRng) -> Result<GameRecord> {
    let mut board = start.clone();
    let mut side = Side::White;
    let mut moves = Vec::new();
    let mut state = outcome(side, &board)?;
    while !state.is_terminal() && moves.len() < max_plies {
        let (piece, dest) = find_move(&board, side, rng)?;
        moves.push(Move::new(piece.pos, dest).to_string());
        let next = piece.move_to(dest, &board);
        state = outcome_after(side, &board, dest, &next)?;
        board = next;
        side = side.opponent();
    }
    let record = GameRecord { moves, outcome: state.is_terminal().then_some(state) };
    debug!("selfplay game: {} plies, {:?}", record.moves.len(), record.outcome);
    Ok(record)
}

/// Replays a record from `start`, returning the final board.
pub fn replay(start: &Board, record: &GameRecord) -> Result<Board> {
    let mut board = start.clone();
    for mv in &record.moves {
        let mv: Move = mv.parse()?;
        board = apply_move(&board, mv)?;
    }
    Ok(board)
}

/// One JSON object per line.
pub fn write_records<P: AsRef<Path>>(games: &[GameRecord], path: P) -> anyhow::Result<()> {
    let mut w = BufWriter::new(File::create(path)?);
    for g in games {
        writeln!(w, "{}", serde_json::to_string(g)?)?;
    }
    w.flush()?;
    Ok(())
}

pub fn read_records<P: AsRef<Path>>(path: P) -> anyhow::Result<Vec<GameRecord>> {
    let r = BufReader::new(File::open(path)?);
    let mut out = Vec::new();
    for line in r.lines() {
        let line = line?;
        if line.trim().is_empty() { continue; }
        out.push(serde_json::from_str(&line)?);
    }
    Ok(out)
}
