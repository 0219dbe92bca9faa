use chess_puzzle::io::read_board;
use chess_puzzle::search::Outcome;
use chess_puzzle::selfplay::{generate_games, write_records, SelfPlayParams};
use chess_puzzle::Side;
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "chess-puzzle-selfplay", about = "Play random games from a board file and record them")]
struct Args {
    #[arg(long)]
    board: PathBuf,
    #[arg(long, default_value_t = 100)]
    games: usize,
    #[arg(long, default_value_t = 200)]
    max_plies: usize,
    #[arg(long, default_value_t = 42)]
    seed: u64,
    #[arg(long, default_value = "out/selfplay.jsonl")]
    out: PathBuf,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let a = Args::parse();
    let params = SelfPlayParams { games: a.games, max_plies: a.max_plies, seed: a.seed };
    let start = read_board(&a.board)?;

    eprintln!("Playing {} games from {} (max_plies={}, seed={})", params.games, a.board.display(), params.max_plies, params.seed);
    let pb = ProgressBar::new(params.games as u64);
    pb.set_style(ProgressStyle::with_template("{bar:40} {pos}/{len} games")?);
    let games = generate_games(&start, &params, |_| pb.inc(1))?;
    pb.finish_and_clear();

    let (mut white, mut black, mut drawn, mut open) = (0, 0, 0, 0);
    for g in &games {
        match g.outcome {
            Some(Outcome::Checkmate { winner: Side::White }) => white += 1,
            Some(Outcome::Checkmate { winner: Side::Black }) => black += 1,
            Some(_) => drawn += 1,
            None => open += 1,
        }
    }
    eprintln!("White mates: {white}, Black mates: {black}, stalemates: {drawn}, unfinished: {open}");

    if let Some(dir) = a.out.parent() {
        if !dir.as_os_str().is_empty() { std::fs::create_dir_all(dir)?; }
    }
    write_records(&games, &a.out)?;
    eprintln!("Wrote {}", a.out.display());
    Ok(())
}
