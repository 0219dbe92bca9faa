use anyhow::Result;
use chess_puzzle::io::read_board;
use chess_puzzle::session::GameSession;
use clap::Parser;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use std::io;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about = "Play a King and Bishop puzzle against a random opponent", long_about = None)]
struct Args {
    /// Seed for Black's move choice (random if omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// Board file to start from instead of prompting for one
    #[arg(long)]
    board: Option<PathBuf>,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let rng = match args.seed {
        Some(seed) => SmallRng::seed_from_u64(seed),
        None => SmallRng::from_entropy(),
    };

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut session = GameSession::new(stdin.lock(), stdout.lock(), rng);
    if let Some(path) = args.board {
        session = session.with_board(read_board(&path)?);
    }
    session.run()
}
