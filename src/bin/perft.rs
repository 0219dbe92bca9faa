use chess_puzzle::board::Side;
use chess_puzzle::io::read_board;
use chess_puzzle::perft::{perft, successors};

#[derive(clap::Parser, Debug)]
#[command(name = "perft", about = "Perft driver for King and Bishop boards")]
struct Args {
    /// Search depth
    #[arg(value_name = "DEPTH")]
    depth: u32,
    /// Board file in plain format
    #[arg(value_name = "BOARD")]
    board: std::path::PathBuf,
    /// Side to move first: white or black
    #[arg(long, default_value = "white")]
    side: String,
    /// Number of threads for root-split
    #[arg(long, default_value_t = 1)]
    threads: usize,
    /// Report elapsed time and NPS
    #[arg(long, default_value_t = false)]
    nps: bool,
    /// Print per-root-move counts
    #[arg(long, default_value_t = false)]
    divide: bool,
}

fn parse_side(s: &str) -> anyhow::Result<Side> {
    match s.to_lowercase().as_str() {
        "w" | "white" => Ok(Side::White),
        "b" | "black" => Ok(Side::Black),
        _ => anyhow::bail!("Invalid side: use 'white' or 'black'"),
    }
}

fn main() -> anyhow::Result<()> {
    use clap::Parser;
    use rayon::prelude::*;
    use std::time::Instant;

    env_logger::init();
    let args = Args::parse();
    let side = parse_side(&args.side)?;
    let base = read_board(&args.board)?;

    let pool = rayon::ThreadPoolBuilder::new().num_threads(args.threads.max(1)).build()?;
    let (counts, dt) = pool.install(|| {
        let t0 = Instant::now();
        let counts: Vec<(String, u64)> = if args.depth == 0 {
            Vec::new()
        } else {
            successors(&base, side)
                .into_par_iter()
                .map(|(mv, b)| (mv.to_string(), perft(&b, side.opponent(), args.depth - 1)))
                .collect()
        };
        (counts, t0.elapsed().as_secs_f64())
    });
    let nodes: u64 = if args.depth == 0 { 1 } else { counts.iter().map(|(_, n)| n).sum() };

    if args.divide {
        for (mv, n) in &counts { println!("{mv}: {n}"); }
    }
    if args.nps { println!("nodes: {nodes} elapsed: {:.3}s nps: {:.1}", dt, nodes as f64 / dt.max(f64::EPSILON)); }
    else { println!("nodes: {nodes}"); }
    Ok(())
}
