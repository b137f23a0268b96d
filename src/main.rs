//! Console entry point: parse dimensions, build the board and the random
//! opponent, run the session.

use anyhow::Result;
use clap::Parser;

use amoba::{Board, RandomPolicy, Session};

#[derive(Parser, Debug)]
#[command(name = "amoba", about = "Four in a row against a random machine opponent")]
struct Args {
    /// Board rows (5..=25, at least as many as columns)
    #[arg(default_value_t = 10)]
    rows: usize,

    /// Board columns (5..=25)
    #[arg(default_value_t = 10)]
    cols: usize,

    /// Seed for the machine opponent, for reproducible games
    #[arg(long)]
    seed: Option<u64>,

    /// Save file loaded at startup and used by bare save/load commands
    #[arg(long, default_value = "board.txt")]
    file: String,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let board = match Board::new(args.rows, args.cols) {
        Ok(board) => board,
        Err(err) => {
            println!("{err}; using the default 10x10 board");
            Board::new(10, 10)?
        }
    };

    let policy = match args.seed {
        Some(seed) => RandomPolicy::seeded(seed),
        None => RandomPolicy::from_entropy(),
    };

    Session::new(board, policy)
        .with_save_file(args.file)
        .run()
}
