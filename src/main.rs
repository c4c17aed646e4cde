use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;

use clap::Parser;
use log::{debug, error};

mod board;
mod loader;
mod solver;

/// Solve a 9x9 Sudoku puzzle by exhaustive backtracking.
#[derive(Parser, Debug)]
#[command(version)]
struct Cli {
    /// Puzzle file: nine lines of nine whitespace-separated cells,
    /// 0 for an empty cell.
    #[arg(default_value = "board.txt")]
    puzzle: PathBuf,
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    let mut board = match loader::read_board(&cli.puzzle) {
        Ok(board) => board,
        Err(err) => {
            error!("failed to load {}: {}", cli.puzzle.display(), err);
            return ExitCode::FAILURE;
        }
    };
    debug!("loaded puzzle with {} givens", board.digits().filter(|&&d| d != 0).count());

    println!("The board to solve:");
    print!("{board}");

    let start_time = Instant::now();
    let solved = solver::solve(&mut board);
    debug!("search finished in {:?}", start_time.elapsed());

    if !solved {
        println!("\nPuzzle has no solution");
        return ExitCode::FAILURE;
    }

    println!("\nThe solved board:");
    print!("{board}");
    ExitCode::SUCCESS
}
