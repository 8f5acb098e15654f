//! Command-line front end for the boxdoku solver.
//!
//! Loads a puzzle from a plain-text grid file, runs the backtracking engine
//! with the two single-cell elimination strategies, and prints the result.
//! The exit status distinguishes a solved puzzle from "no solution" and from
//! invalid input.

use std::path::PathBuf;
use std::process::ExitCode;

use boxdoku_core::Board;
use boxdoku_solver::{BacktrackSolver, CancelToken, SolveOutcome};
use clap::Parser;

mod grid_file;

/// Solve generalized sudoku puzzles from plain-text grid files.
#[derive(Parser, Debug)]
#[command(name = "boxdoku", version, about)]
struct Cli {
    /// Path to the puzzle file: first line `box_rows box_cols`, then one
    /// line per board row of `.`/value tokens.
    path: PathBuf,

    /// Print every solution in canonical order instead of the first one.
    #[arg(short, long)]
    all: bool,

    /// Print the saturation fixpoint without any backtracking search.
    #[arg(short, long, conflicts_with = "all")]
    saturate: bool,
}

fn main() -> ExitCode {
    better_panic::install();
    env_logger::init();

    let cli = Cli::parse();
    let board = match grid_file::load_board(&cli.path) {
        Ok(board) => board,
        Err(err) => {
            eprintln!("{err}");
            return ExitCode::FAILURE;
        }
    };

    let solver = BacktrackSolver::with_single_saturators();
    let cancel = CancelToken::new();

    if cli.saturate {
        let saturated = solver.saturate(&board);
        log::info!(
            "saturation {} the puzzle",
            if saturated.is_solution() {
                "solved"
            } else {
                "did not solve"
            }
        );
        println!("{saturated}");
        return ExitCode::SUCCESS;
    }

    if cli.all {
        match solver.find_all_solutions(&board, &cancel) {
            SolveOutcome::Found(solutions) => {
                log::info!("found {} solution(s)", solutions.len());
                for (index, solution) in solutions.iter().enumerate() {
                    if index > 0 {
                        println!();
                    }
                    println!("{solution}");
                }
                ExitCode::SUCCESS
            }
            SolveOutcome::NoSolution => {
                eprintln!("no solution");
                ExitCode::FAILURE
            }
            SolveOutcome::Cancelled => {
                eprintln!("cancelled");
                ExitCode::FAILURE
            }
        }
    } else {
        match solver.find_first_solution(&board, &cancel) {
            SolveOutcome::Found(solution) => {
                println!("{solution}");
                ExitCode::SUCCESS
            }
            SolveOutcome::NoSolution => {
                eprintln!("no solution");
                ExitCode::FAILURE
            }
            SolveOutcome::Cancelled => {
                eprintln!("cancelled");
                ExitCode::FAILURE
            }
        }
    }
}
