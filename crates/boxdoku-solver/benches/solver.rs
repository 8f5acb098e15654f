//! Benchmarks for saturation and full solves.
//!
//! # Running
//!
//! ```sh
//! cargo bench --bench solver
//! ```

use std::hint;

use boxdoku_core::{BitBoard, Board as _, Dimensions, Structure, UNSET_CELL};
use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};

use boxdoku_solver::{BacktrackSolver, CancelToken};

const CLASSIC_PUZZLE: &str = "
    5 3 . . 7 . . . .
    6 . . 1 9 5 . . .
    . 9 8 . . . . 6 .
    8 . . . 6 . . . 3
    4 . . 8 . 3 . . 1
    7 . . . 2 . . . 6
    . 6 . . . . 2 8 .
    . . . 4 1 9 . . 5
    . . . . 8 . . 7 9
";

fn classic_board() -> BitBoard {
    let mut board = BitBoard::new(Dimensions::new(3, 3));
    let rows = CLASSIC_PUZZLE
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty());
    for (row, line) in rows.enumerate() {
        for (col, token) in line.split_whitespace().enumerate() {
            let value = if token == "." {
                UNSET_CELL
            } else {
                token.parse().expect("bench grid tokens are digits or `.`")
            };
            board
                .set_cell(Structure::Row, row, col, value)
                .expect("the bench puzzle is consistent");
        }
    }
    board
}

fn bench_saturate(c: &mut Criterion) {
    let solver = BacktrackSolver::with_single_saturators();
    let board = classic_board();

    c.bench_with_input(
        BenchmarkId::new("saturate", "classic_9x9"),
        &board,
        |b, board| b.iter(|| hint::black_box(solver.saturate(board))),
    );
}

fn bench_find_first_solution(c: &mut Criterion) {
    let solver = BacktrackSolver::with_single_saturators();
    let board = classic_board();
    let cancel = CancelToken::new();

    c.bench_with_input(
        BenchmarkId::new("find_first_solution", "classic_9x9"),
        &board,
        |b, board| b.iter(|| hint::black_box(solver.find_first_solution(board, &cancel))),
    );
}

fn bench_find_all_solutions(c: &mut Criterion) {
    let solver = BacktrackSolver::with_single_saturators();
    let board = classic_board();
    let cancel = CancelToken::new();

    c.bench_with_input(
        BenchmarkId::new("find_all_solutions", "classic_9x9"),
        &board,
        |b, board| b.iter(|| hint::black_box(solver.find_all_solutions(board, &cancel))),
    );
}

criterion_group!(
    benches,
    bench_saturate,
    bench_find_first_solution,
    bench_find_all_solutions
);
criterion_main!(benches);
