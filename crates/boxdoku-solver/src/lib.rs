//! Constraint propagation and backtracking search for boxdoku boards.
//!
//! This crate solves boards from [`boxdoku_core`] with two cooperating
//! layers:
//!
//! - [`saturator`]: pure propagation strategies that fix forced cells in
//!   place without guessing ([`NakedSingle`](saturator::NakedSingle),
//!   [`HiddenSingle`](saturator::HiddenSingle))
//! - [`BacktrackSolver`]: a depth-first search that interleaves saturation
//!   with branching over cloned board states, returning either the first
//!   solution or the exhaustive, canonically ordered set of solutions
//!
//! Long searches stop cooperatively through a [`CancelToken`]; a cancelled
//! search reports [`SolveOutcome::Cancelled`] instead of a result.
//!
//! # Examples
//!
//! ```
//! use boxdoku_core::{BitBoard, Dimensions, Structure, Board as _};
//! use boxdoku_solver::{BacktrackSolver, CancelToken, SolveOutcome};
//!
//! let mut board = BitBoard::new(Dimensions::new(2, 2));
//! board.set_cell(Structure::Row, 0, 0, 1)?;
//!
//! let solver = BacktrackSolver::with_single_saturators();
//! match solver.find_first_solution(&board, &CancelToken::new()) {
//!     SolveOutcome::Found(solution) => assert!(solution.is_solution()),
//!     SolveOutcome::NoSolution | SolveOutcome::Cancelled => unreachable!(),
//! }
//! # Ok::<(), boxdoku_core::ConstraintViolation>(())
//! ```

pub use self::{backtrack::*, cancel::*, error::*};

pub mod saturator;

mod backtrack;
mod cancel;
mod error;

#[cfg(test)]
mod testing;
