//! Depth-first backtracking search over cloned board states.

use boxdoku_core::{Board, BoxedBoard, NumberSet, Structure};

use crate::cancel::CancelToken;
use crate::error::Unsolvable;
use crate::saturator::{self, BoxedSaturator};

/// Outcome of a search entry point.
///
/// A cancelled search is reported distinctly from an exhausted one, so
/// callers can tell "the puzzle has no solution" apart from "the caller gave
/// up waiting".
#[derive(Debug, derive_more::IsVariant)]
pub enum SolveOutcome<T> {
    /// The search produced a result.
    Found(T),
    /// The search space was exhausted without finding a solution.
    NoSolution,
    /// The search observed a cancellation request and stopped early; any
    /// partial work was discarded.
    Cancelled,
}

impl<T> SolveOutcome<T> {
    /// Returns the payload of a successful search, discarding the outcome
    /// kind.
    pub fn into_found(self) -> Option<T> {
        match self {
            Self::Found(value) => Some(value),
            Self::NoSolution | Self::Cancelled => None,
        }
    }
}

/// Depth-first backtracking engine over a caller-supplied list of
/// saturators.
///
/// The engine never mutates a caller's board: every entry point works on an
/// internal clone, and every exploration step clones again, so failed
/// branches are simply dropped. Branching uses the minimum-remaining-values
/// heuristic (the open cell with the fewest candidates, row-major scan order
/// breaking ties) and explores candidate values in ascending order, which
/// makes the traversal — and therefore the first solution found —
/// deterministic.
///
/// # Examples
///
/// ```
/// use boxdoku_core::{BitBoard, Dimensions};
/// use boxdoku_solver::{BacktrackSolver, CancelToken, SolveOutcome};
///
/// let solver = BacktrackSolver::with_single_saturators();
/// let board = BitBoard::new(Dimensions::new(2, 2));
///
/// // An empty 4x4 board has many solutions; take them all.
/// match solver.find_all_solutions(&board, &CancelToken::new()) {
///     SolveOutcome::Found(solutions) => assert!(!solutions.is_empty()),
///     SolveOutcome::NoSolution | SolveOutcome::Cancelled => unreachable!(),
/// }
/// ```
#[derive(Debug, Clone)]
pub struct BacktrackSolver {
    saturators: Vec<BoxedSaturator>,
}

impl BacktrackSolver {
    /// Creates an engine with the given saturators.
    ///
    /// The saturators are applied in list order on every search step, so the
    /// order is part of the observable solving behavior and is preserved
    /// as given.
    #[must_use]
    pub fn new(saturators: Vec<BoxedSaturator>) -> Self {
        Self { saturators }
    }

    /// Creates an engine with the two single-cell elimination strategies in
    /// their default order (see [`saturator::single_saturators`]).
    #[must_use]
    pub fn with_single_saturators() -> Self {
        Self::new(saturator::single_saturators())
    }

    /// Returns the registered saturators in application order.
    #[must_use]
    pub fn saturators(&self) -> &[BoxedSaturator] {
        &self.saturators
    }

    /// Applies every registered saturator once, in order, each to its own
    /// internal fixpoint. Returns whether any of them changed the board.
    fn saturate_once(&self, board: &mut dyn Board) -> Result<bool, Unsolvable> {
        let mut changed = false;
        for saturator in &self.saturators {
            changed |= saturator.saturate(board)?;
        }
        Ok(changed)
    }

    /// Runs the registered saturators round by round on a clone of `board`
    /// until a round changes nothing or the clone becomes a full solution,
    /// and returns the clone.
    ///
    /// This is a best-effort entry point and never fails: if saturation
    /// proves the board unsolvable along the way, the loop simply stops and
    /// the clone is returned as it stands. The search entry points give the
    /// stronger guarantee.
    #[must_use]
    pub fn saturate(&self, board: &dyn Board) -> BoxedBoard {
        let mut clone = board.clone_box();
        loop {
            match self.saturate_once(clone.as_mut()) {
                Ok(changed) => {
                    if clone.is_solution() || !changed {
                        break;
                    }
                }
                Err(_) => break,
            }
        }
        clone
    }

    /// Searches depth-first for the first solution of `board`.
    ///
    /// Returns [`SolveOutcome::NoSolution`] when the search space is
    /// exhausted, or [`SolveOutcome::Cancelled`] as soon as `cancel` is
    /// observed. The caller's board is not mutated.
    #[must_use]
    pub fn find_first_solution(
        &self,
        board: &dyn Board,
        cancel: &CancelToken,
    ) -> SolveOutcome<BoxedBoard> {
        match self.solve(board, true, cancel) {
            SolveOutcome::Found(solutions) => match solutions.into_iter().next() {
                Some(first) => SolveOutcome::Found(first),
                None => SolveOutcome::NoSolution,
            },
            SolveOutcome::NoSolution => SolveOutcome::NoSolution,
            SolveOutcome::Cancelled => SolveOutcome::Cancelled,
        }
    }

    /// Searches depth-first for every solution of `board`, sorted by the
    /// canonical board ordering.
    ///
    /// Returns [`SolveOutcome::NoSolution`] when the search space is
    /// exhausted without a single solution, or [`SolveOutcome::Cancelled`]
    /// as soon as `cancel` is observed. The caller's board is not mutated.
    #[must_use]
    pub fn find_all_solutions(
        &self,
        board: &dyn Board,
        cancel: &CancelToken,
    ) -> SolveOutcome<Vec<BoxedBoard>> {
        self.solve(board, false, cancel)
    }

    fn solve(
        &self,
        board: &dyn Board,
        only_first: bool,
        cancel: &CancelToken,
    ) -> SolveOutcome<Vec<BoxedBoard>> {
        let mut solutions: Vec<BoxedBoard> = Vec::new();
        let mut stack = vec![board.clone_box()];

        while let Some(mut top) = stack.pop() {
            if cancel.is_cancelled() {
                return SolveOutcome::Cancelled;
            }
            if self.saturate_once(top.as_mut()).is_err() {
                // Propagation proved this branch dead.
                continue;
            }
            if top.is_solution() {
                solutions.push(top);
                if only_first {
                    return SolveOutcome::Found(solutions);
                }
            } else {
                // Pushing in descending candidate order makes the smallest
                // value the next state popped.
                for branch in Self::branches(top.as_ref()).into_iter().rev() {
                    stack.push(branch);
                }
            }
        }

        if solutions.is_empty() {
            SolveOutcome::NoSolution
        } else {
            solutions.sort_by(|a, b| a.canonical_cmp(b.as_ref()));
            SolveOutcome::Found(solutions)
        }
    }

    /// Clones the board once per candidate value of the branching cell, in
    /// ascending value order, keeping only the clones whose assignment did
    /// not hit an immediate contradiction.
    fn branches(board: &dyn Board) -> Vec<BoxedBoard> {
        let Some((row, col, open)) = Self::branching_cell(board) else {
            return Vec::new();
        };
        let mut branches = Vec::with_capacity(open.len());
        for value in open {
            let mut clone = board.clone_box();
            if clone.set_cell(Structure::Row, row, col, value).is_ok() {
                branches.push(clone);
            }
        }
        branches
    }

    /// Picks the branching cell by the minimum-remaining-values heuristic:
    /// the open cell with the fewest candidates, the first one in row-major
    /// order winning ties.
    fn branching_cell(board: &dyn Board) -> Option<(usize, usize, NumberSet)> {
        let numbers = board.dimensions().numbers();
        let mut best: Option<(usize, usize, NumberSet)> = None;
        for row in 0..numbers {
            for col in 0..numbers {
                let Some(open) = board.possibilities(Structure::Row, row, col) else {
                    continue;
                };
                match &best {
                    Some((_, _, fewest)) if open.len() >= fewest.len() => {}
                    _ => best = Some((row, col, open)),
                }
            }
        }
        best
    }
}

#[cfg(test)]
mod tests {
    use std::cmp::Ordering;

    use boxdoku_core::{BitBoard, Dimensions};

    use super::*;
    use crate::saturator::{NakedSingle, Saturator as _};
    use crate::testing::board_from_rows;

    /// The well-known 9x9 puzzle with a unique solution.
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

    const CLASSIC_SOLUTION: &str = "
        5 3 4 6 7 8 9 1 2
        6 7 2 1 9 5 3 4 8
        1 9 8 3 4 2 5 6 7
        8 5 9 7 6 1 4 2 3
        4 2 6 8 5 3 7 9 1
        7 1 3 9 2 4 8 5 6
        9 6 1 5 3 7 2 8 4
        2 8 7 4 1 9 6 3 5
        3 4 5 2 8 6 1 7 9
    ";

    /// Four cells of this grid form an unavoidable rectangle of 1s and 2s,
    /// giving exactly two completions.
    const TWO_SOLUTION_PUZZLE: &str = "
        . . 3 4
        3 4 1 2
        . . 4 3
        4 3 2 1
    ";

    #[test]
    fn test_classic_puzzle_first_solution() {
        let puzzle = board_from_rows(Dimensions::new(3, 3), CLASSIC_PUZZLE);
        let expected = board_from_rows(Dimensions::new(3, 3), CLASSIC_SOLUTION);

        let solver = BacktrackSolver::with_single_saturators();
        let solution = solver
            .find_first_solution(&puzzle, &CancelToken::new())
            .into_found()
            .expect("the classic puzzle is solvable");

        assert!(solution.is_solution());
        assert_eq!(solution.canonical_cmp(&expected), Ordering::Equal);
        // The caller's board is untouched.
        assert!(!puzzle.is_solution());
    }

    #[test]
    fn test_find_all_solutions_is_exhaustive_and_sorted() {
        let puzzle = board_from_rows(Dimensions::new(2, 2), TWO_SOLUTION_PUZZLE);

        let solver = BacktrackSolver::with_single_saturators();
        let solutions = solver
            .find_all_solutions(&puzzle, &CancelToken::new())
            .into_found()
            .expect("the rectangle puzzle has completions");

        assert_eq!(solutions.len(), 2);
        assert!(solutions.iter().all(|s| s.is_solution()));
        // Canonically ascending and therefore distinct.
        assert_eq!(
            solutions[0].canonical_cmp(solutions[1].as_ref()),
            Ordering::Less
        );
        // The smaller completion starts with 1 at (0, 0).
        assert_eq!(solutions[0].cell(Structure::Row, 0, 0), Some(1));
        assert_eq!(solutions[1].cell(Structure::Row, 0, 0), Some(2));
    }

    #[test]
    fn test_first_solution_follows_ascending_branch_order() {
        let puzzle = board_from_rows(Dimensions::new(2, 2), TWO_SOLUTION_PUZZLE);

        let solver = BacktrackSolver::with_single_saturators();
        let first = solver
            .find_first_solution(&puzzle, &CancelToken::new())
            .into_found()
            .unwrap();

        // The branching cell (0, 0) tries 1 before 2.
        assert_eq!(first.cell(Structure::Row, 0, 0), Some(1));
    }

    #[test]
    fn test_contradiction_found_by_propagation_is_no_solution() {
        // The presets are pairwise consistent, but (0, 0) and (0, 1) are both
        // left with 3 as their only candidate.
        let puzzle = board_from_rows(
            Dimensions::new(2, 2),
            "
            . . 4 .
            1 2 . .
            . . . .
            . . . .
            ",
        );

        let solver = BacktrackSolver::with_single_saturators();
        assert!(
            solver
                .find_first_solution(&puzzle, &CancelToken::new())
                .is_no_solution()
        );
        assert!(
            solver
                .find_all_solutions(&puzzle, &CancelToken::new())
                .is_no_solution()
        );
    }

    #[test]
    fn test_saturate_is_best_effort_on_contradictory_boards() {
        let puzzle = board_from_rows(
            Dimensions::new(2, 2),
            "
            . . 4 .
            1 2 . .
            . . . .
            . . . .
            ",
        );

        // No panic and no error: the clone is returned as far as it got.
        let solver = BacktrackSolver::with_single_saturators();
        let stuck = solver.saturate(&puzzle);
        assert!(!stuck.is_solution());
    }

    #[test]
    fn test_saturate_solves_naked_single_puzzles_without_search() {
        // Solvable by naked singles alone, with only that saturator
        // registered: the first saturate call suffices.
        let puzzle = board_from_rows(
            Dimensions::new(2, 2),
            "
            . . 3 4
            3 4 1 2
            2 1 4 3
            4 3 2 1
            ",
        );

        let solver = BacktrackSolver::new(vec![Box::new(NakedSingle::new())]);
        let saturated = solver.saturate(&puzzle);
        assert!(saturated.is_solution());
    }

    #[test]
    fn test_saturate_reports_last_set_cell_for_hints() {
        // Only one deduction is available, so the marker names it.
        let puzzle = board_from_rows(
            Dimensions::new(2, 2),
            "
            1 2 3 .
            . . . .
            . . . .
            . . . .
            ",
        );

        let solver = BacktrackSolver::new(vec![Box::new(NakedSingle::new())]);
        let hinted = solver.saturate(&puzzle);
        assert_eq!(hinted.cell(Structure::Row, 0, 3), Some(4));
        assert_eq!(hinted.last_set(), Some((0, 3)));
    }

    #[test]
    fn test_cancellation_wins_over_results() {
        let puzzle = board_from_rows(Dimensions::new(2, 2), TWO_SOLUTION_PUZZLE);
        let cancel = CancelToken::new();
        cancel.cancel();

        let solver = BacktrackSolver::with_single_saturators();
        assert!(solver.find_first_solution(&puzzle, &cancel).is_cancelled());
        assert!(solver.find_all_solutions(&puzzle, &cancel).is_cancelled());
    }

    #[test]
    fn test_engine_without_saturators_still_searches() {
        let puzzle = board_from_rows(Dimensions::new(2, 2), TWO_SOLUTION_PUZZLE);

        let solver = BacktrackSolver::new(Vec::new());
        let solutions = solver
            .find_all_solutions(&puzzle, &CancelToken::new())
            .into_found()
            .expect("pure backtracking finds the completions too");
        assert_eq!(solutions.len(), 2);
    }

    #[test]
    fn test_solved_board_is_returned_as_is() {
        let solved = board_from_rows(
            Dimensions::new(2, 2),
            "
            1 2 3 4
            3 4 1 2
            2 1 4 3
            4 3 2 1
            ",
        );

        let solver = BacktrackSolver::with_single_saturators();
        let solution = solver
            .find_first_solution(&solved, &CancelToken::new())
            .into_found()
            .unwrap();
        assert_eq!(solution.canonical_cmp(&solved), Ordering::Equal);
    }

    #[test]
    fn test_saturators_accessor_preserves_order() {
        let solver = BacktrackSolver::with_single_saturators();
        let names: Vec<_> = solver.saturators().iter().map(|s| s.name()).collect();
        assert_eq!(names, vec!["naked single", "hidden single"]);
    }

    #[test]
    fn test_empty_board_is_solvable() {
        let board = BitBoard::new(Dimensions::new(2, 2));
        let solver = BacktrackSolver::with_single_saturators();
        let solution = solver
            .find_first_solution(&board, &CancelToken::new())
            .into_found()
            .expect("an empty board always has a completion");
        assert!(solution.is_solution());
    }
}
