use boxdoku_core::{Board, Structure};
use tinyvec::TinyVec;

use super::{BoxedSaturator, Saturator};
use crate::Unsolvable;

const NAME: &str = "hidden single";

/// Fixes cells holding a candidate that no other open cell around them can
/// take.
///
/// A candidate is "hidden" to a cell when it appears in no other open cell of
/// the same row, the same column, and the same box: by elimination the value
/// must go here, even though the cell may still have several candidates of
/// its own. A cell with exactly one hidden candidate is fixed to it and the
/// scan restarts; a cell with two or more hidden candidates would have to
/// take two different forced values at once, so the board is unsolvable by
/// construction.
///
/// # Examples
///
/// ```
/// use boxdoku_core::{BitBoard, Board as _, Dimensions, Structure};
/// use boxdoku_solver::saturator::{HiddenSingle, Saturator as _};
///
/// let mut board = BitBoard::new(Dimensions::new(2, 2));
/// // Value 3 survives only at (0, 2) among the cell's row, column, and box
/// // peers; the cell itself still has all four candidates.
/// board.remove_possibility(Structure::Row, 0, 2, 3)?;
/// board.remove_possibility(Structure::Col, 2, 0, 3)?;
/// board.remove_possibility(Structure::Box, 1, 0, 3)?;
///
/// let changed = HiddenSingle::new().saturate(&mut board)?;
/// assert!(changed);
/// assert_eq!(board.cell(Structure::Row, 0, 2), Some(3));
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct HiddenSingle;

impl HiddenSingle {
    /// Creates a new `HiddenSingle` strategy.
    #[must_use]
    pub const fn new() -> Self {
        HiddenSingle
    }

    /// Returns `true` if `value` is a candidate of another open cell of the
    /// structure, skipping element `skip`.
    fn appears_elsewhere(
        board: &dyn Board,
        structure: Structure,
        major: usize,
        skip: usize,
        value: u8,
    ) -> bool {
        let numbers = board.dimensions().numbers();
        for element in 0..numbers {
            if element == skip {
                continue;
            }
            if let Some(open) = board.possibilities(structure, major, element) {
                if open.contains(value) {
                    return true;
                }
            }
        }
        false
    }

    /// Collects the candidates of `(row, col)` that appear in none of the
    /// cell's three structures, in ascending order.
    fn hidden_candidates(board: &dyn Board, row: usize, col: usize) -> TinyVec<[u8; 16]> {
        let mut hidden = TinyVec::new();
        let Some(open) = board.possibilities(Structure::Row, row, col) else {
            return hidden;
        };
        let dims = board.dimensions();
        let box_major = dims.box_major(Structure::Row, row, col);
        let box_minor = dims.box_minor(Structure::Row, row, col);
        for value in open {
            let in_row = Self::appears_elsewhere(board, Structure::Row, row, col, value);
            let in_col = Self::appears_elsewhere(board, Structure::Col, col, row, value);
            let in_box = Self::appears_elsewhere(board, Structure::Box, box_major, box_minor, value);
            if !(in_row || in_col || in_box) {
                hidden.push(value);
            }
        }
        hidden
    }

    /// Fixes the first hidden single in row-major order, if any.
    fn fix_next(board: &mut dyn Board) -> Result<bool, Unsolvable> {
        let numbers = board.dimensions().numbers();
        for row in 0..numbers {
            for col in 0..numbers {
                if board.cell(Structure::Row, row, col).is_some() {
                    continue;
                }
                match *Self::hidden_candidates(board, row, col).as_slice() {
                    [] => {}
                    [value] => {
                        board.set_cell(Structure::Row, row, col, value)?;
                        return Ok(true);
                    }
                    [first, second, ..] => {
                        return Err(Unsolvable::DoubleForced {
                            row,
                            col,
                            first,
                            second,
                        });
                    }
                }
            }
        }
        Ok(false)
    }
}

impl Saturator for HiddenSingle {
    fn name(&self) -> &'static str {
        NAME
    }

    fn clone_box(&self) -> BoxedSaturator {
        Box::new(*self)
    }

    fn saturate(&self, board: &mut dyn Board) -> Result<bool, Unsolvable> {
        let mut changed = false;
        while Self::fix_next(board)? {
            changed = true;
        }
        Ok(changed)
    }
}
