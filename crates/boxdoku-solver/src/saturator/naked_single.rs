use boxdoku_core::{Board, Structure};

use super::{BoxedSaturator, Saturator};
use crate::Unsolvable;

const NAME: &str = "naked single";

/// Fixes cells whose candidate set has shrunk to a single value.
///
/// The strategy scans all open cells in row-major order; whenever a cell has
/// exactly one candidate left, that value is committed and the scan restarts,
/// because the commit excludes the value from the cell's peers and may create
/// new naked singles earlier in the scan order.
///
/// # Examples
///
/// ```
/// use boxdoku_core::{BitBoard, Board as _, Dimensions, Structure};
/// use boxdoku_solver::saturator::{NakedSingle, Saturator as _};
///
/// let mut board = BitBoard::new(Dimensions::new(2, 2));
/// board.set_cell(Structure::Row, 0, 0, 1)?;
/// board.set_cell(Structure::Row, 0, 1, 2)?;
/// board.set_cell(Structure::Row, 0, 2, 3)?;
///
/// let changed = NakedSingle::new().saturate(&mut board)?;
/// assert!(changed);
/// assert_eq!(board.cell(Structure::Row, 0, 3), Some(4));
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct NakedSingle;

impl NakedSingle {
    /// Creates a new `NakedSingle` strategy.
    #[must_use]
    pub const fn new() -> Self {
        NakedSingle
    }

    /// Fixes the first naked single in row-major order, if any.
    fn fix_next(board: &mut dyn Board) -> Result<bool, Unsolvable> {
        let numbers = board.dimensions().numbers();
        for row in 0..numbers {
            for col in 0..numbers {
                let Some(open) = board.possibilities(Structure::Row, row, col) else {
                    continue;
                };
                if let Some(value) = open.as_single() {
                    // A well-formed candidate set makes this succeed; a
                    // failure means the board as a whole is contradictory.
                    board.set_cell(Structure::Row, row, col, value)?;
                    return Ok(true);
                }
            }
        }
        Ok(false)
    }
}

impl Saturator for NakedSingle {
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
