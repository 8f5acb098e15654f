//! Constraint-propagation strategies.
//!
//! A saturator mutates a board toward fewer open cells without guessing:
//! it repeatedly fixes cells whose value is already forced, until a full
//! pass finds nothing more to fix. Saturators own no board state and are
//! consumed by the search engine in a caller-supplied ordered list.

use std::fmt::Debug;

use boxdoku_core::Board;

pub use self::{hidden_single::HiddenSingle, naked_single::NakedSingle};
use crate::Unsolvable;

mod hidden_single;
mod naked_single;

/// Returns the two single-cell elimination strategies, naked singles first.
///
/// This order fixes the cheap deductions before the more expensive
/// neighbor scans and is the default configuration of
/// [`BacktrackSolver`](crate::BacktrackSolver). Callers with their own
/// strategies assemble their own list.
#[must_use]
pub fn single_saturators() -> Vec<BoxedSaturator> {
    vec![Box::new(NakedSingle::new()), Box::new(HiddenSingle::new())]
}

/// A stateless constraint-propagation strategy.
///
/// Implementations scan the board they are given and fix forced cells in
/// place through [`Board::set_cell`], iterating to their own fixpoint before
/// returning. The search engine only ever hands a saturator a disposable
/// clone, so partial progress on a failing board is simply discarded.
pub trait Saturator: Debug + Send + Sync {
    /// Returns the name of the strategy.
    fn name(&self) -> &'static str;

    /// Returns a boxed clone of the strategy.
    fn clone_box(&self) -> BoxedSaturator;

    /// Propagates constraints on `board` in place until this strategy finds
    /// nothing more to fix.
    ///
    /// Returns `true` if any cell was fixed during the whole call.
    ///
    /// # Errors
    ///
    /// Returns [`Unsolvable`] when propagation proves that no legal
    /// assignment exists for the board.
    fn saturate(&self, board: &mut dyn Board) -> Result<bool, Unsolvable>;
}

/// A boxed saturator.
pub type BoxedSaturator = Box<dyn Saturator>;

impl Clone for BoxedSaturator {
    fn clone(&self) -> Self {
        self.clone_box()
    }
}
