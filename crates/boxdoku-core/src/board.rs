//! The board capability interface.

use std::cmp::Ordering;
use std::fmt::{Debug, Display};

use crate::dimensions::Dimensions;
use crate::error::ConstraintViolation;
use crate::number_set::NumberSet;
use crate::structure::Structure;

/// Capability interface of a constraint board.
///
/// A board owns, per cell, a fixed/unfixed flag and a set of still-possible
/// values. Committing a value excludes it from the cell's row, column, and
/// box peers; stripping the last candidate of any cell is a contradiction and
/// is rejected one step ahead, before the cell actually runs dry.
///
/// Search engines work against this trait rather than a concrete
/// representation, so alternative board layouts can be dropped in without
/// touching the solving code. [`BitBoard`](crate::BitBoard) is the one
/// implementation this crate ships.
///
/// All addressing is uniform over [`Structure`] kinds: `(Row, major, minor)`
/// is the cell at row `major`, column `minor`; `Col` swaps the two; `Box`
/// addresses a box and a cell within it (see [`Dimensions`]).
pub trait Board: Debug + Display + Send {
    /// Returns the board's box geometry.
    fn dimensions(&self) -> Dimensions;

    /// Fixes the addressed cell to `value`.
    ///
    /// On success the cell's candidates collapse to `{value}`, the cell is
    /// marked fixed, the last-set marker updates, and `value` is removed from
    /// every other cell sharing the same row, column, or box.
    ///
    /// Passing [`UNSET_CELL`](crate::UNSET_CELL) is a no-op, so callers can
    /// use one uniform call site for both setting and leaving cells open.
    ///
    /// # Errors
    ///
    /// Returns [`ConstraintViolation`] if `value` is not currently a
    /// candidate at the addressed cell, or if excluding it would strip the
    /// last candidate of a peer cell (which is how an assignment duplicating
    /// a fixed peer is detected).
    ///
    /// # Panics
    ///
    /// Panics if the address or the value is out of range for the board.
    fn set_cell(
        &mut self,
        structure: Structure,
        major: usize,
        minor: usize,
        value: u8,
    ) -> Result<(), ConstraintViolation>;

    /// Returns the committed value of the addressed cell, or `None` if the
    /// cell is not fixed or the address is out of range.
    fn cell(&self, structure: Structure, major: usize, minor: usize) -> Option<u8>;

    /// Returns the remaining candidates of an unfixed cell, or `None` for a
    /// fixed cell or an out-of-range address.
    fn possibilities(&self, structure: Structure, major: usize, minor: usize) -> Option<NumberSet>;

    /// Removes `value` as a candidate from every *other* cell of the
    /// addressed structure (the addressed cell itself is skipped).
    ///
    /// # Errors
    ///
    /// Returns [`ConstraintViolation`] if the removal would leave a peer cell
    /// without candidates.
    ///
    /// # Panics
    ///
    /// Panics if the address or the value is out of range for the board.
    fn remove_possibility(
        &mut self,
        structure: Structure,
        major: usize,
        minor: usize,
        value: u8,
    ) -> Result<(), ConstraintViolation>;

    /// Returns `true` if every cell is fixed.
    fn is_solution(&self) -> bool;

    /// Returns the `(row, col)` of the most recently fixed cell, or `None`
    /// if no cell has been fixed yet.
    ///
    /// Callers use this to report "what changed" after a solving step
    /// without diffing the whole board.
    fn last_set(&self) -> Option<(usize, usize)>;

    /// Returns an independent board of the same dimensions, rebuilt by
    /// replaying only the fixed cells; candidates of unfixed cells are
    /// recomputed from the replay, not copied bit for bit.
    fn clone_box(&self) -> BoxedBoard;

    /// Compares two boards of equal dimensions cell by cell in row-major
    /// order, with unset cells sorting after every committed value.
    ///
    /// This is a total order used to sort solution sets reproducibly; it has
    /// no meaning across boards of different dimensions.
    fn canonical_cmp(&self, other: &dyn Board) -> Ordering {
        let dims = self.dimensions();
        debug_assert_eq!(dims, other.dimensions());
        for row in 0..dims.numbers() {
            for col in 0..dims.numbers() {
                let lhs = dims.ordering_code(self.cell(Structure::Row, row, col));
                let rhs = dims.ordering_code(other.cell(Structure::Row, row, col));
                match lhs.cmp(&rhs) {
                    Ordering::Equal => {}
                    unequal => return unequal,
                }
            }
        }
        Ordering::Equal
    }
}

/// A boxed board.
pub type BoxedBoard = Box<dyn Board>;

impl Clone for BoxedBoard {
    fn clone(&self) -> Self {
        self.clone_box()
    }
}
