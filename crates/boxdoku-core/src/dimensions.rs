//! Box geometry and coordinate mappings.

use crate::number_set::NumberSet;
use crate::structure::Structure;

/// Marker for "no committed value" in uniform [`set_cell`] call sites and in
/// the plain-text grid format.
///
/// Valid cell values start at 1, so this constant is out of range for every
/// board. It is distinct from the canonical-ordering sentinel (`numbers + 1`,
/// see [`Dimensions::ordering_code`]), which is only ever used to compare
/// boards.
///
/// [`set_cell`]: crate::Board::set_cell
pub const UNSET_CELL: u8 = 0;

/// Box geometry of a board.
///
/// A board has `box_rows * box_cols` rows and as many columns; its inner
/// boxes are `box_rows` cells tall and `box_cols` cells wide. The product is
/// both the side length and the alphabet size (`numbers`), so each row,
/// column, and box holds each value `1..=numbers` exactly once in a solution.
///
/// `Dimensions` also owns the three coordinate bijections between
/// structure-relative `(major, minor)` addresses and absolute `(row, col)`
/// positions:
///
/// - [`Structure::Row`]: `row = major`, `col = minor`
/// - [`Structure::Col`]: `row = minor`, `col = major`
/// - [`Structure::Box`]: boxes are numbered top to bottom, `box_rows` boxes
///   per board row of boxes; cells within a box are numbered row-major
///
/// # Examples
///
/// ```
/// use boxdoku_core::{Dimensions, Structure};
///
/// let dims = Dimensions::new(2, 3);
/// assert_eq!(dims.numbers(), 6);
///
/// // Box 3 is the second box of the second box-row; its cell 4 sits at
/// // board row 3, column 4.
/// assert_eq!(dims.position(Structure::Box, 3, 4), (3, 4));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Dimensions {
    box_rows: usize,
    box_cols: usize,
}

impl Dimensions {
    /// Creates the geometry for boards with `box_rows x box_cols` inner
    /// boxes.
    ///
    /// # Panics
    ///
    /// Panics if either length is zero, or if the resulting side length
    /// exceeds [`NumberSet::MAX_VALUE`].
    #[must_use]
    pub fn new(box_rows: usize, box_cols: usize) -> Self {
        assert!(
            box_rows >= 1 && box_cols >= 1,
            "box dimensions must be positive, got {box_rows}x{box_cols}"
        );
        assert!(
            box_rows * box_cols <= usize::from(NumberSet::MAX_VALUE),
            "side length {} exceeds the supported maximum of {}",
            box_rows * box_cols,
            NumberSet::MAX_VALUE,
        );
        Self { box_rows, box_cols }
    }

    /// Height of an inner box, in cells.
    #[must_use]
    pub const fn box_rows(&self) -> usize {
        self.box_rows
    }

    /// Width of an inner box, in cells.
    #[must_use]
    pub const fn box_cols(&self) -> usize {
        self.box_cols
    }

    /// Side length of the board, which is also the alphabet size.
    #[must_use]
    pub const fn numbers(&self) -> usize {
        self.box_rows * self.box_cols
    }

    /// Total number of cells.
    #[must_use]
    pub const fn cell_count(&self) -> usize {
        self.numbers() * self.numbers()
    }

    /// Largest valid cell value.
    #[must_use]
    pub fn max_value(&self) -> u8 {
        u8::try_from(self.numbers()).expect("side length is validated at construction")
    }

    /// Returns `true` if `(major, minor)` addresses a cell of the board.
    #[must_use]
    pub const fn in_range(&self, major: usize, minor: usize) -> bool {
        major < self.numbers() && minor < self.numbers()
    }

    /// Sort key of a cell for the canonical board ordering: the committed
    /// value itself, with unset cells sorting after every value as
    /// `numbers + 1`.
    #[must_use]
    pub fn ordering_code(&self, cell: Option<u8>) -> usize {
        cell.map_or(self.numbers() + 1, usize::from)
    }

    /// Absolute row of the addressed cell.
    #[must_use]
    pub const fn row(&self, structure: Structure, major: usize, minor: usize) -> usize {
        match structure {
            Structure::Row => major,
            Structure::Col => minor,
            Structure::Box => (major / self.box_rows) * self.box_rows + minor / self.box_cols,
        }
    }

    /// Absolute column of the addressed cell.
    #[must_use]
    pub const fn col(&self, structure: Structure, major: usize, minor: usize) -> usize {
        match structure {
            Structure::Row => minor,
            Structure::Col => major,
            Structure::Box => (major % self.box_rows) * self.box_cols + minor % self.box_cols,
        }
    }

    /// Absolute `(row, col)` of the addressed cell.
    #[must_use]
    pub const fn position(&self, structure: Structure, major: usize, minor: usize) -> (usize, usize) {
        (
            self.row(structure, major, minor),
            self.col(structure, major, minor),
        )
    }

    /// Index of the box containing the addressed cell.
    #[must_use]
    pub const fn box_major(&self, structure: Structure, major: usize, minor: usize) -> usize {
        match structure {
            Structure::Row => (major / self.box_rows) * self.box_rows + minor / self.box_cols,
            Structure::Col => (minor / self.box_rows) * self.box_rows + major / self.box_cols,
            Structure::Box => major,
        }
    }

    /// Cell index within its box of the addressed cell.
    #[must_use]
    pub const fn box_minor(&self, structure: Structure, major: usize, minor: usize) -> usize {
        match structure {
            Structure::Row => (major % self.box_rows) * self.box_cols + minor % self.box_cols,
            Structure::Col => (minor % self.box_rows) * self.box_cols + major % self.box_cols,
            Structure::Box => minor,
        }
    }
}
