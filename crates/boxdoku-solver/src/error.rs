//! Solver-level errors.

use boxdoku_core::ConstraintViolation;

/// Raised by a saturator when propagation alone proves that no legal
/// assignment exists for the board it was given.
///
/// The search engine catches this exactly where saturation is applied to a
/// popped search state and prunes that branch; it never escapes the public
/// entry points, which report no solution instead.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    derive_more::Display,
    derive_more::Error,
    derive_more::From,
)]
pub enum Unsolvable {
    /// An assignment required by propagation contradicted the board's known
    /// constraints.
    #[display("propagation hit conflicting constraints: {_0}")]
    Conflict(#[from] ConstraintViolation),
    /// Two different values are each forced into the same cell by
    /// elimination.
    #[display("cell ({row}, {col}) is forced to hold both {first} and {second}")]
    DoubleForced {
        /// Absolute row of the over-constrained cell.
        row: usize,
        /// Absolute column of the over-constrained cell.
        col: usize,
        /// The smallest forced value.
        first: u8,
        /// The next forced value.
        second: u8,
    },
}
