//! Structure kinds for uniform cell addressing.

/// One of the three cell groupings subject to the "each value once" rule.
///
/// Every structure kind defines a bijection between structure-relative
/// `(major, minor)` addresses and absolute `(row, col)` positions, so
/// constraint propagation can be written once and applied to rows, columns,
/// and boxes alike. The mapping formulas live on
/// [`Dimensions`](crate::Dimensions) because the box decomposition depends on
/// the box geometry.
///
/// # Examples
///
/// ```
/// use boxdoku_core::{Dimensions, Structure};
///
/// let dims = Dimensions::new(2, 3);
///
/// // Row-addressing: major is the row, minor the column.
/// assert_eq!(dims.position(Structure::Row, 1, 4), (1, 4));
/// // Column-addressing swaps the two.
/// assert_eq!(dims.position(Structure::Col, 1, 4), (4, 1));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Structure {
    /// A row, addressed by `(row, col)`.
    Row,
    /// A column, addressed by `(col, row)`.
    Col,
    /// An inner box, addressed by `(box index, cell index within the box)`.
    Box,
}

impl Structure {
    /// All structure kinds, in row, column, box order.
    pub const ALL: [Self; 3] = [Self::Row, Self::Col, Self::Box];
}
