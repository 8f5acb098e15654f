//! Core data structures for generalized sudoku boards.
//!
//! This crate provides the board model shared by the solving components: a
//! board is a square grid of side `box_rows * box_cols` whose inner boxes are
//! `box_rows` cells tall and `box_cols` cells wide (classic sudoku is the
//! `3 x 3` special case). Every cell carries a set of still-possible values,
//! and committing a value propagates exclusions to the cell's row, column,
//! and box peers.
//!
//! # Overview
//!
//! - [`dimensions`]: box geometry and the coordinate bijections between
//!   structure-relative `(major, minor)` addresses and absolute `(row, col)`
//!   positions
//! - [`structure`]: the three cell groupings (row, column, box) subject to
//!   the "each value once" constraint
//! - [`number_set`]: fixed-width bitsets of candidate values
//! - [`board`]: the [`Board`] capability trait and canonical board ordering
//! - [`bit_board`]: [`BitBoard`], the bitset-backed [`Board`] implementation
//! - [`error`]: [`ConstraintViolation`], raised when an assignment or
//!   candidate removal contradicts the known constraints
//!
//! # Examples
//!
//! ```
//! use boxdoku_core::{BitBoard, Board, Dimensions, Structure};
//!
//! // A board with 2x3 inner boxes (side length 6, values 1-6).
//! let mut board = BitBoard::new(Dimensions::new(2, 3));
//!
//! board.set_cell(Structure::Row, 0, 0, 4)?;
//!
//! // The value is excluded from the row, column, and box peers.
//! let peer = board.possibilities(Structure::Row, 0, 1).unwrap();
//! assert!(!peer.contains(4));
//! # Ok::<(), boxdoku_core::ConstraintViolation>(())
//! ```

pub mod bit_board;
pub mod board;
pub mod dimensions;
pub mod error;
pub mod number_set;
pub mod structure;

// Re-export commonly used types
pub use self::{
    bit_board::BitBoard,
    board::{Board, BoxedBoard},
    dimensions::{Dimensions, UNSET_CELL},
    error::ConstraintViolation,
    number_set::NumberSet,
    structure::Structure,
};
