//! Bitset-backed board implementation.

use std::fmt::{self, Display};

use crate::board::{Board, BoxedBoard};
use crate::dimensions::{Dimensions, UNSET_CELL};
use crate::error::ConstraintViolation;
use crate::number_set::NumberSet;
use crate::structure::Structure;

/// The bitset-backed [`Board`] implementation.
///
/// Each cell stores its candidate set as a [`NumberSet`] plus a fixed flag;
/// a fixed cell keeps its single committed value in the set so queries and
/// comparisons work uniformly over fixed and open cells.
///
/// # Examples
///
/// ```
/// use boxdoku_core::{BitBoard, Board, Dimensions, Structure};
///
/// let mut board = BitBoard::new(Dimensions::new(2, 2));
///
/// board.set_cell(Structure::Row, 0, 0, 1)?;
/// board.set_cell(Structure::Row, 0, 1, 2)?;
/// board.set_cell(Structure::Row, 0, 2, 3)?;
///
/// // The remaining cell of row 0 has a single candidate left.
/// let open = board.possibilities(Structure::Row, 0, 3).unwrap();
/// assert_eq!(open.as_single(), Some(4));
/// # Ok::<(), boxdoku_core::ConstraintViolation>(())
/// ```
#[derive(Debug)]
pub struct BitBoard {
    dims: Dimensions,
    candidates: Vec<NumberSet>,
    fixed: Vec<bool>,
    last_set: Option<(usize, usize)>,
}

impl BitBoard {
    /// Creates an empty board: every cell unfixed, every value possible
    /// everywhere.
    #[must_use]
    pub fn new(dims: Dimensions) -> Self {
        Self {
            dims,
            candidates: vec![NumberSet::full(dims.max_value()); dims.cell_count()],
            fixed: vec![false; dims.cell_count()],
            last_set: None,
        }
    }

    const fn index(&self, row: usize, col: usize) -> usize {
        row * self.dims.numbers() + col
    }

    fn fixed_value(&self, row: usize, col: usize) -> Option<u8> {
        let index = self.index(row, col);
        if self.fixed[index] {
            self.candidates[index].as_single()
        } else {
            None
        }
    }

    fn check_address(&self, major: usize, minor: usize) {
        assert!(
            self.dims.in_range(major, minor),
            "address ({major}, {minor}) is out of range for a board of side {}",
            self.dims.numbers(),
        );
    }

    fn check_value(&self, value: u8) {
        assert!(
            value >= 1 && value <= self.dims.max_value(),
            "value {value} is out of range for a board of side {}",
            self.dims.numbers(),
        );
    }
}

impl Board for BitBoard {
    fn dimensions(&self) -> Dimensions {
        self.dims
    }

    fn set_cell(
        &mut self,
        structure: Structure,
        major: usize,
        minor: usize,
        value: u8,
    ) -> Result<(), ConstraintViolation> {
        if value == UNSET_CELL {
            return Ok(());
        }
        self.check_address(major, minor);
        self.check_value(value);

        let (row, col) = self.dims.position(structure, major, minor);
        let index = self.index(row, col);
        if !self.candidates[index].contains(value) {
            return Err(ConstraintViolation::NotACandidate { row, col, value });
        }

        let mut committed = NumberSet::new();
        committed.insert(value);
        self.candidates[index] = committed;
        self.fixed[index] = true;
        self.last_set = Some((row, col));

        let box_major = self.dims.box_major(Structure::Row, row, col);
        let box_minor = self.dims.box_minor(Structure::Row, row, col);
        self.remove_possibility(Structure::Row, row, col, value)?;
        self.remove_possibility(Structure::Col, col, row, value)?;
        self.remove_possibility(Structure::Box, box_major, box_minor, value)?;
        Ok(())
    }

    fn cell(&self, structure: Structure, major: usize, minor: usize) -> Option<u8> {
        if !self.dims.in_range(major, minor) {
            return None;
        }
        let (row, col) = self.dims.position(structure, major, minor);
        self.fixed_value(row, col)
    }

    fn possibilities(&self, structure: Structure, major: usize, minor: usize) -> Option<NumberSet> {
        if !self.dims.in_range(major, minor) {
            return None;
        }
        let (row, col) = self.dims.position(structure, major, minor);
        let index = self.index(row, col);
        if self.fixed[index] {
            None
        } else {
            Some(self.candidates[index])
        }
    }

    fn remove_possibility(
        &mut self,
        structure: Structure,
        major: usize,
        minor: usize,
        value: u8,
    ) -> Result<(), ConstraintViolation> {
        self.check_address(major, minor);
        self.check_value(value);

        for element in 0..self.dims.numbers() {
            if element == minor {
                continue;
            }
            let (row, col) = self.dims.position(structure, major, element);
            let index = self.index(row, col);
            if self.candidates[index].as_single() == Some(value) {
                return Err(ConstraintViolation::WouldEmptyCell { row, col, value });
            }
            self.candidates[index].remove(value);
        }
        Ok(())
    }

    fn is_solution(&self) -> bool {
        self.fixed.iter().all(|&fixed| fixed)
    }

    fn last_set(&self) -> Option<(usize, usize)> {
        self.last_set
    }

    fn clone_box(&self) -> BoxedBoard {
        let mut copy = Self::new(self.dims);
        for row in 0..self.dims.numbers() {
            for col in 0..self.dims.numbers() {
                if let Some(value) = self.fixed_value(row, col) {
                    copy.set_cell(Structure::Row, row, col, value)
                        .expect("fixed cells of a consistent board replay without conflicts");
                }
            }
        }
        Box::new(copy)
    }
}

impl Display for BitBoard {
    /// Renders one row per board row: `.` for open cells, the committed
    /// value otherwise, space-separated.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.dims.numbers() {
            if row > 0 {
                writeln!(f)?;
            }
            for col in 0..self.dims.numbers() {
                if col > 0 {
                    write!(f, " ")?;
                }
                match self.fixed_value(row, col) {
                    Some(value) => write!(f, "{value}")?,
                    None => write!(f, ".")?,
                }
            }
        }
        Ok(())
    }
}
