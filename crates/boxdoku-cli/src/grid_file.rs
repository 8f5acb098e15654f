//! Plain-text puzzle grid loader.
//!
//! The format is line oriented: the first line holds two positive integers
//! `box_rows box_cols`; each following line is one board row of
//! whitespace-separated tokens, `.` for an open cell and the value
//! otherwise. Missing rows or short lines leave the remaining cells open.

use std::io;
use std::path::Path;

use boxdoku_core::{BitBoard, Board as _, ConstraintViolation, Dimensions, NumberSet, Structure, UNSET_CELL};

/// Errors produced while loading a puzzle file.
#[derive(Debug, derive_more::Display, derive_more::Error, derive_more::From)]
pub enum LoadError {
    /// The file could not be read at all.
    #[display("cannot read puzzle file: {_0}")]
    Io(#[from] io::Error),
    /// The first line does not hold exactly two positive integers.
    #[display("first line must hold two positive integers `box_rows box_cols`")]
    MalformedHeader,
    /// The requested board is wider than the solver supports.
    #[display("side length {numbers} exceeds the supported maximum of {max}")]
    Oversized {
        /// The side length the header asked for.
        numbers: usize,
        /// The largest supported side length.
        max: u8,
    },
    /// A grid token is neither `.` nor a value of the board's range.
    #[display("unrecognized token {token:?} at row {row}")]
    BadToken {
        /// Zero-based board row of the offending token.
        row: usize,
        /// The token as it appeared in the file.
        token: String,
    },
    /// The grid holds more rows or columns than the header announced.
    #[display("grid has more than {numbers} rows or columns")]
    TooManyCells {
        /// The side length the header announced.
        numbers: usize,
    },
    /// The presets contradict each other; the puzzle has no legal state.
    #[display("puzzle is self-contradictory: {_0}")]
    Contradiction(#[from] ConstraintViolation),
}

/// Reads and parses the puzzle file at `path`.
///
/// # Errors
///
/// Returns [`LoadError`] when the file cannot be read, the format is
/// malformed, or the presets contradict each other.
pub fn load_board(path: &Path) -> Result<BitBoard, LoadError> {
    let text = std::fs::read_to_string(path)?;
    parse_board(&text)
}

/// Parses the text grid format into a populated board.
///
/// # Errors
///
/// Returns [`LoadError`] when the format is malformed or the presets
/// contradict each other.
pub fn parse_board(text: &str) -> Result<BitBoard, LoadError> {
    let mut lines = text.lines();
    let dims = parse_header(lines.next().ok_or(LoadError::MalformedHeader)?)?;
    let mut board = BitBoard::new(dims);

    for (row, line) in lines.enumerate() {
        if row >= dims.numbers() {
            if line.split_whitespace().next().is_none() {
                continue;
            }
            return Err(LoadError::TooManyCells {
                numbers: dims.numbers(),
            });
        }
        for (col, token) in line.split_whitespace().enumerate() {
            if col >= dims.numbers() {
                return Err(LoadError::TooManyCells {
                    numbers: dims.numbers(),
                });
            }
            let value = parse_token(token, row, dims)?;
            board.set_cell(Structure::Row, row, col, value)?;
        }
    }
    Ok(board)
}

fn parse_header(header: &str) -> Result<Dimensions, LoadError> {
    let mut tokens = header.split_whitespace();
    let box_rows = parse_header_int(tokens.next())?;
    let box_cols = parse_header_int(tokens.next())?;
    if tokens.next().is_some() {
        return Err(LoadError::MalformedHeader);
    }
    let numbers = box_rows * box_cols;
    if numbers > usize::from(NumberSet::MAX_VALUE) {
        return Err(LoadError::Oversized {
            numbers,
            max: NumberSet::MAX_VALUE,
        });
    }
    Ok(Dimensions::new(box_rows, box_cols))
}

fn parse_header_int(token: Option<&str>) -> Result<usize, LoadError> {
    let value = token
        .and_then(|token| token.parse::<usize>().ok())
        .ok_or(LoadError::MalformedHeader)?;
    if value == 0 {
        return Err(LoadError::MalformedHeader);
    }
    Ok(value)
}

fn parse_token(token: &str, row: usize, dims: Dimensions) -> Result<u8, LoadError> {
    if token == "." {
        return Ok(UNSET_CELL);
    }
    match token.parse::<u8>() {
        Ok(value) if value >= 1 && value <= dims.max_value() => Ok(value),
        _ => Err(LoadError::BadToken {
            row,
            token: token.to_owned(),
        }),
    }
}
