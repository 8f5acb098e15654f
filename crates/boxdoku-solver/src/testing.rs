//! Test helpers for building boards from text grids.

use boxdoku_core::{BitBoard, Board as _, Dimensions, Structure, UNSET_CELL};

/// Builds a board from whitespace-separated row tokens, `.` marking an open
/// cell.
///
/// # Panics
///
/// Panics when a token is neither `.` nor a value, or when the presets
/// contradict each other; test grids are expected to be well-formed.
pub(crate) fn board_from_rows(dims: Dimensions, text: &str) -> BitBoard {
    let mut board = BitBoard::new(dims);
    let rows = text.lines().map(str::trim).filter(|line| !line.is_empty());
    for (row, line) in rows.enumerate() {
        for (col, token) in line.split_whitespace().enumerate() {
            let value = if token == "." {
                UNSET_CELL
            } else {
                token.parse().expect("grid tokens are values or `.`")
            };
            board
                .set_cell(Structure::Row, row, col, value)
                .expect("test grids hold consistent presets");
        }
    }
    board
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_presets_and_open_cells() {
        let board = board_from_rows(
            Dimensions::new(2, 2),
            "
            1 . . .
            . 3 . .
            . . . .
            . . . 2
            ",
        );

        assert_eq!(board.cell(Structure::Row, 0, 0), Some(1));
        assert_eq!(board.cell(Structure::Row, 1, 1), Some(3));
        assert_eq!(board.cell(Structure::Row, 3, 3), Some(2));
        assert_eq!(board.cell(Structure::Row, 2, 2), None);
    }
}
