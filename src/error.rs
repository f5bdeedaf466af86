//! This module defines the error type for malformed board input.

use thiserror::Error;

/// Errors produced when constructing a `Board` from external input.
///
/// A valid board is a 3x3 grid holding each of the values 0 through 8
/// exactly once, with 0 denoting the empty cell. Anything else is rejected
/// at construction so that every `Board` reachable by the solvers satisfies
/// that invariant.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BoardError {
    /// The input did not have exactly one row per board row.
    #[error("expected exactly {expected} rows, found {found}")]
    WrongRowCount {
        /// Number of rows a board requires.
        expected: usize,
        /// Number of rows actually supplied.
        found: usize,
    },
    /// A row did not have exactly one character per board column.
    #[error("row {row} has {found} cells, expected exactly {expected}")]
    WrongRowLength {
        /// Index of the offending row.
        row: usize,
        /// Number of columns a board requires.
        expected: usize,
        /// Number of characters actually supplied.
        found: usize,
    },
    /// A character other than the digits '0' through '8' was encountered.
    #[error("unrecognized character '{ch}' at row {row} col {col}")]
    UnrecognizedCharacter {
        /// The offending character.
        ch: char,
        /// Row of the offending character.
        row: usize,
        /// Column of the offending character.
        col: usize,
    },
    /// A tile value outside 0..=8 was supplied in a raw grid.
    #[error("tile value {value} is out of range for a 3x3 board")]
    TileOutOfRange {
        /// The offending tile value.
        value: u8,
    },
    /// A tile value appeared more than once, so the grid is not a
    /// permutation of 0..=8.
    #[error("tile value {value} appears more than once")]
    DuplicateTile {
        /// The duplicated tile value.
        value: u8,
    },
}
