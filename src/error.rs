//! This module contains some error and result definitions used in this crate.

use std::error::Error;
use std::fmt::{self, Display, Formatter};
use std::num::ParseIntError;

/// Miscellaneous errors that can occur on some methods in the
/// [root module](../index.html). This does not exclude errors that occur when
/// parsing a grid, see [SudokuParseError](enum.SudokuParseError.html) for
/// that.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum SudokuError {

    /// Indicates that some cell value is invalid. This is the case if it is
    /// greater than 9, or, for operations that place a digit, if it is 0.
    InvalidDigit,

    /// Indicates that the specified coordinates (column and row) lie outside
    /// the grid. This is the case if either of them is greater than or equal
    /// to 9.
    OutOfBounds
}

impl Display for SudokuError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            SudokuError::InvalidDigit =>
                write!(f, "cell value outside the valid range"),
            SudokuError::OutOfBounds =>
                write!(f, "cell coordinates outside the grid")
        }
    }
}

impl Error for SudokuError { }

/// Syntactic sugar for `Result<V, SudokuError>`.
pub type SudokuResult<V> = Result<V, SudokuError>;

/// An enumeration of the errors that may occur when parsing a grid code with
/// [SudokuGrid::parse](crate::SudokuGrid::parse).
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum SudokuParseError {

    /// Indicates that the number of cell entries (which are separated by
    /// commas) is not 81.
    WrongNumberOfCells,

    /// Indicates that one of the non-empty entries could not be parsed as a
    /// number.
    NumberFormatError,

    /// Indicates that a cell entry holds an invalid number (0 or more
    /// than 9). Empty cells are denoted by empty entries, not by 0.
    InvalidDigit
}

impl Display for SudokuParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            SudokuParseError::WrongNumberOfCells =>
                write!(f, "grid code must have exactly 81 cell entries"),
            SudokuParseError::NumberFormatError =>
                write!(f, "cell entry is not a number"),
            SudokuParseError::InvalidDigit =>
                write!(f, "cell entry outside the range 1 to 9")
        }
    }
}

impl Error for SudokuParseError { }

impl From<ParseIntError> for SudokuParseError {
    fn from(_: ParseIntError) -> Self {
        SudokuParseError::NumberFormatError
    }
}

/// Syntactic sugar for `Result<V, SudokuParseError>`.
pub type SudokuParseResult<V> = Result<V, SudokuParseError>;

/// An enumeration of the errors that may occur when translating the display
/// text of a [Board](crate::board::Board) into a grid. These are boundary
/// errors raised before the solver is ever invoked; a puzzle without a
/// solution is *not* an error (see
/// [Board::solve](crate::board::Board::solve)).
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum BoardError {

    /// Indicates that the display text of the cell at the contained
    /// coordinates is neither empty nor a digit from 1 to 9.
    NotADigit {

        /// The column (x-coordinate) of the offending cell.
        column: usize,

        /// The row (y-coordinate) of the offending cell.
        row: usize
    },

    /// Indicates that the entered digits already conflict, that is, some
    /// digit appears twice in a row, column, or block. Searching for a
    /// completion of such a puzzle would be meaningless.
    InconsistentPuzzle
}

impl Display for BoardError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::NotADigit { column, row } =>
                write!(f, "cell ({}, {}) does not hold a digit from 1 to 9",
                    column, row),
            BoardError::InconsistentPuzzle =>
                write!(f, "the entered digits already conflict")
        }
    }
}

impl Error for BoardError { }

/// Syntactic sugar for `Result<V, BoardError>`.
pub type BoardResult<V> = Result<V, BoardError>;
