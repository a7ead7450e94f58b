// Code lints

#![warn(trivial_casts)]
#![warn(trivial_numeric_casts)]
#![warn(unreachable_pub)]
#![warn(unused_import_braces)]
#![warn(unused_lifetimes)]
#![warn(unused_qualifications)]

// Doc lints

#![warn(missing_docs)]

//! This crate implements an easy-to-understand engine for classic 9x9 Sudoku.
//! It supports the following key features:
//!
//! * Parsing and printing Sudoku grids
//! * Checking individual placements against the standard row, column, and
//! block rules
//! * Solving Sudoku using an exhaustive backtracking algorithm
//! * A text-based board state that translates per-cell display text to a grid
//! and back, as a front end for form-style user interfaces
//!
//! # Parsing and printing grids
//!
//! See [SudokuGrid::parse] for the exact format of a grid code.
//!
//! Codes can be used to exchange Sudoku, while pretty prints can be used to
//! display a grid in a clearer manner. An example of how to parse and display
//! a grid is provided below.
//!
//! ```
//! use sudoku_classic::SudokuGrid;
//!
//! let grid = SudokuGrid::parse("\
//!     2, , , , , , , , ,\
//!      , ,3, , , , , , ,\
//!      , , , , , ,1, , ,\
//!      , , , , , , , , ,\
//!      , , , ,7, , , , ,\
//!      , , , , , , , , ,\
//!      , ,4, , , , , , ,\
//!      , , , , , , ,5, ,\
//!      , , , , , , , , ").unwrap();
//! println!("{}", grid);
//! ```
//!
//! # Checking placements
//!
//! [solver::is_placement_valid] decides whether writing a digit into a cell
//! would clash with a digit that is already present in the same row, column,
//! or 3x3 block. This is an instantaneous local check; it does not guarantee
//! that the grid remains solvable.
//!
//! ```
//! use sudoku_classic::SudokuGrid;
//! use sudoku_classic::solver;
//!
//! let mut grid = SudokuGrid::new();
//! grid.set_cell(0, 0, 5).unwrap();
//!
//! // 5 is already in row 0 and in the top-left block.
//! assert!(!solver::is_placement_valid(&grid, 8, 0, 5));
//! assert!(!solver::is_placement_valid(&grid, 1, 1, 5));
//! assert!(solver::is_placement_valid(&grid, 1, 1, 6));
//! ```
//!
//! # Solving Sudoku
//!
//! [solver::solve] fills every empty cell of a grid in place, or reports that
//! no consistent completion exists. The search is deterministic: empty cells
//! are visited in row-major order and candidates are tried in ascending
//! order, so the same puzzle always yields the same solution.
//!
//! ```
//! use sudoku_classic::SudokuGrid;
//! use sudoku_classic::solver;
//!
//! let mut grid = SudokuGrid::parse("\
//!      ,4,6,2,8,1,3,5,9,\
//!     9, ,2,5,3,7,8,4,6,\
//!     8,5, ,4,9,6,1,7,2,\
//!     3,7,4, ,2,5,6,9,8,\
//!     6,2,8,7, ,9,5,1,3,\
//!     5,9,1,3,6, ,7,2,4,\
//!     1,6,9,8,7,4, ,3,5,\
//!     2,8,5,9,1,3,4, ,7,\
//!     4,3,7,6,5,2,9,8, ").unwrap();
//!
//! assert!(solver::solve(&mut grid));
//!
//! let expected = SudokuGrid::parse("\
//!     7,4,6,2,8,1,3,5,9,\
//!     9,1,2,5,3,7,8,4,6,\
//!     8,5,3,4,9,6,1,7,2,\
//!     3,7,4,1,2,5,6,9,8,\
//!     6,2,8,7,4,9,5,1,3,\
//!     5,9,1,3,6,8,7,2,4,\
//!     1,6,9,8,7,4,2,3,5,\
//!     2,8,5,9,1,3,4,6,7,\
//!     4,3,7,6,5,2,9,8,1").unwrap();
//! assert_eq!(expected, grid);
//! ```
//!
//! A puzzle without a solution is not an error, the solver simply returns
//! `false` and restores every speculatively filled cell, so the grid is in
//! its original state again.
//!
//! # Driving a user interface
//!
//! The [board::Board] struct holds the per-cell display text of a form-style
//! interface and offers the operations such an interface needs: translating
//! the text into a grid, solving it, rendering the solution back into text,
//! and resetting all cells. See the [board] module for details.
//!
//! # Note regarding performance
//!
//! The solver is a straightforward exhaustive search without any propagation
//! or pruning beyond the local placement check. For realistic puzzles this is
//! entirely sufficient, but it is recommended to use at least `opt-level = 2`
//! in tests that solve many puzzles.

pub mod board;
pub mod error;
pub mod solver;
pub mod util;

#[cfg(test)]
mod fix_tests;

use error::{
    SudokuError,
    SudokuParseError,
    SudokuParseResult,
    SudokuResult
};

use serde::{Deserialize, Serialize};

use std::convert::TryFrom;
use std::fmt::{self, Display, Formatter};

/// The number of cells along one axis of a [SudokuGrid], i.e. the number of
/// rows, columns, and blocks.
pub const SIZE: usize = 9;

/// The number of cells along one axis of a 3x3 block of a [SudokuGrid].
pub const BLOCK_SIZE: usize = 3;

/// A Sudoku grid is a square arrangement of 9x9 cells, organized into nine
/// non-overlapping 3x3 blocks aligned to every third row and column:
///
/// ```text
/// ╔═══╤═══╤═══╦═══╤═══╤═══╦═══╤═══╤═══╗
/// ║   │   │   ║   │   │   ║   │   │   ║
/// ╟───┼───┼───╫───┼───┼───╫───┼───┼───╢
/// ║   │   │   ║   │   │   ║   │   │   ║
/// ╟───┼───┼───╫───┼───┼───╫───┼───┼───╢
/// ║   │   │   ║   │   │   ║   │   │   ║
/// ╠═══╪═══╪═══╬═══╪═══╪═══╬═══╪═══╪═══╣
/// ║   │   │   ║   │   │   ║   │   │   ║
/// ╟───┼───┼───╫───┼───┼───╫───┼───┼───╢
/// ║   │   │   ║   │   │   ║   │   │   ║
/// ╟───┼───┼───╫───┼───┼───╫───┼───┼───╢
/// ║   │   │   ║   │   │   ║   │   │   ║
/// ╠═══╪═══╪═══╬═══╪═══╪═══╬═══╪═══╪═══╣
/// ║   │   │   ║   │   │   ║   │   │   ║
/// ╟───┼───┼───╫───┼───┼───╫───┼───┼───╢
/// ║   │   │   ║   │   │   ║   │   │   ║
/// ╟───┼───┼───╫───┼───┼───╫───┼───┼───╢
/// ║   │   │   ║   │   │   ║   │   │   ║
/// ╚═══╧═══╧═══╩═══╧═══╧═══╩═══╧═══╧═══╝
/// ```
///
/// Each cell holds a value from 0 to 9, where 0 denotes an empty cell and 1
/// to 9 denote a fixed digit. Cells are stored in row-major order. All
/// constructors guarantee that every cell value is at most 9; there is no way
/// to obtain a grid that violates this.
///
/// In serialized form, a grid is represented by its parseable string code
/// (see [SudokuGrid::parse]), so deserialization cannot bypass the cell range
/// invariant either.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(into = "String", try_from = "String")]
pub struct SudokuGrid {
    cells: [[u8; SIZE]; SIZE]
}

fn to_char(cell: u8) -> char {
    if cell == 0 {
        ' '
    }
    else {
        (b'0' + cell) as char
    }
}

fn line(start: char, thick_sep: char, thin_sep: char,
        segment: impl Fn(usize) -> char, pad: char, end: char, newline: bool)
        -> String {
    let mut result = String::new();

    for x in 0..SIZE {
        if x == 0 {
            result.push(start);
        }
        else if x % BLOCK_SIZE == 0 {
            result.push(thick_sep);
        }
        else {
            result.push(thin_sep);
        }

        result.push(pad);
        result.push(segment(x));
        result.push(pad);
    }

    result.push(end);

    if newline {
        result.push('\n');
    }

    result
}

fn top_row() -> String {
    line('╔', '╦', '╤', |_| '═', '═', '╗', true)
}

fn thin_separator_line() -> String {
    line('╟', '╫', '┼', |_| '─', '─', '╢', true)
}

fn thick_separator_line() -> String {
    line('╠', '╬', '╪', |_| '═', '═', '╣', true)
}

fn bottom_row() -> String {
    line('╚', '╩', '╧', |_| '═', '═', '╝', false)
}

fn content_row(grid: &SudokuGrid, y: usize) -> String {
    line('║', '║', '│', |x| to_char(grid.cells[y][x]), ' ', '║', true)
}

impl Display for SudokuGrid {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let thin_separator_line = thin_separator_line();
        let thick_separator_line = thick_separator_line();

        for y in 0..SIZE {
            if y == 0 {
                f.write_str(top_row().as_str())?;
            }
            else if y % BLOCK_SIZE == 0 {
                f.write_str(thick_separator_line.as_str())?;
            }
            else {
                f.write_str(thin_separator_line.as_str())?;
            }

            f.write_str(content_row(self, y).as_str())?;
        }

        f.write_str(bottom_row().as_str())?;
        Ok(())
    }
}

fn cell_to_string(cell: u8) -> String {
    if cell == 0 {
        String::from("")
    }
    else {
        cell.to_string()
    }
}

fn check_coordinates(column: usize, row: usize) -> SudokuResult<()> {
    if column >= SIZE || row >= SIZE {
        Err(SudokuError::OutOfBounds)
    }
    else {
        Ok(())
    }
}

impl SudokuGrid {

    /// Creates a new, completely empty Sudoku grid, i.e. one where every cell
    /// holds the value 0.
    pub fn new() -> SudokuGrid {
        SudokuGrid {
            cells: [[0; SIZE]; SIZE]
        }
    }

    /// Creates a Sudoku grid from a 9x9 array of cell values in row-major
    /// order, that is, `cells[row][column]`. A value of 0 denotes an empty
    /// cell and values from 1 to 9 denote fixed digits.
    ///
    /// Note that it is *not* checked whether the digits are free of
    /// duplicates in rows, columns, or blocks - it is perfectly legal to
    /// construct an inconsistent grid here. Use
    /// [solver::is_consistent](crate::solver::is_consistent) if you require
    /// that guarantee.
    ///
    /// # Errors
    ///
    /// If any cell value is greater than 9. In that case,
    /// `SudokuError::InvalidDigit` is returned.
    pub fn from_cells(cells: [[u8; SIZE]; SIZE]) -> SudokuResult<SudokuGrid> {
        for row in cells.iter() {
            for &cell in row.iter() {
                if cell > 9 {
                    return Err(SudokuError::InvalidDigit);
                }
            }
        }

        Ok(SudokuGrid {
            cells
        })
    }

    /// Parses a code encoding a Sudoku grid. The code is a comma-separated
    /// list of exactly 81 entries, which are either empty or a digit from 1
    /// to 9. The entries are assigned left-to-right, top-to-bottom, where
    /// each row is completed before the next one is started. Whitespace in
    /// the entries is ignored to allow for more intuitive formatting. Note
    /// that empty cells are denoted by empty entries; an explicit `0` is
    /// rejected.
    ///
    /// As an example, the code below parses to a grid whose first row reads
    /// 1 and 2 with a gap in between, and whose last cell holds a 9.
    ///
    /// ```
    /// use sudoku_classic::SudokuGrid;
    ///
    /// let grid = SudokuGrid::parse("\
    ///     1, ,2, , , , , , ,\
    ///      , , , , , , , , ,\
    ///      , , , , , , , , ,\
    ///      , , , , , , , , ,\
    ///      , , , , , , , , ,\
    ///      , , , , , , , , ,\
    ///      , , , , , , , , ,\
    ///      , , , , , , , , ,\
    ///      , , , , , , , ,9").unwrap();
    ///
    /// assert_eq!(Ok(1), grid.get_cell(0, 0));
    /// assert_eq!(Ok(2), grid.get_cell(2, 0));
    /// assert_eq!(Ok(9), grid.get_cell(8, 8));
    /// ```
    ///
    /// # Errors
    ///
    /// Any specialization of `SudokuParseError` (see that documentation).
    pub fn parse(code: &str) -> SudokuParseResult<SudokuGrid> {
        let entries: Vec<&str> = code.split(',').collect();

        if entries.len() != SIZE * SIZE {
            return Err(SudokuParseError::WrongNumberOfCells);
        }

        let mut grid = SudokuGrid::new();

        for (i, entry) in entries.iter().enumerate() {
            let entry = entry.trim();

            if entry.is_empty() {
                continue;
            }

            let digit = entry.parse::<u8>()?;

            if digit == 0 || digit > 9 {
                return Err(SudokuParseError::InvalidDigit);
            }

            grid.cells[i / SIZE][i % SIZE] = digit;
        }

        Ok(grid)
    }

    /// Converts the grid into a `String` in a way that is consistent with
    /// [SudokuGrid::parse](#method.parse). That is, a grid that is converted
    /// to a string and parsed again will not change, as is illustrated below.
    ///
    /// ```
    /// use sudoku_classic::SudokuGrid;
    ///
    /// let mut grid = SudokuGrid::new();
    ///
    /// // Just some arbitrary changes to create some content.
    /// grid.set_cell(1, 1, 4).unwrap();
    /// grid.set_cell(1, 2, 5).unwrap();
    ///
    /// let grid_str = grid.to_parseable_string();
    /// let grid_parsed = SudokuGrid::parse(grid_str.as_str()).unwrap();
    /// assert_eq!(grid, grid_parsed);
    /// ```
    pub fn to_parseable_string(&self) -> String {
        self.cells.iter()
            .flat_map(|row| row.iter())
            .map(|&cell| cell_to_string(cell))
            .collect::<Vec<String>>()
            .join(",")
    }

    /// Gets the content of the cell at the specified position. A result of 0
    /// denotes an empty cell.
    ///
    /// # Arguments
    ///
    /// * `column`: The column (x-coordinate) of the desired cell. Must be in
    /// the range `[0, 9[`.
    /// * `row`: The row (y-coordinate) of the desired cell. Must be in the
    /// range `[0, 9[`.
    ///
    /// # Errors
    ///
    /// If either `column` or `row` are not in the specified range. In that
    /// case, `SudokuError::OutOfBounds` is returned.
    pub fn get_cell(&self, column: usize, row: usize) -> SudokuResult<u8> {
        check_coordinates(column, row)?;
        Ok(self.cells[row][column])
    }

    /// Indicates whether the cell at the specified position holds the given
    /// digit. This will return `false` if there is a different digit in that
    /// cell or it is empty.
    ///
    /// # Arguments
    ///
    /// * `column`: The column (x-coordinate) of the checked cell. Must be in
    /// the range `[0, 9[`.
    /// * `row`: The row (y-coordinate) of the checked cell. Must be in the
    /// range `[0, 9[`.
    /// * `digit`: The digit to check whether it is in the specified cell. If
    /// it is *not* in the range `[1, 9]`, `false` will always be returned.
    ///
    /// # Errors
    ///
    /// If either `column` or `row` are not in the specified range. In that
    /// case, `SudokuError::OutOfBounds` is returned.
    pub fn has_digit(&self, column: usize, row: usize, digit: u8)
            -> SudokuResult<bool> {
        Ok(self.get_cell(column, row)? == digit && digit != 0)
    }

    /// Sets the content of the cell at the specified position to the given
    /// digit. If the cell was not empty, the old digit will be overwritten.
    ///
    /// # Arguments
    ///
    /// * `column`: The column (x-coordinate) of the assigned cell. Must be in
    /// the range `[0, 9[`.
    /// * `row`: The row (y-coordinate) of the assigned cell. Must be in the
    /// range `[0, 9[`.
    /// * `digit`: The digit to assign to the specified cell. Must be in the
    /// range `[1, 9]`.
    ///
    /// # Errors
    ///
    /// * `SudokuError::OutOfBounds` If either `column` or `row` are not in
    /// the specified range.
    /// * `SudokuError::InvalidDigit` If `digit` is not in the specified
    /// range.
    pub fn set_cell(&mut self, column: usize, row: usize, digit: u8)
            -> SudokuResult<()> {
        check_coordinates(column, row)?;

        if digit == 0 || digit > 9 {
            return Err(SudokuError::InvalidDigit);
        }

        self.cells[row][column] = digit;
        Ok(())
    }

    /// Clears the content of the cell at the specified position, that is, if
    /// it contains a digit, that digit is removed. If the cell is already
    /// empty, it will be left that way.
    ///
    /// # Arguments
    ///
    /// * `column`: The column (x-coordinate) of the cleared cell. Must be in
    /// the range `[0, 9[`.
    /// * `row`: The row (y-coordinate) of the cleared cell. Must be in the
    /// range `[0, 9[`.
    ///
    /// # Errors
    ///
    /// If either `column` or `row` are not in the specified range. In that
    /// case, `SudokuError::OutOfBounds` is returned.
    pub fn clear_cell(&mut self, column: usize, row: usize)
            -> SudokuResult<()> {
        check_coordinates(column, row)?;
        self.cells[row][column] = 0;
        Ok(())
    }

    /// Assigns the content of another grid to this one, i.e., changes the
    /// cells in this grid to the state in `other`.
    pub fn assign(&mut self, other: &SudokuGrid) {
        self.cells = other.cells;
    }

    /// Counts the number of clues given by this grid. This is the number of
    /// non-empty cells. While on average Sudoku with less clues are harder,
    /// this is *not* a reliable measure of difficulty.
    pub fn count_clues(&self) -> usize {
        self.cells.iter()
            .flat_map(|row| row.iter())
            .filter(|&&cell| cell != 0)
            .count()
    }

    /// Indicates whether this grid is full, i.e. every cell is filled with a
    /// digit. In this case, [SudokuGrid::count_clues] returns 81.
    pub fn is_full(&self) -> bool {
        self.cells.iter()
            .flat_map(|row| row.iter())
            .all(|&cell| cell != 0)
    }

    /// Indicates whether this grid is empty, i.e. no cell is filled with a
    /// digit. In this case, [SudokuGrid::count_clues] returns 0.
    pub fn is_empty(&self) -> bool {
        self.cells.iter()
            .flat_map(|row| row.iter())
            .all(|&cell| cell == 0)
    }

    /// Indicates whether this grid configuration is a subset of another one.
    /// That is, all cells filled in this grid with some digit must be filled
    /// in `other` with the same digit. If this condition is met, `true` is
    /// returned, and `false` otherwise.
    pub fn is_subset(&self, other: &SudokuGrid) -> bool {
        self.cells.iter()
            .flat_map(|row| row.iter())
            .zip(other.cells.iter().flat_map(|row| row.iter()))
            .all(|(&self_cell, &other_cell)|
                self_cell == 0 || self_cell == other_cell)
    }

    /// Indicates whether this grid configuration is a superset of another
    /// one. That is, all cells filled in the `other` grid with some digit
    /// must be filled in this one with the same digit. If this condition is
    /// met, `true` is returned, and `false` otherwise.
    pub fn is_superset(&self, other: &SudokuGrid) -> bool {
        other.is_subset(self)
    }

    /// Gets a reference to the 9x9 array which holds the cells. It is
    /// organized in row-major order, that is, `cells()[row][column]`.
    pub fn cells(&self) -> &[[u8; SIZE]; SIZE] {
        &self.cells
    }
}

impl Default for SudokuGrid {
    fn default() -> SudokuGrid {
        SudokuGrid::new()
    }
}

impl TryFrom<String> for SudokuGrid {
    type Error = SudokuParseError;

    fn try_from(code: String) -> SudokuParseResult<SudokuGrid> {
        SudokuGrid::parse(code.as_str())
    }
}

impl From<SudokuGrid> for String {
    fn from(grid: SudokuGrid) -> String {
        grid.to_parseable_string()
    }
}

#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn parse_ok() {
        let grid_res = SudokuGrid::parse("\
            1, , ,2, , , , , ,\
             ,3, , ,4, , , , ,\
             , , , , , , , , ,\
             ,2, , , , , , , ,\
             , , , , , , ,5, ,\
             , , , , , , , , ,\
             , , ,3, , , , , ,\
             , , , , , ,6, , ,\
             , , , , , , , ,9");

        if let Ok(grid) = grid_res {
            assert_eq!(Ok(1), grid.get_cell(0, 0));
            assert_eq!(Ok(0), grid.get_cell(1, 0));
            assert_eq!(Ok(2), grid.get_cell(3, 0));
            assert_eq!(Ok(3), grid.get_cell(1, 1));
            assert_eq!(Ok(4), grid.get_cell(4, 1));
            assert_eq!(Ok(2), grid.get_cell(1, 3));
            assert_eq!(Ok(5), grid.get_cell(7, 4));
            assert_eq!(Ok(3), grid.get_cell(3, 6));
            assert_eq!(Ok(6), grid.get_cell(6, 7));
            assert_eq!(Ok(9), grid.get_cell(8, 8));
            assert_eq!(9, grid.count_clues());
        }
        else {
            panic!("Parsing valid grid failed.");
        }
    }

    #[test]
    fn parse_wrong_number_of_cells() {
        assert_eq!(Err(SudokuParseError::WrongNumberOfCells),
            SudokuGrid::parse(",".repeat(79).as_str()));
        assert_eq!(Err(SudokuParseError::WrongNumberOfCells),
            SudokuGrid::parse(",".repeat(81).as_str()));
    }

    #[test]
    fn parse_number_format_error() {
        let mut code = String::from("#");
        code.push_str(",".repeat(80).as_str());
        assert_eq!(Err(SudokuParseError::NumberFormatError),
            SudokuGrid::parse(code.as_str()));
    }

    #[test]
    fn parse_invalid_digit() {
        let mut code = String::from("0");
        code.push_str(",".repeat(80).as_str());
        assert_eq!(Err(SudokuParseError::InvalidDigit),
            SudokuGrid::parse(code.as_str()));

        let mut code = String::from("10");
        code.push_str(",".repeat(80).as_str());
        assert_eq!(Err(SudokuParseError::InvalidDigit),
            SudokuGrid::parse(code.as_str()));
    }

    #[test]
    fn to_parseable_string() {
        let mut grid = SudokuGrid::new();

        assert_eq!(",".repeat(80), grid.to_parseable_string());

        grid.set_cell(0, 0, 1).unwrap();
        grid.set_cell(8, 8, 9).unwrap();

        let reparsed =
            SudokuGrid::parse(grid.to_parseable_string().as_str()).unwrap();
        assert_eq!(grid, reparsed);
    }

    #[test]
    fn from_cells_validates_range() {
        let mut cells = [[0u8; SIZE]; SIZE];
        cells[2][3] = 7;

        let grid = SudokuGrid::from_cells(cells).unwrap();
        assert_eq!(Ok(7), grid.get_cell(3, 2));

        cells[5][5] = 10;
        assert_eq!(Err(SudokuError::InvalidDigit),
            SudokuGrid::from_cells(cells));
    }

    #[test]
    fn cell_accessors_check_bounds() {
        let mut grid = SudokuGrid::new();

        assert_eq!(Err(SudokuError::OutOfBounds), grid.get_cell(9, 0));
        assert_eq!(Err(SudokuError::OutOfBounds), grid.get_cell(0, 9));
        assert_eq!(Err(SudokuError::OutOfBounds), grid.set_cell(9, 9, 1));
        assert_eq!(Err(SudokuError::OutOfBounds), grid.clear_cell(0, 10));
        assert_eq!(Err(SudokuError::OutOfBounds), grid.has_digit(10, 0, 1));
    }

    #[test]
    fn set_cell_rejects_invalid_digits() {
        let mut grid = SudokuGrid::new();

        assert_eq!(Err(SudokuError::InvalidDigit), grid.set_cell(0, 0, 0));
        assert_eq!(Err(SudokuError::InvalidDigit), grid.set_cell(0, 0, 10));
        assert_eq!(Ok(0), grid.get_cell(0, 0));
    }

    #[test]
    fn set_and_clear_cell() {
        let mut grid = SudokuGrid::new();

        grid.set_cell(4, 2, 8).unwrap();
        assert_eq!(Ok(8), grid.get_cell(4, 2));
        assert_eq!(Ok(true), grid.has_digit(4, 2, 8));
        assert_eq!(Ok(false), grid.has_digit(4, 2, 7));

        grid.set_cell(4, 2, 3).unwrap();
        assert_eq!(Ok(3), grid.get_cell(4, 2));

        grid.clear_cell(4, 2).unwrap();
        assert_eq!(Ok(0), grid.get_cell(4, 2));
        assert_eq!(Ok(false), grid.has_digit(4, 2, 3));
    }

    #[test]
    fn has_digit_never_finds_zero() {
        let grid = SudokuGrid::new();
        assert_eq!(Ok(false), grid.has_digit(0, 0, 0));
    }

    #[test]
    fn count_clues_and_empty_and_full() {
        let empty = SudokuGrid::new();
        let mut partial = SudokuGrid::new();
        partial.set_cell(0, 0, 1).unwrap();
        partial.set_cell(3, 4, 5).unwrap();
        partial.set_cell(8, 8, 9).unwrap();
        let full = full_example_grid();

        assert_eq!(0, empty.count_clues());
        assert_eq!(3, partial.count_clues());
        assert_eq!(81, full.count_clues());

        assert!(empty.is_empty());
        assert!(!partial.is_empty());
        assert!(!full.is_empty());

        assert!(!empty.is_full());
        assert!(!partial.is_full());
        assert!(full.is_full());
    }

    fn full_example_grid() -> SudokuGrid {
        SudokuGrid::parse("\
            7,4,6,2,8,1,3,5,9,\
            9,1,2,5,3,7,8,4,6,\
            8,5,3,4,9,6,1,7,2,\
            3,7,4,1,2,5,6,9,8,\
            6,2,8,7,4,9,5,1,3,\
            5,9,1,3,6,8,7,2,4,\
            1,6,9,8,7,4,2,3,5,\
            2,8,5,9,1,3,4,6,7,\
            4,3,7,6,5,2,9,8,1").unwrap()
    }

    #[test]
    fn subset_relations() {
        let empty = SudokuGrid::new();
        let full = full_example_grid();
        let mut partial = full.clone();
        partial.clear_cell(0, 0).unwrap();
        partial.clear_cell(5, 5).unwrap();

        assert!(empty.is_subset(&partial));
        assert!(empty.is_subset(&full));
        assert!(partial.is_subset(&full));
        assert!(full.is_superset(&partial));
        assert!(!full.is_subset(&partial));
        assert!(partial.is_subset(&partial));

        let mut changed = partial.clone();
        changed.set_cell(0, 0, full.get_cell(1, 0).unwrap()).unwrap();
        assert!(!changed.is_subset(&full));
    }

    #[test]
    fn assign_copies_cells() {
        let mut grid = SudokuGrid::new();
        let full = full_example_grid();

        grid.assign(&full);
        assert_eq!(full, grid);
    }

    #[test]
    fn display_pretty_prints_grid() {
        let mut grid = SudokuGrid::new();
        grid.set_cell(0, 0, 2).unwrap();
        grid.set_cell(4, 4, 7).unwrap();

        let printed = format!("{}", grid);
        let lines: Vec<&str> = printed.lines().collect();

        assert_eq!(19, lines.len());
        assert!(lines[0].starts_with('╔'));
        assert!(lines[18].starts_with('╚'));
        assert!(lines[1].contains('2'));
        assert!(lines[9].contains('7'));
    }

    #[test]
    fn serde_round_trip() {
        let full = full_example_grid();
        let json = serde_json::to_string(&full).unwrap();

        assert_eq!(format!("\"{}\"", full.to_parseable_string()), json);

        let deserialized: SudokuGrid =
            serde_json::from_str(json.as_str()).unwrap();
        assert_eq!(full, deserialized);
    }

    #[test]
    fn serde_rejects_invalid_code() {
        let result = serde_json::from_str::<SudokuGrid>("\"1,2,3\"");
        assert!(result.is_err());
    }
}
