//! This module contains the board state that backs a form-style user
//! interface.
//!
//! A [Board] holds the display text of all 81 cells of such an interface. It
//! carries no widget handles or toolkit types; a front end is expected to
//! copy user input into the board, call one of its operations, and copy the
//! resulting text back into its widgets. All operations are pure functions
//! of the board state, so the same board always behaves the same way.
//!
//! The typical solve-button flow looks like this:
//!
//! ```
//! use sudoku_classic::board::Board;
//!
//! let mut board = Board::new();
//! board.set_entry(0, 0, "4").unwrap();
//! board.set_entry(3, 0, "7").unwrap();
//!
//! match board.solve() {
//!     Ok(true) => {
//!         // Every entry now holds a digit; render them to the user.
//!         assert_eq!(Ok("4"), board.entry(0, 0));
//!         assert_eq!(Ok("7"), board.entry(3, 0));
//!     },
//!     Ok(false) => panic!("show a \"no solution\" notice"),
//!     Err(error) => panic!("show the input error: {}", error)
//! }
//! ```

use crate::{SIZE, SudokuGrid, solver};
use crate::error::{BoardError, BoardResult, SudokuResult};

/// The display text of a 9x9 grid of cells, as entered by a user into a
/// form-style interface. Each cell holds an arbitrary string; only when a
/// grid is built from the board is the text required to be empty, blank, or
/// a digit from 1 to 9.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Board {
    entries: [[String; SIZE]; SIZE]
}

impl Board {

    /// Creates a new board where every cell's display text is empty.
    pub fn new() -> Board {
        Board {
            entries: Default::default()
        }
    }

    /// Gets the display text of the cell at the specified position.
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
    pub fn entry(&self, column: usize, row: usize) -> SudokuResult<&str> {
        crate::check_coordinates(column, row)?;
        Ok(self.entries[row][column].as_str())
    }

    /// Sets the display text of the cell at the specified position. Any text
    /// is accepted here; it is only validated once a grid is built from the
    /// board (see [Board::to_grid]).
    ///
    /// # Arguments
    ///
    /// * `column`: The column (x-coordinate) of the assigned cell. Must be
    /// in the range `[0, 9[`.
    /// * `row`: The row (y-coordinate) of the assigned cell. Must be in the
    /// range `[0, 9[`.
    /// * `text`: The display text to assign to the specified cell.
    ///
    /// # Errors
    ///
    /// If either `column` or `row` are not in the specified range. In that
    /// case, `SudokuError::OutOfBounds` is returned.
    pub fn set_entry(&mut self, column: usize, row: usize,
            text: impl Into<String>) -> SudokuResult<()> {
        crate::check_coordinates(column, row)?;
        self.entries[row][column] = text.into();
        Ok(())
    }

    /// Translates the display text of all cells into a [SudokuGrid]. Empty
    /// or whitespace-only text becomes an empty cell and text holding a
    /// digit from 1 to 9 becomes a fixed digit.
    ///
    /// # Errors
    ///
    /// If any cell holds text that is neither blank nor a digit from 1 to 9.
    /// In that case, `BoardError::NotADigit` with the coordinates of the
    /// first offending cell (in row-major order) is returned.
    pub fn to_grid(&self) -> BoardResult<SudokuGrid> {
        let mut grid = SudokuGrid::new();

        for row in 0..SIZE {
            for column in 0..SIZE {
                let text = self.entries[row][column].trim();

                if text.is_empty() {
                    continue;
                }

                match text.parse::<u8>() {
                    Ok(digit) if digit >= 1 && digit <= 9 =>
                        grid.set_cell(column, row, digit).unwrap(),
                    _ => return Err(BoardError::NotADigit {
                        column,
                        row
                    })
                }
            }
        }

        Ok(grid)
    }

    /// Renders the given grid into the display text of this board. Each
    /// digit becomes its decimal text and each empty cell becomes empty
    /// text. All previous display text is overwritten.
    pub fn show_grid(&mut self, grid: &SudokuGrid) {
        for row in 0..SIZE {
            for column in 0..SIZE {
                let cell = grid.get_cell(column, row).unwrap();

                self.entries[row][column] = if cell == 0 {
                    String::new()
                }
                else {
                    cell.to_string()
                };
            }
        }
    }

    /// Clears the display text of all cells. This is a pure presentation
    /// reset; the solver is not involved.
    pub fn reset(&mut self) {
        for row in self.entries.iter_mut() {
            for entry in row.iter_mut() {
                entry.clear();
            }
        }
    }

    /// Attempts to solve the puzzle currently entered into this board. The
    /// display text is translated into a grid (see [Board::to_grid]),
    /// validated for consistency, and passed to
    /// [solver::solve](crate::solver::solve).
    ///
    /// If a solution is found, it is rendered back into the display text and
    /// `Ok(true)` is returned. If no solution exists, the display text is
    /// left untouched and `Ok(false)` is returned; the caller is expected to
    /// inform the user, as this is a normal outcome and not an error.
    ///
    /// # Errors
    ///
    /// * `BoardError::NotADigit` If some cell holds text that is neither
    /// blank nor a digit from 1 to 9.
    /// * `BoardError::InconsistentPuzzle` If the entered digits already
    /// conflict, that is, some digit appears twice in a row, column, or
    /// block.
    pub fn solve(&mut self) -> BoardResult<bool> {
        let mut grid = self.to_grid()?;

        if !solver::is_consistent(&grid) {
            return Err(BoardError::InconsistentPuzzle);
        }

        if solver::solve(&mut grid) {
            self.show_grid(&grid);
            Ok(true)
        }
        else {
            Ok(false)
        }
    }
}
