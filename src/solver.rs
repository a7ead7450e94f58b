//! This module contains the logic for solving Sudoku.
//!
//! Most importantly, this module contains [is_placement_valid], which checks
//! a single placement against the standard row, column, and block rules, and
//! [solve], which fills a grid by exhaustive backtracking search. In
//! addition, [is_consistent] offers a whole-grid consistency check that
//! callers can use to validate input at the boundary before searching.

use crate::{BLOCK_SIZE, SIZE, SudokuGrid};
use crate::util::DigitSet;

/// Indicates whether writing `digit` into the cell at the given position
/// would *not* duplicate `digit` elsewhere in the same row, the same column,
/// or the same 3x3 block. The block is the one with its origin at
/// `(column - column % 3, row - row % 3)`.
///
/// This is a pure, instantaneous check over the current grid contents. It
/// does not guarantee that the grid remains solvable after the placement,
/// only that no uniqueness rule is violated by it. Note that the scan covers
/// the target cell's own current value as well, so a cell that already holds
/// `digit` makes the placement invalid.
///
/// # Arguments
///
/// * `grid`: The grid into which the placement is checked.
/// * `column`: The column (x-coordinate) of the target cell. Must be in the
/// range `[0, 9[`.
/// * `row`: The row (y-coordinate) of the target cell. Must be in the range
/// `[0, 9[`.
/// * `digit`: The candidate digit. Must be in the range `[1, 9]`.
pub fn is_placement_valid(grid: &SudokuGrid, column: usize, row: usize,
        digit: u8) -> bool {
    debug_assert!(column < SIZE && row < SIZE);
    debug_assert!(digit >= 1 && digit <= 9);

    for i in 0..SIZE {
        if grid.has_digit(i, row, digit).unwrap() ||
                grid.has_digit(column, i, digit).unwrap() {
            return false;
        }
    }

    let block_column = column - column % BLOCK_SIZE;
    let block_row = row - row % BLOCK_SIZE;

    for other_row in block_row..(block_row + BLOCK_SIZE) {
        for other_column in block_column..(block_column + BLOCK_SIZE) {
            if grid.has_digit(other_column, other_row, digit).unwrap() {
                return false;
            }
        }
    }

    true
}

fn solve_from(grid: &mut SudokuGrid, column: usize, row: usize) -> bool {
    let past_last_cell = row == SIZE;

    if past_last_cell {
        return true;
    }

    let next_column = (column + 1) % SIZE;
    let next_row = if next_column == 0 { row + 1 } else { row };

    if grid.get_cell(column, row).unwrap() != 0 {
        solve_from(grid, next_column, next_row)
    }
    else {
        for digit in 1..=9 {
            if is_placement_valid(grid, column, row, digit) {
                grid.set_cell(column, row, digit).unwrap();

                if solve_from(grid, next_column, next_row) {
                    return true;
                }

                grid.clear_cell(column, row).unwrap();
            }
        }

        false
    }
}

/// Fills every empty cell of the given grid such that no digit is duplicated
/// in any row, column, or 3x3 block, or determines that no such completion
/// exists.
///
/// The search is a depth-first exhaustive search over the empty cells in
/// row-major order, trying candidates from 1 to 9 in ascending order at each
/// cell. It is therefore fully deterministic and yields the
/// lexicographically-first solution if any solution exists. Alternative
/// solutions are neither searched for nor reported.
///
/// If `true` is returned, the grid has been mutated in place into a complete
/// assignment that keeps every previously filled cell at its original digit.
/// If `false` is returned, no completion exists and every speculative
/// placement has been undone, so the grid holds the original input values
/// again. A `false` result is a normal outcome, not an error.
///
/// The caller must ensure that the non-empty cells of the input are already
/// free of duplicates; behavior on an inconsistent input is unspecified. Use
/// [is_consistent] to validate the input beforehand if it comes from an
/// untrusted source.
pub fn solve(grid: &mut SudokuGrid) -> bool {
    solve_from(grid, 0, 0)
}

/// Indicates whether the given grid is consistent, that is, whether no digit
/// occurs more than once in any row, column, or 3x3 block. Empty cells are
/// ignored, so partial grids can be checked as well. An empty grid is
/// trivially consistent.
///
/// Together with [SudokuGrid::is_full](crate::SudokuGrid::is_full), this can
/// also verify a finished solution: a full, consistent grid has each row,
/// column, and block holding exactly the digits 1 to 9.
pub fn is_consistent(grid: &SudokuGrid) -> bool {
    let mut set = DigitSet::new();

    for row in 0..SIZE {
        set.clear();

        for column in 0..SIZE {
            let cell = grid.get_cell(column, row).unwrap();

            if cell != 0 && !set.insert(cell).unwrap() {
                return false;
            }
        }
    }

    for column in 0..SIZE {
        set.clear();

        for row in 0..SIZE {
            let cell = grid.get_cell(column, row).unwrap();

            if cell != 0 && !set.insert(cell).unwrap() {
                return false;
            }
        }
    }

    for block_row in (0..SIZE).step_by(BLOCK_SIZE) {
        for block_column in (0..SIZE).step_by(BLOCK_SIZE) {
            set.clear();

            for row in block_row..(block_row + BLOCK_SIZE) {
                for column in block_column..(block_column + BLOCK_SIZE) {
                    let cell = grid.get_cell(column, row).unwrap();

                    if cell != 0 && !set.insert(cell).unwrap() {
                        return false;
                    }
                }
            }
        }
    }

    true
}
