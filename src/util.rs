//! This module contains a compact set of Sudoku digits which is used for
//! duplicate detection in consistency checks and in tests.

use crate::error::{SudokuError, SudokuResult};

/// A set of Sudoku digits, that is, of numbers from 1 to 9, implemented as a
/// bit mask. All operations run in constant time.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct DigitSet {
    mask: u16
}

const ALL_DIGITS_MASK: u16 = 0b11_1111_1110;

impl DigitSet {

    /// Creates a new, empty digit set.
    pub fn new() -> DigitSet {
        DigitSet {
            mask: 0
        }
    }

    /// Creates a digit set that contains all digits from 1 to 9. A row,
    /// column, or block of a solved grid must yield exactly this set.
    pub fn full() -> DigitSet {
        DigitSet {
            mask: ALL_DIGITS_MASK
        }
    }

    /// Indicates whether the given digit is contained in this set. Values
    /// outside the range `[1, 9]` are never contained.
    pub fn contains(&self, digit: u8) -> bool {
        digit >= 1 && digit <= 9 && self.mask & (1 << digit) != 0
    }

    /// Inserts the given digit into this set, such that
    /// [DigitSet::contains] returns `true` for it afterwards.
    ///
    /// This method returns `true` if the set changed, that is, if the digit
    /// was *not* contained before, and `false` otherwise.
    ///
    /// # Errors
    ///
    /// If `digit` is not in the range `[1, 9]`. In that case,
    /// `SudokuError::InvalidDigit` is returned.
    pub fn insert(&mut self, digit: u8) -> SudokuResult<bool> {
        if digit < 1 || digit > 9 {
            return Err(SudokuError::InvalidDigit);
        }

        let bit = 1 << digit;
        let changed = self.mask & bit == 0;
        self.mask |= bit;
        Ok(changed)
    }

    /// Removes all digits from this set, such that it is empty afterwards.
    pub fn clear(&mut self) {
        self.mask = 0;
    }

    /// Returns the number of digits contained in this set.
    pub fn len(&self) -> usize {
        self.mask.count_ones() as usize
    }

    /// Indicates whether this set contains no digits.
    pub fn is_empty(&self) -> bool {
        self.mask == 0
    }
}

impl Default for DigitSet {
    fn default() -> DigitSet {
        DigitSet::new()
    }
}
