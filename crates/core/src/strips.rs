//! Strip store - circular letter strips behind the visible grid
//!
//! Each grid row is backed by one strip of `capacity` letters and a viewport
//! position. The visible row is the `grid_size` letters starting at the
//! viewport position, wrapping around the strip end:
//!
//! `grid[r][c] = strip[r][(position[r] + c) % capacity]`
//!
//! Rows are the only storage. A column shift rotates the visible letters of
//! that column across the row strips in place.

use crate::grid::Grid;
use crate::letters::LetterSource;
use crate::types::{Letter, ShiftDirection};
use crate::GridError;

/// One circular row strip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Strip {
    letters: Vec<Letter>,
    position: usize,
}

impl Strip {
    pub fn new(letters: Vec<Letter>) -> Self {
        Self {
            letters,
            position: 0,
        }
    }

    pub fn letters(&self) -> &[Letter] {
        &self.letters
    }

    pub fn capacity(&self) -> usize {
        self.letters.len()
    }

    /// Current viewport position, always `< capacity`.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Absolute strip index shown at visible offset `offset`.
    #[inline(always)]
    pub fn absolute(&self, offset: usize) -> usize {
        (self.position + offset) % self.letters.len()
    }

    pub fn visible(&self, offset: usize) -> Letter {
        self.letters[self.absolute(offset)]
    }

    pub fn shift(&mut self, direction: ShiftDirection) {
        let cap = self.letters.len();
        self.position = match direction {
            ShiftDirection::Forward => (self.position + 1) % cap,
            ShiftDirection::Backward => (self.position + cap - 1) % cap,
        };
    }

    /// Remove the letter at absolute index `at`, close the gap toward it and
    /// append a fresh letter in the vacated tail slot.
    pub fn remove_and_refill(&mut self, at: usize, source: &mut dyn LetterSource) -> Letter {
        let removed = self.letters.remove(at);
        self.letters.push(source.next_letter());
        removed
    }

    fn set(&mut self, at: usize, letter: Letter) {
        self.letters[at] = letter;
    }
}

/// All row strips for one game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StripStore {
    strips: Vec<Strip>,
    grid_size: usize,
    capacity: usize,
}

impl StripStore {
    /// Fresh random strips.
    pub fn new(
        grid_size: usize,
        capacity: usize,
        source: &mut dyn LetterSource,
    ) -> Result<Self, GridError> {
        check_geometry(grid_size, capacity)?;
        let strips = (0..grid_size)
            .map(|_| Strip::new(source.fill_strip(capacity)))
            .collect();
        Ok(Self {
            strips,
            grid_size,
            capacity,
        })
    }

    /// Strips from explicit letter strings, one per row. Viewports start at 0.
    ///
    /// ```
    /// use letterfall_core::StripStore;
    ///
    /// let rows = ["CATXXQQQQQ", "ABCDEFGHIJ", "ABCDEFGHIJ", "ABCDEFGHIJ", "ABCDEFGHIJ"];
    /// let store = StripStore::from_rows(5, &rows).unwrap();
    /// assert_eq!(store.snapshot_grid().row_string(0), "CATXX");
    /// ```
    pub fn from_rows<S: AsRef<str>>(grid_size: usize, rows: &[S]) -> Result<Self, GridError> {
        if rows.len() != grid_size {
            return Err(GridError::StripCount {
                expected: grid_size,
                got: rows.len(),
            });
        }
        let capacity = rows.first().map(|r| r.as_ref().chars().count()).unwrap_or(0);
        check_geometry(grid_size, capacity)?;

        let mut strips = Vec::with_capacity(grid_size);
        for (index, row) in rows.iter().enumerate() {
            let mut letters = Vec::with_capacity(capacity);
            for ch in row.as_ref().chars() {
                letters.push(Letter::new(ch).ok_or(GridError::NotALetter { index, found: ch })?);
            }
            if letters.len() != capacity {
                return Err(GridError::StripLength {
                    index,
                    expected: capacity,
                    got: letters.len(),
                });
            }
            strips.push(Strip::new(letters));
        }
        Ok(Self {
            strips,
            grid_size,
            capacity,
        })
    }

    /// Replace every strip with fresh letters, viewports back at 0.
    pub fn regenerate(&mut self, source: &mut dyn LetterSource) {
        for strip in &mut self.strips {
            *strip = Strip::new(source.fill_strip(self.capacity));
        }
    }

    pub fn grid_size(&self) -> usize {
        self.grid_size
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn strips(&self) -> &[Strip] {
        &self.strips
    }

    pub fn strip(&self, index: usize) -> &Strip {
        &self.strips[index]
    }

    pub fn viewport_positions(&self) -> Vec<usize> {
        self.strips.iter().map(Strip::position).collect()
    }

    /// Absolute strip index behind grid cell `(row, col)`.
    pub fn absolute_position(&self, row: usize, col: usize) -> usize {
        self.strips[row].absolute(col)
    }

    pub fn shift_row(&mut self, row: usize, direction: ShiftDirection) {
        self.strips[row].shift(direction);
    }

    /// Rotate the visible letters of column `col` by one row.
    ///
    /// `Forward` moves letters up (row r takes the letter from row r+1),
    /// matching a forward row shift moving letters left.
    pub fn shift_column(&mut self, col: usize, direction: ShiftDirection) {
        let n = self.grid_size;
        let column: Vec<Letter> = self.strips.iter().map(|s| s.visible(col)).collect();
        for (row, strip) in self.strips.iter_mut().enumerate() {
            let from = match direction {
                ShiftDirection::Forward => (row + 1) % n,
                ShiftDirection::Backward => (row + n - 1) % n,
            };
            let at = strip.absolute(col);
            strip.set(at, column[from]);
        }
    }

    /// See [`Strip::remove_and_refill`]. When several letters leave the same
    /// strip, call this in descending `at` order.
    pub fn remove_and_refill(
        &mut self,
        strip: usize,
        at: usize,
        source: &mut dyn LetterSource,
    ) -> Letter {
        self.strips[strip].remove_and_refill(at, source)
    }

    /// Project the visible grid.
    pub fn snapshot_grid(&self) -> Grid {
        let n = self.grid_size;
        let mut letters = Vec::with_capacity(n * n);
        for strip in &self.strips {
            for col in 0..n {
                letters.push(strip.visible(col));
            }
        }
        Grid::from_letters(n, letters)
    }
}

fn check_geometry(grid_size: usize, capacity: usize) -> Result<(), GridError> {
    if grid_size == 0 || capacity < grid_size {
        return Err(GridError::Geometry {
            grid_size,
            capacity,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::letters::SequenceLetters;

    fn store() -> StripStore {
        StripStore::from_rows(
            5,
            &[
                "ABCDEFGHIJ",
                "KLMNOPQRST",
                "UVWXYZABCD",
                "EFGHIJKLMN",
                "OPQRSTUVWX",
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_projection_starts_at_viewport() {
        let s = store();
        let grid = s.snapshot_grid();
        assert_eq!(grid.row_string(0), "ABCDE");
        assert_eq!(grid.row_string(4), "OPQRS");
        assert_eq!(grid.column_string(0), "AKUEO");
    }

    #[test]
    fn test_shift_row_wraps() {
        let mut s = store();
        s.shift_row(0, ShiftDirection::Backward);
        assert_eq!(s.strip(0).position(), 9);
        assert_eq!(s.snapshot_grid().row_string(0), "JABCD");

        for _ in 0..8 {
            s.shift_row(0, ShiftDirection::Forward);
        }
        assert_eq!(s.strip(0).position(), 7);
        assert_eq!(s.snapshot_grid().row_string(0), "HIJAB");
    }

    #[test]
    fn test_shift_column_rotates_visible_letters() {
        let mut s = store();
        s.shift_column(1, ShiftDirection::Forward);
        let grid = s.snapshot_grid();
        assert_eq!(grid.column_string(1), "LVFPB");
        // Other columns untouched.
        assert_eq!(grid.column_string(0), "AKUEO");

        s.shift_column(1, ShiftDirection::Backward);
        assert_eq!(s, store());
    }

    #[test]
    fn test_shift_column_respects_viewports() {
        let mut s = store();
        s.shift_row(2, ShiftDirection::Forward);
        assert_eq!(s.snapshot_grid().column_string(0), "AKVEO");
        s.shift_column(0, ShiftDirection::Backward);
        assert_eq!(s.snapshot_grid().column_string(0), "OAKVE");
        // Row 2 strip changed at its absolute index 1, not index 0.
        assert_eq!(s.strip(2).letters()[1].as_char(), 'K');
        assert_eq!(s.strip(2).letters()[0].as_char(), 'U');
    }

    #[test]
    fn test_remove_and_refill_keeps_capacity() {
        let mut s = store();
        let mut src = SequenceLetters::new("Z");
        let removed = s.remove_and_refill(0, 1, &mut src);
        assert_eq!(removed.as_char(), 'B');
        let letters: String = s.strip(0).letters().iter().map(|l| l.as_char()).collect();
        assert_eq!(letters, "ACDEFGHIJZ");
        assert_eq!(s.strip(0).capacity(), 10);
    }

    #[test]
    fn test_descending_removal_keeps_indices() {
        let mut s = store();
        let mut src = SequenceLetters::new("XYZ");
        for at in [2, 1, 0] {
            s.remove_and_refill(0, at, &mut src);
        }
        let letters: String = s.strip(0).letters().iter().map(|l| l.as_char()).collect();
        assert_eq!(letters, "DEFGHIJXYZ");
    }

    #[test]
    fn test_from_rows_validation() {
        assert_eq!(
            StripStore::from_rows(2, &["ABC"]),
            Err(GridError::StripCount {
                expected: 2,
                got: 1
            })
        );
        assert_eq!(
            StripStore::from_rows(2, &["ABC", "AB"]),
            Err(GridError::StripLength {
                index: 1,
                expected: 3,
                got: 2
            })
        );
        assert_eq!(
            StripStore::from_rows(2, &["ABC", "A-C"]),
            Err(GridError::NotALetter {
                index: 1,
                found: '-'
            })
        );
        assert_eq!(
            StripStore::from_rows(3, &["AB", "AB", "AB"]),
            Err(GridError::Geometry {
                grid_size: 3,
                capacity: 2
            })
        );
    }

    #[test]
    fn test_new_fills_every_strip() {
        let mut src = SequenceLetters::new("ABC");
        let s = StripStore::new(5, 10, &mut src).unwrap();
        assert_eq!(src.drawn(), 50);
        assert!(s.strips().iter().all(|strip| strip.capacity() == 10));
    }
}
