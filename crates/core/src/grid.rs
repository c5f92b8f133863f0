//! Grid module - the visible letter matrix
//!
//! A `Grid` is a value projected from the strip store; it is never written
//! back. Flat row-major storage (`row * size + col`).

use crate::types::{CellRef, Letter};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Grid {
    size: usize,
    letters: Vec<Letter>,
}

impl Grid {
    pub(crate) fn from_letters(size: usize, letters: Vec<Letter>) -> Self {
        debug_assert_eq!(letters.len(), size * size);
        Self { size, letters }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Letter at `(row, col)`, `None` out of bounds.
    pub fn get(&self, row: usize, col: usize) -> Option<Letter> {
        if row >= self.size || col >= self.size {
            return None;
        }
        Some(self.letters[row * self.size + col])
    }

    /// Cell reference with the current letter snapshot.
    pub fn cell(&self, row: usize, col: usize) -> Option<CellRef> {
        self.get(row, col).map(|letter| CellRef { row, col, letter })
    }

    /// Cell at wrapped coordinates (any integer maps onto the grid).
    pub fn cell_wrapped(&self, row: isize, col: isize) -> CellRef {
        let n = self.size as isize;
        let row = row.rem_euclid(n) as usize;
        let col = col.rem_euclid(n) as usize;
        CellRef {
            row,
            col,
            letter: self.letters[row * self.size + col],
        }
    }

    pub fn row(&self, row: usize) -> &[Letter] {
        &self.letters[row * self.size..(row + 1) * self.size]
    }

    pub fn column(&self, col: usize) -> impl Iterator<Item = Letter> + '_ {
        (0..self.size).map(move |row| self.letters[row * self.size + col])
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Letter]> {
        self.letters.chunks(self.size)
    }

    pub fn row_string(&self, row: usize) -> String {
        self.row(row).iter().map(|l| l.as_char()).collect()
    }

    pub fn column_string(&self, col: usize) -> String {
        self.column(col).map(|l| l.as_char()).collect()
    }
}

/// Lowercase word spelled by `cells`, in order.
pub fn word_of(cells: &[CellRef]) -> String {
    cells.iter().map(|c| c.letter.to_lowercase()).collect()
}

impl std::fmt::Display for Grid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, row) in self.rows().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for (j, letter) in row.iter().enumerate() {
                if j > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{letter}")?;
            }
        }
        Ok(())
    }
}
