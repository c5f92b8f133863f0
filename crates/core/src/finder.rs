//! Word finder - scans the grid for dictionary words
//!
//! Every contiguous run along rows and columns, read in increasing index
//! order, of every length from `min_len` to `min(grid size, max_len)`.
//!
//! Scan order (used for tie-breaks): rows top to bottom, then columns left to
//! right; within a line, shorter lengths first, then by start offset.
//! Overlapping candidates are all reported.

use crate::grid::{word_of, Grid};
use crate::oracle::WordOracle;
use crate::types::{Axis, CellRef, MatchCandidate};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WordFinder {
    min_len: usize,
    max_len: usize,
}

impl WordFinder {
    pub fn new(min_len: usize, max_len: usize) -> Self {
        Self {
            min_len: min_len.max(1),
            max_len,
        }
    }

    pub fn min_len(&self) -> usize {
        self.min_len
    }

    pub fn max_len(&self) -> usize {
        self.max_len
    }

    /// All candidates in scan order.
    pub fn find_all(&self, grid: &Grid, oracle: &dyn WordOracle) -> Vec<MatchCandidate> {
        let mut out = Vec::new();
        let n = grid.size();
        for row in 0..n {
            let line: Vec<CellRef> = (0..n).filter_map(|col| grid.cell(row, col)).collect();
            self.scan_line(&line, Axis::Horizontal, oracle, &mut out);
        }
        for col in 0..n {
            let line: Vec<CellRef> = (0..n).filter_map(|row| grid.cell(row, col)).collect();
            self.scan_line(&line, Axis::Vertical, oracle, &mut out);
        }
        out
    }

    fn scan_line(
        &self,
        line: &[CellRef],
        axis: Axis,
        oracle: &dyn WordOracle,
        out: &mut Vec<MatchCandidate>,
    ) {
        let longest = self.max_len.min(line.len());
        for len in self.min_len..=longest {
            for start in 0..=line.len() - len {
                let cells = &line[start..start + len];
                let word = word_of(cells);
                if oracle.is_valid_word(&word) {
                    out.push(MatchCandidate {
                        word,
                        axis,
                        cells: cells.to_vec(),
                    });
                }
            }
        }
    }
}

/// Longest candidate; the earliest in scan order wins ties.
pub fn best(candidates: &[MatchCandidate]) -> Option<&MatchCandidate> {
    best_of(candidates.iter())
}

/// Like [`best`], restricted to candidates covering `(row, col)`.
pub fn best_containing(
    candidates: &[MatchCandidate],
    row: usize,
    col: usize,
) -> Option<&MatchCandidate> {
    best_of(candidates.iter().filter(|c| c.contains(row, col)))
}

fn best_of<'a>(iter: impl Iterator<Item = &'a MatchCandidate>) -> Option<&'a MatchCandidate> {
    let mut best: Option<&MatchCandidate> = None;
    for candidate in iter {
        match best {
            Some(b) if b.len() >= candidate.len() => {}
            _ => best = Some(candidate),
        }
    }
    best
}
