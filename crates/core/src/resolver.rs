//! Match resolution helpers
//!
//! Validation (length gate, then dictionary) and letter removal. The
//! cascade loop itself lives in [`GameState`](crate::GameState) since it
//! needs the finder and the score.

use crate::grid::word_of;
use crate::letters::LetterSource;
use crate::oracle::WordOracle;
use crate::strips::StripStore;
use crate::types::CellRef;

/// Why a confirm found no match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectReason {
    /// Shorter than the mode's minimum selection; the oracle was not asked.
    TooShort,
    NotAWord,
    /// A position lies outside the grid.
    OffGrid,
}

/// Result of confirming a selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfirmOutcome {
    Matched { word: String, points: u32 },
    Rejected(RejectReason),
    /// The oracle is not ready; nothing changed.
    Unavailable,
}

impl ConfirmOutcome {
    pub fn is_match(&self) -> bool {
        matches!(self, ConfirmOutcome::Matched { .. })
    }
}

/// Length gate, then dictionary lookup. Returns the lowercase word.
pub fn validate(
    cells: &[CellRef],
    min_len: usize,
    oracle: &dyn WordOracle,
) -> Result<String, RejectReason> {
    if cells.len() < min_len {
        return Err(RejectReason::TooShort);
    }
    let word = word_of(cells);
    if oracle.is_valid_word(&word) {
        Ok(word)
    } else {
        Err(RejectReason::NotAWord)
    }
}

/// `(strip, absolute position)` pairs to remove, grouped by strip with
/// positions descending. Repeated cells (loop drags) appear once.
pub fn removal_order(store: &StripStore, cells: &[CellRef]) -> Vec<(usize, usize)> {
    let mut order: Vec<(usize, usize)> = cells
        .iter()
        .map(|c| (c.row, store.absolute_position(c.row, c.col)))
        .collect();
    order.sort_unstable_by(|a, b| a.0.cmp(&b.0).then(b.1.cmp(&a.1)));
    order.dedup();
    order
}

/// Remove every matched cell from its strip and refill from `source`.
pub fn remove_cells(store: &mut StripStore, cells: &[CellRef], source: &mut dyn LetterSource) {
    for (strip, at) in removal_order(store, cells) {
        store.remove_and_refill(strip, at, source);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::letters::SequenceLetters;
    use crate::oracle::Dictionary;
    use crate::types::ShiftDirection;

    fn store() -> StripStore {
        StripStore::from_rows(3, &["CATXYZ", "DOGXYZ", "EMUXYZ"]).unwrap()
    }

    fn cells(store: &StripStore, at: &[(usize, usize)]) -> Vec<CellRef> {
        let grid = store.snapshot_grid();
        at.iter().filter_map(|&(r, c)| grid.cell(r, c)).collect()
    }

    #[test]
    fn test_validate_gates_length_before_dictionary() {
        let s = store();
        let dict = Dictionary::from_words(["cat"], 3, 5);
        assert_eq!(validate(&cells(&s, &[(0, 0)]), 3, &dict), Err(RejectReason::TooShort));
        assert_eq!(
            validate(&cells(&s, &[(0, 0), (0, 1), (0, 2)]), 3, &dict),
            Ok("cat".to_string())
        );
        assert_eq!(
            validate(&cells(&s, &[(1, 0), (1, 1), (1, 2)]), 3, &dict),
            Err(RejectReason::NotAWord)
        );
    }

    #[test]
    fn test_removal_order_descends_within_strip() {
        let s = store();
        let c = cells(&s, &[(0, 0), (0, 1), (0, 2), (1, 1)]);
        assert_eq!(removal_order(&s, &c), vec![(0, 2), (0, 1), (0, 0), (1, 1)]);
    }

    #[test]
    fn test_removal_uses_absolute_positions() {
        let mut s = store();
        s.shift_row(0, ShiftDirection::Forward);
        s.shift_row(0, ShiftDirection::Forward);
        // Row 0 now shows "TXY"; (0,2) is absolute index 4.
        let c = cells(&s, &[(0, 2), (0, 0)]);
        assert_eq!(removal_order(&s, &c), vec![(0, 4), (0, 2)]);
    }

    #[test]
    fn test_remove_cells_refills_and_dedups() {
        let mut s = store();
        let mut src = SequenceLetters::new("QR");
        let mut c = cells(&s, &[(0, 0), (0, 1), (0, 2)]);
        c.push(c[0]);
        remove_cells(&mut s, &c, &mut src);
        assert_eq!(src.drawn(), 3);
        assert_eq!(s.snapshot_grid().row_string(0), "XYZ");
        let letters: String = s.strip(0).letters().iter().map(|l| l.as_char()).collect();
        assert_eq!(letters, "XYZQRQ");
    }
}
