//! Selection state machines for both interaction modes
//!
//! # Drag mode
//!
//! ```text
//! Idle --down--> Undirected --enter same row/col--> Directed
//!   ^                |                                  |
//!   +------ up (confirm) / leave (abort) ---------------+
//! ```
//!
//! A directed drag always spans the inclusive run from the anchor to the
//! latest entered cell along the locked axis. Entered coordinates are virtual:
//! they may run past the grid edge and are reduced modulo the grid size, so
//! `(1,4) -> (1,6)` visits columns 4, 0, 1. A run is capped at twice the
//! grid size; enters beyond that are ignored.
//!
//! # Click mode
//!
//! `NoSelection --click on candidate--> WordChosen --any click--> confirm`.

use crate::finder::best_containing;
use crate::types::{Axis, MatchCandidate};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragState {
    #[default]
    Idle,
    Undirected {
        anchor: (usize, usize),
    },
    Directed {
        anchor: (usize, usize),
        axis: Axis,
        /// Virtual index of the last entered cell along `axis`
        head: isize,
    },
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DragSelection {
    state: DragState,
    cells: Vec<(usize, usize)>,
}

impl DragSelection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> DragState {
        self.state
    }

    pub fn is_active(&self) -> bool {
        !matches!(self.state, DragState::Idle)
    }

    /// Selected `(row, col)` pairs in traversal order.
    pub fn cells(&self) -> &[(usize, usize)] {
        &self.cells
    }

    /// Start a selection. Ignored unless idle.
    pub fn pointer_down(&mut self, row: usize, col: usize) -> bool {
        if self.is_active() {
            return false;
        }
        self.state = DragState::Undirected { anchor: (row, col) };
        self.cells = vec![(row, col)];
        true
    }

    /// Extend toward a (possibly off-grid) cell. Returns whether the
    /// selection changed.
    pub fn pointer_enter(&mut self, row: isize, col: isize, grid_size: usize) -> bool {
        let (anchor, axis) = match self.state {
            DragState::Idle => return false,
            DragState::Undirected { anchor } => {
                let (ar, ac) = (anchor.0 as isize, anchor.1 as isize);
                if (row, col) == (ar, ac) {
                    return false;
                }
                if row == ar {
                    (anchor, Axis::Horizontal)
                } else if col == ac {
                    (anchor, Axis::Vertical)
                } else {
                    // Diagonal.
                    return false;
                }
            }
            DragState::Directed { anchor, axis, .. } => {
                let consistent = match axis {
                    Axis::Horizontal => row == anchor.0 as isize,
                    Axis::Vertical => col == anchor.1 as isize,
                };
                if !consistent {
                    return false;
                }
                (anchor, axis)
            }
        };

        let head = match axis {
            Axis::Horizontal => col,
            Axis::Vertical => row,
        };
        if !within_reach(anchor, axis, head, grid_size) {
            return false;
        }
        if let DragState::Directed { head: prev, .. } = self.state {
            if prev == head {
                return false;
            }
        }
        self.state = DragState::Directed { anchor, axis, head };
        self.cells = run(anchor, axis, head, grid_size);
        true
    }

    /// End the drag, handing back the selected cells for confirmation.
    /// `None` when no drag was active.
    pub fn take(&mut self) -> Option<Vec<(usize, usize)>> {
        if !self.is_active() {
            return None;
        }
        self.state = DragState::Idle;
        Some(std::mem::take(&mut self.cells))
    }

    /// Drop the selection without confirming. Returns whether a drag was active.
    pub fn abort(&mut self) -> bool {
        let was_active = self.is_active();
        self.state = DragState::Idle;
        self.cells.clear();
        was_active
    }
}

/// Longest drag run, in grid lengths.
const MAX_RUN_GRIDS: usize = 2;

/// Whether `head` keeps the run under `MAX_RUN_GRIDS * grid_size` cells.
fn within_reach(anchor: (usize, usize), axis: Axis, head: isize, grid_size: usize) -> bool {
    let start = match axis {
        Axis::Horizontal => anchor.1 as isize,
        Axis::Vertical => anchor.0 as isize,
    };
    match head.checked_sub(start) {
        Some(distance) => distance.unsigned_abs() < MAX_RUN_GRIDS.saturating_mul(grid_size),
        None => false,
    }
}

/// Inclusive run from `anchor` to virtual index `head` along `axis`, wrapped.
fn run(anchor: (usize, usize), axis: Axis, head: isize, grid_size: usize) -> Vec<(usize, usize)> {
    let n = grid_size as isize;
    let start = match axis {
        Axis::Horizontal => anchor.1 as isize,
        Axis::Vertical => anchor.0 as isize,
    };
    let step = if head >= start { 1 } else { -1 };
    let len = (head - start).abs() + 1;
    (0..len)
        .map(|i| {
            let idx = (start + i * step).rem_euclid(n) as usize;
            match axis {
                Axis::Horizontal => (anchor.0, idx),
                Axis::Vertical => (idx, anchor.1),
            }
        })
        .collect()
}

/// Result of one click in click mode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClickStep {
    /// A candidate became the chosen word.
    Chose,
    /// A word was chosen; this click confirms it.
    Confirm(MatchCandidate),
    /// The click hit no candidate.
    Ignored,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ClickSelection {
    #[default]
    NoSelection,
    WordChosen(MatchCandidate),
}

impl ClickSelection {
    pub fn chosen(&self) -> Option<&MatchCandidate> {
        match self {
            ClickSelection::NoSelection => None,
            ClickSelection::WordChosen(candidate) => Some(candidate),
        }
    }

    pub fn click(&mut self, row: usize, col: usize, candidates: &[MatchCandidate]) -> ClickStep {
        match std::mem::take(self) {
            ClickSelection::WordChosen(candidate) => ClickStep::Confirm(candidate),
            ClickSelection::NoSelection => match best_containing(candidates, row, col) {
                Some(candidate) => {
                    *self = ClickSelection::WordChosen(candidate.clone());
                    ClickStep::Chose
                }
                None => ClickStep::Ignored,
            },
        }
    }

    pub fn clear(&mut self) -> bool {
        matches!(std::mem::take(self), ClickSelection::WordChosen(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{CellRef, Letter};

    #[test]
    fn test_down_then_same_cell_stays_undirected() {
        let mut drag = DragSelection::new();
        assert!(drag.pointer_down(2, 2));
        assert!(!drag.pointer_enter(2, 2, 5));
        assert_eq!(drag.state(), DragState::Undirected { anchor: (2, 2) });
        assert_eq!(drag.cells(), &[(2, 2)]);
    }

    #[test]
    fn test_diagonal_ignored_until_axis_found() {
        let mut drag = DragSelection::new();
        drag.pointer_down(0, 0);
        assert!(!drag.pointer_enter(1, 1, 5));
        assert!(drag.pointer_enter(2, 0, 5));
        assert_eq!(drag.cells(), &[(0, 0), (1, 0), (2, 0)]);
        // Off-axis enters are now ignored.
        assert!(!drag.pointer_enter(2, 1, 5));
        assert_eq!(drag.cells().len(), 3);
    }

    #[test]
    fn test_wraps_past_right_edge() {
        let mut drag = DragSelection::new();
        drag.pointer_down(1, 4);
        drag.pointer_enter(1, 5, 5);
        drag.pointer_enter(1, 6, 5);
        assert_eq!(drag.cells(), &[(1, 4), (1, 0), (1, 1)]);
    }

    #[test]
    fn test_backward_and_above_top_edge() {
        let mut drag = DragSelection::new();
        drag.pointer_down(1, 3);
        drag.pointer_enter(0, 3, 5);
        drag.pointer_enter(-1, 3, 5);
        assert_eq!(drag.cells(), &[(1, 3), (0, 3), (4, 3)]);
    }

    #[test]
    fn test_selection_shrinks_when_dragging_back() {
        let mut drag = DragSelection::new();
        drag.pointer_down(0, 0);
        drag.pointer_enter(0, 3, 5);
        drag.pointer_enter(0, 1, 5);
        assert_eq!(drag.cells(), &[(0, 0), (0, 1)]);
    }

    #[test]
    fn test_loop_run_keeps_repeated_cells() {
        let mut drag = DragSelection::new();
        drag.pointer_down(0, 1);
        assert!(drag.pointer_enter(0, 4, 3));
        assert_eq!(drag.cells(), &[(0, 1), (0, 2), (0, 0), (0, 1)]);
    }

    #[test]
    fn test_run_is_capped_at_two_grid_lengths() {
        let mut drag = DragSelection::new();
        drag.pointer_down(0, 0);
        assert!(drag.pointer_enter(0, 9, 5));
        assert_eq!(drag.cells().len(), 10);
        // One more cell would exceed the cap; the run stays as it was.
        assert!(!drag.pointer_enter(0, 10, 5));
        assert!(!drag.pointer_enter(0, -10, 5));
        assert_eq!(drag.cells().len(), 10);
        assert!(!drag.pointer_enter(0, 2_000_000, 5));
        assert_eq!(drag.cells().len(), 10);
    }

    #[test]
    fn test_extreme_coordinates_are_ignored() {
        let mut drag = DragSelection::new();
        drag.pointer_down(0, 0);
        assert!(!drag.pointer_enter(0, isize::MAX, 5));
        assert!(!drag.pointer_enter(0, isize::MIN, 5));
        assert!(!drag.pointer_enter(isize::MIN, 0, 5));
        assert_eq!(drag.state(), DragState::Undirected { anchor: (0, 0) });
        assert_eq!(drag.cells(), &[(0, 0)]);
    }

    #[test]
    fn test_take_and_abort_return_to_idle() {
        let mut drag = DragSelection::new();
        assert_eq!(drag.take(), None);
        drag.pointer_down(0, 0);
        drag.pointer_enter(0, 1, 5);
        assert_eq!(drag.take(), Some(vec![(0, 0), (0, 1)]));
        assert!(!drag.is_active());

        drag.pointer_down(3, 3);
        assert!(drag.abort());
        assert!(drag.cells().is_empty());
        assert!(!drag.abort());
    }

    fn candidate(word: &str, cells: &[(usize, usize)]) -> MatchCandidate {
        MatchCandidate {
            word: word.to_string(),
            axis: Axis::Horizontal,
            cells: cells
                .iter()
                .zip(word.chars())
                .map(|(&(row, col), ch)| CellRef {
                    row,
                    col,
                    letter: Letter::new(ch).unwrap(),
                })
                .collect(),
        }
    }

    #[test]
    fn test_click_chooses_longest_then_confirms() {
        let candidates = vec![
            candidate("tar", &[(0, 1), (0, 2), (0, 3)]),
            candidate("stare", &[(0, 0), (0, 1), (0, 2), (0, 3), (0, 4)]),
        ];
        let mut click = ClickSelection::default();
        assert_eq!(click.click(4, 4, &candidates), ClickStep::Ignored);
        assert_eq!(click.click(0, 2, &candidates), ClickStep::Chose);
        assert_eq!(click.chosen().map(|c| c.word.as_str()), Some("stare"));
        // Any cell confirms.
        match click.click(4, 4, &candidates) {
            ClickStep::Confirm(c) => assert_eq!(c.word, "stare"),
            other => panic!("expected confirm, got {other:?}"),
        }
        assert_eq!(click, ClickSelection::NoSelection);
    }

    #[test]
    fn test_click_clear() {
        let candidates = vec![candidate("cat", &[(0, 0), (0, 1), (0, 2)])];
        let mut click = ClickSelection::default();
        assert!(!click.clear());
        click.click(0, 0, &candidates);
        assert!(click.clear());
        assert!(click.chosen().is_none());
    }
}
