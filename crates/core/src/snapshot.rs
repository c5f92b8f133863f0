//! Snapshot module - read-only view of a game for the presentation layer
//!
//! Holds values only; nothing in it borrows the engine.

use crate::grid::Grid;
use crate::oracle::OracleStatus;
use crate::types::{CellRef, InteractionMode, MatchCandidate};

/// Everything the presentation layer reads after an input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSnapshot {
    pub grid: Grid,
    /// Bumped on every strip mutation; `CellRef`s from an older version are stale.
    pub grid_version: u64,
    pub viewport_positions: Vec<usize>,
    pub selection: Vec<CellRef>,
    pub candidates: Vec<MatchCandidate>,
    pub score: u32,
    pub combo: u32,
    pub words_found: u32,
    pub mode: InteractionMode,
    pub oracle: OracleStatus,
    pub episode_id: u32,
    pub seed: u64,
}

impl GameSnapshot {
    pub fn is_selected(&self, row: usize, col: usize) -> bool {
        self.selection.iter().any(|c| c.row == row && c.col == col)
    }

    pub fn is_highlighted(&self, row: usize, col: usize) -> bool {
        self.candidates.iter().any(|c| c.contains(row, col))
    }

    /// Lowercase word spelled by the current selection.
    pub fn selection_word(&self) -> String {
        crate::grid::word_of(&self.selection)
    }

    pub fn oracle_ready(&self) -> bool {
        self.oracle == OracleStatus::Ready
    }
}
