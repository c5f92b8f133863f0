//! Scoring module - points per confirmed word
//!
//! Points come from a per-length table; lengths missing from the table fall
//! back to `length * 20`.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::types::{DRAG_POINTS, FALLBACK_POINTS_PER_LETTER, SHIFT_POINTS};

/// Length-keyed point table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PointTable(BTreeMap<usize, u32>);

impl PointTable {
    pub fn new(entries: impl IntoIterator<Item = (usize, u32)>) -> Self {
        Self(entries.into_iter().collect())
    }

    /// Table used by drag mode (lengths 2-5).
    pub fn drag() -> Self {
        Self::new(DRAG_POINTS)
    }

    /// Table used by click/shift mode (lengths 3-5).
    pub fn shift() -> Self {
        Self::new(SHIFT_POINTS)
    }

    pub fn points_for(&self, len: usize) -> u32 {
        match self.0.get(&len) {
            Some(&points) => points,
            None => calculate_fallback_points(len),
        }
    }
}

/// Fallback for lengths outside a table.
pub fn calculate_fallback_points(len: usize) -> u32 {
    (len as u32).saturating_mul(FALLBACK_POINTS_PER_LETTER)
}
