//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are plain data with no game logic, making them usable in any
//! context (engine, terminal rendering, input mapping, tooling).
//!
//! # Grid Dimensions
//!
//! - **Grid**: 5x5 visible letters (indexed `row, col` in `0..5`)
//! - **Strip**: 10 letters per row; the grid shows a 5-letter window of each strip
//! - **Wrap margin**: 2 preview cells drawn past each grid edge for loop drags
//!
//! # Word Rules
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `MIN_WORD_LENGTH` | 3 | Shortest word the dictionary accepts |
//! | `MAX_WORD_LENGTH` | 5 | Longest word the dictionary accepts |
//! | `DRAG_MIN_SELECTION` | 2 | Length gate before a drag selection reaches the dictionary |
//! | `CLICK_MIN_SELECTION` | 3 | Length gate in click/shift mode |
//!
//! # Scoring
//!
//! | Length | Drag mode | Click mode |
//! |--------|-----------|------------|
//! | 2 | 10 | - |
//! | 3 | 20 | 20 |
//! | 4 | 40 | 40 |
//! | 5 | 80 | 80 |
//! | other | `len * 20` | `len * 20` |
//!
//! # Examples
//!
//! ```
//! use letterfall_types::{InteractionMode, Letter, ShiftDirection, GRID_SIZE};
//!
//! let letter = Letter::new('q').unwrap();
//! assert_eq!(letter.as_char(), 'Q');
//! assert_eq!(letter.to_lowercase(), 'q');
//!
//! assert_eq!(InteractionMode::from_str("CLICK"), Some(InteractionMode::Click));
//! assert_ne!(ShiftDirection::Forward, ShiftDirection::Backward);
//! assert_eq!(GRID_SIZE, 5);
//! ```

use serde::{Deserialize, Serialize};

/// Visible grid size (5x5)
pub const GRID_SIZE: usize = 5;

/// Letters held by each row strip
pub const STRIP_CAPACITY: usize = 10;

/// Shortest dictionary word
pub const MIN_WORD_LENGTH: usize = 3;

/// Longest dictionary word
pub const MAX_WORD_LENGTH: usize = 5;

/// Minimum drag selection length before the dictionary is consulted
pub const DRAG_MIN_SELECTION: usize = 2;

/// Minimum click/shift selection length before the dictionary is consulted
pub const CLICK_MIN_SELECTION: usize = 3;

/// Drag mode point table `(length, points)`
pub const DRAG_POINTS: [(usize, u32); 4] = [(2, 10), (3, 20), (4, 40), (5, 80)];

/// Click/shift mode point table `(length, points)`
pub const SHIFT_POINTS: [(usize, u32); 3] = [(3, 20), (4, 40), (5, 80)];

/// Points per letter for lengths missing from a point table
pub const FALLBACK_POINTS_PER_LETTER: u32 = 20;

/// Display delay between cascade steps (300ms)
pub const CASCADE_STEP_MS: u32 = 300;

/// Upper bound on automatic cascade steps after one confirm
pub const MAX_CASCADE_STEPS: u32 = 64;

/// Wrap-around preview cells drawn past each grid edge
pub const WRAP_MARGIN: u16 = 2;

/// Terminal loop tick (16ms ≈ 60 FPS)
pub const TICK_MS: u32 = 16;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn point_tables_cover_word_lengths() {
        assert_eq!(DRAG_POINTS[0], (2, 10));
        assert_eq!(DRAG_POINTS[3], (5, 80));
        assert_eq!(SHIFT_POINTS[0], (3, 20));
        assert_eq!(FALLBACK_POINTS_PER_LETTER, 20);
        assert_eq!(CASCADE_STEP_MS, 300);
    }

    #[test]
    fn letter_normalizes_case() {
        assert_eq!(Letter::new('a'), Letter::new('A'));
        assert_eq!(Letter::new('z').map(|l| l.index()), Some(25));
        assert_eq!(Letter::new('1'), None);
        assert_eq!(Letter::new('é'), None);
        assert_eq!(Letter::from_index(26), None);
    }

    #[test]
    fn layout_maps_points_to_cells() {
        let layout = GridLayout {
            origin_x: 10,
            origin_y: 5,
            cell_w: 2,
            cell_h: 1,
            size: 5,
            margin: 2,
        };
        assert_eq!(layout.cell_at(10, 5), Some((0, 0)));
        assert_eq!(layout.cell_at(19, 9), Some((4, 4)));
        // Wrap margin to the right and above.
        assert_eq!(layout.cell_at(20, 5), Some((0, 5)));
        assert_eq!(layout.cell_at(10, 4), Some((-1, 0)));
        assert_eq!(layout.cell_at(6, 5), Some((0, -2)));
        // Past the margin.
        assert_eq!(layout.cell_at(5, 5), None);
        assert_eq!(layout.cell_at(24, 5), None);
        assert_eq!(layout.cell_at(10, 12), None);
    }
}

/// A single letter `A`-`Z`, stored uppercase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "char", try_from = "char")]
pub struct Letter(u8);

impl Letter {
    /// Accepts ASCII letters in either case.
    pub fn new(c: char) -> Option<Self> {
        if c.is_ascii_alphabetic() {
            Some(Letter(c.to_ascii_uppercase() as u8))
        } else {
            None
        }
    }

    /// Letter from alphabet index (`0` = `A`).
    pub fn from_index(index: u8) -> Option<Self> {
        if index < 26 {
            Some(Letter(b'A' + index))
        } else {
            None
        }
    }

    /// Like [`Letter::from_index`], clamping past `Z`.
    pub const fn saturating_from_index(index: u8) -> Self {
        if index < 26 {
            Letter(b'A' + index)
        } else {
            Letter(b'Z')
        }
    }

    pub fn index(self) -> u8 {
        self.0 - b'A'
    }

    pub fn as_char(self) -> char {
        self.0 as char
    }

    pub fn to_lowercase(self) -> char {
        self.0.to_ascii_lowercase() as char
    }
}

impl std::fmt::Display for Letter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

impl From<Letter> for char {
    fn from(value: Letter) -> Self {
        value.as_char()
    }
}

impl TryFrom<char> for Letter {
    type Error = String;

    fn try_from(value: char) -> Result<Self, Self::Error> {
        Letter::new(value).ok_or_else(|| format!("not a letter: {value:?}"))
    }
}

/// Orientation of a word or selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    Horizontal,
    Vertical,
}

/// Shift direction for a strip viewport.
///
/// `Forward` advances the viewport by one, so visible letters move toward
/// index 0 (left for rows, up for columns).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShiftDirection {
    Forward,
    Backward,
}

/// Which line a shift command rotates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShiftTarget {
    Row(usize),
    Column(usize),
}

/// How the player forms words.
///
/// - **Drag**: press, drag along a row or column (wrapping), release to confirm.
/// - **Click**: click a highlighted word to choose it, click again to confirm.
///   Strips are rearranged with shift commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InteractionMode {
    #[default]
    Drag,
    Click,
}

impl InteractionMode {
    /// Parse mode from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use letterfall_types::InteractionMode;
    ///
    /// assert_eq!(InteractionMode::from_str("drag"), Some(InteractionMode::Drag));
    /// assert_eq!(InteractionMode::from_str("shift"), Some(InteractionMode::Click));
    /// assert_eq!(InteractionMode::from_str("hover"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "drag" => Some(InteractionMode::Drag),
            "click" | "shift" => Some(InteractionMode::Click),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            InteractionMode::Drag => "drag",
            InteractionMode::Click => "click",
        }
    }

    /// Length gate applied before the dictionary is consulted.
    pub fn min_selection_len(&self) -> usize {
        match self {
            InteractionMode::Drag => DRAG_MIN_SELECTION,
            InteractionMode::Click => CLICK_MIN_SELECTION,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            InteractionMode::Drag => InteractionMode::Click,
            InteractionMode::Click => InteractionMode::Drag,
        }
    }
}

/// A grid cell with the letter it held when read.
///
/// The letter is a snapshot; it is only meaningful for the grid version it
/// was read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CellRef {
    pub row: usize,
    pub col: usize,
    pub letter: Letter,
}

/// A dictionary word found in the grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchCandidate {
    /// Lowercase letters in traversal order
    pub word: String,
    pub axis: Axis,
    pub cells: Vec<CellRef>,
}

impl MatchCandidate {
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn contains(&self, row: usize, col: usize) -> bool {
        self.cells.iter().any(|c| c.row == row && c.col == col)
    }
}

/// One scored word removal.
///
/// `cascade_depth` is 0 for the player's own confirm and counts up for each
/// automatic cascade step that followed it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolutionEvent {
    pub word: String,
    pub points: u32,
    pub cascade_depth: u32,
    pub cells: Vec<CellRef>,
}

/// Input events produced by the presentation layer.
///
/// `PointerEnter` takes signed coordinates: a drag may continue into the
/// wrap-around margin past the grid edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    PointerDown { row: usize, col: usize },
    PointerEnter { row: isize, col: isize },
    PointerUp,
    PointerLeave,
    Click { row: usize, col: usize },
    Shift { target: ShiftTarget, direction: ShiftDirection },
}

/// Screen placement of the grid, used to map pointer positions to cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct GridLayout {
    /// Screen column of grid cell (0, 0)
    pub origin_x: u16,
    /// Screen row of grid cell (0, 0)
    pub origin_y: u16,
    pub cell_w: u16,
    pub cell_h: u16,
    pub size: u16,
    /// Preview cells accepted past each edge
    pub margin: u16,
}

impl GridLayout {
    /// Map a screen position to a `(row, col)` relative to the grid.
    ///
    /// Positions inside the wrap margin map to indices outside `0..size`;
    /// positions beyond it return `None`.
    pub fn cell_at(&self, x: u16, y: u16) -> Option<(isize, isize)> {
        if self.cell_w == 0 || self.cell_h == 0 {
            return None;
        }
        let col = (x as isize - self.origin_x as isize).div_euclid(self.cell_w as isize);
        let row = (y as isize - self.origin_y as isize).div_euclid(self.cell_h as isize);
        let lo = -(self.margin as isize);
        let hi = (self.size + self.margin) as isize;
        if row < lo || row >= hi || col < lo || col >= hi {
            return None;
        }
        Some((row, col))
    }

    /// Whether `(row, col)` lies on the grid proper (not the margin).
    pub fn is_on_grid(&self, row: isize, col: isize) -> bool {
        let size = self.size as isize;
        (0..size).contains(&row) && (0..size).contains(&col)
    }
}
