//! Game state module - owns one game session
//!
//! Ties the strip store, letter source, oracle gate, finder and selection
//! state machines together. Every mutation goes through an input method;
//! nothing here touches the terminal or the clock.
//!
//! Cascades run synchronously: after a confirmed match the finder is re-run
//! and the best candidate resolved until none remain, each step recorded as a
//! [`ResolutionEvent`]. Drain them with [`GameState::take_events`] and pace
//! them however the presentation layer likes.

use tracing::{debug, info, warn};

use crate::config::GameConfig;
use crate::finder::{self, WordFinder};
use crate::grid::Grid;
use crate::letters::{LetterSource, WeightedLetters};
use crate::oracle::{OracleGate, OracleStatus, WordOracle};
use crate::resolver::{self, ConfirmOutcome, RejectReason};
use crate::selection::{ClickSelection, ClickStep, DragSelection};
use crate::snapshot::GameSnapshot;
use crate::strips::StripStore;
use crate::types::{
    CellRef, InputEvent, InteractionMode, MatchCandidate, ResolutionEvent, ShiftDirection,
    ShiftTarget,
};
use crate::GridError;

/// What an input did to the game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputOutcome {
    /// Not applicable in the current mode or state.
    Ignored,
    /// Selection or grid changed; no confirm happened.
    Updated,
    /// A drag was abandoned.
    Aborted,
    Confirmed(ConfirmOutcome),
}

#[derive(Debug, Clone)]
pub struct GameState<L: LetterSource = WeightedLetters> {
    config: GameConfig,
    strips: StripStore,
    letters: L,
    oracle: OracleGate,
    finder: WordFinder,
    drag: DragSelection,
    click: ClickSelection,
    /// Recomputed on every grid change.
    candidates: Vec<MatchCandidate>,
    events: Vec<ResolutionEvent>,
    score: u32,
    combo: u32,
    words_found: u32,
    /// Monotonic episode id (increments on reset).
    episode_id: u32,
    grid_version: u64,
}

impl GameState<WeightedLetters> {
    /// Fresh game with letters drawn from `config.seed`. The oracle starts
    /// out loading.
    pub fn new(config: GameConfig) -> Result<Self, GridError> {
        let mut letters = WeightedLetters::new(config.seed);
        let strips = StripStore::new(config.grid_size, config.strip_capacity, &mut letters)?;
        Ok(Self::with_parts(config, strips, letters))
    }
}

impl<L: LetterSource> GameState<L> {
    /// Game over explicit strips and letter source. Grid geometry follows
    /// `strips`, overriding the config.
    pub fn with_parts(mut config: GameConfig, strips: StripStore, letters: L) -> Self {
        config.grid_size = strips.grid_size();
        config.strip_capacity = strips.capacity();
        let finder = WordFinder::new(config.min_word_length, config.max_word_length);
        Self {
            config,
            strips,
            letters,
            oracle: OracleGate::Loading,
            finder,
            drag: DragSelection::new(),
            click: ClickSelection::default(),
            candidates: Vec::new(),
            events: Vec::new(),
            score: 0,
            combo: 0,
            words_found: 0,
            episode_id: 0,
            grid_version: 0,
        }
    }

    /// Builder form of [`GameState::install_oracle`].
    pub fn with_oracle(mut self, oracle: impl WordOracle + 'static) -> Self {
        self.install_oracle(oracle);
        self
    }

    pub fn install_oracle(&mut self, oracle: impl WordOracle + 'static) {
        info!(
            min_len = oracle.min_len(),
            max_len = oracle.max_len(),
            "word oracle ready"
        );
        self.oracle = OracleGate::ready_with(oracle);
        self.refresh_candidates();
    }

    /// Mark the oracle as failed. Confirms stay unavailable.
    pub fn oracle_failed(&mut self, reason: impl Into<String>) {
        let reason = reason.into();
        warn!(%reason, "word oracle unavailable");
        self.oracle = OracleGate::Failed(reason);
        self.candidates.clear();
        self.click.clear();
    }

    pub fn oracle_status(&self) -> OracleStatus {
        self.oracle.status()
    }

    /// Start a new episode: fresh strips, score and combo cleared.
    pub fn reset(&mut self) {
        self.strips.regenerate(&mut self.letters);
        self.drag.abort();
        self.click.clear();
        self.events.clear();
        self.score = 0;
        self.combo = 0;
        self.words_found = 0;
        self.episode_id = self.episode_id.wrapping_add(1);
        self.grid_version += 1;
        self.refresh_candidates();
        debug!(episode = self.episode_id, "game reset");
    }

    pub fn set_mode(&mut self, mode: InteractionMode) {
        if self.config.mode == mode {
            return;
        }
        self.drag.abort();
        self.click.clear();
        self.combo = 0;
        self.config.mode = mode;
        debug!(mode = mode.as_str(), "interaction mode changed");
    }

    /// Single entry point for presentation-layer input.
    pub fn apply_input(&mut self, event: InputEvent) -> InputOutcome {
        match event {
            InputEvent::PointerDown { row, col } => updated(self.pointer_down(row, col)),
            InputEvent::PointerEnter { row, col } => updated(self.pointer_enter(row, col)),
            InputEvent::PointerUp => match self.pointer_up() {
                Some(outcome) => InputOutcome::Confirmed(outcome),
                None => InputOutcome::Ignored,
            },
            InputEvent::PointerLeave => {
                if self.pointer_leave() {
                    InputOutcome::Aborted
                } else {
                    InputOutcome::Ignored
                }
            }
            InputEvent::Click { row, col } => self.click(row, col),
            InputEvent::Shift { target, direction } => updated(self.shift(target, direction)),
        }
    }

    /// Start a drag at an on-grid cell (drag mode only).
    pub fn pointer_down(&mut self, row: usize, col: usize) -> bool {
        if self.config.mode != InteractionMode::Drag || !self.in_bounds(row, col) {
            return false;
        }
        self.drag.pointer_down(row, col)
    }

    /// Extend the drag. Coordinates may lie past the grid edge and wrap.
    pub fn pointer_enter(&mut self, row: isize, col: isize) -> bool {
        if self.config.mode != InteractionMode::Drag {
            return false;
        }
        self.drag.pointer_enter(row, col, self.strips.grid_size())
    }

    /// Release: confirm the drag selection, if any.
    pub fn pointer_up(&mut self) -> Option<ConfirmOutcome> {
        let cells = self.drag.take()?;
        Some(self.confirm_cells(&cells))
    }

    /// Pointer left the grid: abandon the drag and reset the combo.
    pub fn pointer_leave(&mut self) -> bool {
        if !self.drag.abort() {
            return false;
        }
        self.combo = 0;
        debug!("drag aborted");
        true
    }

    /// Click mode: choose the best word under the cell, or confirm the
    /// chosen word.
    pub fn click(&mut self, row: usize, col: usize) -> InputOutcome {
        if self.config.mode != InteractionMode::Click || !self.in_bounds(row, col) {
            return InputOutcome::Ignored;
        }
        match self.click.click(row, col, &self.candidates) {
            ClickStep::Chose => InputOutcome::Updated,
            ClickStep::Ignored => InputOutcome::Ignored,
            ClickStep::Confirm(candidate) => {
                let cells: Vec<(usize, usize)> =
                    candidate.cells.iter().map(|c| (c.row, c.col)).collect();
                InputOutcome::Confirmed(self.confirm_cells(&cells))
            }
        }
    }

    /// Rotate one row or column by one step.
    ///
    /// Refused while a drag is in progress. Clears a chosen click word.
    pub fn shift(&mut self, target: ShiftTarget, direction: ShiftDirection) -> bool {
        if self.drag.is_active() {
            return false;
        }
        let n = self.strips.grid_size();
        match target {
            ShiftTarget::Row(row) if row < n => self.strips.shift_row(row, direction),
            ShiftTarget::Column(col) if col < n => self.strips.shift_column(col, direction),
            _ => return false,
        }
        self.grid_version += 1;
        self.click.clear();
        self.refresh_candidates();
        true
    }

    /// Confirm whichever selection is active. `None` if there is none.
    pub fn confirm(&mut self) -> Option<ConfirmOutcome> {
        let cells: Vec<(usize, usize)> = match self.config.mode {
            InteractionMode::Drag => self.drag.take()?,
            InteractionMode::Click => {
                let cells: Vec<(usize, usize)> = self
                    .click
                    .chosen()?
                    .cells
                    .iter()
                    .map(|c| (c.row, c.col))
                    .collect();
                self.click.clear();
                cells
            }
        };
        Some(self.confirm_cells(&cells))
    }

    /// Confirm an explicit cell sequence read from the current grid.
    ///
    /// Rejections never touch strips or score. A match is scored, removed,
    /// refilled and followed by any cascade. A position outside the grid
    /// rejects the whole selection.
    pub fn confirm_cells(&mut self, positions: &[(usize, usize)]) -> ConfirmOutcome {
        let Some(oracle) = self.oracle.ready() else {
            debug!("confirm while oracle unavailable");
            return ConfirmOutcome::Unavailable;
        };
        let drag_mode = self.config.mode == InteractionMode::Drag;

        let grid = self.strips.snapshot_grid();
        let cells: Option<Vec<CellRef>> = positions
            .iter()
            .map(|&(row, col)| grid.cell(row, col))
            .collect();
        let Some(cells) = cells else {
            warn!(?positions, "confirm with off-grid position");
            if drag_mode {
                self.combo = 0;
            }
            return ConfirmOutcome::Rejected(RejectReason::OffGrid);
        };
        match resolver::validate(&cells, self.config.min_selection_len(), oracle) {
            Err(reason) => {
                if drag_mode {
                    self.combo = 0;
                }
                debug!(?reason, len = cells.len(), "selection rejected");
                ConfirmOutcome::Rejected(reason)
            }
            Ok(word) => {
                let points = self.resolve(word.clone(), cells, 0);
                if drag_mode {
                    self.combo += 1;
                }
                self.run_cascade();
                ConfirmOutcome::Matched { word, points }
            }
        }
    }

    /// Score, remove and refill one word.
    fn resolve(&mut self, word: String, cells: Vec<CellRef>, cascade_depth: u32) -> u32 {
        let points = self.config.points().points_for(cells.len());
        self.score = self.score.saturating_add(points);
        resolver::remove_cells(&mut self.strips, &cells, &mut self.letters);
        self.grid_version += 1;
        self.words_found += 1;
        debug!(word = %word, points, cascade_depth, "word resolved");
        self.events.push(ResolutionEvent {
            word,
            points,
            cascade_depth,
            cells,
        });
        points
    }

    fn run_cascade(&mut self) {
        let mut depth = 0;
        loop {
            self.refresh_candidates();
            let Some(next) = finder::best(&self.candidates).cloned() else {
                break;
            };
            if depth >= self.config.max_cascade_steps {
                warn!(
                    depth,
                    remaining = self.candidates.len(),
                    "cascade step limit reached"
                );
                break;
            }
            depth += 1;
            self.resolve(next.word, next.cells, depth);
        }
    }

    fn refresh_candidates(&mut self) {
        let grid = self.strips.snapshot_grid();
        self.candidates = match self.oracle.ready() {
            Some(oracle) => self.finder.find_all(&grid, oracle),
            None => Vec::new(),
        };
    }

    fn in_bounds(&self, row: usize, col: usize) -> bool {
        let n = self.strips.grid_size();
        row < n && col < n
    }

    /// Resolution events since the last call, in order.
    pub fn take_events(&mut self) -> Vec<ResolutionEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn mode(&self) -> InteractionMode {
        self.config.mode
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn combo(&self) -> u32 {
        self.combo
    }

    pub fn words_found(&self) -> u32 {
        self.words_found
    }

    pub fn episode_id(&self) -> u32 {
        self.episode_id
    }

    pub fn grid_version(&self) -> u64 {
        self.grid_version
    }

    pub fn strips(&self) -> &StripStore {
        &self.strips
    }

    pub fn grid(&self) -> Grid {
        self.strips.snapshot_grid()
    }

    /// Highlighted candidates for the current grid (empty until the oracle is ready).
    pub fn candidates(&self) -> &[MatchCandidate] {
        &self.candidates
    }

    pub fn best_candidate(&self) -> Option<&MatchCandidate> {
        finder::best(&self.candidates)
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_active()
    }

    /// Current selection with letters from the current grid.
    pub fn selection(&self) -> Vec<CellRef> {
        match self.config.mode {
            InteractionMode::Drag => {
                let grid = self.strips.snapshot_grid();
                self.drag
                    .cells()
                    .iter()
                    .filter_map(|&(row, col)| grid.cell(row, col))
                    .collect()
            }
            InteractionMode::Click => self
                .click
                .chosen()
                .map(|c| c.cells.clone())
                .unwrap_or_default(),
        }
    }

    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            grid: self.grid(),
            grid_version: self.grid_version,
            viewport_positions: self.strips.viewport_positions(),
            selection: self.selection(),
            candidates: self.candidates.clone(),
            score: self.score,
            combo: self.combo,
            words_found: self.words_found,
            mode: self.config.mode,
            oracle: self.oracle.status(),
            episode_id: self.episode_id,
            seed: self.config.seed,
        }
    }
}

fn updated(changed: bool) -> InputOutcome {
    if changed {
        InputOutcome::Updated
    } else {
        InputOutcome::Ignored
    }
}
