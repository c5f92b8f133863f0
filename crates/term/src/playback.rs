//! Paces resolution events for display.
//!
//! The engine resolves a whole cascade inside one confirm. Playback hands the
//! events back one at a time, `step_ms` apart, so the panel can announce each
//! word before the next replaces it.

use std::collections::VecDeque;

use crate::types::ResolutionEvent;

/// Words kept in the history list.
pub const HISTORY_LEN: usize = 6;

#[derive(Debug, Clone)]
pub struct CascadePlayback {
    step_ms: u64,
    pending: VecDeque<ResolutionEvent>,
    current: Option<ResolutionEvent>,
    shown_at_ms: u64,
    history: VecDeque<ResolutionEvent>,
}

impl CascadePlayback {
    pub fn new(step_ms: u64) -> Self {
        Self {
            step_ms,
            pending: VecDeque::new(),
            current: None,
            shown_at_ms: 0,
            history: VecDeque::with_capacity(HISTORY_LEN),
        }
    }

    pub fn push(&mut self, events: impl IntoIterator<Item = ResolutionEvent>) {
        self.pending.extend(events);
    }

    /// Advance to `now_ms`. Returns true when the displayed event changed.
    pub fn update(&mut self, now_ms: u64) -> bool {
        let due = match self.current {
            None => true,
            Some(_) => now_ms.saturating_sub(self.shown_at_ms) >= self.step_ms,
        };
        if !due {
            return false;
        }
        match self.pending.pop_front() {
            Some(next) => {
                self.retire_current();
                self.current = Some(next);
                self.shown_at_ms = now_ms;
                true
            }
            None if self.current.is_some() => {
                self.retire_current();
                true
            }
            None => false,
        }
    }

    fn retire_current(&mut self) {
        if let Some(done) = self.current.take() {
            if self.history.len() == HISTORY_LEN {
                self.history.pop_back();
            }
            self.history.push_front(done);
        }
    }

    /// Event being announced right now.
    pub fn current(&self) -> Option<&ResolutionEvent> {
        self.current.as_ref()
    }

    /// Finished events, newest first.
    pub fn history(&self) -> impl Iterator<Item = &ResolutionEvent> {
        self.history.iter()
    }

    pub fn is_busy(&self) -> bool {
        self.current.is_some() || !self.pending.is_empty()
    }

    pub fn clear(&mut self) {
        self.pending.clear();
        self.current = None;
        self.history.clear();
    }
}
