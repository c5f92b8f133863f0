//! Game configuration: JSON file, environment overrides, validation.
//!
//! Every field has a default, so an empty object (or no file at all) yields
//! the standard 5x5 game.
//!
//! # Environment Variables
//!
//! - `LETTERFALL_SEED`: RNG seed (u64)
//! - `LETTERFALL_MODE`: `drag` or `click`
//! - `LETTERFALL_DICT`: path to a word list (`.txt` one word per line, or `.json` array)

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::ConfigError;
use crate::scoring::PointTable;
use crate::types::{
    InteractionMode, CASCADE_STEP_MS, GRID_SIZE, MAX_CASCADE_STEPS, MAX_WORD_LENGTH,
    MIN_WORD_LENGTH, STRIP_CAPACITY,
};

pub const ENV_SEED: &str = "LETTERFALL_SEED";
pub const ENV_MODE: &str = "LETTERFALL_MODE";
pub const ENV_DICT: &str = "LETTERFALL_DICT";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GameConfig {
    pub grid_size: usize,
    pub strip_capacity: usize,
    pub min_word_length: usize,
    pub max_word_length: usize,
    pub mode: InteractionMode,
    pub seed: u64,
    pub drag_points: PointTable,
    pub shift_points: PointTable,
    pub max_cascade_steps: u32,
    pub cascade_step_ms: u32,
    pub dictionary_path: Option<PathBuf>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid_size: GRID_SIZE,
            strip_capacity: STRIP_CAPACITY,
            min_word_length: MIN_WORD_LENGTH,
            max_word_length: MAX_WORD_LENGTH,
            mode: InteractionMode::Drag,
            seed: 1,
            drag_points: PointTable::drag(),
            shift_points: PointTable::shift(),
            max_cascade_steps: MAX_CASCADE_STEPS,
            cascade_step_ms: CASCADE_STEP_MS,
            dictionary_path: None,
        }
    }
}

impl GameConfig {
    pub fn from_json_str(s: &str) -> Result<Self, ConfigError> {
        let config: GameConfig = serde_json::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&text)
    }

    /// Apply `LETTERFALL_*` overrides from the process environment.
    pub fn apply_env(&mut self) -> Result<(), ConfigError> {
        self.apply_overrides(|name| std::env::var(name).ok())
    }

    /// Apply overrides from any key lookup (the environment in production).
    pub fn apply_overrides(
        &mut self,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<(), ConfigError> {
        if let Some(seed) = lookup(ENV_SEED) {
            self.seed = seed
                .trim()
                .parse()
                .map_err(|_| ConfigError::Invalid(format!("{ENV_SEED}={seed:?} is not a u64")))?;
        }
        if let Some(mode) = lookup(ENV_MODE) {
            self.mode = InteractionMode::from_str(&mode)
                .ok_or_else(|| ConfigError::Invalid(format!("{ENV_MODE}={mode:?}")))?;
        }
        if let Some(dict) = lookup(ENV_DICT) {
            if !dict.trim().is_empty() {
                self.dictionary_path = Some(PathBuf::from(dict.trim()));
            }
        }
        self.validate()
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.grid_size == 0 {
            return Err(ConfigError::Invalid("grid_size must be at least 1".into()));
        }
        if self.strip_capacity < self.grid_size {
            return Err(ConfigError::Invalid(format!(
                "strip_capacity {} is smaller than grid_size {}",
                self.strip_capacity, self.grid_size
            )));
        }
        if self.min_word_length == 0 || self.min_word_length > self.max_word_length {
            return Err(ConfigError::Invalid(format!(
                "word length bounds {}-{} are not usable",
                self.min_word_length, self.max_word_length
            )));
        }
        Ok(())
    }

    /// Point table for the current mode.
    pub fn points(&self) -> &PointTable {
        match self.mode {
            InteractionMode::Drag => &self.drag_points,
            InteractionMode::Click => &self.shift_points,
        }
    }

    /// Length gate for the current mode.
    pub fn min_selection_len(&self) -> usize {
        self.mode.min_selection_len()
    }
}
