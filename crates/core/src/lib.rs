//! Core game logic module - pure, deterministic, and testable
//!
//! This crate contains the letter grid engine: strips, word search,
//! selection, scoring and cascades. It has no dependency on the terminal,
//! so it runs the same in the TUI, in tests and in benchmarks.
//!
//! - **Deterministic**: the same seed produces the same letters
//! - **Synchronous**: cascades resolve inside the confirm call and are
//!   reported as a sequence of events
//! - **Gated**: nothing consults the dictionary until it is ready
//!
//! # Module Structure
//!
//! - [`letters`]: weighted letter source (and a scripted one for tests)
//! - [`oracle`]: word oracle trait, dictionary, readiness gate, background loader
//! - [`strips`]: circular row strips with viewport positions
//! - [`grid`]: the projected visible grid
//! - [`finder`]: dictionary word search over the grid
//! - [`selection`]: drag and click state machines
//! - [`resolver`]: validation and letter removal
//! - [`scoring`]: point tables
//! - [`game_state`]: one game session tying it all together
//!
//! # Example
//!
//! ```
//! use letterfall_core::{Dictionary, GameConfig, GameState, SequenceLetters, StripStore};
//!
//! let rows = ["CATQQQ", "QQQQQQ", "QQQQQQ"];
//! let strips = StripStore::from_rows(3, &rows).unwrap();
//! let mut game = GameState::with_parts(GameConfig::default(), strips, SequenceLetters::new("Q"))
//!     .with_oracle(Dictionary::from_words(["cat"], 3, 5));
//!
//! game.pointer_down(0, 0);
//! game.pointer_enter(0, 2);
//! assert!(game.pointer_up().unwrap().is_match());
//! assert_eq!(game.score(), 20);
//! assert_eq!(game.take_events()[0].word, "cat");
//! ```

pub mod config;
pub mod error;
pub mod finder;
pub mod game_state;
pub mod grid;
pub mod letters;
pub mod oracle;
pub mod resolver;
pub mod scoring;
pub mod selection;
pub mod snapshot;
pub mod strips;

pub use letterfall_types as types;

// Re-export commonly used types for convenience
pub use config::GameConfig;
pub use error::{ConfigError, DictionaryError, GridError};
pub use finder::{best, best_containing, WordFinder};
pub use game_state::{GameState, InputOutcome};
pub use grid::{word_of, Grid};
pub use letters::{LetterSource, SequenceLetters, WeightedLetters};
pub use oracle::{
    index_by_length_and_initial, Dictionary, DictionaryLoader, OracleGate, OracleStatus,
    WordOracle,
};
pub use resolver::{ConfirmOutcome, RejectReason};
pub use scoring::PointTable;
pub use selection::{ClickSelection, ClickStep, DragSelection, DragState};
pub use snapshot::GameSnapshot;
pub use strips::{Strip, StripStore};
