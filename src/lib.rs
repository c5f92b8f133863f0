//! Letterfall (workspace facade crate).
//!
//! Re-exports the member crates under one roof so binaries, integration
//! tests and benches can write `letterfall::{core, input, term, types}`.

pub use letterfall_core as core;
pub use letterfall_input as input;
pub use letterfall_term as term;
pub use letterfall_types as types;
