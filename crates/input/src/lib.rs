//! Terminal input module (engine-facing).
//!
//! This module is intentionally independent of any UI framework. It maps
//! `crossterm` key events into [`KeyCommand`]s and tracks mouse drags and a
//! keyboard focus cursor, producing engine [`types::InputEvent`]s.

pub mod handler;
pub mod map;

pub use letterfall_types as types;

pub use handler::InputHandler;
pub use map::{handle_key_event, should_quit, KeyCommand};
