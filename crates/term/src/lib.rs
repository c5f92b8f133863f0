//! Terminal "game renderer" module.
//!
//! A small, game-oriented rendering layer for terminal play. It avoids
//! widget/layout libraries and renders into a framebuffer that is flushed
//! to the terminal by diffing against the previous frame.
//!
//! - [`GameView`] draws a snapshot and reports the [`types::GridLayout`]
//!   used, so mouse input maps back to the same cells
//! - [`CascadePlayback`] paces resolution events for the side panel
//! - [`TerminalRenderer`] owns raw mode, the alternate screen and mouse capture

pub mod fb;
pub mod game_view;
pub mod playback;
pub mod renderer;

pub use letterfall_core as core;
pub use letterfall_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{GameView, HudView, Viewport};
pub use playback::CascadePlayback;
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
