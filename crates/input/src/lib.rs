//! Terminal input module.
//!
//! Maps `crossterm` key events into [`crate::types::MenuAction`]s. The menu is
//! driven by single key presses, so there is no repeat or release handling.

pub mod map;

pub use tetris_reserve_types as types;

pub use map::{handle_key_event, should_quit};
