//! Terminal presentation module.
//!
//! Rendering is split in two:
//! - [`state_view`] turns a session snapshot into styled text lines (pure, no I/O)
//! - [`renderer`] flushes those lines to a real terminal with crossterm
//!
//! Keeping the view pure lets the layout be unit-tested without a terminal.

pub mod renderer;
pub mod state_view;
pub mod style;

pub use tetris_reserve_core as core;
pub use tetris_reserve_types as types;

pub use renderer::{encode_lines_into, TerminalRenderer};
pub use state_view::{Line, Span, StateView, StatusMessage};
pub use style::{Rgb, SpanStyle};
