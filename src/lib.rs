//! Tetris reserve (workspace facade crate).
//!
//! Re-exports the workspace crates as `tetris_reserve::{core,input,term,types}`
//! and hosts the environment-driven session configuration used by the binary.

pub mod config;

pub use tetris_reserve_core as core;
pub use tetris_reserve_input as input;
pub use tetris_reserve_term as term;
pub use tetris_reserve_types as types;

pub use config::SessionConfig;
