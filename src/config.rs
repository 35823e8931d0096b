//! Session configuration read from the environment.
//!
//! - `TETRIS_RESERVE_SEED`: seed for the piece source (default: derived from the clock)
//! - `TETRIS_RESERVE_NO_MENU`: set to "1" or "true" to hide the option list

use std::time::{SystemTime, UNIX_EPOCH};

use crate::core::{RandomPieceSource, Session};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    pub seed: u32,
    pub show_menu: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            seed: clock_seed(),
            show_menu: true,
        }
    }
}

impl SessionConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        use std::env;

        Self::from_vars(
            env::var("TETRIS_RESERVE_SEED").ok().as_deref(),
            env::var("TETRIS_RESERVE_NO_MENU").ok().as_deref(),
        )
    }

    fn from_vars(seed: Option<&str>, no_menu: Option<&str>) -> Self {
        let seed = seed
            .and_then(|s| s.trim().parse().ok())
            .unwrap_or_else(clock_seed);

        let show_menu = !no_menu
            .map(|v| v == "1" || v.to_lowercase() == "true")
            .unwrap_or(false);

        Self { seed, show_menu }
    }

    pub fn build_session(&self) -> Session<RandomPieceSource> {
        Session::new(RandomPieceSource::new(self.seed))
    }
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
        .unwrap_or(1)
}
