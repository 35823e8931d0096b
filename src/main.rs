//! Terminal runner for the piece queue and reserve stack.
//!
//! Draws the current state and the option list, then waits for a single key.
//! Digits `1`-`5` pick an option; `0`, `q`, `Esc` or Ctrl-C leave.
//!
//! Logging goes to stderr through `env_logger` and is silent unless
//! `RUST_LOG` is set (redirect stderr when enabling it, e.g. `2>reserve.log`).

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyEventKind};
use log::{info, warn};

use tetris_reserve::core::{PieceSource, Session};
use tetris_reserve::input::{handle_key_event, should_quit};
use tetris_reserve::term::{StateView, StatusMessage, TerminalRenderer};
use tetris_reserve::types::MenuAction;
use tetris_reserve::SessionConfig;

fn main() -> Result<()> {
    env_logger::init();

    let config = SessionConfig::from_env();
    info!("starting session with seed {}", config.seed);

    let mut term = TerminalRenderer::new();
    term.enter().context("failed to prepare terminal")?;

    let result = run(&mut term, &config);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer, config: &SessionConfig) -> Result<()> {
    let mut session = config.build_session();
    let view = StateView::new(config.show_menu);
    let mut status: Option<StatusMessage> = None;

    loop {
        let lines = view.render(&session.snapshot(), status.as_ref());
        term.draw(&lines)?;

        let key = match event::read().context("failed to read terminal event")? {
            Event::Key(key) if key.kind == KeyEventKind::Press => key,
            _ => continue,
        };

        if should_quit(key) {
            info!("session ended at piece id {}", session.next_id());
            return Ok(());
        }

        status = Some(match handle_key_event(key) {
            Some(action) => apply(&mut session, action),
            None => StatusMessage::InvalidOption,
        });
    }
}

fn apply<S: PieceSource>(session: &mut Session<S>, action: MenuAction) -> StatusMessage {
    match session.apply(action) {
        Ok(outcome) => StatusMessage::Done(outcome.message()),
        Err(err) => {
            warn!("{} refused: {}", action.as_str(), err);
            StatusMessage::Refused(err.to_string())
        }
    }
}
