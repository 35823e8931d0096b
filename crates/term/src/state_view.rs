//! StateView: maps a `core::SessionSnapshot` into styled text lines.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::SessionSnapshot;
use crate::style::SpanStyle;
use crate::types::{MenuAction, Piece};

/// A run of text sharing one style.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub text: String,
    pub style: SpanStyle,
}

impl Span {
    pub fn new(text: impl Into<String>, style: SpanStyle) -> Self {
        Self {
            text: text.into(),
            style,
        }
    }
}

/// One terminal row.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Line {
    pub spans: Vec<Span>,
}

impl Line {
    pub fn push(&mut self, text: impl Into<String>, style: SpanStyle) {
        self.spans.push(Span::new(text, style));
    }

    pub fn styled(text: impl Into<String>, style: SpanStyle) -> Self {
        let mut line = Line::default();
        line.push(text, style);
        line
    }

    /// Text without styling.
    pub fn plain_text(&self) -> String {
        self.spans.iter().map(|s| s.text.as_str()).collect()
    }
}

/// Feedback from the last menu choice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatusMessage {
    /// The action went through.
    Done(String),
    /// The action was refused; nothing changed.
    Refused(String),
    /// The key did not map to any option.
    InvalidOption,
}

impl StatusMessage {
    fn to_line(&self) -> Line {
        match self {
            StatusMessage::Done(text) => Line::styled(text.clone(), SpanStyle::OK),
            StatusMessage::Refused(text) => Line::styled(format!("! {}", text), SpanStyle::WARN),
            StatusMessage::InvalidOption => {
                Line::styled("Invalid option! Try again.", SpanStyle::ERROR)
            }
        }
    }
}

const RULE_WIDTH: usize = 32;

/// Renders session state and the menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StateView {
    show_menu: bool,
}

impl Default for StateView {
    fn default() -> Self {
        Self { show_menu: true }
    }
}

impl StateView {
    pub fn new(show_menu: bool) -> Self {
        Self { show_menu }
    }

    pub fn render(&self, snap: &SessionSnapshot, status: Option<&StatusMessage>) -> Vec<Line> {
        let mut lines = Vec::with_capacity(16);

        lines.push(Line::styled(
            format!("{:=^width$}", " CURRENT STATE ", width = RULE_WIDTH),
            SpanStyle::HEADING,
        ));
        lines.push(pieces_line("Piece queue:", snap.queue.iter()));
        lines.push(pieces_line("Reserve stack (top -> base):", snap.reserve.iter()));
        lines.push(Line::styled("=".repeat(RULE_WIDTH), SpanStyle::HEADING));

        if self.show_menu {
            lines.push(Line::default());
            lines.push(Line::styled("Options:", SpanStyle::TEXT));
            for action in MenuAction::ALL {
                let mut line = Line::default();
                line.push(format!("{} - ", action.digit()), SpanStyle::HEADING);
                line.push(action.label(), SpanStyle::TEXT);
                lines.push(line);
            }
            lines.push(Line::styled(
                format!("Next piece id: {}", snap.next_id),
                SpanStyle::MUTED,
            ));
        }

        if let Some(status) = status {
            lines.push(Line::default());
            lines.push(status.to_line());
        }

        lines
    }
}

fn pieces_line<'a>(label: &str, pieces: impl Iterator<Item = &'a Piece>) -> Line {
    let mut line = Line::styled(format!("{} ", label), SpanStyle::TEXT);
    let mut any = false;
    for piece in pieces {
        if any {
            line.push(" ", SpanStyle::TEXT);
        }
        line.push(piece.to_string(), SpanStyle::piece(piece.kind));
        any = true;
    }
    if !any {
        line.push("(empty)", SpanStyle::MUTED);
    }
    line
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PieceKind;

    fn snapshot() -> SessionSnapshot {
        let mut snap = SessionSnapshot::default();
        snap.queue.push(Piece::new(PieceKind::I, 0));
        snap.queue.push(Piece::new(PieceKind::T, 1));
        snap.next_id = 2;
        snap
    }

    #[test]
    fn renders_queue_in_order() {
        let lines = StateView::default().render(&snapshot(), None);
        assert_eq!(lines[1].plain_text(), "Piece queue: [I 0] [T 1]");
    }

    #[test]
    fn empty_reserve_is_labelled() {
        let lines = StateView::default().render(&snapshot(), None);
        assert_eq!(
            lines[2].plain_text(),
            "Reserve stack (top -> base): (empty)"
        );
    }

    #[test]
    fn piece_spans_use_kind_color() {
        let lines = StateView::default().render(&snapshot(), None);
        let span = lines[1]
            .spans
            .iter()
            .find(|s| s.text == "[T 1]")
            .unwrap();
        assert_eq!(span.style, SpanStyle::piece(PieceKind::T));
    }

    #[test]
    fn menu_lists_every_action() {
        let lines = StateView::default().render(&snapshot(), None);
        let text: Vec<String> = lines.iter().map(Line::plain_text).collect();
        for action in MenuAction::ALL {
            let expected = format!("{} - {}", action.digit(), action.label());
            assert!(text.contains(&expected), "missing menu line {:?}", expected);
        }
    }

    #[test]
    fn status_goes_last() {
        let status = StatusMessage::Refused("reserve stack is full".to_string());
        let lines = StateView::new(false).render(&snapshot(), Some(&status));
        assert_eq!(lines.len(), 6);
        assert_eq!(lines[5].plain_text(), "! reserve stack is full");
    }
}
