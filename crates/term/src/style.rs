//! Color and style types for terminal text.

use crate::types::PieceKind;

/// 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Per-span styling. Background is left to the terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpanStyle {
    pub fg: Rgb,
    pub bold: bool,
    pub dim: bool,
}

impl SpanStyle {
    pub const fn fg(fg: Rgb) -> Self {
        Self {
            fg,
            bold: false,
            dim: false,
        }
    }

    pub const fn bold(self) -> Self {
        Self { bold: true, ..self }
    }

    pub const fn dim(self) -> Self {
        Self { dim: true, ..self }
    }

    pub const TEXT: SpanStyle = SpanStyle::fg(Rgb::new(220, 220, 220));
    pub const HEADING: SpanStyle = SpanStyle::fg(Rgb::new(255, 255, 255)).bold();
    pub const MUTED: SpanStyle = SpanStyle::fg(Rgb::new(140, 140, 140)).dim();
    pub const OK: SpanStyle = SpanStyle::fg(Rgb::new(100, 220, 120));
    pub const WARN: SpanStyle = SpanStyle::fg(Rgb::new(240, 200, 80)).bold();
    pub const ERROR: SpanStyle = SpanStyle::fg(Rgb::new(220, 80, 80)).bold();

    /// Color used for a piece of the given kind.
    pub const fn piece(kind: PieceKind) -> Self {
        let fg = match kind {
            PieceKind::I => Rgb::new(80, 220, 220),
            PieceKind::O => Rgb::new(240, 220, 80),
            PieceKind::T => Rgb::new(200, 120, 220),
            PieceKind::L => Rgb::new(255, 165, 0),
        };
        SpanStyle::fg(fg).bold()
    }
}

impl Default for SpanStyle {
    fn default() -> Self {
        SpanStyle::TEXT
    }
}
