//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (container logic, terminal rendering, input mapping).
//!
//! # Capacities
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `QUEUE_CAPACITY` | 5 | Upcoming pieces held by the circular queue |
//! | `STACK_CAPACITY` | 3 | Reserved pieces held by the stack |
//! | `SWAP_DEPTH` | 3 | Pieces exchanged by the multi-slot swap |
//!
//! # Examples
//!
//! ```
//! use tetris_reserve_types::{MenuAction, Piece, PieceKind, QUEUE_CAPACITY};
//!
//! // Parse from string (case-insensitive)
//! let kind = PieceKind::from_str("t").unwrap();
//! assert_eq!(kind, PieceKind::T);
//!
//! let piece = Piece::new(kind, 7);
//! assert_eq!(piece.to_string(), "[T 7]");
//!
//! assert_eq!(MenuAction::from_digit('2'), Some(MenuAction::Reserve));
//! assert_eq!(QUEUE_CAPACITY, 5);
//! ```

use std::fmt;

/// Number of upcoming pieces kept in the queue (5)
pub const QUEUE_CAPACITY: usize = 5;

/// Number of pieces the reserve stack can hold (3)
pub const STACK_CAPACITY: usize = 3;

/// Number of pieces exchanged by the multi-slot swap (3)
pub const SWAP_DEPTH: usize = 3;


/// The four piece kinds dealt into the queue
///
/// - **I**: straight bar
/// - **O**: 2x2 square
/// - **T**: T-shaped
/// - **L**: L-shaped
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    O,
    T,
    L,
}

impl PieceKind {
    /// Every kind, in dealing order.
    pub const ALL: [PieceKind; 4] = [PieceKind::I, PieceKind::O, PieceKind::T, PieceKind::L];

    /// Parse piece kind from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use tetris_reserve_types::PieceKind;
    ///
    /// assert_eq!(PieceKind::from_str("i"), Some(PieceKind::I));
    /// assert_eq!(PieceKind::from_str("O"), Some(PieceKind::O));
    /// assert_eq!(PieceKind::from_str("S"), None);
    /// assert_eq!(PieceKind::from_str("unknown"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "i" => Some(PieceKind::I),
            "o" => Some(PieceKind::O),
            "t" => Some(PieceKind::T),
            "l" => Some(PieceKind::L),
            _ => None,
        }
    }

    /// Parse a single-letter kind (case-insensitive)
    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'I' => Some(PieceKind::I),
            'O' => Some(PieceKind::O),
            'T' => Some(PieceKind::T),
            'L' => Some(PieceKind::L),
            _ => None,
        }
    }

    /// Uppercase letter used when listing pieces
    pub fn as_char(&self) -> char {
        match self {
            PieceKind::I => 'I',
            PieceKind::O => 'O',
            PieceKind::T => 'T',
            PieceKind::L => 'L',
        }
    }
}

impl fmt::Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// A dealt piece: its kind plus an id unique within one session
///
/// Pieces are plain values. Moving one between the queue and the reserve
/// stack copies it out of one slot and into the other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub id: u32,
}

impl Piece {
    pub const fn new(kind: PieceKind, id: u32) -> Self {
        Self { kind, id }
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{} {}]", self.kind, self.id)
    }
}

/// Menu actions offered by the controller
///
/// Each action carries the digit the player types to select it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MenuAction {
    /// Play the piece at the front of the queue (1)
    Play,
    /// Move the front of the queue onto the reserve stack (2)
    Reserve,
    /// Play the piece on top of the reserve stack (3)
    UseReserved,
    /// Swap the queue front with the reserve top (4)
    SwapTop,
    /// Swap the first three queued pieces with the three reserved ones (5)
    SwapTriple,
    /// Leave the session (0)
    Quit,
}

impl MenuAction {
    /// Every action in menu order.
    pub const ALL: [MenuAction; 6] = [
        MenuAction::Play,
        MenuAction::Reserve,
        MenuAction::UseReserved,
        MenuAction::SwapTop,
        MenuAction::SwapTriple,
        MenuAction::Quit,
    ];

    /// Map a typed menu digit to its action
    ///
    /// # Examples
    ///
    /// ```
    /// use tetris_reserve_types::MenuAction;
    ///
    /// assert_eq!(MenuAction::from_digit('1'), Some(MenuAction::Play));
    /// assert_eq!(MenuAction::from_digit('0'), Some(MenuAction::Quit));
    /// assert_eq!(MenuAction::from_digit('7'), None);
    /// ```
    pub fn from_digit(c: char) -> Option<Self> {
        match c {
            '1' => Some(MenuAction::Play),
            '2' => Some(MenuAction::Reserve),
            '3' => Some(MenuAction::UseReserved),
            '4' => Some(MenuAction::SwapTop),
            '5' => Some(MenuAction::SwapTriple),
            '0' => Some(MenuAction::Quit),
            _ => None,
        }
    }

    pub fn digit(&self) -> char {
        match self {
            MenuAction::Play => '1',
            MenuAction::Reserve => '2',
            MenuAction::UseReserved => '3',
            MenuAction::SwapTop => '4',
            MenuAction::SwapTriple => '5',
            MenuAction::Quit => '0',
        }
    }

    /// Menu line text
    pub fn label(&self) -> &'static str {
        match self {
            MenuAction::Play => "Play piece (remove from queue)",
            MenuAction::Reserve => "Reserve piece (queue -> stack)",
            MenuAction::UseReserved => "Use reserved piece (remove from stack)",
            MenuAction::SwapTop => "Swap queue front with stack top",
            MenuAction::SwapTriple => "Swap first 3 of queue with 3 of stack",
            MenuAction::Quit => "Quit",
        }
    }

    /// Parse action from its camelCase name
    ///
    /// # Examples
    ///
    /// ```
    /// use tetris_reserve_types::MenuAction;
    ///
    /// assert_eq!(MenuAction::from_str("swapTop"), Some(MenuAction::SwapTop));
    /// assert_eq!(MenuAction::from_str("USERESERVED"), Some(MenuAction::UseReserved));
    /// assert_eq!(MenuAction::from_str("hold"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "play" => Some(MenuAction::Play),
            "reserve" => Some(MenuAction::Reserve),
            "usereserved" => Some(MenuAction::UseReserved),
            "swaptop" => Some(MenuAction::SwapTop),
            "swaptriple" => Some(MenuAction::SwapTriple),
            "quit" => Some(MenuAction::Quit),
            _ => None,
        }
    }

    /// Convert to camelCase name (used in log records)
    pub fn as_str(&self) -> &'static str {
        match self {
            MenuAction::Play => "play",
            MenuAction::Reserve => "reserve",
            MenuAction::UseReserved => "useReserved",
            MenuAction::SwapTop => "swapTop",
            MenuAction::SwapTriple => "swapTriple",
            MenuAction::Quit => "quit",
        }
    }
}
