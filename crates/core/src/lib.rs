//! Core logic - the upcoming-piece queue, the reserve stack and the
//! exchanges between them
//!
//! This crate has **no I/O**: nothing here prints, reads input or touches the
//! terminal. Every operation either fully succeeds or returns an error with
//! both containers left untouched.
//!
//! # Module Structure
//!
//! - [`queue`]: fixed-capacity circular FIFO of upcoming pieces
//! - [`stack`]: fixed-capacity LIFO of reserved pieces
//! - [`exchange`]: reserve, single swap and multi-slot swap between the two
//! - [`error`]: typed, recoverable failures
//! - [`rng`]: seeded piece source
//! - [`session`]: keeps the queue full and dispatches menu actions
//! - [`snapshot`]: detached copy of session state for rendering
//!
//! # Example
//!
//! ```
//! use tetris_reserve_core::{RandomPieceSource, Session};
//! use tetris_reserve_types::MenuAction;
//!
//! let mut session = Session::new(RandomPieceSource::new(12345));
//! assert!(session.queue().is_full());
//!
//! // Reserve the front piece, then swap it back with the new front
//! session.apply(MenuAction::Reserve).unwrap();
//! session.apply(MenuAction::SwapTop).unwrap();
//!
//! assert_eq!(session.reserve_stack().len(), 1);
//! assert!(session.queue().is_full());
//! ```

pub mod error;
pub mod exchange;
pub mod queue;
pub mod rng;
pub mod session;
pub mod snapshot;
pub mod stack;

pub use tetris_reserve_types as types;

// Re-export commonly used types for convenience
pub use error::{Container, Empty, Full, ReserveError, SessionError, SwapError};
pub use exchange::{reserve, swap_front, swap_top, swap_triple};
pub use queue::PieceQueue;
pub use rng::{PieceSource, RandomPieceSource, SimpleRng};
pub use session::{Outcome, Session};
pub use snapshot::SessionSnapshot;
pub use stack::ReserveStack;
