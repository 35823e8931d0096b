//! Error types for the piece containers and the exchanges between them.
//!
//! Every failure here is local and recoverable: the operation that returned it
//! left both containers exactly as they were.

use std::fmt;

use thiserror::Error;

use crate::types::Piece;

/// Which container an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Container {
    Queue,
    Stack,
}

impl fmt::Display for Container {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Container::Queue => write!(f, "queue"),
            Container::Stack => write!(f, "stack"),
        }
    }
}

/// Insertion into a full container.
///
/// The rejected piece is handed back so the caller still owns it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("{container} is full, cannot insert {piece}")]
pub struct Full {
    pub container: Container,
    pub piece: Piece,
}

/// Removal from an empty container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("{container} is empty")]
pub struct Empty {
    pub container: Container,
}

/// Why a piece could not be moved from the queue to the reserve stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ReserveError {
    #[error("reserve stack is full, cannot reserve more pieces")]
    StackFull,
    #[error("queue is empty, no piece to reserve")]
    QueueEmpty,
}

/// Why an exchange between queue and stack was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SwapError {
    #[error("cannot swap: queue is empty")]
    QueueEmpty,
    #[error("cannot swap: reserve stack is empty")]
    StackEmpty,
    #[error("not enough pieces in queue for swap ({available} of {needed})")]
    InsufficientQueue { needed: usize, available: usize },
    #[error("not enough pieces in reserve stack for swap ({available} of {needed})")]
    InsufficientStack { needed: usize, available: usize },
}

/// Any failure surfaced by a [`Session`](crate::session::Session) operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error(transparent)]
    Full(#[from] Full),
    #[error(transparent)]
    Empty(#[from] Empty),
    #[error(transparent)]
    Reserve(#[from] ReserveError),
    #[error(transparent)]
    Swap(#[from] SwapError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PieceKind;

    #[test]
    fn test_error_display() {
        let err = Full {
            container: Container::Queue,
            piece: Piece::new(PieceKind::T, 4),
        };
        assert_eq!(err.to_string(), "queue is full, cannot insert [T 4]");

        let err = Empty {
            container: Container::Stack,
        };
        assert_eq!(err.to_string(), "stack is empty");

        let err = SwapError::InsufficientQueue {
            needed: 3,
            available: 2,
        };
        assert_eq!(
            err.to_string(),
            "not enough pieces in queue for swap (2 of 3)"
        );
    }

    #[test]
    fn test_session_error_is_transparent() {
        let err: SessionError = ReserveError::StackFull.into();
        assert_eq!(err.to_string(), ReserveError::StackFull.to_string());

        let err: SessionError = SwapError::StackEmpty.into();
        assert!(matches!(err, SessionError::Swap(SwapError::StackEmpty)));
    }
}
