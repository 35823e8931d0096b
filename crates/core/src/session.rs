//! Session module - owns the containers for one run
//!
//! A session ties together the upcoming-piece queue, the reserve stack, the
//! piece id counter and the piece source. It keeps the queue at full
//! occupancy between operations: the queue is pre-filled on creation and
//! topped up after every piece that leaves it.

use log::debug;

use crate::error::SessionError;
use crate::exchange;
use crate::queue::PieceQueue;
use crate::rng::PieceSource;
use crate::snapshot::SessionSnapshot;
use crate::stack::ReserveStack;
use crate::types::{MenuAction, Piece};

/// Result of a successfully applied [`MenuAction`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Played(Piece),
    Reserved(Piece),
    UsedReserved(Piece),
    SwappedTop,
    SwappedTriple,
    Quit,
}

impl Outcome {
    /// Confirmation shown to the player
    pub fn message(&self) -> String {
        match self {
            Outcome::Played(piece) => format!("Played piece: {}", piece),
            Outcome::Reserved(piece) => format!("Reserved piece: {}", piece),
            Outcome::UsedReserved(piece) => format!("Used reserved piece: {}", piece),
            Outcome::SwappedTop => "Swapped queue front with stack top".to_string(),
            Outcome::SwappedTriple => {
                "Swapped first 3 queued pieces with the 3 reserved pieces".to_string()
            }
            Outcome::Quit => "Leaving the game...".to_string(),
        }
    }
}

/// Complete session state
#[derive(Debug, Clone)]
pub struct Session<S> {
    queue: PieceQueue,
    reserve: ReserveStack,
    /// Monotonic id handed to the next dealt piece.
    next_id: u32,
    source: S,
}

impl<S: PieceSource> Session<S> {
    /// Create a session and deal the opening queue
    pub fn new(source: S) -> Self {
        let mut session = Self {
            queue: PieceQueue::new(),
            reserve: ReserveStack::new(),
            next_id: 0,
            source,
        };
        while !session.queue.is_full() {
            // Cannot fail: the loop stops as soon as the queue is full.
            let _ = session.refill();
        }
        session
    }

    pub fn queue(&self) -> &PieceQueue {
        &self.queue
    }

    pub fn reserve_stack(&self) -> &ReserveStack {
        &self.reserve
    }

    pub fn next_id(&self) -> u32 {
        self.next_id
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Play the piece at the front of the queue
    pub fn play(&mut self) -> Result<Piece, SessionError> {
        let piece = self.queue.dequeue()?;
        self.refill()?;
        debug!("played {}", piece);
        Ok(piece)
    }

    /// Move the front piece onto the reserve stack
    pub fn reserve(&mut self) -> Result<Piece, SessionError> {
        let piece = exchange::reserve(&mut self.queue, &mut self.reserve)?;
        self.refill()?;
        debug!("reserved {}", piece);
        Ok(piece)
    }

    /// Take the top reserved piece out of play (the queue is not touched)
    pub fn use_reserved(&mut self) -> Result<Piece, SessionError> {
        let piece = self.reserve.pop()?;
        debug!("used reserved {}", piece);
        Ok(piece)
    }

    pub fn swap_top(&mut self) -> Result<(), SessionError> {
        exchange::swap_top(&mut self.queue, &mut self.reserve)?;
        debug!("swapped queue front with reserve top");
        Ok(())
    }

    pub fn swap_triple(&mut self) -> Result<(), SessionError> {
        exchange::swap_triple(&mut self.queue, &mut self.reserve)?;
        debug!("swapped queue front three with reserve top three");
        Ok(())
    }

    /// Apply a menu action
    pub fn apply(&mut self, action: MenuAction) -> Result<Outcome, SessionError> {
        debug!("apply {}", action.as_str());
        match action {
            MenuAction::Play => self.play().map(Outcome::Played),
            MenuAction::Reserve => self.reserve().map(Outcome::Reserved),
            MenuAction::UseReserved => self.use_reserved().map(Outcome::UsedReserved),
            MenuAction::SwapTop => self.swap_top().map(|()| Outcome::SwappedTop),
            MenuAction::SwapTriple => self.swap_triple().map(|()| Outcome::SwappedTriple),
            MenuAction::Quit => Ok(Outcome::Quit),
        }
    }

    pub fn snapshot_into(&self, out: &mut SessionSnapshot) {
        out.clear();
        out.queue.extend(self.queue.iter().copied());
        out.reserve.extend(self.reserve.iter().copied());
        out.next_id = self.next_id;
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        let mut out = SessionSnapshot::default();
        self.snapshot_into(&mut out);
        out
    }

    /// Deal one piece into the queue.
    ///
    /// The id counter only advances when the piece was accepted.
    fn refill(&mut self) -> Result<Piece, SessionError> {
        let piece = self.source.next_piece(self.next_id);
        self.queue.enqueue(piece)?;
        self.next_id += 1;
        Ok(piece)
    }
}
