use arrayvec::ArrayVec;

use crate::types::{Piece, QUEUE_CAPACITY, STACK_CAPACITY};

/// Copy of a session's visible state, detached from the containers.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SessionSnapshot {
    /// Queued pieces, head first.
    pub queue: ArrayVec<Piece, QUEUE_CAPACITY>,
    /// Reserved pieces, top first.
    pub reserve: ArrayVec<Piece, STACK_CAPACITY>,
    /// Id the next dealt piece will get.
    pub next_id: u32,
}

impl SessionSnapshot {
    pub fn clear(&mut self) {
        self.queue.clear();
        self.reserve.clear();
        self.next_id = 0;
    }

    pub fn queue_is_full(&self) -> bool {
        self.queue.is_full()
    }

    pub fn reserve_is_full(&self) -> bool {
        self.reserve.is_full()
    }
}
