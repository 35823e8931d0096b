//! Upcoming-piece queue - fixed-capacity circular buffer
//!
//! Pieces enter at the tail and leave from the head. Both indices wrap modulo
//! the capacity, and the element count is tracked explicitly so that a full
//! queue and an empty one are distinguishable when `head == tail`.
//!
//! Slots outside the live window always hold `None`; no piece is ever read
//! from a stale slot.

use crate::error::{Container, Empty, Full};
use crate::types::{Piece, QUEUE_CAPACITY};

/// Circular FIFO of at most `N` pieces
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PieceQueue<const N: usize = QUEUE_CAPACITY> {
    slots: [Option<Piece>; N],
    /// Index of the oldest piece
    head: usize,
    /// Index of the newest piece (one before slot 0 while nothing was enqueued)
    tail: usize,
    count: usize,
}

impl<const N: usize> PieceQueue<N> {
    /// Create an empty queue
    pub fn new() -> Self {
        Self {
            slots: [None; N],
            head: 0,
            tail: N.wrapping_sub(1),
            count: 0,
        }
    }

    pub const fn capacity(&self) -> usize {
        N
    }

    pub fn len(&self) -> usize {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    pub fn is_full(&self) -> bool {
        self.count == N
    }

    /// Append a piece at the tail
    ///
    /// A full queue rejects the piece and hands it back inside the error.
    pub fn enqueue(&mut self, piece: Piece) -> Result<(), Full> {
        if self.is_full() {
            return Err(Full {
                container: Container::Queue,
                piece,
            });
        }

        self.tail = (self.tail.wrapping_add(1)) % N;
        self.slots[self.tail] = Some(piece);
        self.count += 1;
        Ok(())
    }

    /// Remove and return the piece at the head
    pub fn dequeue(&mut self) -> Result<Piece, Empty> {
        let slot = if self.is_empty() {
            None
        } else {
            self.slots[self.head].take()
        };
        let piece = slot.ok_or(Empty {
            container: Container::Queue,
        })?;

        self.head = (self.head + 1) % N;
        self.count -= 1;
        Ok(piece)
    }

    /// Piece that the next `dequeue` would return
    pub fn front(&self) -> Option<&Piece> {
        self.get(0)
    }

    /// Piece at `offset` positions behind the head
    pub fn get(&self, offset: usize) -> Option<&Piece> {
        if offset >= self.count {
            return None;
        }
        self.slots[self.index_of(offset)].as_ref()
    }

    /// Mutable access to a live slot, for in-place exchanges.
    pub(crate) fn slot_mut(&mut self, offset: usize) -> Option<&mut Piece> {
        if offset >= self.count {
            return None;
        }
        let idx = self.index_of(offset);
        self.slots[idx].as_mut()
    }

    /// Iterate from head to tail (FIFO order)
    pub fn iter(&self) -> impl Iterator<Item = &Piece> + '_ {
        (0..self.count).filter_map(move |offset| self.get(offset))
    }

    /// Drop every piece and reset the indices
    pub fn clear(&mut self) {
        *self = Self::new();
    }

    fn index_of(&self, offset: usize) -> usize {
        (self.head + offset) % N
    }
}

impl<const N: usize> Default for PieceQueue<N> {
    fn default() -> Self {
        Self::new()
    }
}
