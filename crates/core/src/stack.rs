//! Reserve stack - fixed-capacity LIFO of set-aside pieces

use arrayvec::ArrayVec;

use crate::error::{Container, Empty, Full};
use crate::types::{Piece, STACK_CAPACITY};

/// LIFO of at most `M` pieces
///
/// Backed by an `ArrayVec`, so the top is simply the last element and an
/// empty stack has no top at all.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReserveStack<const M: usize = STACK_CAPACITY> {
    items: ArrayVec<Piece, M>,
}

impl<const M: usize> ReserveStack<M> {
    pub fn new() -> Self {
        Self {
            items: ArrayVec::new(),
        }
    }

    pub const fn capacity(&self) -> usize {
        M
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.items.is_full()
    }

    /// Push a piece on top; a full stack hands the piece back.
    pub fn push(&mut self, piece: Piece) -> Result<(), Full> {
        self.items.try_push(piece).map_err(|err| Full {
            container: Container::Stack,
            piece: err.element(),
        })
    }

    pub fn pop(&mut self) -> Result<Piece, Empty> {
        self.items.pop().ok_or(Empty {
            container: Container::Stack,
        })
    }

    pub fn top(&self) -> Option<&Piece> {
        self.items.last()
    }

    /// Piece `offset` positions below the top
    pub fn get(&self, offset: usize) -> Option<&Piece> {
        let idx = self.index_of(offset)?;
        self.items.get(idx)
    }

    pub(crate) fn slot_mut(&mut self, offset: usize) -> Option<&mut Piece> {
        let idx = self.index_of(offset)?;
        self.items.get_mut(idx)
    }

    /// Iterate from top to base
    pub fn iter(&self) -> impl Iterator<Item = &Piece> + '_ {
        self.items.iter().rev()
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    fn index_of(&self, offset: usize) -> Option<usize> {
        let len = self.items.len();
        (offset < len).then(|| len - 1 - offset)
    }
}

impl<const M: usize> Default for ReserveStack<M> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PieceKind;

    fn piece(id: u32) -> Piece {
        Piece::new(PieceKind::O, id)
    }

    #[test]
    fn test_new_stack_is_empty() {
        let stack: ReserveStack = ReserveStack::new();
        assert!(stack.is_empty());
        assert_eq!(stack.capacity(), STACK_CAPACITY);
        assert_eq!(stack.top(), None);
    }

    #[test]
    fn test_push_until_full() {
        let mut stack: ReserveStack<3> = ReserveStack::new();
        for id in 0..3 {
            stack.push(piece(id)).unwrap();
        }
        assert!(stack.is_full());

        let err = stack.push(piece(3)).unwrap_err();
        assert_eq!(err.container, Container::Stack);
        assert_eq!(err.piece, piece(3));
        assert_eq!(stack.top(), Some(&piece(2)));
    }

    #[test]
    fn test_offsets_count_from_top() {
        let mut stack: ReserveStack<3> = ReserveStack::new();
        for id in 0..3 {
            stack.push(piece(id)).unwrap();
        }
        assert_eq!(stack.get(0).map(|p| p.id), Some(2));
        assert_eq!(stack.get(2).map(|p| p.id), Some(0));
        assert_eq!(stack.get(3), None);

        let ids: Vec<u32> = stack.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![2, 1, 0]);
    }

    #[test]
    fn test_pop_empty() {
        let mut stack: ReserveStack<3> = ReserveStack::new();
        assert_eq!(
            stack.pop(),
            Err(Empty {
                container: Container::Stack
            })
        );
    }
}
