//! Exchange engine - moves and swaps between the queue and the reserve stack
//!
//! Each function borrows both containers for the duration of one logical
//! operation. All preconditions are checked before the first write, so a
//! returned error always means neither container was touched.
//!
//! Pairing rule for swaps: queue offset `i` (counted from the head) is
//! exchanged with stack offset `i` (counted from the top).

use std::mem;

use crate::error::{ReserveError, SwapError};
use crate::queue::PieceQueue;
use crate::stack::ReserveStack;
use crate::types::{Piece, SWAP_DEPTH};

/// Move the queue's head onto the stack's top.
///
/// Returns the moved piece. The queue is left one piece short; refilling it
/// is the caller's job.
pub fn reserve<const N: usize, const M: usize>(
    queue: &mut PieceQueue<N>,
    stack: &mut ReserveStack<M>,
) -> Result<Piece, ReserveError> {
    if stack.is_full() {
        return Err(ReserveError::StackFull);
    }
    if queue.is_empty() {
        return Err(ReserveError::QueueEmpty);
    }

    let piece = queue.dequeue().map_err(|_| ReserveError::QueueEmpty)?;
    stack.push(piece).map_err(|_| ReserveError::StackFull)?;
    Ok(piece)
}

/// Exchange the queue's head with the stack's top in place.
pub fn swap_top<const N: usize, const M: usize>(
    queue: &mut PieceQueue<N>,
    stack: &mut ReserveStack<M>,
) -> Result<(), SwapError> {
    let front = queue.slot_mut(0).ok_or(SwapError::QueueEmpty)?;
    let top = stack.slot_mut(0).ok_or(SwapError::StackEmpty)?;
    mem::swap(front, top);
    Ok(())
}

/// Exchange the `depth` frontmost queued pieces with the `depth` topmost
/// reserved ones.
///
/// Either all pairs are exchanged or, when one side holds fewer than `depth`
/// pieces, none are.
pub fn swap_front<const N: usize, const M: usize>(
    queue: &mut PieceQueue<N>,
    stack: &mut ReserveStack<M>,
    depth: usize,
) -> Result<(), SwapError> {
    if queue.len() < depth {
        return Err(SwapError::InsufficientQueue {
            needed: depth,
            available: queue.len(),
        });
    }
    if stack.len() < depth {
        return Err(SwapError::InsufficientStack {
            needed: depth,
            available: stack.len(),
        });
    }

    for offset in 0..depth {
        if let (Some(q), Some(s)) = (queue.slot_mut(offset), stack.slot_mut(offset)) {
            mem::swap(q, s);
        }
    }
    Ok(())
}

/// [`swap_front`] with the standard depth of three.
pub fn swap_triple<const N: usize, const M: usize>(
    queue: &mut PieceQueue<N>,
    stack: &mut ReserveStack<M>,
) -> Result<(), SwapError> {
    swap_front(queue, stack, SWAP_DEPTH)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PieceKind;

    fn piece(kind: PieceKind, id: u32) -> Piece {
        Piece::new(kind, id)
    }

    fn full_queue() -> PieceQueue<5> {
        let mut queue = PieceQueue::new();
        for id in 0..5 {
            queue.enqueue(piece(PieceKind::I, id)).unwrap();
        }
        queue
    }

    fn stack_of(ids: &[u32]) -> ReserveStack<3> {
        let mut stack = ReserveStack::new();
        for &id in ids {
            stack.push(piece(PieceKind::L, id)).unwrap();
        }
        stack
    }

    #[test]
    fn test_reserve_moves_head() {
        let mut queue = full_queue();
        let mut stack = stack_of(&[]);

        let moved = reserve(&mut queue, &mut stack).unwrap();
        assert_eq!(moved.id, 0);
        assert_eq!(stack.top(), Some(&moved));
        assert_eq!(queue.len(), 4);
        assert_eq!(queue.front().map(|p| p.id), Some(1));
    }

    #[test]
    fn test_reserve_stack_full_checked_first() {
        let mut queue: PieceQueue<5> = PieceQueue::new();
        let mut stack = stack_of(&[10, 11, 12]);

        // Both preconditions fail; the full stack is reported.
        assert_eq!(
            reserve(&mut queue, &mut stack),
            Err(ReserveError::StackFull)
        );
    }

    #[test]
    fn test_reserve_queue_empty() {
        let mut queue: PieceQueue<5> = PieceQueue::new();
        let mut stack = stack_of(&[]);
        assert_eq!(
            reserve(&mut queue, &mut stack),
            Err(ReserveError::QueueEmpty)
        );
        assert!(stack.is_empty());
    }

    #[test]
    fn test_swap_top_exchanges_in_place() {
        let mut queue = full_queue();
        let mut stack = stack_of(&[10, 11]);

        swap_top(&mut queue, &mut stack).unwrap();
        assert_eq!(queue.front(), Some(&piece(PieceKind::L, 11)));
        assert_eq!(stack.top(), Some(&piece(PieceKind::I, 0)));
        assert_eq!(queue.len(), 5);
        assert_eq!(stack.len(), 2);
    }

    #[test]
    fn test_swap_top_errors() {
        let mut empty_queue: PieceQueue<5> = PieceQueue::new();
        let mut stack = stack_of(&[10]);
        assert_eq!(
            swap_top(&mut empty_queue, &mut stack),
            Err(SwapError::QueueEmpty)
        );

        let mut queue = full_queue();
        let mut empty_stack = stack_of(&[]);
        assert_eq!(
            swap_top(&mut queue, &mut empty_stack),
            Err(SwapError::StackEmpty)
        );
        assert_eq!(queue, full_queue());
    }

    #[test]
    fn test_swap_front_zero_depth_is_noop() {
        let mut queue: PieceQueue<5> = PieceQueue::new();
        let mut stack = stack_of(&[]);
        assert_eq!(swap_front(&mut queue, &mut stack, 0), Ok(()));
    }

    #[test]
    fn test_swap_triple_insufficient_stack() {
        let mut queue = full_queue();
        let mut stack = stack_of(&[10, 11]);
        assert_eq!(
            swap_triple(&mut queue, &mut stack),
            Err(SwapError::InsufficientStack {
                needed: 3,
                available: 2
            })
        );
        assert_eq!(queue, full_queue());
        assert_eq!(stack, stack_of(&[10, 11]));
    }
}
