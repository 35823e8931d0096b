//! RNG module - random piece generation
//!
//! Pieces are dealt by a [`PieceSource`]. The default source picks a kind
//! uniformly from [`PieceKind::ALL`] using a small LCG, so a session is fully
//! reproducible from its seed.
//!
//! Closures `FnMut(u32) -> Piece` are sources too, which keeps tests free to
//! script the exact sequence they need.

use crate::types::{Piece, PieceKind};

/// Deals a new piece for a given id
///
/// The id is supplied by the caller (a monotonic counter); a source only
/// decides the kind.
pub trait PieceSource {
    fn next_piece(&mut self, id: u32) -> Piece;
}

impl<F> PieceSource for F
where
    F: FnMut(u32) -> Piece,
{
    fn next_piece(&mut self, id: u32) -> Piece {
        self(id)
    }
}

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        // a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    pub fn next_range(&mut self, max: u32) -> u32 {
        // High bits of an LCG are far better distributed than the low ones.
        ((self.next_u32() as u64 * max as u64) >> 32) as u32
    }

    pub fn state(&self) -> u32 {
        self.state
    }
}

/// Uniform random piece source
#[derive(Debug, Clone)]
pub struct RandomPieceSource {
    seed: u32,
    rng: SimpleRng,
}

impl RandomPieceSource {
    pub fn new(seed: u32) -> Self {
        Self {
            seed,
            rng: SimpleRng::new(seed),
        }
    }

    /// Seed this source was created with (for replaying a session)
    pub fn seed(&self) -> u32 {
        self.seed
    }
}

impl PieceSource for RandomPieceSource {
    fn next_piece(&mut self, id: u32) -> Piece {
        let idx = self.rng.next_range(PieceKind::ALL.len() as u32) as usize;
        Piece::new(PieceKind::ALL[idx], id)
    }
}

impl Default for RandomPieceSource {
    fn default() -> Self {
        Self::new(1)
    }
}
