//! RNG module - injectable random sources and Fisher-Yates shuffling
//!
//! Every generator draws its randomness through [`RandomSource`], so callers pick
//! between a seeded [`SimpleRng`] (reproducible boards, tests) and [`ThreadRandom`]
//! (OS-seeded, production).

use rand::{Rng, RngCore};

/// A source of uniformly distributed random numbers
pub trait RandomSource {
    /// Generate next random u32
    fn next_u32(&mut self) -> u32;

    /// Generate random value in range [0, max)
    ///
    /// Uses the high bits of `next_u32` (multiply-shift), so `max` must be non-zero.
    fn next_range(&mut self, max: u32) -> u32 {
        ((self.next_u32() as u64 * max as u64) >> 32) as u32
    }

    /// Random index into a collection of `len` elements
    fn next_index(&mut self, len: usize) -> usize {
        self.next_range(len as u32) as usize
    }
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn next_u32(&mut self) -> u32 {
        (**self).next_u32()
    }

    fn next_range(&mut self, max: u32) -> u32 {
        (**self).next_range(max)
    }
}

impl<R: RandomSource + ?Sized> RandomSource for Box<R> {
    fn next_u32(&mut self) -> u32 {
        (**self).next_u32()
    }

    fn next_range(&mut self, max: u32) -> u32 {
        (**self).next_range(max)
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

    /// Current state, usable as a seed to resume the same sequence
    pub fn state(&self) -> u32 {
        self.state
    }
}

impl RandomSource for SimpleRng {
    fn next_u32(&mut self) -> u32 {
        // LCG formula: (a * state + c) mod m
        // Using Numerical Recipes constants: a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }
}

/// Thread-local OS-seeded randomness
///
/// Holds no state itself; each draw goes through `rand::rng()`, so the handle is `Send`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadRandom;

impl ThreadRandom {
    pub fn new() -> Self {
        Self
    }
}

impl RandomSource for ThreadRandom {
    fn next_u32(&mut self) -> u32 {
        rand::rng().next_u32()
    }

    fn next_range(&mut self, max: u32) -> u32 {
        rand::rng().random_range(0..max)
    }
}

/// Shuffle a slice in place using Fisher-Yates
///
/// Walks from the last index down to 1, swapping each element with a uniformly
/// chosen element at or before it.
pub fn shuffle_in_place<T, R: RandomSource + ?Sized>(rng: &mut R, slice: &mut [T]) {
    for i in (1..slice.len()).rev() {
        let j = rng.next_range((i + 1) as u32) as usize;
        slice.swap(i, j);
    }
}

/// Shuffled copy of `items`; the input is left untouched
pub fn shuffle<T: Clone, R: RandomSource + ?Sized>(rng: &mut R, items: &[T]) -> Vec<T> {
    let mut out = items.to_vec();
    shuffle_in_place(rng, &mut out);
    out
}
