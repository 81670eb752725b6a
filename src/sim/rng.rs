//! 32-bit linear-congruential generator
//!
//! Not cryptographic. The whole state is a single `u32`, so it lives inside
//! `GameState` and serializes with it.

use serde::{Deserialize, Serialize};

const LCG_MULTIPLIER: u32 = 1_664_525;
const LCG_INCREMENT: u32 = 1_013_904_223;

/// Advance `seed` one step and return `(next_seed, value)` with `value` in `[0, 1]`.
#[inline]
pub fn next_random(seed: u32) -> (u32, f64) {
    let next = seed
        .wrapping_mul(LCG_MULTIPLIER)
        .wrapping_add(LCG_INCREMENT);
    (next, f64::from(next) / f64::from(u32::MAX))
}

/// Stream wrapper around [`next_random`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lcg {
    state: u32,
}

impl Lcg {
    pub fn new(seed: u32) -> Self {
        Self { state: seed }
    }

    pub fn state(&self) -> u32 {
        self.state
    }

    pub fn next_f64(&mut self) -> f64 {
        let (state, value) = next_random(self.state);
        self.state = state;
        value
    }
}
