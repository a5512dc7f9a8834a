//! Seeded random array generation.
//!
//! ## Purpose
//!
//! This module provides the "Random Array" feature: a short array of small
//! integers suitable for a visualization, reproducible from a seed.
//!
//! ## Design notes
//!
//! * **No-std**: Uses a minimal LCG instead of an external RNG crate.
//! * **Inclusive bounds**: Both the size and value ranges include their ends.
//!
//! ## Invariants
//!
//! * The same seed always yields the same sequence of arrays.
//! * Generated sizes and values stay within the configured bounds.
//!
//! ## Non-goals
//!
//! * Statistical quality beyond what a visual demo needs.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// ============================================================================
// PRNG
// ============================================================================

/// Minimal PRNG for no-std array generation.
///
/// Uses an LCG (Linear Congruential Generator) with constants from PCG/MQL.
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u64,
}

impl SimpleRng {
    /// Create a generator from a seed.
    pub fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    /// Next raw 32-bit output.
    pub fn next_u32(&mut self) -> u32 {
        // LCG constants for 64-bit state
        self.state = self.state.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.state >> 32) as u32
    }

    /// Uniform integer in `min..=max`. Requires `min <= max`.
    pub fn next_in_range(&mut self, min: i64, max: i64) -> i64 {
        debug_assert!(min <= max);
        let span = (i128::from(max) - i128::from(min) + 1) as u128;
        (i128::from(min) + (u128::from(self.next_u32()) % span) as i128) as i64
    }
}

// ============================================================================
// Random Arrays
// ============================================================================

/// Bounds for random array generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RandomSpec {
    /// Smallest array length.
    pub min_size: usize,

    /// Largest array length.
    pub max_size: usize,

    /// Smallest element value.
    pub min_value: i64,

    /// Largest element value.
    pub max_value: i64,
}

impl Default for RandomSpec {
    fn default() -> Self {
        Self {
            min_size: 5,
            max_size: 12,
            min_value: 1,
            max_value: 50,
        }
    }
}

/// Draw a random array within `spec`. Bounds must already be validated.
pub fn random_sequence<T: Float>(spec: &RandomSpec, rng: &mut SimpleRng) -> Vec<T> {
    let size = rng.next_in_range(spec.min_size as i64, spec.max_size as i64) as usize;
    (0..size)
        .map(|_| {
            let v = rng.next_in_range(spec.min_value, spec.max_value);
            T::from(v).unwrap_or_else(T::zero)
        })
        .collect()
}
