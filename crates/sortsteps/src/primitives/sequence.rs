//! Mutable working array for a single sort run.
//!
//! ## Purpose
//!
//! This module provides the `Sequence` store that algorithms read and mutate
//! in place. It also provides the copy operation merge sort uses for its
//! temporary left and right buffers.
//!
//! ## Design notes
//!
//! * **Thin**: A newtype over `Vec<T>`; no bookkeeping beyond the values.
//! * **Fatal bounds**: Indices are derived from the current length by the
//!   algorithms. An out-of-range index is a defect and panics through slice
//!   indexing rather than returning an error.
//!
//! ## Invariants
//!
//! * Length never changes after construction.
//! * Only the active algorithm mutates the store.
//!
//! ## Non-goals
//!
//! * This module does not record steps or validate input.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// ============================================================================
// Sequence Store
// ============================================================================

/// Ordered, fixed-length working array mutated in place during sorting.
#[derive(Debug, Clone, PartialEq)]
pub struct Sequence<T> {
    values: Vec<T>,
}

impl<T: Copy> Sequence<T> {
    /// Create a store owning the given values.
    pub fn new(values: Vec<T>) -> Self {
        Self { values }
    }

    /// Create a store holding a copy of `values`; the caller's slice is untouched.
    pub fn from_slice(values: &[T]) -> Self {
        Self {
            values: values.to_vec(),
        }
    }

    /// Number of elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the store holds no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Read the element at `index`.
    #[inline]
    pub fn get(&self, index: usize) -> T {
        self.values[index]
    }

    /// Overwrite the element at `index`.
    #[inline]
    pub fn set(&mut self, index: usize, value: T) {
        self.values[index] = value;
    }

    /// Exchange the elements at `a` and `b`.
    #[inline]
    pub fn swap(&mut self, a: usize, b: usize) {
        self.values.swap(a, b);
    }

    /// Copy of the half-open range `start..end`.
    pub fn copy_range(&self, start: usize, end: usize) -> Vec<T> {
        self.values[start..end].to_vec()
    }

    /// Read-only view of all elements.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.values
    }

    /// Consume the store and return its values.
    pub fn into_vec(self) -> Vec<T> {
        self.values
    }
}
