//! Append-only step log for one sort run.
//!
//! ## Purpose
//!
//! This module provides the [`StepRecorder`], which turns each notable
//! algorithm operation into a numbered [`Step`]. It never mutates the array
//! and never renders anything; the log can be replayed, paced or skipped by a
//! presentation layer without affecting sort correctness.
//!
//! ## Invariants
//!
//! * Sequence numbers start at 1 and increase by exactly 1 per step.
//! * `reset` empties the log and restarts numbering.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// Internal dependencies
use crate::primitives::step::{Step, StepKind, StepValue};

// ============================================================================
// Step Recorder
// ============================================================================

/// Pure append log of steps.
#[derive(Debug, Clone, PartialEq)]
pub struct StepRecorder<T> {
    steps: Vec<Step<T>>,
}

impl<T> Default for StepRecorder<T> {
    fn default() -> Self {
        Self { steps: Vec::new() }
    }
}

impl<T: StepValue> StepRecorder<T> {
    /// Create an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one step describing `kind` at `indices`, reading values from `array`.
    pub fn record(
        &mut self,
        kind: StepKind,
        indices: &[usize],
        pivot: Option<usize>,
        array: &[T],
    ) -> &Step<T> {
        let seq = self.steps.len() + 1;
        self.steps.push(Step::new(seq, kind, indices, pivot, array));
        &self.steps[seq - 1]
    }

    /// Clear the log for a new run.
    pub fn reset(&mut self) {
        self.steps.clear();
    }

    /// Number of recorded steps.
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Whether nothing has been recorded yet.
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Recorded steps in emission order.
    pub fn steps(&self) -> &[Step<T>] {
        &self.steps
    }

    /// Most recent step.
    pub fn last(&self) -> Option<&Step<T>> {
        self.steps.last()
    }

    /// Consume the recorder and return the log.
    pub fn into_steps(self) -> Vec<Step<T>> {
        self.steps
    }
}
