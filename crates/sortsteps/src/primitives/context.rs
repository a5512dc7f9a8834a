//! Run-scoped state shared by the orchestrator and the algorithms.
//!
//! A [`RunContext`] owns the working [`Sequence`] and the [`StepRecorder`]
//! for exactly one run. Nothing is global, so independent runs (or tests)
//! never observe each other.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// Internal dependencies
use crate::primitives::recorder::StepRecorder;
use crate::primitives::sequence::Sequence;
use crate::primitives::step::{Step, StepKind, StepValue};

// ============================================================================
// Run Context
// ============================================================================

/// Working array plus step log for a single run.
#[derive(Debug, Clone, PartialEq)]
pub struct RunContext<T> {
    /// Array being sorted.
    pub sequence: Sequence<T>,

    /// Log of emitted steps.
    pub recorder: StepRecorder<T>,
}

impl<T: StepValue> RunContext<T> {
    /// Start a run over a copy of `input` with an empty log.
    pub fn new(input: &[T]) -> Self {
        Self {
            sequence: Sequence::from_slice(input),
            recorder: StepRecorder::new(),
        }
    }

    /// Replace the array with a copy of `input` and clear the log.
    pub fn reset(&mut self, input: &[T]) {
        self.sequence = Sequence::from_slice(input);
        self.recorder.reset();
    }

    /// Number of elements being sorted.
    #[inline]
    pub fn len(&self) -> usize {
        self.sequence.len()
    }

    /// Whether the array is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.sequence.is_empty()
    }

    /// Read the element at `index`.
    #[inline]
    pub fn get(&self, index: usize) -> T {
        self.sequence.get(index)
    }

    /// Record a step against the current state of the array.
    pub fn record(&mut self, kind: StepKind, indices: &[usize], pivot: Option<usize>) {
        self.recorder
            .record(kind, indices, pivot, self.sequence.as_slice());
    }

    /// Split the context into the final array and the step log.
    pub fn finish(self) -> (Vec<T>, Vec<Step<T>>) {
        (self.sequence.into_vec(), self.recorder.into_steps())
    }
}
