//! Output types and result structures for sort runs.
//!
//! ## Purpose
//!
//! This module defines the [`RunResult`] produced once per orchestrator
//! invocation, the [`ParsedInput`] produced by validation, and the
//! informational [`Notice`] attached when input was truncated.
//!
//! ## Design notes
//!
//! * **Ownership**: A result owns the untouched input, the sorted array and
//!   the complete step log, so it can be replayed after the run.
//! * **Ergonomics**: Implements `Display` as the full step log text.
//!
//! ## Invariants
//!
//! * `sorted` is a permutation of `input` in non-decreasing order.
//! * Step sequence numbers run `1..=steps.len()`.
//!
//! ## Non-goals
//!
//! * This module does not perform sorting; it only stores results.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::fmt::{Display, Formatter, Result};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// Internal dependencies
use crate::algorithms::Algorithm;
use crate::primitives::step::{Step, StepKind, StepValue, render_values};

// ============================================================================
// Notices
// ============================================================================

/// Informational message about accepted input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Notice {
    /// Input held more elements than a visualization shows; the tail was dropped.
    Truncated {
        /// Number of elements provided.
        original_len: usize,
        /// Number of elements kept.
        kept: usize,
    },
}

impl Display for Notice {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::Truncated { original_len, kept } => write!(
                f,
                "For better visualization, only the first {kept} of {original_len} numbers are used"
            ),
        }
    }
}

/// A validated array plus any notice raised while validating it.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedInput<T> {
    /// Accepted elements (2 to 12).
    pub values: Vec<T>,

    /// Set when the input was truncated.
    pub notice: Option<Notice>,
}

// ============================================================================
// Result Structure
// ============================================================================

/// Final array and complete step log of one run.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RunResult<T> {
    /// Algorithm that produced the log.
    pub algorithm: Algorithm,

    /// Array as it was before sorting.
    pub input: Vec<T>,

    /// Array after the algorithm terminated.
    pub sorted: Vec<T>,

    /// Every recorded step, in emission order.
    pub steps: Vec<Step<T>>,

    /// Notice raised while validating the input, if any.
    pub notice: Option<Notice>,
}

impl<T: StepValue> RunResult<T> {
    // ========================================================================
    // Query Methods
    // ========================================================================

    /// Number of recorded steps.
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Whether the run recorded no steps.
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Number of steps of the given kind.
    pub fn count(&self, kind: StepKind) -> usize {
        self.steps.iter().filter(|s| s.kind == kind).count()
    }

    /// Number of steps that changed the array.
    pub fn mutations(&self) -> usize {
        self.steps.iter().filter(|s| s.kind.mutates()).count()
    }

    /// Final recorded step.
    pub fn last_step(&self) -> Option<&Step<T>> {
        self.steps.last()
    }

    /// Whether `sorted` is in non-decreasing order.
    pub fn is_sorted(&self) -> bool {
        self.sorted.windows(2).all(|w| w[0] <= w[1])
    }
}

// ============================================================================
// Display Implementation
// ============================================================================

impl<T: StepValue> Display for RunResult<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        writeln!(f, "Algorithm: {}", self.algorithm)?;
        if let Some(notice) = &self.notice {
            writeln!(f, "Note: {notice}")?;
        }
        writeln!(f, "Initial Array: {}", render_values(&self.input, &[]))?;

        for step in &self.steps {
            writeln!(f, "{step}")?;
        }

        write!(
            f,
            "Sorting completed! Final sorted array: {}",
            render_values(&self.sorted, &[])
        )
    }
}
