//! Step records emitted while an algorithm sorts.
//!
//! ## Purpose
//!
//! This module defines the immutable [`Step`] record and its [`StepKind`]
//! tag, plus the text rendering shared by the step log and result display.
//!
//! ## Design notes
//!
//! * **Self-contained**: Each step carries a snapshot of the whole array after
//!   the operation, so a presentation layer can redraw its boxes from any
//!   single step without replaying the log.
//! * **Indices as arrows**: The first and last involved index double as the
//!   arrow the browser draws between boxes (`from -> to`).
//! * **Number formatting**: Values print the way a browser prints numbers
//!   (`5`, `2.5`, `Infinity`, `1e+21`), never `5.0` or `inf`. Digits come from
//!   the element type's own shortest round-trip form, so `0.1_f32` prints `0.1`.
//!
//! ## Key concepts
//!
//! * **Rendered snippet**: Comma-joined snapshot with the involved indices
//!   wrapped in brackets, e.g. `1, [3], [5], 8`.
//! * **Description**: The narrative line of the step log, e.g. `Swapped 5 and 3`.
//!
//! ## Invariants
//!
//! * `values[k]` is the snapshot value at `indices[k]`.
//! * A step holds at most two indices.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::{format, string::String, vec::Vec};
#[cfg(feature = "std")]
use std::{string::String, vec::Vec};

// External dependencies
use core::fmt::{Display, Formatter, LowerExp, Result};
use num_traits::Float;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// ============================================================================
// Element Values
// ============================================================================

/// Element types a step can hold and print.
pub trait StepValue: Float + Display + LowerExp {}

impl<T: Float + Display + LowerExp> StepValue for T {}

// ============================================================================
// Step Kind
// ============================================================================

/// Tag describing what an algorithm did at one step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum StepKind {
    /// Two elements were compared.
    Compare,

    /// Two elements were exchanged.
    Swap,

    /// Insertion sort moved an element one slot to the right.
    Shift,

    /// Insertion sort dropped the held key into its slot.
    Insert,

    /// Quick sort pulled an element below the partition boundary.
    PartitionSwap,

    /// Quick sort selected the pivot for a partition.
    Pivot,

    /// Quick sort moved the pivot to its final position.
    PivotPlace,

    /// Merge sort wrote one element back from a temporary buffer.
    Merge,

    /// Selection sort started a scan with the current minimum.
    CurrentMin,

    /// Selection sort found a smaller element.
    NewMin,
}

impl StepKind {
    /// Short label the browser writes next to the arrow.
    pub fn label(self) -> &'static str {
        match self {
            Self::Compare => "Compare",
            Self::Swap | Self::PartitionSwap => "Swap",
            Self::Shift => "Shift",
            Self::Insert => "Insert",
            Self::Pivot => "Pivot",
            Self::PivotPlace => "Place pivot",
            Self::Merge => "Merge",
            Self::CurrentMin => "Current min",
            Self::NewMin => "New min",
        }
    }

    /// Whether a step of this kind changed the array.
    pub fn mutates(self) -> bool {
        matches!(
            self,
            Self::Swap
                | Self::Shift
                | Self::Insert
                | Self::PartitionSwap
                | Self::PivotPlace
                | Self::Merge
        )
    }
}

impl Display for StepKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        f.write_str(self.label())
    }
}

// ============================================================================
// Step Record
// ============================================================================

/// One notable event during a sort run.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Step<T> {
    /// 1-based sequence number in emission order.
    pub seq: usize,

    /// What happened.
    pub kind: StepKind,

    /// Indices involved (zero, one or two).
    pub indices: Vec<usize>,

    /// Values at `indices` after the operation.
    pub values: Vec<T>,

    /// Pivot index for quick sort steps.
    pub pivot: Option<usize>,

    /// Whole array after the operation.
    pub snapshot: Vec<T>,

    /// Snapshot rendered with the involved indices bracketed.
    pub rendered: String,
}

impl<T: StepValue> Step<T> {
    /// Build a step from a read-only view of the array.
    pub fn new(
        seq: usize,
        kind: StepKind,
        indices: &[usize],
        pivot: Option<usize>,
        array: &[T],
    ) -> Self {
        debug_assert!(indices.len() <= 2, "a step involves at most two indices");
        Self {
            seq,
            kind,
            indices: indices.to_vec(),
            values: indices.iter().map(|&i| array[i]).collect(),
            pivot,
            snapshot: array.to_vec(),
            rendered: render_values(array, indices),
        }
    }

    /// Arrow between boxes as `(from, to)`, if the step involves any index.
    pub fn arrow(&self) -> Option<(usize, usize)> {
        match self.indices.as_slice() {
            [] => None,
            [only] => Some((*only, *only)),
            [from, .., to] => Some((*from, *to)),
        }
    }

    /// Narrative line shown in the step log.
    pub fn describe(&self) -> String {
        let value = |k: usize| {
            self.values
                .get(k)
                .map(|&v| format_value(v))
                .unwrap_or_default()
        };
        let index = |k: usize| self.indices.get(k).copied().unwrap_or_default();

        match self.kind {
            StepKind::Compare => format!("Compared {} and {}", value(0), value(1)),
            StepKind::Swap | StepKind::PartitionSwap => {
                format!("Swapped {} and {}", value(1), value(0))
            }
            StepKind::Shift => format!(
                "Shifted {} from position {} to {}",
                value(1),
                index(0),
                index(1)
            ),
            StepKind::Insert => format!("Inserted {} at position {}", value(1), index(1)),
            StepKind::Pivot => format!("Selected pivot {} at position {}", value(0), index(0)),
            StepKind::PivotPlace => {
                format!("Placed pivot {} at position {}", value(1), index(1))
            }
            StepKind::Merge => format!("Merging: placed {} at position {}", value(0), index(0)),
            StepKind::CurrentMin => {
                format!("Current minimum {} at position {}", value(0), index(0))
            }
            StepKind::NewMin => format!("New minimum {} at position {}", value(1), index(1)),
        }
    }
}

impl<T: StepValue> Display for Step<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "Step {}: {} → {}", self.seq, self.describe(), self.rendered)
    }
}

// ============================================================================
// Rendering
// ============================================================================

/// Format a value the way a browser prints a number.
pub fn format_value<T: StepValue>(value: T) -> String {
    if value.is_nan() {
        String::from("NaN")
    } else if value.is_infinite() {
        String::from(if value > T::zero() { "Infinity" } else { "-Infinity" })
    } else if value == T::zero() {
        // -0 prints as 0
        String::from("0")
    } else if needs_exponent(value.abs()) {
        exponent_notation(value)
    } else {
        format!("{value}")
    }
}

/// Magnitudes at or above 1e21 or below 1e-6 switch to exponent notation.
fn needs_exponent<T: StepValue>(magnitude: T) -> bool {
    T::from(1e21).is_some_and(|upper| magnitude >= upper)
        || T::from(1e-6).is_some_and(|lower| magnitude < lower)
}

/// `1e21` -> `1e+21`, `1.5e-7` stays.
fn exponent_notation<T: StepValue>(value: T) -> String {
    let text = format!("{value:e}");
    match text.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => {
            format!("{mantissa}e+{exponent}")
        }
        _ => text,
    }
}

/// Comma-join `values`, bracketing the entries at `highlight`.
pub fn render_values<T: StepValue>(values: &[T], highlight: &[usize]) -> String {
    let mut out = String::new();
    for (i, &v) in values.iter().enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        if highlight.contains(&i) {
            out.push('[');
            out.push_str(&format_value(v));
            out.push(']');
        } else {
            out.push_str(&format_value(v));
        }
    }
    out
}
