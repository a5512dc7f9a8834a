//! Layer 2: Algorithms
//!
//! # Purpose
//!
//! This layer implements the five sorting engines. Each one mutates the
//! run's [`Sequence`](crate::primitives::sequence::Sequence) in place and
//! records a deterministic, algorithm-specific series of steps.
//!
//! # Architecture
//!
//! ```text
//! Layer 5: API
//!   ↓
//! Layer 4: Adapters
//!   ↓
//! Layer 3: Engine
//!   ↓
//! Layer 2: Algorithms ← You are here
//!   ↓
//! Layer 1: Primitives
//! ```

// External dependencies
use core::fmt::{Display, Formatter, Result};
use core::str::FromStr;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// Internal dependencies
use crate::primitives::errors::SortError;

/// Bubble sort.
pub mod bubble;

/// Selection sort.
pub mod selection;

/// Insertion sort.
pub mod insertion;

/// Quick sort (Lomuto partition).
pub mod quick;

/// Top-down merge sort.
pub mod merge;

// ============================================================================
// Algorithm Selector
// ============================================================================

/// The fixed set of visualized algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Algorithm {
    /// Adjacent compare-and-swap passes.
    #[default]
    Bubble,

    /// Repeatedly select the minimum of the unsorted suffix.
    Selection,

    /// Grow a sorted prefix by shifting larger elements right.
    Insertion,

    /// Recursive Lomuto partitioning around the last element.
    Quick,

    /// Recursive halving followed by stable merges.
    Merge,
}

impl Algorithm {
    /// All algorithms in menu order.
    pub const ALL: [Algorithm; 5] = [
        Algorithm::Bubble,
        Algorithm::Selection,
        Algorithm::Insertion,
        Algorithm::Quick,
        Algorithm::Merge,
    ];

    /// Identifier used by the algorithm selector.
    pub fn name(self) -> &'static str {
        match self {
            Self::Bubble => "bubble",
            Self::Selection => "selection",
            Self::Insertion => "insertion",
            Self::Quick => "quick",
            Self::Merge => "merge",
        }
    }

    /// Human-readable title.
    pub fn title(self) -> &'static str {
        match self {
            Self::Bubble => "Bubble Sort",
            Self::Selection => "Selection Sort",
            Self::Insertion => "Insertion Sort",
            Self::Quick => "Quick Sort",
            Self::Merge => "Merge Sort",
        }
    }

    /// Parse a selector identifier, returning `None` for anything unrecognised.
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim();
        Self::ALL
            .into_iter()
            .find(|a| a.name().eq_ignore_ascii_case(name))
    }
}

impl FromStr for Algorithm {
    type Err = SortError;

    fn from_str(s: &str) -> core::result::Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| SortError::UnknownAlgorithm(s.into()))
    }
}

impl Display for Algorithm {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        f.write_str(self.title())
    }
}

// ============================================================================
// Bubble Mode
// ============================================================================

/// Pass policy for bubble sort.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BubbleMode {
    /// Always run all `n - 1` passes; step counts match the classic log.
    #[default]
    Classic,

    /// Stop after the first pass that performs no swap.
    EarlyExit,
}
