//! Error types for sorting runs and visualization sessions.
//!
//! ## Purpose
//!
//! This module defines the error conditions surfaced to callers: rejected
//! user input, invalid pacing or random-generation parameters, builder misuse,
//! and entry points refused while a run is still playing back.
//!
//! ## Design notes
//!
//! * **Contextual**: Errors include relevant values (e.g., actual vs. minimum lengths).
//! * **Deferred**: Builder errors are stored during configuration and reported at `build()`.
//! * **No-std**: Supports `no_std` environments by using `alloc` for dynamic messages.
//! * **Trait Implementation**: Implements `Display` and `std::error::Error` (when `std` is enabled).
//!
//! ## Key concepts
//!
//! 1. **Validation errors**: Empty input or fewer than two elements. No state is mutated.
//! 2. **Gating errors**: A run is in flight, so the entry point is refused.
//! 3. **Configuration errors**: Negative pacing, inverted ranges, duplicate setters.
//!
//! ## Invariants
//!
//! * Truncation of oversized input is never an error; it is reported as a notice.
//! * Out-of-bounds indexing inside an algorithm is a defect and panics instead.
//!
//! ## Non-goals
//!
//! * This module does not perform the validation logic itself.
//! * This module does not provide error recovery or retry strategies.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::string::String;
#[cfg(feature = "std")]
use std::error::Error;
#[cfg(feature = "std")]
use std::string::String;

// External dependencies
use core::fmt::{Display, Formatter, Result};

// ============================================================================
// Error Type
// ============================================================================

/// Error type for sorting runs and sessions.
#[derive(Debug, Clone, PartialEq)]
pub enum SortError {
    /// Raw input is empty or whitespace only.
    EmptyInput,

    /// Fewer elements than a visualization needs.
    TooFewElements {
        /// Number of elements provided.
        got: usize,
        /// Minimum required elements.
        min: usize,
    },

    /// Pacing delay must be finite and non-negative.
    InvalidDelay(f64),

    /// Random generation bounds are inverted or empty.
    InvalidRange {
        /// Name of the range (`"size"` or `"value"`).
        range: &'static str,
        /// Lower bound provided.
        min: i64,
        /// Upper bound provided.
        max: i64,
    },

    /// Algorithm identifier is not one of the five supported names.
    UnknownAlgorithm(String),

    /// A run is still in flight; the entry point was refused.
    SortInProgress,

    /// A run was requested before any array was set.
    NoInput,

    /// Parameter was set multiple times in the builder.
    DuplicateParameter {
        /// Name of the parameter that was set multiple times.
        parameter: &'static str,
    },
}

// ============================================================================
// Display Implementation
// ============================================================================

impl Display for SortError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::EmptyInput => write!(f, "Please enter some numbers separated by commas"),
            Self::TooFewElements { got, min } => {
                write!(f, "Please enter at least {min} numbers (got {got})")
            }
            Self::InvalidDelay(delay) => {
                write!(f, "Invalid delay: {delay} (must be >= 0 and finite)")
            }
            Self::InvalidRange { range, min, max } => {
                write!(f, "Invalid {range} range: [{min}, {max}] (min must not exceed max)")
            }
            Self::UnknownAlgorithm(name) => write!(
                f,
                "Unknown algorithm: '{name}' (expected bubble, selection, insertion, quick or merge)"
            ),
            Self::SortInProgress => write!(f, "A sort is already in progress"),
            Self::NoInput => write!(f, "No array has been set"),
            Self::DuplicateParameter { parameter } => {
                write!(
                    f,
                    "Parameter '{parameter}' was set multiple times. Each parameter can only be configured once."
                )
            }
        }
    }
}

// ============================================================================
// Standard Error Trait
// ============================================================================

#[cfg(feature = "std")]
impl Error for SortError {}
