//! Batch adapter for eager sorting.
//!
//! ## Purpose
//!
//! This module provides the batch execution adapter: validate the input,
//! run the selected algorithm to completion, and hand back the final array
//! together with the complete step log.
//!
//! ## Design notes
//!
//! * **Processing**: The whole run happens inside one call.
//! * **Validation**: Applies the 2..=12 size rules; truncation is reported as
//!   a notice on the result.
//! * **Delegation**: Delegates the run to the execution engine.
//! * **Generics**: Generic over `Float` types.
//!
//! ## Invariants
//!
//! * The caller's array is never mutated.
//! * The result's step log is complete when returned.
//!
//! ## Non-goals
//!
//! * This adapter does not pace steps (use the streaming adapter).
//! * This adapter does not keep state between calls (use the session adapter).

// External dependencies
use core::marker::PhantomData;

// Internal dependencies
use crate::algorithms::{Algorithm, BubbleMode};
use crate::engine::executor::{SortConfig, SortExecutor};
use crate::engine::output::RunResult;
use crate::engine::validator::Validator;
use crate::primitives::errors::SortError;
use crate::primitives::step::StepValue;

// ============================================================================
// Batch Sort Builder
// ============================================================================

/// Builder for the batch sorter.
#[derive(Debug, Clone)]
pub struct BatchSortBuilder<T> {
    /// Algorithm used by [`BatchSorter::sort`].
    pub algorithm: Algorithm,

    /// Bubble sort pass policy.
    pub bubble_mode: BubbleMode,

    /// Deferred error from adapter conversion
    pub deferred_error: Option<SortError>,

    /// Tracks if any parameter was set multiple times (for validation)
    #[doc(hidden)]
    pub(crate) duplicate_param: Option<&'static str>,

    _marker: PhantomData<T>,
}

impl<T: StepValue> Default for BatchSortBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: StepValue> BatchSortBuilder<T> {
    /// Create a new batch builder with default parameters.
    fn new() -> Self {
        Self {
            algorithm: Algorithm::default(),
            bubble_mode: BubbleMode::default(),
            deferred_error: None,
            duplicate_param: None,
            _marker: PhantomData,
        }
    }

    /// Set the algorithm.
    pub fn algorithm(mut self, algorithm: Algorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    /// Set the bubble sort pass policy.
    pub fn bubble_mode(mut self, mode: BubbleMode) -> Self {
        self.bubble_mode = mode;
        self
    }

    /// Build the batch sorter.
    pub fn build(self) -> Result<BatchSorter<T>, SortError> {
        if let Some(err) = self.deferred_error {
            return Err(err);
        }
        Validator::validate_no_duplicates(self.duplicate_param)?;

        Ok(BatchSorter {
            algorithm: self.algorithm,
            config: SortConfig {
                bubble_mode: self.bubble_mode,
            },
            _marker: PhantomData,
        })
    }
}

// ============================================================================
// Batch Sorter
// ============================================================================

/// Eager sorter returning complete step logs.
#[derive(Debug, Clone)]
pub struct BatchSorter<T> {
    algorithm: Algorithm,
    config: SortConfig,
    _marker: PhantomData<T>,
}

impl<T: StepValue> BatchSorter<T> {
    /// Algorithm used by [`sort`](Self::sort).
    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    /// Validate and sort `values` with the configured algorithm.
    pub fn sort(&self, values: &[T]) -> Result<RunResult<T>, SortError> {
        self.sort_with(values, self.algorithm)
    }

    /// Validate and sort `values` with an explicit algorithm.
    pub fn sort_with(&self, values: &[T], algorithm: Algorithm) -> Result<RunResult<T>, SortError> {
        let parsed = Validator::validate_values(values.to_vec())?;
        let mut result = SortExecutor::run(&parsed.values, algorithm, &self.config);
        result.notice = parsed.notice;
        Ok(result)
    }

    /// Parse comma-separated text and sort it with the configured algorithm.
    pub fn sort_text(&self, raw: &str) -> Result<RunResult<T>, SortError> {
        let parsed = Validator::parse_input::<T>(raw)?;
        let mut result = SortExecutor::run(&parsed.values, self.algorithm, &self.config);
        result.notice = parsed.notice;
        Ok(result)
    }

    /// Sort with an algorithm chosen by identifier.
    ///
    /// An unrecognised identifier is a no-op and yields `Ok(None)`.
    pub fn sort_by_name(&self, values: &[T], name: &str) -> Result<Option<RunResult<T>>, SortError> {
        let parsed = Validator::validate_values(values.to_vec())?;
        Ok(
            SortExecutor::run_by_name(&parsed.values, name, &self.config).map(|mut result| {
                result.notice = parsed.notice;
                result
            }),
        )
    }
}
