//! Sort orchestrator.
//!
//! ## Purpose
//!
//! This module runs one algorithm to completion over a copy of the caller's
//! array and collects the result. It is the single entry point the adapters
//! use, so every run goes through the same reset, dispatch and packaging.
//!
//! ## Design notes
//!
//! * **Run-scoped**: State lives in a [`RunContext`] created or reset per run;
//!   there is no global array, counter or in-flight flag here.
//! * **Permissive selection**: An unrecognised algorithm name is a silent
//!   no-op (`None`), never an error.
//! * **Single-flight**: Gating concurrent runs is the caller's job
//!   (see the session adapter).
//!
//! ## Invariants
//!
//! * The caller's input slice is never mutated.
//! * The recorder is empty when dispatch begins.
//!
//! ## Non-goals
//!
//! * This module does not validate input sizes (handled by `validator`).
//! * This module does not pace or render steps.

// Internal dependencies
use crate::algorithms::bubble::bubble_sort;
use crate::algorithms::insertion::insertion_sort;
use crate::algorithms::merge::merge_sort;
use crate::algorithms::quick::quick_sort;
use crate::algorithms::selection::selection_sort;
use crate::algorithms::{Algorithm, BubbleMode};
use crate::engine::output::RunResult;
use crate::primitives::context::RunContext;
use crate::primitives::step::StepValue;

// ============================================================================
// Configuration
// ============================================================================

/// Per-run algorithm options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SortConfig {
    /// Pass policy for bubble sort (default: Classic).
    pub bubble_mode: BubbleMode,
}

// ============================================================================
// Executor
// ============================================================================

/// Orchestrates a single sort run.
pub struct SortExecutor;

impl SortExecutor {
    /// Sort a copy of `input` with `algorithm` and return the full result.
    pub fn run<T: StepValue>(input: &[T], algorithm: Algorithm, config: &SortConfig) -> RunResult<T> {
        let mut ctx = RunContext::new(input);
        Self::execute(&mut ctx, input, algorithm, config);

        let (sorted, steps) = ctx.finish();
        RunResult {
            algorithm,
            input: input.to_vec(),
            sorted,
            steps,
            notice: None,
        }
    }

    /// Like [`run`](Self::run), selecting the algorithm by identifier.
    ///
    /// Returns `None` without doing anything for an unrecognised identifier.
    pub fn run_by_name<T: StepValue>(
        input: &[T],
        name: &str,
        config: &SortConfig,
    ) -> Option<RunResult<T>> {
        match Algorithm::from_name(name) {
            Some(algorithm) => Some(Self::run(input, algorithm, config)),
            None => {
                #[cfg(feature = "tracing")]
                tracing::debug!(name, "ignoring unknown algorithm");
                None
            }
        }
    }

    /// Reset `ctx` to a copy of `input` and sort it in place.
    pub fn execute<T: StepValue>(
        ctx: &mut RunContext<T>,
        input: &[T],
        algorithm: Algorithm,
        config: &SortConfig,
    ) {
        ctx.reset(input);

        #[cfg(feature = "tracing")]
        tracing::debug!(algorithm = algorithm.name(), len = input.len(), "sort run started");

        match algorithm {
            Algorithm::Bubble => bubble_sort(ctx, config.bubble_mode),
            Algorithm::Selection => selection_sort(ctx),
            Algorithm::Insertion => insertion_sort(ctx),
            Algorithm::Quick => quick_sort(ctx),
            Algorithm::Merge => merge_sort(ctx),
        }

        #[cfg(feature = "tracing")]
        tracing::debug!(
            algorithm = algorithm.name(),
            steps = ctx.recorder.len(),
            "sort run finished"
        );
    }
}
