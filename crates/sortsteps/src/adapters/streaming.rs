//! Streaming adapter for paced step playback.
//!
//! ## Purpose
//!
//! This module provides the streaming execution adapter. Instead of handing
//! the whole log to the caller, it wraps a completed run in a [`Playback`]
//! that releases steps one at a time as host-driven time advances, the way
//! an animation shows one step, waits, then shows the next.
//!
//! ## Design notes
//!
//! * **Host-driven**: No threads, no sleeping, no clock reads. The host
//!   reports elapsed time through [`Playback::advance`].
//! * **Deterministic**: The run completes before playback starts; pacing
//!   never influences which steps are produced.
//! * **Restartable**: A playback can be rewound and replayed any number of times.
//!
//! ## Key concepts
//!
//! * **Delay**: Time between two consecutive releases (default 300 ms).
//!   The first step is due immediately.
//! * **Cancellation**: [`Playback::cancel`] stops a playback at the current
//!   step; it then reports finished.
//!
//! ## Invariants
//!
//! * Steps are released in sequence order, each exactly once per playthrough.
//! * A zero delay releases every remaining step on the next advance.
//!
//! ## Non-goals
//!
//! * This adapter does not render steps or sleep.
//! * This adapter does not gate concurrent runs (use the session adapter).

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::marker::PhantomData;
use core::time::Duration;

// Internal dependencies
use crate::algorithms::{Algorithm, BubbleMode};
use crate::engine::executor::{SortConfig, SortExecutor};
use crate::engine::output::RunResult;
use crate::engine::validator::Validator;
use crate::primitives::errors::SortError;
use crate::primitives::step::{Step, StepValue};

/// Pause between two released steps unless configured otherwise.
pub const DEFAULT_DELAY: Duration = Duration::from_millis(300);

// ============================================================================
// Streaming Sort Builder
// ============================================================================

/// Builder for the streaming sorter.
#[derive(Debug, Clone)]
pub struct StreamingSortBuilder<T> {
    /// Algorithm used by [`StreamingSorter::play`].
    pub algorithm: Algorithm,

    /// Bubble sort pass policy.
    pub bubble_mode: BubbleMode,

    /// Pause between released steps.
    pub delay: Duration,

    /// Deferred error from adapter conversion
    pub deferred_error: Option<SortError>,

    /// Tracks if any parameter was set multiple times (for validation)
    #[doc(hidden)]
    pub(crate) duplicate_param: Option<&'static str>,

    _marker: PhantomData<T>,
}

impl<T: StepValue> Default for StreamingSortBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: StepValue> StreamingSortBuilder<T> {
    /// Create a new streaming builder with default parameters.
    fn new() -> Self {
        Self {
            algorithm: Algorithm::default(),
            bubble_mode: BubbleMode::default(),
            delay: DEFAULT_DELAY,
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

    /// Set the pause between released steps.
    pub fn delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Build the streaming sorter.
    pub fn build(self) -> Result<StreamingSorter<T>, SortError> {
        if let Some(err) = self.deferred_error {
            return Err(err);
        }
        Validator::validate_no_duplicates(self.duplicate_param)?;

        Ok(StreamingSorter {
            algorithm: self.algorithm,
            config: SortConfig {
                bubble_mode: self.bubble_mode,
            },
            delay: self.delay,
            _marker: PhantomData,
        })
    }
}

// ============================================================================
// Streaming Sorter
// ============================================================================

/// Produces paced playbacks of sort runs.
#[derive(Debug, Clone)]
pub struct StreamingSorter<T> {
    algorithm: Algorithm,
    config: SortConfig,
    delay: Duration,
    _marker: PhantomData<T>,
}

impl<T: StepValue> StreamingSorter<T> {
    /// Pause between released steps.
    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Validate `values`, sort them, and return a playback of the run.
    pub fn play(&self, values: &[T]) -> Result<Playback<T>, SortError> {
        self.play_with(values, self.algorithm)
    }

    /// Like [`play`](Self::play) with an explicit algorithm.
    pub fn play_with(&self, values: &[T], algorithm: Algorithm) -> Result<Playback<T>, SortError> {
        let parsed = Validator::validate_values(values.to_vec())?;
        let mut result = SortExecutor::run(&parsed.values, algorithm, &self.config);
        result.notice = parsed.notice;
        Ok(Playback::new(result, self.delay))
    }

    /// Parse comma-separated text and return a playback of its run.
    pub fn play_text(&self, raw: &str) -> Result<Playback<T>, SortError> {
        let parsed = Validator::parse_input::<T>(raw)?;
        let mut result = SortExecutor::run(&parsed.values, self.algorithm, &self.config);
        result.notice = parsed.notice;
        Ok(Playback::new(result, self.delay))
    }
}

// ============================================================================
// Playback
// ============================================================================

/// Host-paced, restartable sequence of the steps of one run.
#[derive(Debug, Clone)]
pub struct Playback<T> {
    result: RunResult<T>,
    cursor: usize,
    delay: Duration,
    clock: Duration,
    last_release: Option<Duration>,
    cancelled: bool,
}

impl<T: StepValue> Playback<T> {
    /// Wrap a completed run.
    pub fn new(result: RunResult<T>, delay: Duration) -> Self {
        Self {
            result,
            cursor: 0,
            delay,
            clock: Duration::ZERO,
            last_release: None,
            cancelled: false,
        }
    }

    // ========================================================================
    // Pacing
    // ========================================================================

    /// Pause between released steps.
    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Change the pause; applies from the most recently released step on.
    pub fn set_delay(&mut self, delay: Duration) {
        self.delay = delay;
    }

    /// Advance host time by `elapsed` and return every step that came due.
    pub fn advance(&mut self, elapsed: Duration) -> Vec<Step<T>> {
        let mut released = Vec::new();
        if self.is_finished() {
            return released;
        }

        self.clock = self.clock.saturating_add(elapsed);
        while self.cursor < self.result.steps.len() {
            let due = self.next_due();
            if self.clock < due {
                break;
            }
            released.push(self.result.steps[self.cursor].clone());
            self.cursor += 1;
            self.last_release = Some(due);
        }
        released
    }

    /// Release whatever is due without advancing time.
    pub fn poll(&mut self) -> Vec<Step<T>> {
        self.advance(Duration::ZERO)
    }

    /// Time until the next step is due, or `None` when finished.
    pub fn time_until_next(&self) -> Option<Duration> {
        if self.is_finished() {
            None
        } else {
            Some(self.next_due().saturating_sub(self.clock))
        }
    }

    fn next_due(&self) -> Duration {
        self.last_release
            .map_or(Duration::ZERO, |t| t.saturating_add(self.delay))
    }

    // ========================================================================
    // Control
    // ========================================================================

    /// Rewind to the first step.
    pub fn restart(&mut self) {
        self.cursor = 0;
        self.clock = Duration::ZERO;
        self.last_release = None;
        self.cancelled = false;
    }

    /// Release every remaining step at once.
    pub fn skip_to_end(&mut self) -> Vec<Step<T>> {
        if self.is_finished() {
            return Vec::new();
        }
        let remaining = self.result.steps[self.cursor..].to_vec();
        self.cursor = self.result.steps.len();
        self.last_release = Some(self.clock);
        remaining
    }

    /// Stop playback at the current step.
    pub fn cancel(&mut self) {
        self.cancelled = true;
    }

    // ========================================================================
    // Query Methods
    // ========================================================================

    /// Whether playback was cancelled.
    pub fn is_cancelled(&self) -> bool {
        self.cancelled
    }

    /// Whether no further steps will be released.
    pub fn is_finished(&self) -> bool {
        self.cancelled || self.cursor >= self.result.steps.len()
    }

    /// Whether every step was released without cancellation.
    pub fn is_complete(&self) -> bool {
        !self.cancelled && self.cursor >= self.result.steps.len()
    }

    /// Steps released so far.
    pub fn released(&self) -> &[Step<T>] {
        &self.result.steps[..self.cursor]
    }

    /// Most recently released step.
    pub fn current(&self) -> Option<&Step<T>> {
        self.released().last()
    }

    /// Released and total step counts.
    pub fn progress(&self) -> (usize, usize) {
        (self.cursor, self.result.steps.len())
    }

    /// Time from the first release to the last one at the current delay.
    pub fn total_duration(&self) -> Duration {
        let gaps = self.result.steps.len().saturating_sub(1);
        self.delay
            .saturating_mul(u32::try_from(gaps).unwrap_or(u32::MAX))
    }

    /// The underlying run.
    pub fn result(&self) -> &RunResult<T> {
        &self.result
    }

    /// Consume the playback and return the run.
    pub fn into_result(self) -> RunResult<T> {
        self.result
    }
}

impl<T: StepValue> Iterator for Playback<T> {
    type Item = Step<T>;

    /// Release the next step immediately, ignoring the delay.
    fn next(&mut self) -> Option<Self::Item> {
        if self.is_finished() {
            return None;
        }
        let step = self.result.steps[self.cursor].clone();
        self.cursor += 1;
        self.last_release = Some(self.clock);
        Some(step)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = if self.is_finished() {
            0
        } else {
            self.result.steps.len() - self.cursor
        };
        (remaining, Some(remaining))
    }
}
