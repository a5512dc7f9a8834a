//! Session adapter: the stateful core behind an interactive visualizer.
//!
//! ## Purpose
//!
//! This module provides [`SortSession`], which owns everything a visualizer
//! page keeps between clicks: the current array, the selected algorithm, the
//! playback speed, a seeded generator for random arrays, and the playback of
//! the run in flight.
//!
//! ## Design notes
//!
//! * **Single-flight**: While a playback is unfinished, every entry point
//!   (set array, randomize, reset, start) returns
//!   [`SortError::SortInProgress`] and changes nothing.
//! * **Unconditional release**: "In flight" is derived from the playback
//!   itself, so the gate opens as soon as the playback drains, is skipped to
//!   the end, or is cancelled. There is no separate flag to leak.
//! * **Original preserved**: Runs sort a copy; the session's array keeps the
//!   user's order for redisplay.
//!
//! ## Invariants
//!
//! * A rejected entry point leaves the session exactly as it was.
//! * The stored array, when present, has 2 to 12 elements.
//!
//! ## Non-goals
//!
//! * This adapter does not render boxes, arrows or dialogs.
//! * This adapter does not run more than one playback at a time.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::marker::PhantomData;
use core::time::Duration;

// Internal dependencies
use crate::adapters::streaming::{DEFAULT_DELAY, Playback};
use crate::algorithms::{Algorithm, BubbleMode};
use crate::engine::executor::{SortConfig, SortExecutor};
use crate::engine::output::{Notice, RunResult};
use crate::engine::validator::Validator;
use crate::primitives::errors::SortError;
use crate::primitives::random::{RandomSpec, SimpleRng, random_sequence};
use crate::primitives::step::{Step, StepValue};

// ============================================================================
// Session Builder
// ============================================================================

/// Builder for a visualizer session.
#[derive(Debug, Clone)]
pub struct SessionSortBuilder<T> {
    /// Algorithm selected initially.
    pub algorithm: Algorithm,

    /// Bubble sort pass policy.
    pub bubble_mode: BubbleMode,

    /// Pause between released steps.
    pub delay: Duration,

    /// Seed for random arrays (`None` = derived at build time).
    pub seed: Option<u64>,

    /// Bounds for random arrays.
    pub random_spec: RandomSpec,

    /// Deferred error from adapter conversion
    pub deferred_error: Option<SortError>,

    /// Tracks if any parameter was set multiple times (for validation)
    #[doc(hidden)]
    pub(crate) duplicate_param: Option<&'static str>,

    _marker: PhantomData<T>,
}

impl<T: StepValue> Default for SessionSortBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: StepValue> SessionSortBuilder<T> {
    /// Create a new session builder with default parameters.
    fn new() -> Self {
        Self {
            algorithm: Algorithm::default(),
            bubble_mode: BubbleMode::default(),
            delay: DEFAULT_DELAY,
            seed: None,
            random_spec: RandomSpec::default(),
            deferred_error: None,
            duplicate_param: None,
            _marker: PhantomData,
        }
    }

    /// Set the initially selected algorithm.
    pub fn algorithm(mut self, algorithm: Algorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    /// Set the pause between released steps.
    pub fn delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Seed the random array generator.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the bounds for random arrays.
    pub fn random_spec(mut self, spec: RandomSpec) -> Self {
        self.random_spec = spec;
        self
    }

    /// Build the session.
    pub fn build(self) -> Result<SortSession<T>, SortError> {
        if let Some(err) = self.deferred_error {
            return Err(err);
        }
        Validator::validate_no_duplicates(self.duplicate_param)?;
        Validator::validate_random_spec(&self.random_spec)?;

        let seed = self.seed.unwrap_or_else(default_seed);

        Ok(SortSession {
            array: None,
            notice: None,
            algorithm: self.algorithm,
            config: SortConfig {
                bubble_mode: self.bubble_mode,
            },
            delay: self.delay,
            random_spec: self.random_spec,
            rng: SimpleRng::new(seed),
            playback: None,
        })
    }
}

#[cfg(feature = "std")]
fn default_seed() -> u64 {
    use std::time::{SystemTime, UNIX_EPOCH};

    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0x5EED)
}

#[cfg(not(feature = "std"))]
fn default_seed() -> u64 {
    0x5EED
}

// ============================================================================
// Session
// ============================================================================

/// Stateful visualizer core with single-flight run gating.
#[derive(Debug, Clone)]
pub struct SortSession<T> {
    array: Option<Vec<T>>,
    notice: Option<Notice>,
    algorithm: Algorithm,
    config: SortConfig,
    delay: Duration,
    random_spec: RandomSpec,
    rng: SimpleRng,
    playback: Option<Playback<T>>,
}

impl<T: StepValue> SortSession<T> {
    // ========================================================================
    // Gating
    // ========================================================================

    /// Whether a run is in flight.
    pub fn is_sorting(&self) -> bool {
        self.playback.as_ref().is_some_and(|p| !p.is_finished())
    }

    fn ensure_idle(&self, _action: &'static str) -> Result<(), SortError> {
        if self.is_sorting() {
            #[cfg(feature = "tracing")]
            tracing::warn!(action = _action, "rejected while a sort is in progress");
            return Err(SortError::SortInProgress);
        }
        Ok(())
    }

    // ========================================================================
    // Input
    // ========================================================================

    /// Parse comma-separated text and make it the current array.
    pub fn set_input(&mut self, raw: &str) -> Result<&[T], SortError> {
        self.ensure_idle("set_input")?;
        let parsed = Validator::parse_input::<T>(raw)?;
        Ok(self.install(parsed.values, parsed.notice))
    }

    /// Make a numeric array the current array.
    pub fn set_values(&mut self, values: &[T]) -> Result<&[T], SortError> {
        self.ensure_idle("set_values")?;
        let parsed = Validator::validate_values(values.to_vec())?;
        Ok(self.install(parsed.values, parsed.notice))
    }

    /// Replace the current array with a random one.
    pub fn randomize(&mut self) -> Result<&[T], SortError> {
        self.ensure_idle("randomize")?;
        let values = random_sequence(&self.random_spec, &mut self.rng);
        Ok(self.install(values, None))
    }

    /// Forget the array and any finished run.
    pub fn reset(&mut self) -> Result<(), SortError> {
        self.ensure_idle("reset")?;
        self.array = None;
        self.notice = None;
        self.playback = None;
        Ok(())
    }

    fn install(&mut self, values: Vec<T>, notice: Option<Notice>) -> &[T] {
        self.notice = notice;
        self.playback = None;
        self.array.insert(values).as_slice()
    }

    // ========================================================================
    // Runs
    // ========================================================================

    /// Select the algorithm for the next run.
    pub fn select(&mut self, algorithm: Algorithm) -> Result<(), SortError> {
        self.ensure_idle("select")?;
        self.algorithm = algorithm;
        Ok(())
    }

    /// Start a run with the algorithm named `name`.
    ///
    /// Returns `Ok(false)` and does nothing for an unrecognised name.
    pub fn start(&mut self, name: &str) -> Result<bool, SortError> {
        self.ensure_idle("start")?;
        match Algorithm::from_name(name) {
            Some(algorithm) => self.start_with(algorithm).map(|_| true),
            None => Ok(false),
        }
    }

    /// Start a run with `algorithm`.
    pub fn start_with(&mut self, algorithm: Algorithm) -> Result<(), SortError> {
        self.ensure_idle("start")?;
        let array = self.array.as_deref().ok_or(SortError::NoInput)?;

        let mut result = SortExecutor::run(array, algorithm, &self.config);
        result.notice = self.notice;

        #[cfg(feature = "tracing")]
        tracing::info!(
            algorithm = algorithm.name(),
            steps = result.steps.len(),
            "playback started"
        );

        self.algorithm = algorithm;
        self.playback = Some(Playback::new(result, self.delay));
        Ok(())
    }

    /// Start a run with the selected algorithm.
    pub fn start_selected(&mut self) -> Result<(), SortError> {
        self.start_with(self.algorithm)
    }

    /// Advance host time and return the steps that came due.
    pub fn advance(&mut self, elapsed: Duration) -> Vec<Step<T>> {
        self.playback
            .as_mut()
            .map(|p| p.advance(elapsed))
            .unwrap_or_default()
    }

    /// Time until the next step is due, or `None` when nothing is playing.
    pub fn time_until_next(&self) -> Option<Duration> {
        self.playback.as_ref().and_then(Playback::time_until_next)
    }

    /// Release every remaining step of the run in flight.
    pub fn skip_to_end(&mut self) -> Vec<Step<T>> {
        self.playback
            .as_mut()
            .map(Playback::skip_to_end)
            .unwrap_or_default()
    }

    /// Abandon the run in flight; the session becomes idle.
    pub fn cancel(&mut self) {
        if let Some(p) = self.playback.as_mut() {
            p.cancel();
        }
    }

    // ========================================================================
    // Speed
    // ========================================================================

    /// Pause between released steps.
    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Change the pause; also applies to the run in flight.
    pub fn set_delay(&mut self, delay: Duration) {
        self.delay = delay;
        if let Some(p) = self.playback.as_mut() {
            p.set_delay(delay);
        }
    }

    /// Change the pause from a millisecond value (e.g. a slider).
    pub fn set_delay_ms(&mut self, ms: f64) -> Result<(), SortError> {
        let delay = Validator::validate_delay_ms(ms)?;
        self.set_delay(delay);
        Ok(())
    }

    // ========================================================================
    // Query Methods
    // ========================================================================

    /// Current array in the user's order.
    pub fn array(&self) -> Option<&[T]> {
        self.array.as_deref()
    }

    /// Notice raised when the current array was set.
    pub fn notice(&self) -> Option<Notice> {
        self.notice
    }

    /// Selected algorithm.
    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    /// Playback of the current or most recent run.
    pub fn playback(&self) -> Option<&Playback<T>> {
        self.playback.as_ref()
    }

    /// Result of the most recent run, once every step was released.
    pub fn last_result(&self) -> Option<&RunResult<T>> {
        self.playback
            .as_ref()
            .filter(|p| p.is_complete())
            .map(Playback::result)
    }
}
