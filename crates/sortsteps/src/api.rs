//! High-level API for step-by-step sorting.
//!
//! ## Purpose
//!
//! This module provides the primary user-facing entry point. It implements a
//! fluent builder for choosing an algorithm and pacing, then an execution
//! adapter (Batch, Streaming, or Session).
//!
//! ## Design notes
//!
//! * **Ergonomic**: Fluent builder with sensible defaults for all parameters.
//! * **Polymorphic**: Uses marker types to transition to specialized adapter builders.
//! * **Validated**: Parameters are validated when `.build()` is called on the adapter.
//! * **Type-Safe**: Generic over `Float` types for flexible precision.
//!
//! ### Configuration Flow
//!
//! 1. Create a [`SortVisualizerBuilder`] via `SortVisualizer::new()`.
//! 2. Chain configuration methods (`.algorithm()`, `.delay()`, etc.).
//! 3. Select an adapter via `.adapter(Adapter::Batch)` to get an execution builder.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::marker::PhantomData;
use core::time::Duration;

// Internal dependencies
use crate::adapters::batch::BatchSortBuilder;
use crate::adapters::session::SessionSortBuilder;
use crate::adapters::streaming::StreamingSortBuilder;
use crate::engine::validator::Validator;
use crate::primitives::random::SimpleRng;

// Publicly re-exported types
pub use crate::adapters::batch::BatchSorter;
pub use crate::adapters::session::SortSession;
pub use crate::adapters::streaming::{DEFAULT_DELAY, Playback, StreamingSorter};
pub use crate::algorithms::{Algorithm, BubbleMode};
pub use crate::engine::output::{Notice, ParsedInput, RunResult};
pub use crate::engine::validator::{MAX_ELEMENTS, MIN_ELEMENTS};
pub use crate::primitives::errors::SortError;
pub use crate::primitives::random::RandomSpec;
pub use crate::primitives::step::{Step, StepKind, StepValue};

/// Marker types for selecting execution adapters.
#[allow(non_snake_case)]
pub mod Adapter {
    pub use super::{Batch, Session, Streaming};
}

// ============================================================================
// Free Functions
// ============================================================================

/// Parse comma-separated text into a validated array (2 to 12 elements).
pub fn parse_input<T: StepValue>(raw: &str) -> Result<ParsedInput<T>, SortError> {
    Validator::parse_input(raw)
}

/// Draw a reproducible random array within `spec`.
pub fn random_sequence<T: StepValue>(spec: &RandomSpec, seed: u64) -> Result<Vec<T>, SortError> {
    Validator::validate_random_spec(spec)?;
    let mut rng = SimpleRng::new(seed);
    Ok(crate::primitives::random::random_sequence(spec, &mut rng))
}

// ============================================================================
// Builder
// ============================================================================

/// Fluent builder for configuring runs and execution modes.
#[derive(Debug, Clone)]
pub struct SortVisualizerBuilder<T> {
    /// Algorithm to run.
    pub algorithm: Option<Algorithm>,

    /// Bubble sort pass policy.
    pub bubble_mode: Option<BubbleMode>,

    /// Pause between released steps (Streaming and Session).
    pub delay: Option<Duration>,

    /// Seed for random arrays (Session only).
    pub seed: Option<u64>,

    /// Bounds for random arrays (Session only).
    pub random_spec: Option<RandomSpec>,

    /// First error raised by a setter, reported at build time.
    #[doc(hidden)]
    pub deferred_error: Option<SortError>,

    /// Tracks if any parameter was set multiple times (for validation).
    #[doc(hidden)]
    pub duplicate_param: Option<&'static str>,

    _marker: PhantomData<T>,
}

impl<T: StepValue> Default for SortVisualizerBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: StepValue> SortVisualizerBuilder<T> {
    /// Select an execution adapter to transition to an execution builder.
    pub fn adapter<A>(self, _adapter: A) -> A::Output
    where
        A: SortAdapter<T>,
    {
        A::convert(self)
    }

    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            algorithm: None,
            bubble_mode: None,
            delay: None,
            seed: None,
            random_spec: None,
            deferred_error: None,
            duplicate_param: None,
            _marker: PhantomData,
        }
    }

    /// Set the algorithm.
    pub fn algorithm(mut self, algorithm: Algorithm) -> Self {
        if self.algorithm.is_some() {
            self.duplicate_param = Some("algorithm");
        }
        self.algorithm = Some(algorithm);
        self
    }

    /// Set the algorithm by selector identifier; unknown names fail at build time.
    pub fn algorithm_name(self, name: &str) -> Self {
        match name.parse::<Algorithm>() {
            Ok(algorithm) => self.algorithm(algorithm),
            Err(err) => self.defer(err),
        }
    }

    /// Set the bubble sort pass policy.
    pub fn bubble_mode(mut self, mode: BubbleMode) -> Self {
        if self.bubble_mode.is_some() {
            self.duplicate_param = Some("bubble_mode");
        }
        self.bubble_mode = Some(mode);
        self
    }

    /// Set the pause between released steps.
    pub fn delay(mut self, delay: Duration) -> Self {
        if self.delay.is_some() {
            self.duplicate_param = Some("delay");
        }
        self.delay = Some(delay);
        self
    }

    /// Set the pause in milliseconds; negative or non-finite values fail at build time.
    pub fn delay_ms(self, ms: f64) -> Self {
        match Validator::validate_delay_ms(ms) {
            Ok(delay) => self.delay(delay),
            Err(err) => self.defer(err),
        }
    }

    /// Seed the random array generator.
    pub fn seed(mut self, seed: u64) -> Self {
        if self.seed.is_some() {
            self.duplicate_param = Some("seed");
        }
        self.seed = Some(seed);
        self
    }

    /// Set the bounds for random arrays.
    pub fn random_spec(mut self, spec: RandomSpec) -> Self {
        if self.random_spec.is_some() {
            self.duplicate_param = Some("random_spec");
        }
        self.random_spec = Some(spec);
        self
    }

    fn defer(mut self, err: SortError) -> Self {
        if self.deferred_error.is_none() {
            self.deferred_error = Some(err);
        }
        self
    }
}

/// Trait for transitioning from a generic builder to an execution builder.
pub trait SortAdapter<T: StepValue> {
    /// The output execution builder.
    type Output;

    /// Convert a generic [`SortVisualizerBuilder`] into a specialized execution builder.
    fn convert(builder: SortVisualizerBuilder<T>) -> Self::Output;
}

/// Marker for eager, whole-log sorting.
#[derive(Debug, Clone, Copy)]
pub struct Batch;

impl<T: StepValue> SortAdapter<T> for Batch {
    type Output = BatchSortBuilder<T>;

    fn convert(builder: SortVisualizerBuilder<T>) -> Self::Output {
        let mut result = BatchSortBuilder::default();

        if let Some(algorithm) = builder.algorithm {
            result.algorithm = algorithm;
        }
        if let Some(mode) = builder.bubble_mode {
            result.bubble_mode = mode;
        }

        result.deferred_error = builder.deferred_error;
        result.duplicate_param = builder.duplicate_param;

        result
    }
}

/// Marker for host-paced playback.
#[derive(Debug, Clone, Copy)]
pub struct Streaming;

impl<T: StepValue> SortAdapter<T> for Streaming {
    type Output = StreamingSortBuilder<T>;

    fn convert(builder: SortVisualizerBuilder<T>) -> Self::Output {
        let mut result = StreamingSortBuilder::default();

        if let Some(algorithm) = builder.algorithm {
            result.algorithm = algorithm;
        }
        if let Some(mode) = builder.bubble_mode {
            result.bubble_mode = mode;
        }
        if let Some(delay) = builder.delay {
            result.delay = delay;
        }

        result.deferred_error = builder.deferred_error;
        result.duplicate_param = builder.duplicate_param;

        result
    }
}

/// Marker for a stateful visualizer session.
#[derive(Debug, Clone, Copy)]
pub struct Session;

impl<T: StepValue> SortAdapter<T> for Session {
    type Output = SessionSortBuilder<T>;

    fn convert(builder: SortVisualizerBuilder<T>) -> Self::Output {
        let mut result = SessionSortBuilder::default();

        if let Some(algorithm) = builder.algorithm {
            result.algorithm = algorithm;
        }
        if let Some(mode) = builder.bubble_mode {
            result.bubble_mode = mode;
        }
        if let Some(delay) = builder.delay {
            result.delay = delay;
        }
        if let Some(spec) = builder.random_spec {
            result.random_spec = spec;
        }
        result.seed = builder.seed;

        result.deferred_error = builder.deferred_error;
        result.duplicate_param = builder.duplicate_param;

        result
    }
}
