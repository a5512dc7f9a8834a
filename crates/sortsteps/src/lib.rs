//! # sortsteps: step-by-step sorting for visualizers
//!
//! Runs the classic teaching sorts (bubble, selection, insertion, quick and
//! merge) over a small array of numbers and records every notable event as a
//! self-contained [`Step`](prelude::Step): the kind of operation, the indices
//! involved, and a snapshot of the array afterwards. A presentation layer
//! replays the log to draw boxes and arrows; this crate never renders.
//!
//! ## Quick Start
//!
//! ### Typical Use
//!
//! ```rust
//! use sortsteps::prelude::*;
//!
//! let sorter = SortVisualizer::<f64>::new()
//!     .algorithm(Bubble)
//!     .adapter(Batch)
//!     .build()?;
//!
//! let result = sorter.sort(&[5.0, 3.0, 8.0, 1.0])?;
//!
//! assert_eq!(result.sorted, vec![1.0, 3.0, 5.0, 8.0]);
//! println!("{}", result);
//! # Result::<(), SortError>::Ok(())
//! ```
//!
//! ```text
//! Algorithm: Bubble Sort
//! Initial Array: 5, 3, 8, 1
//! Step 1: Compared 5 and 3 → [5], [3], 8, 1
//! Step 2: Swapped 5 and 3 → [3], [5], 8, 1
//! ...
//! Sorting completed! Final sorted array: 1, 3, 5, 8
//! ```
//!
//! ### Parsing Text Input
//!
//! Text is split on commas and each token is coerced the way a browser's
//! `Number()` does it; unparseable tokens become `0`. Fewer than two numbers
//! is an error, more than twelve are truncated with a [`Notice`](prelude::Notice).
//!
//! ```rust
//! use sortsteps::prelude::*;
//!
//! let parsed = parse_input::<f64>("4, 2, 0x10, Infinity")?;
//! assert_eq!(parsed.values, vec![4.0, 2.0, 16.0, f64::INFINITY]);
//! assert!(parsed.notice.is_none());
//!
//! assert_eq!(parse_input::<f64>("5"), Err(SortError::TooFewElements { got: 1, min: 2 }));
//! # Result::<(), SortError>::Ok(())
//! ```
//!
//! ### Paced Playback
//!
//! The streaming adapter wraps a finished run in a [`Playback`](prelude::Playback)
//! that releases steps as the host reports elapsed time.
//!
//! ```rust
//! use core::time::Duration;
//! use sortsteps::prelude::*;
//!
//! let sorter = SortVisualizer::<f64>::new()
//!     .algorithm(Insertion)
//!     .delay(Duration::from_millis(100))
//!     .adapter(Streaming)
//!     .build()?;
//!
//! let mut playback = sorter.play(&[3.0, 1.0, 2.0])?;
//! assert_eq!(playback.advance(Duration::ZERO).len(), 1);
//! assert_eq!(playback.advance(Duration::from_millis(100)).len(), 1);
//!
//! playback.skip_to_end();
//! assert!(playback.is_complete());
//! # Result::<(), SortError>::Ok(())
//! ```
//!
//! ### Sessions
//!
//! A [`SortSession`](prelude::SortSession) holds the current array and
//! refuses every entry point while a run is still playing back.
//!
//! ```rust
//! use core::time::Duration;
//! use sortsteps::prelude::*;
//!
//! let mut session = SortVisualizer::<f64>::new()
//!     .seed(42)
//!     .adapter(Session)
//!     .build()?;
//!
//! session.set_input("9, 4, 7")?;
//! assert!(session.start("quick")?);
//! assert_eq!(session.randomize(), Err(SortError::SortInProgress));
//!
//! session.skip_to_end();
//! assert!(!session.is_sorting());
//! # Result::<(), SortError>::Ok(())
//! ```
//!
//! ## Architecture
//!
//! ```text
//! Layer 5: API          fluent builder, adapter selection
//! Layer 4: Adapters     Batch, Streaming, Session
//! Layer 3: Engine       validation, orchestration, results
//! Layer 2: Algorithms   bubble, selection, insertion, quick, merge
//! Layer 1: Primitives   sequence store, steps, recorder, errors, rng
//! ```
//!
//! ## Features
//!
//! * `std` (default): standard library support. Without it the crate is
//!   `no_std` + `alloc`.
//! * `tracing`: emits `tracing` events at run start/finish, truncation and
//!   refused session actions.
//! * `serde`: `Serialize`/`Deserialize` for steps, results and algorithms.
//! * `dev`: exposes the internal layers under `internals` for testing.

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
#[macro_use]
extern crate alloc;

// Layer 1: Primitives - data structures and basic utilities.
mod primitives;

// Layer 2: Algorithms - the five step-recording sorts.
mod algorithms;

// Layer 3: Engine - validation and orchestration.
mod engine;

// Layer 4: Adapters - execution mode adapters.
mod adapters;

// High-level fluent API.
mod api;

// Standard prelude.
pub mod prelude {
    pub use crate::api::{
        Adapter::{Batch, Session, Streaming},
        Algorithm,
        Algorithm::Bubble,
        Algorithm::Insertion,
        Algorithm::Merge,
        Algorithm::Quick,
        Algorithm::Selection,
        BatchSorter, BubbleMode,
        BubbleMode::Classic,
        BubbleMode::EarlyExit,
        DEFAULT_DELAY, MAX_ELEMENTS, MIN_ELEMENTS, Notice, ParsedInput, Playback, RandomSpec,
        RunResult, SortAdapter, SortError, SortSession, SortVisualizerBuilder as SortVisualizer,
        Step, StepKind, StepValue, StreamingSorter, parse_input, random_sequence,
    };
}

// Internal modules for development and testing.
//
// This module re-exports internal modules for development and testing purposes.
// It is only available with the `dev` feature enabled.
#[cfg(feature = "dev")]
pub mod internals {
    pub mod primitives {
        pub use crate::primitives::*;
    }
    pub mod algorithms {
        pub use crate::algorithms::*;
    }
    pub mod engine {
        pub use crate::engine::*;
    }
    pub mod adapters {
        pub use crate::adapters::*;
    }
    pub mod api {
        pub use crate::api::*;
    }
}
