//! Layer 1: Primitives
//!
//! # Purpose
//!
//! This layer provides the data structures every other layer builds on:
//! the working array, step records, the step recorder, the run context and
//! error types. It has zero internal dependencies within the crate.
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
//! Layer 2: Algorithms
//!   ↓
//! Layer 1: Primitives ← You are here
//! ```

/// Mutable working array.
pub mod sequence;

/// Step records and rendering.
pub mod step;

/// Append-only step log.
pub mod recorder;

/// Run-scoped state.
pub mod context;

/// Seeded random arrays.
pub mod random;

/// Shared error types.
pub mod errors;
