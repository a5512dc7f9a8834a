//! Layer 4: Adapters
//!
//! # Purpose
//!
//! This layer provides user-facing APIs that adapt the engine layer for
//! different ways of consuming a run:
//!
//! - **Batch**: Run to completion and return the whole step log
//! - **Streaming**: Release steps one at a time, paced by host-driven time
//! - **Session**: Stateful visualizer core with input handling and run gating
//!
//! # Architecture
//!
//! ```text
//! Layer 5: API
//!   ↓
//! Layer 4: Adapters ← You are here
//!   ↓
//! Layer 3: Engine
//!   ↓
//! Layer 2: Algorithms
//!   ↓
//! Layer 1: Primitives
//! ```

/// Eager, whole-log sorting.
pub mod batch;

/// Host-paced step playback.
pub mod streaming;

/// Stateful visualizer session.
pub mod session;
