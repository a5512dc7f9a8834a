//! Layer 3: Engine
//!
//! # Purpose
//!
//! This layer turns raw input into validated arrays, orchestrates a single
//! sort run over a fresh [`RunContext`](crate::primitives::context::RunContext),
//! and packages the outcome as a [`RunResult`](output::RunResult).
//!
//! # Architecture
//!
//! ```text
//! Layer 5: API
//!   ↓
//! Layer 4: Adapters
//!   ↓
//! Layer 3: Engine ← You are here
//!   ↓
//! Layer 2: Algorithms
//!   ↓
//! Layer 1: Primitives
//! ```

/// Sort orchestrator.
pub mod executor;

/// Input parsing and validation.
pub mod validator;

/// Output types for sort runs.
pub mod output;
