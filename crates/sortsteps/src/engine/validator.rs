//! Input validation for user-supplied arrays and configuration.
//!
//! ## Purpose
//!
//! This module parses the comma-separated text a user types into an array of
//! numbers and applies the size rules of the visualizer. It also validates
//! pacing delays and random-generation bounds.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Validation stops at the first error encountered.
//! * **Permissive coercion**: A token that is not a number becomes 0 rather
//!   than an error, matching how a browser's `Number()` input is treated.
//! * **Generics**: Parsing is generic over `Float` types.
//!
//! ## Key concepts
//!
//! * **Coercion grammar**: Trimmed decimal literals (`"1."`, `".5"`, `"-2e3"`),
//!   unsigned `0x`/`0o`/`0b` integers, and exactly `Infinity` with an optional
//!   sign. Empty tokens are 0; everything else (`NaN`, `inf`, `12px`) is 0.
//! * **Size rules**: At least 2 elements; anything beyond 12 is dropped and
//!   reported as a [`Notice`], not an error.
//!
//! ## Invariants
//!
//! * A successfully parsed array has between 2 and 12 elements.
//! * A rejected input never yields a partial array.
//! * Validation logic is deterministic and side-effect free.
//!
//! ## Non-goals
//!
//! * This module does not sort or otherwise reorder input data.
//! * This module does not reject non-numeric tokens.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::time::Duration;
use num_traits::Float;

// Internal dependencies
use crate::engine::output::{Notice, ParsedInput};
use crate::primitives::errors::SortError;
use crate::primitives::random::RandomSpec;

/// Fewest elements a run accepts.
pub const MIN_ELEMENTS: usize = 2;

/// Most elements a run keeps; extra input is truncated.
pub const MAX_ELEMENTS: usize = 12;

// ============================================================================
// Validator
// ============================================================================

/// Validation utility for visualizer input and configuration.
pub struct Validator;

impl Validator {
    // ========================================================================
    // Core Input Validation
    // ========================================================================

    /// Parse comma-separated text into a validated array.
    pub fn parse_input<T: Float>(raw: &str) -> Result<ParsedInput<T>, SortError> {
        // Check 1: Something was typed
        if Self::trim_token(raw).is_empty() {
            return Err(SortError::EmptyInput);
        }

        // Check 2: Coerce every token, non-numbers become 0
        let values: Vec<T> = raw
            .split(',')
            .map(|token| T::from(Self::coerce_number(token)).unwrap_or_else(T::zero))
            .collect();

        // Check 3: Size rules
        Self::validate_values(values)
    }

    /// Apply the size rules to an already numeric array.
    pub fn validate_values<T>(mut values: Vec<T>) -> Result<ParsedInput<T>, SortError> {
        let n = values.len();
        if n < MIN_ELEMENTS {
            return Err(SortError::TooFewElements {
                got: n,
                min: MIN_ELEMENTS,
            });
        }

        let notice = if n > MAX_ELEMENTS {
            values.truncate(MAX_ELEMENTS);

            #[cfg(feature = "tracing")]
            tracing::info!(original_len = n, kept = MAX_ELEMENTS, "input truncated");

            Some(Notice::Truncated {
                original_len: n,
                kept: MAX_ELEMENTS,
            })
        } else {
            None
        };

        Ok(ParsedInput { values, notice })
    }

    /// Coerce one token to a number; anything unparseable becomes 0.
    pub fn coerce_number(token: &str) -> f64 {
        let t = Self::trim_token(token);
        if t.is_empty() {
            return 0.0;
        }

        match t {
            "Infinity" | "+Infinity" => return f64::INFINITY,
            "-Infinity" => return f64::NEG_INFINITY,
            _ => {}
        }

        if let Some(value) = Self::parse_radix_literal(t) {
            return value;
        }

        // Rust's float parser also accepts "inf"/"nan" spellings; a browser does not.
        let decimal_chars = t
            .bytes()
            .all(|b| b.is_ascii_digit() || matches!(b, b'+' | b'-' | b'.' | b'e' | b'E'));
        if !decimal_chars {
            return 0.0;
        }

        t.parse::<f64>()
            .ok()
            .filter(|v| !v.is_nan())
            .unwrap_or(0.0)
    }

    /// Strip whitespace and byte-order marks from both ends, as `Number()` does.
    fn trim_token(token: &str) -> &str {
        token.trim_matches(|c: char| c.is_whitespace() || c == '\u{FEFF}')
    }

    /// Parse `0x`, `0o` or `0b` integer literals. `None` when no prefix matches.
    fn parse_radix_literal(t: &str) -> Option<f64> {
        let bytes = t.as_bytes();
        if bytes.len() < 2 || bytes[0] != b'0' {
            return None;
        }

        let radix = match bytes[1] {
            b'x' | b'X' => 16,
            b'o' | b'O' => 8,
            b'b' | b'B' => 2,
            _ => return None,
        };

        let digits = &t[2..];
        if digits.is_empty() {
            return Some(0.0);
        }

        let mut value = 0.0_f64;
        for c in digits.chars() {
            match c.to_digit(radix) {
                Some(d) => value = value * f64::from(radix) + f64::from(d),
                None => return Some(0.0),
            }
        }
        Some(value)
    }

    // ========================================================================
    // Parameter Validation
    // ========================================================================

    /// Validate a pacing delay given in milliseconds.
    pub fn validate_delay_ms(ms: f64) -> Result<Duration, SortError> {
        if !ms.is_finite() || ms < 0.0 {
            return Err(SortError::InvalidDelay(ms));
        }
        Duration::try_from_secs_f64(ms / 1000.0).map_err(|_| SortError::InvalidDelay(ms))
    }

    /// Validate random-generation bounds.
    ///
    /// # Notes
    ///
    /// * Sizes must stay within the same 2..=12 window as typed input.
    pub fn validate_random_spec(spec: &RandomSpec) -> Result<(), SortError> {
        if spec.min_size < MIN_ELEMENTS
            || spec.max_size > MAX_ELEMENTS
            || spec.min_size > spec.max_size
        {
            return Err(SortError::InvalidRange {
                range: "size",
                min: spec.min_size as i64,
                max: spec.max_size as i64,
            });
        }

        if spec.min_value > spec.max_value {
            return Err(SortError::InvalidRange {
                range: "value",
                min: spec.min_value,
                max: spec.max_value,
            });
        }

        Ok(())
    }

    /// Validate that no parameters were set multiple times in the builder.
    pub fn validate_no_duplicates(
        duplicate_param: Option<&'static str>,
    ) -> Result<(), SortError> {
        if let Some(param) = duplicate_param {
            return Err(SortError::DuplicateParameter { parameter: param });
        }
        Ok(())
    }
}
