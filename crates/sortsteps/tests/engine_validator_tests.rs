#![cfg(feature = "dev")]
//! Tests for input validation and text coercion.
//!
//! These tests verify the rules applied before any run starts:
//! - Comma-separated parsing with browser-style number coercion
//! - Size rules (at least 2, at most 12 with truncation notice)
//! - Pacing and random-generation parameter checks
//!
//! ## Test Organization
//!
//! 1. **Coercion** - Individual tokens
//! 2. **Parsing** - Whole inputs, errors and truncation
//! 3. **Parameters** - Delay, random bounds, duplicates

use approx::assert_relative_eq;
use core::time::Duration;

use sortsteps::internals::engine::output::Notice;
use sortsteps::internals::engine::validator::{MAX_ELEMENTS, MIN_ELEMENTS, Validator};
use sortsteps::internals::primitives::errors::SortError;
use sortsteps::internals::primitives::random::RandomSpec;

// ============================================================================
// Coercion Tests
// ============================================================================

/// Test decimal literals.
#[test]
fn test_coerce_decimal() {
    assert_relative_eq!(Validator::coerce_number(" 2.5 "), 2.5);
    assert_relative_eq!(Validator::coerce_number("-7"), -7.0);
    assert_relative_eq!(Validator::coerce_number("+5"), 5.0);
    assert_relative_eq!(Validator::coerce_number(".5"), 0.5);
    assert_relative_eq!(Validator::coerce_number("3."), 3.0);
    assert_relative_eq!(Validator::coerce_number("1e3"), 1000.0);
    assert_relative_eq!(Validator::coerce_number("1.5E+2"), 150.0);
}

/// Test prefixed integer literals.
#[test]
fn test_coerce_radix() {
    assert_relative_eq!(Validator::coerce_number("0x1F"), 31.0);
    assert_relative_eq!(Validator::coerce_number("0o17"), 15.0);
    assert_relative_eq!(Validator::coerce_number("0b101"), 5.0);
    assert_relative_eq!(Validator::coerce_number("0xZZ"), 0.0);
}

/// Test the infinity spellings a browser accepts.
#[test]
fn test_coerce_infinity() {
    assert_eq!(Validator::coerce_number("Infinity"), f64::INFINITY);
    assert_eq!(Validator::coerce_number("+Infinity"), f64::INFINITY);
    assert_eq!(Validator::coerce_number("-Infinity"), f64::NEG_INFINITY);
}

/// Test that byte-order marks are stripped like whitespace.
#[test]
fn test_coerce_strips_bom() {
    assert_relative_eq!(Validator::coerce_number("\u{FEFF}5"), 5.0);
    assert_relative_eq!(Validator::coerce_number(" 7\u{FEFF} "), 7.0);
    assert_eq!(Validator::coerce_number("\u{FEFF}"), 0.0);

    let parsed = Validator::parse_input::<f64>("\u{FEFF}4, 2").unwrap();
    assert_eq!(parsed.values, vec![4.0, 2.0]);
    assert_eq!(
        Validator::parse_input::<f64>("\u{FEFF} "),
        Err(SortError::EmptyInput),
        "A lone byte-order mark is empty input"
    );
}

/// Test that anything unparseable becomes zero.
#[test]
fn test_coerce_garbage_is_zero() {
    for token in ["", "   ", "abc", "NaN", "nan", "inf", "infinity", "12px", "1_000", "--5", "1e", "-0x10"] {
        assert_eq!(Validator::coerce_number(token), 0.0, "Token {token:?} should coerce to 0");
    }
}

// ============================================================================
// Parsing Tests
// ============================================================================

/// Test a well-formed input.
#[test]
fn test_parse_basic() {
    let parsed = Validator::parse_input::<f64>("5, 3, 8, 1").unwrap();
    assert_eq!(parsed.values, vec![5.0, 3.0, 8.0, 1.0]);
    assert!(parsed.notice.is_none());
}

/// Test that bad tokens become zero instead of failing.
#[test]
fn test_parse_coerces_tokens() {
    let parsed = Validator::parse_input::<f64>("1, abc, ,3").unwrap();
    assert_eq!(parsed.values, vec![1.0, 0.0, 0.0, 3.0]);

    let trailing = Validator::parse_input::<f64>("5,").unwrap();
    assert_eq!(trailing.values, vec![5.0, 0.0], "Trailing comma adds a zero");
}

/// Test that empty input is rejected.
#[test]
fn test_parse_empty() {
    assert_eq!(Validator::parse_input::<f64>(""), Err(SortError::EmptyInput));
    assert_eq!(Validator::parse_input::<f64>(" \t\n"), Err(SortError::EmptyInput));
}

/// Test that a single element is rejected.
#[test]
fn test_parse_single_element() {
    let err = Validator::parse_input::<f64>("5").unwrap_err();
    assert_eq!(err, SortError::TooFewElements { got: 1, min: MIN_ELEMENTS });
    assert_eq!(err.to_string(), "Please enter at least 2 numbers (got 1)");
}

/// Test that oversized input is truncated with a notice.
#[test]
fn test_parse_truncates() {
    let parsed = Validator::parse_input::<f64>("3,1,2,3,1,2,3,1,2,3,1,2,9,9").unwrap();

    assert_eq!(parsed.values.len(), MAX_ELEMENTS);
    assert_eq!(
        parsed.values,
        vec![3.0, 1.0, 2.0, 3.0, 1.0, 2.0, 3.0, 1.0, 2.0, 3.0, 1.0, 2.0]
    );
    assert_eq!(
        parsed.notice,
        Some(Notice::Truncated { original_len: 14, kept: 12 })
    );
}

/// Test the size rules on numeric arrays.
#[test]
fn test_validate_values() {
    assert!(matches!(
        Validator::validate_values(vec![1.0]),
        Err(SortError::TooFewElements { got: 1, .. })
    ));
    assert!(Validator::validate_values(vec![1.0; 12]).unwrap().notice.is_none());
    assert!(Validator::validate_values(vec![1.0; 13]).unwrap().notice.is_some());
}

/// Test parsing into single precision.
#[test]
fn test_parse_f32() {
    let parsed = Validator::parse_input::<f32>("0.25, 4").unwrap();
    assert_relative_eq!(parsed.values[0], 0.25_f32);
    assert_relative_eq!(parsed.values[1], 4.0_f32);
}

// ============================================================================
// Parameter Tests
// ============================================================================

/// Test delay validation.
#[test]
fn test_validate_delay() {
    assert_eq!(Validator::validate_delay_ms(0.0), Ok(Duration::ZERO));
    assert_eq!(Validator::validate_delay_ms(250.0), Ok(Duration::from_millis(250)));
    assert_eq!(Validator::validate_delay_ms(-1.0), Err(SortError::InvalidDelay(-1.0)));
    assert!(matches!(Validator::validate_delay_ms(f64::NAN), Err(SortError::InvalidDelay(_))));
    assert!(matches!(
        Validator::validate_delay_ms(f64::INFINITY),
        Err(SortError::InvalidDelay(_))
    ));
}

/// Test random-generation bounds.
#[test]
fn test_validate_random_spec() {
    assert!(Validator::validate_random_spec(&RandomSpec::default()).is_ok());

    let too_small = RandomSpec { min_size: 1, ..RandomSpec::default() };
    assert!(matches!(
        Validator::validate_random_spec(&too_small),
        Err(SortError::InvalidRange { range: "size", .. })
    ));

    let too_big = RandomSpec { max_size: 13, ..RandomSpec::default() };
    assert!(Validator::validate_random_spec(&too_big).is_err());

    let inverted = RandomSpec { min_value: 10, max_value: 5, ..RandomSpec::default() };
    assert_eq!(
        Validator::validate_random_spec(&inverted),
        Err(SortError::InvalidRange { range: "value", min: 10, max: 5 })
    );
}

/// Test duplicate parameter detection.
#[test]
fn test_validate_no_duplicates() {
    assert!(Validator::validate_no_duplicates(None).is_ok());
    assert_eq!(
        Validator::validate_no_duplicates(Some("delay")),
        Err(SortError::DuplicateParameter { parameter: "delay" })
    );
}
