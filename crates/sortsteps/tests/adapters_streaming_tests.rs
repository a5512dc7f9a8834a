//! Tests for the batch and streaming adapters.
//!
//! These tests verify:
//! - Eager batch runs from numbers and text
//! - Host-paced release of steps with the configured delay
//! - Restart, skip, cancel and mid-run speed changes
//! - Unpaced iteration over a playback
//!
//! ## Test Organization
//!
//! 1. **Batch** - Validation and dispatch
//! 2. **Pacing** - Release timing
//! 3. **Control** - Restart, skip, cancel, speed
//! 4. **Iteration** - Iterator behaviour

use core::time::Duration;
use sortsteps::prelude::*;

const MS_100: Duration = Duration::from_millis(100);

fn insertion_playback() -> Playback<f64> {
    SortVisualizer::<f64>::new()
        .algorithm(Insertion)
        .delay(MS_100)
        .adapter(Streaming)
        .build()
        .unwrap()
        .play(&[3.0, 1.0, 2.0])
        .unwrap()
}

// ============================================================================
// Batch Tests
// ============================================================================

/// Test a batch run and its input checks.
#[test]
fn test_batch_sort() {
    let sorter = SortVisualizer::<f64>::new().adapter(Batch).build().unwrap();
    assert_eq!(sorter.algorithm(), Bubble, "Bubble is the default");

    let result = sorter.sort(&[5.0, 3.0, 8.0, 1.0]).unwrap();
    assert_eq!(result.sorted, vec![1.0, 3.0, 5.0, 8.0]);

    assert_eq!(
        sorter.sort(&[1.0]).unwrap_err(),
        SortError::TooFewElements { got: 1, min: 2 }
    );
}

/// Test batch runs from text, by name and with an explicit algorithm.
#[test]
fn test_batch_variants() {
    let sorter = SortVisualizer::<f64>::new().adapter(Batch).build().unwrap();

    let text = sorter.sort_text("3,1,2,3,1,2,3,1,2,3,1,2,9,9").unwrap();
    assert_eq!(text.input.len(), 12);
    assert_eq!(text.notice, Some(Notice::Truncated { original_len: 14, kept: 12 }));
    assert_eq!(sorter.sort_text("  "), Err(SortError::EmptyInput));

    let merged = sorter.sort_with(&[2.0, 1.0], Merge).unwrap();
    assert_eq!(merged.algorithm, Merge);

    let quick = sorter.sort_by_name(&[2.0, 1.0], "quick").unwrap();
    assert_eq!(quick.map(|r| r.algorithm), Some(Quick));
    assert_eq!(sorter.sort_by_name(&[2.0, 1.0], "bogo"), Ok(None));
}

/// Test that single-precision runs render without widening noise.
#[test]
fn test_batch_f32_display() {
    let sorter = SortVisualizer::<f32>::new().adapter(Batch).build().unwrap();
    let result = sorter.sort_text("0.1, 0.3").unwrap();

    assert_eq!(
        result.to_string(),
        "Algorithm: Bubble Sort\n\
         Initial Array: 0.1, 0.3\n\
         Step 1: Compared 0.1 and 0.3 → [0.1], [0.3]\n\
         Sorting completed! Final sorted array: 0.1, 0.3"
    );
}

// ============================================================================
// Pacing Tests
// ============================================================================

/// Test that the first step is due at once and later ones after the delay.
#[test]
fn test_playback_pacing() {
    let mut playback = insertion_playback();
    assert_eq!(playback.progress(), (0, 6));

    let first = playback.advance(Duration::ZERO);
    assert_eq!(first.len(), 1);
    assert_eq!(first[0].seq, 1);
    assert_eq!(playback.time_until_next(), Some(MS_100));

    assert!(playback.advance(Duration::from_millis(50)).is_empty());
    assert_eq!(playback.time_until_next(), Some(Duration::from_millis(50)));

    assert_eq!(playback.advance(Duration::from_millis(50)).len(), 1);

    // 350 ms of host time: steps due at 200 and 300 are released.
    let burst = playback.advance(Duration::from_millis(250));
    assert_eq!(burst.iter().map(|s| s.seq).collect::<Vec<_>>(), vec![3, 4]);
    assert_eq!(playback.progress(), (4, 6));
    assert_eq!(playback.current().map(|s| s.seq), Some(4));
}

/// Test the default delay and total duration.
#[test]
fn test_playback_durations() {
    let sorter = SortVisualizer::<f64>::new().adapter(Streaming).build().unwrap();
    assert_eq!(sorter.delay(), DEFAULT_DELAY);
    assert_eq!(DEFAULT_DELAY, Duration::from_millis(300));

    let playback = insertion_playback();
    assert_eq!(playback.total_duration(), Duration::from_millis(500));
}

/// Test that a zero delay releases everything on the first poll.
#[test]
fn test_playback_zero_delay() {
    let sorter = SortVisualizer::<f64>::new()
        .delay(Duration::ZERO)
        .adapter(Streaming)
        .build()
        .unwrap();
    let mut playback = sorter.play(&[2.0, 1.0]).unwrap();

    assert_eq!(playback.poll().len(), 2);
    assert!(playback.is_complete());
}

// ============================================================================
// Control Tests
// ============================================================================

/// Test skipping to the end.
#[test]
fn test_playback_skip_to_end() {
    let mut playback = insertion_playback();
    playback.advance(Duration::ZERO);

    let rest = playback.skip_to_end();
    assert_eq!(rest.len(), 5);
    assert!(playback.is_finished());
    assert!(playback.is_complete());
    assert_eq!(playback.time_until_next(), None);
    assert!(playback.advance(MS_100).is_empty(), "Nothing left to release");
    assert_eq!(playback.released().len(), 6);
}

/// Test cancellation.
#[test]
fn test_playback_cancel() {
    let mut playback = insertion_playback();
    playback.advance(Duration::ZERO);
    playback.cancel();

    assert!(playback.is_cancelled());
    assert!(playback.is_finished());
    assert!(!playback.is_complete());
    assert!(playback.advance(Duration::from_secs(10)).is_empty());
    assert!(playback.skip_to_end().is_empty());
    assert_eq!(playback.progress(), (1, 6));
}

/// Test restarting replays from the first step.
#[test]
fn test_playback_restart() {
    let mut playback = insertion_playback();
    playback.skip_to_end();
    playback.restart();

    assert!(!playback.is_finished());
    assert_eq!(playback.progress(), (0, 6));
    assert_eq!(playback.advance(Duration::ZERO)[0].seq, 1);
}

/// Test that a speed change applies from the last release on.
#[test]
fn test_playback_set_delay() {
    let mut playback = insertion_playback();
    playback.advance(Duration::ZERO);

    playback.set_delay(Duration::ZERO);
    assert_eq!(playback.delay(), Duration::ZERO);
    assert_eq!(playback.poll().len(), 5);
}

/// Test text input and notices through the streaming adapter.
#[test]
fn test_play_text() {
    let sorter = SortVisualizer::<f64>::new().adapter(Streaming).build().unwrap();
    let playback = sorter.play_text("1,2,3,4,5,6,7,8,9,10,11,12,13").unwrap();

    assert_eq!(
        playback.result().notice,
        Some(Notice::Truncated { original_len: 13, kept: 12 })
    );
    assert!(matches!(sorter.play_text("7"), Err(SortError::TooFewElements { .. })));
}

// ============================================================================
// Iteration Tests
// ============================================================================

/// Test unpaced iteration.
#[test]
fn test_playback_iterator() {
    let playback = insertion_playback();
    assert_eq!(playback.size_hint(), (6, Some(6)));

    let kinds: Vec<StepKind> = playback.map(|s| s.kind).collect();
    assert_eq!(
        kinds,
        vec![
            StepKind::Compare,
            StepKind::Shift,
            StepKind::Insert,
            StepKind::Compare,
            StepKind::Shift,
            StepKind::Insert,
        ]
    );
}

/// Test that the run result survives playback.
#[test]
fn test_playback_into_result() {
    let mut playback = insertion_playback();
    let last = playback.by_ref().last().unwrap();
    let result = playback.into_result();

    assert_eq!(last.snapshot, result.sorted);
    assert_eq!(result.sorted, vec![1.0, 2.0, 3.0]);
}
