#![cfg(feature = "dev")]
//! Tests for the five step-recording sorts.
//!
//! These tests run each algorithm directly on a `RunContext` and check the
//! exact step log against hand-traced runs of the classic textbook versions:
//! - Bubble sort in classic and early-exit modes
//! - Selection sort minimum tracking
//! - Insertion sort compare, shift and insert steps
//! - Quick sort (Lomuto) pivot and partition steps
//! - Merge sort writes and stability
//!
//! ## Test Organization
//!
//! 1. **Bubble Sort**
//! 2. **Selection Sort**
//! 3. **Insertion Sort**
//! 4. **Quick Sort**
//! 5. **Merge Sort**

use sortsteps::internals::algorithms::BubbleMode;
use sortsteps::internals::algorithms::bubble::bubble_sort;
use sortsteps::internals::algorithms::insertion::insertion_sort;
use sortsteps::internals::algorithms::merge::merge_sort;
use sortsteps::internals::algorithms::quick::{partition, quick_sort};
use sortsteps::internals::algorithms::selection::selection_sort;
use sortsteps::internals::primitives::context::RunContext;
use sortsteps::internals::primitives::step::{Step, StepKind};

use StepKind::*;

/// Run `sort` over a copy of `input` and return the final array and log.
fn run(input: &[f64], sort: impl FnOnce(&mut RunContext<f64>)) -> (Vec<f64>, Vec<Step<f64>>) {
    let mut ctx = RunContext::new(input);
    sort(&mut ctx);
    ctx.finish()
}

fn kinds(steps: &[Step<f64>]) -> Vec<StepKind> {
    steps.iter().map(|s| s.kind).collect()
}

fn count(steps: &[Step<f64>], kind: StepKind) -> usize {
    steps.iter().filter(|s| s.kind == kind).count()
}

// ============================================================================
// Bubble Sort Tests
// ============================================================================

/// Test the classic bubble sort log on the reference input.
#[test]
fn test_bubble_classic_reference() {
    let (sorted, steps) = run(&[5.0, 3.0, 8.0, 1.0], |c| bubble_sort(c, BubbleMode::Classic));

    assert_eq!(sorted, vec![1.0, 3.0, 5.0, 8.0]);
    assert_eq!(count(&steps, Compare), 6, "n(n-1)/2 comparisons");
    assert_eq!(count(&steps, Swap), 4);
    assert_eq!(kinds(&steps[..3]), vec![Compare, Swap, Compare]);
    assert_eq!(steps[1].rendered, "[3], [5], 8, 1");
}

/// Test that classic mode never short-circuits on sorted input.
#[test]
fn test_bubble_classic_sorted_input() {
    let (sorted, steps) = run(&[1.0, 2.0, 3.0, 4.0], |c| bubble_sort(c, BubbleMode::Classic));

    assert_eq!(sorted, vec![1.0, 2.0, 3.0, 4.0]);
    assert_eq!(steps.len(), 6, "All passes run even without swaps");
    assert!(steps.iter().all(|s| s.kind == Compare));
}

/// Test that early-exit mode stops after a pass without swaps.
#[test]
fn test_bubble_early_exit() {
    let (_, sorted_steps) = run(&[1.0, 2.0, 3.0, 4.0], |c| bubble_sort(c, BubbleMode::EarlyExit));
    assert_eq!(sorted_steps.len(), 3, "One clean pass is enough");

    let (sorted, steps) = run(&[2.0, 1.0, 3.0, 4.0], |c| bubble_sort(c, BubbleMode::EarlyExit));
    assert_eq!(sorted, vec![1.0, 2.0, 3.0, 4.0]);
    assert_eq!(count(&steps, Compare), 5, "Dirty pass of 3, clean pass of 2");
    assert_eq!(count(&steps, Swap), 1);
}

/// Test that equal neighbours are not swapped.
#[test]
fn test_bubble_equal_elements() {
    let (_, steps) = run(&[2.0, 2.0, 2.0], |c| bubble_sort(c, BubbleMode::Classic));
    assert_eq!(count(&steps, Swap), 0);
}

// ============================================================================
// Selection Sort Tests
// ============================================================================

/// Test the selection sort log on the reference input.
#[test]
fn test_selection_reference() {
    let (sorted, steps) = run(&[5.0, 3.0, 8.0, 1.0], selection_sort);

    assert_eq!(sorted, vec![1.0, 3.0, 5.0, 8.0]);
    assert_eq!(
        kinds(&steps[..7]),
        vec![CurrentMin, Compare, NewMin, Compare, Compare, NewMin, Swap]
    );
    assert_eq!(count(&steps, CurrentMin), 4, "One scan per position");
    assert_eq!(count(&steps, Compare), 6);
    assert_eq!(count(&steps, NewMin), 3);
    assert_eq!(count(&steps, Swap), 2, "No swap when the minimum stays put");

    // Compare tracks the running minimum, not the scan start.
    assert_eq!(steps[3].indices, vec![1, 2]);
    assert_eq!(steps[6].indices, vec![0, 3]);
    assert_eq!(steps[6].describe(), "Swapped 5 and 1");
}

/// Test that sorted input produces no swaps.
#[test]
fn test_selection_sorted_input() {
    let (_, steps) = run(&[1.0, 2.0, 3.0], selection_sort);
    assert_eq!(count(&steps, Swap), 0);
    assert_eq!(count(&steps, NewMin), 0);
}

// ============================================================================
// Insertion Sort Tests
// ============================================================================

/// Test the insertion sort log on the reference input.
#[test]
fn test_insertion_reference() {
    let (sorted, steps) = run(&[5.0, 3.0, 8.0, 1.0], insertion_sort);

    assert_eq!(sorted, vec![1.0, 3.0, 5.0, 8.0]);
    assert_eq!(count(&steps, Compare), 3, "One compare per outer iteration");
    assert_eq!(count(&steps, Shift), 4);
    assert_eq!(count(&steps, Insert), 3);

    assert_eq!(kinds(&steps[..3]), vec![Compare, Shift, Insert]);
    assert_eq!(steps[1].snapshot, vec![5.0, 5.0, 8.0, 1.0], "Shift duplicates the moved value");
    assert_eq!(steps[1].describe(), "Shifted 5 from position 0 to 1");
    assert_eq!(steps[2].describe(), "Inserted 3 at position 0");
}

/// Test that sorted input only compares and re-inserts in place.
#[test]
fn test_insertion_sorted_input() {
    let (_, steps) = run(&[1.0, 2.0, 3.0], insertion_sort);

    assert_eq!(kinds(&steps), vec![Compare, Insert, Compare, Insert]);
    assert_eq!(steps[1].indices, vec![1, 1]);
}

// ============================================================================
// Quick Sort Tests
// ============================================================================

/// Test the quick sort log on the reference input.
#[test]
fn test_quick_reference() {
    let (sorted, steps) = run(&[5.0, 3.0, 8.0, 1.0], quick_sort);

    assert_eq!(sorted, vec![1.0, 3.0, 5.0, 8.0]);
    assert_eq!(
        kinds(&steps),
        vec![
            Pivot, Compare, Compare, Compare, PivotPlace, // partition 0..=3
            Pivot, Compare, Compare, PivotPlace, // partition 1..=3
        ]
    );
    assert_eq!(steps[4].pivot, Some(0), "Pivot landed at the front");
    assert_eq!(steps[4].snapshot, vec![1.0, 3.0, 8.0, 5.0]);
}

/// Test that partition swaps are recorded only when elements move.
#[test]
fn test_quick_partition_swap() {
    let (sorted, steps) = run(&[3.0, 1.0, 2.0], quick_sort);

    assert_eq!(sorted, vec![1.0, 2.0, 3.0]);
    assert_eq!(
        kinds(&steps),
        vec![Pivot, Compare, Compare, PartitionSwap, PivotPlace]
    );
    assert_eq!(steps[3].indices, vec![0, 1]);
    assert_eq!(steps[3].pivot, Some(2));
}

/// Test the partition return value directly.
#[test]
fn test_partition_returns_pivot_position() {
    let mut ctx = RunContext::new(&[4.0, 9.0, 1.0, 5.0]);
    let p = partition(&mut ctx, 0, 3);

    assert_eq!(p, 2);
    assert_eq!(ctx.sequence.as_slice(), &[4.0, 1.0, 5.0, 9.0]);
}

/// Test that sorted input never records a partition swap.
#[test]
fn test_quick_sorted_input() {
    let (_, steps) = run(&[1.0, 2.0, 3.0, 4.0], quick_sort);
    assert_eq!(count(&steps, PartitionSwap), 0);
    assert_eq!(count(&steps, Pivot), 3);
}

// ============================================================================
// Merge Sort Tests
// ============================================================================

/// Test the merge sort log on the reference input.
#[test]
fn test_merge_reference() {
    let (sorted, steps) = run(&[5.0, 3.0, 8.0, 1.0], merge_sort);

    assert_eq!(sorted, vec![1.0, 3.0, 5.0, 8.0]);
    assert!(steps.iter().all(|s| s.kind == Merge));

    let written: Vec<usize> = steps.iter().map(|s| s.indices[0]).collect();
    assert_eq!(written, vec![0, 1, 2, 3, 0, 1, 2, 3], "One step per write, drains included");
    assert_eq!(steps[0].describe(), "Merging: placed 3 at position 0");
}

/// Test that merge takes from the left run on ties.
#[test]
fn test_merge_stability() {
    let (sorted, _) = run(&[0.0, 1.0, -0.0, 2.0], merge_sort);

    assert_eq!(sorted, vec![0.0, 0.0, 1.0, 2.0]);
    assert!(sorted[0].is_sign_positive(), "Left-half zero comes first");
    assert!(sorted[1].is_sign_negative(), "Right-half zero comes second");
}

/// Test merging two elements.
#[test]
fn test_merge_two_elements() {
    let (sorted, steps) = run(&[2.0, 1.0], merge_sort);
    assert_eq!(sorted, vec![1.0, 2.0]);
    assert_eq!(steps.len(), 2);
}
