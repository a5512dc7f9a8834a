//! Quick sort with the Lomuto partition scheme.
//!
//! ## Partition
//!
//! `partition(low, high)` takes `a[high]` as the pivot (`Pivot` step), scans
//! `j` in `low..high` comparing each element with the pivot (`Compare`), and
//! moves every element strictly smaller than the pivot below the boundary
//! (`PartitionSwap`). The pivot is then swapped to the boundary
//! (`PivotPlace`) and the boundary is returned as its final index.
//!
//! ## Invariants
//!
//! * After a partition, everything left of the returned index is `< pivot`
//!   and everything right of it is `>= pivot`.
//! * An element already sitting on the boundary is not swapped with itself,
//!   so no `PartitionSwap` is recorded for it.
//! * Ranges with `low >= high` are left untouched.

// Internal dependencies
use crate::primitives::context::RunContext;
use crate::primitives::step::{StepKind, StepValue};

/// Sort the context's array with quick sort.
pub fn quick_sort<T: StepValue>(ctx: &mut RunContext<T>) {
    let n = ctx.len();
    if n > 1 {
        quick_sort_range(ctx, 0, n - 1);
    }
}

/// Sort the inclusive range `low..=high`.
pub fn quick_sort_range<T: StepValue>(ctx: &mut RunContext<T>, low: usize, high: usize) {
    if low >= high {
        return;
    }

    let pivot_index = partition(ctx, low, high);
    if pivot_index > low {
        quick_sort_range(ctx, low, pivot_index - 1);
    }
    quick_sort_range(ctx, pivot_index + 1, high);
}

/// Partition `low..=high` around `a[high]` and return the pivot's final index.
pub fn partition<T: StepValue>(ctx: &mut RunContext<T>, low: usize, high: usize) -> usize {
    let pivot = ctx.get(high);
    ctx.record(StepKind::Pivot, &[high], Some(high));

    // First slot at or above the boundary (`i + 1` in the textbook form).
    let mut boundary = low;
    for j in low..high {
        ctx.record(StepKind::Compare, &[j, high], Some(high));

        if ctx.get(j) < pivot {
            if boundary != j {
                ctx.sequence.swap(boundary, j);
                ctx.record(StepKind::PartitionSwap, &[boundary, j], Some(high));
            }
            boundary += 1;
        }
    }

    ctx.sequence.swap(boundary, high);
    ctx.record(StepKind::PivotPlace, &[high, boundary], Some(boundary));

    boundary
}
