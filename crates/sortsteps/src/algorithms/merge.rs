//! Top-down merge sort.
//!
//! ## Key concepts
//!
//! * **Split**: `m = floor((l + r) / 2)`; recurse on `l..=m` then `m+1..=r`.
//! * **Merge**: Both halves are copied into temporary buffers and written
//!   back front to front. Every write is one `Merge` step, including the
//!   writes that drain whichever buffer is left over.
//!
//! ## Invariants
//!
//! * On equal values the left buffer wins, so the sort is stable.
//! * Ranges with `l >= r` are left untouched.

// Internal dependencies
use crate::primitives::context::RunContext;
use crate::primitives::step::{StepKind, StepValue};

/// Sort the context's array with merge sort.
pub fn merge_sort<T: StepValue>(ctx: &mut RunContext<T>) {
    let n = ctx.len();
    if n > 1 {
        merge_sort_range(ctx, 0, n - 1);
    }
}

/// Sort the inclusive range `l..=r`.
pub fn merge_sort_range<T: StepValue>(ctx: &mut RunContext<T>, l: usize, r: usize) {
    if l >= r {
        return;
    }

    let m = l + (r - l) / 2;
    merge_sort_range(ctx, l, m);
    merge_sort_range(ctx, m + 1, r);
    merge(ctx, l, m, r);
}

/// Merge the sorted runs `l..=m` and `m+1..=r`.
pub fn merge<T: StepValue>(ctx: &mut RunContext<T>, l: usize, m: usize, r: usize) {
    let left = ctx.sequence.copy_range(l, m + 1);
    let right = ctx.sequence.copy_range(m + 1, r + 1);

    let (mut i, mut j, mut k) = (0, 0, l);

    while i < left.len() && j < right.len() {
        if left[i] <= right[j] {
            ctx.sequence.set(k, left[i]);
            i += 1;
        } else {
            ctx.sequence.set(k, right[j]);
            j += 1;
        }
        ctx.record(StepKind::Merge, &[k], None);
        k += 1;
    }

    for &value in left[i..].iter().chain(&right[j..]) {
        ctx.sequence.set(k, value);
        ctx.record(StepKind::Merge, &[k], None);
        k += 1;
    }
}
