//! Insertion sort.
//!
//! For each `i` in `1..n` the key `a[i]` is held aside and compared with its
//! left neighbour (`Compare`). Larger elements move one slot right, one
//! `Shift` step each, until the scan reaches the front or an element `<= key`.
//! The key is then written to the gap (`Insert`, indices `[i, slot]`).

// Internal dependencies
use crate::primitives::context::RunContext;
use crate::primitives::step::{StepKind, StepValue};

/// Sort the context's array with insertion sort.
pub fn insertion_sort<T: StepValue>(ctx: &mut RunContext<T>) {
    let n = ctx.len();

    for i in 1..n {
        let key = ctx.get(i);
        ctx.record(StepKind::Compare, &[i, i - 1], None);

        // `slot` is one past the scan index, so it never goes negative.
        let mut slot = i;
        while slot > 0 && ctx.get(slot - 1) > key {
            let moved = ctx.get(slot - 1);
            ctx.sequence.set(slot, moved);
            ctx.record(StepKind::Shift, &[slot - 1, slot], None);
            slot -= 1;
        }

        ctx.sequence.set(slot, key);
        ctx.record(StepKind::Insert, &[i, slot], None);
    }
}
