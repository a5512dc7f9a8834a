//! Selection sort.
//!
//! For each position `i`, a `CurrentMin` step opens the scan. Each later
//! index is compared against the running minimum; a smaller element yields a
//! `NewMin` step. The swap (and its `Swap` step) only happens when the
//! minimum actually moved away from `i`.

// Internal dependencies
use crate::primitives::context::RunContext;
use crate::primitives::step::{StepKind, StepValue};

/// Sort the context's array with selection sort.
pub fn selection_sort<T: StepValue>(ctx: &mut RunContext<T>) {
    let n = ctx.len();

    for i in 0..n {
        let mut min = i;
        ctx.record(StepKind::CurrentMin, &[i], None);

        for j in i + 1..n {
            ctx.record(StepKind::Compare, &[min, j], None);

            if ctx.get(j) < ctx.get(min) {
                min = j;
                ctx.record(StepKind::NewMin, &[i, min], None);
            }
        }

        if min != i {
            ctx.sequence.swap(i, min);
            ctx.record(StepKind::Swap, &[i, min], None);
        }
    }
}
