//! Bubble sort.
//!
//! Outer pass `i` in `0..n-1`, inner index `j` in `0..n-i-1`. Every adjacent
//! pair is compared (one `Compare` step) and swapped when out of order (one
//! `Swap` step after the swap). In [`BubbleMode::Classic`] all passes run
//! even on sorted input, so the log always holds `n(n-1)/2` comparisons.

// Internal dependencies
use crate::algorithms::BubbleMode;
use crate::primitives::context::RunContext;
use crate::primitives::step::{StepKind, StepValue};

/// Sort the context's array with bubble sort.
pub fn bubble_sort<T: StepValue>(ctx: &mut RunContext<T>, mode: BubbleMode) {
    let n = ctx.len();
    if n < 2 {
        return;
    }

    for i in 0..n - 1 {
        let mut swapped = false;
        for j in 0..n - i - 1 {
            ctx.record(StepKind::Compare, &[j, j + 1], None);

            if ctx.get(j) > ctx.get(j + 1) {
                ctx.sequence.swap(j, j + 1);
                ctx.record(StepKind::Swap, &[j, j + 1], None);
                swapped = true;
            }
        }

        if mode == BubbleMode::EarlyExit && !swapped {
            break;
        }
    }
}
