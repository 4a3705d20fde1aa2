//! LSD radix sort in base 10.
//!
//! Precondition: every value is a non-negative integer. Negative or
//! fractional input is outside the contract and no signed-digit handling
//! is attempted.

use crate::algorithm::Algorithm;
use crate::recorder::{record, Recorder};
use crate::trace::{Auxiliary, Roles, Trace};

use super::value_bounds;

/// Traces a radix sort of `input`.
///
/// Each digit pass is a stable counting sort on `floor(v / place) % 10`
/// that fully rewrites the working array; every write into the pass's
/// output buffer counts as one swap.
pub fn radix_sort(input: &[f64]) -> Trace {
    record(Algorithm::Radix, input, run)
}

fn run(rec: &mut Recorder) {
    let n = rec.len();
    let (_, max) = value_bounds(rec.data());

    let mut passes = 0;
    let mut place = 1.0;
    while (max / place).floor() > 0.0 {
        passes += 1;
        place *= 10.0;
    }
    rec.step(
        Roles::none(),
        format!("Maximum value: {}, requires {} digit passes", max, passes),
    );

    let mut place = 1.0;
    for digit in 1..=passes {
        rec.step(
            Roles::none(),
            format!("Sorting by digit {} (place value {})", digit, place),
        );

        let mut counts = [0usize; 10];
        for i in 0..n {
            let value = rec.get(i);
            let d = digit_at(value, place);
            counts[d] += 1;
            rec.step_with(
                Roles::none().comparing([i]),
                Auxiliary::Counts(counts.to_vec()),
                format!("Element {} has digit {} at position {}", value, d, digit),
            );
        }

        for d in 1..10 {
            counts[d] += counts[d - 1];
        }

        // Walking backwards keeps equal digits in their current order.
        let mut output: Vec<Option<f64>> = vec![None; n];
        for i in (0..n).rev() {
            let value = rec.get(i);
            let d = digit_at(value, place);
            counts[d] -= 1;
            output[counts[d]] = Some(value);
            rec.count_swap();
            rec.step_with(
                Roles::none().swapping([i]),
                Auxiliary::Output(output.clone()),
                format!(
                    "Placing {} at output position {} based on digit {}",
                    value, counts[d], d
                ),
            );
        }

        rec.replace_all(output.into_iter().flatten().collect());
        rec.step(Roles::none(), format!("Completed digit {} pass", digit));
        place *= 10.0;
    }
}

fn digit_at(value: f64, place: f64) -> usize {
    ((value / place).floor() % 10.0) as usize
}
