//! Counting sort over integer-valued input.
//!
//! The frequency table spans `max - min + 1` slots, so memory and time grow
//! with the value range rather than with `n`. A wide range relative to `n`
//! is a performance boundary of the algorithm, not an error.
//!
//! Precondition: every value is a finite integer. Fractional values are
//! truncated onto table slots and the output is unspecified. Output values
//! are rebuilt from slot indices, so `-0.0` comes back as `+0.0`; the two
//! compare equal.

use crate::algorithm::Algorithm;
use crate::recorder::{record, Recorder};
use crate::trace::{Auxiliary, Roles, Trace};

use super::value_bounds;

/// Traces a counting sort of `input`. No value-vs-value comparison ever
/// happens, so `comparisons` stays 0; each output write is one swap.
pub fn counting_sort(input: &[f64]) -> Trace {
    record(Algorithm::Counting, input, run)
}

fn run(rec: &mut Recorder) {
    let n = rec.len();
    let (min, max) = value_bounds(rec.data());
    let range = (max - min) as usize + 1;

    let mut counts = vec![0usize; range];
    rec.step_with(
        Roles::none(),
        Auxiliary::Counts(counts.clone()),
        format!("Range: {} to {}, creating count array of size {}", min, max, range),
    );

    for i in 0..n {
        let value = rec.get(i);
        counts[slot(value, min)] += 1;
        rec.step_with(
            Roles::none().comparing([i]),
            Auxiliary::Counts(counts.clone()),
            format!("Counting element {} at position {}", value, i),
        );
    }

    rec.step_with(
        Roles::none(),
        Auxiliary::Counts(counts.clone()),
        "Finished counting, now reconstructing sorted array",
    );

    let mut index = 0;
    for key in 0..range {
        let value = key as f64 + min;
        while counts[key] > 0 {
            counts[key] -= 1;
            rec.write(index, value);
            rec.step_with(
                Roles::none().swapping([index]).sorted(0..index),
                Auxiliary::Counts(counts.clone()),
                format!("Placing {} at position {}", value, index),
            );
            index += 1;
        }
    }
}

fn slot(value: f64, min: f64) -> usize {
    (value - min) as usize
}
