//! Selection sort: scan the unsorted suffix for its minimum and move it to
//! the front.

use crate::algorithm::Algorithm;
use crate::recorder::{record, Recorder};
use crate::trace::{Roles, Trace};

/// Traces a selection sort of `input`.
///
/// An exchange is recorded and counted only when the minimum is not
/// already in place.
pub fn selection_sort(input: &[f64]) -> Trace {
    record(Algorithm::Selection, input, run)
}

fn run(rec: &mut Recorder) {
    let n = rec.len();

    for i in 0..n - 1 {
        let mut min = i;
        rec.step(
            Roles::none().comparing([i]).sorted(0..i),
            format!("Finding minimum element from position {} onwards", i),
        );

        for j in i + 1..n {
            rec.count_comparison();
            rec.step(
                Roles::none().comparing([min, j]).sorted(0..i),
                format!("Comparing current minimum {} with {}", rec.get(min), rec.get(j)),
            );

            if rec.get(j) < rec.get(min) {
                min = j;
                rec.step(
                    Roles::none().comparing([min]).sorted(0..i),
                    format!("New minimum found: {} at position {}", rec.get(min), min),
                );
            }
        }

        if min != i {
            let (displaced, minimum) = (rec.get(i), rec.get(min));
            rec.swap(i, min);
            rec.step(
                Roles::none().swapping([i, min]).sorted(0..=i),
                format!("Swapping {} with {}", minimum, displaced),
            );
        } else {
            rec.step(
                Roles::none().sorted(0..=i),
                format!("{} is already in place at position {}", rec.get(i), i),
            );
        }
    }
}
