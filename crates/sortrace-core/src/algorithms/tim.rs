//! Simplified tim sort: fixed-size insertion-sorted runs merged bottom-up.

use crate::algorithm::Algorithm;
use crate::recorder::{record, Recorder};
use crate::trace::{Roles, Trace};

use super::insertion::insertion_range;
use super::merge::merge_ranges;

/// Length of the blocks insertion-sorted before merging starts.
pub const RUN: usize = 32;

/// Traces a tim sort of `input`.
///
/// Runs reuse the insertion routine and merges reuse the merge sort
/// routine, so both keep their comparison and swap counting.
pub fn tim_sort(input: &[f64]) -> Trace {
    record(Algorithm::Tim, input, run)
}

fn run(rec: &mut Recorder) {
    let n = rec.len();

    for start in (0..n).step_by(RUN) {
        let end = (start + RUN - 1).min(n - 1);
        rec.step(
            Roles::none().comparing(start..=end),
            format!("Sorting run [{}...{}] with insertion sort", start, end),
        );
        insertion_range(rec, start, end);
    }

    let mut size = RUN;
    while size < n {
        rec.step(Roles::none(), format!("Merging runs of size {}", size));
        for start in (0..n).step_by(size * 2) {
            let mid = start + size - 1;
            let end = (start + size * 2 - 1).min(n - 1);
            if mid < end {
                merge_ranges(rec, start, mid, end);
            }
        }
        size *= 2;
    }
}
