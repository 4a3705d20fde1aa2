//! Insertion sort, plus the ranged routine tim sort builds its runs with.

use crate::algorithm::Algorithm;
use crate::recorder::{record, Recorder};
use crate::trace::{Roles, Trace};

/// Traces an insertion sort of `input`.
///
/// Every comparison is counted, including the one that stops the scan.
/// Each rightward move of a larger element is one swap; settling the key
/// into the vacated slot is not.
pub fn insertion_sort(input: &[f64]) -> Trace {
    record(Algorithm::Insertion, input, |rec| {
        let last = rec.len() - 1;
        insertion_range(rec, 0, last);
    })
}

/// Insertion-sorts the inclusive range `left..=right` of the working array.
pub(crate) fn insertion_range(rec: &mut Recorder, left: usize, right: usize) {
    for i in left + 1..=right {
        let key = rec.get(i);
        rec.step(
            Roles::none().comparing([i]).sorted(left..i),
            format!("Inserting element {} into sorted portion", key),
        );

        // The key travels left by adjacent exchanges, so `j` is always its
        // current position.
        let mut j = i;
        while j > left {
            let prev = rec.get(j - 1);
            rec.count_comparison();
            rec.step(
                Roles::none().comparing([j - 1, j]).sorted(left..i),
                format!("Comparing {} with key {}", prev, key),
            );
            if prev <= key {
                break;
            }
            rec.swap(j - 1, j);
            rec.step(
                Roles::none().swapping([j - 1, j]).sorted(left..i),
                format!("Moving {} one position ahead", prev),
            );
            j -= 1;
        }

        rec.step(
            Roles::none().sorted(left..=i),
            format!("Placed {} at position {}", key, j),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shifts_count_as_swaps_and_stop_comparison_counts() {
        // 1: [2,3,1] -> key 3 vs 2 (stop)            1 comparison
        // 2: key 1 vs 3 (shift), vs 2 (shift), hits left edge  2 comparisons
        let trace = insertion_sort(&[2.0, 3.0, 1.0]);
        assert_eq!(trace.final_array(), &[1.0, 2.0, 3.0]);
        assert_eq!(trace.comparisons, 3);
        assert_eq!(trace.swaps, 2);
    }

    #[test]
    fn sorted_input_needs_n_minus_one_comparisons() {
        let trace = insertion_sort(&[1.0, 2.0, 3.0, 4.0, 5.0]);
        assert_eq!(trace.comparisons, 4);
        assert_eq!(trace.swaps, 0);
    }

    #[test]
    fn placement_step_reports_final_slot() {
        let trace = insertion_sort(&[2.0, 1.0]);
        let placed = trace
            .steps
            .iter()
            .find(|s| s.description.starts_with("Placed"))
            .unwrap();
        assert_eq!(placed.description, "Placed 1 at position 0");
        assert_eq!(placed.array, vec![1.0, 2.0]);
        assert_eq!(placed.roles.sorted, Some(vec![0, 1]));
    }

    #[test]
    fn ranged_routine_leaves_outside_untouched() {
        let mut rec = Recorder::start(Algorithm::Tim, &[9.0, 3.0, 2.0, 1.0, 0.0]);
        insertion_range(&mut rec, 1, 3);
        assert_eq!(rec.data(), &[9.0, 1.0, 2.0, 3.0, 0.0]);
    }
}
