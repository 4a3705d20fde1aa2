//! Quick sort with the Lomuto partition scheme and a last-element pivot.
//!
//! Already-sorted input degrades to O(n²) comparisons; that is a property
//! of the pivot rule, not a failure.

use crate::algorithm::Algorithm;
use crate::recorder::{record, Recorder};
use crate::trace::{Roles, Trace};

/// Traces a quick sort of `input`.
pub fn quick_sort(input: &[f64]) -> Trace {
    record(Algorithm::Quick, input, |rec| {
        let mut settled = Vec::new();
        let high = rec.len() - 1;
        sort_range(rec, 0, high, &mut settled);
    })
}

/// Sorts `low..=high`. Ranges with fewer than two elements are left alone.
fn sort_range(rec: &mut Recorder, low: usize, high: usize, settled: &mut Vec<usize>) {
    if low >= high {
        return;
    }

    let boundary = partition(rec, low, high, settled);
    settled.push(boundary);
    rec.step(
        Roles::none().sorted(settled.iter().copied()),
        format!("Pivot {} is now in correct position", rec.get(boundary)),
    );

    if boundary > low {
        sort_range(rec, low, boundary - 1, settled);
    }
    sort_range(rec, boundary + 1, high, settled);
}

/// Partitions `low..=high` around `data[high]` and returns the pivot's
/// final index.
fn partition(rec: &mut Recorder, low: usize, high: usize, settled: &[usize]) -> usize {
    let pivot = rec.get(high);
    rec.step(
        Roles::none().pivot(high).sorted(settled.iter().copied()),
        format!("Partitioning with pivot {} at position {}", pivot, high),
    );

    // Everything left of `store` is <= pivot.
    let mut store = low;
    for j in low..high {
        let value = rec.get(j);
        rec.count_comparison();
        rec.step(
            Roles::none().comparing([j]).pivot(high).sorted(settled.iter().copied()),
            format!("Comparing {} with pivot {}", value, pivot),
        );

        if value <= pivot {
            if store != j {
                let displaced = rec.get(store);
                rec.swap(store, j);
                rec.step(
                    Roles::none().swapping([store, j]).pivot(high).sorted(settled.iter().copied()),
                    format!("Swapping {} and {}", value, displaced),
                );
            }
            store += 1;
        }
    }

    rec.swap(store, high);
    rec.step(
        Roles::none().swapping([store, high]).sorted(settled.iter().copied()),
        format!("Placing pivot {} at final position {}", pivot, store),
    );
    store
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sorted_input_terminates_with_quadratic_comparisons() {
        let trace = quick_sort(&[1.0, 2.0, 3.0, 4.0, 5.0]);
        assert_eq!(trace.final_array(), &[1.0, 2.0, 3.0, 4.0, 5.0]);
        assert_eq!(trace.final_step().roles.sorted, Some(vec![0, 1, 2, 3, 4]));
        // 4 + 3 + 2 + 1 element-vs-pivot tests
        assert_eq!(trace.comparisons, 10);
        // only the pivot placements, which are counted even in place
        assert_eq!(trace.swaps, 4);
    }

    #[test]
    fn partition_announces_pivot_before_comparing() {
        let trace = quick_sort(&[3.0, 1.0, 2.0]);
        let first_pivot = trace.steps.iter().position(|s| s.roles.pivot.is_some()).unwrap();
        assert_eq!(
            trace.steps[first_pivot].description,
            "Partitioning with pivot 2 at position 2"
        );
        assert!(trace.steps[first_pivot].roles.comparing.is_none());
        assert_eq!(trace.steps[first_pivot + 1].roles.comparing, Some(vec![0]));
    }

    #[test]
    fn settled_pivots_accumulate() {
        let trace = quick_sort(&[4.0, 3.0, 2.0, 1.0]);
        let settled: Vec<_> = trace
            .steps
            .iter()
            .filter(|s| s.description.ends_with("is now in correct position"))
            .map(|s| s.roles.sorted.clone().unwrap())
            .collect();
        for pair in settled.windows(2) {
            assert!(pair[1].len() == pair[0].len() + 1);
            assert!(pair[0].iter().all(|i| pair[1].contains(i)));
        }
        assert_eq!(trace.final_array(), &[1.0, 2.0, 3.0, 4.0]);
    }
}
