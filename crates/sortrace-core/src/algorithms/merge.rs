//! Top-down merge sort, plus the merge routine shared with tim sort.

use crate::algorithm::Algorithm;
use crate::recorder::{record, Recorder};
use crate::trace::{Auxiliary, Roles, Trace};

/// Traces a merge sort of `input`. Stable: ties take the left run first.
pub fn merge_sort(input: &[f64]) -> Trace {
    record(Algorithm::Merge, input, |rec| {
        let right = rec.len() - 1;
        sort_range(rec, 0, right);
    })
}

fn sort_range(rec: &mut Recorder, left: usize, right: usize) {
    if left < right {
        let mid = (left + right) / 2;
        sort_range(rec, left, mid);
        sort_range(rec, mid + 1, right);
        merge_ranges(rec, left, mid, right);
    }
}

/// Merges the sorted runs `left..=mid` and `mid+1..=right`.
///
/// Both runs are snapshotted before any write; every placed element is one
/// comparison-free write counted as a swap and recorded as a step.
pub(crate) fn merge_ranges(rec: &mut Recorder, left: usize, mid: usize, right: usize) {
    let lower = rec.data()[left..=mid].to_vec();
    let upper = rec.data()[mid + 1..=right].to_vec();

    rec.step_with(
        Roles::none().comparing(left..=right),
        Auxiliary::Halves {
            left: lower.clone(),
            right: upper.clone(),
        },
        format!(
            "Merging subarrays [{}...{}] and [{}...{}]",
            left,
            mid,
            mid + 1,
            right
        ),
    );

    let (mut i, mut j, mut k) = (0, 0, left);
    while i < lower.len() && j < upper.len() {
        rec.count_comparison();
        let (value, side) = if lower[i] <= upper[j] {
            i += 1;
            (lower[i - 1], "left")
        } else {
            j += 1;
            (upper[j - 1], "right")
        };
        rec.write(k, value);
        rec.step(
            Roles::none().swapping([k]),
            format!("Placing {} from the {} half at position {}", value, side, k),
        );
        k += 1;
    }

    for &value in lower[i..].iter().chain(&upper[j..]) {
        rec.write(k, value);
        rec.step(
            Roles::none().swapping([k]),
            format!("Placing remaining {} at position {}", value, k),
        );
        k += 1;
    }

    rec.step(
        Roles::none().sorted(left..=right),
        format!("Merged subarray [{}...{}]", left, right),
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn merge_snapshots_both_halves_first() {
        let trace = merge_sort(&[2.0, 1.0]);
        let merge = trace
            .steps
            .iter()
            .find(|s| s.auxiliary.is_some())
            .unwrap();
        assert_eq!(
            merge.auxiliary,
            Some(Auxiliary::Halves {
                left: vec![2.0],
                right: vec![1.0]
            })
        );
        assert_eq!(merge.array, vec![2.0, 1.0]);
        assert_eq!(merge.description, "Merging subarrays [0...0] and [1...1]");
    }

    #[test]
    fn every_placement_is_a_counted_write() {
        let trace = merge_sort(&[4.0, 3.0, 2.0, 1.0]);
        assert_eq!(trace.final_array(), &[1.0, 2.0, 3.0, 4.0]);
        // three merges writing 2 + 2 + 4 elements
        assert_eq!(trace.swaps, 8);
        assert_eq!(trace.comparisons, 4);
        let placements = trace
            .steps
            .iter()
            .filter(|s| s.description.starts_with("Placing"))
            .count();
        assert_eq!(placements, 8);
    }

    #[test]
    fn ties_take_the_left_half() {
        let trace = merge_sort(&[0.0, -0.0]);
        let bits: Vec<u64> = trace.final_array().iter().map(|v| v.to_bits()).collect();
        assert_eq!(bits, vec![0.0f64.to_bits(), (-0.0f64).to_bits()]);
    }
}
