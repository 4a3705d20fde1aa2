//! Bucket sort with at most ten equal-width buckets.
//!
//! `bucket_count = min(n, 10)` and `width = ceil((max - min + 1) / count)`.
//! Each bucket is insertion-sorted on its own, which keeps the sort stable.

use crate::algorithm::Algorithm;
use crate::recorder::{record, Recorder};
use crate::trace::{Auxiliary, Roles, Trace};

use super::value_bounds;

/// Upper bound on the number of buckets regardless of input size.
pub const MAX_BUCKETS: usize = 10;

/// Traces a bucket sort of `input`.
///
/// Comparisons come only from the per-bucket sorts; every element written
/// back into the main array counts as one swap.
pub fn bucket_sort(input: &[f64]) -> Trace {
    record(Algorithm::Bucket, input, run)
}

fn run(rec: &mut Recorder) {
    let n = rec.len();
    let (min, max) = value_bounds(rec.data());
    let count = n.min(MAX_BUCKETS);
    let width = ((max - min + 1.0) / count as f64).ceil();

    let mut buckets: Vec<Vec<f64>> = vec![Vec::new(); count];
    rec.step_with(
        Roles::none(),
        Auxiliary::Buckets(buckets.clone()),
        format!("Using {} buckets, each covering range of {}", count, width),
    );

    for i in 0..n {
        let value = rec.get(i);
        let index = bucket_index(value, min, width, count);
        buckets[index].push(value);
        rec.step_with(
            Roles::none().comparing([i]),
            Auxiliary::Buckets(buckets.clone()),
            format!("Placing {} into bucket {}", value, index),
        );
    }

    let mut index = 0;
    for b in 0..count {
        if buckets[b].is_empty() {
            continue;
        }

        rec.step_with(
            Roles::none().sorted(0..index),
            Auxiliary::Buckets(buckets.clone()),
            format!("Sorting bucket {} with {} elements", b, buckets[b].len()),
        );
        sort_bucket(rec, &mut buckets, b);

        let start = index;
        for value in buckets[b].clone() {
            rec.write(index, value);
            rec.step_with(
                Roles::none().swapping([index]).sorted(0..index),
                Auxiliary::Buckets(buckets.clone()),
                format!("Placing {} from bucket {} to position {}", value, b, index),
            );
            index += 1;
        }

        rec.step_with(
            Roles::none().sorted(0..index),
            Auxiliary::Buckets(buckets.clone()),
            format!(
                "Bucket {} emptied into positions {}...{}",
                b,
                start,
                index - 1
            ),
        );
    }
}

fn bucket_index(value: f64, min: f64, width: f64, count: usize) -> usize {
    (((value - min) / width).floor() as usize).min(count - 1)
}

/// Insertion-sorts bucket `b`, counting each comparison against the run.
fn sort_bucket(rec: &mut Recorder, buckets: &mut [Vec<f64>], b: usize) {
    for p in 1..buckets[b].len() {
        let key = buckets[b][p];
        let mut q = p;
        while q > 0 {
            let prev = buckets[b][q - 1];
            rec.count_comparison();
            if prev <= key {
                rec.step_with(
                    Roles::none(),
                    Auxiliary::Buckets(buckets.to_vec()),
                    format!("Bucket {}: {} <= {}, order kept", b, prev, key),
                );
                break;
            }
            buckets[b].swap(q - 1, q);
            rec.step_with(
                Roles::none(),
                Auxiliary::Buckets(buckets.to_vec()),
                format!("Bucket {}: {} > {}, moving {} ahead", b, prev, key, key),
            );
            q -= 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bucket_count_is_capped_at_ten() {
        let input: Vec<f64> = (0..40).rev().map(f64::from).collect();
        let trace = bucket_sort(&input);
        assert_eq!(
            trace.steps[1].description,
            "Using 10 buckets, each covering range of 4"
        );
        let expected: Vec<f64> = (0..40).map(f64::from).collect();
        assert_eq!(trace.final_array(), expected.as_slice());
        assert_eq!(trace.swaps, 40);
    }

    #[test]
    fn small_input_uses_one_bucket_per_element() {
        let trace = bucket_sort(&[9.0, 1.0, 5.0]);
        assert_eq!(
            trace.steps[1].description,
            "Using 3 buckets, each covering range of 3"
        );
        assert_eq!(trace.final_array(), &[1.0, 5.0, 9.0]);
        // one element per bucket: nothing to compare
        assert_eq!(trace.comparisons, 0);
    }

    #[test]
    fn max_value_is_clamped_into_last_bucket() {
        assert_eq!(bucket_index(10.0, 0.0, 1.0, 10), 9);
        assert_eq!(bucket_index(0.0, 0.0, 1.0, 10), 0);
    }

    #[test]
    fn intra_bucket_comparisons_accumulate() {
        // all in one bucket: [3,2,1] needs 1 + 2 comparisons
        let trace = bucket_sort(&[3.0, 2.0, 1.0, 100.0]);
        assert_eq!(trace.final_array(), &[1.0, 2.0, 3.0, 100.0]);
        assert_eq!(trace.comparisons, 3);
        assert_eq!(trace.swaps, 4);
    }
}
