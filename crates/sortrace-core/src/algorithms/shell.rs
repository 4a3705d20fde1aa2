//! Shell sort with the halving gap sequence `n/2, n/4, ..., 1`.

use crate::algorithm::Algorithm;
use crate::recorder::{record, Recorder};
use crate::trace::{Roles, Trace};

/// Traces a shell sort of `input`.
///
/// Each gap phase is a gapped insertion sort with the same counting rules
/// as [`insertion_sort`](super::insertion_sort).
pub fn shell_sort(input: &[f64]) -> Trace {
    record(Algorithm::Shell, input, run)
}

fn run(rec: &mut Recorder) {
    let n = rec.len();
    let mut gap = n / 2;

    while gap > 0 {
        rec.step(Roles::none(), format!("Using gap of {} to sort subarrays", gap));

        for i in gap..n {
            let temp = rec.get(i);
            rec.step(
                Roles::none().comparing([i]),
                format!("Inserting element {} using gap {}", temp, gap),
            );

            let mut j = i;
            while j >= gap {
                let prev = rec.get(j - gap);
                rec.count_comparison();
                rec.step(
                    Roles::none().comparing([j - gap, j]),
                    format!("Comparing {} with {} (gap {})", prev, temp, gap),
                );
                if prev <= temp {
                    break;
                }
                rec.swap(j - gap, j);
                rec.step(
                    Roles::none().swapping([j, j - gap]),
                    format!("Moving {} to position {}", prev, j),
                );
                j -= gap;
            }

            if j != i {
                rec.step(Roles::none(), format!("Placed {} at position {}", temp, j));
            }
        }

        rec.step(Roles::none(), format!("Completed gap {} phase", gap));
        gap /= 2;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gap_phases(input: &[f64]) -> Vec<String> {
        shell_sort(input)
            .steps
            .into_iter()
            .map(|s| s.description)
            .filter(|d| d.starts_with("Completed gap"))
            .collect()
    }

    #[test]
    fn gaps_halve_down_to_one() {
        let input: Vec<f64> = (0..9).rev().map(f64::from).collect();
        assert_eq!(
            gap_phases(&input),
            vec!["Completed gap 4 phase", "Completed gap 2 phase", "Completed gap 1 phase"]
        );
    }

    #[test]
    fn sorts_reverse_input() {
        let trace = shell_sort(&[6.0, 5.0, 4.0, 3.0, 2.0, 1.0]);
        assert_eq!(trace.final_array(), &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
        assert!(trace.swaps > 0);
    }

    #[test]
    fn all_equal_input_terminates_without_moves() {
        let trace = shell_sort(&[7.0; 6]);
        assert_eq!(trace.final_array(), &[7.0; 6]);
        assert_eq!(trace.swaps, 0);
        // gap 3: 3 comparisons, gap 1: 5 comparisons
        assert_eq!(trace.comparisons, 8);
    }
}
