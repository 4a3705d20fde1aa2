//! Bubble sort: repeated adjacent-pair sweeps with early exit.

use crate::algorithm::Algorithm;
use crate::recorder::{record, Recorder};
use crate::trace::{Roles, Trace};

/// Traces a bubble sort of `input`.
///
/// After pass `i` the last `i` positions are settled. A pass with no
/// exchange ends the run early with a distinct "already sorted" step.
pub fn bubble_sort(input: &[f64]) -> Trace {
    record(Algorithm::Bubble, input, run)
}

fn run(rec: &mut Recorder) {
    let n = rec.len();

    for pass in 0..n - 1 {
        let mut swapped = false;

        for j in 0..n - pass - 1 {
            let (a, b) = (rec.get(j), rec.get(j + 1));
            rec.count_comparison();
            rec.step(
                Roles::none().comparing([j, j + 1]).sorted(n - pass..n),
                format!("Comparing elements at positions {} and {}: {} vs {}", j, j + 1, a, b),
            );

            if a > b {
                rec.swap(j, j + 1);
                swapped = true;
                rec.step(
                    Roles::none().swapping([j, j + 1]).sorted(n - pass..n),
                    format!("Swapping {} and {}", a, b),
                );
            }
        }

        if !swapped {
            rec.step(
                Roles::none().sorted(0..n),
                "No swaps needed - array is sorted!",
            );
            return;
        }

        let settled = n - pass - 1;
        rec.step(
            Roles::none().sorted(settled..n),
            format!(
                "Pass {} complete: {} settled at position {}",
                pass + 1,
                rec.get(settled),
                settled
            ),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_match_hand_trace() {
        let trace = bubble_sort(&[5.0, 3.0, 8.0, 1.0]);
        assert_eq!(trace.final_array(), &[1.0, 3.0, 5.0, 8.0]);
        assert_eq!(trace.comparisons, 6);
        assert_eq!(trace.swaps, 4);
    }

    #[test]
    fn sorted_input_exits_after_one_pass() {
        let trace = bubble_sort(&[1.0, 2.0, 3.0, 4.0]);
        assert_eq!(trace.comparisons, 3);
        assert_eq!(trace.swaps, 0);

        let early = &trace.steps[trace.len() - 2];
        assert_eq!(early.description, "No swaps needed - array is sorted!");
        assert_eq!(early.roles.sorted, Some(vec![0, 1, 2, 3]));
        assert_eq!(trace.final_step().description, "Bubble Sort completed!");
    }

    #[test]
    fn swap_steps_show_the_exchanged_array() {
        let trace = bubble_sort(&[2.0, 1.0]);
        let swap = trace
            .steps
            .iter()
            .find(|s| s.roles.swapping.is_some())
            .unwrap();
        assert_eq!(swap.array, vec![1.0, 2.0]);
        assert_eq!(swap.description, "Swapping 2 and 1");
    }

    #[test]
    fn pass_milestone_marks_settled_tail() {
        let trace = bubble_sort(&[3.0, 2.0, 1.0]);
        let milestone = trace
            .steps
            .iter()
            .find(|s| s.description.starts_with("Pass 1 complete"))
            .unwrap();
        assert_eq!(milestone.roles.sorted, Some(vec![2]));
        assert_eq!(milestone.description, "Pass 1 complete: 3 settled at position 2");
    }
}
