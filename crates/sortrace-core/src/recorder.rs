//! Shared step-recording discipline for every algorithm body.
//!
//! A [`Recorder`] owns the working copy of the input, the growing step list
//! and both counters. Algorithms receive it as `&mut Recorder` through
//! [`record`], which also guarantees the common opening step, the
//! short-circuit for inputs of length 0 or 1, and the closing
//! fully-sorted step.

use crate::algorithm::Algorithm;
use crate::trace::{Auxiliary, Roles, Step, Trace};

/// Runs `body` against a fresh recorder seeded from `input` and returns the
/// finished trace.
///
/// Inputs with fewer than two elements never reach `body`.
pub fn record<F>(algorithm: Algorithm, input: &[f64], body: F) -> Trace
where
    F: FnOnce(&mut Recorder),
{
    let mut rec = Recorder::start(algorithm, input);
    if rec.len() <= 1 {
        return rec.finish_trivial();
    }
    body(&mut rec);
    rec.finish()
}

/// Working state of one sort run.
#[derive(Debug)]
pub struct Recorder {
    algorithm: Algorithm,
    data: Vec<f64>,
    steps: Vec<Step>,
    comparisons: u64,
    swaps: u64,
}

impl Recorder {
    /// Copies `input` and records the opening strategy step.
    pub fn start(algorithm: Algorithm, input: &[f64]) -> Self {
        let mut rec = Recorder {
            algorithm,
            data: input.to_vec(),
            steps: Vec::new(),
            comparisons: 0,
            swaps: 0,
        };
        rec.step(
            Roles::none(),
            format!("Starting {} - {}", algorithm.name(), algorithm.strategy()),
        );
        rec
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Current working array.
    pub fn data(&self) -> &[f64] {
        &self.data
    }

    pub fn get(&self, index: usize) -> f64 {
        self.data[index]
    }

    pub fn comparisons(&self) -> u64 {
        self.comparisons
    }

    pub fn swaps(&self) -> u64 {
        self.swaps
    }

    /// Counts one element-vs-element value comparison.
    pub fn count_comparison(&mut self) {
        self.comparisons += 1;
    }

    /// Counts a relocation that happens outside the working array, such as a
    /// write into an output buffer.
    pub fn count_swap(&mut self) {
        self.swaps += 1;
    }

    /// Exchanges two positions and counts one swap.
    pub fn swap(&mut self, a: usize, b: usize) {
        self.data.swap(a, b);
        self.swaps += 1;
    }

    /// Writes `value` at `index` and counts one relocation.
    pub fn write(&mut self, index: usize, value: f64) {
        self.data[index] = value;
        self.swaps += 1;
    }

    /// Replaces the whole working array without counting. Used when a
    /// buffer whose writes were already counted is copied back.
    pub fn replace_all(&mut self, values: Vec<f64>) {
        assert_eq!(
            values.len(),
            self.data.len(),
            "replacement must keep the array length"
        );
        self.data = values;
    }

    /// Records a snapshot of the working array.
    pub fn step(&mut self, roles: Roles, description: impl Into<String>) {
        self.push(roles, None, description.into());
    }

    /// Records a snapshot together with a helper-buffer snapshot.
    pub fn step_with(&mut self, roles: Roles, auxiliary: Auxiliary, description: impl Into<String>) {
        self.push(roles, Some(auxiliary), description.into());
    }

    fn push(&mut self, roles: Roles, auxiliary: Option<Auxiliary>, description: String) {
        debug_assert!(
            roles.pivot.map_or(true, |p| p < self.data.len()),
            "pivot index out of range"
        );
        self.steps.push(Step {
            array: self.data.clone(),
            roles,
            auxiliary,
            description,
        });
    }

    /// Records the closing step and returns the trace.
    pub fn finish(mut self) -> Trace {
        let n = self.data.len();
        let description = format!("{} completed!", self.algorithm.name());
        self.step(Roles::none().sorted(0..n), description);
        self.into_trace()
    }

    /// Closes a run whose input needs no work.
    pub fn finish_trivial(mut self) -> Trace {
        let n = self.data.len();
        self.step(
            Roles::none().sorted(0..n),
            "Array has 1 or fewer elements, already sorted!",
        );
        self.into_trace()
    }

    fn into_trace(self) -> Trace {
        Trace {
            algorithm: self.algorithm,
            steps: self.steps,
            comparisons: self.comparisons,
            swaps: self.swaps,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn start_records_input_and_strategy() {
        let rec = Recorder::start(Algorithm::Merge, &[3.0, 1.0]);
        assert_eq!(rec.steps.len(), 1);
        assert_eq!(rec.steps[0].array, vec![3.0, 1.0]);
        assert_eq!(
            rec.steps[0].description,
            "Starting Merge Sort - Divide array into smaller subarrays and merge them"
        );
    }

    #[test]
    fn swap_and_write_are_counted_but_replace_is_not() {
        let mut rec = Recorder::start(Algorithm::Radix, &[3.0, 1.0, 2.0]);
        rec.swap(0, 1);
        rec.write(2, 9.0);
        rec.replace_all(vec![1.0, 2.0, 3.0]);
        rec.count_comparison();
        assert_eq!(rec.data(), &[1.0, 2.0, 3.0]);
        assert_eq!(rec.swaps(), 2);
        assert_eq!(rec.comparisons(), 1);
    }

    #[test]
    fn steps_snapshot_the_current_array() {
        let mut rec = Recorder::start(Algorithm::Bubble, &[2.0, 1.0]);
        rec.swap(0, 1);
        rec.step(Roles::none().swapping([0, 1]), "Swapping 2 and 1");
        let trace = rec.finish();
        assert_eq!(trace.steps[0].array, vec![2.0, 1.0]);
        assert_eq!(trace.steps[1].array, vec![1.0, 2.0]);
        assert_eq!(trace.final_step().roles.sorted, Some(vec![0, 1]));
        assert_eq!(trace.final_step().description, "Bubble Sort completed!");
    }

    #[test]
    fn record_short_circuits_tiny_inputs() {
        for input in [vec![], vec![7.0]] {
            let trace = record(Algorithm::Quick, &input, |_| {
                panic!("body must not run for tiny inputs")
            });
            assert_eq!(trace.len(), 2);
            assert_eq!(trace.comparisons, 0);
            assert_eq!(trace.swaps, 0);
            assert_eq!(trace.final_step().roles.sorted, Some((0..input.len()).collect()));
        }
    }
}
