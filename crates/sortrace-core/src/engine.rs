//! Dispatch from an [`Algorithm`] selector to its traced implementation.

use crate::algorithm::Algorithm;
use crate::algorithms;
use crate::error::CoreError;
use crate::trace::Trace;

/// Entry point signature shared by every algorithm.
pub type SortFn = fn(&[f64]) -> Trace;

/// Returns the traced implementation for `algorithm`.
pub fn sort_fn(algorithm: Algorithm) -> SortFn {
    match algorithm {
        Algorithm::Bubble => algorithms::bubble_sort,
        Algorithm::Selection => algorithms::selection_sort,
        Algorithm::Insertion => algorithms::insertion_sort,
        Algorithm::Quick => algorithms::quick_sort,
        Algorithm::Merge => algorithms::merge_sort,
        Algorithm::Heap => algorithms::heap_sort,
        Algorithm::Shell => algorithms::shell_sort,
        Algorithm::Counting => algorithms::counting_sort,
        Algorithm::Radix => algorithms::radix_sort,
        Algorithm::Bucket => algorithms::bucket_sort,
        Algorithm::Tim => algorithms::tim_sort,
    }
}

/// Runs `algorithm` over a copy of `input` and returns the full trace.
///
/// The input must already be validated by the caller: finite values, and
/// integers for counting sort, non-negative integers for radix sort.
pub fn run(algorithm: Algorithm, input: &[f64]) -> Trace {
    let trace = sort_fn(algorithm)(input);
    tracing::debug!(
        algorithm = algorithm.key(),
        len = input.len(),
        steps = trace.len(),
        comparisons = trace.comparisons,
        swaps = trace.swaps,
        "sort trace generated"
    );
    trace
}

/// Like [`run`], selecting the algorithm by its string key.
pub fn run_key(key: &str, input: &[f64]) -> Result<Trace, CoreError> {
    let algorithm: Algorithm = key.parse()?;
    Ok(run(algorithm, input))
}
