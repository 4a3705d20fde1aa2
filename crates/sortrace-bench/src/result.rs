//! Benchmark records and the aggregates derived from them.

use serde::{Deserialize, Serialize};
use sortrace_core::Algorithm;

use crate::generator::ArrayKind;

/// Floor applied to measured durations before computing rates, so a run
/// faster than the clock resolution does not divide by zero.
pub const MIN_ELAPSED_MS: f64 = 0.001;

/// One timed invocation of the engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BenchmarkResult {
    pub algorithm: Algorithm,
    pub array_size: usize,
    /// Wall-clock time of the engine call, in milliseconds.
    pub execution_time_ms: f64,
    pub comparisons: u64,
    pub swaps: u64,
    pub array_kind: ArrayKind,
    /// Milliseconds since the Unix epoch when the run finished.
    pub timestamp_ms: u64,
    pub input: Vec<f64>,
}

impl BenchmarkResult {
    /// Comparisons plus swaps.
    pub fn operations(&self) -> u64 {
        self.comparisons + self.swaps
    }

    /// `(operations per second) / sqrt(n)`; higher is better.
    pub fn efficiency_score(&self) -> f64 {
        let seconds = self.execution_time_ms.max(MIN_ELAPSED_MS) / 1000.0;
        let per_second = self.operations() as f64 / seconds;
        per_second / (self.array_size.max(1) as f64).sqrt()
    }
}

/// Aggregate statistics for one algorithm over all stored results.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    pub algorithm: Algorithm,
    pub average_time_ms: f64,
    pub min_time_ms: f64,
    pub max_time_ms: f64,
    pub total_runs: usize,
    pub average_comparisons: f64,
    pub average_swaps: f64,
    /// Average operations per millisecond.
    pub efficiency: f64,
}

impl Summary {
    /// Summarizes `results`, which must all belong to `algorithm`.
    pub fn from_results(algorithm: Algorithm, results: &[&BenchmarkResult]) -> Option<Self> {
        if results.is_empty() {
            return None;
        }
        let runs = results.len() as f64;
        let times = results.iter().map(|r| r.execution_time_ms);
        let average_time_ms = times.clone().sum::<f64>() / runs;
        let average_comparisons = results.iter().map(|r| r.comparisons as f64).sum::<f64>() / runs;
        let average_swaps = results.iter().map(|r| r.swaps as f64).sum::<f64>() / runs;

        Some(Summary {
            algorithm,
            average_time_ms,
            min_time_ms: times.clone().fold(f64::INFINITY, f64::min),
            max_time_ms: times.fold(f64::NEG_INFINITY, f64::max),
            total_runs: results.len(),
            average_comparisons,
            average_swaps,
            efficiency: (average_comparisons + average_swaps)
                / average_time_ms.max(MIN_ELAPSED_MS),
        })
    }
}

/// An algorithm's position in a comparison.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Ranking {
    pub algorithm: Algorithm,
    pub score: f64,
}

/// Several algorithms run on the same input.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Comparison {
    pub array_size: usize,
    pub array_kind: ArrayKind,
    pub results: Vec<BenchmarkResult>,
    /// Best first.
    pub rankings: Vec<Ranking>,
    /// Top-ranked algorithm; `None` only when no algorithm was run.
    pub winner: Option<Algorithm>,
}

/// Criteria for selecting stored results. Unset fields match everything.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResultFilter {
    pub algorithm: Option<Algorithm>,
    pub array_kind: Option<ArrayKind>,
    pub min_size: Option<usize>,
    pub max_size: Option<usize>,
    /// Only results with `timestamp_ms >= since_ms`.
    pub since_ms: Option<u64>,
}

impl ResultFilter {
    pub fn matches(&self, result: &BenchmarkResult) -> bool {
        self.algorithm.map_or(true, |a| result.algorithm == a)
            && self.array_kind.map_or(true, |k| result.array_kind == k)
            && self.min_size.map_or(true, |min| result.array_size >= min)
            && self.max_size.map_or(true, |max| result.array_size <= max)
            && self.since_ms.map_or(true, |t| result.timestamp_ms >= t)
    }
}

#[cfg(test)]
pub(crate) fn sample(algorithm: Algorithm, size: usize, time_ms: f64) -> BenchmarkResult {
    BenchmarkResult {
        algorithm,
        array_size: size,
        execution_time_ms: time_ms,
        comparisons: 10,
        swaps: 5,
        array_kind: ArrayKind::Random,
        timestamp_ms: 1_000,
        input: vec![0.0; size],
    }
}
