//! The benchmark result store and the runs that feed it.
//!
//! A [`BenchmarkStore`] is an ordinary value owned by its caller; there is
//! no process-wide instance. It keeps the most recent `max_results` runs.

use std::time::{Instant, SystemTime, UNIX_EPOCH};

use sortrace_core::{engine, Algorithm};

use crate::config::BenchConfig;
use crate::error::BenchError;
use crate::generator::{ArrayKind, InputGenerator};
use crate::result::{BenchmarkResult, Comparison, Ranking, ResultFilter, Summary};

/// Retained benchmark results plus the operations that produce them.
#[derive(Debug, Clone)]
pub struct BenchmarkStore {
    results: Vec<BenchmarkResult>,
    max_results: usize,
}

impl Default for BenchmarkStore {
    fn default() -> Self {
        BenchmarkStore::new(BenchConfig::default().max_results)
    }
}

impl BenchmarkStore {
    pub fn new(max_results: usize) -> Self {
        BenchmarkStore {
            results: Vec::new(),
            max_results,
        }
    }

    pub fn from_config(config: &BenchConfig) -> Self {
        BenchmarkStore::new(config.max_results)
    }

    /// Times one engine call on a fresh copy of `input` and stores the
    /// result. `input` itself is never handed to the engine.
    pub fn run_benchmark(
        &mut self,
        algorithm: Algorithm,
        input: &[f64],
        kind: ArrayKind,
    ) -> BenchmarkResult {
        let working = input.to_vec();
        let started = Instant::now();
        let trace = engine::run(algorithm, &working);
        let elapsed = started.elapsed();

        let result = BenchmarkResult {
            algorithm,
            array_size: input.len(),
            execution_time_ms: elapsed.as_secs_f64() * 1000.0,
            comparisons: trace.comparisons,
            swaps: trace.swaps,
            array_kind: kind,
            timestamp_ms: now_ms(),
            input: input.to_vec(),
        };
        tracing::debug!(
            algorithm = algorithm.key(),
            size = result.array_size,
            kind = kind.key(),
            time_ms = result.execution_time_ms,
            "benchmark run complete"
        );

        self.push(result.clone());
        result
    }

    /// Runs each algorithm on its own copy of the same input and ranks them
    /// by efficiency score, best first.
    pub fn run_comparison(
        &mut self,
        algorithms: &[Algorithm],
        input: &[f64],
        kind: ArrayKind,
    ) -> Comparison {
        let results: Vec<BenchmarkResult> = algorithms
            .iter()
            .map(|&algorithm| self.run_benchmark(algorithm, input, kind))
            .collect();

        let mut rankings: Vec<Ranking> = results
            .iter()
            .map(|r| Ranking {
                algorithm: r.algorithm,
                score: r.efficiency_score(),
            })
            .collect();
        rankings.sort_by(|a, b| b.score.total_cmp(&a.score));

        Comparison {
            array_size: input.len(),
            array_kind: kind,
            winner: rankings.first().map(|r| r.algorithm),
            results,
            rankings,
        }
    }

    /// Runs a comparison for every size and shape combination, generating
    /// one input per combination.
    pub fn run_comprehensive(
        &mut self,
        generator: &mut InputGenerator,
        algorithms: &[Algorithm],
        sizes: &[usize],
        kinds: &[ArrayKind],
    ) -> Vec<Comparison> {
        let mut comparisons = Vec::with_capacity(sizes.len() * kinds.len());
        for &size in sizes {
            for &kind in kinds {
                let input = generator.generate(size, kind);
                let comparison = self.run_comparison(algorithms, &input, kind);
                tracing::info!(
                    size,
                    kind = kind.key(),
                    winner = comparison.winner.map(Algorithm::key),
                    "comparison complete"
                );
                comparisons.push(comparison);
            }
        }
        comparisons
    }

    /// Runs the session described by `config`.
    pub fn run_config(&mut self, config: &BenchConfig) -> Vec<Comparison> {
        let mut generator = InputGenerator::new(config.seed);
        self.run_comprehensive(&mut generator, &config.algorithms, &config.sizes, &config.kinds)
    }

    /// Aggregates every stored result for `algorithm`.
    pub fn summary(&self, algorithm: Algorithm) -> Option<Summary> {
        let runs: Vec<&BenchmarkResult> = self
            .results
            .iter()
            .filter(|r| r.algorithm == algorithm)
            .collect();
        Summary::from_results(algorithm, &runs)
    }

    /// Summaries for every algorithm with at least one stored result.
    pub fn summaries(&self) -> Vec<Summary> {
        Algorithm::ALL
            .into_iter()
            .filter_map(|a| self.summary(a))
            .collect()
    }

    /// All retained results, oldest first.
    pub fn results(&self) -> &[BenchmarkResult] {
        &self.results
    }

    pub fn filtered(&self, filter: &ResultFilter) -> Vec<&BenchmarkResult> {
        self.results.iter().filter(|r| filter.matches(r)).collect()
    }

    pub fn clear(&mut self) {
        self.results.clear();
    }

    /// Pretty-printed JSON list of every retained result.
    pub fn export_json(&self) -> Result<String, BenchError> {
        serde_json::to_string_pretty(&self.results).map_err(BenchError::Export)
    }

    /// Appends results from a JSON list produced by [`export_json`]
    /// and returns how many were read. Invalid input leaves the store
    /// unchanged.
    ///
    /// [`export_json`]: BenchmarkStore::export_json
    pub fn import_json(&mut self, json: &str) -> Result<usize, BenchError> {
        let imported: Vec<BenchmarkResult> =
            serde_json::from_str(json).map_err(BenchError::InvalidImport)?;
        let count = imported.len();
        self.results.extend(imported);
        self.trim();
        Ok(count)
    }

    fn push(&mut self, result: BenchmarkResult) {
        self.results.push(result);
        self.trim();
    }

    fn trim(&mut self) {
        if self.results.len() > self.max_results {
            let excess = self.results.len() - self.max_results;
            self.results.drain(..excess);
        }
    }
}

fn now_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}
