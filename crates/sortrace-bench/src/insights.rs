//! Cross-algorithm conclusions drawn from stored results.

use std::collections::BTreeMap;

use serde::Serialize;
use sortrace_core::Algorithm;

use crate::result::{BenchmarkResult, Summary};
use crate::store::BenchmarkStore;

/// Inputs up to this size count as small.
pub const SMALL_INPUT_MAX: usize = 25;
/// Inputs above this size count as large.
pub const LARGE_INPUT_MIN: usize = 50;

const QUADRATIC: [Algorithm; 3] = [Algorithm::Bubble, Algorithm::Selection, Algorithm::Insertion];
const LOG_LINEAR: [Algorithm; 3] = [Algorithm::Quick, Algorithm::Merge, Algorithm::Heap];

/// Headline findings over a store's results.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Insights {
    pub fastest: Algorithm,
    pub most_efficient: Algorithm,
    pub recommended_small: Algorithm,
    pub recommended_large: Algorithm,
    pub notes: Vec<String>,
}

impl BenchmarkStore {
    /// Derives [`Insights`]. With no data, falls back to quick sort overall
    /// and insertion sort for small inputs.
    pub fn insights(&self) -> Insights {
        let summaries = self.summaries();
        if summaries.is_empty() {
            return Insights {
                fastest: Algorithm::Quick,
                most_efficient: Algorithm::Quick,
                recommended_small: Algorithm::Insertion,
                recommended_large: Algorithm::Quick,
                notes: vec!["No benchmark data available".to_string()],
            };
        }

        let fastest = min_by_time(&summaries);
        let most_efficient = summaries
            .iter()
            .max_by(|a, b| a.efficiency.total_cmp(&b.efficiency))
            .map_or(Algorithm::Quick, |s| s.algorithm);

        let small = best_by_average_time(self.results().iter().filter(|r| r.array_size <= SMALL_INPUT_MAX));
        let large = best_by_average_time(self.results().iter().filter(|r| r.array_size > LARGE_INPUT_MIN));

        Insights {
            fastest: fastest.algorithm,
            most_efficient,
            recommended_small: small.unwrap_or(Algorithm::Insertion),
            recommended_large: large.unwrap_or(Algorithm::Quick),
            notes: notes(&summaries),
        }
    }
}

fn min_by_time(summaries: &[Summary]) -> &Summary {
    summaries
        .iter()
        .min_by(|a, b| a.average_time_ms.total_cmp(&b.average_time_ms))
        .unwrap_or(&summaries[0])
}

fn best_by_average_time<'a>(results: impl Iterator<Item = &'a BenchmarkResult>) -> Option<Algorithm> {
    let mut totals: BTreeMap<Algorithm, (f64, usize)> = BTreeMap::new();
    for result in results {
        let entry = totals.entry(result.algorithm).or_insert((0.0, 0));
        entry.0 += result.execution_time_ms;
        entry.1 += 1;
    }
    totals
        .into_iter()
        .map(|(algorithm, (total, runs))| (algorithm, total / runs as f64))
        .min_by(|a, b| a.1.total_cmp(&b.1))
        .map(|(algorithm, _)| algorithm)
}

fn notes(summaries: &[Summary]) -> Vec<String> {
    let mut notes = Vec::new();

    let fastest = min_by_time(summaries);
    let slowest = summaries
        .iter()
        .max_by(|a, b| a.average_time_ms.total_cmp(&b.average_time_ms))
        .unwrap_or(fastest);

    notes.push(format!(
        "{} is the fastest with {:.2}ms average time",
        fastest.algorithm.key(),
        fastest.average_time_ms
    ));
    if fastest.algorithm != slowest.algorithm {
        notes.push(format!(
            "{} is the slowest with {:.2}ms average time",
            slowest.algorithm.key(),
            slowest.average_time_ms
        ));
    }

    if let (Some(quadratic), Some(log_linear)) = (
        group_average(summaries, &QUADRATIC),
        group_average(summaries, &LOG_LINEAR),
    ) {
        notes.push(format!(
            "O(n log n) algorithms are {:.1}x faster than O(n²) algorithms on average",
            quadratic / log_linear.max(crate::result::MIN_ELAPSED_MS)
        ));
    }

    notes
}

fn group_average(summaries: &[Summary], group: &[Algorithm]) -> Option<f64> {
    let times: Vec<f64> = summaries
        .iter()
        .filter(|s| group.contains(&s.algorithm))
        .map(|s| s.average_time_ms)
        .collect();
    if times.is_empty() {
        None
    } else {
        Some(times.iter().sum::<f64>() / times.len() as f64)
    }
}
