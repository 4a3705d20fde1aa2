//! Benchmark harness for the sort trace engine.
//!
//! Generates inputs of several shapes, times engine calls on fresh copies
//! of them, and aggregates the comparison and swap counters each trace
//! reports into summaries, rankings and insights. Results can be exported
//! to and imported from JSON.
//!
//! All state lives in an explicitly constructed [`BenchmarkStore`]:
//!
//! ```
//! use sortrace_bench::{ArrayKind, BenchmarkStore, InputGenerator};
//! use sortrace_core::Algorithm;
//!
//! let mut store = BenchmarkStore::default();
//! let mut generator = InputGenerator::new(42);
//! let input = generator.generate(20, ArrayKind::Random);
//! let comparison = store.run_comparison(&[Algorithm::Quick, Algorithm::Merge], &input, ArrayKind::Random);
//! assert_eq!(comparison.results.len(), 2);
//! ```

pub mod config;
pub mod error;
pub mod generator;
pub mod insights;
pub mod result;
pub mod store;

pub use config::{BenchConfig, MAX_INPUT_LEN};
pub use error::BenchError;
pub use generator::{ArrayKind, InputGenerator};
pub use insights::Insights;
pub use result::{BenchmarkResult, Comparison, Ranking, ResultFilter, Summary};
pub use store::BenchmarkStore;
