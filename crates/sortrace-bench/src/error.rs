//! Error types for the benchmark harness.

use thiserror::Error;

/// Errors produced by sortrace-bench.
#[derive(Debug, Error)]
pub enum BenchError {
    /// Imported data was not a JSON list of benchmark results.
    #[error("invalid benchmark JSON: {0}")]
    InvalidImport(#[source] serde_json::Error),

    /// Results could not be serialized.
    #[error("failed to export benchmark results: {0}")]
    Export(#[source] serde_json::Error),

    /// An environment override held an unparsable value.
    #[error("invalid value for {var}: '{value}'")]
    InvalidConfig { var: String, value: String },

    /// A requested input size exceeds the session cap.
    #[error("input size {size} exceeds the maximum of {max}")]
    SizeTooLarge { size: usize, max: usize },

    /// The key does not name an input shape.
    #[error("unknown array kind: '{key}' (expected random, sorted, reverse, nearly_sorted or custom)")]
    UnknownArrayKind { key: String },
}
