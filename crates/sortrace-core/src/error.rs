//! Core error types for sortrace-core.
//!
//! Sort runs themselves never fail: preconditions on the input are the
//! caller's responsibility. The only fallible surface is resolving an
//! algorithm from its string key.

use thiserror::Error;

/// Errors produced by the sortrace-core crate.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// The key does not name one of the supported algorithms.
    #[error("unknown algorithm: '{key}' (expected one of: {expected})")]
    UnknownAlgorithm { key: String, expected: String },
}
