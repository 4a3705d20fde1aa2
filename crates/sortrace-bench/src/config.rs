//! Benchmark session configuration.
//!
//! Defaults cover every algorithm over sizes 10, 25, 50 and 100 and all four
//! generated shapes. Environment variables override individual fields:
//! - `SORTRACE_SEED`: generator seed (default: 42)
//! - `SORTRACE_MAX_RESULTS`: retained result cap (default: 1000)
//! - `SORTRACE_SIZES`: comma-separated input sizes (default: "10,25,50,100")
//!
//! Every step of a trace snapshots the whole array, so sizes are capped at
//! [`MAX_INPUT_LEN`].

use std::str::FromStr;

use sortrace_core::Algorithm;

use crate::error::BenchError;
use crate::generator::ArrayKind;

/// Largest input size a benchmark session may generate.
pub const MAX_INPUT_LEN: usize = 100;

/// Configuration for a benchmark session.
#[derive(Debug, Clone, PartialEq)]
pub struct BenchConfig {
    pub algorithms: Vec<Algorithm>,
    pub sizes: Vec<usize>,
    pub kinds: Vec<ArrayKind>,
    /// Seed for the input generator.
    pub seed: u64,
    /// Number of most recent results a store keeps.
    pub max_results: usize,
}

impl Default for BenchConfig {
    fn default() -> Self {
        BenchConfig {
            algorithms: Algorithm::ALL.to_vec(),
            sizes: vec![10, 25, 50, 100],
            kinds: ArrayKind::GENERATED.to_vec(),
            seed: 42,
            max_results: 1000,
        }
    }
}

impl BenchConfig {
    /// Defaults with overrides read from the process environment.
    pub fn from_env() -> Result<Self, BenchError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Defaults with overrides resolved through `lookup`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, BenchError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = BenchConfig::default();

        if let Some(raw) = lookup("SORTRACE_SEED") {
            config.seed = parse_var("SORTRACE_SEED", &raw)?;
        }
        if let Some(raw) = lookup("SORTRACE_MAX_RESULTS") {
            config.max_results = parse_var("SORTRACE_MAX_RESULTS", &raw)?;
        }
        if let Some(raw) = lookup("SORTRACE_SIZES") {
            config.sizes = raw
                .split(',')
                .map(|part| parse_size("SORTRACE_SIZES", part))
                .collect::<Result<_, _>>()?;
        }

        Ok(config)
    }

    /// Checks that every size is within [`MAX_INPUT_LEN`].
    pub fn validate(&self) -> Result<(), BenchError> {
        match self.sizes.iter().find(|&&size| size > MAX_INPUT_LEN) {
            Some(&size) => Err(BenchError::SizeTooLarge {
                size,
                max: MAX_INPUT_LEN,
            }),
            None => Ok(()),
        }
    }
}

fn parse_size(var: &str, raw: &str) -> Result<usize, BenchError> {
    let size: usize = parse_var(var, raw)?;
    if size > MAX_INPUT_LEN {
        return Err(BenchError::InvalidConfig {
            var: var.to_string(),
            value: raw.to_string(),
        });
    }
    Ok(size)
}

fn parse_var<T: FromStr>(var: &str, raw: &str) -> Result<T, BenchError> {
    raw.trim().parse().map_err(|_| BenchError::InvalidConfig {
        var: var.to_string(),
        value: raw.to_string(),
    })
}
