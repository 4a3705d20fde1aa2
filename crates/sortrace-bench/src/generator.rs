//! Deterministic input generation for benchmark runs.
//!
//! Given the same seed, an [`InputGenerator`] produces the same sequence of
//! arrays, so benchmark sessions can be reproduced.

use std::fmt;
use std::str::FromStr;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use crate::error::BenchError;

/// Shape of a benchmark input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ArrayKind {
    /// Uniform integers in `1..=1000`.
    Random,
    /// `1..=n` ascending.
    Sorted,
    /// `n..=1` descending.
    Reverse,
    /// Ascending with `floor(n / 10)` random position swaps.
    NearlySorted,
    /// Caller-supplied values. Generating this kind falls back to random.
    Custom,
}

impl ArrayKind {
    /// The generated shapes, excluding [`ArrayKind::Custom`].
    pub const GENERATED: [ArrayKind; 4] = [
        ArrayKind::Random,
        ArrayKind::Sorted,
        ArrayKind::Reverse,
        ArrayKind::NearlySorted,
    ];

    pub fn key(self) -> &'static str {
        match self {
            ArrayKind::Random => "random",
            ArrayKind::Sorted => "sorted",
            ArrayKind::Reverse => "reverse",
            ArrayKind::NearlySorted => "nearly_sorted",
            ArrayKind::Custom => "custom",
        }
    }
}

impl fmt::Display for ArrayKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for ArrayKind {
    type Err = BenchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "random" => Ok(ArrayKind::Random),
            "sorted" => Ok(ArrayKind::Sorted),
            "reverse" => Ok(ArrayKind::Reverse),
            "nearly_sorted" => Ok(ArrayKind::NearlySorted),
            "custom" => Ok(ArrayKind::Custom),
            _ => Err(BenchError::UnknownArrayKind { key: s.to_string() }),
        }
    }
}

/// Seeded generator of benchmark inputs.
pub struct InputGenerator {
    rng: ChaCha8Rng,
}

impl InputGenerator {
    pub fn new(seed: u64) -> Self {
        InputGenerator {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Generates an array of `size` elements with the given shape.
    pub fn generate(&mut self, size: usize, kind: ArrayKind) -> Vec<f64> {
        match kind {
            ArrayKind::Random | ArrayKind::Custom => (0..size)
                .map(|_| f64::from(self.rng.gen_range(1u32..=1000)))
                .collect(),
            ArrayKind::Sorted => ascending(size),
            ArrayKind::Reverse => {
                let mut values = ascending(size);
                values.reverse();
                values
            }
            ArrayKind::NearlySorted => {
                let mut values = ascending(size);
                if size > 0 {
                    for _ in 0..size / 10 {
                        let a = self.rng.gen_range(0..size);
                        let b = self.rng.gen_range(0..size);
                        values.swap(a, b);
                    }
                }
                values
            }
        }
    }
}

fn ascending(size: usize) -> Vec<f64> {
    (1..=size).map(|v| v as f64).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_shapes() {
        let mut generator = InputGenerator::new(1);
        assert_eq!(generator.generate(4, ArrayKind::Sorted), vec![1.0, 2.0, 3.0, 4.0]);
        assert_eq!(generator.generate(4, ArrayKind::Reverse), vec![4.0, 3.0, 2.0, 1.0]);
        assert!(generator.generate(0, ArrayKind::NearlySorted).is_empty());
    }

    #[test]
    fn same_seed_same_arrays() {
        let mut a = InputGenerator::new(7);
        let mut b = InputGenerator::new(7);
        for kind in ArrayKind::GENERATED {
            assert_eq!(a.generate(30, kind), b.generate(30, kind));
        }
    }

    #[test]
    fn random_values_stay_in_range() {
        let mut generator = InputGenerator::new(3);
        let values = generator.generate(500, ArrayKind::Random);
        assert!(values.iter().all(|v| (1.0..=1000.0).contains(v) && v.fract() == 0.0));
    }

    #[test]
    fn nearly_sorted_is_a_permutation() {
        let mut generator = InputGenerator::new(11);
        let mut values = generator.generate(50, ArrayKind::NearlySorted);
        values.sort_by(|a, b| a.partial_cmp(b).unwrap());
        assert_eq!(values, ascending(50));
    }

    #[test]
    fn kinds_parse_from_keys() {
        for kind in ArrayKind::GENERATED {
            assert_eq!(kind.key().parse::<ArrayKind>().unwrap(), kind);
        }
        assert_eq!("nearly-sorted".parse::<ArrayKind>().unwrap(), ArrayKind::NearlySorted);
        assert!(matches!(
            "zigzag".parse::<ArrayKind>(),
            Err(BenchError::UnknownArrayKind { .. })
        ));
    }
}
