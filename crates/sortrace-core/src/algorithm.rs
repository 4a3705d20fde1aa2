//! Algorithm registry: the fixed set of selectable sorts and their static
//! characteristics.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// One of the supported sorting algorithms.
///
/// Serialized as its lowercase key (`"bubble"`, `"quick"`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Algorithm {
    Bubble,
    Selection,
    Insertion,
    Quick,
    Merge,
    Heap,
    Shell,
    Counting,
    Radix,
    Bucket,
    Tim,
}

/// Static characteristics of an algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AlgorithmInfo {
    pub name: &'static str,
    pub best: &'static str,
    pub average: &'static str,
    pub worst: &'static str,
    pub space: &'static str,
    pub stable: bool,
    pub in_place: bool,
}

impl Algorithm {
    /// All algorithms, in registry order.
    pub const ALL: [Algorithm; 11] = [
        Algorithm::Bubble,
        Algorithm::Selection,
        Algorithm::Insertion,
        Algorithm::Quick,
        Algorithm::Merge,
        Algorithm::Heap,
        Algorithm::Shell,
        Algorithm::Counting,
        Algorithm::Radix,
        Algorithm::Bucket,
        Algorithm::Tim,
    ];

    /// Selector key accepted by [`FromStr`].
    pub fn key(self) -> &'static str {
        match self {
            Algorithm::Bubble => "bubble",
            Algorithm::Selection => "selection",
            Algorithm::Insertion => "insertion",
            Algorithm::Quick => "quick",
            Algorithm::Merge => "merge",
            Algorithm::Heap => "heap",
            Algorithm::Shell => "shell",
            Algorithm::Counting => "counting",
            Algorithm::Radix => "radix",
            Algorithm::Bucket => "bucket",
            Algorithm::Tim => "tim",
        }
    }

    /// Human-readable name, e.g. "Bubble Sort".
    pub fn name(self) -> &'static str {
        self.info().name
    }

    /// One-line strategy used to narrate the opening step of a trace.
    pub fn strategy(self) -> &'static str {
        match self {
            Algorithm::Bubble => "Compare adjacent elements and swap if needed",
            Algorithm::Selection => "Find minimum element and place it at the beginning",
            Algorithm::Insertion => "Build sorted array one element at a time",
            Algorithm::Quick => "Divide and conquer using pivot elements",
            Algorithm::Merge => "Divide array into smaller subarrays and merge them",
            Algorithm::Heap => "Build max heap then extract elements",
            Algorithm::Shell => "Use gap sequence to sort subarrays",
            Algorithm::Counting => "Count occurrences of each element",
            Algorithm::Radix => "Sort by each digit from least to most significant",
            Algorithm::Bucket => "Distribute elements into buckets and sort each",
            Algorithm::Tim => "Hybrid stable sorting algorithm (merge + insertion)",
        }
    }

    /// True for algorithms that never compare two element values.
    pub fn is_comparison_free(self) -> bool {
        matches!(self, Algorithm::Counting | Algorithm::Radix)
    }

    pub fn info(self) -> AlgorithmInfo {
        let (name, best, average, worst, space, stable, in_place) = match self {
            Algorithm::Bubble => ("Bubble Sort", "O(n)", "O(n²)", "O(n²)", "O(1)", true, true),
            Algorithm::Selection => {
                ("Selection Sort", "O(n²)", "O(n²)", "O(n²)", "O(1)", false, true)
            }
            Algorithm::Insertion => {
                ("Insertion Sort", "O(n)", "O(n²)", "O(n²)", "O(1)", true, true)
            }
            Algorithm::Quick => (
                "Quick Sort",
                "O(n log n)",
                "O(n log n)",
                "O(n²)",
                "O(log n)",
                false,
                true,
            ),
            Algorithm::Merge => (
                "Merge Sort",
                "O(n log n)",
                "O(n log n)",
                "O(n log n)",
                "O(n)",
                true,
                false,
            ),
            Algorithm::Heap => (
                "Heap Sort",
                "O(n log n)",
                "O(n log n)",
                "O(n log n)",
                "O(1)",
                false,
                true,
            ),
            Algorithm::Shell => {
                ("Shell Sort", "O(n log n)", "O(n^1.25)", "O(n²)", "O(1)", false, true)
            }
            Algorithm::Counting => {
                ("Counting Sort", "O(n + k)", "O(n + k)", "O(n + k)", "O(k)", true, false)
            }
            Algorithm::Radix => (
                "Radix Sort",
                "O(d × (n + k))",
                "O(d × (n + k))",
                "O(d × (n + k))",
                "O(n + k)",
                true,
                false,
            ),
            Algorithm::Bucket => {
                ("Bucket Sort", "O(n + k)", "O(n + k)", "O(n²)", "O(n + k)", true, false)
            }
            Algorithm::Tim => {
                ("Tim Sort", "O(n)", "O(n log n)", "O(n log n)", "O(n)", true, false)
            }
        };
        AlgorithmInfo {
            name,
            best,
            average,
            worst,
            space,
            stable,
            in_place,
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase();
        Algorithm::ALL
            .into_iter()
            .find(|a| a.key() == key)
            .ok_or_else(|| CoreError::UnknownAlgorithm {
                key: s.to_string(),
                expected: Algorithm::ALL.map(Algorithm::key).join(", "),
            })
    }
}
