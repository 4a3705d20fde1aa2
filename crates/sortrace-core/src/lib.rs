//! Sort trace engine.
//!
//! Runs classic sorting algorithms over a sequence of numbers and, instead
//! of only producing the sorted output, records every meaningful operation
//! as a replayable [`Step`]: a full snapshot of the working array, the
//! indices being compared, swapped, used as pivot or known to be sorted, an
//! optional helper-buffer snapshot, and a one-line narration. The run also
//! tallies comparisons and swaps.
//!
//! # Usage
//!
//! ```
//! use sortrace_core::{engine, Algorithm};
//!
//! let trace = engine::run(Algorithm::Bubble, &[5.0, 3.0, 8.0, 1.0]);
//! assert_eq!(trace.final_array(), &[1.0, 3.0, 5.0, 8.0]);
//! assert_eq!((trace.comparisons, trace.swaps), (6, 4));
//! ```
//!
//! Runs are synchronous and hold no state between calls; the same input
//! always yields the same trace.

pub mod algorithm;
pub mod algorithms;
pub mod engine;
pub mod error;
pub mod recorder;
pub mod trace;

pub use algorithm::{Algorithm, AlgorithmInfo};
pub use error::CoreError;
pub use trace::{Auxiliary, Roles, Step, Trace};
