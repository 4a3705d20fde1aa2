//! The eleven instrumented sorting algorithms.
//!
//! Every entry point has the shape `fn(&[f64]) -> Trace`, copies its input,
//! and records through [`record`](crate::recorder::record):
//!
//! - exchange-based: [`bubble_sort`], [`selection_sort`], [`insertion_sort`],
//!   [`shell_sort`]
//! - divide and conquer: [`quick_sort`], [`merge_sort`], [`heap_sort`],
//!   [`tim_sort`]
//! - non-comparison: [`counting_sort`], [`radix_sort`], [`bucket_sort`]

pub mod bubble;
pub mod bucket;
pub mod counting;
pub mod heap;
pub mod insertion;
pub mod merge;
pub mod quick;
pub mod radix;
pub mod selection;
pub mod shell;
pub mod tim;

pub use bubble::bubble_sort;
pub use bucket::bucket_sort;
pub use counting::counting_sort;
pub use heap::heap_sort;
pub use insertion::insertion_sort;
pub use merge::merge_sort;
pub use quick::quick_sort;
pub use radix::radix_sort;
pub use selection::selection_sort;
pub use shell::shell_sort;
pub use tim::tim_sort;

/// Minimum and maximum of a non-empty slice.
pub(crate) fn value_bounds(data: &[f64]) -> (f64, f64) {
    data.iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| {
            (lo.min(v), hi.max(v))
        })
}
