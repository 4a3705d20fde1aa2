//! Heap sort: build a max-heap in place, then repeatedly move the root to
//! the end of the shrinking heap.

use crate::algorithm::Algorithm;
use crate::recorder::{record, Recorder};
use crate::trace::{Roles, Trace};

/// Traces a heap sort of `input`.
pub fn heap_sort(input: &[f64]) -> Trace {
    record(Algorithm::Heap, input, run)
}

fn run(rec: &mut Recorder) {
    let n = rec.len();

    for root in (0..n / 2).rev() {
        sift_down(rec, n, root);
    }
    rec.step(
        Roles::none(),
        format!("Max heap built - largest element {} is at root", rec.get(0)),
    );

    for end in (1..n).rev() {
        let largest = rec.get(0);
        rec.swap(0, end);
        rec.step(
            Roles::none().swapping([0, end]).sorted(end..n),
            format!("Moving largest element {} to position {}", largest, end),
        );
        sift_down(rec, end, 0);
    }
}

/// Restores the heap property for the subtree at `root` within the first
/// `size` elements. Positions `size..` are already sorted.
fn sift_down(rec: &mut Recorder, size: usize, root: usize) {
    let n = rec.len();
    let mut parent = root;

    loop {
        let mut largest = parent;
        for child in [2 * parent + 1, 2 * parent + 2] {
            if child >= size {
                break;
            }
            rec.count_comparison();
            rec.step(
                Roles::none().comparing([child, largest]).sorted(size..n),
                format!(
                    "Comparing child {} with {}",
                    rec.get(child),
                    rec.get(largest)
                ),
            );
            if rec.get(child) > rec.get(largest) {
                largest = child;
            }
        }

        if largest == parent {
            return;
        }

        let (upper, lower) = (rec.get(parent), rec.get(largest));
        rec.swap(parent, largest);
        rec.step(
            Roles::none().swapping([parent, largest]).sorted(size..n),
            format!("Heapifying: swapping {} and {}", lower, upper),
        );
        parent = largest;
    }
}
