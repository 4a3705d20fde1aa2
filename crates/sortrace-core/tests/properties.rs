//! Property tests over every algorithm: ordering, value preservation,
//! stability, determinism, and the opening/closing step invariants.

use proptest::prelude::*;

use sortrace_core::{engine, Algorithm, Trace};

/// Algorithms with no integer-only precondition.
fn general() -> impl Iterator<Item = Algorithm> {
    Algorithm::ALL.into_iter().filter(|a| !a.is_comparison_free())
}

/// Algorithms whose output preserves the input order of equal values.
/// Counting sort is stable by value only: it regenerates values from table
/// slots, so it is covered by the value-preservation property instead.
const STABLE: [Algorithm; 6] = [
    Algorithm::Bubble,
    Algorithm::Insertion,
    Algorithm::Merge,
    Algorithm::Bucket,
    Algorithm::Radix,
    Algorithm::Tim,
];

fn non_negative_integers() -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec((0u32..500).prop_map(f64::from), 0..48)
}

fn reals() -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec(-1000.0f64..1000.0, 0..48)
}

/// Signed zeros compare equal but keep distinct bit patterns, which makes
/// element order among equal values observable.
fn signed_zero_mix() -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec(
        prop_oneof![Just(0.0), Just(-0.0), Just(1.0), Just(2.0), Just(12.0)],
        0..40,
    )
}

fn sorted_copy(input: &[f64]) -> Vec<f64> {
    let mut expected = input.to_vec();
    expected.sort_by(|a, b| a.partial_cmp(b).unwrap());
    expected
}

fn assert_invariants(trace: &Trace, input: &[f64]) {
    let name = trace.algorithm.name();
    assert_eq!(trace.first_step().array, input, "{}: first step", name);
    assert!(
        trace.first_step().description.starts_with(&format!("Starting {}", name)),
        "{}: opening narration",
        name
    );
    assert_eq!(
        trace.final_step().roles.sorted,
        Some((0..input.len()).collect::<Vec<_>>()),
        "{}: final sorted range",
        name
    );
    assert!(
        trace.final_array().windows(2).all(|w| w[0] <= w[1]),
        "{}: final array not ordered: {:?}",
        name,
        trace.final_array()
    );
    for step in &trace.steps {
        assert_eq!(step.array.len(), input.len(), "{}: snapshot length", name);
    }
}

proptest! {
    #[test]
    fn every_algorithm_sorts_and_preserves_values(input in non_negative_integers()) {
        let expected = sorted_copy(&input);
        for algorithm in Algorithm::ALL {
            let trace = engine::run(algorithm, &input);
            assert_invariants(&trace, &input);
            prop_assert_eq!(trace.final_array(), expected.as_slice());
        }
    }

    #[test]
    fn comparison_sorts_handle_reals(input in reals()) {
        let expected = sorted_copy(&input);
        for algorithm in general() {
            let trace = engine::run(algorithm, &input);
            assert_invariants(&trace, &input);
            prop_assert_eq!(trace.final_array(), expected.as_slice());
        }
    }

    #[test]
    fn stable_algorithms_keep_equal_values_in_order(input in signed_zero_mix()) {
        // `sort_by` is stable, so its bit pattern is the reference order.
        let expected: Vec<u64> = sorted_copy(&input).iter().map(|v| v.to_bits()).collect();
        for algorithm in STABLE {
            let trace = engine::run(algorithm, &input);
            let actual: Vec<u64> = trace.final_array().iter().map(|v| v.to_bits()).collect();
            prop_assert_eq!(&actual, &expected, "{} is not stable", algorithm);
        }
    }

    #[test]
    fn reruns_are_identical(input in non_negative_integers()) {
        for algorithm in Algorithm::ALL {
            let first = engine::run(algorithm, &input);
            let second = engine::run(algorithm, &input.clone());
            prop_assert_eq!(first, second);
        }
    }

    #[test]
    fn comparison_free_sorts_count_one_write_per_element_per_pass(input in non_negative_integers()) {
        for algorithm in Algorithm::ALL.into_iter().filter(|a| a.is_comparison_free()) {
            prop_assert_eq!(engine::run(algorithm, &input).comparisons, 0, "{}", algorithm);
        }

        let counting = engine::run(Algorithm::Counting, &input);
        if input.len() > 1 {
            prop_assert_eq!(counting.swaps, input.len() as u64);
        }

        let radix = engine::run(Algorithm::Radix, &input);
        prop_assert_eq!(radix.swaps % input.len().max(1) as u64, 0);
    }
}

#[test]
fn tiny_inputs_short_circuit_for_every_algorithm() {
    for input in [vec![], vec![42.0]] {
        for algorithm in Algorithm::ALL {
            let trace = engine::run(algorithm, &input);
            assert_eq!(trace.len(), 2, "{}", algorithm);
            assert_eq!(trace.comparisons, 0, "{}", algorithm);
            assert_eq!(trace.swaps, 0, "{}", algorithm);
            assert_invariants(&trace, &input);
        }
    }
}

#[test]
fn all_equal_inputs_terminate_for_every_algorithm() {
    for len in [2, 5, 33, 100] {
        let input = vec![7.0; len];
        for algorithm in Algorithm::ALL {
            let trace = engine::run(algorithm, &input);
            assert_invariants(&trace, &input);
            assert_eq!(trace.final_array(), input.as_slice(), "{}", algorithm);
        }
    }
}

#[test]
fn caller_input_is_never_mutated() {
    let input = vec![3.0, 1.0, 2.0];
    let before = input.clone();
    for algorithm in Algorithm::ALL {
        let _ = engine::run(algorithm, &input);
    }
    assert_eq!(input, before);
}
