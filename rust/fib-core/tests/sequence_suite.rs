//! Sequence properties of the recursive kernel, checked against an
//! iterative reference that only exists here.

use fib_core::{call_count, checked_fib, fib, FibError, MAX_FIB_INPUT};
use std::cell::Cell;

fn fib_iterative(n: i64) -> i64 {
    let (mut a, mut b) = (0i64, 1i64);
    for _ in 0..n {
        // b runs one term ahead and wraps on the last step at n = 92
        let next = a.wrapping_add(b);
        a = b;
        b = next;
    }
    a
}

// ============================================================================
// Known values
// ============================================================================

#[test]
fn first_eleven_terms() {
    let expected = [0, 1, 1, 2, 3, 5, 8, 13, 21, 34, 55];
    let actual: Vec<i64> = (0..=10).map(fib).collect();
    assert_eq!(actual, expected);
}

#[test]
fn fib_35_is_exact() {
    assert_eq!(fib(35), 9_227_465);
    assert_eq!(checked_fib(35), Ok(9_227_465));
}

#[test]
fn repeated_runs_agree() {
    assert_eq!(fib(35), fib(35));
}

// ============================================================================
// Recurrence
// ============================================================================

#[test]
fn matches_iterative_reference() {
    for n in 0..=30 {
        assert_eq!(fib(n), fib_iterative(n), "mismatch at n = {}", n);
    }
}

#[test]
fn satisfies_recurrence() {
    for n in 2..=30 {
        assert_eq!(
            fib_iterative(n),
            fib(n - 1) + fib(n - 2),
            "recurrence broken at n = {}",
            n
        );
    }
}

#[test]
fn largest_supported_input_fits_i64() {
    assert_eq!(fib_iterative(MAX_FIB_INPUT), 7_540_113_804_746_346_429);
    assert!(matches!(
        checked_fib(MAX_FIB_INPUT + 1),
        Err(FibError::Overflow { .. })
    ));
}

// ============================================================================
// Call counting
// ============================================================================

fn counted_fib(n: i64, calls: &Cell<u64>) -> i64 {
    calls.set(calls.get() + 1);
    if n < 2 {
        return n;
    }
    counted_fib(n - 1, calls) + counted_fib(n - 2, calls)
}

#[test]
fn call_count_matches_instrumented_recursion() {
    for n in 0..=20 {
        let calls = Cell::new(0);
        counted_fib(n, &calls);
        assert_eq!(call_count(n), calls.get(), "call count wrong at n = {}", n);
    }
}

#[test]
fn call_count_for_35() {
    assert_eq!(call_count(35), 29_860_703);
}

#[test]
fn error_messages_name_the_input() {
    assert_eq!(
        FibError::NegativeInput(-4).to_string(),
        "fib input must be non-negative, got -4"
    );
    assert_eq!(
        FibError::Overflow { n: 100, max: 92 }.to_string(),
        "fib(100) overflows i64 (largest supported input is 92)"
    );
}
