//! The recursive kernel.
//!
//! `fib` is deliberately the textbook exponential recursion: every call
//! below `n = 2` is a leaf and every other call makes two more. Nothing is
//! cached, so the run time is dominated by call overhead.

use crate::error::FibError;

/// Largest `n` whose Fibonacci number fits in an `i64`.
/// `fib(92) = 7540113804746346429`, `fib(93)` would exceed `i64::MAX`.
pub const MAX_FIB_INPUT: i64 = 92;

/// Compute the n-th Fibonacci number by naive double recursion.
///
/// For `n < 2` the input is returned unchanged, which includes negative
/// inputs. Arithmetic overflow past `n = 92` panics when overflow checks
/// are enabled.
pub fn fib(n: i64) -> i64 {
    if n < 2 {
        return n;
    }
    fib(n - 1) + fib(n - 2)
}

/// Range-check `n` and then run [`fib`].
pub fn checked_fib(n: i64) -> Result<i64, FibError> {
    if n < 0 {
        return Err(FibError::NegativeInput(n));
    }
    if n > MAX_FIB_INPUT {
        return Err(FibError::Overflow {
            n,
            max: MAX_FIB_INPUT,
        });
    }
    Ok(fib(n))
}

/// Number of invocations `fib(n)` performs, including the outermost one.
///
/// Satisfies `c(n) = 1 + c(n - 1) + c(n - 2)` with `c(0) = c(1) = 1`, whose
/// closed form is `2 * F(n + 1) - 1`. Saturates at `u64::MAX`.
pub fn call_count(n: i64) -> u64 {
    if n < 2 {
        return 1;
    }
    // F(n + 1), iteratively
    let (mut prev, mut curr) = (0u64, 1u64);
    for _ in 0..n {
        let next = prev.saturating_add(curr);
        prev = curr;
        curr = next;
    }
    curr.checked_mul(2).map_or(u64::MAX, |twice| twice - 1)
}
