use thiserror::Error;

/// Input rejected by [`crate::checked_fib`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FibError {
    #[error("fib input must be non-negative, got {0}")]
    NegativeInput(i64),
    #[error("fib({n}) overflows i64 (largest supported input is {max})")]
    Overflow { n: i64, max: i64 },
}
