//! Fibonacci Core
//!
//! The naive doubly-recursive Fibonacci kernel used as a function-call
//! overhead benchmark, plus a range-checked entry point in front of it.

pub mod error;
pub mod fib;

pub use error::FibError;
pub use fib::{call_count, checked_fib, fib, MAX_FIB_INPUT};
