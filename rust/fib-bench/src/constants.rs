//! Fixed run parameters. The benchmark takes no arguments or config file.

/// Input passed to `fib` on every run.
pub const FIB_INPUT: i64 = 35;

/// Name recorded in the structured result.
pub const BENCH_NAME: &str = "fib_recursive";

/// Multiplier from monotonic-clock nanoseconds to reported seconds.
pub const NANOS_TO_SECS: f64 = 1e-9;

/// Log filter used when `RUST_LOG` is unset or invalid.
pub const DEFAULT_LOG_FILTER: &str = "warn";
