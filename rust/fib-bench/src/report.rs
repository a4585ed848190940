//! Timed runs and their report line.

use std::hint::black_box;
use std::time::{Duration, Instant};

use fib_core::{call_count, checked_fib};
use serde::Serialize;
use tracing::{info, info_span};

use crate::constants::{BENCH_NAME, NANOS_TO_SECS};
use crate::error::BenchError;
use crate::rss::peak_rss_kb;

/// Result of a single timed `fib` call.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BenchResult {
    pub name: String,
    pub n: i64,
    pub result: i64,
    pub elapsed_ns: u64,
    pub elapsed_secs: f64,
    pub peak_rss_kb: Option<u64>,
}

impl BenchResult {
    pub fn new(n: i64, result: i64, elapsed: Duration, peak_rss_kb: Option<u64>) -> Self {
        let elapsed_ns = u64::try_from(elapsed.as_nanos()).unwrap_or(u64::MAX);
        Self {
            name: BENCH_NAME.to_string(),
            n,
            result,
            elapsed_ns,
            elapsed_secs: elapsed_ns as f64 * NANOS_TO_SECS,
            peak_rss_kb,
        }
    }

    /// `fib(<n>) = <result>, elapsed time = <seconds>`, seconds in default
    /// `f64` formatting.
    pub fn report_line(&self) -> String {
        format!(
            "fib({}) = {}, elapsed time = {}",
            self.n, self.result, self.elapsed_secs
        )
    }
}

/// Call `fib(n)` once between two reads of the monotonic clock.
pub fn time_fib(n: i64) -> Result<BenchResult, BenchError> {
    let _span = info_span!("time_fib", n).entered();

    let start = Instant::now();
    let result = checked_fib(black_box(n))?;
    let elapsed = start.elapsed();

    let record = BenchResult::new(n, result, elapsed, peak_rss_kb());
    info!(
        result = record.result,
        elapsed_ns = record.elapsed_ns,
        calls = call_count(n),
        "fib call complete"
    );
    Ok(record)
}
