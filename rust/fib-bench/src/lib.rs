//! Fibonacci Benchmark Runner
//!
//! Times a single naive `fib(35)` call against a monotonic clock and prints
//! one report line to stdout. Diagnostics go to stderr through `tracing`.

pub mod constants;
pub mod error;
pub mod logging;
pub mod report;
pub mod rss;

use std::io::{self, Write};

use tracing::{debug, Level};

pub use constants::FIB_INPUT;
pub use error::BenchError;
pub use report::{time_fib, BenchResult};

/// Run the benchmark once and write the report line to stdout.
pub fn run() -> Result<(), BenchError> {
    logging::init();

    let result = time_fib(FIB_INPUT)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    writeln!(out, "{}", result.report_line())?;
    out.flush()?;

    if tracing::enabled!(Level::DEBUG) {
        let record = serde_json::to_string(&result)?;
        debug!(%record, "benchmark finished");
    }
    Ok(())
}
