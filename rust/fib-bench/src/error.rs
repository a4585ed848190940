use fib_core::FibError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BenchError {
    #[error("benchmark input rejected")]
    Fib(#[from] FibError),
    #[error("failed to write report")]
    Io(#[from] std::io::Error),
    #[error("failed to serialize result record")]
    Serialize(#[from] serde_json::Error),
}
