use std::error::Error;

fn main() {
    if let Err(err) = fib_bench::run() {
        eprintln!("error: {}", err);
        let mut cause = err.source();
        while let Some(inner) = cause {
            eprintln!("  caused by: {}", inner);
            cause = inner.source();
        }
        std::process::exit(1);
    }
}
