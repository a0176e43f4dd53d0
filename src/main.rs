//! Benchmark runner: out-parameter vs return-by-value 4×4 multiply.

use std::io;
use std::process::ExitCode;

use clap::Parser;
use matconv::logging::init_logging;
use matconv::{BenchConfig, Harness};
use tracing::error;

fn main() -> ExitCode {
    let config = BenchConfig::parse();
    init_logging("info");

    let stdout = io::stdout().lock();
    let result = Harness::new(config, stdout).and_then(|mut harness| harness.run());

    match result {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            error!("benchmark aborted: {e}");
            // printed even when RUST_LOG filters out errors
            eprintln!("matconv: {e}");
            ExitCode::FAILURE
        }
    }
}
