//! Benchmark driver.
//!
//! Each trial allocates its own buffers, fills the inputs from the run's
//! single RNG, times the out-parameter pass and then the by-value pass,
//! compares the two outputs and prints the result. Buffers are released
//! before the next trial starts.

pub mod buffer;
pub mod config;
pub mod report;
pub mod trial;

use std::io::Write;
use std::time::{SystemTime, UNIX_EPOCH};

use rand::SeedableRng;
use rand::distributions::Uniform;
use rand::rngs::StdRng;
use tracing::{debug, info, warn};

pub use buffer::{BufferRole, MatrixBuffer};
pub use config::BenchConfig;
pub use report::{Summary, TrialReport};
pub use trial::TrialBuffers;

use crate::error::Result;

/// Drives a full run and writes the report to `out`.
pub struct Harness<W: Write> {
    config: BenchConfig,
    range: Uniform<f32>,
    rng: StdRng,
    out: W,
}

impl<W: Write> Harness<W> {
    /// Validates `config` and seeds the generator once for the whole run.
    pub fn new(config: BenchConfig, out: W) -> Result<Self> {
        let range = config.element_range()?;
        let seed = config.seed.unwrap_or_else(clock_seed);
        info!(
            seed,
            trials = config.trials,
            count = config.count,
            min = config.min,
            max = config.max,
            "benchmark configured"
        );
        Ok(Self {
            config,
            range,
            rng: StdRng::seed_from_u64(seed),
            out,
        })
    }

    /// Runs every trial, then prints the averages.
    ///
    /// The first error stops the run; nothing more is written after it.
    pub fn run(&mut self) -> Result<Summary> {
        let mut summary = Summary::default();
        for trial in 0..self.config.trials {
            let report = self.run_trial(trial)?;
            report.write_to(&mut self.out)?;
            summary.push(report);
        }
        summary.write_to(&mut self.out)?;
        self.out.flush()?;

        if summary.total_differences() > 0 {
            warn!(
                total = summary.total_differences(),
                "conventions disagreed during the run"
            );
        }
        Ok(summary)
    }

    /// Runs one trial without printing it.
    pub fn run_trial(&mut self, trial: usize) -> Result<TrialReport> {
        let mut buffers = TrialBuffers::allocate(self.config.count, trial)?;
        buffers.fill_random(&mut self.rng, &self.range);

        let out_param = buffers.time_out_param();
        let by_value = buffers.time_by_value();
        let differences = buffers.count_differences();

        if differences > 0 {
            warn!(
                trial,
                differences, "out-param and by-value results differ; the multiply kernels disagree"
            );
        }
        debug!(trial, ?out_param, ?by_value, "trial finished");

        Ok(TrialReport {
            trial,
            out_param,
            by_value,
            differences,
        })
    }

    pub fn into_output(self) -> W {
        self.out
    }
}

fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or_default()
}
