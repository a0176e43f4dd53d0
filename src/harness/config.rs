//! Run parameters.
//!
//! With no flags the benchmark runs the classic fixed setup: 100 trials of
//! 2^23 matrix pairs drawn from `[-10, 10]`, seeded from the clock.

use clap::Parser;
use rand::distributions::Uniform;

use crate::error::{BenchError, Result};

pub const DEFAULT_TRIALS: usize = 100;
pub const DEFAULT_COUNT: usize = 1 << 23;
pub const DEFAULT_MIN: f32 = -10.0;
pub const DEFAULT_MAX: f32 = 10.0;

#[derive(Parser, Debug, Clone, PartialEq)]
#[command(name = "matconv")]
#[command(
    about = "Out-parameter vs return-by-value 4x4 matrix multiply benchmark",
    long_about = None
)]
pub struct BenchConfig {
    /// Number of generate/time/validate cycles
    #[arg(short, long, default_value_t = DEFAULT_TRIALS)]
    pub trials: usize,

    /// Matrix pairs multiplied per trial
    #[arg(short, long, default_value_t = DEFAULT_COUNT)]
    pub count: usize,

    /// Lower bound of the random element range
    #[arg(long, default_value_t = DEFAULT_MIN, allow_negative_numbers = true)]
    pub min: f32,

    /// Upper bound of the random element range
    #[arg(long, default_value_t = DEFAULT_MAX, allow_negative_numbers = true)]
    pub max: f32,

    /// Fixed RNG seed (defaults to the current time in seconds)
    #[arg(short, long)]
    pub seed: Option<u64>,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            trials: DEFAULT_TRIALS,
            count: DEFAULT_COUNT,
            min: DEFAULT_MIN,
            max: DEFAULT_MAX,
            seed: None,
        }
    }
}

impl BenchConfig {
    pub fn validate(&self) -> Result<()> {
        if self.trials == 0 {
            return Err(BenchError::Config("trials must be at least 1".into()));
        }
        if self.count == 0 {
            return Err(BenchError::Config("count must be at least 1".into()));
        }
        if !self.min.is_finite() || !self.max.is_finite() {
            return Err(BenchError::Config(format!(
                "random range bounds must be finite, got [{}, {}]",
                self.min, self.max
            )));
        }
        if self.min >= self.max {
            return Err(BenchError::Config(format!(
                "min ({}) must be less than max ({})",
                self.min, self.max
            )));
        }
        // the inclusive sampler scales the width by 1 / (1 - EPSILON)
        if !((self.max - self.min) / (1.0 - f32::EPSILON)).is_finite() {
            return Err(BenchError::Config(format!(
                "random range [{}, {}] is too wide for f32",
                self.min, self.max
            )));
        }
        Ok(())
    }

    /// The element distribution for the run, built once after validation.
    pub fn element_range(&self) -> Result<Uniform<f32>> {
        self.validate()?;
        Ok(Uniform::new_inclusive(self.min, self.max))
    }
}
