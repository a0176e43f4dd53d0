//! Per-trial results and the end-of-run averages.

use std::io::Write;
use std::time::Duration;

use crate::error::Result;

/// Outcome of one trial.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrialReport {
    pub trial: usize,
    pub out_param: Duration,
    pub by_value: Duration,
    pub differences: usize,
}

impl TrialReport {
    /// Writes `<out-param> : <by-value>` and `Differences: <n>`, times in µs.
    pub fn write_to<W: Write>(&self, out: &mut W) -> Result<()> {
        writeln!(out, "{} : {}", ticks(self.out_param), ticks(self.by_value))?;
        writeln!(out, "Differences: {}", self.differences)?;
        Ok(())
    }
}

/// All trials of a run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Summary {
    pub trials: Vec<TrialReport>,
}

impl Summary {
    pub fn push(&mut self, report: TrialReport) {
        self.trials.push(report);
    }

    /// Mean out-parameter time in µs, truncated. Zero for an empty run.
    pub fn mean_out_param(&self) -> u64 {
        self.mean_of(|t| t.out_param)
    }

    /// Mean return-by-value time in µs, truncated. Zero for an empty run.
    pub fn mean_by_value(&self) -> u64 {
        self.mean_of(|t| t.by_value)
    }

    pub fn total_differences(&self) -> usize {
        self.trials.iter().map(|t| t.differences).sum()
    }

    fn mean_of(&self, pick: impl Fn(&TrialReport) -> Duration) -> u64 {
        if self.trials.is_empty() {
            return 0;
        }
        let total: u64 = self.trials.iter().map(|t| ticks(pick(t))).sum();
        total / self.trials.len() as u64
    }

    pub fn write_to<W: Write>(&self, out: &mut W) -> Result<()> {
        writeln!(
            out,
            "AVERAGES:  Return reference - {} : Return Value - {}\n",
            self.mean_out_param(),
            self.mean_by_value()
        )?;
        Ok(())
    }
}

/// Whole microseconds, the reported clock resolution.
fn ticks(d: Duration) -> u64 {
    d.as_micros() as u64
}
