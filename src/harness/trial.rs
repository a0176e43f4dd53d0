//! One generate / time / validate cycle.

use std::time::{Duration, Instant};

use rand::Rng;
use rand::distributions::{Distribution, Uniform};
use tracing::debug;

use super::buffer::{BufferRole, MatrixBuffer};
use crate::convention::{mat4_mul_out, mat4_mul_value};
use crate::error::Result;
use crate::math::Mat4;

/// The four buffers a trial owns: two inputs and one output per convention.
///
/// Dropping this releases all of them.
pub struct TrialBuffers {
    pub left: MatrixBuffer,
    pub right: MatrixBuffer,
    pub out_param: MatrixBuffer,
    pub by_value: MatrixBuffer,
}

impl TrialBuffers {
    /// Allocates all four buffers, stopping at the first failure.
    ///
    /// Buffers already reserved when a later one fails are dropped before the
    /// error is returned.
    pub fn allocate(count: usize, trial: usize) -> Result<Self> {
        let left = MatrixBuffer::zeroed(BufferRole::Left, count, trial)?;
        let right = MatrixBuffer::zeroed(BufferRole::Right, count, trial)?;
        let out_param = MatrixBuffer::zeroed(BufferRole::OutParam, count, trial)?;
        let by_value = MatrixBuffer::zeroed(BufferRole::ByValue, count, trial)?;
        debug!(trial, count, "trial buffers allocated");
        Ok(Self {
            left,
            right,
            out_param,
            by_value,
        })
    }

    /// Fills both inputs with draws from `range`.
    ///
    /// Draw order is `left[0]`, `right[0]`, `left[1]`, ... with 16 elements
    /// each, so a fixed seed always yields the same pairs.
    pub fn fill_random<R: Rng>(&mut self, rng: &mut R, range: &Uniform<f32>) {
        for (l, r) in self.left.iter_mut().zip(self.right.iter_mut()) {
            *l = random_mat4(rng, range);
            *r = random_mat4(rng, range);
        }
    }

    /// Runs the out-parameter convention over the whole batch.
    pub fn time_out_param(&mut self) -> Duration {
        let start = Instant::now();
        let pairs = self.left.iter().zip(self.right.iter());
        for (out, (a, b)) in self.out_param.iter_mut().zip(pairs) {
            mat4_mul_out(out, a, b);
        }
        start.elapsed()
    }

    /// Runs the return-by-value convention over the whole batch.
    pub fn time_by_value(&mut self) -> Duration {
        let start = Instant::now();
        let pairs = self.left.iter().zip(self.right.iter());
        for (out, (a, b)) in self.by_value.iter_mut().zip(pairs) {
            *out = mat4_mul_value(a, b);
        }
        start.elapsed()
    }

    /// Number of scalar components where the two conventions disagree.
    pub fn count_differences(&self) -> usize {
        count_differences(&self.out_param, &self.by_value)
    }
}

/// Counts components with `a - b != 0.0` across two equally long batches.
///
/// This is an exact comparison, not a tolerance: the two conventions run the
/// same arithmetic in the same order. A NaN on either side also counts.
pub fn count_differences(a: &[Mat4], b: &[Mat4]) -> usize {
    a.iter()
        .zip(b)
        .flat_map(|(x, y)| x.as_array().iter().zip(y.as_array()))
        .filter(|&(x, y)| x - y != 0.0)
        .count()
}

/// A matrix of 16 independent draws from `range`.
pub fn random_mat4<R: Rng>(rng: &mut R, range: &Uniform<f32>) -> Mat4 {
    Mat4::from_cols_array(std::array::from_fn(|_| range.sample(rng)))
}
