//! Trial-scoped matrix storage.
//!
//! A [`MatrixBuffer`] is reserved fallibly at the start of a trial and freed
//! when it drops, on the normal path and on every early return.

use std::fmt;
use std::ops::{Deref, DerefMut};

use tracing::trace;

use crate::error::{BenchError, Result};
use crate::math::Mat4;

/// Which of a trial's four buffers this is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BufferRole {
    Left,
    Right,
    OutParam,
    ByValue,
}

impl fmt::Display for BufferRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            BufferRole::Left => "left",
            BufferRole::Right => "right",
            BufferRole::OutParam => "out-param result",
            BufferRole::ByValue => "by-value result",
        };
        f.write_str(name)
    }
}

/// Owned, zero-initialized run of `count` matrices.
pub struct MatrixBuffer {
    role: BufferRole,
    data: Vec<Mat4>,
}

impl MatrixBuffer {
    /// Reserves exactly `count` matrices and zero-fills them.
    ///
    /// Fails with [`BenchError::Allocation`] instead of aborting when the
    /// request overflows or the allocator refuses it.
    pub fn zeroed(role: BufferRole, count: usize, trial: usize) -> Result<Self> {
        let mut data = Vec::new();
        data.try_reserve_exact(count)
            .map_err(|source| BenchError::Allocation {
                buffer: role,
                trial,
                count,
                source,
            })?;
        data.resize(count, Mat4::ZERO);
        trace!(%role, count, trial, "buffer allocated");
        Ok(Self { role, data })
    }

    pub fn role(&self) -> BufferRole {
        self.role
    }
}

impl Deref for MatrixBuffer {
    type Target = [Mat4];

    fn deref(&self) -> &[Mat4] {
        &self.data
    }
}

impl DerefMut for MatrixBuffer {
    fn deref_mut(&mut self) -> &mut [Mat4] {
        &mut self.data
    }
}

impl Drop for MatrixBuffer {
    fn drop(&mut self) {
        trace!(role = %self.role, count = self.data.len(), "buffer released");
    }
}
