use std::collections::TryReserveError;

use thiserror::Error;

use crate::harness::buffer::BufferRole;

#[derive(Debug, Error)]
pub enum BenchError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to allocate {buffer} buffer of {count} matrices in trial {trial}: {source}")]
    Allocation {
        buffer: BufferRole,
        trial: usize,
        count: usize,
        #[source]
        source: TryReserveError,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, BenchError>;
