//! Error types for redis-map operations.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("redis error: {0}")]
    Redis(#[from] redis::RedisError),

    #[error("operation not supported by a remote map: {operation}")]
    Unsupported { operation: &'static str },
}

impl Error {
    pub(crate) fn unsupported(operation: &'static str) -> Self {
        tracing::debug!(operation, "refusing unsupported operation");
        Error::Unsupported { operation }
    }

    /// Returns `true` if this error marks an operation the map refuses by
    /// design rather than a failure talking to the store.
    pub fn is_unsupported(&self) -> bool {
        matches!(self, Error::Unsupported { .. })
    }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
