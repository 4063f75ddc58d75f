//! Errors raised by individual metric queries. None of them escape a sampling round.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SampleError {
    #[error("{0} is not supported on this platform")]
    Unsupported(&'static str),

    #[error("{0} returned no data")]
    Empty(&'static str),

    #[error("no filesystem mounted at {0}")]
    MountNotFound(String),

    #[error("sysinfo refresh panicked while querying {0}")]
    Panicked(&'static str),

    #[error("failed to read {path}: {source}")]
    Io {
        path: &'static str,
        #[source]
        source: std::io::Error,
    },
}

pub type SampleResult<T> = Result<T, SampleError>;
