//! Error types for document serialization

use std::io;

use thiserror::Error;

/// Errors that can occur while writing a document
#[derive(Error, Debug)]
pub enum Error {
    /// The output sink failed; `written` bytes had already been accepted
    #[error("write failed after {written} bytes: {source}")]
    Write {
        written: u64,
        #[source]
        source: io::Error,
    },
}

impl Error {
    /// Create a write error carrying the byte count reached so far
    pub fn write(written: u64, source: io::Error) -> Self {
        Self::Write { written, source }
    }

    /// Bytes the sink accepted before the failure
    pub fn bytes_written(&self) -> u64 {
        match self {
            Error::Write { written, .. } => *written,
        }
    }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
