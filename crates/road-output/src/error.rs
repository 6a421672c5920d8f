//! Report writer failures.

use thiserror::Error;

/// A neighborhood report could not be written.
#[derive(Debug, Error)]
pub enum OutputError {
    /// Creating or flushing the report file failed.
    #[error("report file: {0}")]
    Io(#[from] std::io::Error),

    /// A row could not be encoded or written as CSV.
    #[error("report CSV: {0}")]
    Csv(#[from] csv::Error),
}

pub type OutputResult<T> = Result<T, OutputError>;
