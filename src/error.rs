//! Error types for roster parsing, encoding, and batching.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// A field-level validation failure for a single roster row.
///
/// Each variant carries the offending input text so the message can point
/// at exactly what was wrong.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EncodeError {
    #[error("invalid address '{0}' (expected 40 hex characters)")]
    InvalidAddress(String),

    #[error("invalid date format '{0}' (expected YYYY-MM-DD)")]
    InvalidDateFormat(String),

    #[error("invalid year '{0}' (must be 1970-2100)")]
    InvalidYear(String),

    #[error("invalid month '{0}' (must be 1-12)")]
    InvalidMonth(String),

    #[error("invalid weight '{0}' (must be 0-100)")]
    InvalidWeight(String),

    #[error("invalid months on leave '{0}' (must be 0-65535)")]
    InvalidMonthsOnLeave(String),
}

/// A failure that aborts a whole roster run.
#[derive(Debug, Error)]
pub enum RosterError {
    #[error("cannot read '{}': {source}", path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error("cannot write '{}': {source}", path.display())]
    Write { path: PathBuf, source: io::Error },

    #[error("no valid members found in input")]
    NoEligibleRecords,

    #[error("line {line}: {source}")]
    Encode { line: usize, source: EncodeError },

    #[error("invalid batch size {0} (must be 1-{max})", max = crate::BATCH_SIZE)]
    InvalidBatchSize(usize),
}
