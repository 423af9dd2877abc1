use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SummaryError {
    #[error("input file not found: {}", path.display())]
    InputMissing { path: PathBuf },

    #[error("failed to read {}: {source}", path.display())]
    InputUnreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("malformed input in {}: {reason}", path.display())]
    InputMalformed { path: PathBuf, reason: String },

    #[error("malformed issue record at index {index}: {source}")]
    RecordMalformed {
        index: usize,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to write summary: {0}")]
    Output(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, SummaryError>;
