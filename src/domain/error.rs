use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DealError {
    #[error("Failed to read deal file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Deal file {path} is not valid JSON: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Deal file {path} must contain a list of deals or an object with a \"deals\" list")]
    UnexpectedShape { path: PathBuf },

    #[error("Malformed deal at index {index}: {source}")]
    MalformedDeal {
        index: usize,
        #[source]
        source: serde_json::Error,
    },
}

impl DealError {
    pub fn record_index(&self) -> Option<usize> {
        match self {
            DealError::MalformedDeal { index, .. } => Some(*index),
            _ => None,
        }
    }
}
