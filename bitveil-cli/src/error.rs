use std::path::PathBuf;

use bitveil::CombineError;
use thiserror::Error;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Everything that can stop a run. Each kind has its own process exit code.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("{0}")]
    Usage(String),

    #[error("could not read image {}: {source}", .path.display())]
    ImageRead {
        path: PathBuf,
        #[source]
        source: BoxError,
    },

    #[error("could not write image {}: {source}", .path.display())]
    ImageWrite {
        path: PathBuf,
        #[source]
        source: BoxError,
    },

    #[error(transparent)]
    DimensionMismatch(#[from] CombineError),
}

impl CliError {
    pub fn usage(msg: impl Into<String>) -> Self {
        Self::Usage(msg.into())
    }

    pub fn exit_code(&self) -> u8 {
        match self {
            CliError::Usage(_) => 1,
            CliError::ImageRead { .. } | CliError::ImageWrite { .. } => 2,
            CliError::DimensionMismatch(_) => 3,
        }
    }
}
