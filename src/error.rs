use std::io;
use std::path::PathBuf;
use thiserror::Error;
#[derive(Debug, Error)]
pub enum BundleError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        source: io::Error,
    },
    #[error("Invalid excluded directory name: {0:?}")]
    InvalidExcludeName(String),
    #[error("Invalid extension: {0:?}")]
    InvalidExtension(String),
}
impl BundleError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        BundleError::Io {
            path: path.into(),
            source,
        }
    }
}

/// Why a single matched file could not be copied into a report.
///
/// These never abort a report; the writer prints them inline instead of the file's content.
#[derive(Debug, Error)]
pub enum ReadFailure {
    #[error("{0}")]
    Io(#[from] io::Error),
    #[error("{0}")]
    InvalidUtf8(#[from] std::string::FromUtf8Error),
    #[error("binary content omitted")]
    Binary,
}
impl ReadFailure {
    /// Short name of the failure class, as shown in the report diagnostic.
    pub fn kind(&self) -> String {
        match self {
            ReadFailure::Io(e) => format!("{:?}", e.kind()),
            ReadFailure::InvalidUtf8(_) => "InvalidUtf8".to_string(),
            ReadFailure::Binary => "Binary".to_string(),
        }
    }
}
