// crates/shared-kernel/src/error.rs
use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Root error type shared across the workspace.
#[derive(Debug, Error)]
pub enum CountStreamError {
    #[error(transparent)]
    Analysis(#[from] AnalysisError),

    #[error("Invalid configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("Presentation error: {0}")]
    Presentation(#[from] PresentationError),
}

pub type Result<T> = std::result::Result<T, CountStreamError>;

/// Discriminant of [`AnalysisError`], for matching without destructuring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    NotFound,
    Read,
    Write,
    Cancelled,
}

/// Failures of a single analysis run.
///
/// Every variant is fatal to the run. None of them carries a partial report.
#[derive(Debug, Error)]
pub enum AnalysisError {
    /// The source could not be opened. Raised before any byte is consumed.
    #[error("cannot open '{origin}': {source}")]
    NotFound {
        origin: String,
        #[source]
        source: io::Error,
    },

    /// The source failed after the run started.
    #[error("failed to read '{origin}' after {consumed} bytes: {source}")]
    ReadError {
        origin: String,
        consumed: u64,
        #[source]
        source: io::Error,
    },

    /// The sink could not be opened, written or flushed.
    ///
    /// Bytes that already reached the destination stay there.
    #[error("failed to write '{destination}': {source}")]
    WriteError {
        destination: String,
        #[source]
        source: io::Error,
    },

    #[error("analysis of '{origin}' cancelled after {consumed} bytes")]
    Cancelled { origin: String, consumed: u64 },
}

impl AnalysisError {
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::NotFound { .. } => ErrorKind::NotFound,
            Self::ReadError { .. } => ErrorKind::Read,
            Self::WriteError { .. } => ErrorKind::Write,
            Self::Cancelled { .. } => ErrorKind::Cancelled,
        }
    }
}

pub type AnalysisResult<T> = std::result::Result<T, AnalysisError>;

/// Configuration assembly errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("a derived .txt destination needs a file source, not standard input")]
    DerivedDestinationNeedsPath,

    #[error("destination '{}' is the source itself", .path.display())]
    DestinationIsSource { path: PathBuf },

    #[error("incomplete configuration: {0}")]
    Incomplete(String),
}

pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

/// Report rendering errors.
#[derive(Debug, Error)]
pub enum PresentationError {
    #[error("Failed to render {format} output: {details}")]
    Serialization { format: String, details: String },

    #[error("Failed to write report: {0}")]
    Output(#[from] io::Error),
}

pub type PresentationResult<T> = std::result::Result<T, PresentationError>;

impl From<serde_json::Error> for PresentationError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization {
            format: "JSON".to_string(),
            details: err.to_string(),
        }
    }
}

impl From<serde_yaml::Error> for PresentationError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::Serialization {
            format: "YAML".to_string(),
            details: err.to_string(),
        }
    }
}
