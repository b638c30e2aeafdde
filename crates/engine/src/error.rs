//! Re-export of the analysis error types from the shared kernel.

pub use count_stream_shared_kernel::{
    AnalysisError, AnalysisResult, ConfigError, ConfigResult, ErrorKind,
};
