// crates/shared-kernel/src/lib.rs
pub use error::{
    AnalysisError, AnalysisResult, ConfigError, ConfigResult, CountStreamError, ErrorKind,
    PresentationError, PresentationResult, Result,
};

pub mod error;
pub mod value_objects;

pub use value_objects::{ByteCount, LineCount, WordCount};
