// crates/engine/src/report.rs
use count_stream_shared_kernel::{ByteCount, LineCount, WordCount};
use serde::Serialize;

use crate::sink::Destination;
use crate::source::Origin;
use crate::state::AnalysisState;

/// Immutable end-of-run summary.
///
/// Field order is fixed: bytes, lines, words, then the identifiers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    bytes: ByteCount,
    lines: LineCount,
    words: WordCount,
    source: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    destination: Option<String>,
}

impl Report {
    pub fn new(state: &AnalysisState, origin: &Origin, destination: Option<&Destination>) -> Self {
        Self {
            bytes: state.bytes(),
            lines: state.lines(),
            words: state.words(),
            source: origin.label(),
            destination: destination.map(Destination::label),
        }
    }

    pub const fn bytes(&self) -> ByteCount {
        self.bytes
    }

    pub const fn lines(&self) -> LineCount {
        self.lines
    }

    pub const fn words(&self) -> WordCount {
        self.words
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn destination(&self) -> Option<&str> {
        self.destination.as_deref()
    }
}
