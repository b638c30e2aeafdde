// crates/engine/src/lib.rs
//! Single-pass text stream analysis.
//!
//! A run opens a [`source::StreamSource`], optionally a [`sink::Sink`], and
//! drives every byte through [`state::AnalysisState`] exactly once.

pub mod analyzer;
pub mod config;
pub mod error;
pub mod report;
pub mod sink;
pub mod source;
pub mod state;
pub mod tracker;

pub use tokio_util::sync::CancellationToken;

use log::debug;

use crate::analyzer::Analyzer;
use crate::config::AnalysisConfig;
use crate::error::AnalysisResult;
use crate::report::Report;
use crate::sink::Sink;
use crate::source::StreamSource;

/// Run one analysis as described by `config`.
///
/// The source is opened before the sink, so a missing source never creates or
/// truncates the destination.
///
/// # Errors
///
/// Returns `NotFound` if the source cannot be opened, `WriteError` if the
/// destination cannot be created or written, `ReadError` if the source fails
/// mid-stream and `Cancelled` if the configured token fires.
pub fn run(config: &AnalysisConfig) -> AnalysisResult<Report> {
    debug!("starting run: {config:?}");
    let source = StreamSource::open(config.origin.clone(), config.buffer_capacity)?;
    let sink = config
        .destination
        .clone()
        .map(|dest| Sink::open(dest, config.buffer_capacity))
        .transpose()?;
    Analyzer::from_config(config).analyze(source, sink)
}
