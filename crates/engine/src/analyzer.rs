// crates/engine/src/analyzer.rs
use log::{info, warn};
use tokio_util::sync::CancellationToken;

use crate::config::AnalysisConfig;
use crate::error::{AnalysisError, AnalysisResult};
use crate::report::Report;
use crate::sink::Sink;
use crate::source::StreamSource;
use crate::state::AnalysisState;

/// Single-pass aggregator.
///
/// Counts bytes, lines and words in one traversal of the source and echoes
/// each byte to the sink, if any, before the next byte is read.
#[derive(Debug, Clone, Default)]
pub struct Analyzer {
    cancel: Option<CancellationToken>,
}

impl Analyzer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_cancel(cancel: CancellationToken) -> Self {
        Self {
            cancel: Some(cancel),
        }
    }

    #[must_use]
    pub fn from_config(config: &AnalysisConfig) -> Self {
        Self {
            cancel: config.cancel.clone(),
        }
    }

    /// Runs the source to end of stream.
    ///
    /// The sink is closed on every path. On failure no report is produced and
    /// bytes already written to the sink are left in place.
    ///
    /// # Errors
    ///
    /// [`AnalysisError::ReadError`] when the source fails,
    /// [`AnalysisError::WriteError`] when the sink fails (including the final
    /// flush), [`AnalysisError::Cancelled`] when the token fires.
    pub fn analyze(&self, mut source: StreamSource, mut sink: Option<Sink>) -> AnalysisResult<Report> {
        let mut state = AnalysisState::new();
        let outcome = self.drive(&mut source, &mut sink, &mut state);
        let destination = sink.as_ref().map(|s| s.destination().clone());
        let closed = sink.map(Sink::close).transpose();

        if let Err(e) = outcome {
            match closed {
                Ok(_) => warn!("run over {} failed; sink closed", source.origin()),
                Err(close_err) => warn!("run over {} failed; closing sink also failed: {close_err}", source.origin()),
            }
            return Err(e);
        }
        let written = closed?;

        let report = Report::new(&state, source.origin(), destination.as_ref());
        info!(
            "analyzed {}: {} bytes, {} lines, {} words",
            report.source(),
            report.bytes(),
            report.lines(),
            report.words()
        );
        if let (Some(dest), Some(written)) = (report.destination(), written) {
            info!("copied {} to {dest} ({written} bytes)", report.source());
        }
        Ok(report)
    }

    fn drive(
        &self,
        source: &mut StreamSource,
        sink: &mut Option<Sink>,
        state: &mut AnalysisState,
    ) -> AnalysisResult<()> {
        loop {
            if self.is_cancelled() {
                warn!("cancelled after {} bytes", source.consumed());
                return Err(AnalysisError::Cancelled {
                    origin: source.origin().label(),
                    consumed: source.consumed(),
                });
            }
            let Some(byte) = source.next_byte()? else {
                return Ok(());
            };
            state.consume(byte);
            if let Some(sink) = sink {
                sink.write_byte(byte)?;
            }
        }
    }

    fn is_cancelled(&self) -> bool {
        self.cancel.as_ref().is_some_and(CancellationToken::is_cancelled)
    }
}
