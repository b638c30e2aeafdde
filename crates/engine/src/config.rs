// crates/engine/src/config.rs
use derive_builder::Builder;
use std::path::Path;
use tokio_util::sync::CancellationToken;

use crate::error::{ConfigError, ConfigResult};
use crate::sink::Destination;
use crate::source::Origin;

pub const DEFAULT_BUFFER_CAPACITY: usize = 8 * 1024;

#[derive(Debug, Clone, Builder)]
#[builder(setter(into))]
pub struct AnalysisConfig {
    #[builder(default)]
    pub origin: Origin,
    #[builder(default)]
    pub destination: Option<Destination>,
    #[builder(default = "DEFAULT_BUFFER_CAPACITY")]
    pub buffer_capacity: usize,
    #[builder(default)]
    pub cancel: Option<CancellationToken>,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            origin: Origin::Stdin,
            destination: None,
            buffer_capacity: DEFAULT_BUFFER_CAPACITY,
            cancel: None,
        }
    }
}

impl AnalysisConfig {
    /// Rejects a destination that would truncate the source before it is read.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::DestinationIsSource`] when both sides name the
    /// same file.
    pub fn validate(&self) -> ConfigResult<()> {
        let (Some(source), Some(dest)) = (
            self.origin.as_path(),
            self.destination.as_ref().and_then(Destination::as_path),
        ) else {
            return Ok(());
        };
        if same_file(source, dest) {
            return Err(ConfigError::DestinationIsSource {
                path: dest.to_path_buf(),
            });
        }
        Ok(())
    }
}

/// On Unix two names for one file share a `(dev, ino)` pair, which also
/// catches hard links. Elsewhere, and when either side does not exist yet,
/// canonical paths are compared.
fn same_file(a: &Path, b: &Path) -> bool {
    #[cfg(unix)]
    {
        use std::os::unix::fs::MetadataExt;

        if let (Ok(ma), Ok(mb)) = (std::fs::metadata(a), std::fs::metadata(b)) {
            return (ma.dev(), ma.ino()) == (mb.dev(), mb.ino());
        }
    }
    match (a.canonicalize(), b.canonicalize()) {
        (Ok(a), Ok(b)) => a == b,
        _ => a == b,
    }
}
