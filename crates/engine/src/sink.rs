// crates/engine/src/sink.rs
use std::fmt;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use log::{debug, warn};

use crate::error::{AnalysisError, AnalysisResult};

pub const STDOUT_LABEL: &str = "<stdout>";

/// Where copied bytes go. "No sink" is expressed as `Option::None`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Destination {
    Stdout,
    Path(PathBuf),
}

impl Destination {
    /// Interprets a CLI argument; `-` means standard output.
    pub fn from_arg(path: PathBuf) -> Self {
        if path.as_os_str() == "-" {
            Self::Stdout
        } else {
            Self::Path(path)
        }
    }

    /// Derives `<stem>.txt` next to `source`, replacing any extension.
    pub fn derived_text(source: &Path) -> Self {
        Self::Path(source.with_extension("txt"))
    }

    pub fn as_path(&self) -> Option<&Path> {
        match self {
            Self::Stdout => None,
            Self::Path(path) => Some(path),
        }
    }

    pub fn label(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Destination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Stdout => f.write_str(STDOUT_LABEL),
            Self::Path(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Byte-for-byte copy target.
///
/// The sink is flushed when dropped unless [`Sink::close`] already did so, so
/// every exit path of a run leaves buffered bytes at the destination.
pub struct Sink {
    destination: Destination,
    writer: Box<dyn Write>,
    written: u64,
    closed: bool,
}

impl Sink {
    /// Opens (creating or truncating) the destination.
    ///
    /// # Errors
    ///
    /// Returns [`AnalysisError::WriteError`] when the destination cannot be
    /// created.
    pub fn open(destination: Destination, capacity: usize) -> AnalysisResult<Self> {
        let writer: Box<dyn Write> = match &destination {
            Destination::Stdout => Box::new(BufWriter::with_capacity(capacity, io::stdout())),
            Destination::Path(path) => {
                let file = File::create(path).map_err(|source| AnalysisError::WriteError {
                    destination: destination.label(),
                    source,
                })?;
                Box::new(BufWriter::with_capacity(capacity, file))
            }
        };
        debug!("opened sink {destination}");
        Ok(Self::from_boxed(destination, writer))
    }

    pub fn from_writer<W: Write + 'static>(destination: Destination, writer: W) -> Self {
        Self::from_boxed(destination, Box::new(writer))
    }

    fn from_boxed(destination: Destination, writer: Box<dyn Write>) -> Self {
        Self {
            destination,
            writer,
            written: 0,
            closed: false,
        }
    }

    pub const fn destination(&self) -> &Destination {
        &self.destination
    }

    /// # Errors
    ///
    /// Returns [`AnalysisError::WriteError`] if the writer rejects the byte.
    pub fn write_byte(&mut self, byte: u8) -> AnalysisResult<()> {
        self.writer
            .write_all(&[byte])
            .map_err(|source| self.write_error(source))?;
        self.written += 1;
        Ok(())
    }

    /// Flushes and closes the sink, returning the number of bytes written.
    ///
    /// # Errors
    ///
    /// Returns [`AnalysisError::WriteError`] if the final flush fails.
    pub fn close(mut self) -> AnalysisResult<u64> {
        self.closed = true;
        self.writer.flush().map_err(|source| self.write_error(source))?;
        debug!("closed sink {} after {} bytes", self.destination, self.written);
        Ok(self.written)
    }

    fn write_error(&self, source: io::Error) -> AnalysisError {
        AnalysisError::WriteError {
            destination: self.destination.label(),
            source,
        }
    }
}

impl Drop for Sink {
    fn drop(&mut self) {
        if self.closed {
            return;
        }
        if let Err(e) = self.writer.flush() {
            warn!("flushing sink {} on drop failed: {e}", self.destination);
        }
    }
}

impl fmt::Debug for Sink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Sink")
            .field("destination", &self.destination)
            .field("written", &self.written)
            .field("closed", &self.closed)
            .finish_non_exhaustive()
    }
}
