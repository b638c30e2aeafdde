// crates/engine/src/source.rs
use std::fmt;
use std::fs::File;
use std::io::{self, BufRead, BufReader, Read};
use std::path::{Path, PathBuf};

use log::debug;

use crate::error::{AnalysisError, AnalysisResult};

/// Label used for standard input in reports and messages.
pub const STDIN_LABEL: &str = "<stdin>";

/// Where the bytes of a run come from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Origin {
    #[default]
    Stdin,
    Path(PathBuf),
}

impl Origin {
    /// Interprets a CLI argument; a missing argument or `-` means standard input.
    pub fn from_arg(arg: Option<PathBuf>) -> Self {
        match arg {
            Some(path) if path.as_os_str() != "-" => Self::Path(path),
            _ => Self::Stdin,
        }
    }

    pub fn as_path(&self) -> Option<&Path> {
        match self {
            Self::Stdin => None,
            Self::Path(path) => Some(path),
        }
    }

    pub fn label(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Origin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Stdin => f.write_str(STDIN_LABEL),
            Self::Path(path) => write!(f, "{}", path.display()),
        }
    }
}

/// A finite, single-traversal byte stream.
///
/// Restarting means opening the origin again.
pub struct StreamSource {
    origin: Origin,
    reader: Box<dyn BufRead>,
    consumed: u64,
}

impl StreamSource {
    /// Opens `origin` for reading.
    ///
    /// # Errors
    ///
    /// Returns [`AnalysisError::NotFound`] when the path does not exist, cannot
    /// be read, or names a directory.
    pub fn open(origin: Origin, capacity: usize) -> AnalysisResult<Self> {
        let reader: Box<dyn BufRead> = match &origin {
            Origin::Stdin => Box::new(BufReader::with_capacity(capacity, io::stdin().lock())),
            Origin::Path(path) => {
                let file = open_readable(path).map_err(|source| AnalysisError::NotFound {
                    origin: origin.label(),
                    source,
                })?;
                Box::new(BufReader::with_capacity(capacity, file))
            }
        };
        debug!("opened source {origin}");
        Ok(Self {
            origin,
            reader,
            consumed: 0,
        })
    }

    /// Wraps an arbitrary reader, labelled as `origin`.
    pub fn from_reader<R: Read + 'static>(origin: Origin, reader: R) -> Self {
        Self {
            origin,
            reader: Box::new(BufReader::new(reader)),
            consumed: 0,
        }
    }

    pub const fn origin(&self) -> &Origin {
        &self.origin
    }

    /// Bytes handed out so far.
    pub const fn consumed(&self) -> u64 {
        self.consumed
    }

    /// Returns the next byte, or `None` at end of stream.
    ///
    /// # Errors
    ///
    /// Returns [`AnalysisError::ReadError`] if the underlying reader fails.
    /// Interrupted reads are retried.
    pub fn next_byte(&mut self) -> AnalysisResult<Option<u8>> {
        let byte = loop {
            match self.reader.fill_buf() {
                Ok(buf) => break buf.first().copied(),
                Err(e) if e.kind() == io::ErrorKind::Interrupted => {}
                Err(source) => {
                    return Err(AnalysisError::ReadError {
                        origin: self.origin.label(),
                        consumed: self.consumed,
                        source,
                    });
                }
            }
        };
        if byte.is_some() {
            self.reader.consume(1);
            self.consumed += 1;
        }
        Ok(byte)
    }
}

impl fmt::Debug for StreamSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StreamSource")
            .field("origin", &self.origin)
            .field("consumed", &self.consumed)
            .finish_non_exhaustive()
    }
}

fn open_readable(path: &Path) -> io::Result<File> {
    let file = File::open(path)?;
    if file.metadata()?.is_dir() {
        return Err(io::Error::new(io::ErrorKind::InvalidInput, "is a directory"));
    }
    Ok(file)
}
