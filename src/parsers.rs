// src/parsers.rs
use std::str::FromStr;

/// Largest accepted read/write buffer.
pub const MAX_BUFFER_BYTES: u64 = 64 * 1024 * 1024;

/// Buffer size with an optional binary suffix (e.g. `8K`, `1MiB`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SizeArg(pub u64);

impl SizeArg {
    /// The size as a `usize`; the parser caps it at [`MAX_BUFFER_BYTES`].
    pub fn bytes(self) -> usize {
        usize::try_from(self.0).unwrap_or(usize::MAX)
    }
}

impl FromStr for SizeArg {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim().replace('_', "");
        let lower = s.to_ascii_lowercase();
        let (num_str, multiplier) = parse_with_suffix(&lower);
        let num: u64 = num_str
            .parse()
            .map_err(|_| format!("Invalid size number: {num_str}"))?;
        let bytes = num
            .checked_mul(multiplier)
            .ok_or_else(|| format!("Size too large: {s}"))?;
        if bytes == 0 {
            return Err("size must be at least 1 byte".to_string());
        }
        if bytes > MAX_BUFFER_BYTES {
            return Err(format!("size must be at most {MAX_BUFFER_BYTES} bytes"));
        }
        Ok(Self(bytes))
    }
}

fn parse_with_suffix(s: &str) -> (&str, u64) {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;
    const SUFFIXES: &[(&[&str], u64)] = &[(&["mib", "mb", "m"], MB), (&["kib", "kb", "k"], KB)];
    for (suffixes, multiplier) in SUFFIXES {
        for suffix in *suffixes {
            if let Some(stripped) = s.strip_suffix(suffix) {
                return (stripped.trim(), *multiplier);
            }
        }
    }
    (s, 1)
}
