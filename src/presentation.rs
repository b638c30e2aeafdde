// src/presentation.rs
//! Report rendering.
//!
//! Every format lists bytes, lines and words in that order.

use std::fmt::Write as _;
use std::io::Write;

use count_stream_engine::report::Report;
use count_stream_shared_kernel::PresentationResult;

use crate::options::OutputFormat;

/// Renders `report` as `name: value` lines.
pub fn format_text(report: &Report) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "bytes: {}", report.bytes());
    let _ = writeln!(out, "lines: {}", report.lines());
    let _ = writeln!(out, "words: {}", report.words());
    let _ = writeln!(out, "source: {}", report.source());
    if let Some(dest) = report.destination() {
        let _ = writeln!(out, "copied to: {dest}");
    }
    out
}

/// Renders `report` as a header line, a rule and one row.
pub fn format_table(report: &Report) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{:>12}{:>12}{:>12}      SOURCE", "BYTES", "LINES", "WORDS");
    let _ = writeln!(out, "{}", "-".repeat(52));
    let target = match report.destination() {
        Some(dest) => format!("{} -> {dest}", report.source()),
        None => report.source().to_string(),
    };
    let _ = writeln!(
        out,
        "{:>12}{:>12}{:>12}      {target}",
        report.bytes(),
        report.lines(),
        report.words()
    );
    out
}

/// # Errors
///
/// Returns a serialization error if the structured encoders fail.
pub fn render(report: &Report, format: OutputFormat) -> PresentationResult<String> {
    Ok(match format {
        OutputFormat::Text => format_text(report),
        OutputFormat::Table => format_table(report),
        OutputFormat::Json => {
            let mut json = serde_json::to_string_pretty(report)?;
            json.push('\n');
            json
        }
        OutputFormat::Yaml => serde_yaml::to_string(report)?,
    })
}

/// # Errors
///
/// Returns an error if rendering or writing to `out` fails.
pub fn print_report<W: Write>(report: &Report, format: OutputFormat, out: &mut W) -> PresentationResult<()> {
    let rendered = render(report, format)?;
    out.write_all(rendered.as_bytes())?;
    out.flush()?;
    Ok(())
}
