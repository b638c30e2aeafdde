// src/options.rs
use clap::ValueEnum;

/// How the report is rendered on standard output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One `name: value` line per field
    #[default]
    Text,
    /// Column header and a single row
    Table,
    Json,
    Yaml,
}
