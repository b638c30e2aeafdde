// src/args.rs
use std::path::PathBuf;

use clap::{ArgAction, Parser, ValueHint};

use crate::options::OutputFormat;
use crate::parsers::SizeArg;

/// Top-level CLI arguments parsed via clap.
#[derive(Parser, Debug)]
#[command(
    name = "count_stream",
    version = crate::VERSION,
    about = "Count bytes, lines and words in a single pass, optionally copying the input"
)]
pub struct Args {
    /// Input file; `-` or nothing reads standard input
    #[arg(value_hint = ValueHint::FilePath)]
    pub input: Option<PathBuf>,

    /// Copy every input byte to PATH (`-` for standard output)
    #[arg(
        long,
        short = 'o',
        value_name = "PATH",
        value_hint = ValueHint::FilePath,
        conflicts_with = "to_txt",
        help_heading = "Copy"
    )]
    pub copy_to: Option<PathBuf>,

    /// Copy to the input path with its extension replaced by `.txt`
    #[arg(long, help_heading = "Copy")]
    pub to_txt: bool,

    /// Report format
    #[arg(
        long,
        value_enum,
        default_value = "text",
        env = "COUNT_STREAM_FORMAT",
        help_heading = "Output"
    )]
    pub format: OutputFormat,

    /// Read/write buffer size (e.g. 4096, 8K, 1MiB)
    #[arg(long, default_value = "8K", value_name = "SIZE", help_heading = "Output")]
    pub buffer_size: SizeArg,

    /// Log more (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, help_heading = "Logging")]
    pub verbose: u8,

    /// Log errors only
    #[arg(short, long, conflicts_with = "verbose", help_heading = "Logging")]
    pub quiet: bool,
}
