// src/main.rs
use std::io;
use std::process::ExitCode;

use clap::Parser;
use count_stream::args::Args;
use count_stream::config::Config;
use count_stream::{logging, presentation};
use count_stream_shared_kernel::Result;

fn main() -> ExitCode {
    let args = Args::parse();
    logging::init(logging::level_filter(args.verbose, args.quiet));

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("count_stream: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<()> {
    let config = Config::try_from(args)?;
    let report = count_stream_engine::run(&config.analysis)?;
    presentation::print_report(&report, config.format, &mut io::stdout().lock())?;
    Ok(())
}
