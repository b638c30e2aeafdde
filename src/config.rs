// src/config.rs
use count_stream_engine::config::{AnalysisConfig, AnalysisConfigBuilder};
use count_stream_engine::error::{ConfigError, ConfigResult};
use count_stream_engine::sink::Destination;
use count_stream_engine::source::Origin;

use crate::args::Args;
use crate::options::OutputFormat;

/// Everything a single invocation needs, resolved from the CLI.
#[derive(Debug, Clone)]
pub struct Config {
    pub analysis: AnalysisConfig,
    pub format: OutputFormat,
}

impl TryFrom<Args> for Config {
    type Error = ConfigError;

    fn try_from(args: Args) -> ConfigResult<Self> {
        let origin = Origin::from_arg(args.input);
        let destination = if args.to_txt {
            let path = origin
                .as_path()
                .ok_or(ConfigError::DerivedDestinationNeedsPath)?;
            Some(Destination::derived_text(path))
        } else {
            args.copy_to.map(Destination::from_arg)
        };

        let analysis = AnalysisConfigBuilder::default()
            .origin(origin)
            .destination(destination)
            .buffer_capacity(args.buffer_size.bytes())
            .build()
            .map_err(|e| ConfigError::Incomplete(e.to_string()))?;
        analysis.validate()?;

        Ok(Self {
            analysis,
            format: args.format,
        })
    }
}
