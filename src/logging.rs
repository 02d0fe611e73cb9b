//! Terminal logging for the command-line host.

use std::path::Path;

use log::LevelFilter;
use simplelog::{ConfigBuilder, TermLogger, TerminalMode};

use crate::opts::Opts;
use crate::prelude::*;

pub fn init(opts: &Opts) -> Result {
    let mut config_builder = ConfigBuilder::new();
    config_builder
        .set_target_level(LevelFilter::Off)
        .set_location_level(LevelFilter::Trace)
        .set_time_format_str("%F %T")
        .set_time_to_local(true)
        .add_filter_allow_str("ec_sensors");
    if opts.suppress_log_timestamps {
        config_builder.set_time_level(LevelFilter::Off);
    }
    TermLogger::init(level(opts), config_builder.build(), TerminalMode::Stderr)?;
    Ok(())
}

/// Picks the level from `--silent` and `--verbose`.
fn level(opts: &Opts) -> LevelFilter {
    match (opts.silent, opts.verbose) {
        (true, _) => LevelFilter::Warn,
        (_, true) => LevelFilter::Debug,
        _ => LevelFilter::Info,
    }
}

pub trait Log {
    /// Logs a failure to load the file at `path`.
    fn log_load<P: AsRef<Path>>(self, what: &str, path: P) -> Self;
}

impl<T> Log for Result<T> {
    fn log_load<P: AsRef<Path>>(self, what: &str, path: P) -> Self {
        if let Err(ref error) = self {
            error!("Could not load the {} from {}: {:#}", what, path.as_ref().display(), error);
        }
        self
    }
}
