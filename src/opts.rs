use std::path::PathBuf;

use structopt::StructOpt;

#[derive(StructOpt, Debug)]
#[structopt(name = "ec-sensors", author, about)]
pub struct Opts {
    /// Show only warnings and errors
    #[structopt(short = "s", long = "silent", conflicts_with = "verbose")]
    pub silent: bool,

    /// Show all log messages
    #[structopt(short = "v", long = "verbose", conflicts_with = "silent")]
    pub verbose: bool,

    /// Suppress timestamps in logs, useful with journald
    #[structopt(long = "suppress-log-timestamps")]
    pub suppress_log_timestamps: bool,

    /// Settings file
    #[structopt(long, parse(from_os_str), env = "EC_SENSORS_SETTINGS", default_value = "ec-sensors.toml")]
    pub settings: PathBuf,

    /// Snapshot file with the observations and alerts in JSON
    #[structopt(long, parse(from_os_str), env = "EC_SENSORS_SNAPSHOT")]
    pub snapshot: PathBuf,

    /// Display imperial units regardless of the settings
    #[structopt(long)]
    pub imperial: bool,

    /// Print the sensor states as JSON
    #[structopt(long)]
    pub json: bool,
}
