use std::path::PathBuf;

use clap::Parser;

/// Re-exposes Netatmo weather station readings as flat JSON metrics.
#[derive(Debug, Parser)]
#[command(version, about)]
pub struct Args {
    /// configuration file
    #[arg(long, default_value = "config.yml")]
    pub config: PathBuf,
}
