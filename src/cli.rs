//! Command-line arguments.

use crate::calculator::DisplayPolicy;
use crate::config::{Config, ConfigError};
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "deskcalc",
    version,
    about = "Four-function desk calculator driven by key presses"
)]
pub struct Cli {
    /// Keys to press, e.g. `12+8=` or `7 M+ AC MR`. Reads key sequences
    /// from stdin, one per line, when omitted.
    #[arg(allow_hyphen_values = true)]
    pub keys: Vec<String>,

    /// Config file to use instead of the default location
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Override the significant-digit cap
    #[arg(long, value_name = "N")]
    pub digit_cap: Option<usize>,

    /// Override the mantissa precision of scientific notation
    #[arg(long, value_name = "N")]
    pub precision: Option<usize>,

    /// Print the readout as JSON instead of drawing the panel
    #[arg(long)]
    pub json: bool,

    /// Print the display after every key press
    #[arg(long)]
    pub trace: bool,

    /// Copy the final display to the clipboard
    #[arg(long)]
    pub copy: bool,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Load the config and apply command-line overrides on top of it.
    pub fn resolve_policy(&self) -> Result<DisplayPolicy, ConfigError> {
        let mut config = match &self.config {
            Some(path) => Config::load_from(path)?,
            None => Config::load()?,
        };

        if let Some(cap) = self.digit_cap {
            config.display.digit_cap = cap;
        }
        if let Some(precision) = self.precision {
            config.display.exponent_precision = precision;
        }
        config.validate()?;

        Ok(config.display)
    }
}
