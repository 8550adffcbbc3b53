use crate::config::{RunConfig, TomlConfig};
use crate::utils::error::Result;
use crate::utils::validation::Validate;
use clap::Parser;
use std::path::PathBuf;

pub const USAGE: &str = "Usage: convert <input_file.csv>";

#[derive(Debug, Clone, Parser)]
#[command(name = "convert")]
#[command(about = "Convert a bank CSV export into a YNAB import file")]
pub struct CliConfig {
    /// Bank export with Datum, Naam tegenpartij, Omschrijving-1 and Bedrag columns
    pub input: Option<PathBuf>,

    /// Anything after the input file is ignored
    #[arg(hide = true)]
    pub extra: Vec<String>,

    /// Directory the converted file is written to
    #[arg(short, long)]
    pub output_dir: Option<PathBuf>,

    /// Output file name prefix
    #[arg(long)]
    pub prefix: Option<String>,

    /// Path to TOML configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl CliConfig {
    /// Merge defaults, the optional config file and the flags, flags winning.
    ///
    /// Returns `Ok(None)` when no input file was given.
    pub fn resolve(&self) -> Result<Option<RunConfig>> {
        let Some(input) = &self.input else {
            return Ok(None);
        };

        let mut config = RunConfig::new(input.clone());

        if let Some(path) = &self.config {
            let file = TomlConfig::from_file(path)?;
            file.validate()?;
            config = config.with_file_config(&file);
        }

        if let Some(output_dir) = &self.output_dir {
            config.output_dir = output_dir.clone();
        }
        if let Some(prefix) = &self.prefix {
            config.file_prefix = prefix.clone();
        }

        config.validate()?;
        Ok(Some(config))
    }
}
