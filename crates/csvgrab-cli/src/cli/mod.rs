//! CLI for the csvgrab link harvester and downloader.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use csvgrab_core::config;
use std::path::PathBuf;

use commands::{run_links, run_run};

/// Top-level CLI for csvgrab.
#[derive(Debug, Parser)]
#[command(name = "csvgrab")]
#[command(about = "Harvest CSV links from a page and download them", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Fetch the page and print the resolved download targets without downloading.
    Links {
        /// Page URL to harvest.
        url: String,
    },

    /// Fetch the page, harvest matching links, and download each file.
    Run {
        /// Page URL to harvest. Falls back to `source_url` in the config file.
        url: Option<String>,

        /// Directory downloads are written into (overrides config).
        #[arg(long, value_name = "DIR")]
        output_dir: Option<PathBuf>,

        /// Filename prefix for downloaded files (overrides config).
        #[arg(long, value_name = "PREFIX")]
        prefix: Option<String>,

        /// Pause before each download request, in seconds (overrides config).
        #[arg(long, value_name = "SECS")]
        delay_secs: Option<f64>,
    },
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::Links { url } => run_links(&cfg, &url)?,
            CliCommand::Run {
                url,
                output_dir,
                prefix,
                delay_secs,
            } => run_run(cfg, url.as_deref(), output_dir, prefix, delay_secs)?,
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
