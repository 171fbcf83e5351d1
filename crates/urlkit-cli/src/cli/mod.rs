//! CLI for the urlkit URL helpers.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use urlkit_core::config::{self, UrlkitConfig};

use commands::{run_domain, run_inspect, run_root, run_strip_comments, run_suffixes};

/// Top-level CLI for urlkit.
#[derive(Debug, Parser)]
#[command(name = "urlkit")]
#[command(about = "urlkit: root URL, domain and HTML comment helpers", long_about = None)]
pub struct Cli {
    /// Read configuration from this file instead of ~/.config/urlkit/config.toml.
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Print scheme://host of a URL.
    Root {
        /// Absolute URL.
        url: String,
    },

    /// Print the domain of a URL at a given level.
    Domain {
        /// Absolute URL.
        url: String,
        /// 0 = name only, 1 = name.suffix, 2 = sub.name.suffix (default from config).
        #[arg(long, short, value_parser = clap::value_parser!(u8).range(0..=2))]
        level: Option<u8>,
    },

    /// Remove <!-- ... --> blocks from a file (or stdin) and print the result.
    StripComments {
        /// Markup file; reads stdin when omitted.
        path: Option<PathBuf>,
    },

    /// Print root URL and every domain level for a URL.
    Inspect {
        /// Absolute URL.
        url: String,
        /// Emit JSON instead of a table.
        #[arg(long)]
        json: bool,
    },

    /// List the compound suffixes in effect (builtin plus config).
    Suffixes,
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        cli.command.run(cli.config.as_deref())
    }

    /// Dispatch to the handler; `config_path` overrides the XDG config file.
    pub fn run(self, config_path: Option<&Path>) -> Result<()> {
        match self {
            CliCommand::Root { url } => run_root(&url),
            CliCommand::StripComments { path } => run_strip_comments(path.as_deref())?,
            CliCommand::Domain { url, level } => {
                run_domain(&load_config(config_path)?, &url, level)?
            }
            CliCommand::Inspect { url, json } => {
                run_inspect(&load_config(config_path)?, &url, json)?
            }
            CliCommand::Suffixes => run_suffixes(&load_config(config_path)?)?,
        }

        Ok(())
    }
}

/// Only commands that read settings load (and possibly create) the config file.
fn load_config(path: Option<&Path>) -> Result<UrlkitConfig> {
    let cfg = match path {
        Some(path) => config::load_from(path)?,
        None => config::load_or_init()?,
    };
    tracing::debug!("loaded config: {:?}", cfg);
    Ok(cfg)
}

#[cfg(test)]
mod tests;
