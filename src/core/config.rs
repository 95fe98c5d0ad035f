use crate::core::errors::{Error, Result};
use clap::Parser;
use std::path::PathBuf;

/// Command-line arguments of the terminal host.
#[derive(Debug, Parser)]
#[command(name = "dirview", version, about = "Browse a directory as a sortable table")]
pub struct Args {
    /// Directory to open first (defaults to the working directory)
    pub path: Option<PathBuf>,

    /// Print rows as JSON lines instead of an aligned table
    #[arg(long)]
    pub json: bool,

    /// Log filter used when RUST_LOG is not set
    #[arg(long, default_value = "warn")]
    pub log_level: String,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub start_dir: Option<PathBuf>,
    pub output: OutputFormat,
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            start_dir: None,
            output: OutputFormat::Table,
            log_level: "warn".to_string(),
        }
    }
}

impl Config {
    pub fn from_args(args: Args) -> Result<Self> {
        if args.log_level.trim().is_empty() {
            return Err(Error::Config("log level must not be empty".into()));
        }
        Ok(Self {
            start_dir: args.path,
            output: if args.json {
                OutputFormat::Json
            } else {
                OutputFormat::Table
            },
            log_level: args.log_level,
        })
    }

    /// Starting directory, falling back to the process working directory.
    pub fn start_dir(&self) -> Result<PathBuf> {
        match &self.start_dir {
            Some(p) => Ok(p.clone()),
            None => Ok(std::env::current_dir()?),
        }
    }
}
