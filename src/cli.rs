// src/cli.rs
//! Command-line arguments.

use std::path::PathBuf;

use clap::Parser;

use crate::config::Config;

/// Browse a directory tree and preview files with syntax highlighting.
#[derive(Debug, Parser)]
#[command(name = "treepeek", version, about)]
pub struct Cli {
    /// Directory to open on startup
    pub path: Option<PathBuf>,

    /// Config file (default: <config dir>/treepeek/config.toml)
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Highlighting theme, overrides the config file
    #[arg(long, value_name = "NAME")]
    pub theme: Option<String>,

    /// Log file (default: <cache dir>/treepeek/treepeek.log)
    #[arg(long, value_name = "FILE")]
    pub log_file: Option<PathBuf>,

    /// Print the available themes and exit
    #[arg(long)]
    pub list_themes: bool,
}

impl Cli {
    /// Fold command-line overrides into the loaded config.
    pub fn apply(&self, config: &mut Config) {
        if let Some(theme) = &self.theme {
            config.theme = theme.clone();
        }
        if let Some(path) = &self.path {
            config.start_dir = Some(path.clone());
        }
    }
}
