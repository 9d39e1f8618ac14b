// src/main.rs
//! Entry point for the treepeek terminal tree viewer.

use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;

use treepeek::{
    app::{App, Session},
    cli::Cli,
    config::Config,
    highlight::Highlighter,
    logging,
    tree::TreeBuilder,
    ui,
};

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.list_themes {
        for name in Highlighter::theme_names() {
            println!("{name}");
        }
        return Ok(());
    }

    // Keep the guard alive so buffered log lines are flushed on exit.
    let _guard = match cli.log_file.clone().or_else(logging::default_log_file) {
        Some(path) => Some(logging::init(&path)?),
        None => None,
    };

    let mut config = Config::load(cli.config.as_deref())?;
    cli.apply(&mut config);
    tracing::info!(theme = %config.theme, max_depth = config.max_depth, "starting treepeek");

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("failed to start async runtime")?;

    let session = Session::new(
        runtime.handle().clone(),
        TreeBuilder::new(config.max_depth),
        Arc::new(Highlighter::new(&config.theme)),
    );
    let mut app = App::new(session, &config);

    let start = match config.start_dir.clone() {
        Some(dir) => dir,
        None => std::env::current_dir().context("cannot determine current directory")?,
    };
    app.session.open_path(start);

    ui::run(app, config.tick_rate())
}
