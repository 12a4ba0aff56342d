// devfolio entry point.
// Loads settings and catalog, sets up logging, and runs the TUI.

mod app;
mod catalog;
mod config;
mod error;
mod links;
mod state;
mod ui;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use crate::app::App;
use crate::config::{Settings, logging, paths};
use crate::error::{DevfolioError, Result};
use crate::links::SystemOpener;
use crate::state::ColumnsHint;

/// Editor-styled portfolio browser for the terminal.
#[derive(Debug, Parser)]
#[command(name = "devfolio", version, about)]
struct Cli {
    /// JSON catalog to show instead of the built-in content
    #[arg(long, value_name = "PATH")]
    catalog: Option<PathBuf>,

    /// Settings file (defaults to the platform config dir)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Terminals narrower than this start with the sidebar hidden
    #[arg(long, value_name = "COLUMNS")]
    narrow_columns: Option<u16>,

    /// Log level used when DEVFOLIO_LOG is not set
    #[arg(long, value_name = "LEVEL")]
    log_level: Option<String>,
}

fn run(cli: Cli) -> Result<()> {
    let settings = match cli.config.or_else(paths::config_path) {
        Some(path) => Settings::load(&path)?,
        None => Settings::default(),
    };
    let settings = settings.with_overrides(cli.narrow_columns, cli.log_level, cli.catalog);

    if let Some(log_path) = paths::log_path() {
        logging::setup_file_logging(&log_path, &settings.log_level)?;
    }

    let catalog = catalog::loader::load(settings.catalog_path.as_deref())?;

    // Evaluated once; later resizes do not re-run the check.
    let (columns, _) = crossterm::terminal::size()?;
    let hint = ColumnsHint {
        columns,
        threshold: settings.narrow_columns,
    };
    tracing::info!(columns, threshold = hint.threshold, "starting devfolio");

    let mut app = App::new(catalog, &hint, Box::new(SystemOpener));

    let mut terminal = ratatui::init();
    let result = app.run(&mut terminal);
    ratatui::restore();

    result.map_err(DevfolioError::from)
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "devfolio exited with an error");
            eprintln!("devfolio: {}", e);
            ExitCode::FAILURE
        }
    }
}
