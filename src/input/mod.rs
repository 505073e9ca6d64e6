//! Loading sheet exports and running one evaluation cycle on them.

pub mod sheet;

use crate::cli::parser::Cli;
use crate::config::Config;
use crate::core::logic::Core;
use crate::errors::{AppError, AppResult};
use crate::models::dashboard::Dashboard;
use crate::ui::messages::warning;
use crate::utils::path::expand_tilde;
use crate::utils::time::resolve_now;
use std::path::PathBuf;

/// Input path: `--input` first, then the configured one.
pub fn resolve_input(cli: &Cli, cfg: &Config) -> AppResult<PathBuf> {
    if let Some(p) = &cli.input {
        return Ok(expand_tilde(p));
    }
    cfg.input_path().ok_or(AppError::NoInput)
}

/// Read the input and evaluate it as of `--now` (or the local clock).
pub fn load_dashboard(cli: &Cli, cfg: &Config) -> AppResult<Dashboard> {
    let path = resolve_input(cli, cfg)?;
    let now = resolve_now(cli.now.as_ref())?;
    let rows = sheet::read_rows(&path)?;

    let dashboard = Core::evaluate(&rows, &cfg.engine(), now);

    if dashboard.dropped_rows > 0 {
        warning(format!(
            "{} row(s) skipped: missing name, pool name or tab",
            dashboard.dropped_rows
        ));
    }

    Ok(dashboard)
}
