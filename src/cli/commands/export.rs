use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::errors::AppResult;
use crate::export::ExportLogic;
use crate::input::load_dashboard;

pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        pool,
        force,
    } = &cli.command
    {
        let dashboard = load_dashboard(cli, cfg)?;
        ExportLogic::export(&dashboard, *format, file, pool.as_deref(), *force)?;
    }
    Ok(())
}
