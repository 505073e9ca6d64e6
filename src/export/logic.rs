// src/export/logic.rs

use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::model::flatten;
use crate::export::xlsx::export_xlsx;
use crate::models::dashboard::Dashboard;
use crate::models::pool_summary::PoolSummary;
use crate::ui::messages::warning;
use crate::utils::path::expand_tilde;

/// High-level export logic.
pub struct ExportLogic;

impl ExportLogic {
    /// Export an evaluated dashboard.
    ///
    /// - `format`: explicit format, or `None` to infer it from the file extension
    /// - `file`: absolute output path (`~/` allowed)
    /// - `pool`: restrict to one pool id; otherwise every pool, ranked ones first
    pub fn export(
        dashboard: &Dashboard,
        format: Option<ExportFormat>,
        file: &str,
        pool: Option<&str>,
        force: bool,
    ) -> AppResult<()> {
        let path = expand_tilde(file);

        if !path.is_absolute() {
            return Err(AppError::Export(format!(
                "output file path must be absolute: {file}"
            )));
        }

        let format = match format {
            Some(f) => f,
            None => ExportFormat::from_path(&path)?,
        };

        let selected = select_pools(dashboard, pool)?;

        if selected.is_empty() {
            warning("No pools found in the input. Nothing to export.");
            return Ok(());
        }

        ensure_writable(&path, force)?;

        tracing::debug!(
            pools = selected.len(),
            format = format.as_str(),
            "exporting to {}",
            path.display()
        );

        match format {
            ExportFormat::Json => match pool {
                Some(_) => export_json(&selected, &path)?,
                None => export_json(dashboard, &path)?,
            },
            ExportFormat::Csv => export_csv(&flatten(&selected), &path)?,
            ExportFormat::Xlsx => export_xlsx(&flatten(&selected), &path)?,
        }

        Ok(())
    }
}

/// Pools to export: ranked order first, then undated pools in input order.
fn select_pools<'a>(
    dashboard: &'a Dashboard,
    pool: Option<&str>,
) -> AppResult<Vec<&'a PoolSummary>> {
    if let Some(id) = pool {
        let found = dashboard
            .pool(id)
            .ok_or_else(|| AppError::PoolNotFound(id.to_string()))?;
        return Ok(vec![found]);
    }

    let mut out = dashboard.ranked();
    out.extend(dashboard.undated());
    Ok(out)
}
