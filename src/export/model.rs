// src/export/model.rs

use crate::models::pool_summary::PoolSummary;
use crate::models::worker_result::WorkerResult;
use crate::utils::formatting::optional_duration;
use crate::utils::time::format_iso;
use serde::Serialize;

/// Flat row: one active worker with its pool context.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct WorkerExport {
    pub pool_id: String,
    pub pool_up: String,
    pub lead: String,
    pub total_count: f64,
    pub manpower: usize,
    pub target_load: f64,
    pub expected_completion: String,
    pub pool_state: String,
    pub worker: String,
    pub load: f64,
    pub load_percent: u8,
    pub status: String,
    pub duration: String,
    pub is_late: bool,
    pub late_reason: String,
}

impl WorkerExport {
    /// `worker` is `None` for a pool that has no active workers yet.
    fn from_parts(pool: &PoolSummary, worker: Option<&WorkerResult>) -> Self {
        Self {
            pool_id: pool.pool_id.clone(),
            pool_up: pool.pool_up_time.as_ref().map(format_iso).unwrap_or_default(),
            lead: pool.lead_name.clone().unwrap_or_default(),
            total_count: pool.total_count,
            manpower: pool.manpower,
            target_load: pool.target_load,
            expected_completion: pool
                .expected_completion
                .as_ref()
                .map(format_iso)
                .unwrap_or_default(),
            pool_state: pool.state.as_str().to_string(),
            worker: worker.map(|w| w.name.clone()).unwrap_or_default(),
            load: worker.map(|w| w.load).unwrap_or(0.0),
            load_percent: worker.map(|w| w.load_percent).unwrap_or(0),
            status: worker
                .map(|w| w.status.as_str().to_string())
                .unwrap_or_default(),
            duration: worker
                .map(|w| optional_duration(w.duration_seconds))
                .unwrap_or_default(),
            is_late: worker.is_some_and(|w| w.overdue),
            late_reason: worker
                .and_then(|w| w.late_reason.clone())
                .unwrap_or_default(),
        }
    }
}

/// One row per active worker, pools in the given order.
/// A pool with no active workers still gets one row so it shows up in the sheet.
pub(crate) fn flatten(pools: &[&PoolSummary]) -> Vec<WorkerExport> {
    let mut out = Vec::new();
    for pool in pools {
        if pool.workers.is_empty() {
            out.push(WorkerExport::from_parts(pool, None));
            continue;
        }
        out.extend(
            pool.workers
                .iter()
                .map(|w| WorkerExport::from_parts(pool, Some(w))),
        );
    }
    out
}

/// Header per CSV / XLSX
pub(crate) fn get_headers() -> Vec<&'static str> {
    vec![
        "pool_id",
        "pool_up",
        "lead",
        "total_count",
        "manpower",
        "target_load",
        "expected_completion",
        "pool_state",
        "worker",
        "load",
        "load_percent",
        "status",
        "duration",
        "is_late",
        "late_reason",
    ]
}

pub(crate) fn worker_to_row(e: &WorkerExport) -> Vec<String> {
    vec![
        e.pool_id.clone(),
        e.pool_up.clone(),
        e.lead.clone(),
        e.total_count.to_string(),
        e.manpower.to_string(),
        format!("{:.2}", e.target_load),
        e.expected_completion.clone(),
        e.pool_state.clone(),
        e.worker.clone(),
        e.load.to_string(),
        e.load_percent.to_string(),
        e.status.clone(),
        e.duration.clone(),
        if e.is_late { "yes".into() } else { "no".into() },
        e.late_reason.clone(),
    ]
}
