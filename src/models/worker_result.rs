use super::worker_status::WorkerStatus;
use serde::Serialize;

/// Classification of a single pool member for one evaluation cycle.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WorkerResult {
    pub name: String,
    pub load: f64,
    pub status: WorkerStatus,
    pub load_percent: u8,
    pub duration_seconds: Option<i64>,
    #[serde(rename = "is_late")]
    pub overdue: bool,
    pub late_reason: Option<String>,
}
