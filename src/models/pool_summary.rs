use super::pool_state::PoolState;
use super::worker_result::WorkerResult;
use chrono::NaiveDateTime;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PoolSummary {
    pub pool_id: String,
    pub pool_name: String,
    pub pool_tab: String,
    pub lead_name: Option<String>,
    pub pool_up_time: Option<NaiveDateTime>,
    pub total_count: f64,
    pub manpower: usize,
    pub target_load: f64,
    pub expected_completion: Option<NaiveDateTime>,
    pub state: PoolState,
    pub past_expected_completion: bool,
    pub workers: Vec<WorkerResult>,
    pub helpers: Vec<String>,
    /// Other rows carrying a pool-up time; they lost the lead tie-break.
    pub extra_leads: Vec<String>,
}

impl PoolSummary {
    pub fn overdue_count(&self) -> usize {
        self.workers.iter().filter(|w| w.overdue).count()
    }

    pub fn complete_count(&self) -> usize {
        self.workers.iter().filter(|w| w.status.is_complete()).count()
    }

    /// Sum of the loads reported by active workers.
    pub fn done_load(&self) -> f64 {
        self.workers.iter().map(|w| w.load).sum()
    }
}
