//! Partition records by pool and pick each pool's lead.

use crate::models::record::WorkRecord;
use std::collections::{HashMap, HashSet};
use tracing::warn;

/// Per-cycle view of one pool; rebuilt from the records every evaluation.
#[derive(Debug, Clone, Default)]
pub struct PoolView {
    pub pool_id: String,
    pub pool_name: String,
    pub pool_tab: String,
    pub lead: Option<WorkRecord>,
    /// Non-lead rows with load > 0.
    pub active: Vec<WorkRecord>,
    /// Non-lead rows with load == 0.
    pub helpers: Vec<WorkRecord>,
    /// Rows carrying a pool-up time that lost the lead tie-break.
    pub extra_leads: Vec<WorkRecord>,
}

impl PoolView {
    fn new(first: &WorkRecord) -> Self {
        Self {
            pool_id: first.pool_id(),
            pool_name: first.pool_name.clone(),
            pool_tab: first.pool_tab.clone(),
            ..Default::default()
        }
    }

    pub fn manpower(&self) -> usize {
        self.active.len()
    }

    pub fn total_pool_load(&self) -> f64 {
        self.lead.as_ref().map(|l| l.load).unwrap_or(0.0)
    }
}

/// Group records by pool id, pools in order of first appearance.
pub fn group_by_pool(records: &[WorkRecord]) -> Vec<PoolView> {
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut pools: Vec<PoolView> = Vec::new();
    let mut candidates: Vec<Vec<WorkRecord>> = Vec::new();

    for rec in records {
        let id = rec.pool_id();
        let slot = *index.entry(id).or_insert_with(|| {
            pools.push(PoolView::new(rec));
            candidates.push(Vec::new());
            pools.len() - 1
        });

        let pool = &mut pools[slot];
        if rec.is_lead() {
            candidates[slot].push(rec.clone());
        } else if rec.load > 0.0 {
            pool.active.push(rec.clone());
        } else {
            pool.helpers.push(rec.clone());
        }
    }

    for (pool, leads) in pools.iter_mut().zip(candidates) {
        let (lead, extra) = select_lead(leads);
        if !extra.is_empty() {
            warn!(
                pool = %pool.pool_id,
                count = extra.len() + 1,
                "multiple lead rows, keeping the earliest pool-up"
            );
        }
        pool.lead = lead;
        pool.extra_leads = extra;
        warn_duplicates(pool);
    }

    pools
}

pub fn find_pool<'a>(pools: &'a [PoolView], pool_id: &str) -> Option<&'a PoolView> {
    pools.iter().find(|p| p.pool_id == pool_id)
}

/// Earliest pool-up wins; equal timestamps keep the earliest-listed row.
fn select_lead(candidates: Vec<WorkRecord>) -> (Option<WorkRecord>, Vec<WorkRecord>) {
    let winner = candidates
        .iter()
        .enumerate()
        .filter_map(|(i, r)| r.pool_up_time.map(|t| (t, i)))
        .min()
        .map(|(_, i)| i);

    match winner {
        Some(w) => {
            let mut extra = candidates;
            let lead = extra.remove(w);
            (Some(lead), extra)
        }
        None => (None, Vec::new()),
    }
}

fn warn_duplicates(pool: &PoolView) {
    let mut seen = HashSet::new();
    for rec in pool.active.iter().chain(pool.helpers.iter()) {
        if !seen.insert(rec.name.as_str()) {
            warn!(pool = %pool.pool_id, worker = %rec.name, "worker listed more than once");
        }
    }
}
