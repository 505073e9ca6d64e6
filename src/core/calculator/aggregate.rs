//! Roll worker results up into one summary per pool.

use crate::core::calculator::grouping::PoolView;
use crate::core::calculator::target::Calculator;
use crate::core::settings::EngineSettings;
use crate::models::pool_state::PoolState;
use crate::models::pool_summary::PoolSummary;
use chrono::NaiveDateTime;

pub fn summarize(pool: &PoolView, settings: &EngineSettings, now: NaiveDateTime) -> PoolSummary {
    let calc = Calculator::new(pool, settings);
    let target = calc.target();
    let workers = calc.classify_active(pool);

    let pool_up_time = pool.lead.as_ref().and_then(|l| l.pool_up_time);
    let expected_completion = pool_up_time.and_then(|t| settings.expected_completion(t));
    let state = PoolState::from_statuses(workers.iter().map(|w| w.status));

    let past_expected_completion = match expected_completion {
        Some(eta) => now > eta && state != PoolState::Completed,
        None => false,
    };

    PoolSummary {
        pool_id: pool.pool_id.clone(),
        pool_name: pool.pool_name.clone(),
        pool_tab: pool.pool_tab.clone(),
        lead_name: pool.lead.as_ref().map(|l| l.name.clone()),
        pool_up_time,
        total_count: target.total_pool_load,
        manpower: target.manpower,
        target_load: target.target_load,
        expected_completion,
        state,
        past_expected_completion,
        workers,
        helpers: pool.helpers.iter().map(|h| h.name.clone()).collect(),
        extra_leads: pool.extra_leads.iter().map(|l| l.name.clone()).collect(),
    }
}
