//! Order pools by pool-up time and split current from previous.

use crate::models::dashboard::Ranking;
use crate::models::pool_summary::PoolSummary;

/// Most recent pool-up first. Undated pools are left out; ties keep input order.
pub fn rank_pools(pools: &[PoolSummary], previous_window: usize) -> Ranking {
    let mut dated: Vec<&PoolSummary> = pools
        .iter()
        .filter(|p| p.pool_up_time.is_some())
        .collect();

    // sort_by is stable
    dated.sort_by(|a, b| b.pool_up_time.cmp(&a.pool_up_time));

    let ranked: Vec<String> = dated.iter().map(|p| p.pool_id.clone()).collect();
    let current = ranked.first().cloned();
    let previous = ranked.iter().skip(1).take(previous_window).cloned().collect();

    Ranking {
        ranked,
        current,
        previous,
    }
}
