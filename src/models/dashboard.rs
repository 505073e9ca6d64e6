use super::pool_summary::PoolSummary;
use chrono::NaiveDateTime;
use serde::Serialize;

/// Ordered pool ids produced by ranking.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Ranking {
    /// Every dated pool, most recent pool-up first.
    pub ranked: Vec<String>,
    pub current: Option<String>,
    pub previous: Vec<String>,
}

/// Output of one evaluation cycle.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Dashboard {
    pub evaluated_at: NaiveDateTime,
    pub dropped_rows: usize,
    pub ranking: Ranking,
    /// Summaries in first-seen input order, dated or not.
    pub pools: Vec<PoolSummary>,
}

impl Dashboard {
    pub fn pool(&self, pool_id: &str) -> Option<&PoolSummary> {
        self.pools.iter().find(|p| p.pool_id == pool_id)
    }

    pub fn current(&self) -> Option<&PoolSummary> {
        self.ranking.current.as_deref().and_then(|id| self.pool(id))
    }

    pub fn previous(&self) -> Vec<&PoolSummary> {
        self.ranking
            .previous
            .iter()
            .filter_map(|id| self.pool(id))
            .collect()
    }

    /// Summaries in ranked order.
    pub fn ranked(&self) -> Vec<&PoolSummary> {
        self.ranking
            .ranked
            .iter()
            .filter_map(|id| self.pool(id))
            .collect()
    }

    /// Pools without a lead row; they cannot be dated and are never ranked.
    pub fn undated(&self) -> Vec<&PoolSummary> {
        self.pools
            .iter()
            .filter(|p| p.pool_up_time.is_none())
            .collect()
    }
}
