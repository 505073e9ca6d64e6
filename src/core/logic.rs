use crate::core::calculator::{aggregate, grouping, ranking};
use crate::core::normalizer::{Normalizer, RawRow};
use crate::core::settings::EngineSettings;
use crate::models::dashboard::Dashboard;
use crate::models::record::WorkRecord;
use chrono::NaiveDateTime;
use tracing::debug;

pub struct Core;

impl Core {
    /// One evaluation cycle over a snapshot of raw rows.
    ///
    /// Pure: the same rows, settings and `now` always give the same dashboard.
    pub fn evaluate(rows: &[RawRow], settings: &EngineSettings, now: NaiveDateTime) -> Dashboard {
        let report = Normalizer::new(now.date()).normalize(rows);
        let mut dashboard = Self::evaluate_records(&report.records, settings, now);
        dashboard.dropped_rows = report.dropped;
        dashboard
    }

    /// Same as `evaluate`, for records that are already normalized.
    pub fn evaluate_records(
        records: &[WorkRecord],
        settings: &EngineSettings,
        now: NaiveDateTime,
    ) -> Dashboard {
        let pools = grouping::group_by_pool(records);
        let summaries: Vec<_> = pools
            .iter()
            .map(|p| aggregate::summarize(p, settings, now))
            .collect();
        let ranking = ranking::rank_pools(&summaries, settings.previous_window);

        debug!(
            records = records.len(),
            pools = summaries.len(),
            current = ranking.current.as_deref().unwrap_or("-"),
            "evaluation cycle done"
        );

        Dashboard {
            evaluated_at: now,
            dropped_rows: 0,
            ranking,
            pools: summaries,
        }
    }
}
