//! Fair-share target and per-worker classification.

use crate::core::calculator::grouping::PoolView;
use crate::core::settings::EngineSettings;
use crate::models::record::WorkRecord;
use crate::models::worker_result::WorkerResult;
use crate::models::worker_status::WorkerStatus;

/// Fair share for one pool, fixed for the whole cycle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Target {
    pub total_pool_load: f64,
    pub manpower: usize,
    pub target_load: f64,
}

impl Target {
    pub fn for_pool(pool: &PoolView) -> Self {
        let total_pool_load = pool.total_pool_load();
        let manpower = pool.manpower();
        // 1 keeps the formula total; with no active workers nobody is measured against it
        let target_load = if manpower > 0 {
            total_pool_load / manpower as f64
        } else {
            1.0
        };

        Self {
            total_pool_load,
            manpower,
            target_load,
        }
    }

    /// `min(100, round(load / target * 100))`, 0 when the target is not positive.
    pub fn load_percent(&self, load: f64) -> u8 {
        if self.target_load > 0.0 {
            let pct = (load / self.target_load * 100.0).round();
            pct.clamp(0.0, 100.0) as u8
        } else {
            0
        }
    }
}

/// Overdue verdict for a worker whose start and end are known.
#[derive(Debug, Clone, PartialEq)]
pub struct Lateness {
    pub actual_seconds: i64,
    pub expected_minutes: f64,
}

impl Lateness {
    pub fn is_late(&self) -> bool {
        self.actual_seconds as f64 > self.expected_minutes * 60.0
    }

    pub fn reason(&self) -> String {
        format!(
            "Late: took {}m vs expected {}m",
            self.actual_seconds / 60,
            self.expected_minutes.floor() as i64
        )
    }
}

pub struct Calculator<'a> {
    settings: &'a EngineSettings,
    target: Target,
}

impl<'a> Calculator<'a> {
    pub fn new(pool: &PoolView, settings: &'a EngineSettings) -> Self {
        Self {
            settings,
            target: Target::for_pool(pool),
        }
    }

    pub fn target(&self) -> Target {
        self.target
    }

    /// Status of any pool member; first matching rule wins.
    pub fn status_of(&self, rec: &WorkRecord) -> WorkerStatus {
        if rec.is_lead() {
            return WorkerStatus::Lead;
        }
        if rec.load == 0.0 {
            return WorkerStatus::Helper;
        }
        if (rec.load - self.target.target_load).abs() <= self.settings.tolerance {
            WorkerStatus::Complete
        } else {
            WorkerStatus::InProgress
        }
    }

    /// `None` when the duration is unknown or no rate is configured.
    pub fn lateness(&self, rec: &WorkRecord) -> Option<Lateness> {
        let actual_seconds = rec.duration_seconds()?;
        let expected_minutes = self.settings.expected_minutes(rec.load)?;
        Some(Lateness {
            actual_seconds,
            expected_minutes,
        })
    }

    pub fn classify(&self, rec: &WorkRecord) -> WorkerResult {
        let status = self.status_of(rec);
        let load_percent = if status.is_measured() {
            self.target.load_percent(rec.load)
        } else {
            0
        };

        // Lead and helper rows carry no share, so they are never late
        let late = if status.is_measured() {
            self.lateness(rec).filter(Lateness::is_late)
        } else {
            None
        };

        WorkerResult {
            name: rec.name.clone(),
            load: rec.load,
            status,
            load_percent,
            duration_seconds: rec.duration_seconds(),
            overdue: late.is_some(),
            late_reason: late.map(|l| l.reason()),
        }
    }

    /// Results for the active workers only; empty when manpower is 0.
    pub fn classify_active(&self, pool: &PoolView) -> Vec<WorkerResult> {
        pool.active.iter().map(|r| self.classify(r)).collect()
    }
}
