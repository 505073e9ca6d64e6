use chrono::{Duration, NaiveDateTime};
use serde::Serialize;

/// Load units a worker is expected to process per minute.
pub const DEFAULT_RATE_PER_MINUTE: f64 = 2.5;
/// Slack added to the expected duration before a worker counts as late.
pub const DEFAULT_GRACE_MINUTES: f64 = 5.0;
/// Distance from the fair share, in load units, still counted as complete.
pub const DEFAULT_TOLERANCE: f64 = 3.0;
/// Pool processing window: pool-up + 1h05m.
pub const DEFAULT_COMPLETION_OFFSET_MINUTES: i64 = 65;
pub const DEFAULT_PREVIOUS_WINDOW: usize = 9;
/// Longest completion window accepted by `config --check`: one week.
pub const MAX_COMPLETION_OFFSET_MINUTES: i64 = 7 * 24 * 60;

/// Tunables of the status engine.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EngineSettings {
    pub rate_per_minute: f64,
    pub grace_minutes: f64,
    pub tolerance: f64,
    pub completion_offset_minutes: i64,
    pub previous_window: usize,
}

impl Default for EngineSettings {
    fn default() -> Self {
        Self {
            rate_per_minute: DEFAULT_RATE_PER_MINUTE,
            grace_minutes: DEFAULT_GRACE_MINUTES,
            tolerance: DEFAULT_TOLERANCE,
            completion_offset_minutes: DEFAULT_COMPLETION_OFFSET_MINUTES,
            previous_window: DEFAULT_PREVIOUS_WINDOW,
        }
    }
}

impl EngineSettings {
    /// `None` when the offset does not fit a `Duration`.
    pub fn completion_offset(&self) -> Option<Duration> {
        Duration::try_minutes(self.completion_offset_minutes)
    }

    /// Pool-up plus the completion offset; `None` on overflow.
    pub fn expected_completion(&self, pool_up: NaiveDateTime) -> Option<NaiveDateTime> {
        self.completion_offset()
            .and_then(|offset| pool_up.checked_add_signed(offset))
    }

    /// Expected minutes for a given load: `load / rate + grace`.
    ///
    /// A non-positive rate never makes anyone late.
    pub fn expected_minutes(&self, load: f64) -> Option<f64> {
        if self.rate_per_minute > 0.0 && self.rate_per_minute.is_finite() {
            Some(load / self.rate_per_minute + self.grace_minutes)
        } else {
            None
        }
    }
}
