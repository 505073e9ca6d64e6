use chrono::NaiveDateTime;
use serde::Serialize;

/// One normalized row of the work sheet.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WorkRecord {
    pub name: String,                       // ⇔ "Name"
    pub pool_name: String,                  // ⇔ "Pool Name"
    pub pool_tab: String,                   // ⇔ "Tab"
    pub load: f64,                          // ⇔ "Load" (>= 0, 0 when unparseable)
    pub start_time: Option<NaiveDateTime>,  // ⇔ "Start Time"
    pub end_time: Option<NaiveDateTime>,    // ⇔ "End Time"
    pub pool_up_time: Option<NaiveDateTime>, // ⇔ "Pool Up" (present on lead rows)
}

impl WorkRecord {
    pub fn new(name: &str, pool_name: &str, pool_tab: &str, load: f64) -> Self {
        Self {
            name: name.to_string(),
            pool_name: pool_name.to_string(),
            pool_tab: pool_tab.to_string(),
            load: sanitize_load(load),
            start_time: None,
            end_time: None,
            pool_up_time: None,
        }
    }

    pub fn with_times(mut self, start: Option<NaiveDateTime>, end: Option<NaiveDateTime>) -> Self {
        self.start_time = start;
        self.end_time = end;
        self
    }

    pub fn with_pool_up(mut self, pool_up: Option<NaiveDateTime>) -> Self {
        self.pool_up_time = pool_up;
        self
    }

    /// Composite pool key: "<pool name> - <tab>".
    pub fn pool_id(&self) -> String {
        pool_id(&self.pool_name, &self.pool_tab)
    }

    pub fn is_lead(&self) -> bool {
        self.pool_up_time.is_some()
    }

    /// Non-lead row that took part in the load distribution.
    pub fn is_active(&self) -> bool {
        !self.is_lead() && self.load > 0.0
    }

    /// Time spent between start and end.
    ///
    /// `None` unless both ends are known and the end does not precede the start.
    pub fn duration_seconds(&self) -> Option<i64> {
        match (self.start_time, self.end_time) {
            (Some(start), Some(end)) if end >= start => Some((end - start).num_seconds()),
            _ => None,
        }
    }
}

pub fn pool_id(pool_name: &str, pool_tab: &str) -> String {
    format!("{} - {}", pool_name, pool_tab)
}

/// Clamp a load value to a finite, non-negative number.
pub fn sanitize_load(load: f64) -> f64 {
    if load.is_finite() && load > 0.0 {
        load
    } else {
        0.0
    }
}
