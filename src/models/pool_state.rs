use super::worker_status::WorkerStatus;
use serde::Serialize;

/// Compact pool-level state used by overviews.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub enum PoolState {
    NotStarted,
    InProgress,
    Completed,
}

impl PoolState {
    /// Fold worker statuses into a pool state.
    ///
    /// The empty case is checked first: an empty set would otherwise count
    /// as "all complete".
    pub fn from_statuses<I>(statuses: I) -> Self
    where
        I: IntoIterator<Item = WorkerStatus>,
    {
        let mut any = false;
        let mut all_complete = true;

        for status in statuses {
            any = true;
            if !status.is_complete() {
                all_complete = false;
            }
        }

        if !any {
            PoolState::NotStarted
        } else if all_complete {
            PoolState::Completed
        } else {
            PoolState::InProgress
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PoolState::NotStarted => "Not Started",
            PoolState::InProgress => "In Progress",
            PoolState::Completed => "Completed",
        }
    }
}

impl std::fmt::Display for PoolState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
