use serde::Serialize;

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub enum WorkerStatus {
    /// Team lead: the row that opened the pool.
    #[serde(rename = "TL")]
    Lead,
    /// Present in the pool but took no share of the load.
    Helper,
    Complete,
    InProgress,
}

impl WorkerStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            WorkerStatus::Lead => "TL",
            WorkerStatus::Helper => "Helper",
            WorkerStatus::Complete => "Complete",
            WorkerStatus::InProgress => "In Progress",
        }
    }

    /// Lead and helper rows are not measured against the fair-share target.
    pub fn is_measured(&self) -> bool {
        matches!(self, WorkerStatus::Complete | WorkerStatus::InProgress)
    }

    pub fn is_complete(&self) -> bool {
        matches!(self, WorkerStatus::Complete)
    }
}

impl std::fmt::Display for WorkerStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
