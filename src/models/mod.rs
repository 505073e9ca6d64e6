pub mod dashboard;
pub mod pool_state;
pub mod pool_summary;
pub mod record;
pub mod worker_result;
pub mod worker_status;
