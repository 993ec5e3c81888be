mod health;
mod record;

pub use health::HealthResponse;
pub use record::{ApiParams, CreateRecordRequest, RecordResponse, StatsResponse};
