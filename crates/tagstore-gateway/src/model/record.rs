use serde::{Deserialize, Serialize};
use tagstore_core::{CacheStats, Record, RecordId};

#[derive(Debug, Default, Deserialize)]
pub struct ApiParams {
    pub action: Option<String>,
    pub q: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct CreateRecordRequest {
    pub id: RecordId,
    pub url: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl CreateRecordRequest {
    pub fn into_record(self) -> Record {
        Record {
            id: self.id,
            url: self.url,
            tags: self.tags,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct RecordResponse {
    pub id: RecordId,
    pub url: String,
    pub tags: Vec<String>,
}

impl From<Record> for RecordResponse {
    fn from(record: Record) -> Self {
        Self {
            id: record.id,
            url: record.url,
            tags: record.tags,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct StatsResponse {
    pub records: usize,
    #[serde(flatten)]
    pub cache: CacheStats,
}
