use crate::record::RecordId;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("record id already exists: {0}")]
    DuplicateId(RecordId),
}

/// Errors raised by a [`SnapshotStore`](crate::SnapshotStore).
#[derive(Debug, Clone, Error)]
pub enum SnapshotError {
    #[error("snapshot not found: {0}")]
    NotFound(String),
    #[error("snapshot io failed: {0}")]
    Io(String),
    #[error("snapshot could not be decoded: {0}")]
    Decode(String),
    #[error("snapshot could not be encoded: {0}")]
    Encode(String),
    #[error("unsupported snapshot version: {0}")]
    UnsupportedVersion(u32),
}
