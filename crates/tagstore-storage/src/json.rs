use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use jiff::Timestamp;
use serde::{Deserialize, Serialize};
use tagstore_core::{CacheStats, Record, Snapshot, SnapshotError, SnapshotStore};
use tokio::fs;
use tracing::{debug, info};

const FORMAT_VERSION: u32 = 1;

#[derive(Serialize)]
struct SnapshotFileRef<'a> {
    version: u32,
    saved_at: Timestamp,
    records: &'a [Record],
    stats: &'a CacheStats,
}

#[derive(Deserialize)]
struct SnapshotFile {
    records: Vec<Record>,
    #[serde(default)]
    stats: CacheStats,
}

#[derive(Deserialize)]
struct VersionHeader {
    version: u32,
}

/// Persists snapshots as a single JSON document on disk.
///
/// Writes go to a sibling temp file first and are renamed into place, so a
/// crash mid-save never leaves a truncated snapshot behind.
#[derive(Debug, Clone)]
pub struct JsonFileSnapshot {
    path: PathBuf,
}

impl JsonFileSnapshot {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn tmp_path(&self) -> PathBuf {
        let mut tmp = self.path.clone().into_os_string();
        tmp.push(".tmp");
        PathBuf::from(tmp)
    }

    /// `<path>.corrupt-<unix seconds>`, so repeated failures never replace an
    /// earlier quarantined file.
    fn corrupt_path(&self, at: Timestamp) -> PathBuf {
        let mut corrupt = self.path.clone().into_os_string();
        corrupt.push(format!(".corrupt-{}", at.as_second()));
        PathBuf::from(corrupt)
    }

    fn io_error(&self, e: std::io::Error) -> SnapshotError {
        SnapshotError::Io(format!("{}: {}", self.path.display(), e))
    }

    fn decode(&self, bytes: &[u8]) -> Result<Snapshot, SnapshotError> {
        let header: VersionHeader = serde_json::from_slice(bytes)
            .map_err(|e| SnapshotError::Decode(format!("{}: {}", self.path.display(), e)))?;
        if header.version != FORMAT_VERSION {
            return Err(SnapshotError::UnsupportedVersion(header.version));
        }

        let file: SnapshotFile = serde_json::from_slice(bytes)
            .map_err(|e| SnapshotError::Decode(format!("{}: {}", self.path.display(), e)))?;
        Ok(Snapshot::new(file.records, file.stats))
    }
}

#[async_trait]
impl SnapshotStore for JsonFileSnapshot {
    async fn save(&self, snapshot: &Snapshot) -> Result<(), SnapshotError> {
        let stats = snapshot.stats.counters();
        let body = SnapshotFileRef {
            version: FORMAT_VERSION,
            saved_at: Timestamp::now(),
            records: &snapshot.records,
            stats: &stats,
        };
        let bytes =
            serde_json::to_vec_pretty(&body).map_err(|e| SnapshotError::Encode(e.to_string()))?;

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)
                    .await
                    .map_err(|e| self.io_error(e))?;
            }
        }

        let tmp = self.tmp_path();
        fs::write(&tmp, &bytes).await.map_err(|e| self.io_error(e))?;
        fs::rename(&tmp, &self.path)
            .await
            .map_err(|e| self.io_error(e))?;

        info!(
            path = %self.path.display(),
            records = snapshot.records.len(),
            bytes = bytes.len(),
            "snapshot written"
        );
        Ok(())
    }

    async fn load(&self) -> Result<Snapshot, SnapshotError> {
        let bytes = match fs::read(&self.path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(SnapshotError::NotFound(self.path.display().to_string()));
            }
            Err(e) => return Err(self.io_error(e)),
        };

        let snapshot = self.decode(&bytes)?;
        debug!(
            path = %self.path.display(),
            records = snapshot.records.len(),
            "snapshot loaded"
        );
        Ok(snapshot)
    }

    async fn quarantine(&self) -> Result<String, SnapshotError> {
        let corrupt = self.corrupt_path(Timestamp::now());
        fs::rename(&self.path, &corrupt)
            .await
            .map_err(|e| self.io_error(e))?;
        debug!(
            path = %self.path.display(),
            moved_to = %corrupt.display(),
            "snapshot renamed"
        );
        Ok(corrupt.display().to_string())
    }
}
