use crate::error::SnapshotError;
use crate::record::Record;
use crate::stats::CacheStats;
use async_trait::async_trait;
use tracing::{error, info, warn};

/// Persisted state of a store.
///
/// Cache contents are never part of a snapshot; only the records and the
/// cache counters are.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Snapshot {
    pub records: Vec<Record>,
    pub stats: CacheStats,
}

impl Snapshot {
    pub fn new(records: Vec<Record>, stats: CacheStats) -> Self {
        Self {
            records,
            stats: stats.counters(),
        }
    }
}

/// A serialize/deserialize pair for [`Snapshot`]s.
#[async_trait]
pub trait SnapshotStore: Send + Sync + 'static {
    async fn save(&self, snapshot: &Snapshot) -> Result<(), SnapshotError>;

    async fn load(&self) -> Result<Snapshot, SnapshotError>;

    /// Moves an unreadable snapshot out of the way so that later saves
    /// cannot overwrite it. Returns where the old contents now live.
    async fn quarantine(&self) -> Result<String, SnapshotError>;

    /// Loads a snapshot for startup.
    ///
    /// A missing snapshot yields an empty one. Any other load failure also
    /// yields an empty snapshot, but only after the bad file has been moved
    /// aside with [`SnapshotStore::quarantine`]. If that move fails the error
    /// is returned, and the caller must not save through this store.
    async fn load_or_recover(&self) -> Result<Snapshot, SnapshotError> {
        let err = match self.load().await {
            Ok(snapshot) => return Ok(snapshot),
            Err(SnapshotError::NotFound(path)) => {
                info!(path = %path, "no snapshot found, starting empty");
                return Ok(Snapshot::default());
            }
            Err(e) => e,
        };

        warn!(error = %err, "failed to load snapshot, starting empty");
        match self.quarantine().await {
            Ok(moved_to) => {
                warn!(moved_to = %moved_to, "unreadable snapshot moved aside");
                Ok(Snapshot::default())
            }
            Err(e) => {
                error!(error = %e, "failed to move unreadable snapshot aside");
                Err(e)
            }
        }
    }

    /// Saves a snapshot, logging instead of failing.
    ///
    /// Returns `true` if the snapshot was written.
    async fn save_or_log(&self, snapshot: &Snapshot) -> bool {
        match self.save(snapshot).await {
            Ok(()) => true,
            Err(e) => {
                warn!(error = %e, "failed to save snapshot");
                false
            }
        }
    }
}
