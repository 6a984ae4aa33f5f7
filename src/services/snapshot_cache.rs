use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::SystemTime;

use dashmap::DashMap;
use tracing::{debug, info};

use crate::errors::AppError;
use crate::models::PreparedDataset;
use crate::services::snapshot_service;

/// Identity of the snapshot content at load time. A rewritten file changes
/// its modification time (and usually its length), which is what invalidates
/// the cached dataset; there is no time-based expiry.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Fingerprint {
    modified: SystemTime,
    len: u64,
}

impl Fingerprint {
    fn of(path: &Path) -> Result<Self, AppError> {
        let meta = fs::metadata(path)?;
        Ok(Self {
            modified: meta.modified()?,
            len: meta.len(),
        })
    }
}

struct CacheEntry {
    fingerprint: Fingerprint,
    dataset: Arc<PreparedDataset>,
}

/// Memoizes prepared snapshots keyed by source path. Cloneable handle shared
/// through `AppState`; the map itself is thread-safe, though the hosting
/// shell runs at most one pipeline per interaction anyway.
#[derive(Clone)]
pub struct SnapshotCache {
    entries: Arc<DashMap<PathBuf, CacheEntry>>,
}

impl SnapshotCache {
    pub fn new() -> Self {
        Self {
            entries: Arc::new(DashMap::new()),
        }
    }

    /// Return the prepared dataset for `path`, reading from disk only when
    /// the path is unseen or its content fingerprint changed. A hit returns
    /// the same prepared content a fresh load would.
    pub fn get_or_load(&self, path: &Path) -> Result<Arc<PreparedDataset>, AppError> {
        let fingerprint = Fingerprint::of(path)?;

        if let Some(entry) = self.entries.get(path) {
            if entry.fingerprint == fingerprint {
                debug!("Snapshot cache hit for {}", path.display());
                return Ok(entry.dataset.clone());
            }
            debug!("Snapshot changed on disk, reloading {}", path.display());
        }

        info!("Loading snapshot from {}", path.display());
        let dataset = Arc::new(snapshot_service::load_snapshot(path)?);
        self.entries.insert(
            path.to_path_buf(),
            CacheEntry {
                fingerprint,
                dataset: dataset.clone(),
            },
        );
        Ok(dataset)
    }

    pub fn invalidate(&self, path: &Path) {
        self.entries.remove(path);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for SnapshotCache {
    fn default() -> Self {
        Self::new()
    }
}
