use std::sync::Arc;

use crate::config::Settings;
use crate::services::snapshot_cache::SnapshotCache;

#[derive(Clone)]
pub struct AppState {
    pub settings: Arc<Settings>,
    pub snapshots: SnapshotCache,
}
