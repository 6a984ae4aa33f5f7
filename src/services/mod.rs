pub mod chart_service;
pub mod snapshot_cache;
pub mod snapshot_service;
