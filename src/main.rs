use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use tokio::net::TcpListener;

use spotida_backend::app;
use spotida_backend::config::Settings;
use spotida_backend::logging::{self, LoggingConfig};
use spotida_backend::services::snapshot_cache::SnapshotCache;
use spotida_backend::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    logging::init_logging(LoggingConfig::from_env())?;

    let settings = Settings::from_env()?;
    let snapshots = SnapshotCache::new();

    // Load the snapshot up front so a missing or malformed file fails the
    // process before the API is served.
    let dataset = snapshots
        .get_or_load(&settings.snapshot_path)
        .with_context(|| {
            format!(
                "failed to load snapshot {}",
                settings.snapshot_path.display()
            )
        })?;
    tracing::info!(
        "📈 Prepared {} price rows from {}",
        dataset.len(),
        settings.snapshot_path.display()
    );

    let port = settings.port;
    let state = AppState {
        settings: Arc::new(settings),
        snapshots,
    };
    let app = app::create_app(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let listener = TcpListener::bind(&addr).await?;
    tracing::info!("🚀 SPOT-IDA prices backend running at http://{}/", addr);
    axum::serve(listener, app).await?;

    Ok(())
}
