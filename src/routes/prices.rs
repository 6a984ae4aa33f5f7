use axum::extract::{Query, State};
use axum::routing::get;
use axum::{Json, Router};
use chrono::NaiveDate;
use serde::Deserialize;
use tracing::{error, info};

use crate::errors::AppError;
use crate::models::{
    ChartResponse, DateBounds, PreparedDataset, PriceRecord, RangeSelection, SummaryResponse,
};
use crate::services::chart_service;
use crate::state::AppState;

pub const NO_DATA_MESSAGE: &str = "No hay datos disponibles para el rango seleccionado.";

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(get_filtered_prices))
        .route("/bounds", get(get_bounds))
        .route("/summary", get(get_session_summary))
        .route("/chart", get(get_chart))
}

/// The date picker reports zero, one, or two endpoints depending on
/// interaction state; only a complete pair filters anything.
#[derive(Debug, Deserialize)]
pub struct RangeQuery {
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
}

impl RangeQuery {
    fn selection(&self) -> RangeSelection {
        RangeSelection::from_endpoints(self.start, self.end)
    }
}

pub async fn get_bounds(State(state): State<AppState>) -> Result<Json<DateBounds>, AppError> {
    info!("GET /api/prices/bounds - Getting snapshot date bounds");
    let dataset = prepared(&state)?;
    let bounds = dataset
        .bounds()
        .ok_or_else(|| AppError::Load("snapshot contains no rows".to_string()))?;
    Ok(Json(bounds))
}

pub async fn get_filtered_prices(
    Query(params): Query<RangeQuery>,
    State(state): State<AppState>,
) -> Result<Json<Vec<PriceRecord>>, AppError> {
    info!(
        "GET /api/prices - Filtering {:?}..{:?}",
        params.start, params.end
    );
    let dataset = prepared(&state)?;
    let (start, end) = params.selection().require_range()?;
    Ok(Json(dataset.filter_by_date(start, end)))
}

pub async fn get_chart(
    Query(params): Query<RangeQuery>,
    State(state): State<AppState>,
) -> Result<Json<ChartResponse>, AppError> {
    info!(
        "GET /api/prices/chart - Building chart for {:?}..{:?}",
        params.start, params.end
    );
    let dataset = prepared(&state)?;
    let (start, end) = params.selection().require_range()?;

    let rows = dataset.filter_by_date(start, end);
    if rows.is_empty() {
        info!("No rows in [{}, {}], skipping chart", start, end);
        return Ok(Json(ChartResponse::NoData {
            message: NO_DATA_MESSAGE.to_string(),
        }));
    }

    Ok(Json(ChartResponse::Ok {
        figure: chart_service::build_chart(&rows),
    }))
}

pub async fn get_session_summary(
    Query(params): Query<RangeQuery>,
    State(state): State<AppState>,
) -> Result<Json<SummaryResponse>, AppError> {
    info!(
        "GET /api/prices/summary - Summarizing {:?}..{:?}",
        params.start, params.end
    );
    let dataset = prepared(&state)?;
    let (start, end) = params.selection().require_range()?;

    let rows = dataset.filter_by_date(start, end);
    if rows.is_empty() {
        return Ok(Json(SummaryResponse::NoData {
            message: NO_DATA_MESSAGE.to_string(),
        }));
    }

    Ok(Json(SummaryResponse::Ok {
        sessions: chart_service::summarize_sessions(&rows),
    }))
}

fn prepared(state: &AppState) -> Result<std::sync::Arc<PreparedDataset>, AppError> {
    state
        .snapshots
        .get_or_load(&state.settings.snapshot_path)
        .map_err(|e| {
            error!(
                "Failed to load snapshot {}: {}",
                state.settings.snapshot_path.display(),
                e
            );
            e
        })
}
