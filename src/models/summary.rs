use serde::Serialize;

/// Per-session aggregates over a filtered view, for the shell's stat tiles.
#[derive(Debug, Clone, Serialize)]
pub struct SessionSummary {
    pub session: String,
    pub rows: usize,
    pub min_price_eur: f64,
    pub mean_price_eur: f64,
    pub max_price_eur: f64,
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum SummaryResponse {
    Ok { sessions: Vec<SessionSummary> },
    NoData { message: String },
}
