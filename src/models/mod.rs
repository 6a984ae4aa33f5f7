mod chart;
mod dataset;
mod price_record;
mod range;
mod summary;

pub use chart::{
    ChartResponse, ChartSpec, Layout, Trace, CHART_HEIGHT, CHART_TITLE, LEGEND_LABEL,
    X_AXIS_LABEL, Y_AXIS_LABEL,
};
pub use dataset::{DateBounds, PreparedDataset};
pub use price_record::{derive_timestamp, PriceRecord};
pub use range::{RangeSelection, INVALID_RANGE_MESSAGE};
pub use summary::{SessionSummary, SummaryResponse};
