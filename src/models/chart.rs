use chrono::NaiveDateTime;
use serde::Serialize;

// Figure specification handed to the client-side renderer. The field layout
// mirrors a Plotly figure so the shell can pass it straight through.

pub const CHART_TITLE: &str = "SPOT-IDA Spain Prices";
pub const X_AXIS_LABEL: &str = "Fecha y hora";
pub const Y_AXIS_LABEL: &str = "Precio (€)";
pub const LEGEND_LABEL: &str = "Sesión";
pub const CHART_HEIGHT: u32 = 800;

#[derive(Debug, Clone, Serialize)]
pub struct ChartSpec {
    pub data: Vec<Trace>,
    pub layout: Layout,
}

/// One color series per market session, drawn with connecting lines and
/// point markers.
#[derive(Debug, Clone, Serialize)]
pub struct Trace {
    #[serde(rename = "type")]
    pub kind: String,
    pub name: String,
    pub mode: String,
    pub x: Vec<NaiveDateTime>,
    pub y: Vec<f64>,
}

impl Trace {
    pub fn line_with_markers(name: String) -> Self {
        Self {
            kind: "scatter".to_string(),
            name,
            mode: "lines+markers".to_string(),
            x: Vec::new(),
            y: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Layout {
    pub title: String,
    pub autosize: bool,
    pub height: u32,
    pub margin: Margin,
    pub xaxis: Axis,
    pub yaxis: Axis,
    pub legend: Legend,
}

impl Default for Layout {
    fn default() -> Self {
        Self {
            title: CHART_TITLE.to_string(),
            autosize: true,
            height: CHART_HEIGHT,
            margin: Margin {
                l: 0,
                r: 0,
                t: 40,
                b: 40,
            },
            xaxis: Axis {
                title: AxisTitle {
                    text: X_AXIS_LABEL.to_string(),
                },
            },
            yaxis: Axis {
                title: AxisTitle {
                    text: Y_AXIS_LABEL.to_string(),
                },
            },
            legend: Legend {
                title: AxisTitle {
                    text: LEGEND_LABEL.to_string(),
                },
            },
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Margin {
    pub l: u32,
    pub r: u32,
    pub t: u32,
    pub b: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct Axis {
    pub title: AxisTitle,
}

#[derive(Debug, Clone, Serialize)]
pub struct Legend {
    pub title: AxisTitle,
}

#[derive(Debug, Clone, Serialize)]
pub struct AxisTitle {
    pub text: String,
}

/// Body of the chart endpoint: either a figure to render, or the
/// informational no-data condition (an HTTP 200, not an error).
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ChartResponse {
    Ok { figure: ChartSpec },
    NoData { message: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_defaults_match_the_dashboard() {
        let layout = Layout::default();
        assert!(layout.autosize);
        assert_eq!(layout.height, 800);
        assert_eq!(
            (layout.margin.l, layout.margin.r, layout.margin.t, layout.margin.b),
            (0, 0, 40, 40)
        );
        assert_eq!(layout.yaxis.title.text, "Precio (€)");
    }

    #[test]
    fn no_data_response_serializes_with_status_tag() {
        let body = ChartResponse::NoData {
            message: "sin datos".to_string(),
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["status"], "no_data");
        assert_eq!(json["message"], "sin datos");
    }

    #[test]
    fn trace_serializes_plotly_field_names() {
        let trace = Trace::line_with_markers("DA".to_string());
        let json = serde_json::to_value(&trace).unwrap();
        assert_eq!(json["type"], "scatter");
        assert_eq!(json["mode"], "lines+markers");
        assert_eq!(json["name"], "DA");
    }
}
