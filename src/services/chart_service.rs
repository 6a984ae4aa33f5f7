use crate::models::{ChartSpec, Layout, PriceRecord, SessionSummary, Trace};

/// Build the figure for a non-empty filtered view: one lines+markers trace
/// per market session, traces in first-appearance order, points already in
/// timestamp order because the prepared rows are sorted.
pub fn build_chart(rows: &[PriceRecord]) -> ChartSpec {
    let mut traces: Vec<Trace> = Vec::new();

    for row in rows {
        let idx = match traces.iter().position(|t| t.name == row.session) {
            Some(idx) => idx,
            None => {
                traces.push(Trace::line_with_markers(row.session.clone()));
                traces.len() - 1
            }
        };
        traces[idx].x.push(row.timestamp);
        traces[idx].y.push(row.price_eur);
    }

    ChartSpec {
        data: traces,
        layout: Layout::default(),
    }
}

/// Per-session aggregates for the shell's stat tiles.
pub fn summarize_sessions(rows: &[PriceRecord]) -> Vec<SessionSummary> {
    struct Accum {
        session: String,
        rows: usize,
        min: f64,
        max: f64,
        sum: f64,
    }

    let mut accums: Vec<Accum> = Vec::new();
    for row in rows {
        match accums.iter_mut().find(|a| a.session == row.session) {
            Some(accum) => {
                accum.rows += 1;
                accum.min = accum.min.min(row.price_eur);
                accum.max = accum.max.max(row.price_eur);
                accum.sum += row.price_eur;
            }
            None => accums.push(Accum {
                session: row.session.clone(),
                rows: 1,
                min: row.price_eur,
                max: row.price_eur,
                sum: row.price_eur,
            }),
        }
    }

    accums
        .into_iter()
        .map(|a| SessionSummary {
            session: a.session,
            rows: a.rows,
            min_price_eur: a.min,
            mean_price_eur: a.sum / a.rows as f64,
            max_price_eur: a.max,
        })
        .collect()
}
