use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

// One prepared row of the SPOT-IDA snapshot. `timestamp` is derived from
// `date` plus `period` hours and is only used to order points on the chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceRecord {
    pub date: NaiveDate,
    pub period: i64,
    pub price_eur: f64,
    pub session: String,
    pub timestamp: NaiveDateTime,
}

impl PriceRecord {
    pub fn new(date: NaiveDate, period: i64, price_eur: f64, session: String) -> Self {
        Self {
            date,
            period,
            price_eur,
            session,
            timestamp: derive_timestamp(date, period),
        }
    }
}

/// Combine the trading day and its period index into a plot timestamp.
/// Periods are hour offsets; values past 23 roll into the following day.
/// All values stay timezone-naive, exactly as stored in the snapshot.
pub fn derive_timestamp(date: NaiveDate, period: i64) -> NaiveDateTime {
    date.and_time(NaiveTime::MIN) + Duration::hours(period)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn timestamp_is_date_plus_period_hours() {
        let ts = derive_timestamp(d(2024, 1, 2), 5);
        assert_eq!(ts, d(2024, 1, 2).and_hms_opt(5, 0, 0).unwrap());
    }

    #[test]
    fn period_zero_is_midnight() {
        let ts = derive_timestamp(d(2024, 1, 2), 0);
        assert_eq!(ts, d(2024, 1, 2).and_hms_opt(0, 0, 0).unwrap());
    }

    #[test]
    fn periods_past_23_roll_into_next_day() {
        let ts = derive_timestamp(d(2024, 1, 2), 25);
        assert_eq!(ts, d(2024, 1, 3).and_hms_opt(1, 0, 0).unwrap());
    }
}
