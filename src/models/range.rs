use chrono::NaiveDate;

use crate::errors::AppError;

pub const INVALID_RANGE_MESSAGE: &str = "Seleccione un rango de fechas válido.";

/// Shape of the date-picker value as the shell reports it. Mid-selection the
/// picker holds a single endpoint; only a complete two-endpoint selection is
/// a filterable range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RangeSelection {
    Empty,
    Single(NaiveDate),
    Range(NaiveDate, NaiveDate),
}

impl RangeSelection {
    pub fn from_endpoints(start: Option<NaiveDate>, end: Option<NaiveDate>) -> Self {
        match (start, end) {
            (None, None) => RangeSelection::Empty,
            (Some(date), None) | (None, Some(date)) => RangeSelection::Single(date),
            (Some(start), Some(end)) => RangeSelection::Range(start, end),
        }
    }

    /// Accept only a complete range; anything else is a recoverable
    /// validation error carrying the user-facing message.
    pub fn require_range(self) -> Result<(NaiveDate, NaiveDate), AppError> {
        match self {
            RangeSelection::Range(start, end) => Ok((start, end)),
            _ => Err(AppError::Validation(INVALID_RANGE_MESSAGE.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, day).unwrap()
    }

    #[test]
    fn both_endpoints_form_a_range() {
        let sel = RangeSelection::from_endpoints(Some(d(1)), Some(d(3)));
        assert_eq!(sel, RangeSelection::Range(d(1), d(3)));
        assert_eq!(sel.require_range().unwrap(), (d(1), d(3)));
    }

    #[test]
    fn missing_endpoint_is_a_validation_error() {
        for sel in [
            RangeSelection::from_endpoints(Some(d(1)), None),
            RangeSelection::from_endpoints(None, Some(d(3))),
            RangeSelection::from_endpoints(None, None),
        ] {
            match sel.require_range() {
                Err(AppError::Validation(msg)) => assert_eq!(msg, INVALID_RANGE_MESSAGE),
                other => panic!("expected validation error, got {:?}", other),
            }
        }
    }
}
