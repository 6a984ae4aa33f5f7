use std::path::Path;

use chrono::NaiveDate;
use polars::prelude::*;

use crate::errors::AppError;
use crate::models::{PreparedDataset, PriceRecord};

/// Load the SPOT-IDA Parquet snapshot and prepare it for presentation:
/// parse the `date` column to a calendar date, cast `period` and `price_eur`
/// to their working types, and derive the per-row plot timestamp.
///
/// Any IO/Polars failure, missing column, null cell, or unparsable date
/// aborts the whole load; there is no partial-load path.
pub fn load_snapshot<P: AsRef<Path>>(path: P) -> Result<PreparedDataset, AppError> {
    let file = std::fs::File::open(path.as_ref())?;
    let df = ParquetReader::new(file).finish()?;

    let dates = date_column(&df, "date")?;
    let periods = integer_column(&df, "period")?;
    let prices = float_column(&df, "price_eur")?;
    let sessions = string_column(&df, "session")?;

    // Column lengths are equal by DataFrame construction.
    let mut records = Vec::with_capacity(dates.len());
    for i in 0..dates.len() {
        records.push(PriceRecord::new(
            dates[i],
            periods[i],
            prices[i],
            sessions[i].clone(),
        ));
    }

    if records.is_empty() {
        return Err(AppError::Load("snapshot contains no rows".to_string()));
    }

    Ok(PreparedDataset::from_records(records))
}

fn reject_nulls(column: &Column) -> Result<(), AppError> {
    if column.null_count() > 0 {
        return Err(AppError::Load(format!(
            "column '{}' contains null values",
            column.name()
        )));
    }
    Ok(())
}

/// The snapshot may store the trading day as a native date, a datetime, or a
/// plain string; all three are normalized to `NaiveDate` without any
/// timezone conversion.
fn date_column(df: &DataFrame, name: &str) -> Result<Vec<NaiveDate>, AppError> {
    let column = df.column(name)?;
    reject_nulls(column)?;

    match column.dtype() {
        DataType::Date => Ok(column.date()?.as_date_iter().flatten().collect()),
        DataType::Datetime(_, _) => Ok(column
            .datetime()?
            .as_datetime_iter()
            .flatten()
            .map(|dt| dt.date())
            .collect()),
        DataType::String => column
            .str()?
            .into_no_null_iter()
            .map(|raw| parse_date(raw))
            .collect(),
        other => Err(AppError::Load(format!(
            "column '{}' has unsupported dtype {}",
            name, other
        ))),
    }
}

fn parse_date(raw: &str) -> Result<NaiveDate, AppError> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .or_else(|_| {
            chrono::NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S").map(|dt| dt.date())
        })
        .map_err(|e| AppError::Load(format!("unparsable date '{}': {}", raw, e)))
}

fn integer_column(df: &DataFrame, name: &str) -> Result<Vec<i64>, AppError> {
    let column = df.column(name)?;
    reject_nulls(column)?;
    let casted = column.cast(&DataType::Int64)?;
    Ok(casted.i64()?.into_no_null_iter().collect())
}

fn float_column(df: &DataFrame, name: &str) -> Result<Vec<f64>, AppError> {
    let column = df.column(name)?;
    reject_nulls(column)?;
    let casted = column.cast(&DataType::Float64)?;
    Ok(casted.f64()?.into_no_null_iter().collect())
}

fn string_column(df: &DataFrame, name: &str) -> Result<Vec<String>, AppError> {
    let column = df.column(name)?;
    reject_nulls(column)?;
    let casted = column.cast(&DataType::String)?;
    Ok(casted
        .str()?
        .into_no_null_iter()
        .map(|s| s.to_string())
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use std::path::PathBuf;

    fn temp_parquet(name: &str, df: &mut DataFrame) -> PathBuf {
        let path = std::env::temp_dir().join(format!(
            "spotida_snapshot_{}_{}.parquet",
            std::process::id(),
            name
        ));
        let file = File::create(&path).unwrap();
        ParquetWriter::new(file).finish(df).unwrap();
        path
    }

    fn sample_frame() -> DataFrame {
        df!(
            "date" => ["2024-01-02", "2024-01-01", "2024-01-01"],
            "period" => [1i64, 0, 1],
            "price_eur" => [60.5, 45.0, 50.25],
            "session" => ["DA", "DA", "ID1"],
        )
        .unwrap()
    }

    #[test]
    fn loads_and_sorts_a_valid_snapshot() {
        let path = temp_parquet("valid", &mut sample_frame());
        let dataset = load_snapshot(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(dataset.len(), 3);
        let first = &dataset.records()[0];
        assert_eq!(first.date, NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
        assert_eq!(first.period, 0);
        assert_eq!(first.session, "DA");
        // Rows come out ordered by the derived timestamp
        let timestamps: Vec<_> = dataset.records().iter().map(|r| r.timestamp).collect();
        let mut sorted = timestamps.clone();
        sorted.sort();
        assert_eq!(timestamps, sorted);
    }

    #[test]
    fn missing_file_is_a_load_error() {
        let missing = std::env::temp_dir().join("spotida_snapshot_does_not_exist.parquet");
        match load_snapshot(&missing) {
            Err(AppError::Load(_)) => {}
            other => panic!("expected load error, got {:?}", other),
        }
    }

    #[test]
    fn missing_column_is_a_load_error() {
        let mut df = df!(
            "date" => ["2024-01-01"],
            "period" => [0i64],
            "session" => ["DA"],
        )
        .unwrap();
        let path = temp_parquet("missing_column", &mut df);
        let result = load_snapshot(&path);
        std::fs::remove_file(&path).ok();
        assert!(matches!(result, Err(AppError::Load(_))));
    }

    #[test]
    fn null_cell_is_a_load_error() {
        let mut df = df!(
            "date" => ["2024-01-01", "2024-01-01"],
            "period" => [Some(0i64), None],
            "price_eur" => [45.0, 46.0],
            "session" => ["DA", "DA"],
        )
        .unwrap();
        let path = temp_parquet("null_cell", &mut df);
        let result = load_snapshot(&path);
        std::fs::remove_file(&path).ok();
        assert!(matches!(result, Err(AppError::Load(_))));
    }

    #[test]
    fn unparsable_date_is_a_load_error() {
        let mut df = df!(
            "date" => ["02/01/2024"],
            "period" => [0i64],
            "price_eur" => [45.0],
            "session" => ["DA"],
        )
        .unwrap();
        let path = temp_parquet("bad_date", &mut df);
        let result = load_snapshot(&path);
        std::fs::remove_file(&path).ok();
        assert!(matches!(result, Err(AppError::Load(_))));
    }

    #[test]
    fn empty_snapshot_is_a_load_error() {
        let mut df = df!(
            "date" => Vec::<String>::new(),
            "period" => Vec::<i64>::new(),
            "price_eur" => Vec::<f64>::new(),
            "session" => Vec::<String>::new(),
        )
        .unwrap();
        let path = temp_parquet("empty", &mut df);
        let result = load_snapshot(&path);
        std::fs::remove_file(&path).ok();
        assert!(matches!(result, Err(AppError::Load(_))));
    }
}
