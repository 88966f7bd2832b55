//! Data loading, cleaning and validation using Polars

use std::collections::HashSet;
use std::ops::RangeInclusive;
use std::path::Path;

use chrono::NaiveDate;
use polars::io::csv::read::CsvReadOptions;
use polars::prelude::*;
use tracing::debug;

use crate::error::AnalysisError;

/// Valid domain for each raw field; records outside any of these are dropped
pub const SLEEP_RANGE: RangeInclusive<f64> = 0.0..=12.0;
pub const EXERCISE_RANGE: RangeInclusive<f64> = 0.0..=5.0;
pub const STUDY_RANGE: RangeInclusive<f64> = 0.0..=10.0;
pub const PRODUCTIVITY_RANGE: RangeInclusive<f64> = 1.0..=5.0;

/// One row of the source table as loaded, before imputation
#[derive(Debug, Clone, PartialEq)]
pub struct RawRecord {
    pub date: NaiveDate,
    pub sleep_hours: Option<f64>,
    pub exercise_hours: Option<f64>,
    pub study_hours: Option<f64>,
    pub reported_productivity: Option<f64>,
}

/// One day of habit data with no missing values
#[derive(Debug, Clone, PartialEq)]
pub struct DailyRecord {
    pub date: NaiveDate,
    pub sleep_hours: f64,
    pub exercise_hours: f64,
    pub study_hours: f64,
    pub reported_productivity: f64,
}

/// Per-column missing-value counts, for console diagnostics
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MissingCounts {
    pub sleep_hours: usize,
    pub exercise_hours: usize,
    pub study_hours: usize,
    pub reported_productivity: usize,
}

/// Load the daily habit log from a CSV file.
///
/// The file must carry the columns `fecha`, `horas_sueno`,
/// `horas_ejercicio`, `horas_estudio` and `productividad`; column order is
/// irrelevant and extra columns are ignored. Empty numeric fields become
/// `None` and are handled later by [`clean`]. A missing required column,
/// an unreadable file or an unparseable date is a `DataQuality` error.
pub fn load_records(path: &Path) -> crate::Result<Vec<RawRecord>> {
    let df = CsvReadOptions::default()
        .with_infer_schema_length(Some(100))
        .with_has_header(true)
        .try_into_reader_with_file_path(Some(path.to_path_buf()))
        .map_err(|e| {
            AnalysisError::DataQuality(format!("cannot open {}: {e}", path.display()))
        })?
        .finish()
        .map_err(|e| {
            AnalysisError::DataQuality(format!("malformed CSV {}: {e}", path.display()))
        })?;

    let dates = date_column(&df)?;
    let sleep = numeric_column(&df, "horas_sueno")?;
    let exercise = numeric_column(&df, "horas_ejercicio")?;
    let study = numeric_column(&df, "horas_estudio")?;
    let productivity = numeric_column(&df, "productividad")?;

    let mut rows = Vec::with_capacity(df.height());
    for i in 0..df.height() {
        rows.push(RawRecord {
            date: dates[i],
            sleep_hours: sleep[i],
            exercise_hours: exercise[i],
            study_hours: study[i],
            reported_productivity: productivity[i],
        });
    }

    debug!("loaded {} rows from {}", rows.len(), path.display());
    Ok(rows)
}

/// Extract the `fecha` column as calendar dates
fn date_column(df: &DataFrame) -> crate::Result<Vec<NaiveDate>> {
    let series = df
        .column("fecha")
        .map_err(|_| AnalysisError::DataQuality("required column 'fecha' is missing".into()))?;
    let strings = series
        .str()
        .map_err(|_| AnalysisError::DataQuality("column 'fecha' must contain dates".into()))?;

    strings
        .into_iter()
        .enumerate()
        .map(|(i, value)| {
            let value = value.ok_or_else(|| {
                AnalysisError::DataQuality(format!("row {i}: missing date in 'fecha'"))
            })?;
            NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").map_err(|_| {
                AnalysisError::DataQuality(format!("row {i}: unparseable date '{value}'")).into()
            })
        })
        .collect()
}

/// Extract a numeric column as `Option<f64>` values, nulls preserved
fn numeric_column(df: &DataFrame, name: &str) -> crate::Result<Vec<Option<f64>>> {
    let series = df.column(name).map_err(|_| {
        AnalysisError::DataQuality(format!("required column '{name}' is missing"))
    })?;
    let series = series.cast(&DataType::Float64).map_err(|e| {
        AnalysisError::DataQuality(format!("column '{name}' is not numeric: {e}"))
    })?;
    Ok(series.f64()?.into_iter().collect())
}

/// Count missing values per column. Read-only diagnostic; the actual
/// imputation is done by [`clean`].
pub fn missing_value_counts(rows: &[RawRecord]) -> MissingCounts {
    MissingCounts {
        sleep_hours: rows.iter().filter(|r| r.sleep_hours.is_none()).count(),
        exercise_hours: rows.iter().filter(|r| r.exercise_hours.is_none()).count(),
        study_hours: rows.iter().filter(|r| r.study_hours.is_none()).count(),
        reported_productivity: rows
            .iter()
            .filter(|r| r.reported_productivity.is_none())
            .count(),
    }
}

/// Fill missing values: sleep and reported productivity with the column
/// mean over the values present before imputation, exercise and study
/// with zero.
///
/// A mean-imputed column with no values at all leaves its mean undefined,
/// which is a `DataQuality` error.
pub fn clean(rows: &[RawRecord]) -> crate::Result<Vec<DailyRecord>> {
    let sleep_mean = mean_of_present(rows.iter().map(|r| r.sleep_hours)).ok_or_else(|| {
        AnalysisError::DataQuality(
            "column 'horas_sueno' has no values to derive an imputation mean".into(),
        )
    })?;
    let productivity_mean = mean_of_present(rows.iter().map(|r| r.reported_productivity))
        .ok_or_else(|| {
            AnalysisError::DataQuality(
                "column 'productividad' has no values to derive an imputation mean".into(),
            )
        })?;

    Ok(rows
        .iter()
        .map(|row| DailyRecord {
            date: row.date,
            sleep_hours: row.sleep_hours.unwrap_or(sleep_mean),
            exercise_hours: row.exercise_hours.unwrap_or(0.0),
            study_hours: row.study_hours.unwrap_or(0.0),
            reported_productivity: row.reported_productivity.unwrap_or(productivity_mean),
        })
        .collect())
}

fn mean_of_present<I: Iterator<Item = Option<f64>>>(values: I) -> Option<f64> {
    let present: Vec<f64> = values.flatten().collect();
    if present.is_empty() {
        None
    } else {
        Some(present.iter().sum::<f64>() / present.len() as f64)
    }
}

/// Drop every record with a field outside its declared domain.
///
/// Order-preserving filter; out-of-range rows are excluded silently, never
/// clamped. May return an empty table.
pub fn validate(days: &[DailyRecord]) -> Vec<DailyRecord> {
    let kept: Vec<DailyRecord> = days
        .iter()
        .filter(|d| {
            SLEEP_RANGE.contains(&d.sleep_hours)
                && EXERCISE_RANGE.contains(&d.exercise_hours)
                && STUDY_RANGE.contains(&d.study_hours)
                && PRODUCTIVITY_RANGE.contains(&d.reported_productivity)
        })
        .cloned()
        .collect();

    if kept.len() < days.len() {
        debug!("validation dropped {} out-of-range records", days.len() - kept.len());
    }
    kept
}

/// Count records whose date already appeared earlier in the table.
/// Advisory only; duplicates are never removed.
pub fn count_duplicate_dates(days: &[DailyRecord]) -> usize {
    let mut seen = HashSet::new();
    days.iter().filter(|d| !seen.insert(d.date)).count()
}
