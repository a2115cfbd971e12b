//! Monthly trend aggregation over the historical dataset.
//!
//! Rows are filtered to the configured years, keyed by `(year, month)`, and
//! reduced to per-month means of AQI, PM2.5 and PM10. Every failure mode maps
//! to [`TrendOutcome::Fallback`], so callers always receive a non-empty,
//! chart-ready series.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use chrono::{Datelike, NaiveDate, NaiveDateTime};
use tracing::{debug, warn};

use super::fallback::generate_fallback_series;
use crate::api::MonthlyAggregate;
use crate::models::dataset::{DatasetColumns, DatasetRecord, YEAR_COLUMN};
use crate::models::Dataset;
use crate::predictor::round2;

pub const MONTH_NAMES: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

const DATE_FORMATS: [&str; 4] = ["%Y-%m-%d", "%Y/%m/%d", "%m/%d/%Y", "%d-%m-%Y"];
const DATETIME_FORMATS: [&str; 2] = ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"];

/// Reasons the real aggregation could not produce a series.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AggregationError {
    #[error("dataset has no {0} column")]
    MissingColumn(&'static str),

    #[error("no rows fall within the requested years")]
    NoRowsInRange,

    #[error("no row in range has a resolvable month")]
    NoMonthsResolved,

    #[error("row for {year} has month {month} outside 1..=12")]
    InvalidMonth { year: i32, month: i64 },

    #[error("aggregation task failed: {0}")]
    TaskFailed(String),
}

/// Result of a trend request.
#[derive(Debug, Clone, PartialEq)]
pub enum TrendOutcome {
    /// Means computed from the dataset, in chronological order.
    Aggregated(Vec<MonthlyAggregate>),
    /// Placeholder series substituted for the given reason.
    Fallback {
        reason: AggregationError,
        series: Vec<MonthlyAggregate>,
    },
}

impl TrendOutcome {
    /// Substitute the placeholder series.
    pub fn fallback(reason: AggregationError) -> Self {
        TrendOutcome::Fallback {
            reason,
            series: generate_fallback_series(),
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, TrendOutcome::Fallback { .. })
    }

    pub fn series(&self) -> &[MonthlyAggregate] {
        match self {
            TrendOutcome::Aggregated(series) => series,
            TrendOutcome::Fallback { series, .. } => series,
        }
    }

    pub fn into_series(self) -> Vec<MonthlyAggregate> {
        match self {
            TrendOutcome::Aggregated(series) => series,
            TrendOutcome::Fallback { series, .. } => series,
        }
    }
}

/// Grouping key; orders chronologically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MonthKey {
    pub year: i32,
    pub month: u32,
}

impl MonthKey {
    /// Human label, e.g. `"Jan 2021"`.
    pub fn label(&self) -> String {
        format!("{} {}", MONTH_NAMES[self.month as usize - 1], self.year)
    }
}

impl fmt::Display for MonthKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{:02}", self.year, self.month)
    }
}

#[derive(Debug, Default, Clone, Copy)]
struct RunningMean {
    sum: f64,
    count: usize,
}

impl RunningMean {
    fn push(&mut self, value: Option<f64>) {
        if let Some(v) = value {
            self.sum += v;
            self.count += 1;
        }
    }

    fn mean(&self) -> Option<f64> {
        (self.count > 0).then(|| self.sum / self.count as f64)
    }
}

#[derive(Debug, Default)]
struct MonthAccumulator {
    aqi: RunningMean,
    pm25: RunningMean,
    pm10: RunningMean,
}

impl MonthAccumulator {
    fn push(&mut self, record: &DatasetRecord) {
        self.aqi.push(record.aqi);
        self.pm25.push(record.pm25);
        self.pm10.push(record.pm10);
    }

    fn finish(&self, key: MonthKey, columns: DatasetColumns) -> MonthlyAggregate {
        let metric = |present: bool, mean: &RunningMean| {
            if present {
                mean.mean().map(round2)
            } else {
                None
            }
        };
        MonthlyAggregate {
            month: key.label(),
            year: Some(key.year),
            month_num: key.month,
            aqi: metric(columns.aqi, &self.aqi),
            pm25: metric(columns.pm25, &self.pm25),
            pm10: metric(columns.pm10, &self.pm10),
        }
    }
}

/// Aggregate the dataset into monthly means, falling back on any failure.
pub fn aggregate(dataset: &Dataset, years: &BTreeSet<i32>) -> TrendOutcome {
    match aggregate_months(dataset, years) {
        Ok(series) => {
            debug!(months = series.len(), "Aggregated monthly trends");
            TrendOutcome::Aggregated(series)
        }
        Err(reason) => {
            warn!(%reason, "Using fallback trend series");
            TrendOutcome::fallback(reason)
        }
    }
}

/// Aggregate the dataset into monthly means.
///
/// Rows without a resolvable month are skipped. A month number outside
/// `1..=12` rejects the whole batch.
pub fn aggregate_months(
    dataset: &Dataset,
    years: &BTreeSet<i32>,
) -> Result<Vec<MonthlyAggregate>, AggregationError> {
    let columns = dataset.columns();
    if !columns.year {
        return Err(AggregationError::MissingColumn(YEAR_COLUMN));
    }

    let in_range: Vec<(i32, &DatasetRecord)> = dataset
        .records()
        .iter()
        .filter_map(|record| record.year.filter(|y| years.contains(y)).map(|y| (y, record)))
        .collect();
    if in_range.is_empty() {
        return Err(AggregationError::NoRowsInRange);
    }

    let mut groups: BTreeMap<MonthKey, MonthAccumulator> = BTreeMap::new();
    for (year, record) in in_range {
        let Some(month) = resolve_month(record, columns) else {
            continue;
        };
        let month = u32::try_from(month)
            .ok()
            .filter(|m| (1..=12).contains(m))
            .ok_or(AggregationError::InvalidMonth { year, month })?;
        groups
            .entry(MonthKey { year, month })
            .or_default()
            .push(record);
    }

    if groups.is_empty() {
        return Err(AggregationError::NoMonthsResolved);
    }

    Ok(groups
        .iter()
        .map(|(key, acc)| acc.finish(*key, columns))
        .collect())
}

/// Month number for a row.
///
/// A parsable `Date` wins; otherwise the `Month` column is used. Datasets
/// with neither column put every row in January.
fn resolve_month(record: &DatasetRecord, columns: DatasetColumns) -> Option<i64> {
    if columns.date {
        record
            .date
            .as_deref()
            .and_then(parse_date_month)
            .or(record.month)
    } else if columns.month {
        record.month
    } else {
        Some(1)
    }
}

/// Extract the month from a calendar date string; `None` when unparsable.
pub fn parse_date_month(raw: &str) -> Option<i64> {
    let raw = raw.trim();
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(raw, fmt).ok())
        .or_else(|| {
            DATETIME_FORMATS
                .iter()
                .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
                .map(|dt| dt.date())
        })
        .map(|date| i64::from(date.month()))
}

#[cfg(test)]
#[path = "trends_tests.rs"]
mod trends_tests;
