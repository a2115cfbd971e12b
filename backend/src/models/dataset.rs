//! Historical air-quality dataset.
//!
//! The dataset is a CSV file with a header row. Only the columns used by the
//! trend view are kept; everything else in the file is ignored. Cells that do
//! not parse as numbers are treated as missing, so a single bad cell never
//! rejects the whole file.

use std::fs;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord, Trim};

use super::checksum::calculate_checksum;

pub const DATE_COLUMN: &str = "Date";
pub const MONTH_COLUMN: &str = "Month";
pub const YEAR_COLUMN: &str = "Year";
pub const AQI_COLUMN: &str = "AQI";
pub const PM25_COLUMN: &str = "PM2.5";
pub const PM10_COLUMN: &str = "PM10";

/// Result type for dataset loading.
pub type DatasetResult<T> = Result<T, DatasetError>;

#[derive(Debug, thiserror::Error)]
pub enum DatasetError {
    #[error("Failed to read dataset: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed dataset CSV: {0}")]
    Csv(#[from] csv::Error),
}

/// Which of the columns relevant to trend aggregation the file provides.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DatasetColumns {
    pub date: bool,
    pub month: bool,
    pub year: bool,
    pub aqi: bool,
    pub pm25: bool,
    pub pm10: bool,
}

/// One row of the dataset, reduced to the columns the trend view reads.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DatasetRecord {
    pub date: Option<String>,
    pub month: Option<i64>,
    pub year: Option<i32>,
    pub aqi: Option<f64>,
    pub pm25: Option<f64>,
    pub pm10: Option<f64>,
}

/// Read-only, load-once dataset.
#[derive(Debug, Clone)]
pub struct Dataset {
    columns: DatasetColumns,
    records: Vec<DatasetRecord>,
    checksum: String,
}

#[derive(Default)]
struct ColumnIndex {
    date: Option<usize>,
    month: Option<usize>,
    year: Option<usize>,
    aqi: Option<usize>,
    pm25: Option<usize>,
    pm10: Option<usize>,
}

impl ColumnIndex {
    fn from_headers(headers: &StringRecord) -> Self {
        let find = |name: &str| headers.iter().position(|h| h == name);
        Self {
            date: find(DATE_COLUMN),
            month: find(MONTH_COLUMN),
            year: find(YEAR_COLUMN),
            aqi: find(AQI_COLUMN),
            pm25: find(PM25_COLUMN),
            pm10: find(PM10_COLUMN),
        }
    }

    fn columns(&self) -> DatasetColumns {
        DatasetColumns {
            date: self.date.is_some(),
            month: self.month.is_some(),
            year: self.year.is_some(),
            aqi: self.aqi.is_some(),
            pm25: self.pm25.is_some(),
            pm10: self.pm10.is_some(),
        }
    }

    fn record(&self, row: &StringRecord) -> DatasetRecord {
        let cell = |idx: Option<usize>| idx.and_then(|i| row.get(i)).filter(|s| !s.is_empty());
        DatasetRecord {
            date: cell(self.date).map(str::to_string),
            month: cell(self.month).and_then(parse_whole).map(|m| m as i64),
            year: cell(self.year).and_then(parse_whole).map(|y| y as i32),
            aqi: cell(self.aqi).and_then(parse_number),
            pm25: cell(self.pm25).and_then(parse_number),
            pm10: cell(self.pm10).and_then(parse_number),
        }
    }
}

fn parse_number(cell: &str) -> Option<f64> {
    cell.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Integral cells may be written as `2021` or `2021.0`.
fn parse_whole(cell: &str) -> Option<f64> {
    parse_number(cell).filter(|v| v.fract() == 0.0 && v.abs() <= i32::MAX as f64)
}

impl Dataset {
    /// Load a dataset from a CSV file on disk.
    pub fn from_path<P: AsRef<Path>>(path: P) -> DatasetResult<Self> {
        let bytes = fs::read(path.as_ref())?;
        Self::from_bytes(&bytes)
    }

    /// Parse a dataset from raw CSV bytes.
    pub fn from_bytes(bytes: &[u8]) -> DatasetResult<Self> {
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .trim(Trim::All)
            .from_reader(bytes);

        let index = ColumnIndex::from_headers(reader.headers()?);
        let mut records = Vec::new();
        for row in reader.records() {
            records.push(index.record(&row?));
        }

        Ok(Self {
            columns: index.columns(),
            records,
            checksum: calculate_checksum(bytes),
        })
    }

    /// Build a dataset directly from records.
    pub fn from_records(columns: DatasetColumns, records: Vec<DatasetRecord>) -> Self {
        Self {
            columns,
            records,
            checksum: String::new(),
        }
    }

    pub fn columns(&self) -> DatasetColumns {
        self.columns
    }

    pub fn records(&self) -> &[DatasetRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// SHA-256 of the file contents (empty for in-memory datasets).
    pub fn checksum(&self) -> &str {
        &self.checksum
    }
}
