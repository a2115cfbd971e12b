//! Service layer for business logic.
//!
//! Services operate on the load-once resources (dataset, predictor) and are
//! free of HTTP concerns, so they can be exercised directly from tests.

pub mod fallback;

pub mod trends;

pub use fallback::{generate_fallback_series, generate_fallback_series_with};
pub use trends::{aggregate, aggregate_months, AggregationError, MonthKey, TrendOutcome};
