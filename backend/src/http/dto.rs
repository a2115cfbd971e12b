//! Data Transfer Objects for the HTTP API.
//!
//! Response payloads for the page-facing endpoints live in the routes module
//! and are re-exported here; this module adds the operational ones.

use serde::{Deserialize, Serialize};

pub use crate::api::{AqiBand, MonthlyAggregate, PredictionResult};

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Status of the service
    pub status: String,
    /// Crate version
    pub version: String,
    /// Regression model status
    pub model: ModelStatus,
    /// Dataset status
    pub dataset: DatasetStatus,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelStatus {
    pub loaded: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatasetStatus {
    pub loaded: bool,
    pub rows: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub checksum: Option<String>,
}
