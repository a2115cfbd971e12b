use serde::{Deserialize, Serialize};

use crate::models::classify;

// =========================================================
// Prediction types + route
// =========================================================

/// Predicted AQI together with its health-risk band.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionResult {
    pub success: bool,
    pub aqi: f64,
    pub category: String,
    pub color: String,
    pub range: String,
    pub health_implications: String,
    pub safety_measures: String,
}

impl PredictionResult {
    /// Classify a finished (clamped, rounded) AQI score.
    pub fn from_score(aqi: f64) -> Self {
        let band = classify(aqi);
        Self {
            success: true,
            aqi,
            category: band.label.to_string(),
            color: band.color.to_string(),
            range: band.range.to_string(),
            health_implications: band.health_implications.to_string(),
            safety_measures: band.safety_measures.to_string(),
        }
    }
}

/// Route path for form-encoded predictions.
pub const POST_PREDICT: &str = "/predict";
