//! Public API surface for the web front-end.
//!
//! This file consolidates the DTO types returned by the HTTP API.
//! All response types derive Serialize for JSON serialization.

pub use crate::models::category::AqiBand;
pub use crate::routes::landing::LandingData;
pub use crate::routes::predict::PredictionResult;
pub use crate::routes::trends::MonthlyAggregate;
