//! HTTP error handling and response types.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::error;

use crate::models::FeatureError;
use crate::predictor::PredictError;

/// API error response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Always `false`; mirrors the success flag of prediction results
    pub success: bool,
    /// Error code for programmatic handling
    pub code: String,
    /// Human-readable error message
    pub error: String,
    /// Offending form field, for validation errors
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
    /// Diagnostic trace, for internal errors
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trace: Option<String>,
}

impl ApiError {
    pub fn new(code: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            success: false,
            code: code.into(),
            error: error.into(),
            field: None,
            trace: None,
        }
    }

    pub fn with_field(mut self, field: impl Into<String>) -> Self {
        self.field = Some(field.into());
        self
    }

    pub fn with_trace(mut self, trace: impl Into<String>) -> Self {
        self.trace = Some(trace.into());
        self
    }
}

/// Application error type for HTTP handlers.
#[derive(Debug)]
pub enum AppError {
    /// Unknown route
    NotFound(String),
    /// A feature field was missing or not numeric
    InvalidInput(FeatureError),
    /// The model artifact failed to load at startup
    ModelUnavailable,
    /// Unexpected failure while predicting
    Prediction(anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error) = match self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, ApiError::new("NOT_FOUND", msg)),
            AppError::InvalidInput(e) => {
                let code = match e {
                    FeatureError::MissingField(_) => "MISSING_FIELD",
                    FeatureError::InvalidValue { .. } => "INVALID_VALUE",
                };
                (
                    StatusCode::BAD_REQUEST,
                    ApiError::new(code, e.to_string()).with_field(e.field()),
                )
            }
            AppError::ModelUnavailable => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ApiError::new("MODEL_NOT_LOADED", PredictError::ModelUnavailable.to_string()),
            ),
            AppError::Prediction(e) => {
                let trace = format!("{:?}", e);
                error!("Prediction error:\n{}", trace);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ApiError::new("PREDICTION_FAILED", e.to_string()).with_trace(trace),
                )
            }
        };

        (status, Json(error)).into_response()
    }
}

impl From<FeatureError> for AppError {
    fn from(err: FeatureError) -> Self {
        AppError::InvalidInput(err)
    }
}

impl From<PredictError> for AppError {
    fn from(err: PredictError) -> Self {
        match err {
            PredictError::ModelUnavailable => AppError::ModelUnavailable,
            other => AppError::Prediction(anyhow::Error::new(other)),
        }
    }
}

impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        AppError::Prediction(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_omits_empty_optionals() {
        let json = serde_json::to_value(ApiError::new("MODEL_NOT_LOADED", "Model not loaded")).unwrap();
        assert_eq!(json["success"], false);
        assert_eq!(json["code"], "MODEL_NOT_LOADED");
        assert!(json.get("field").is_none());
        assert!(json.get("trace").is_none());
    }

    #[test]
    fn test_status_mapping() {
        let missing = AppError::from(FeatureError::MissingField("CO")).into_response();
        assert_eq!(missing.status(), StatusCode::BAD_REQUEST);

        let disabled = AppError::from(PredictError::ModelUnavailable).into_response();
        assert_eq!(disabled.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let non_finite = AppError::from(PredictError::NonFiniteOutput(f64::NAN));
        assert!(matches!(non_finite, AppError::Prediction(_)));
        assert_eq!(non_finite.into_response().status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
