//! HTTP handlers for the web front-end.
//!
//! Each handler corresponds to a route and delegates to the service layer or
//! the page renderers.

use std::collections::HashMap;

use anyhow::Context;
use axum::{
    extract::{rejection::FormRejection, State},
    http::Uri,
    response::Html,
    Form, Json,
};
use tracing::{debug, warn};

use super::dto::{DatasetStatus, HealthResponse, ModelStatus};
use super::error::AppError;
use super::state::AppState;
use crate::api::{AqiBand, LandingData, MonthlyAggregate, PredictionResult};
use crate::models::{FeatureVector, AQI_CATEGORIES};
use crate::pages;
use crate::predictor::Predictor;
use crate::services::{aggregate, AggregationError, TrendOutcome};

/// Result type for handlers.
pub type HandlerResult<T> = Result<Json<T>, AppError>;

// =============================================================================
// Pages
// =============================================================================

/// GET /
///
/// Landing page with the prediction form and category legend.
pub async fn index() -> Html<String> {
    Html(pages::render_index(&LandingData::current()))
}

/// GET /trends
///
/// Standalone monthly trend chart; data is fetched client-side.
pub async fn trends_page() -> Html<String> {
    Html(pages::render_trends())
}

// =============================================================================
// Prediction
// =============================================================================

/// POST /predict
///
/// Predict the AQI for form-encoded sensor readings and classify it.
pub async fn predict(
    State(state): State<AppState>,
    form: Result<Form<HashMap<String, String>>, FormRejection>,
) -> HandlerResult<PredictionResult> {
    // A disabled model fails every request, whatever the input.
    if !state.predictor.is_ready() {
        return Err(AppError::ModelUnavailable);
    }

    let fields = match form {
        Ok(Form(fields)) => fields,
        Err(rejection) => {
            debug!(%rejection, "Undecodable /predict body; treating as empty form");
            HashMap::new()
        }
    };
    debug!(?fields, "/predict form");

    let features = FeatureVector::from_form(&fields).map_err(|e| {
        warn!(field = e.field(), "Rejected prediction input: {}", e);
        AppError::from(e)
    })?;

    let predictor: Predictor = state.predictor.clone();
    let aqi = tokio::task::spawn_blocking(move || predictor.predict(&features))
        .await
        .context("Prediction task failed")??;

    Ok(Json(PredictionResult::from_score(aqi)))
}

// =============================================================================
// Data endpoints
// =============================================================================

/// GET /api/sample-data
///
/// Monthly AQI/PM2.5/PM10 means for the configured years. Never fails:
/// aggregation problems yield the placeholder series, and a missing dataset
/// yields an empty list. The series is computed once per loaded dataset.
pub async fn sample_data(State(state): State<AppState>) -> Json<Vec<MonthlyAggregate>> {
    let Some(dataset) = state.dataset.clone() else {
        debug!("No dataset loaded; returning empty trend series");
        return Json(Vec::new());
    };
    let years = state.trend_years.clone();

    let series = state
        .trend_series
        .get_or_init(|| async move {
            tokio::task::spawn_blocking(move || aggregate(&dataset, &years))
                .await
                .unwrap_or_else(|e| {
                    warn!(error = %e, "Trend aggregation task failed; using fallback series");
                    TrendOutcome::fallback(AggregationError::TaskFailed(e.to_string()))
                })
                .into_series()
        })
        .await;

    Json(series.clone())
}

/// GET /api/categories
///
/// The AQI band table shown on the landing page.
pub async fn categories() -> Json<&'static [AqiBand]> {
    Json(AQI_CATEGORIES.as_slice())
}

// =============================================================================
// Health Check
// =============================================================================

/// GET /health
///
/// Reports whether the model and dataset loaded at startup.
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let model = match &state.predictor {
        Predictor::Ready(_) => ModelStatus {
            loaded: true,
            reason: None,
        },
        Predictor::Disabled { reason } => ModelStatus {
            loaded: false,
            reason: Some(reason.clone()),
        },
    };

    let dataset = match &state.dataset {
        Some(dataset) => DatasetStatus {
            loaded: true,
            rows: dataset.len(),
            checksum: Some(dataset.checksum().to_string()).filter(|c| !c.is_empty()),
        },
        None => DatasetStatus {
            loaded: false,
            rows: 0,
            checksum: None,
        },
    };

    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        model,
        dataset,
    })
}

/// Fallback for unknown routes.
pub async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(format!("No route for {}", uri.path()))
}
