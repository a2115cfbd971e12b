//! Application state for the HTTP server.

use std::collections::BTreeSet;
use std::sync::Arc;

use tokio::sync::OnceCell;
use tracing::{info, warn};

use crate::api::MonthlyAggregate;
use crate::config::AppConfig;
use crate::models::Dataset;
use crate::predictor::Predictor;

/// Shared application state passed to all handlers.
///
/// Both resources are loaded once before the listener starts and never
/// mutated afterwards, so handlers read them without coordination. The trend
/// series is derived from the dataset on first request and reused, so a
/// placeholder series stays the same for the life of the process.
#[derive(Clone, Debug)]
pub struct AppState {
    /// Regression model, or the reason it is unavailable
    pub predictor: Predictor,
    /// Historical dataset; `None` when it failed to load
    pub dataset: Option<Arc<Dataset>>,
    /// Years included in the trend series
    pub trend_years: Arc<BTreeSet<i32>>,
    /// Monthly series computed from `dataset`, filled on first use
    pub trend_series: Arc<OnceCell<Vec<MonthlyAggregate>>>,
}

impl AppState {
    /// Create a new application state from already-loaded resources.
    pub fn new(predictor: Predictor, dataset: Option<Dataset>, trend_years: BTreeSet<i32>) -> Self {
        Self {
            predictor,
            dataset: dataset.map(Arc::new),
            trend_years: Arc::new(trend_years),
            trend_series: Arc::new(OnceCell::new()),
        }
    }

    /// Load both resources named by the configuration.
    ///
    /// Load failures are logged and degrade the matching feature; they never
    /// abort startup.
    pub fn load(config: &AppConfig) -> Self {
        let predictor = Predictor::load(&config.resources.model_path);

        let path = &config.resources.dataset_path;
        let dataset = match Dataset::from_path(path) {
            Ok(dataset) => {
                info!(
                    path = %path.display(),
                    rows = dataset.len(),
                    checksum = %dataset.checksum(),
                    "CSV data loaded successfully"
                );
                Some(dataset)
            }
            Err(e) => {
                warn!(path = %path.display(), error = %e, "Error loading CSV; trends will use placeholder data");
                None
            }
        };

        Self::new(predictor, dataset, config.trend_years())
    }
}
