//! AQI predictor adapter.
//!
//! The regression artifact is loaded once at startup. A failed load does not
//! stop the server; it leaves the predictor in the [`Predictor::Disabled`]
//! state, and every prediction then reports [`PredictError::ModelUnavailable`].

pub mod artifact;

use std::fmt;
use std::path::Path;
use std::sync::Arc;

use tracing::{info, warn};

use crate::models::FeatureVector;

pub use artifact::{
    LinearModel, ModelArtifact, RegressionTree, StackedModel, TreeAggregation, TreeEnsemble,
    TreeNode,
};

/// Single-row regression inference.
pub trait RegressionModel: Send + Sync {
    /// Raw model output for one ordered feature row.
    fn predict_row(&self, features: &[f64]) -> f64;
}

/// Failure to load a regression artifact.
#[derive(Debug, thiserror::Error)]
pub enum ModelError {
    #[error("Failed to read model artifact: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse model artifact: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid model artifact: {0}")]
    Invalid(String),
}

/// Failure of a single prediction.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PredictError {
    #[error("Model not loaded")]
    ModelUnavailable,

    #[error("Model produced a prediction outside the representable AQI range ({0})")]
    NonFiniteOutput(f64),
}

/// Load-once handle to the regression model.
#[derive(Clone)]
pub enum Predictor {
    Ready(Arc<dyn RegressionModel>),
    Disabled { reason: String },
}

impl fmt::Debug for Predictor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Predictor::Ready(_) => f.write_str("Predictor::Ready"),
            Predictor::Disabled { reason } => f
                .debug_struct("Predictor::Disabled")
                .field("reason", reason)
                .finish(),
        }
    }
}

impl Predictor {
    /// Load the artifact at `path`, disabling the predictor on any failure.
    pub fn load<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref();
        match ModelArtifact::from_path(path) {
            Ok(artifact) => {
                info!(path = %path.display(), "Model loaded successfully");
                Self::from_model(artifact)
            }
            Err(e) => {
                warn!(path = %path.display(), error = %e, "Error loading model; predictions disabled");
                Self::disabled(e.to_string())
            }
        }
    }

    pub fn from_model<M: RegressionModel + 'static>(model: M) -> Self {
        Predictor::Ready(Arc::new(model))
    }

    pub fn disabled(reason: impl Into<String>) -> Self {
        Predictor::Disabled {
            reason: reason.into(),
        }
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, Predictor::Ready(_))
    }

    /// Predict an AQI score, floored at zero and rounded to 2 decimals.
    pub fn predict(&self, features: &FeatureVector) -> Result<f64, PredictError> {
        match self {
            Predictor::Ready(model) => finalize_prediction(model.predict_row(features.as_slice())),
            Predictor::Disabled { .. } => Err(PredictError::ModelUnavailable),
        }
    }
}

/// Round a raw model output to 2 decimals and clamp it to `>= 0`.
pub fn finalize_prediction(raw: f64) -> Result<f64, PredictError> {
    // Rounding scales by 100, so huge finite outputs can overflow here.
    let rounded = round2(raw);
    if !rounded.is_finite() {
        return Err(PredictError::NonFiniteOutput(raw));
    }
    // Also folds -0.0 into 0.0.
    Ok(if rounded > 0.0 { rounded } else { 0.0 })
}

pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::FEATURE_COUNT;

    struct Constant(f64);

    impl RegressionModel for Constant {
        fn predict_row(&self, _features: &[f64]) -> f64 {
            self.0
        }
    }

    fn features() -> FeatureVector {
        FeatureVector::new([1.0; FEATURE_COUNT])
    }

    #[test]
    fn test_prediction_is_rounded() {
        let predictor = Predictor::from_model(Constant(123.456));
        assert_eq!(predictor.predict(&features()), Ok(123.46));
    }

    #[test]
    fn test_negative_output_is_floored() {
        let predictor = Predictor::from_model(Constant(-42.0));
        assert_eq!(predictor.predict(&features()), Ok(0.0));

        let tiny = Predictor::from_model(Constant(-0.001));
        let value = tiny.predict(&features()).unwrap();
        assert!(value == 0.0 && value.is_sign_positive());
    }

    #[test]
    fn test_non_finite_output_is_an_error() {
        let predictor = Predictor::from_model(Constant(f64::NAN));
        assert!(matches!(
            predictor.predict(&features()),
            Err(PredictError::NonFiniteOutput(_))
        ));
    }

    #[test]
    fn test_overflowing_output_is_an_error() {
        let predictor = Predictor::from_model(Constant(1e307));
        assert_eq!(
            predictor.predict(&features()),
            Err(PredictError::NonFiniteOutput(1e307))
        );
        assert!(finalize_prediction(f64::MAX).is_err());
        assert!(finalize_prediction(f64::INFINITY).is_err());
        assert_eq!(finalize_prediction(1e12), Ok(1e12));
    }

    #[test]
    fn test_disabled_predictor_always_fails() {
        let predictor = Predictor::disabled("missing file");
        assert!(!predictor.is_ready());
        assert_eq!(predictor.predict(&features()), Err(PredictError::ModelUnavailable));
        assert_eq!(PredictError::ModelUnavailable.to_string(), "Model not loaded");
    }

    #[test]
    fn test_load_missing_artifact_disables() {
        let predictor = Predictor::load("/nonexistent/stack_aqi_model.json");
        match predictor {
            Predictor::Disabled { reason } => assert!(reason.contains("read model artifact")),
            Predictor::Ready(_) => panic!("expected disabled predictor"),
        }
    }
}
