use serde::Serialize;

use crate::models::{AqiBand, AQI_CATEGORIES, FEATURE_NAMES};

/// Everything the landing page renders: the form inputs and the band legend.
#[derive(Debug, Clone, Serialize)]
pub struct LandingData {
    pub features: &'static [&'static str],
    pub categories: &'static [AqiBand],
}

impl LandingData {
    pub fn current() -> Self {
        Self {
            features: &FEATURE_NAMES,
            categories: &AQI_CATEGORIES,
        }
    }
}

pub const GET_INDEX: &str = "/";
pub const GET_CATEGORIES: &str = "/api/categories";
