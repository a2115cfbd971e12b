//! AQI category table and score classification.
//!
//! The six bands are contiguous over `[0, inf)`: each band covers every score
//! above the previous band's upper bound up to and including its own. The last
//! band has no upper bound.

use serde::Serialize;

/// A single AQI health-risk band.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AqiBand {
    /// Inclusive upper bound; `None` for the open-ended top band.
    #[serde(skip)]
    pub upper_bound: Option<f64>,
    pub range: &'static str,
    pub label: &'static str,
    pub color: &'static str,
    pub health_implications: &'static str,
    pub safety_measures: &'static str,
}

impl AqiBand {
    /// Whether `score` does not exceed this band's upper bound.
    pub fn admits(&self, score: f64) -> bool {
        match self.upper_bound {
            Some(bound) => score <= bound,
            None => true,
        }
    }
}

/// Ordered AQI bands, lowest first.
pub static AQI_CATEGORIES: [AqiBand; 6] = [
    AqiBand {
        upper_bound: Some(50.0),
        range: "0-50",
        label: "Good",
        color: "#10b981",
        health_implications: "Air quality is satisfactory, and air pollution poses little or no risk.",
        safety_measures: "None. Enjoy your normal outdoor activities.",
    },
    AqiBand {
        upper_bound: Some(100.0),
        range: "51-100",
        label: "Satisfactory",
        color: "#3b82f6",
        health_implications: "Air quality is acceptable. However, there may be a moderate health concern for a very small number of unusually sensitive people.",
        safety_measures: "Sensitive Individuals (e.g., with asthma, heart disease): Consider limiting prolonged outdoor exertion. General Public: Safe for all activities.",
    },
    AqiBand {
        upper_bound: Some(200.0),
        range: "101-200",
        label: "Moderately Polluted",
        color: "#f59e0b",
        health_implications: "Breathing discomfort to people with lung diseases such as asthma, and discomfort to people with heart disease, children, and older adults.",
        safety_measures: "Sensitive Individuals: Limit time outdoors. Reduce strenuous activities. Keep medications readily available. General Public: Limit prolonged or heavy outdoor exertion.",
    },
    AqiBand {
        upper_bound: Some(300.0),
        range: "201-300",
        label: "Poor",
        color: "#ef4444",
        health_implications: "Breathing discomfort to most people on prolonged exposure.",
        safety_measures: "Sensitive Individuals: Avoid all outdoor physical exertion. Stay indoors as much as possible. Consider wearing an N95/KN95 mask if going out. General Public: Limit outdoor exertion.",
    },
    AqiBand {
        upper_bound: Some(399.0),
        range: "301-399",
        label: "Very Poor",
        color: "#991b1b",
        health_implications: "May cause respiratory illness on prolonged exposure. The effect may be more pronounced in people with lung and heart diseases.",
        safety_measures: "Everyone: Avoid all outdoor physical activity. Stay indoors. Run an air purifier with a HEPA filter if available. Keep windows and doors closed.",
    },
    AqiBand {
        upper_bound: None,
        range: "400+",
        label: "Severe",
        color: "#7f1d1d",
        health_implications: "Affects healthy people and seriously impacts those with existing diseases. Emergency health warning: everyone is more likely to be affected.",
        safety_measures: "Everyone: Avoid all outdoor activity. Consult a doctor if you experience persistent symptoms (coughing, wheezing, breathlessness). Wear an N95/KN95 mask if you must go out. Stay hydrated and eat antioxidant-rich food.",
    },
];

/// Map an AQI score to its band.
///
/// Total over all inputs: callers clamp scores to `>= 0` upstream, and any
/// value no bounded band admits (including NaN) lands in the top band.
pub fn classify(score: f64) -> &'static AqiBand {
    AQI_CATEGORIES
        .iter()
        .find(|band| band.admits(score))
        .unwrap_or(&AQI_CATEGORIES[AQI_CATEGORIES.len() - 1])
}
