//! Model input features.

use std::collections::HashMap;

/// Names of the regression inputs, in the order the model consumes them.
pub const FEATURE_NAMES: [&str; 11] = [
    "Date",
    "Month",
    "Year",
    "Holidays_Count",
    "Days",
    "PM2.5",
    "PM10",
    "NO2",
    "SO2",
    "CO",
    "Ozone",
];

/// Number of model inputs.
pub const FEATURE_COUNT: usize = FEATURE_NAMES.len();

/// Caller-side validation failure while building a [`FeatureVector`].
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FeatureError {
    #[error("Missing field: {0}")]
    MissingField(&'static str),

    #[error("Invalid value for field {field}: '{value}' is not a finite number")]
    InvalidValue { field: &'static str, value: String },
}

impl FeatureError {
    /// Name of the offending field.
    pub fn field(&self) -> &'static str {
        match self {
            FeatureError::MissingField(field) => *field,
            FeatureError::InvalidValue { field, .. } => *field,
        }
    }
}

/// Ordered numeric inputs for a single prediction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeatureVector([f64; FEATURE_COUNT]);

impl FeatureVector {
    pub fn new(values: [f64; FEATURE_COUNT]) -> Self {
        Self(values)
    }

    /// Build a vector from submitted form fields.
    ///
    /// Fields are checked in model order; the first missing or unparsable one
    /// is reported. Extra fields are ignored.
    pub fn from_form(form: &HashMap<String, String>) -> Result<Self, FeatureError> {
        let mut values = [0.0; FEATURE_COUNT];
        for (slot, name) in values.iter_mut().zip(FEATURE_NAMES) {
            let raw = form.get(name).ok_or(FeatureError::MissingField(name))?;
            *slot = parse_feature(name, raw)?;
        }
        Ok(Self(values))
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }
}

fn parse_feature(name: &'static str, raw: &str) -> Result<f64, FeatureError> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| FeatureError::InvalidValue {
            field: name,
            value: raw.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_form() -> HashMap<String, String> {
        FEATURE_NAMES
            .iter()
            .enumerate()
            .map(|(i, name)| (name.to_string(), format!("{}", i + 1)))
            .collect()
    }

    #[test]
    fn test_from_form_preserves_model_order() {
        let features = FeatureVector::from_form(&full_form()).unwrap();
        let expected: Vec<f64> = (1..=11).map(|v| v as f64).collect();
        assert_eq!(features.as_slice(), expected.as_slice());
    }

    #[test]
    fn test_missing_field_is_named() {
        let mut form = full_form();
        form.remove("NO2");
        let err = FeatureVector::from_form(&form).unwrap_err();
        assert_eq!(err, FeatureError::MissingField("NO2"));
        assert_eq!(err.to_string(), "Missing field: NO2");
    }

    #[test]
    fn test_first_missing_field_wins() {
        let mut form = full_form();
        form.remove("Ozone");
        form.remove("Month");
        let err = FeatureVector::from_form(&form).unwrap_err();
        assert_eq!(err.field(), "Month");
    }

    #[test]
    fn test_non_numeric_value_rejected() {
        let mut form = full_form();
        form.insert("PM2.5".to_string(), "high".to_string());
        let err = FeatureVector::from_form(&form).unwrap_err();
        assert_eq!(err.field(), "PM2.5");
        assert!(matches!(err, FeatureError::InvalidValue { .. }));
    }

    #[test]
    fn test_blank_and_non_finite_rejected() {
        for bad in ["", "   ", "NaN", "inf"] {
            let mut form = full_form();
            form.insert("CO".to_string(), bad.to_string());
            assert!(FeatureVector::from_form(&form).is_err(), "accepted {:?}", bad);
        }
    }

    #[test]
    fn test_whitespace_is_trimmed() {
        let mut form = full_form();
        form.insert("SO2".to_string(), " 12.5 ".to_string());
        let features = FeatureVector::from_form(&form).unwrap();
        assert_eq!(features.as_slice()[8], 12.5);
    }
}
