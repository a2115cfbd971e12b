use serde::{Deserialize, Serialize};

// =========================================================
// Trends types + route
// =========================================================

/// Mean pollutant levels for one calendar month.
///
/// Aggregates computed from the dataset carry a `"{Mon} {year}"` label and a
/// `year`; placeholder entries carry the bare month name and no year.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyAggregate {
    pub month: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,
    pub month_num: u32,
    pub aqi: Option<f64>,
    pub pm25: Option<f64>,
    pub pm10: Option<f64>,
}

/// Route path for the monthly trend series.
pub const GET_SAMPLE_DATA: &str = "/api/sample-data";
/// Route path for the trends page.
pub const GET_TRENDS_PAGE: &str = "/trends";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dataset_aggregate_serializes_all_keys() {
        let point = MonthlyAggregate {
            month: "Jan 2021".to_string(),
            year: Some(2021),
            month_num: 1,
            aqi: Some(180.5),
            pm25: None,
            pm10: Some(210.0),
        };
        let json = serde_json::to_value(&point).unwrap();
        assert_eq!(json["month"], "Jan 2021");
        assert_eq!(json["year"], 2021);
        assert_eq!(json["month_num"], 1);
        assert!(json["pm25"].is_null());
        assert_eq!(json["pm10"], 210.0);
    }

    #[test]
    fn test_placeholder_omits_year() {
        let point = MonthlyAggregate {
            month: "Mar".to_string(),
            year: None,
            month_num: 3,
            aqi: Some(180.0),
            pm25: Some(100.0),
            pm10: Some(150.0),
        };
        let json = serde_json::to_value(&point).unwrap();
        assert!(json.get("year").is_none());
        assert_eq!(json["month"], "Mar");
    }

    #[test]
    fn test_const_values() {
        assert_eq!(GET_SAMPLE_DATA, "/api/sample-data");
        assert_eq!(GET_TRENDS_PAGE, "/trends");
    }
}
