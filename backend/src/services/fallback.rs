//! Placeholder trend series.
//!
//! Used whenever real monthly aggregates are unavailable so the trends chart
//! always has a plausible curve to draw. AQI follows a fixed sinusoid around
//! 150; PM2.5 and PM10 are drawn uniformly around their baselines. The values
//! carry no meaning beyond keeping the chart populated.

use std::f64::consts::PI;

use rand::Rng;

use super::trends::MONTH_NAMES;
use crate::api::MonthlyAggregate;

const AQI_BASELINE: f64 = 150.0;
const AQI_AMPLITUDE: f64 = 30.0;
const PM25_BASELINE: i32 = 100;
const PM25_SPREAD: i32 = 30;
const PM10_BASELINE: i32 = 150;
const PM10_SPREAD: i32 = 40;

/// Generate a 12-month placeholder series using the thread-local RNG.
pub fn generate_fallback_series() -> Vec<MonthlyAggregate> {
    generate_fallback_series_with(&mut rand::thread_rng())
}

/// Generate a 12-month placeholder series from the given RNG.
pub fn generate_fallback_series_with<R: Rng + ?Sized>(rng: &mut R) -> Vec<MonthlyAggregate> {
    MONTH_NAMES
        .iter()
        .enumerate()
        .map(|(i, name)| {
            let phase = i as f64 * PI / 6.0;
            MonthlyAggregate {
                month: name.to_string(),
                year: None,
                month_num: i as u32 + 1,
                aqi: Some((AQI_BASELINE + AQI_AMPLITUDE * phase.sin()).round()),
                pm25: Some(f64::from(
                    PM25_BASELINE + rng.gen_range(-PM25_SPREAD..PM25_SPREAD),
                )),
                pm10: Some(f64::from(
                    PM10_BASELINE + rng.gen_range(-PM10_SPREAD..PM10_SPREAD),
                )),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_twelve_calendar_months() {
        let series = generate_fallback_series();
        assert_eq!(series.len(), 12);
        let labels: Vec<&str> = series.iter().map(|p| p.month.as_str()).collect();
        assert_eq!(labels, MONTH_NAMES);
        assert!(series.iter().all(|p| p.year.is_none()));
        assert!(series
            .iter()
            .enumerate()
            .all(|(i, p)| p.month_num == i as u32 + 1));
    }

    #[test]
    fn test_values_within_bands() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..50 {
            for point in generate_fallback_series_with(&mut rng) {
                let aqi = point.aqi.unwrap();
                let pm25 = point.pm25.unwrap();
                let pm10 = point.pm10.unwrap();
                assert!((120.0..=180.0).contains(&aqi));
                assert!((70.0..130.0).contains(&pm25));
                assert!((110.0..190.0).contains(&pm10));
            }
        }
    }

    #[test]
    fn test_aqi_curve_is_fixed() {
        let a = generate_fallback_series();
        let b = generate_fallback_series();
        let aqi = |s: &[MonthlyAggregate]| s.iter().map(|p| p.aqi).collect::<Vec<_>>();
        assert_eq!(aqi(&a), aqi(&b));
        assert_eq!(a[0].aqi, Some(150.0));
        assert_eq!(a[3].aqi, Some(180.0));
        assert_eq!(a[9].aqi, Some(120.0));
    }
}
