use pretty_assertions::assert_eq;
use table_trend::{
    ForecastEngine, ForecastError, Metric, MonthlySeries, Period, RawRecord,
};

fn series_of_months(n: usize) -> MonthlySeries {
    let raw: Vec<RawRecord> = (0..n)
        .map(|i| RawRecord {
            period: Period::new(2024, 1).unwrap().nth_after(i),
            revenue: 1_000_000.0 + 25_000.0 * i as f64,
            guests: 1_000 + 50 * i as u64,
            avg_check: 800.0 + 10.0 * i as f64,
        })
        .collect();
    MonthlySeries::aggregate(&raw).unwrap()
}

#[test]
fn test_required_periods_per_metric() {
    assert_eq!(ForecastEngine::required_periods(Metric::Revenue), 6);
    assert_eq!(ForecastEngine::required_periods(Metric::Guests), 2);
    assert_eq!(ForecastEngine::required_periods(Metric::AvgCheck), 2);
}

#[test]
fn test_full_request_fails_on_short_history() {
    let series = series_of_months(5);
    let engine = ForecastEngine::new();

    let err = engine.forecast_all(&series, &Metric::ALL).unwrap_err();
    assert_eq!(
        err,
        ForecastError::InsufficientData {
            metric: Metric::Revenue,
            required: 6,
            actual: 5,
        }
    );
}

#[test]
fn test_moving_average_only_request_succeeds_on_short_history() {
    let series = series_of_months(5);
    let engine = ForecastEngine::new();

    let results = engine
        .forecast_all(&series, &[Metric::Guests, Metric::AvgCheck])
        .unwrap();
    assert_eq!(results.len(), 2);
    assert!(results.contains_key(&Metric::Guests));
    assert!(results.contains_key(&Metric::AvgCheck));
}

#[test]
fn test_forecast_all_covers_every_metric() {
    let series = series_of_months(8);
    let engine = ForecastEngine::new();

    let results = engine.forecast_all(&series, &Metric::ALL).unwrap();
    assert_eq!(results.len(), 3);
    for (metric, result) in &results {
        assert_eq!(*metric, result.metric);
        assert!(result.lower_bound <= result.point_estimate);
        assert!(result.point_estimate <= result.upper_bound);
    }
}

#[test]
fn test_duplicate_metrics_collapse() {
    let series = series_of_months(4);
    let engine = ForecastEngine::new();

    let results = engine
        .forecast_all(&series, &[Metric::Guests, Metric::Guests])
        .unwrap();
    assert_eq!(results.len(), 1);
}

#[test]
fn test_forecast_is_deterministic() {
    let series = series_of_months(9);
    let engine = ForecastEngine::new();

    let first = engine.forecast_all(&series, &Metric::ALL).unwrap();
    let second = engine.forecast_all(&series, &Metric::ALL).unwrap();
    assert_eq!(first, second);
}
