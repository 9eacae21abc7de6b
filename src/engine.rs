//! Strategy selection and the per-metric forecast surface

use crate::data::{Metric, MonthlySeries};
use crate::error::{ForecastError, Result};
use crate::models::lag_regression::LagRegressionForecaster;
use crate::models::moving_average::MovingAverageForecaster;
use crate::models::{ForecastResult, Forecaster};
use std::collections::BTreeMap;

/// Stateless forecast orchestrator. The strategy is chosen by metric kind
/// alone: revenue gets the lag-1 regression, count-like metrics get the
/// short-memory moving average. The match is exhaustive over [`Metric`],
/// so every kind maps to exactly one forecaster.
#[derive(Debug, Clone, Default)]
pub struct ForecastEngine;

impl ForecastEngine {
    pub fn new() -> Self {
        Self
    }

    /// Minimum periods the metric's strategy requires; lets callers render
    /// an actionable message before running a forecast.
    pub fn required_periods(metric: Metric) -> usize {
        match metric {
            Metric::Revenue => LagRegressionForecaster::MIN_PERIODS,
            Metric::Guests | Metric::AvgCheck => MovingAverageForecaster::MEMORY,
        }
    }

    /// Forecast the next period for one metric
    pub fn forecast(&self, series: &MonthlySeries, metric: Metric) -> Result<ForecastResult> {
        let required = Self::required_periods(metric);
        if series.len() < required {
            return Err(ForecastError::InsufficientData {
                metric,
                required,
                actual: series.len(),
            });
        }

        match metric {
            Metric::Revenue => LagRegressionForecaster::new().forecast(series, metric),
            Metric::Guests | Metric::AvgCheck => {
                MovingAverageForecaster::new().forecast(series, metric)
            }
        }
    }

    /// Forecast every requested metric, failing fast on the first metric
    /// whose strategy lacks history. Duplicate metrics collapse to one
    /// entry.
    pub fn forecast_all(
        &self,
        series: &MonthlySeries,
        metrics: &[Metric],
    ) -> Result<BTreeMap<Metric, ForecastResult>> {
        let mut results = BTreeMap::new();
        for &metric in metrics {
            if results.contains_key(&metric) {
                continue;
            }
            results.insert(metric, self.forecast(series, metric)?);
        }
        Ok(results)
    }
}
