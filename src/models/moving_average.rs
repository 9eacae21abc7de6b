//! Short-memory moving-average forecaster for count-like metrics

use crate::data::{Metric, MonthlySeries};
use crate::error::{ForecastError, Result};
use crate::models::{percent_change, trend_between, ForecastResult, Forecaster};

/// Moving-average forecaster: the next-period estimate is the mean of the
/// last two observations, which tracks short-term momentum without
/// overfitting sparse monthly counts.
///
/// The uncertainty band is the min/max of the most recent observations
/// (up to [`MovingAverageForecaster::BAND_WINDOW`]) rather than a fitted
/// interval: for count-like metrics with no assumed distribution the recent
/// observed range is the honest indicator.
#[derive(Debug, Clone, Default)]
pub struct MovingAverageForecaster;

impl MovingAverageForecaster {
    /// Observations averaged for the point estimate
    pub const MEMORY: usize = 2;
    /// Maximum number of recent observations spanning the band
    pub const BAND_WINDOW: usize = 6;

    pub fn new() -> Self {
        Self
    }
}

impl Forecaster for MovingAverageForecaster {
    fn min_periods(&self) -> usize {
        Self::MEMORY
    }

    fn forecast(&self, series: &MonthlySeries, metric: Metric) -> Result<ForecastResult> {
        let values = series.values(metric);
        let n = values.len();
        if n < Self::MEMORY {
            return Err(ForecastError::InsufficientData {
                metric,
                required: Self::MEMORY,
                actual: n,
            });
        }

        let point = (values[n - 1] + values[n - 2]) / 2.0;
        let last = values[n - 1];

        let band = &values[n - Self::BAND_WINDOW.min(n)..];
        let lower = band.iter().copied().fold(f64::INFINITY, f64::min);
        let upper = band.iter().copied().fold(f64::NEG_INFINITY, f64::max);

        Ok(ForecastResult {
            metric,
            point_estimate: point,
            lower_bound: lower,
            upper_bound: upper,
            percent_change: percent_change(last, point),
            trend: trend_between(last, point),
        })
    }

    fn name(&self) -> &str {
        "moving average"
    }
}
