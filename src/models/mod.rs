//! Forecasting models for monthly business metrics

use crate::data::{Metric, MonthlySeries};
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Direction of the forecast relative to the last observed value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Trend {
    Up,
    Down,
}

impl fmt::Display for Trend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Trend::Up => write!(f, "up"),
            Trend::Down => write!(f, "down"),
        }
    }
}

/// Next-period forecast for a single metric: point estimate, uncertainty
/// band, percent change against the last observation and a trend label.
///
/// `percent_change` is `None` when the last observed value is zero and the
/// change is therefore undefined.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastResult {
    pub metric: Metric,
    pub point_estimate: f64,
    pub lower_bound: f64,
    pub upper_bound: f64,
    pub percent_change: Option<f64>,
    pub trend: Trend,
}

impl ForecastResult {
    /// Serialize for external consumers (transport, renderer)
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

impl fmt::Display for ForecastResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.metric)?;
        writeln!(f, "  forecast: {:.0}", self.point_estimate)?;
        writeln!(f, "  low:      {:.0}", self.lower_bound)?;
        writeln!(f, "  high:     {:.0}", self.upper_bound)?;
        match self.percent_change {
            Some(pct) => writeln!(f, "  change:   {:+.1}%", pct)?,
            None => writeln!(f, "  change:   n/a")?,
        }
        write!(f, "  trend:    {}", self.trend)
    }
}

/// A forecasting strategy operating on one metric's value column
pub trait Forecaster {
    /// Minimum number of monthly periods the strategy needs
    fn min_periods(&self) -> usize;

    /// Forecast the next unobserved period for the given metric
    fn forecast(&self, series: &MonthlySeries, metric: Metric) -> Result<ForecastResult>;

    /// Name of the strategy
    fn name(&self) -> &str;
}

/// Trend label for a point estimate against the last observation.
/// Strictly greater counts as growth; equal reads as decline, matching the
/// degenerate flat-line case.
pub(crate) fn trend_between(last: f64, point: f64) -> Trend {
    if point > last {
        Trend::Up
    } else {
        Trend::Down
    }
}

/// Percent change of the point estimate against the last observation,
/// `None` when the denominator is zero
pub(crate) fn percent_change(last: f64, point: f64) -> Option<f64> {
    if last == 0.0 {
        None
    } else {
        Some((point - last) / last * 100.0)
    }
}

pub mod lag_regression;
pub mod moving_average;
