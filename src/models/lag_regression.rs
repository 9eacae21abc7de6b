//! Trend regression with a lag-1 momentum regressor for revenue-like metrics

use crate::data::{Metric, MonthlySeries};
use crate::error::{ForecastError, Result};
use crate::models::{percent_change, trend_between, ForecastResult, Forecaster};
use statrs::distribution::{ContinuousCDF, StudentsT};

/// Relative pivot threshold for declaring the normal matrix singular
const PIVOT_EPS: f64 = 1e-9;

/// Least-squares forecaster on `[1, t, lag1]`: a time-indexed trend line
/// augmented with the metric's previous-period value as a regressor, which
/// captures autocorrelation a pure trend would miss. No periodic
/// seasonality terms; a monthly series is too short for them.
///
/// The uncertainty band is the model's own predictive interval: the
/// two-sided Student-t interval on the residual variance, widened by the
/// leverage of the prediction point.
#[derive(Debug, Clone, Default)]
pub struct LagRegressionForecaster;

impl LagRegressionForecaster {
    /// Minimum history; the richer model needs more periods to avoid overfit
    pub const MIN_PERIODS: usize = 6;
    /// Two-sided coverage of the predictive interval
    pub const CONFIDENCE: f64 = 0.95;

    pub fn new() -> Self {
        Self
    }

    /// Flat-line continuation for degenerate input, e.g. a zero-variance
    /// series where the lag column is collinear with the intercept. The
    /// result must stay finite instead of surfacing a numerical failure.
    fn flat_line(metric: Metric, last: f64) -> ForecastResult {
        ForecastResult {
            metric,
            point_estimate: last,
            lower_bound: last,
            upper_bound: last,
            percent_change: percent_change(last, last),
            trend: trend_between(last, last),
        }
    }
}

impl Forecaster for LagRegressionForecaster {
    fn min_periods(&self) -> usize {
        Self::MIN_PERIODS
    }

    fn forecast(&self, series: &MonthlySeries, metric: Metric) -> Result<ForecastResult> {
        let y = series.values(metric);
        let n = y.len();
        if n < Self::MIN_PERIODS {
            return Err(ForecastError::InsufficientData {
                metric,
                required: Self::MIN_PERIODS,
                actual: n,
            });
        }

        let mean = y.iter().sum::<f64>() / n as f64;
        let last = y[n - 1];

        // Lag-1 feature; the first period has no predecessor and is
        // backfilled with the series mean.
        let mut lag = Vec::with_capacity(n);
        lag.push(mean);
        lag.extend_from_slice(&y[..n - 1]);

        // Normal equations for rows x_t = [1, t, lag_t]
        let mut xtx = [[0.0f64; 3]; 3];
        let mut xty = [0.0f64; 3];
        for t in 0..n {
            let x = [1.0, t as f64, lag[t]];
            for i in 0..3 {
                for j in 0..3 {
                    xtx[i][j] += x[i] * x[j];
                }
                xty[i] += x[i] * y[t];
            }
        }

        let inv = match invert3(&xtx) {
            Some(inv) => inv,
            None => return Ok(Self::flat_line(metric, last)),
        };
        let beta = mat_vec(&inv, &xty);

        let x0 = [1.0, n as f64, last];
        let point = dot(&beta, &x0);
        if !point.is_finite() {
            return Ok(Self::flat_line(metric, last));
        }

        // Residual variance on n - 3 degrees of freedom
        let mut sse = 0.0;
        for t in 0..n {
            let fitted = beta[0] + beta[1] * t as f64 + beta[2] * lag[t];
            sse += (y[t] - fitted).powi(2);
        }
        let df = (n - 3) as f64;
        let s2 = (sse / df).max(0.0);

        // Predictive interval: point ± t · s · sqrt(1 + x0' (X'X)^-1 x0)
        let leverage = quad_form(&inv, &x0).max(0.0);
        let margin = if s2 > 0.0 {
            let t_dist = StudentsT::new(0.0, 1.0, df)
                .map_err(|e| ForecastError::MathError(e.to_string()))?;
            let t_val = t_dist.inverse_cdf(0.5 + Self::CONFIDENCE / 2.0);
            t_val * (s2 * (1.0 + leverage)).sqrt()
        } else {
            0.0
        };

        Ok(ForecastResult {
            metric,
            point_estimate: point,
            lower_bound: point - margin,
            upper_bound: point + margin,
            percent_change: percent_change(last, point),
            trend: trend_between(last, point),
        })
    }

    fn name(&self) -> &str {
        "lag-1 trend regression"
    }
}

/// Invert a 3x3 matrix by Gauss-Jordan elimination with partial pivoting.
/// Returns `None` when a pivot vanishes relative to the matrix scale.
fn invert3(m: &[[f64; 3]; 3]) -> Option<[[f64; 3]; 3]> {
    let scale = m
        .iter()
        .flatten()
        .fold(0.0f64, |acc, v| acc.max(v.abs()))
        .max(1.0);

    let mut a = *m;
    let mut inv = [[0.0f64; 3]; 3];
    for (i, row) in inv.iter_mut().enumerate() {
        row[i] = 1.0;
    }

    for col in 0..3 {
        let mut pivot = col;
        for row in col + 1..3 {
            if a[row][col].abs() > a[pivot][col].abs() {
                pivot = row;
            }
        }
        if a[pivot][col].abs() < PIVOT_EPS * scale {
            return None;
        }
        a.swap(col, pivot);
        inv.swap(col, pivot);

        let p = a[col][col];
        for j in 0..3 {
            a[col][j] /= p;
            inv[col][j] /= p;
        }
        for row in 0..3 {
            if row != col {
                let factor = a[row][col];
                for j in 0..3 {
                    a[row][j] -= factor * a[col][j];
                    inv[row][j] -= factor * inv[col][j];
                }
            }
        }
    }

    if inv.iter().flatten().all(|v| v.is_finite()) {
        Some(inv)
    } else {
        None
    }
}

fn mat_vec(m: &[[f64; 3]; 3], v: &[f64; 3]) -> [f64; 3] {
    let mut out = [0.0f64; 3];
    for i in 0..3 {
        out[i] = dot(&m[i], v);
    }
    out
}

fn dot(a: &[f64; 3], b: &[f64; 3]) -> f64 {
    a[0] * b[0] + a[1] * b[1] + a[2] * b[2]
}

/// x' M x for symmetric M
fn quad_form(m: &[[f64; 3]; 3], x: &[f64; 3]) -> f64 {
    dot(&mat_vec(m, x), x)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invert3_recovers_identity() {
        let m = [[2.0, 0.0, 1.0], [0.0, 3.0, 0.0], [1.0, 0.0, 2.0]];
        let inv = invert3(&m).unwrap();

        // m * inv should be the identity
        for i in 0..3 {
            for j in 0..3 {
                let cell = dot(&m[i], &[inv[0][j], inv[1][j], inv[2][j]]);
                let expected = if i == j { 1.0 } else { 0.0 };
                assert!(
                    (cell - expected).abs() < 1e-12,
                    "cell ({i},{j}) = {cell}, expected {expected}"
                );
            }
        }
    }

    #[test]
    fn invert3_rejects_singular_matrix() {
        // Third column is twice the first
        let m = [[1.0, 0.0, 2.0], [2.0, 1.0, 4.0], [3.0, 5.0, 6.0]];
        assert!(invert3(&m).is_none());
    }

    #[test]
    fn quad_form_matches_manual_expansion() {
        let m = [[1.0, 0.0, 0.0], [0.0, 2.0, 0.0], [0.0, 0.0, 3.0]];
        let x = [1.0, 2.0, 3.0];
        // 1*1 + 2*4 + 3*9 = 36
        assert!((quad_form(&m, &x) - 36.0).abs() < 1e-12);
    }
}
