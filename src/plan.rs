//! Day-level allocation of a monthly total under an exact-sum constraint

use crate::data::{Metric, MonthlySeries, Period};
use crate::engine::ForecastEngine;
use crate::error::{ForecastError, Result};
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::fmt;

/// Per-weekday multipliers expressing the relative expected share of the
/// monthly total. Indexed 0 = Monday .. 6 = Sunday.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeekdayWeights {
    weights: [f64; 7],
}

impl Default for WeekdayWeights {
    /// The stock restaurant profile: quiet Mondays, busy weekends
    fn default() -> Self {
        Self {
            weights: [0.95, 1.00, 1.00, 1.05, 1.10, 1.30, 1.20],
        }
    }
}

impl WeekdayWeights {
    /// Equal weight for every weekday
    pub fn uniform() -> Self {
        Self { weights: [1.0; 7] }
    }

    /// Build from a sparse weekday table (0 = Monday .. 6 = Sunday).
    /// Missing weekdays default to 1.0; a key outside 0..=6 or a
    /// non-finite or non-positive weight is rejected.
    pub fn from_map(map: &BTreeMap<u8, f64>) -> Result<Self> {
        let mut weights = [1.0f64; 7];
        for (&day, &weight) in map {
            if day > 6 {
                return Err(ForecastError::InvalidParameter(format!(
                    "weekday key must be 0..=6, got {}",
                    day
                )));
            }
            if !weight.is_finite() || weight <= 0.0 {
                return Err(ForecastError::InvalidParameter(format!(
                    "weight for weekday {} must be a positive finite number, got {}",
                    day, weight
                )));
            }
            weights[day as usize] = weight;
        }
        Ok(Self { weights })
    }

    /// Weight for a calendar date's weekday
    pub fn for_date(&self, date: NaiveDate) -> f64 {
        self.weights[date.weekday().num_days_from_monday() as usize]
    }
}

/// One day of the spending/revenue plan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayPlanEntry {
    pub date: NaiveDate,
    /// 0 = Monday .. 6 = Sunday
    pub weekday: u8,
    pub weight: f64,
    pub raw_share: f64,
    pub amount: i64,
}

/// Day-level plan covering every day of exactly one target month, in
/// calendar order. The amounts always sum to `total`, the rounded monthly
/// target.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayPlan {
    pub month: Period,
    pub total: i64,
    pub entries: Vec<DayPlanEntry>,
}

impl DayPlan {
    /// Serialize for external consumers (transport, renderer)
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

impl fmt::Display for DayPlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Plan for {} (total: {})", self.month, self.total)?;
        for entry in &self.entries {
            writeln!(
                f,
                "{} ({}) — {}",
                entry.date.format("%d.%m.%Y"),
                entry.date.format("%a"),
                entry.amount
            )?;
        }
        Ok(())
    }
}

/// Split `total` over `weights` into integral amounts that sum exactly to
/// `round(total)`.
///
/// Raw shares are `w_i / Σw × total`, rounded half-away-from-zero
/// (`f64::round`). The rounding residual is then corrected by walking the
/// entries in descending-weight order (stable, so equal weights keep their
/// original order) cyclically, nudging each amount by ±1 until the sum
/// matches. High-weight entries absorb the drift first. Zero and negative
/// totals go through the same proportional logic unchanged.
pub fn distribute(total: f64, weights: &[f64]) -> Result<Vec<i64>> {
    if !total.is_finite() {
        return Err(ForecastError::InvalidParameter(format!(
            "total must be finite, got {}",
            total
        )));
    }
    if weights.is_empty() {
        return Err(ForecastError::InvalidParameter(
            "weight table must not be empty".to_string(),
        ));
    }
    for &w in weights {
        if !w.is_finite() || w <= 0.0 {
            return Err(ForecastError::InvalidParameter(format!(
                "weights must be positive finite numbers, got {}",
                w
            )));
        }
    }

    let weight_sum: f64 = weights.iter().sum();
    let mut amounts: Vec<i64> = weights
        .iter()
        .map(|w| (w / weight_sum * total).round() as i64)
        .collect();

    let target = total.round() as i64;
    let mut residual = target - amounts.iter().sum::<i64>();
    if residual != 0 {
        let mut order: Vec<usize> = (0..weights.len()).collect();
        // Stable sort keeps calendar order for equal weights
        order.sort_by(|&a, &b| {
            weights[b]
                .partial_cmp(&weights[a])
                .unwrap_or(Ordering::Equal)
        });

        let step = if residual > 0 { 1 } else { -1 };
        let mut i = 0;
        while residual != 0 {
            amounts[order[i % order.len()]] += step;
            residual -= step;
            i += 1;
        }
    }

    debug_assert_eq!(amounts.iter().sum::<i64>(), target);
    Ok(amounts)
}

/// Allocate a monthly total across every calendar day of `target`,
/// weighting days by their weekday. The amounts sum exactly to the rounded
/// monthly total regardless of the weight distribution.
pub fn allocate(monthly_total: f64, target: Period, weights: &WeekdayWeights) -> Result<DayPlan> {
    let first = target.first_day()?;
    let days = target.days_in_month();

    let mut dates = Vec::with_capacity(days as usize);
    let mut day_weights = Vec::with_capacity(days as usize);
    for offset in 0..days {
        let date = first
            .checked_add_days(chrono::Days::new(offset as u64))
            .ok_or_else(|| {
                ForecastError::InvalidMonth(format!("{} overflows the calendar", target))
            })?;
        day_weights.push(weights.for_date(date));
        dates.push(date);
    }

    let weight_sum: f64 = day_weights.iter().sum();
    let amounts = distribute(monthly_total, &day_weights)?;

    let entries = dates
        .into_iter()
        .zip(day_weights.iter().zip(amounts.iter()))
        .map(|(date, (&weight, &amount))| DayPlanEntry {
            date,
            weekday: date.weekday().num_days_from_monday() as u8,
            weight,
            raw_share: weight / weight_sum * monthly_total,
            amount,
        })
        .collect();

    Ok(DayPlan {
        month: target,
        total: monthly_total.round() as i64,
        entries,
    })
}

/// Build the day plan for the month after the last observed period, using
/// the revenue forecast's point estimate as the monthly total.
///
/// Requires the regression forecaster's own minimum history (6 periods):
/// the plan total comes from that model, so a looser gate would promise a
/// plan it cannot compute.
pub fn plan_next_month(series: &MonthlySeries, weights: &WeekdayWeights) -> Result<DayPlan> {
    let forecast = ForecastEngine::new().forecast(series, Metric::Revenue)?;
    let target = series.last_period().next();
    allocate(forecast.point_estimate, target, weights)
}
