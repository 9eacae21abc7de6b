//! Calendar periods, raw records and the monthly aggregation transform

use crate::error::{ForecastError, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// One calendar month, the unit of historical aggregation
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Period {
    year: i32,
    month: u32,
}

impl Period {
    /// Create a validated calendar-month key
    pub fn new(year: i32, month: u32) -> Result<Self> {
        if !(1..=12).contains(&month) {
            return Err(ForecastError::InvalidMonth(format!(
                "month must be 1..=12, got {}",
                month
            )));
        }
        if NaiveDate::from_ymd_opt(year, month, 1).is_none() {
            return Err(ForecastError::InvalidMonth(format!(
                "{:04}-{:02} is not a representable date",
                year, month
            )));
        }
        Ok(Self { year, month })
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    /// The immediately following calendar month
    pub fn next(&self) -> Self {
        if self.month == 12 {
            Self {
                year: self.year + 1,
                month: 1,
            }
        } else {
            Self {
                year: self.year,
                month: self.month + 1,
            }
        }
    }

    /// The month `n` periods after this one
    pub fn nth_after(&self, n: usize) -> Self {
        let total = self.year as i64 * 12 + (self.month as i64 - 1) + n as i64;
        Self {
            year: total.div_euclid(12) as i32,
            month: (total.rem_euclid(12) + 1) as u32,
        }
    }

    /// Number of days in this month, leap-year aware
    pub fn days_in_month(&self) -> u32 {
        match self.month {
            1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
            4 | 6 | 9 | 11 => 30,
            _ => {
                if self.is_leap_year() {
                    29
                } else {
                    28
                }
            }
        }
    }

    fn is_leap_year(&self) -> bool {
        self.year % 4 == 0 && (self.year % 100 != 0 || self.year % 400 == 0)
    }

    /// First calendar date of the month
    pub fn first_day(&self) -> Result<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, 1).ok_or_else(|| {
            ForecastError::InvalidMonth(format!("{} is not a representable date", self))
        })
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl FromStr for Period {
    type Err = ForecastError;

    /// Parse a `YYYY-MM` month key
    fn from_str(s: &str) -> Result<Self> {
        let mut parts = s.trim().splitn(2, '-');
        let year = parts
            .next()
            .and_then(|y| y.parse::<i32>().ok())
            .ok_or_else(|| ForecastError::InvalidMonth(format!("cannot parse '{}'", s)))?;
        let month = parts
            .next()
            .and_then(|m| m.parse::<u32>().ok())
            .ok_or_else(|| ForecastError::InvalidMonth(format!("cannot parse '{}'", s)))?;
        Period::new(year, month)
    }
}

/// The business metrics tracked per month
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Metric {
    Revenue,
    Guests,
    AvgCheck,
}

impl Metric {
    /// All metric kinds, in display order
    pub const ALL: [Metric; 3] = [Metric::Revenue, Metric::Guests, Metric::AvgCheck];
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Metric::Revenue => "revenue",
            Metric::Guests => "guests",
            Metric::AvgCheck => "average check",
        };
        write!(f, "{}", label)
    }
}

/// One month's observed figures for a single store
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawRecord {
    pub period: Period,
    pub revenue: f64,
    pub guests: u64,
    pub avg_check: f64,
}

impl RawRecord {
    /// The value column for a given metric
    pub fn value(&self, metric: Metric) -> f64 {
        match metric {
            Metric::Revenue => self.revenue,
            Metric::Guests => self.guests as f64,
            Metric::AvgCheck => self.avg_check,
        }
    }
}

/// Monthly series: one record per calendar month, strictly ascending by
/// period and never empty. Built only by [`MonthlySeries::aggregate`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlySeries {
    records: Vec<RawRecord>,
}

impl MonthlySeries {
    /// Fold possibly unsorted, possibly duplicated raw records into one
    /// record per calendar month: revenue and guests are summed, the
    /// average check is averaged within the month.
    pub fn aggregate(raw: &[RawRecord]) -> Result<Self> {
        if raw.is_empty() {
            return Err(ForecastError::EmptyInput);
        }

        // BTreeMap keys give ascending period order for free
        let mut groups: BTreeMap<Period, (f64, u64, f64, u32)> = BTreeMap::new();
        for record in raw {
            let entry = groups.entry(record.period).or_insert((0.0, 0, 0.0, 0));
            entry.0 += record.revenue;
            entry.1 += record.guests;
            entry.2 += record.avg_check;
            entry.3 += 1;
        }

        let records = groups
            .into_iter()
            .map(|(period, (revenue, guests, check_sum, count))| RawRecord {
                period,
                revenue,
                guests,
                avg_check: check_sum / count as f64,
            })
            .collect();

        Ok(Self { records })
    }

    pub fn records(&self) -> &[RawRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        false // aggregate rejects empty input
    }

    /// The metric's value column in period order
    pub fn values(&self, metric: Metric) -> Vec<f64> {
        self.records.iter().map(|r| r.value(metric)).collect()
    }

    /// The most recent observed record
    pub fn last(&self) -> &RawRecord {
        &self.records[self.records.len() - 1]
    }

    /// The most recent observed period
    pub fn last_period(&self) -> Period {
        self.last().period
    }

    /// Mean of the metric's value column
    pub fn mean(&self, metric: Metric) -> f64 {
        let values = self.values(metric);
        values.iter().sum::<f64>() / values.len() as f64
    }
}
