//! Descriptive summary of an aggregated monthly series

use crate::data::{Metric, MonthlySeries, Period};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Month-over-month averages plus the strongest and weakest month by
/// revenue
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesSummary {
    pub average_revenue: f64,
    pub average_guests: f64,
    pub average_check: f64,
    pub best_month: Period,
    pub worst_month: Period,
}

/// Summarize the series. The series is never empty by construction, so
/// this cannot fail. Revenue ties resolve to the earliest month.
pub fn summarize(series: &MonthlySeries) -> SeriesSummary {
    let records = series.records();

    let mut best = &records[0];
    let mut worst = &records[0];
    for record in &records[1..] {
        if record.revenue > best.revenue {
            best = record;
        }
        if record.revenue < worst.revenue {
            worst = record;
        }
    }

    SeriesSummary {
        average_revenue: series.mean(Metric::Revenue),
        average_guests: series.mean(Metric::Guests),
        average_check: series.mean(Metric::AvgCheck),
        best_month: best.period,
        worst_month: worst.period,
    }
}

impl fmt::Display for SeriesSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Monthly summary:")?;
        writeln!(f, "  average revenue: {:.0}", self.average_revenue)?;
        writeln!(f, "  average guests:  {:.0}", self.average_guests)?;
        writeln!(f, "  average check:   {:.0}", self.average_check)?;
        writeln!(f, "  best month:      {}", self.best_month)?;
        write!(f, "  worst month:     {}", self.worst_month)
    }
}
