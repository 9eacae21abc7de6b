//! # Table Trend
//!
//! A Rust library for forecasting monthly restaurant metrics and planning
//! revenue day by day.
//!
//! ## Features
//!
//! - Monthly aggregation of raw period records (sum revenue and guests,
//!   average the check)
//! - Two forecasting strategies dispatched by metric kind: a short-memory
//!   moving average for count-like metrics and a lag-1 trend regression
//!   with a Student-t predictive interval for revenue
//! - Day-level allocation of a monthly total with weekday weighting and
//!   exact-sum rounding correction
//! - Series analytics and a validating data-entry session state machine
//!
//! ## Quick Start
//!
//! ```rust
//! use table_trend::{
//!     allocate, ForecastEngine, Metric, MonthlySeries, Period, RawRecord,
//!     WeekdayWeights,
//! };
//!
//! fn main() -> table_trend::Result<()> {
//!     let raw: Vec<RawRecord> = (1..=7)
//!         .map(|month| {
//!             Ok(RawRecord {
//!                 period: Period::new(2025, month)?,
//!                 revenue: 1_000_000.0 + 50_000.0 * month as f64,
//!                 guests: 1_200 + 30 * month as u64,
//!                 avg_check: 840.0,
//!             })
//!         })
//!         .collect::<table_trend::Result<_>>()?;
//!
//!     let series = MonthlySeries::aggregate(&raw)?;
//!
//!     let engine = ForecastEngine::new();
//!     let forecasts = engine.forecast_all(&series, &Metric::ALL)?;
//!     let revenue = &forecasts[&Metric::Revenue];
//!
//!     let target = series.last_period().next();
//!     let plan = allocate(revenue.point_estimate, target, &WeekdayWeights::default())?;
//!     assert_eq!(
//!         plan.entries.iter().map(|e| e.amount).sum::<i64>(),
//!         plan.total
//!     );
//!     Ok(())
//! }
//! ```

pub mod analytics;
pub mod data;
pub mod engine;
pub mod entry;
pub mod error;
pub mod models;
pub mod plan;

// Re-export commonly used types
pub use crate::analytics::{summarize, SeriesSummary};
pub use crate::data::{Metric, MonthlySeries, Period, RawRecord};
pub use crate::engine::ForecastEngine;
pub use crate::entry::{EntrySession, EntryStep};
pub use crate::error::{ForecastError, Result};
pub use crate::models::{ForecastResult, Forecaster, Trend};
pub use crate::plan::{allocate, distribute, plan_next_month, DayPlan, DayPlanEntry, WeekdayWeights};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
