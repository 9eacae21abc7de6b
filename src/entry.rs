//! Data-entry session state machine
//!
//! Collects one month's figures step by step: month, revenue, guest count,
//! average check. Each transition validates its input and either advances
//! the session or reports a typed error, leaving the current state intact
//! for a retry. The completed [`RawRecord`] is handed to the caller, which
//! owns the store upsert; no session state survives completion.
//!
//! This module is a collaborator around the forecasting core, not part of
//! it: it shares no state with the pipeline and carries its own error type.

use crate::data::{Period, RawRecord};
use thiserror::Error;

/// Validation errors produced by session transitions
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EntryError {
    /// Month text matched neither `YYYY-MM` nor `<month name> <year>`
    #[error("unrecognized month: '{0}' (try '2025-10' or 'October 2025')")]
    UnrecognizedMonth(String),

    /// A numeric field failed to parse
    #[error("invalid {field}: '{input}' is not a number")]
    InvalidNumber {
        field: &'static str,
        input: String,
    },

    /// A numeric field parsed but was negative or non-finite
    #[error("invalid {field}: must be a non-negative number")]
    NegativeValue { field: &'static str },
}

/// One data-entry session, advanced one input at a time
#[derive(Debug, Clone, PartialEq, Default)]
pub enum EntrySession {
    #[default]
    AwaitingMonth,
    AwaitingRevenue {
        period: Period,
    },
    AwaitingGuests {
        period: Period,
        revenue: f64,
    },
    AwaitingAvgCheck {
        period: Period,
        revenue: f64,
        guests: u64,
    },
}

/// Outcome of a successful transition
#[derive(Debug, Clone, PartialEq)]
pub enum EntryStep {
    /// More inputs needed; continue with this session state
    InProgress(EntrySession),
    /// All fields collected; the record is ready for the store upsert
    Complete(RawRecord),
}

impl EntrySession {
    pub fn new() -> Self {
        Self::AwaitingMonth
    }

    /// Feed one user input into the session
    pub fn advance(&self, input: &str) -> Result<EntryStep, EntryError> {
        match self {
            EntrySession::AwaitingMonth => {
                let period = parse_month(input)?;
                Ok(EntryStep::InProgress(EntrySession::AwaitingRevenue {
                    period,
                }))
            }
            EntrySession::AwaitingRevenue { period } => {
                let revenue = parse_amount(input, "revenue")?;
                Ok(EntryStep::InProgress(EntrySession::AwaitingGuests {
                    period: *period,
                    revenue,
                }))
            }
            EntrySession::AwaitingGuests { period, revenue } => {
                let guests = input.trim().parse::<u64>().map_err(|_| {
                    EntryError::InvalidNumber {
                        field: "guest count",
                        input: input.trim().to_string(),
                    }
                })?;
                Ok(EntryStep::InProgress(EntrySession::AwaitingAvgCheck {
                    period: *period,
                    revenue: *revenue,
                    guests,
                }))
            }
            EntrySession::AwaitingAvgCheck {
                period,
                revenue,
                guests,
            } => {
                let avg_check = parse_amount(input, "average check")?;
                Ok(EntryStep::Complete(RawRecord {
                    period: *period,
                    revenue: *revenue,
                    guests: *guests,
                    avg_check,
                }))
            }
        }
    }
}

const MONTH_NAMES: [&str; 12] = [
    "january",
    "february",
    "march",
    "april",
    "may",
    "june",
    "july",
    "august",
    "september",
    "october",
    "november",
    "december",
];

/// Accepts `YYYY-MM` or `<english month name> <year>`, case-insensitive
fn parse_month(input: &str) -> Result<Period, EntryError> {
    let text = input.trim();

    if let Ok(period) = text.parse::<Period>() {
        return Ok(period);
    }

    let mut words = text.split_whitespace();
    let name = words.next().map(str::to_lowercase);
    let year = words.next().and_then(|y| y.parse::<i32>().ok());
    if let (Some(name), Some(year)) = (name, year) {
        if let Some(index) = MONTH_NAMES.iter().position(|m| *m == name) {
            if let Ok(period) = Period::new(year, index as u32 + 1) {
                return Ok(period);
            }
        }
    }

    Err(EntryError::UnrecognizedMonth(text.to_string()))
}

/// A non-negative finite monetary amount
fn parse_amount(input: &str, field: &'static str) -> Result<f64, EntryError> {
    let text = input.trim();
    let value = text.parse::<f64>().map_err(|_| EntryError::InvalidNumber {
        field,
        input: text.to_string(),
    })?;
    if !value.is_finite() || value < 0.0 {
        return Err(EntryError::NegativeValue { field });
    }
    Ok(value)
}
